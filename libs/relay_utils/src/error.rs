// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::{error::Error, fmt};

/// Error value produced by a listener callback.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Plain message error for callbacks that fail without a richer error value.
#[derive(Debug)]
pub struct MessageError(String);

impl MessageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for MessageError {}

pub fn msg(message: impl Into<String>) -> BoxError {
    Box::new(MessageError::new(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_error_displays_its_message() {
        let err = msg("connection lost");
        assert_eq!(err.to_string(), "connection lost");
    }
}
