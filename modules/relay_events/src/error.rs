// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use relay_utils::error::BoxError;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, EmitError>;

/// Failure raised by a listener during dispatch, carrying the event that
/// was being emitted when it failed.
#[derive(Debug, Error)]
#[error("listener for event \"{event}\" failed: {source}")]
pub struct EmitError {
    event: String,
    source: BoxError,
}

impl EmitError {
    pub(crate) fn new(event: &str, source: BoxError) -> Self {
        Self {
            event: event.to_string(),
            source,
        }
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    /// The error value produced by the failing listener.
    pub fn into_source(self) -> BoxError {
        self.source
    }
}
