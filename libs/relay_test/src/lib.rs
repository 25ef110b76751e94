// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::{cell::RefCell, rc::Rc};

use relay_utils::{
    callable::Listener, diagnostics::DiagnosticsSink, error::msg, value::Value,
};

/// Records listener invocations in order, tagged per listener.
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<(String, Vec<Value>)>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A listener that records its invocations under `tag`.
    pub fn listener(&self, tag: &str) -> Listener {
        let calls = self.calls.clone();
        let tag = tag.to_string();
        Listener::new(move |args| {
            calls.borrow_mut().push((tag.clone(), args.to_vec()));
            Ok(())
        })
    }

    pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.borrow().clone()
    }

    /// Invocation tags in order.
    pub fn tags(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|(tag, _)| tag.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

/// Captures diagnostics reports for assertions.
#[derive(Clone, Default)]
pub struct WarningLog {
    entries: Rc<RefCell<Vec<(String, usize)>>>,
}

impl WarningLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(String, usize)> {
        self.entries.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl DiagnosticsSink for WarningLog {
    fn excess_listeners(&self, event: &str, count: usize) {
        self.entries.borrow_mut().push((event.to_string(), count));
    }
}

/// A listener that always fails with `message`.
pub fn failing_listener(message: &str) -> Listener {
    let message = message.to_string();
    Listener::new(move |_| Err(msg(message.clone())))
}
