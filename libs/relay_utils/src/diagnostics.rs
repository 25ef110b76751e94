// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use tracing::warn;

/// Receiver for advisory emitter diagnostics. Reports are fire-and-forget
/// and must never affect control flow.
pub trait DiagnosticsSink {
    /// An event's listener count crossed the configured threshold.
    fn excess_listeners(&self, event: &str, count: usize);
}

/// Default sink, reporting through `tracing`.
#[derive(Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn excess_listeners(&self, event: &str, count: usize) {
        warn!("{} listeners assigned for event type {}", count, event);
    }
}
