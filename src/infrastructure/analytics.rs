// SPDX-License-Identifier: MPL-2.0
//! Analytics adapter that records events through `tracing`.

use crate::application::port::Analytics;

/// Target used for analytics events, so they can be filtered with
/// `RUST_LOG=analytics=info`.
pub const ANALYTICS_TARGET: &str = "analytics";

/// Writes every analytics event as an `info` log record.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAnalytics;

impl Analytics for TracingAnalytics {
    fn log_event(&self, name: &str, payload: &str) {
        tracing::info!(target: ANALYTICS_TARGET, event = name, payload, "analytics event");
    }
}
