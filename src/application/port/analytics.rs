// SPDX-License-Identifier: MPL-2.0
//! Analytics port.

/// Port for recording usage events.
pub trait Analytics: Send + Sync {
    /// Records an event. `payload` is free-form (e.g. the URL being added).
    fn log_event(&self, name: &str, payload: &str);
}

/// Analytics sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAnalytics;

impl Analytics for NoopAnalytics {
    fn log_event(&self, _name: &str, _payload: &str) {}
}
