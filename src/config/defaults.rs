// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and timing constants.

// ==========================================================================
// Analytics
// ==========================================================================

/// Usage events are logged unless the user opts out.
pub const DEFAULT_ANALYTICS_ENABLED: bool = true;

// ==========================================================================
// Window
// ==========================================================================

pub const DEFAULT_WINDOW_WIDTH: f32 = 960.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;

// ==========================================================================
// Notifications
// ==========================================================================

/// Interval of the timer driving toast auto-dismiss (in milliseconds).
pub const NOTIFICATION_TICK_MS: u64 = 250;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_is_well_below_shortest_toast() {
        // Success toasts last 3s; ticking slower would make them linger.
        assert!(NOTIFICATION_TICK_MS < 1000);
    }
}
