// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for notification configuration.
//!
//! This module serves as the single source of truth for default values
//! used when a notification leaves an option unset and no configuration
//! file overrides it.

// ==========================================================================
// Lifecycle Defaults
// ==========================================================================

/// Default placement key for new notifications.
pub const DEFAULT_PLACEMENT: &str = "right-top";

/// Whether notifications show a close button by default.
pub const DEFAULT_CLOSABLE: bool = true;

/// Whether notifications dismiss themselves by default.
pub const DEFAULT_AUTO_CLOSE: bool = true;

/// Default time a notification stays visible before auto-dismiss (ms).
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// Maximum accepted auto-dismiss duration from a config file (ms).
pub const MAX_DURATION_MS: u64 = 600_000;

/// Delay between hiding a dismissed notification and destroying it (ms).
///
/// Reserved for the exit transition of the rendered toast.
pub const DEFAULT_EXIT_DELAY_MS: u64 = 300;

/// Maximum accepted exit delay from a config file (ms).
pub const MAX_EXIT_DELAY_MS: u64 = 5000;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Default extra vertical offset of a stack, in logical pixels.
pub const DEFAULT_VERTICAL_OFFSET: i32 = 0;

// ==========================================================================
// Rendering Defaults
// ==========================================================================

/// Interval of the UI tick that drives notification timers (ms).
pub const TICK_INTERVAL_MS: u64 = 50;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::Placement;

    #[test]
    fn default_placement_is_a_known_key() {
        assert!(DEFAULT_PLACEMENT.parse::<Placement>().is_ok());
    }

    #[test]
    fn bounds_contain_defaults() {
        assert!(DEFAULT_DURATION_MS <= MAX_DURATION_MS);
        assert!(DEFAULT_EXIT_DELAY_MS <= MAX_EXIT_DELAY_MS);
    }

    #[test]
    fn tick_is_finer_than_exit_delay() {
        assert!(TICK_INTERVAL_MS < DEFAULT_EXIT_DELAY_MS);
    }
}
