//! Default values shared by the launchers.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.
//! Per-variable defaults live with their descriptors in each catalog.

use std::time::Duration;

/// Number of indexed output sections scanned (`OUTPUT_*`, `OUTPUT_*_1` … `OUTPUT_*_99`).
pub const MAX_OUTPUTS: usize = 100;

/// Squeezelite binary used when `SQUEEZELITE_BINARY` is unset and it exists.
pub const SQUEEZELITE_BINARY_PATH: &str = "/usr/bin/squeezelite";

/// Squeezelite binary looked up on `PATH` as the last resort.
pub const SQUEEZELITE_BINARY_NAME: &str = "squeezelite";

/// Default delay before restarting a failed child, in seconds.
pub const RESTART_DELAY_SECS: u64 = 3;

/// Default restart delay as Duration.
#[must_use]
pub const fn restart_delay() -> Duration {
    Duration::from_secs(RESTART_DELAY_SECS)
}
