//! audio-runners: environment-driven launchers for audio daemons
//!
//! Two small programs turn process environment variables into a child
//! process invocation:
//!
//! - `mpd-runner` writes an MPD configuration file and runs MPD once
//! - `sq-runner` runs Squeezelite with flags, restarting it on failure

pub mod app;
pub mod config;
pub mod env;
pub mod mpd;
pub mod process;
pub mod squeezelite;
pub mod time;
