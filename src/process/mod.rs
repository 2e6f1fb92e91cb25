//! Child process layer.
//!
//! This module provides:
//! - Command lines with display quoting ([`CommandLine`])
//! - Running commands to completion ([`CommandRunner`], [`SystemRunner`])
//! - Exit status reporting ([`ExitOutcome`])
//! - Restart policies ([`RestartPolicy`], [`RestartOnFailure`])
//! - The restart-on-failure loop ([`Supervisor`]) and single runs ([`run_once`])

mod command;
mod error;
mod restart;
mod runner;
mod supervisor;

pub use command::{Argument, CommandLine};
pub use error::ProcessError;
pub use restart::{RestartOnFailure, RestartPolicy};
pub use runner::{CommandRunner, ExitOutcome, SystemRunner};
pub use supervisor::{SupervisionReport, Supervisor, SupervisorState, run_once};
