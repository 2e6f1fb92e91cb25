//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! shared by the launcher entry points.

use std::process::ExitCode;

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, Descriptor, describe_catalog};
use crate::process::{ExitOutcome, ProcessError};

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    use crate::process::ExitOutcome;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid value, missing directory, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - the child could not be started.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    #[must_use]
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }

    /// Forwards the child's exit status (128 + signal for signals).
    #[must_use]
    pub fn from_outcome(outcome: &ExitOutcome) -> ExitCode {
        ExitCode::from(outcome.exit_code())
    }
}

/// Prints the configuration error and a hint for fixing it.
pub fn report_config_error(program: &str, error: &ConfigError) {
    eprintln!("Configuration error: {error}");
    print_config_hint(program, error);
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(program: &str, error: &ConfigError) {
    match error {
        ConfigError::InvalidValue { .. } => {
            eprintln!("\nRun '{program} vars' to list the variables and their defaults.");
        }
        ConfigError::PrivilegeError { .. } => {
            eprintln!("\nWhen running as root, every directory must be set explicitly.");
        }
        _ => {}
    }
}

/// Maps the result of running the child to the process exit code.
pub fn finish(result: Result<ExitOutcome, ProcessError>) -> ExitCode {
    match result {
        Ok(outcome) => exit_code::from_outcome(&outcome),
        Err(e) => {
            tracing::error!("Application error: {e}");
            exit_code::runtime_error()
        }
    }
}

/// Handles the `vars` subcommand.
pub fn print_vars(catalog: &[Descriptor]) -> ExitCode {
    print!("{}", describe_catalog(catalog));
    exit_code::SUCCESS
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(exit_code::SUCCESS, ExitCode::from(0));
        assert_eq!(exit_code::CONFIG_ERROR, ExitCode::from(1));
        assert_eq!(exit_code::runtime_error(), ExitCode::from(2));
    }

    #[test]
    fn child_status_is_forwarded() {
        assert_eq!(exit_code::from_outcome(&ExitOutcome::code(3)), ExitCode::from(3));
        assert_eq!(exit_code::from_outcome(&ExitOutcome::signaled(15)), ExitCode::from(143));
    }

    #[test]
    fn spawn_failure_is_runtime_error() {
        let error = ProcessError::Spawn {
            program: "mpd".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(finish(Err(error)), exit_code::runtime_error());
    }

    #[test]
    fn successful_child_is_success() {
        assert_eq!(finish(Ok(ExitOutcome::SUCCESS)), exit_code::SUCCESS);
    }
}
