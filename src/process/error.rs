//! Error types for child process execution.

use thiserror::Error;

/// Error type for running child processes.
///
/// A child that runs and exits non-zero is not an error; it is reported as
/// an [`ExitOutcome`](super::ExitOutcome).
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The child process could not be started.
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        /// Program that was being started
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
