//! Blocking supervision of a child process.
//!
//! ```text
//! STARTING -> RUNNING -> EXITED_OK                     (terminal)
//!                     -> EXITED_FAIL -> RETRY_WAIT -> STARTING
//!                     -> EXITED_FAIL                   (terminal, policy refused)
//! ```

use std::fmt;

use crate::time::{Sleeper, ThreadSleeper};

use super::{CommandLine, CommandRunner, ExitOutcome, ProcessError, RestartPolicy};

/// Supervisor lifecycle states, used for logging transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupervisorState {
    /// About to start the command
    Starting,
    /// Waiting for the child to exit
    Running,
    /// Child exited with code 0
    ExitedOk,
    /// Child exited unsuccessfully
    ExitedFail,
    /// Sleeping before the next attempt
    RetryWait,
}

impl fmt::Display for SupervisorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Starting => "STARTING",
            Self::Running => "RUNNING",
            Self::ExitedOk => "EXITED_OK",
            Self::ExitedFail => "EXITED_FAIL",
            Self::RetryWait => "RETRY_WAIT",
        })
    }
}

/// Result of a supervised run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupervisionReport {
    /// Number of times the command was started
    pub attempts: u32,
    /// Outcome of the final attempt
    pub outcome: ExitOutcome,
}

impl SupervisionReport {
    /// Returns true if the final attempt succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}

/// Runs a command and restarts it on failure according to a [`RestartPolicy`].
///
/// # Type Parameters
///
/// - `R`: How commands are run
/// - `P`: The restart policy
/// - `S`: The sleeper used between attempts (defaults to [`ThreadSleeper`])
#[derive(Debug)]
pub struct Supervisor<R, P, S = ThreadSleeper> {
    runner: R,
    policy: P,
    sleeper: S,
}

impl<R, P> Supervisor<R, P, ThreadSleeper> {
    /// Creates a supervisor that sleeps with [`ThreadSleeper`].
    #[must_use]
    pub const fn new(runner: R, policy: P) -> Self {
        Self {
            runner,
            policy,
            sleeper: ThreadSleeper,
        }
    }
}

impl<R, P, S> Supervisor<R, P, S> {
    /// Sets a custom sleeper for restart delays.
    ///
    /// This is primarily useful for testing to avoid actual delays.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> Supervisor<R, P, S2> {
        Supervisor {
            runner: self.runner,
            policy: self.policy,
            sleeper,
        }
    }

    /// Returns the restart policy.
    #[must_use]
    pub const fn policy(&self) -> &P {
        &self.policy
    }
}

impl<R: CommandRunner, P: RestartPolicy, S: Sleeper> Supervisor<R, P, S> {
    /// Runs `command` until it succeeds or the policy refuses a restart.
    ///
    /// Blocks for the whole lifetime of the loop. Non-zero exits are not
    /// errors; they are reported through [`SupervisionReport::outcome`].
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::Spawn`] if the command cannot be started.
    /// A spawn failure is never retried.
    pub fn run(&self, command: &CommandLine) -> Result<SupervisionReport, ProcessError> {
        let mut attempt: u32 = 0;

        loop {
            attempt = attempt.saturating_add(1);
            transition(SupervisorState::Starting, attempt);
            tracing::info!("Starting attempt {attempt}: {command}");

            transition(SupervisorState::Running, attempt);
            let outcome = self.runner.run(command)?;

            if outcome.is_success() {
                transition(SupervisorState::ExitedOk, attempt);
                return Ok(SupervisionReport {
                    attempts: attempt,
                    outcome,
                });
            }

            transition(SupervisorState::ExitedFail, attempt);
            if !self.policy.should_restart(attempt, &outcome) {
                tracing::warn!("Process failed with {outcome}, not restarting");
                return Ok(SupervisionReport {
                    attempts: attempt,
                    outcome,
                });
            }

            let delay = self.policy.delay();
            tracing::warn!(
                "Process failed with {outcome}, restarting in {}s",
                delay.as_secs()
            );
            transition(SupervisorState::RetryWait, attempt);
            self.sleeper.sleep(delay);
        }
    }
}

/// Runs `command` exactly once, blocking until it exits.
///
/// # Errors
///
/// Returns [`ProcessError::Spawn`] if the command cannot be started.
pub fn run_once<R: CommandRunner>(
    runner: &R,
    command: &CommandLine,
) -> Result<ExitOutcome, ProcessError> {
    tracing::info!("Starting: {command}");
    let outcome = runner.run(command)?;
    if outcome.is_success() {
        tracing::info!("Process exited successfully");
    } else {
        tracing::warn!("Process exited with {outcome}");
    }
    Ok(outcome)
}

fn transition(state: SupervisorState, attempt: u32) {
    tracing::debug!(attempt, "Supervisor state: {state}");
}

#[cfg(test)]
#[path = "supervisor_tests.rs"]
mod tests;
