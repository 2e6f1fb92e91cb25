//! Running a command line to completion.

use std::fmt;
use std::process::ExitStatus;

use super::{CommandLine, ProcessError};

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    /// Exit code, if the child exited normally
    pub code: Option<i32>,
    /// Terminating signal, if the child was killed by one
    pub signal: Option<i32>,
}

impl ExitOutcome {
    /// Exit code 0.
    pub const SUCCESS: Self = Self::code(0);

    /// An outcome with the given exit code.
    #[must_use]
    pub const fn code(code: i32) -> Self {
        Self {
            code: Some(code),
            signal: None,
        }
    }

    /// An outcome for a child terminated by `signal`.
    #[must_use]
    pub const fn signaled(signal: i32) -> Self {
        Self {
            code: None,
            signal: Some(signal),
        }
    }

    /// Returns true if the child exited with code 0.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.code, Some(0))
    }

    /// Maps the outcome to a process exit code for the launcher itself.
    ///
    /// Exit codes are truncated to 8 bits; signals map to `128 + signal`;
    /// anything else maps to 1.
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub const fn exit_code(&self) -> u8 {
        match (self.code, self.signal) {
            (Some(code), _) => (code & 0xff) as u8,
            (None, Some(signal)) => ((128 + signal) & 0xff) as u8,
            (None, None) => 1,
        }
    }
}

impl From<ExitStatus> for ExitOutcome {
    fn from(status: ExitStatus) -> Self {
        #[cfg(unix)]
        let signal = std::os::unix::process::ExitStatusExt::signal(&status);
        #[cfg(not(unix))]
        let signal = None;

        Self {
            code: status.code(),
            signal,
        }
    }
}

impl fmt::Display for ExitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code, self.signal) {
            (Some(code), _) => write!(f, "exit code {code}"),
            (None, Some(signal)) => write!(f, "signal {signal}"),
            (None, None) => f.write_str("unknown status"),
        }
    }
}

/// Runs a command line and waits for it to finish.
///
/// Abstracted so the supervisor can be driven by scripted outcomes in tests.
pub trait CommandRunner {
    /// Runs `command` to completion.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::Spawn`] if the process cannot be started.
    fn run(&self, command: &CommandLine) -> Result<ExitOutcome, ProcessError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, command: &CommandLine) -> Result<ExitOutcome, ProcessError> {
        (**self).run(command)
    }
}

/// Runs commands as real child processes, inheriting stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &CommandLine) -> Result<ExitOutcome, ProcessError> {
        let status = command
            .to_command()
            .status()
            .map_err(|source| ProcessError::Spawn {
                program: command.program().to_string(),
                source,
            })?;
        Ok(status.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod exit_outcome {
        use super::*;

        #[test]
        fn success_is_code_zero() {
            assert!(ExitOutcome::SUCCESS.is_success());
            assert!(!ExitOutcome::code(1).is_success());
            assert!(!ExitOutcome::signaled(9).is_success());
        }

        #[test]
        fn exit_code_forwards_child_code() {
            assert_eq!(ExitOutcome::code(0).exit_code(), 0);
            assert_eq!(ExitOutcome::code(3).exit_code(), 3);
            assert_eq!(ExitOutcome::code(256 + 7).exit_code(), 7);
        }

        #[test]
        fn exit_code_maps_signal() {
            assert_eq!(ExitOutcome::signaled(15).exit_code(), 143);
        }

        #[test]
        fn exit_code_defaults_to_failure() {
            let outcome = ExitOutcome {
                code: None,
                signal: None,
            };
            assert_eq!(outcome.exit_code(), 1);
        }

        #[test]
        fn display_describes_outcome() {
            assert_eq!(ExitOutcome::code(2).to_string(), "exit code 2");
            assert_eq!(ExitOutcome::signaled(9).to_string(), "signal 9");
        }
    }

    #[cfg(unix)]
    mod system_runner {
        use super::*;

        fn shell(script: &str) -> CommandLine {
            let mut cmd = CommandLine::new("sh");
            cmd.push("-c").push(script);
            cmd
        }

        #[test]
        fn reports_success() {
            let outcome = SystemRunner.run(&shell("exit 0")).unwrap();
            assert!(outcome.is_success());
        }

        #[test]
        fn reports_exit_code() {
            let outcome = SystemRunner.run(&shell("exit 3")).unwrap();
            assert_eq!(outcome, ExitOutcome::code(3));
        }

        #[test]
        fn reports_signal() {
            let outcome = SystemRunner.run(&shell("kill -TERM $$")).unwrap();
            assert_eq!(outcome.signal, Some(15));
            assert_eq!(outcome.code, None);
        }

        #[test]
        fn missing_program_is_spawn_error() {
            let cmd = CommandLine::new("/nonexistent/audio-runners/binary");
            let err = SystemRunner.run(&cmd).unwrap_err();
            assert!(matches!(err, ProcessError::Spawn { ref program, .. } if program == cmd.program()));
        }
    }
}
