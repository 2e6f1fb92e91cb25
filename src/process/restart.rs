//! Restart policies for supervised child processes.

use std::time::Duration;

use super::ExitOutcome;

/// Decides whether a failed child is started again.
///
/// The supervisor consults the policy after every failed attempt, so a
/// policy whose answer changes over time stops the loop at the next failure.
pub trait RestartPolicy {
    /// Returns true if the command should be started again.
    ///
    /// # Arguments
    ///
    /// * `attempt` - The attempt that just failed (1 = first run)
    /// * `outcome` - How that attempt ended
    fn should_restart(&self, attempt: u32, outcome: &ExitOutcome) -> bool;

    /// Delay before the next attempt.
    fn delay(&self) -> Duration;
}

impl<P: RestartPolicy + ?Sized> RestartPolicy for &P {
    fn should_restart(&self, attempt: u32, outcome: &ExitOutcome) -> bool {
        (**self).should_restart(attempt, outcome)
    }

    fn delay(&self) -> Duration {
        (**self).delay()
    }
}

/// Fixed-delay, unbounded restart on failure.
///
/// There is no attempt limit and no backoff: while `enabled`, every failure
/// is followed by the same delay and another attempt.
///
/// # Example
///
/// ```
/// use audio_runners::process::{ExitOutcome, RestartOnFailure, RestartPolicy};
/// use std::time::Duration;
///
/// let policy = RestartOnFailure::new(true, Duration::from_secs(3));
/// assert!(policy.should_restart(1_000, &ExitOutcome::code(1)));
/// assert_eq!(policy.delay(), Duration::from_secs(3));
///
/// let never = RestartOnFailure::disabled();
/// assert!(!never.should_restart(1, &ExitOutcome::code(1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestartOnFailure {
    /// Whether failures are restarted at all
    pub enabled: bool,
    /// Delay between a failure and the next attempt
    pub delay: Duration,
}

impl RestartOnFailure {
    /// Creates a policy.
    #[must_use]
    pub const fn new(enabled: bool, delay: Duration) -> Self {
        Self { enabled, delay }
    }

    /// A policy that never restarts.
    #[must_use]
    pub const fn disabled() -> Self {
        Self::new(false, Duration::ZERO)
    }
}

impl RestartPolicy for RestartOnFailure {
    fn should_restart(&self, _attempt: u32, outcome: &ExitOutcome) -> bool {
        self.enabled && !outcome.is_success()
    }

    fn delay(&self) -> Duration {
        self.delay
    }
}
