//! Sleep abstraction for testability.
//!
//! The restart loop waits between attempts through the [`Sleeper`] trait so
//! tests can observe requested delays without actually waiting.

use std::time::Duration;

/// Abstraction over blocking sleeps.
///
/// # Example
///
/// ```
/// use audio_runners::time::{InstantSleeper, Sleeper};
/// use std::time::Duration;
///
/// // Returns immediately
/// InstantSleeper.sleep(Duration::from_secs(3600));
/// ```
pub trait Sleeper {
    /// Blocks the current thread for `duration`.
    fn sleep(&self, duration: Duration);
}

impl<S: Sleeper + ?Sized> Sleeper for &S {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration);
    }
}

/// Production sleeper using [`std::thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Sleeper that returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantSleeper;

impl Sleeper for InstantSleeper {
    fn sleep(&self, _duration: Duration) {}
}
