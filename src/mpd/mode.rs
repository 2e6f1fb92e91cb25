//! How MPD is asked to run.

use std::fmt;

/// MPD process mode, from `MPD_RUNNING_MODE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunningMode {
    /// Stay in the foreground
    #[default]
    NoDaemon,
    /// Run under systemd supervision
    Systemd,
    /// Fork into the background
    Daemon,
}

impl RunningMode {
    /// Accepted `MPD_RUNNING_MODE` values.
    pub const TAGS: &'static [&'static str] = &["no-daemon", "systemd", "daemon"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoDaemon => "no-daemon",
            Self::Systemd => "systemd",
            Self::Daemon => "daemon",
        }
    }

    /// Looks up a mode by its exact tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        [Self::NoDaemon, Self::Systemd, Self::Daemon]
            .into_iter()
            .find(|m| m.as_str() == tag)
    }

    /// Command-line switch passed to MPD, if any.
    #[must_use]
    pub const fn switch(self) -> Option<&'static str> {
        match self {
            Self::NoDaemon => Some("--no-daemon"),
            Self::Systemd => Some("--systemd"),
            Self::Daemon => None,
        }
    }
}

impl fmt::Display for RunningMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
