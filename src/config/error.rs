//! Error types for environment resolution and configuration output.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Every variant is fatal at startup: the launchers report it and exit
/// before any child process is spawned.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment value failed its validator.
    #[error("Invalid value '{value}' for {variable}: expected {expected}")]
    InvalidValue {
        /// Environment key that was looked up (including any index suffix)
        variable: String,
        /// The rejected value
        value: String,
        /// Human-readable description of what was accepted
        expected: String,
    },

    /// A directory had to be derived from the per-user cache while running as root.
    #[error("Cannot derive {variable} when running as root: set it explicitly")]
    PrivilegeError {
        /// Variable that would have been derived
        variable: &'static str,
    },

    /// A value needed to derive a setting is not available.
    #[error("Missing prerequisite: {what}. {hint}")]
    MissingPrerequisite {
        /// What could not be determined
        what: &'static str,
        /// Hint for how to provide it
        hint: &'static str,
    },

    /// A path exists but is not a directory.
    #[error("Path '{}' already exists, but it is not a directory", path.display())]
    NotADirectory {
        /// The offending path
        path: PathBuf,
    },

    /// Failed to create a directory.
    #[error("Failed to create directory '{}': {source}", path.display())]
    CreateDirectory {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a generated configuration file.
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Creates an `InvalidValue` error.
    #[must_use]
    pub fn invalid(
        variable: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            variable: variable.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Creates a `MissingPrerequisite` error.
    #[must_use]
    pub const fn missing(what: &'static str, hint: &'static str) -> Self {
        Self::MissingPrerequisite { what, hint }
    }

    /// Returns true for errors caused by the filesystem rather than by a value.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(
            self,
            Self::CreateDirectory { .. } | Self::FileWrite { .. }
        )
    }
}
