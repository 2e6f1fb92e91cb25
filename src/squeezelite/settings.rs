//! Fully resolved Squeezelite launcher settings.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::config::{ConfigError, Resolver, append_flags, defaults};
use crate::env::Environment;
use crate::process::{CommandLine, RestartOnFailure};

use super::catalog;

/// The command to supervise and how to restart it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqueezeliteSettings {
    pub command: CommandLine,
    pub restart: RestartOnFailure,
}

impl fmt::Display for SqueezeliteSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SqueezeliteSettings {{ binary: {}, options: {}, restart_on_fail: {}, restart_delay: {}s }}",
            self.command.program(),
            self.command.args().len(),
            self.restart.enabled,
            self.restart.delay.as_secs(),
        )
    }
}

impl SqueezeliteSettings {
    /// Resolves the binary, command-line options and restart policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if any value fails validation.
    pub fn resolve<E: Environment>(resolver: &Resolver<E>) -> Result<Self, ConfigError> {
        Self::resolve_with_default_binary(resolver, Path::new(defaults::SQUEEZELITE_BINARY_PATH))
    }

    /// Like [`resolve`](Self::resolve), with `default_binary` used when it
    /// is a file and `SQUEEZELITE_BINARY` is unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if any value fails validation.
    pub fn resolve_with_default_binary<E: Environment>(
        resolver: &Resolver<E>,
        default_binary: &Path,
    ) -> Result<Self, ConfigError> {
        let binary = resolve_binary(resolver, default_binary)?;
        tracing::info!("squeezelite runner is using [{binary}]");

        let mut command = CommandLine::new(binary);
        append_flags(resolver, &mut command, catalog::OPTIONS)?;

        Ok(Self {
            command,
            restart: restart_policy(resolver)?,
        })
    }
}

/// `SQUEEZELITE_BINARY`, else `default_binary` if it is a file, else a `PATH` lookup.
fn resolve_binary<E: Environment>(
    resolver: &Resolver<E>,
    default_binary: &Path,
) -> Result<String, ConfigError> {
    if let Some(binary) = resolver.resolve(&catalog::SQUEEZELITE_BINARY)? {
        return Ok(binary);
    }
    if default_binary.is_file() {
        let path = std::fs::canonicalize(default_binary).unwrap_or_else(|_| default_binary.to_path_buf());
        return Ok(path.to_string_lossy().into_owned());
    }
    Ok(defaults::SQUEEZELITE_BINARY_NAME.to_string())
}

/// Restart policy from `SQUEEZELITE_RESTART_ON_FAIL` and `SQUEEZELITE_RESTART_DELAY`.
fn restart_policy<E: Environment>(resolver: &Resolver<E>) -> Result<RestartOnFailure, ConfigError> {
    let enabled = resolver.resolve_as_bool(&catalog::SQUEEZELITE_RESTART_ON_FAIL)?;

    let descriptor = &catalog::SQUEEZELITE_RESTART_DELAY;
    let delay = match resolver.resolve(descriptor)? {
        Some(value) => value
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| {
                ConfigError::invalid(descriptor.name, value, "a non-negative number of seconds")
            })?,
        None => defaults::restart_delay(),
    };

    Ok(RestartOnFailure::new(enabled, delay))
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
