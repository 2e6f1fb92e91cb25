//! Environment variable access.
//!
//! The launchers read all of their configuration from the process
//! environment. Reads go through the [`Environment`] trait so resolution
//! can be exercised against an in-memory map instead of the real process
//! environment.

use std::collections::HashMap;
use std::env::VarError;
use std::ffi::OsString;

use thiserror::Error;

/// A variable is set to a value that is not valid Unicode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{key} is not valid Unicode")]
pub struct NotUnicode {
    /// The variable that was read
    pub key: String,
    /// The raw value
    pub value: OsString,
}

/// Source of environment variable values.
pub trait Environment {
    /// Returns the value of `key`, or `None` if it is not set.
    ///
    /// A variable set to the empty string returns `Some("")`.
    ///
    /// # Errors
    ///
    /// Returns [`NotUnicode`] if the value is set but is not valid Unicode.
    fn var(&self, key: &str) -> Result<Option<String>, NotUnicode>;
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, key: &str) -> Result<Option<String>, NotUnicode> {
        (**self).var(key)
    }
}

/// Reads from the environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Result<Option<String>, NotUnicode> {
        match std::env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(value)) => Err(NotUnicode {
                key: key.to_string(),
                value,
            }),
        }
    }
}

/// In-memory environment.
///
/// # Example
///
/// ```
/// use audio_runners::env::{Environment, MapEnvironment};
///
/// let env = MapEnvironment::new().with("INSTANCE_NAME", "living-room");
/// assert_eq!(env.var("INSTANCE_NAME").unwrap().as_deref(), Some("living-room"));
/// assert_eq!(env.var("MPD_PORT").unwrap(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
}

impl MapEnvironment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any previous value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets `key` to `value` in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Removes `key`.
    pub fn remove(&mut self, key: &str) {
        self.vars.remove(key);
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnvironment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Environment for MapEnvironment {
    fn var(&self, key: &str) -> Result<Option<String>, NotUnicode> {
        Ok(self.vars.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_environment_returns_set_values() {
        let env = MapEnvironment::new().with("A", "1").with("B", "");

        assert_eq!(env.var("A").unwrap().as_deref(), Some("1"));
        assert_eq!(env.var("B").unwrap().as_deref(), Some(""));
        assert_eq!(env.var("C").unwrap(), None);
    }

    #[test]
    fn map_environment_with_replaces_value() {
        let env = MapEnvironment::new().with("A", "1").with("A", "2");
        assert_eq!(env.var("A").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn map_environment_remove_unsets_value() {
        let mut env = MapEnvironment::new().with("A", "1");
        env.remove("A");
        assert_eq!(env.var("A").unwrap(), None);
    }

    #[test]
    fn map_environment_collects_from_pairs() {
        let env: MapEnvironment = [("X", "x"), ("Y", "y")].into_iter().collect();
        assert_eq!(env.var("X").unwrap().as_deref(), Some("x"));
        assert_eq!(env.var("Y").unwrap().as_deref(), Some("y"));
    }

    #[test]
    fn environment_is_implemented_for_references() {
        fn lookup(env: impl Environment) -> Option<String> {
            env.var("A").unwrap()
        }

        let env = MapEnvironment::new().with("A", "1");
        assert_eq!(lookup(&env).as_deref(), Some("1"));
    }

    #[test]
    fn process_environment_reads_path() {
        // PATH is set in every reasonable test environment
        assert!(ProcessEnvironment.var("PATH").unwrap().is_some());
    }

    #[test]
    fn process_environment_returns_none_for_unset() {
        assert_eq!(
            ProcessEnvironment.var("AUDIO_RUNNERS_SURELY_UNSET_VARIABLE"),
            Ok(None)
        );
    }
}
