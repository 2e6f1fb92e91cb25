//! Generic resolution of descriptors against an environment.

use crate::env::Environment;

use super::descriptor::Descriptor;
use super::error::ConfigError;
use super::validator::{Validator, is_yes};

/// Resolves descriptors against an [`Environment`].
///
/// # Precedence
///
/// 1. **Explicit environment value**. An empty value counts as explicit and
///    resolves to absent, which switches off a defaulted setting.
/// 2. **Descriptor default**
/// 3. **Absent**
///
/// Validation runs only when a value is present.
#[derive(Debug, Clone)]
pub struct Resolver<E> {
    env: E,
}

impl<E: Environment> Resolver<E> {
    /// Creates a resolver over the given environment.
    #[must_use]
    pub const fn new(env: E) -> Self {
        Self { env }
    }

    /// Returns the underlying environment.
    #[must_use]
    pub const fn env(&self) -> &E {
        &self.env
    }

    /// Resolves a scalar descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the value fails validation.
    pub fn resolve(&self, descriptor: &Descriptor) -> Result<Option<String>, ConfigError> {
        self.resolve_indexed(descriptor, 0)
    }

    /// Resolves a descriptor for the given index.
    ///
    /// Non-indexed descriptors ignore `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the value is not valid
    /// Unicode or fails validation.
    pub fn resolve_indexed(
        &self,
        descriptor: &Descriptor,
        index: usize,
    ) -> Result<Option<String>, ConfigError> {
        let key = descriptor.key(index);
        let raw = self
            .env
            .var(&key)
            .map_err(|e| {
                ConfigError::invalid(e.key, e.value.to_string_lossy(), "valid Unicode")
            })?
            .or_else(|| descriptor.default.map(str::to_string));

        let Some(value) = raw.filter(|v| !v.is_empty()) else {
            return Ok(None);
        };

        match descriptor.validator {
            Some(validator) => validator.validate(&key, &value).map(Some),
            None => Ok(Some(value)),
        }
    }

    /// Resolves a scalar descriptor as a boolean.
    ///
    /// Only `yes` (any case) is true; absent or other values are false.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the descriptor's validator rejects the value.
    pub fn resolve_as_bool(&self, descriptor: &Descriptor) -> Result<bool, ConfigError> {
        Ok(self.resolve(descriptor)?.is_some_and(|v| is_yes(&v)))
    }

    /// Resolves an indexed descriptor as a boolean.
    ///
    /// Unlike [`resolve_as_bool`](Self::resolve_as_bool), the value must
    /// always be empty, `yes` or `no`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the value is not a yes/no value.
    pub fn resolve_indexed_as_bool(
        &self,
        descriptor: &Descriptor,
        index: usize,
    ) -> Result<bool, ConfigError> {
        let Some(value) = self.resolve_indexed(descriptor, index)? else {
            return Ok(false);
        };
        let value = Validator::YesNoOrEmpty.validate(&descriptor.key(index), &value)?;
        Ok(is_yes(&value))
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
