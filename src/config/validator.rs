//! Value validators attached to variable descriptors.

use super::error::ConfigError;

/// Validation rule applied to a present environment value.
///
/// Validators both check and normalize: the returned string is what the
/// rest of the program sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// Base-10 signed integer, normalized to canonical form (`"+15"` becomes `"15"`).
    Integer,
    /// `yes` or `no`, case-insensitive, returned unchanged.
    YesNoOrEmpty,
    /// Exact match against a closed set of tags.
    OneOf(&'static [&'static str]),
}

impl Validator {
    /// Validates `value` read from `variable`.
    ///
    /// Empty values are never passed here; the resolver treats them as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the value is rejected.
    pub fn validate(self, variable: &str, value: &str) -> Result<String, ConfigError> {
        match self {
            Self::Integer => value
                .trim()
                .parse::<i64>()
                .map(|n| n.to_string())
                .map_err(|_| ConfigError::invalid(variable, value, "an integer")),
            Self::YesNoOrEmpty => {
                if value.is_empty() || is_yes(value) || value.eq_ignore_ascii_case("no") {
                    Ok(value.to_string())
                } else {
                    Err(ConfigError::invalid(
                        variable,
                        value,
                        "empty, 'yes' or 'no'",
                    ))
                }
            }
            Self::OneOf(tags) => {
                if tags.contains(&value) {
                    Ok(value.to_string())
                } else {
                    Err(ConfigError::invalid(
                        variable,
                        value,
                        format!("one of {}", tags.join(", ")),
                    ))
                }
            }
        }
    }
}

/// Returns true if `value` is `yes`, ignoring ASCII case.
#[must_use]
pub fn is_yes(value: &str) -> bool {
    value.eq_ignore_ascii_case("yes")
}
