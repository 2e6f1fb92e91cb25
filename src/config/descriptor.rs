//! Variable descriptors: the data that drives resolution.

use std::borrow::Cow;

use super::validator::Validator;

/// Where a resolved value ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A `key "value"` line in a generated configuration file.
    ConfKey(&'static str),
    /// A bare command-line switch, appended when the value is `yes`.
    Switch(&'static str),
    /// A command-line flag followed by the value.
    Value {
        /// The flag token, e.g. `-o`
        flag: &'static str,
        /// Whether the value is shown in double quotes when the command is rendered
        quoted: bool,
    },
}

/// Immutable description of one configurable environment variable.
///
/// Catalogs are built from `const` descriptors using the builder methods:
///
/// ```
/// use audio_runners::config::{Descriptor, Validator};
///
/// const PORT: Descriptor = Descriptor::new("MPD_PORT")
///     .with_default("6600")
///     .with_validator(Validator::Integer)
///     .conf_key("port");
///
/// assert_eq!(PORT.key(0), "MPD_PORT");
/// assert_eq!(PORT.default, Some("6600"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    /// Environment key (the base key for indexed variables)
    pub name: &'static str,
    /// Value used when the variable is not set
    pub default: Option<&'static str>,
    /// Validator applied to present values
    pub validator: Option<Validator>,
    /// Whether the key is suffixed with `_<index>` for index > 0
    pub indexed: bool,
    /// Output mapping
    pub target: Option<Target>,
}

impl Descriptor {
    /// Creates a descriptor with no default, validator or target.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            default: None,
            validator: None,
            indexed: false,
            target: None,
        }
    }

    /// Creates an indexed descriptor.
    #[must_use]
    pub const fn indexed(name: &'static str) -> Self {
        let mut descriptor = Self::new(name);
        descriptor.indexed = true;
        descriptor
    }

    /// Sets the default value.
    #[must_use]
    pub const fn with_default(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }

    /// Sets the validator.
    #[must_use]
    pub const fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Maps the value to a configuration file key.
    #[must_use]
    pub const fn conf_key(mut self, key: &'static str) -> Self {
        self.target = Some(Target::ConfKey(key));
        self
    }

    /// Maps the value to a boolean command-line switch.
    ///
    /// Also installs the yes/no validator.
    #[must_use]
    pub const fn switch(mut self, token: &'static str) -> Self {
        self.target = Some(Target::Switch(token));
        self.validator = Some(Validator::YesNoOrEmpty);
        self
    }

    /// Maps the value to a `flag value` pair.
    #[must_use]
    pub const fn flag(mut self, flag: &'static str) -> Self {
        self.target = Some(Target::Value {
            flag,
            quoted: false,
        });
        self
    }

    /// Maps the value to a `flag "value"` pair.
    #[must_use]
    pub const fn quoted_flag(mut self, flag: &'static str) -> Self {
        self.target = Some(Target::Value { flag, quoted: true });
        self
    }

    /// Returns the configuration file key, if mapped to one.
    #[must_use]
    pub const fn conf_key_name(&self) -> Option<&'static str> {
        match self.target {
            Some(Target::ConfKey(key)) => Some(key),
            _ => None,
        }
    }

    /// Returns the environment key to look up for `index`.
    ///
    /// Index 0 and non-indexed descriptors use the bare name.
    #[must_use]
    pub fn key(&self, index: usize) -> Cow<'static, str> {
        if self.indexed && index > 0 {
            Cow::Owned(format!("{}_{index}", self.name))
        } else {
            Cow::Borrowed(self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_has_no_extras() {
        let d = Descriptor::new("X");
        assert_eq!(d.default, None);
        assert_eq!(d.validator, None);
        assert!(!d.indexed);
        assert_eq!(d.target, None);
    }

    #[test]
    fn indexed_key_uses_bare_name_for_zero() {
        let d = Descriptor::indexed("OUTPUT_NAME");
        assert_eq!(d.key(0), "OUTPUT_NAME");
        assert_eq!(d.key(1), "OUTPUT_NAME_1");
        assert_eq!(d.key(42), "OUTPUT_NAME_42");
    }

    #[test]
    fn non_indexed_key_ignores_index() {
        let d = Descriptor::new("MPD_PORT");
        assert_eq!(d.key(3), "MPD_PORT");
    }

    #[test]
    fn switch_installs_yes_no_validator() {
        let d = Descriptor::new("X").switch("-X");
        assert_eq!(d.target, Some(Target::Switch("-X")));
        assert_eq!(d.validator, Some(Validator::YesNoOrEmpty));
    }

    #[test]
    fn flag_targets() {
        assert_eq!(
            Descriptor::new("A").flag("-o").target,
            Some(Target::Value {
                flag: "-o",
                quoted: false
            })
        );
        assert_eq!(
            Descriptor::new("A").quoted_flag("-n").target,
            Some(Target::Value {
                flag: "-n",
                quoted: true
            })
        );
    }

    #[test]
    fn conf_key_name_only_for_conf_targets() {
        assert_eq!(Descriptor::new("A").conf_key("port").conf_key_name(), Some("port"));
        assert_eq!(Descriptor::new("A").flag("-p").conf_key_name(), None);
        assert_eq!(Descriptor::new("A").conf_key_name(), None);
    }
}
