//! Audio output sections built from the indexed `OUTPUT_*` variables.

use std::fmt;

use crate::config::{ConfigError, Descriptor, Resolver, defaults, is_yes};
use crate::env::Environment;

use super::catalog;

/// The closed set of MPD output plugins the launcher can configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputType {
    Alsa,
    Pipewire,
    Pulse,
    Null,
    Httpd,
}

const ALSA: &[Descriptor] = &[
    catalog::OUTPUT_DEVICE,
    catalog::OUTPUT_MIXER_TYPE,
    catalog::OUTPUT_MIXER_CONTROL,
    catalog::OUTPUT_MIXER_INDEX,
    catalog::OUTPUT_ALLOWED_FORMATS,
    catalog::OUTPUT_FORMAT,
    catalog::OUTPUT_AUTO_RESAMPLE,
    catalog::OUTPUT_AUTO_CHANNELS,
    catalog::OUTPUT_AUTO_FORMAT,
    catalog::OUTPUT_BUFFER_TIME,
    catalog::OUTPUT_PERIOD_TIME,
    catalog::OUTPUT_CLOSE_ON_PAUSE,
    catalog::OUTPUT_DEFAULT_FORMAT,
    catalog::OUTPUT_STOP_DSD_SILENCE,
    catalog::OUTPUT_THESYCON_DSD_WORKAROUND,
    catalog::OUTPUT_DOP,
    catalog::OUTPUT_INTEGER_UPSAMPLING,
    catalog::OUTPUT_INTEGER_UPSAMPLING_ALLOWED,
];

const PIPEWIRE: &[Descriptor] = &[
    catalog::OUTPUT_TARGET,
    catalog::OUTPUT_REMOTE,
    catalog::OUTPUT_DSD,
];

const PULSE: &[Descriptor] = &[
    catalog::OUTPUT_HOSTNAME,
    catalog::OUTPUT_SINK,
    catalog::OUTPUT_MEDIA_ROLE,
    catalog::OUTPUT_SCALE_FACTOR,
];

const NULL: &[Descriptor] = &[catalog::OUTPUT_SYNC];

const HTTPD: &[Descriptor] = &[
    catalog::OUTPUT_PORT,
    catalog::OUTPUT_BIND_TO_ADDRESS,
    catalog::OUTPUT_DSCP_CLASS,
    catalog::OUTPUT_FORMAT,
    catalog::OUTPUT_ENCODER,
    catalog::OUTPUT_BITRATE,
    catalog::OUTPUT_QUALITY,
    catalog::OUTPUT_MAX_CLIENTS,
    catalog::OUTPUT_GENRE,
    catalog::OUTPUT_WEBSITE,
    catalog::OUTPUT_ALWAYS_ON,
];

impl OutputType {
    /// Every type, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Alsa,
        Self::Pipewire,
        Self::Pulse,
        Self::Null,
        Self::Httpd,
    ];

    /// Accepted `OUTPUT_TYPE` values.
    pub const TAGS: &'static [&'static str] = &["alsa", "pipewire", "pulse", "null", "httpd"];

    /// The plugin name written as the block's `type`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alsa => "alsa",
            Self::Pipewire => "pipewire",
            Self::Pulse => "pulse",
            Self::Null => "null",
            Self::Httpd => "httpd",
        }
    }

    /// Looks up a type by its exact tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }

    /// The ordered property table for this type.
    #[must_use]
    pub const fn properties(self) -> &'static [Descriptor] {
        match self {
            Self::Alsa => ALSA,
            Self::Pipewire => PIPEWIRE,
            Self::Pulse => PULSE,
            Self::Null => NULL,
            Self::Httpd => HTTPD,
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `audio_output` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputBlock {
    /// Index of the variables the block was built from
    pub index: usize,
    /// Output plugin
    pub output_type: OutputType,
    /// Ordered `key "value"` lines, `name` first
    pub properties: Vec<(&'static str, String)>,
}

impl OutputBlock {
    /// Builds the block for `index` once it is known to be created.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the type is unknown or empty,
    /// or if any property fails validation.
    pub fn resolve<E: Environment>(
        resolver: &Resolver<E>,
        index: usize,
    ) -> Result<Self, ConfigError> {
        let output_type = resolve_type(resolver, index)?;

        let mut properties = Vec::new();
        let name = resolver
            .resolve_indexed(&catalog::OUTPUT_NAME, index)?
            .unwrap_or_else(|| format!("output_{index}"));
        properties.push(("name", name));

        if let Some(enabled) = resolver.resolve_indexed(&catalog::OUTPUT_ENABLED, index)? {
            let normalized = if is_yes(&enabled) { "yes" } else { "no" };
            properties.push(("enabled", normalized.to_string()));
        }

        for descriptor in output_type.properties() {
            let Some(key) = descriptor.conf_key_name() else {
                continue;
            };
            if let Some(value) = resolver.resolve_indexed(descriptor, index)? {
                properties.push((key, value));
            }
        }

        Ok(Self {
            index,
            output_type,
            properties,
        })
    }
}

fn resolve_type<E: Environment>(
    resolver: &Resolver<E>,
    index: usize,
) -> Result<OutputType, ConfigError> {
    let descriptor = &catalog::OUTPUT_TYPE;
    let tag = resolver
        .resolve_indexed(descriptor, index)?
        .unwrap_or_default();
    OutputType::from_tag(&tag).ok_or_else(|| {
        ConfigError::invalid(
            descriptor.key(index),
            tag,
            format!("one of {}", OutputType::TAGS.join(", ")),
        )
    })
}

/// Scans all output indices and builds a block for each created output.
///
/// Indices are visited in ascending order; gaps are allowed.
///
/// # Errors
///
/// Returns the first [`ConfigError::InvalidValue`] encountered.
pub fn collect_outputs<E: Environment>(
    resolver: &Resolver<E>,
) -> Result<Vec<OutputBlock>, ConfigError> {
    let mut blocks = Vec::new();
    for index in 0..defaults::MAX_OUTPUTS {
        if !resolver.resolve_indexed_as_bool(&catalog::OUTPUT_CREATE, index)? {
            continue;
        }
        let block = OutputBlock::resolve(resolver, index)?;
        tracing::debug!(
            "Output [{index}] of type [{}] with {} properties",
            block.output_type,
            block.properties.len()
        );
        blocks.push(block);
    }
    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnvironment;

    fn collect(pairs: &[(&str, &str)]) -> Result<Vec<OutputBlock>, ConfigError> {
        let resolver = Resolver::new(pairs.iter().copied().collect::<MapEnvironment>());
        collect_outputs(&resolver)
    }

    fn keys(block: &OutputBlock) -> Vec<&str> {
        block.properties.iter().map(|(k, _)| *k).collect()
    }

    mod types {
        use super::*;

        #[test]
        fn tags_match_variants() {
            let tags: Vec<_> = OutputType::ALL.iter().map(|t| t.as_str()).collect();
            assert_eq!(tags, OutputType::TAGS);
        }

        #[test]
        fn from_tag_is_exact() {
            assert_eq!(OutputType::from_tag("httpd"), Some(OutputType::Httpd));
            assert_eq!(OutputType::from_tag("HTTPD"), None);
            assert_eq!(OutputType::from_tag("jack"), None);
        }

        #[test]
        fn every_property_has_a_conf_key() {
            for output_type in OutputType::ALL {
                for d in output_type.properties() {
                    assert!(d.conf_key_name().is_some(), "{} has no key", d.name);
                }
            }
        }

        #[test]
        fn null_has_only_sync() {
            assert_eq!(OutputType::Null.properties(), &[catalog::OUTPUT_SYNC]);
        }
    }

    mod scanning {
        use super::*;

        #[test]
        fn nothing_created_by_default() {
            assert!(collect(&[]).unwrap().is_empty());
        }

        #[test]
        fn index_zero_uses_bare_names() {
            let blocks = collect(&[("OUTPUT_CREATE", "yes"), ("OUTPUT_DEVICE", "hw:0")]).unwrap();

            assert_eq!(blocks.len(), 1);
            assert_eq!(blocks[0].output_type, OutputType::Alsa);
            assert_eq!(
                blocks[0].properties,
                vec![("name", "output_0".to_string()), ("device", "hw:0".to_string())]
            );
        }

        #[test]
        fn gaps_are_allowed_and_order_is_ascending() {
            let blocks = collect(&[
                ("OUTPUT_CREATE_5", "yes"),
                ("OUTPUT_TYPE_5", "null"),
                ("OUTPUT_CREATE_2", "yes"),
                ("OUTPUT_TYPE_2", "pulse"),
                ("OUTPUT_NAME_2", "Living room"),
            ])
            .unwrap();

            let indices: Vec<_> = blocks.iter().map(|b| b.index).collect();
            assert_eq!(indices, vec![2, 5]);
            assert_eq!(blocks[0].properties[0], ("name", "Living room".to_string()));
            assert_eq!(blocks[1].properties[0], ("name", "output_5".to_string()));
        }

        #[test]
        fn last_index_is_scanned() {
            let blocks = collect(&[("OUTPUT_CREATE_99", "yes")]).unwrap();
            assert_eq!(blocks[0].index, 99);
        }

        #[test]
        fn create_no_skips_the_index() {
            let blocks = collect(&[("OUTPUT_CREATE_1", "no"), ("OUTPUT_TYPE_1", "bogus")]).unwrap();
            assert!(blocks.is_empty());
        }

        #[test]
        fn malformed_create_flag_fails() {
            let err = collect(&[("OUTPUT_CREATE_3", "maybe")]).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidValue { ref variable, .. } if variable == "OUTPUT_CREATE_3")
            );
        }
    }

    mod properties {
        use super::*;

        #[test]
        fn unknown_type_is_rejected() {
            let err = collect(&[("OUTPUT_CREATE_1", "yes"), ("OUTPUT_TYPE_1", "jack")]).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidValue { ref variable, ref value, .. }
                    if variable == "OUTPUT_TYPE_1" && value == "jack")
            );
        }

        #[test]
        fn empty_type_is_rejected() {
            let err = collect(&[("OUTPUT_CREATE", "yes"), ("OUTPUT_TYPE", "")]).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { .. }));
        }

        #[test]
        fn properties_of_other_types_are_ignored() {
            let blocks = collect(&[
                ("OUTPUT_CREATE", "yes"),
                ("OUTPUT_TYPE", "pipewire"),
                ("OUTPUT_DEVICE", "hw:0"),
                ("OUTPUT_TARGET", "sink-1"),
            ])
            .unwrap();

            assert_eq!(keys(&blocks[0]), vec!["name", "target"]);
        }

        #[test]
        fn enabled_is_normalized() {
            let blocks = collect(&[
                ("OUTPUT_CREATE", "yes"),
                ("OUTPUT_ENABLED", "YES"),
                ("OUTPUT_CREATE_1", "yes"),
                ("OUTPUT_ENABLED_1", "off"),
            ])
            .unwrap();

            assert_eq!(blocks[0].properties[1], ("enabled", "yes".to_string()));
            assert_eq!(blocks[1].properties[1], ("enabled", "no".to_string()));
        }

        #[test]
        fn httpd_defaults_and_table_order() {
            let blocks = collect(&[
                ("OUTPUT_CREATE_1", "yes"),
                ("OUTPUT_TYPE_1", "httpd"),
                ("OUTPUT_BITRATE_1", "192"),
                ("OUTPUT_PORT_1", "8000"),
            ])
            .unwrap();

            assert_eq!(
                blocks[0].properties,
                vec![
                    ("name", "output_1".to_string()),
                    ("port", "8000".to_string()),
                    ("encoder", "lame".to_string()),
                    ("bitrate", "192".to_string()),
                    ("website", "yes".to_string()),
                ]
            );
        }

        #[test]
        fn empty_value_drops_a_defaulted_property() {
            let blocks = collect(&[
                ("OUTPUT_CREATE", "yes"),
                ("OUTPUT_TYPE", "httpd"),
                ("OUTPUT_WEBSITE", ""),
            ])
            .unwrap();

            assert_eq!(keys(&blocks[0]), vec!["name", "encoder"]);
        }

        #[test]
        fn yes_no_properties_are_validated() {
            let err = collect(&[("OUTPUT_CREATE", "yes"), ("OUTPUT_DOP", "true")]).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { .. }));
        }
    }
}
