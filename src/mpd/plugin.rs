//! Input and decoder plugin sections.

use std::fmt;

use crate::config::{ConfigError, Descriptor, Resolver};
use crate::env::Environment;

use super::catalog;

/// Plugin section kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginKind {
    Input,
    Decoder,
}

impl PluginKind {
    /// Section name in the configuration file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Decoder => "decoder",
        }
    }
}

impl fmt::Display for PluginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A plugin the launcher knows how to emit, with its two switches.
#[derive(Debug, Clone, Copy)]
pub struct PluginSpec {
    pub kind: PluginKind,
    pub name: &'static str,
    /// Whether the section is written at all
    pub create: Descriptor,
    /// Value of the section's `enabled` line
    pub enabled: Descriptor,
}

/// Known plugins, in emission order.
pub const PLUGINS: &[PluginSpec] = &[
    PluginSpec {
        kind: PluginKind::Input,
        name: "curl",
        create: catalog::INPUT_CURL_CREATE,
        enabled: catalog::INPUT_CURL_ENABLED,
    },
    PluginSpec {
        kind: PluginKind::Decoder,
        name: "opus",
        create: catalog::DECODER_OPUS_CREATE,
        enabled: catalog::DECODER_OPUS_ENABLED,
    },
    PluginSpec {
        kind: PluginKind::Decoder,
        name: "ffmpeg",
        create: catalog::DECODER_FFMPEG_CREATE,
        enabled: catalog::DECODER_FFMPEG_ENABLED,
    },
    PluginSpec {
        kind: PluginKind::Decoder,
        name: "hdcd",
        create: catalog::DECODER_HDCD_CREATE,
        enabled: catalog::DECODER_HDCD_ENABLED,
    },
    PluginSpec {
        kind: PluginKind::Decoder,
        name: "wildmidi",
        create: catalog::DECODER_WILDMIDI_CREATE,
        enabled: catalog::DECODER_WILDMIDI_ENABLED,
    },
];

/// A plugin section to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginBlock {
    pub kind: PluginKind,
    pub name: &'static str,
    pub enabled: bool,
}

/// Resolves the plugin sections to write, skipping plugins that are not created.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if a switch is not a yes/no value.
pub fn collect_plugins<E: Environment>(
    resolver: &Resolver<E>,
) -> Result<Vec<PluginBlock>, ConfigError> {
    let mut blocks = Vec::new();
    for spec in PLUGINS {
        if !resolver.resolve_as_bool(&spec.create)? {
            continue;
        }
        blocks.push(PluginBlock {
            kind: spec.kind,
            name: spec.name,
            enabled: resolver.resolve_as_bool(&spec.enabled)?,
        });
    }
    Ok(blocks)
}
