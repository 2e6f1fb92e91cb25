//! Fully resolved MPD launcher settings.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::{ConfigError, Descriptor, DirectoryResolver, Host, Resolver};
use crate::env::Environment;

use super::catalog;
use super::mode::RunningMode;
use super::output::{OutputBlock, collect_outputs};
use super::plugin::{PluginBlock, collect_plugins};

/// Everything needed to write the configuration file and start MPD.
///
/// Optional fields are `None` when the setting is disabled or resolves to
/// absent; such settings are omitted from the generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MpdSettings {
    /// Where the configuration file is written
    pub config_file: PathBuf,
    /// MPD executable
    pub binary: String,
    pub running_mode: RunningMode,

    pub music_directory: PathBuf,
    pub playlist_directory: PathBuf,
    pub db_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub pid_file: Option<String>,
    pub state_file: Option<PathBuf>,
    /// Only set when a state file is written
    pub state_file_interval: Option<String>,
    pub sticker_file: Option<PathBuf>,

    /// One `bind_to_address` line each, in input order
    pub bind_addresses: Vec<String>,
    pub port: Option<String>,
    pub log_level: Option<String>,
    pub restore_paused: Option<String>,

    pub plugins: Vec<PluginBlock>,
    pub outputs: Vec<OutputBlock>,

    pub samplerate_converter: Option<String>,
    pub filesystem_charset: Option<String>,
}

impl fmt::Display for MpdSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outputs: Vec<_> = self
            .outputs
            .iter()
            .map(|o| format!("{}#{}", o.output_type, o.index))
            .collect();

        write!(
            f,
            "MpdSettings {{ config_file: {}, binary: {}, mode: {}, music_directory: {}, \
             bind: [{}], port: {}, plugins: {}, outputs: [{}] }}",
            self.config_file.display(),
            self.binary,
            self.running_mode,
            self.music_directory.display(),
            self.bind_addresses.join(", "),
            self.port.as_deref().unwrap_or("default"),
            self.plugins.len(),
            outputs.join(", "),
        )
    }
}

impl MpdSettings {
    /// Resolves every MPD setting, creating directories as needed.
    ///
    /// The log directory is only resolved (and created) when a log file is
    /// written.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] encountered: an invalid value, a
    /// directory that cannot be derived or created, or a missing file name.
    pub fn resolve<E: Environment>(
        resolver: &Resolver<E>,
        host: &Host,
    ) -> Result<Self, ConfigError> {
        let directories = DirectoryResolver::new(resolver, host, catalog::CACHE_LAYOUT);

        let config_directory = directories.directory(&catalog::CONFIG_DIRECTORY, "config")?;
        let config_file_name = resolver.resolve(&catalog::CONFIG_FILE_NAME)?.ok_or_else(|| {
            ConfigError::missing("configuration file name", "Set CONFIG_FILE_NAME")
        })?;
        let config_file = config_directory.join(config_file_name);

        let binary = resolver.resolve(&catalog::MPD_BINARY_PATH)?.ok_or_else(|| {
            ConfigError::missing("MPD binary", "Set MPD_BINARY_PATH")
        })?;
        let running_mode = resolver
            .resolve(&catalog::MPD_RUNNING_MODE)?
            .and_then(|tag| RunningMode::from_tag(&tag))
            .unwrap_or_default();

        let music_directory = directories.directory(&catalog::MUSIC_DIRECTORY, "music")?;
        let playlist_directory = directories.directory(&catalog::PLAYLIST_DIRECTORY, "playlist")?;

        let db_file = optional_file(
            resolver,
            &catalog::ENABLE_DB_FILE,
            &catalog::DB_FILE,
            &config_directory,
        )?;
        let log_file = if resolver.resolve_as_bool(&catalog::ENABLE_LOG_FILE)? {
            match resolver.resolve(&catalog::LOG_FILE_NAME)? {
                Some(name) => Some(directories.directory(&catalog::LOG_DIRECTORY, "log")?.join(name)),
                None => None,
            }
        } else {
            None
        };
        let state_file = optional_file(
            resolver,
            &catalog::ENABLE_STATE_FILE,
            &catalog::STATE_FILE,
            &config_directory,
        )?;
        let state_file_interval = match state_file {
            Some(_) => resolver.resolve(&catalog::STATE_FILE_INTERVAL)?,
            None => None,
        };
        let sticker_file = optional_file(
            resolver,
            &catalog::ENABLE_STICKER_FILE,
            &catalog::STICKER_FILE,
            &config_directory,
        )?;

        let bind_addresses = resolver
            .resolve(&catalog::MPD_BIND_ADDRESS)?
            .map(|list| split_addresses(&list))
            .unwrap_or_default();

        Ok(Self {
            config_file,
            binary,
            running_mode,
            music_directory,
            playlist_directory,
            db_file,
            log_file,
            pid_file: resolver.resolve(&catalog::PID_FILE)?,
            state_file,
            state_file_interval,
            sticker_file,
            bind_addresses,
            port: resolver.resolve(&catalog::MPD_PORT)?,
            log_level: resolver.resolve(&catalog::LOG_LEVEL)?,
            restore_paused: resolver.resolve(&catalog::RESTORE_PAUSED)?,
            plugins: collect_plugins(resolver)?,
            outputs: collect_outputs(resolver)?,
            samplerate_converter: resolver.resolve(&catalog::SAMPLERATE_CONVERTER)?,
            filesystem_charset: resolver.resolve(&catalog::FILESYSTEM_CHARSET)?,
        })
    }
}

/// A file in `directory`, present when `enable` is `yes` and the name is non-empty.
fn optional_file<E: Environment>(
    resolver: &Resolver<E>,
    enable: &Descriptor,
    name: &Descriptor,
    directory: &Path,
) -> Result<Option<PathBuf>, ConfigError> {
    if !resolver.resolve_as_bool(enable)? {
        return Ok(None);
    }
    Ok(resolver.resolve(name)?.map(|file| directory.join(file)))
}

/// Splits a comma-separated address list, trimming each entry.
///
/// Every entry is kept, including empty ones and duplicates.
fn split_addresses(list: &str) -> Vec<String> {
    list.split(',').map(|a| a.trim().to_string()).collect()
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
