//! Rendering and writing of the MPD configuration file.
//!
//! The file is line oriented: `key "value"` for simple settings and
//! brace-delimited sections for plugins and outputs.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::config::ConfigError;

use super::settings::MpdSettings;

/// Renders the configuration file contents.
///
/// Settings that resolved to absent produce no line at all.
#[must_use]
pub fn render(settings: &MpdSettings) -> String {
    let mut out = String::new();

    simple(&mut out, "music_directory", Some(settings.music_directory.as_path()));
    simple(&mut out, "playlist_directory", Some(settings.playlist_directory.as_path()));
    simple(&mut out, "db_file", settings.db_file.as_deref());
    simple(&mut out, "log_file", settings.log_file.as_deref());
    simple(&mut out, "pid_file", settings.pid_file.as_deref());
    simple(&mut out, "state_file", settings.state_file.as_deref());
    simple(&mut out, "state_file_interval", settings.state_file_interval.as_deref());
    simple(&mut out, "sticker_file", settings.sticker_file.as_deref());

    for address in &settings.bind_addresses {
        line(&mut out, "", "bind_to_address", address);
    }
    simple(&mut out, "port", settings.port.as_deref());
    simple(&mut out, "log_level", settings.log_level.as_deref());
    simple(&mut out, "restore_paused", settings.restore_paused.as_deref());

    for plugin in &settings.plugins {
        let _ = writeln!(out, "{} {{", plugin.kind);
        line(&mut out, "  ", "plugin", plugin.name);
        line(&mut out, "  ", "enabled", if plugin.enabled { "yes" } else { "no" });
        out.push_str("}\n");
    }

    for output in &settings.outputs {
        out.push_str("audio_output {\n");
        line(&mut out, "  ", "type", output.output_type.as_str());
        for (key, value) in &output.properties {
            line(&mut out, "  ", key, value);
        }
        out.push_str("}\n");
    }

    simple(&mut out, "samplerate_converter", settings.samplerate_converter.as_deref());
    simple(&mut out, "filesystem_charset", settings.filesystem_charset.as_deref());

    out
}

/// Writes the rendered configuration to `settings.config_file`, replacing
/// any existing file.
///
/// # Errors
///
/// Returns [`ConfigError::FileWrite`] if the file cannot be written.
pub fn write_config(settings: &MpdSettings) -> Result<PathBuf, ConfigError> {
    let path = settings.config_file.clone();
    std::fs::write(&path, render(settings)).map_err(|source| ConfigError::FileWrite {
        path: path.clone(),
        source,
    })?;
    tracing::info!("MPD config file written to [{}]", path.display());
    Ok(path)
}

/// A value that can appear between the quotes of a `key "value"` line.
trait ConfValue {
    fn conf_value(&self) -> Cow<'_, str>;
}

impl ConfValue for str {
    fn conf_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl ConfValue for Path {
    fn conf_value(&self) -> Cow<'_, str> {
        self.to_string_lossy()
    }
}

fn simple<V: ConfValue + ?Sized>(out: &mut String, key: &str, value: Option<&V>) {
    if let Some(value) = value {
        line(out, "", key, &value.conf_value());
    }
}

fn line(out: &mut String, indent: &str, key: &str, value: &str) {
    let _ = writeln!(out, "{indent}{key} \"{value}\"");
}

#[cfg(test)]
#[path = "conf_tests.rs"]
mod tests;
