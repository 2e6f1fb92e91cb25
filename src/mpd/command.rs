//! MPD command line.

use crate::config::{ConfigError, Descriptor, Resolver, append_flags};
use crate::env::Environment;
use crate::process::CommandLine;

use super::catalog;
use super::settings::MpdSettings;

/// Switches appended after the running mode, in order.
const SWITCHES: &[Descriptor] = &[catalog::MPD_RUN_WITH_STDERR, catalog::MPD_RUN_WITH_VERBOSE];

/// Builds `<binary> <config file> [mode switch] [--stderr] [--verbose]`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if a switch is not a yes/no value.
pub fn build_command<E: Environment>(
    resolver: &Resolver<E>,
    settings: &MpdSettings,
) -> Result<CommandLine, ConfigError> {
    let mut command = CommandLine::new(settings.binary.as_str());
    command.push(settings.config_file.to_string_lossy());
    if let Some(switch) = settings.running_mode.switch() {
        command.push(switch);
    }
    append_flags(resolver, &mut command, SWITCHES)?;
    Ok(command)
}
