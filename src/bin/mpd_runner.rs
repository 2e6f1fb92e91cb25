//! mpd-runner: MPD launcher
//!
//! Writes an MPD configuration file from the environment and runs MPD once.

use std::process::ExitCode;

use audio_runners::app::{exit_code, finish, print_vars, report_config_error, setup_tracing};
use audio_runners::config::{Command, ConfigError, Host, MpdCli, Resolver};
use audio_runners::env::ProcessEnvironment;
use audio_runners::mpd::{self, MpdSettings};
use audio_runners::process::{CommandLine, SystemRunner, run_once};

const PROGRAM: &str = "mpd-runner";

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = MpdCli::parse_args();

    if cli.command == Some(Command::Vars) {
        return print_vars(mpd::catalog::ALL);
    }

    setup_tracing(cli.common.verbose);

    let resolver = Resolver::new(ProcessEnvironment);
    let command = match prepare(&resolver) {
        Ok(command) => command,
        Err(e) => {
            report_config_error(PROGRAM, &e);
            return exit_code::CONFIG_ERROR;
        }
    };

    if cli.common.dry_run {
        tracing::info!("Dry run, not starting: {command}");
        return exit_code::SUCCESS;
    }

    finish(run_once(&SystemRunner, &command))
}

/// Resolves settings, writes the configuration file and builds the MPD command.
fn prepare(resolver: &Resolver<ProcessEnvironment>) -> Result<CommandLine, ConfigError> {
    let settings = MpdSettings::resolve(resolver, &Host::current())?;
    tracing::info!("{settings}");

    let config_file = mpd::write_config(&settings)?;
    tracing::info!(
        "MPD config file [{}] content:\n{}",
        config_file.display(),
        mpd::render(&settings)
    );

    let command = mpd::build_command(resolver, &settings)?;
    tracing::info!("Command line: [{command}]");
    Ok(command)
}
