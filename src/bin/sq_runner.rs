//! sq-runner: Squeezelite launcher
//!
//! Runs Squeezelite with flags from the environment, restarting it on failure.

use std::process::ExitCode;

use audio_runners::app::{exit_code, finish, print_vars, report_config_error, setup_tracing};
use audio_runners::config::{Command, Resolver, SqueezeliteCli};
use audio_runners::env::ProcessEnvironment;
use audio_runners::process::{Supervisor, SystemRunner};
use audio_runners::squeezelite::{self, SqueezeliteSettings};

const PROGRAM: &str = "sq-runner";

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = SqueezeliteCli::parse_args();

    if cli.command == Some(Command::Vars) {
        return print_vars(squeezelite::catalog::ALL);
    }

    setup_tracing(cli.common.verbose);

    let resolver = Resolver::new(ProcessEnvironment);
    let settings = match SqueezeliteSettings::resolve(&resolver) {
        Ok(settings) => settings,
        Err(e) => {
            report_config_error(PROGRAM, &e);
            return exit_code::CONFIG_ERROR;
        }
    };
    tracing::info!("{settings}");
    tracing::info!("Command line: [{}]", settings.command);

    if cli.common.dry_run {
        tracing::info!("Dry run, not starting: {}", settings.command);
        return exit_code::SUCCESS;
    }

    let supervisor = Supervisor::new(SystemRunner, settings.restart);
    finish(
        supervisor
            .run(&settings.command)
            .map(|report| {
                tracing::info!("Supervision ended after {} attempt(s)", report.attempts);
                report.outcome
            }),
    )
}
