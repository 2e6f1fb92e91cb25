//! CLI argument parsing using clap.
//!
//! The launchers are configured through environment variables only; the
//! command line carries operational switches and the `vars` subcommand.

use clap::{Args, Parser, Subcommand};

/// Options shared by both launchers.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Resolve everything and log the command without starting it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands shared by both launchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List the environment variables this launcher reads, with defaults
    Vars,
}

/// mpd-runner: writes an MPD configuration from the environment and runs MPD.
#[derive(Debug, Parser)]
#[command(name = "mpd-runner")]
#[command(version, about, long_about = None)]
pub struct MpdCli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// sq-runner: runs Squeezelite with flags from the environment, restarting it on failure.
#[derive(Debug, Parser)]
#[command(name = "sq-runner")]
#[command(version, about, long_about = None)]
pub struct SqueezeliteCli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl MpdCli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}

impl SqueezeliteCli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
