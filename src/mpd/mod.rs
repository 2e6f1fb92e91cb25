//! MPD launcher.
//!
//! Resolves the MPD variable catalog, writes a configuration file and
//! builds the command that runs MPD with it.
//!
//! ```text
//! environment ──► MpdSettings::resolve ──► write_config ──► build_command
//! ```

pub mod catalog;
mod command;
mod conf;
mod mode;
mod output;
mod plugin;
mod settings;

pub use command::build_command;
pub use conf::{render, write_config};
pub use mode::RunningMode;
pub use output::{OutputBlock, OutputType, collect_outputs};
pub use plugin::{PLUGINS, PluginBlock, PluginKind, PluginSpec, collect_plugins};
pub use settings::MpdSettings;
