//! Squeezelite launcher.
//!
//! Builds the Squeezelite command line from the `SQUEEZELITE_*` variables
//! and the restart policy it is supervised with.

pub mod catalog;
mod settings;

pub use settings::SqueezeliteSettings;
