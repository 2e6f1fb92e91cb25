//! Configuration layer shared by the launchers.
//!
//! This module provides:
//! - Variable descriptors ([`Descriptor`], [`Target`])
//! - Validators ([`Validator`])
//! - Environment resolution ([`Resolver`])
//! - Directory resolution with cache fallback ([`DirectoryResolver`], [`Host`])
//! - Flag assembly for command lines ([`append_flags`])
//! - CLI argument parsing ([`MpdCli`], [`SqueezeliteCli`])
//! - A listing of a variable catalog ([`describe_catalog`])
//!
//! # Priority
//!
//! Each variable resolves with the following priority (highest to lowest):
//!
//! 1. **Environment value** - including the empty string, which resolves to absent
//! 2. **Descriptor default**
//! 3. **Absent**
//!
//! The command line never carries configuration values; it only holds
//! operational switches such as `--dry-run`.

mod cli;
pub mod defaults;
mod descriptor;
mod directory;
mod error;
mod flags;
mod resolver;
mod validator;

pub use cli::{Command, CommonArgs, MpdCli, SqueezeliteCli};
pub use descriptor::{Descriptor, Target};
pub use directory::{CacheLayout, DirectoryResolver, Host, ensure_directory};
pub use error::ConfigError;
pub use flags::append_flags;
pub use resolver::Resolver;
pub use validator::{Validator, is_yes};

/// Renders a catalog as one line per variable, for the `vars` subcommand.
///
/// Indexed variables are shown with an `[_<n>]` suffix.
#[must_use]
pub fn describe_catalog(catalog: &[Descriptor]) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    for descriptor in catalog {
        let suffix = if descriptor.indexed { "[_<n>]" } else { "" };
        let _ = write!(out, "{}{suffix}", descriptor.name);
        if let Some(default) = descriptor.default {
            let _ = write!(out, " (default: {default:?})");
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_catalog_lists_defaults_and_indexing() {
        const CATALOG: &[Descriptor] = &[
            Descriptor::new("MPD_PORT").with_default("6600"),
            Descriptor::indexed("OUTPUT_NAME"),
        ];

        assert_eq!(
            describe_catalog(CATALOG),
            "MPD_PORT (default: \"6600\")\nOUTPUT_NAME[_<n>]\n"
        );
    }
}
