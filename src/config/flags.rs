//! Mapping of resolved descriptors to command-line arguments.

use crate::env::Environment;
use crate::process::CommandLine;

use super::descriptor::{Descriptor, Target};
use super::error::ConfigError;
use super::resolver::Resolver;

/// Appends the arguments for `descriptors` to `command`, in slice order.
///
/// - [`Target::Switch`] appends the bare token when the value is `yes`.
/// - [`Target::Value`] appends `flag value` when a value is present.
/// - Descriptors with any other target are skipped.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if any value fails validation.
pub fn append_flags<E: Environment>(
    resolver: &Resolver<E>,
    command: &mut CommandLine,
    descriptors: &[Descriptor],
) -> Result<(), ConfigError> {
    for descriptor in descriptors {
        match descriptor.target {
            Some(Target::Switch(token)) => {
                if resolver.resolve_as_bool(descriptor)? {
                    tracing::debug!("Using switch [{token}] from {}", descriptor.name);
                    command.push(token);
                }
            }
            Some(Target::Value { flag, quoted }) => {
                if let Some(value) = resolver.resolve(descriptor)? {
                    tracing::info!("Using [{value}] for parameter [{flag}]");
                    command.push_flag(flag, value, quoted);
                }
            }
            Some(Target::ConfKey(_)) | None => {}
        }
    }
    Ok(())
}
