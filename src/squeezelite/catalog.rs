//! Environment variables read by `sq-runner`.

use crate::config::{Descriptor, Validator};

pub const SQUEEZELITE_BINARY: Descriptor = Descriptor::new("SQUEEZELITE_BINARY");

pub const SQUEEZELITE_NAME: Descriptor = Descriptor::new("SQUEEZELITE_NAME").quoted_flag("-n");
pub const SQUEEZELITE_MODEL_NAME: Descriptor =
    Descriptor::new("SQUEEZELITE_MODEL_NAME").quoted_flag("-M");
pub const SQUEEZELITE_MAC_ADDRESS: Descriptor = Descriptor::new("SQUEEZELITE_MAC_ADDRESS").flag("-m");
pub const SQUEEZELITE_SERVER_PORT: Descriptor = Descriptor::new("SQUEEZELITE_SERVER_PORT").flag("-s");
pub const SQUEEZELITE_AUDIO_DEVICE: Descriptor =
    Descriptor::new("SQUEEZELITE_AUDIO_DEVICE").flag("-o");
pub const SQUEEZELITE_MIXER_DEVICE: Descriptor =
    Descriptor::new("SQUEEZELITE_MIXER_DEVICE").flag("-O");
pub const SQUEEZELITE_PARAMS: Descriptor = Descriptor::new("SQUEEZELITE_PARAMS").flag("-a");
pub const SQUEEZELITE_RATES: Descriptor = Descriptor::new("SQUEEZELITE_RATES").flag("-r");
pub const SQUEEZELITE_UPSAMPLING: Descriptor = Descriptor::new("SQUEEZELITE_UPSAMPLING").flag("-R");
pub const SQUEEZELITE_BUFFER_SIZE: Descriptor =
    Descriptor::new("SQUEEZELITE_BUFFER_SIZE").flag("-b");
pub const SQUEEZELITE_CODECS: Descriptor = Descriptor::new("SQUEEZELITE_CODECS").flag("-c");
pub const SQUEEZELITE_EXCLUDE_CODECS: Descriptor =
    Descriptor::new("SQUEEZELITE_EXCLUDE_CODECS").flag("-e");
pub const SQUEEZELITE_PRIORITY: Descriptor = Descriptor::new("SQUEEZELITE_PRIORITY")
    .with_validator(Validator::Integer)
    .flag("-p");
pub const SQUEEZELITE_TIMEOUT: Descriptor = Descriptor::new("SQUEEZELITE_TIMEOUT")
    .with_validator(Validator::Integer)
    .flag("-C");
pub const SQUEEZELITE_DSD_OUTPUT: Descriptor = Descriptor::new("SQUEEZELITE_DSD_OUTPUT").flag("-D");
pub const SQUEEZELITE_VOLUME_CONTROL: Descriptor =
    Descriptor::new("SQUEEZELITE_VOLUME_CONTROL").flag("-V");
pub const SQUEEZELITE_UNMUTE: Descriptor = Descriptor::new("SQUEEZELITE_UNMUTE").flag("-U");
pub const SQUEEZELITE_LINEAR_VOLUME: Descriptor =
    Descriptor::new("SQUEEZELITE_LINEAR_VOLUME").switch("-X");
pub const SQUEEZELITE_VISUALIZER: Descriptor = Descriptor::new("SQUEEZELITE_VISUALIZER").switch("-v");
pub const SQUEEZELITE_READ_FORMATS_FROM_HEADER: Descriptor =
    Descriptor::new("SQUEEZELITE_READ_FORMATS_FROM_HEADER").switch("-W");

pub const SQUEEZELITE_RESTART_ON_FAIL: Descriptor = Descriptor::new("SQUEEZELITE_RESTART_ON_FAIL")
    .with_default("yes")
    .with_validator(Validator::YesNoOrEmpty);
pub const SQUEEZELITE_RESTART_DELAY: Descriptor = Descriptor::new("SQUEEZELITE_RESTART_DELAY")
    .with_default("3")
    .with_validator(Validator::Integer);

/// Command-line options, in the order they are appended.
pub const OPTIONS: &[Descriptor] = &[
    SQUEEZELITE_NAME,
    SQUEEZELITE_MODEL_NAME,
    SQUEEZELITE_MAC_ADDRESS,
    SQUEEZELITE_SERVER_PORT,
    SQUEEZELITE_AUDIO_DEVICE,
    SQUEEZELITE_MIXER_DEVICE,
    SQUEEZELITE_PARAMS,
    SQUEEZELITE_RATES,
    SQUEEZELITE_UPSAMPLING,
    SQUEEZELITE_BUFFER_SIZE,
    SQUEEZELITE_CODECS,
    SQUEEZELITE_EXCLUDE_CODECS,
    SQUEEZELITE_PRIORITY,
    SQUEEZELITE_TIMEOUT,
    SQUEEZELITE_DSD_OUTPUT,
    SQUEEZELITE_VOLUME_CONTROL,
    SQUEEZELITE_UNMUTE,
    SQUEEZELITE_LINEAR_VOLUME,
    SQUEEZELITE_VISUALIZER,
    SQUEEZELITE_READ_FORMATS_FROM_HEADER,
];

/// Every variable, in the order shown by `sq-runner vars`.
pub const ALL: &[Descriptor] = &[
    SQUEEZELITE_BINARY,
    SQUEEZELITE_NAME,
    SQUEEZELITE_MODEL_NAME,
    SQUEEZELITE_MAC_ADDRESS,
    SQUEEZELITE_SERVER_PORT,
    SQUEEZELITE_AUDIO_DEVICE,
    SQUEEZELITE_MIXER_DEVICE,
    SQUEEZELITE_PARAMS,
    SQUEEZELITE_RATES,
    SQUEEZELITE_UPSAMPLING,
    SQUEEZELITE_BUFFER_SIZE,
    SQUEEZELITE_CODECS,
    SQUEEZELITE_EXCLUDE_CODECS,
    SQUEEZELITE_PRIORITY,
    SQUEEZELITE_TIMEOUT,
    SQUEEZELITE_DSD_OUTPUT,
    SQUEEZELITE_VOLUME_CONTROL,
    SQUEEZELITE_UNMUTE,
    SQUEEZELITE_LINEAR_VOLUME,
    SQUEEZELITE_VISUALIZER,
    SQUEEZELITE_READ_FORMATS_FROM_HEADER,
    SQUEEZELITE_RESTART_ON_FAIL,
    SQUEEZELITE_RESTART_DELAY,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Target;

    #[test]
    fn every_option_maps_to_the_command_line() {
        for d in OPTIONS {
            assert!(
                matches!(d.target, Some(Target::Switch(_) | Target::Value { .. })),
                "{} has no flag",
                d.name
            );
        }
    }

    #[test]
    fn options_are_listed_in_all() {
        for d in OPTIONS {
            assert!(ALL.contains(d), "{} missing from ALL", d.name);
        }
    }

    #[test]
    fn names_are_prefixed() {
        assert!(ALL.iter().all(|d| d.name.starts_with("SQUEEZELITE_")));
    }

    #[test]
    fn only_names_are_quoted() {
        let quoted: Vec<_> = OPTIONS
            .iter()
            .filter(|d| matches!(d.target, Some(Target::Value { quoted: true, .. })))
            .map(|d| d.name)
            .collect();
        assert_eq!(quoted, vec!["SQUEEZELITE_NAME", "SQUEEZELITE_MODEL_NAME"]);
    }
}
