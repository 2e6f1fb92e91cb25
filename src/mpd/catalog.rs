//! Environment variables read by `mpd-runner`.
//!
//! Each constant describes one variable. Scalar settings that map one-to-one
//! onto the configuration file carry their MPD key; derived settings
//! (directories, file paths) are assembled in [`MpdSettings`](super::MpdSettings).

use crate::config::{CacheLayout, Descriptor, Validator};

use super::mode::RunningMode;
use super::output::OutputType;

// Launcher

pub const CONFIG_FILE_NAME: Descriptor = Descriptor::new("CONFIG_FILE_NAME").with_default("mpd.conf");
pub const INSTANCE_NAME: Descriptor = Descriptor::new("INSTANCE_NAME").with_default("mpd-default");
pub const CACHE_DIRECTORY: Descriptor = Descriptor::new("CACHE_DIRECTORY");
pub const MPD_BINARY_PATH: Descriptor = Descriptor::new("MPD_BINARY_PATH").with_default("/usr/bin/mpd");
pub const MPD_RUNNING_MODE: Descriptor = Descriptor::new("MPD_RUNNING_MODE")
    .with_default("no-daemon")
    .with_validator(Validator::OneOf(RunningMode::TAGS));
pub const MPD_RUN_WITH_STDERR: Descriptor = Descriptor::new("MPD_RUN_WITH_STDERR")
    .with_default("no")
    .switch("--stderr");
pub const MPD_RUN_WITH_VERBOSE: Descriptor = Descriptor::new("MPD_RUN_WITH_VERBOSE")
    .with_default("no")
    .switch("--verbose");

// Directories

pub const MUSIC_DIRECTORY: Descriptor = Descriptor::new("MUSIC_DIRECTORY");
pub const PLAYLIST_DIRECTORY: Descriptor = Descriptor::new("PLAYLIST_DIRECTORY");
pub const LOG_DIRECTORY: Descriptor = Descriptor::new("LOG_DIRECTORY");
pub const CONFIG_DIRECTORY: Descriptor = Descriptor::new("CONFIG_DIRECTORY");

// Files

pub const ENABLE_DB_FILE: Descriptor = Descriptor::new("ENABLE_DB_FILE")
    .with_default("yes")
    .with_validator(Validator::YesNoOrEmpty);
pub const DB_FILE: Descriptor = Descriptor::new("DB_FILE").with_default("tag_cache");
pub const ENABLE_LOG_FILE: Descriptor = Descriptor::new("ENABLE_LOG_FILE").with_default("yes");
pub const LOG_FILE_NAME: Descriptor = Descriptor::new("LOG_FILE_NAME").with_default("mpd.log");
pub const PID_FILE: Descriptor = Descriptor::new("PID_FILE").conf_key("pid_file");
pub const ENABLE_STICKER_FILE: Descriptor = Descriptor::new("ENABLE_STICKER_FILE")
    .with_default("yes")
    .with_validator(Validator::YesNoOrEmpty);
pub const STICKER_FILE: Descriptor = Descriptor::new("STICKER_FILE")
    .with_default("sticker.sql")
    .conf_key("sticker_file");
pub const ENABLE_STATE_FILE: Descriptor = Descriptor::new("ENABLE_STATE_FILE")
    .with_default("yes")
    .with_validator(Validator::YesNoOrEmpty);
pub const STATE_FILE: Descriptor = Descriptor::new("STATE_FILE")
    .with_default("state")
    .conf_key("state_file");
pub const STATE_FILE_INTERVAL: Descriptor = Descriptor::new("STATE_FILE_INTERVAL")
    .with_default("15")
    .with_validator(Validator::Integer)
    .conf_key("state_file_interval");

// Daemon

pub const MPD_BIND_ADDRESS: Descriptor = Descriptor::new("MPD_BIND_ADDRESS")
    .with_default("[::]")
    .conf_key("bind_to_address");
pub const MPD_PORT: Descriptor = Descriptor::new("MPD_PORT")
    .with_default("6600")
    .with_validator(Validator::Integer)
    .conf_key("port");
pub const LOG_LEVEL: Descriptor = Descriptor::new("LOG_LEVEL")
    .with_default("notice")
    .conf_key("log_level");
pub const RESTORE_PAUSED: Descriptor = Descriptor::new("RESTORE_PAUSED")
    .with_default("yes")
    .with_validator(Validator::YesNoOrEmpty)
    .conf_key("restore_paused");
pub const SAMPLERATE_CONVERTER: Descriptor =
    Descriptor::new("SAMPLERATE_CONVERTER").conf_key("samplerate_converter");
pub const FILESYSTEM_CHARSET: Descriptor = Descriptor::new("FILESYSTEM_CHARSET")
    .with_default("UTF-8")
    .conf_key("filesystem_charset");

// Plugins (curl is needed for streaming)

pub const INPUT_CURL_CREATE: Descriptor = yes_no("INPUT_CURL_CREATE", "yes");
pub const INPUT_CURL_ENABLED: Descriptor = yes_no("INPUT_CURL_ENABLED", "yes");
// opus may misbehave on streams; ffmpeg covers it
pub const DECODER_OPUS_CREATE: Descriptor = yes_no("DECODER_OPUS_CREATE", "yes");
pub const DECODER_OPUS_ENABLED: Descriptor = yes_no("DECODER_OPUS_ENABLED", "no");
pub const DECODER_FFMPEG_CREATE: Descriptor = yes_no("DECODER_FFMPEG_CREATE", "no");
pub const DECODER_FFMPEG_ENABLED: Descriptor = yes_no("DECODER_FFMPEG_ENABLED", "no");
pub const DECODER_HDCD_CREATE: Descriptor = yes_no("DECODER_HDCD_CREATE", "yes");
pub const DECODER_HDCD_ENABLED: Descriptor = yes_no("DECODER_HDCD_ENABLED", "yes");
pub const DECODER_WILDMIDI_CREATE: Descriptor = yes_no("DECODER_WILDMIDI_CREATE", "yes");
pub const DECODER_WILDMIDI_ENABLED: Descriptor = yes_no("DECODER_WILDMIDI_ENABLED", "no");

// Outputs, common to every type

pub const OUTPUT_CREATE: Descriptor = Descriptor::indexed("OUTPUT_CREATE");
pub const OUTPUT_TYPE: Descriptor = Descriptor::indexed("OUTPUT_TYPE")
    .with_default("alsa")
    .with_validator(Validator::OneOf(OutputType::TAGS));
pub const OUTPUT_NAME: Descriptor = Descriptor::indexed("OUTPUT_NAME").conf_key("name");
pub const OUTPUT_ENABLED: Descriptor = Descriptor::indexed("OUTPUT_ENABLED").conf_key("enabled");
pub const OUTPUT_MIXER_TYPE: Descriptor = output("OUTPUT_MIXER_TYPE", "mixer_type");
pub const OUTPUT_FORMAT: Descriptor = output("OUTPUT_FORMAT", "format");

// alsa

pub const OUTPUT_DEVICE: Descriptor = output("OUTPUT_DEVICE", "device");
pub const OUTPUT_MIXER_CONTROL: Descriptor = output("OUTPUT_MIXER_CONTROL", "mixer_control");
pub const OUTPUT_MIXER_INDEX: Descriptor = output("OUTPUT_MIXER_INDEX", "mixer_index");
pub const OUTPUT_ALLOWED_FORMATS: Descriptor = output("OUTPUT_ALLOWED_FORMATS", "allowed_formats");
pub const OUTPUT_AUTO_RESAMPLE: Descriptor = output_yes_no("OUTPUT_AUTO_RESAMPLE", "auto_resample");
pub const OUTPUT_AUTO_CHANNELS: Descriptor = output_yes_no("OUTPUT_AUTO_CHANNELS", "auto_channels");
pub const OUTPUT_AUTO_FORMAT: Descriptor = output_yes_no("OUTPUT_AUTO_FORMAT", "auto_format");
pub const OUTPUT_BUFFER_TIME: Descriptor = output("OUTPUT_BUFFER_TIME", "buffer_time");
pub const OUTPUT_PERIOD_TIME: Descriptor = output("OUTPUT_PERIOD_TIME", "period_time");
pub const OUTPUT_CLOSE_ON_PAUSE: Descriptor = output("OUTPUT_CLOSE_ON_PAUSE", "close_on_pause");
pub const OUTPUT_DEFAULT_FORMAT: Descriptor = output("OUTPUT_DEFAULT_FORMAT", "default_format");
pub const OUTPUT_STOP_DSD_SILENCE: Descriptor =
    output_yes_no("OUTPUT_STOP_DSD_SILENCE", "stop_dsd_silence");
pub const OUTPUT_THESYCON_DSD_WORKAROUND: Descriptor =
    output_yes_no("OUTPUT_THESYCON_DSD_WORKAROUND", "thesycon_dsd_workaround");
pub const OUTPUT_DOP: Descriptor = output_yes_no("OUTPUT_DOP", "dop");
pub const OUTPUT_INTEGER_UPSAMPLING: Descriptor =
    output_yes_no("OUTPUT_INTEGER_UPSAMPLING", "integer_upsampling");
pub const OUTPUT_INTEGER_UPSAMPLING_ALLOWED: Descriptor =
    output("OUTPUT_INTEGER_UPSAMPLING_ALLOWED", "integer_upsampling_allowed");

// pipewire

pub const OUTPUT_TARGET: Descriptor = output("OUTPUT_TARGET", "target");
pub const OUTPUT_REMOTE: Descriptor = output("OUTPUT_REMOTE", "remote");
pub const OUTPUT_DSD: Descriptor = output_yes_no("OUTPUT_DSD", "dsd");

// pulse

pub const OUTPUT_HOSTNAME: Descriptor = output("OUTPUT_HOSTNAME", "hostname");
// a sink name, so no yes/no check
pub const OUTPUT_SINK: Descriptor = output("OUTPUT_SINK", "sink");
pub const OUTPUT_MEDIA_ROLE: Descriptor = output("OUTPUT_MEDIA_ROLE", "media_role");
pub const OUTPUT_SCALE_FACTOR: Descriptor = output("OUTPUT_SCALE_FACTOR", "scale_factor");

// null

pub const OUTPUT_SYNC: Descriptor = output_yes_no("OUTPUT_SYNC", "sync");

// httpd

pub const OUTPUT_PORT: Descriptor = output("OUTPUT_PORT", "port");
pub const OUTPUT_BIND_TO_ADDRESS: Descriptor = output("OUTPUT_BIND_TO_ADDRESS", "bind_to_address");
pub const OUTPUT_DSCP_CLASS: Descriptor = output("OUTPUT_DSCP_CLASS", "dscp_class");
pub const OUTPUT_ENCODER: Descriptor = output("OUTPUT_ENCODER", "encoder").with_default("lame");
pub const OUTPUT_BITRATE: Descriptor = output("OUTPUT_BITRATE", "bitrate");
pub const OUTPUT_QUALITY: Descriptor = output("OUTPUT_QUALITY", "quality");
pub const OUTPUT_MAX_CLIENTS: Descriptor = output("OUTPUT_MAX_CLIENTS", "max_clients");
pub const OUTPUT_GENRE: Descriptor = output("OUTPUT_GENRE", "genre");
pub const OUTPUT_WEBSITE: Descriptor = output("OUTPUT_WEBSITE", "website").with_default("yes");
pub const OUTPUT_ALWAYS_ON: Descriptor = output("OUTPUT_ALWAYS_ON", "always_on");

/// Cache layout used for directory fallbacks: `~/.cache/mpd/<INSTANCE_NAME>`.
pub const CACHE_LAYOUT: CacheLayout = CacheLayout {
    app: "mpd",
    cache_directory: CACHE_DIRECTORY,
    instance_name: INSTANCE_NAME,
};

/// Every variable, in the order shown by `mpd-runner vars`.
pub const ALL: &[Descriptor] = &[
    CONFIG_FILE_NAME,
    INSTANCE_NAME,
    CACHE_DIRECTORY,
    MPD_BINARY_PATH,
    MPD_RUNNING_MODE,
    MPD_RUN_WITH_STDERR,
    MPD_RUN_WITH_VERBOSE,
    MUSIC_DIRECTORY,
    PLAYLIST_DIRECTORY,
    LOG_DIRECTORY,
    CONFIG_DIRECTORY,
    ENABLE_DB_FILE,
    DB_FILE,
    ENABLE_LOG_FILE,
    LOG_FILE_NAME,
    PID_FILE,
    ENABLE_STICKER_FILE,
    STICKER_FILE,
    ENABLE_STATE_FILE,
    STATE_FILE,
    STATE_FILE_INTERVAL,
    MPD_BIND_ADDRESS,
    MPD_PORT,
    LOG_LEVEL,
    RESTORE_PAUSED,
    SAMPLERATE_CONVERTER,
    FILESYSTEM_CHARSET,
    INPUT_CURL_CREATE,
    INPUT_CURL_ENABLED,
    DECODER_OPUS_CREATE,
    DECODER_OPUS_ENABLED,
    DECODER_FFMPEG_CREATE,
    DECODER_FFMPEG_ENABLED,
    DECODER_HDCD_CREATE,
    DECODER_HDCD_ENABLED,
    DECODER_WILDMIDI_CREATE,
    DECODER_WILDMIDI_ENABLED,
    OUTPUT_CREATE,
    OUTPUT_TYPE,
    OUTPUT_NAME,
    OUTPUT_ENABLED,
    OUTPUT_MIXER_TYPE,
    OUTPUT_FORMAT,
    OUTPUT_DEVICE,
    OUTPUT_MIXER_CONTROL,
    OUTPUT_MIXER_INDEX,
    OUTPUT_ALLOWED_FORMATS,
    OUTPUT_AUTO_RESAMPLE,
    OUTPUT_AUTO_CHANNELS,
    OUTPUT_AUTO_FORMAT,
    OUTPUT_BUFFER_TIME,
    OUTPUT_PERIOD_TIME,
    OUTPUT_CLOSE_ON_PAUSE,
    OUTPUT_DEFAULT_FORMAT,
    OUTPUT_STOP_DSD_SILENCE,
    OUTPUT_THESYCON_DSD_WORKAROUND,
    OUTPUT_DOP,
    OUTPUT_INTEGER_UPSAMPLING,
    OUTPUT_INTEGER_UPSAMPLING_ALLOWED,
    OUTPUT_TARGET,
    OUTPUT_REMOTE,
    OUTPUT_DSD,
    OUTPUT_HOSTNAME,
    OUTPUT_SINK,
    OUTPUT_MEDIA_ROLE,
    OUTPUT_SCALE_FACTOR,
    OUTPUT_SYNC,
    OUTPUT_PORT,
    OUTPUT_BIND_TO_ADDRESS,
    OUTPUT_DSCP_CLASS,
    OUTPUT_ENCODER,
    OUTPUT_BITRATE,
    OUTPUT_QUALITY,
    OUTPUT_MAX_CLIENTS,
    OUTPUT_GENRE,
    OUTPUT_WEBSITE,
    OUTPUT_ALWAYS_ON,
];

const fn yes_no(name: &'static str, default: &'static str) -> Descriptor {
    Descriptor::new(name)
        .with_default(default)
        .with_validator(Validator::YesNoOrEmpty)
}

const fn output(name: &'static str, key: &'static str) -> Descriptor {
    Descriptor::indexed(name).conf_key(key)
}

const fn output_yes_no(name: &'static str, key: &'static str) -> Descriptor {
    output(name, key).with_validator(Validator::YesNoOrEmpty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = ALL.iter().map(|d| d.name).collect();
        assert_eq!(names.len(), ALL.len());
    }

    #[test]
    fn output_variables_are_indexed() {
        for d in ALL.iter().filter(|d| d.name.starts_with("OUTPUT_")) {
            assert!(d.indexed, "{} should be indexed", d.name);
        }
    }

    #[test]
    fn scalar_variables_are_not_indexed() {
        for d in ALL.iter().filter(|d| !d.name.starts_with("OUTPUT_")) {
            assert!(!d.indexed, "{} should not be indexed", d.name);
        }
    }

    #[test]
    fn website_default_is_literal_yes() {
        assert_eq!(OUTPUT_WEBSITE.default, Some("yes"));
        assert_eq!(OUTPUT_WEBSITE.validator, None);
    }

    #[test]
    fn sink_accepts_any_name() {
        assert_eq!(OUTPUT_SINK.validator, None);
    }

    #[test]
    fn documented_defaults() {
        assert_eq!(CONFIG_FILE_NAME.default, Some("mpd.conf"));
        assert_eq!(INSTANCE_NAME.default, Some("mpd-default"));
        assert_eq!(MPD_BINARY_PATH.default, Some("/usr/bin/mpd"));
        assert_eq!(MPD_PORT.default, Some("6600"));
        assert_eq!(MPD_BIND_ADDRESS.default, Some("[::]"));
        assert_eq!(OUTPUT_TYPE.default, Some("alsa"));
        assert_eq!(OUTPUT_ENCODER.default, Some("lame"));
    }
}
