use super::*;
use crate::env::MapEnvironment;
use tempfile::TempDir;

const NO_DEFAULT_BINARY: &str = "/nonexistent/audio-runners/squeezelite";

fn resolve(pairs: &[(&str, &str)]) -> Result<SqueezeliteSettings, ConfigError> {
    let resolver = Resolver::new(pairs.iter().copied().collect::<MapEnvironment>());
    SqueezeliteSettings::resolve_with_default_binary(&resolver, Path::new(NO_DEFAULT_BINARY))
}

mod binary {
    use super::*;

    #[test]
    fn falls_back_to_path_lookup() {
        let settings = resolve(&[]).unwrap();
        assert_eq!(settings.command.program(), "squeezelite");
    }

    #[test]
    fn explicit_binary_wins() {
        let settings = resolve(&[("SQUEEZELITE_BINARY", "/opt/sq/squeezelite")]).unwrap();
        assert_eq!(settings.command.program(), "/opt/sq/squeezelite");
    }

    #[test]
    fn existing_default_binary_is_used() {
        let dir = TempDir::new().unwrap();
        let binary = dir.path().join("squeezelite");
        std::fs::write(&binary, "").unwrap();
        let resolver = Resolver::new(MapEnvironment::new());

        let settings = SqueezeliteSettings::resolve_with_default_binary(&resolver, &binary).unwrap();

        let expected = std::fs::canonicalize(&binary).unwrap();
        assert_eq!(settings.command.program(), expected.to_str().unwrap());
    }

    #[test]
    fn default_directory_is_not_a_binary() {
        let dir = TempDir::new().unwrap();
        let resolver = Resolver::new(MapEnvironment::new());

        let settings = SqueezeliteSettings::resolve_with_default_binary(&resolver, dir.path()).unwrap();

        assert_eq!(settings.command.program(), "squeezelite");
    }
}

mod options {
    use super::*;

    #[test]
    fn nothing_set_gives_bare_binary() {
        let settings = resolve(&[]).unwrap();
        assert!(settings.command.args().is_empty());
    }

    #[test]
    fn server_and_device() {
        let settings = resolve(&[
            ("SQUEEZELITE_SERVER_PORT", "lms.local:3483"),
            ("SQUEEZELITE_AUDIO_DEVICE", "hw:CARD=DAC"),
        ])
        .unwrap();

        assert_eq!(
            settings.command.args(),
            vec!["-s", "lms.local:3483", "-o", "hw:CARD=DAC"]
        );
    }

    #[test]
    fn declaration_order_and_quoting() {
        let settings = resolve(&[
            ("SQUEEZELITE_VISUALIZER", "yes"),
            ("SQUEEZELITE_TIMEOUT", "10"),
            ("SQUEEZELITE_NAME", "Living Room"),
            ("SQUEEZELITE_RATES", "44100-192000"),
        ])
        .unwrap();

        assert_eq!(
            settings.command.argv(),
            vec![
                "squeezelite",
                "-n",
                "Living Room",
                "-r",
                "44100-192000",
                "-C",
                "10",
                "-v"
            ]
        );
        assert_eq!(
            settings.command.to_string(),
            "squeezelite -n \"Living Room\" -r 44100-192000 -C 10 -v"
        );
    }

    #[test]
    fn switch_set_to_no_is_omitted() {
        let settings = resolve(&[("SQUEEZELITE_LINEAR_VOLUME", "no")]).unwrap();
        assert!(settings.command.args().is_empty());
    }

    #[test]
    fn non_integer_priority_fails() {
        let err = resolve(&[("SQUEEZELITE_PRIORITY", "realtime")]).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref variable, .. } if variable == "SQUEEZELITE_PRIORITY")
        );
    }
}

mod restart {
    use super::*;

    #[test]
    fn enabled_with_three_seconds_by_default() {
        let settings = resolve(&[]).unwrap();
        assert_eq!(
            settings.restart,
            RestartOnFailure::new(true, Duration::from_secs(3))
        );
    }

    #[test]
    fn can_be_disabled() {
        let settings = resolve(&[("SQUEEZELITE_RESTART_ON_FAIL", "no")]).unwrap();
        assert!(!settings.restart.enabled);
    }

    #[test]
    fn empty_flag_disables() {
        let settings = resolve(&[("SQUEEZELITE_RESTART_ON_FAIL", "")]).unwrap();
        assert!(!settings.restart.enabled);
    }

    #[test]
    fn custom_delay() {
        let settings = resolve(&[("SQUEEZELITE_RESTART_DELAY", "10")]).unwrap();
        assert_eq!(settings.restart.delay, Duration::from_secs(10));
    }

    #[test]
    fn empty_delay_uses_default() {
        let settings = resolve(&[("SQUEEZELITE_RESTART_DELAY", "")]).unwrap();
        assert_eq!(settings.restart.delay, defaults::restart_delay());
    }

    #[test]
    fn negative_delay_is_rejected() {
        let err = resolve(&[("SQUEEZELITE_RESTART_DELAY", "-1")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn non_integer_delay_is_rejected() {
        let err = resolve(&[("SQUEEZELITE_RESTART_DELAY", "soon")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn malformed_flag_is_rejected() {
        let err = resolve(&[("SQUEEZELITE_RESTART_ON_FAIL", "always")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}

#[test]
fn summary() {
    let settings = resolve(&[("SQUEEZELITE_NAME", "Den")]).unwrap();
    assert_eq!(
        settings.to_string(),
        "SqueezeliteSettings { binary: squeezelite, options: 2, restart_on_fail: true, restart_delay: 3s }"
    );
}
