//! Tests for webhook URL and deadline validation.

use super::*;

mod url_validation {
    use super::*;

    #[test]
    fn unparseable_url_is_rejected() {
        let cli = cli(&["--url", "not a url"]);
        let result = ValidatedConfig::from_raw(&cli, None, None);

        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let cli = cli(&["--url", "ftp://example.com/hook"]);
        let result = ValidatedConfig::from_raw(&cli, None, None);

        let Err(ConfigError::InvalidUrl { reason, .. }) = result else {
            panic!("expected InvalidUrl, got {result:?}");
        };
        assert!(reason.contains("http"));
    }

    #[test]
    fn plain_http_is_accepted() {
        let cli = cli(&["--url", "http://localhost:8080/hook"]);
        let config = ValidatedConfig::from_raw(&cli, None, None).unwrap();

        assert_eq!(config.url.port(), Some(8080));
    }
}

mod deadline_validation {
    use super::*;

    #[test]
    fn zero_timeout_from_cli_is_rejected() {
        let cli = cli(&["--url", "https://example.com", "--timeout", "0"]);
        let result = ValidatedConfig::from_raw(&cli, None, None);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidDuration {
                field: "timeout",
                ..
            })
        ));
    }

    #[test]
    fn zero_timeout_from_toml_is_rejected() {
        let cli = cli(&["--url", "https://example.com"]);
        let toml = toml(
            r#"
            [webhook]
            timeout = 0
        "#,
        );

        let result = ValidatedConfig::from_raw(&cli, Some(&toml), None);
        assert!(matches!(result, Err(ConfigError::InvalidDuration { .. })));
    }
}

mod display {
    use super::*;

    #[test]
    fn display_hides_url_path() {
        let cli = cli(&["--url", "https://hooks.example.com/services/T0/B0/secret"]);
        let config = ValidatedConfig::from_raw(&cli, None, None).unwrap();

        let shown = config.to_string();
        assert!(shown.contains("https://hooks.example.com"));
        assert!(!shown.contains("secret"));
        assert!(shown.contains("event: stdin"));
        assert!(shown.contains("deadline: none"));
    }

    #[test]
    fn display_shows_deadline_and_event() {
        let cli = cli(&[
            "--url",
            "https://example.com",
            "--timeout",
            "7",
            "-e",
            "event.json",
        ]);
        let config = ValidatedConfig::from_raw(&cli, None, None).unwrap();

        let shown = config.to_string();
        assert!(shown.contains("deadline: 7s"));
        assert!(shown.contains("event: event.json"));
    }
}
