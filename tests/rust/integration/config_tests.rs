//! Integration tests for configuration loading
//!
//! YAML files are written to temporary directories; environment-based tests are
//! serialized because they mutate process-wide variables.

#[cfg(test)]
mod config_integration_tests {
    use std::io::Write;

    use serial_test::serial;
    use sqljudge::config::{CliConfig, ConfigError, JudgeConfig};
    use sqljudge::output::OutputFormat;
    use sqljudge::Dialect;

    const ENV_VARS: [&str; 4] = [
        "SQLJUDGE_DIALECT",
        "SQLJUDGE_OUTPUT",
        "SQLJUDGE_DELIMITER",
        "SQLJUDGE_FAIL_FAST",
    ];

    fn clear_env() {
        for key in ENV_VARS {
            std::env::remove_var(key);
        }
    }

    fn write_yaml(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    #[test]
    fn test_yaml_config_full() {
        let file = write_yaml(
            r#"
dialect: postgresql
output_format: json
delimiter: "$$"
fail_fast: true
"#,
        );

        let config = JudgeConfig::from_yaml_file(file.path()).expect("Config should load");
        assert_eq!(config.dialect, Dialect::PostgreSql);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.delimiter, "$$");
        assert!(config.fail_fast);
    }

    #[test]
    fn test_yaml_config_partial_uses_defaults() {
        let file = write_yaml("dialect: pg\n");

        let config = JudgeConfig::from_yaml_file(file.path()).expect("Config should load");
        assert_eq!(config.dialect, Dialect::PostgreSql);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.delimiter, ";");
        assert!(!config.fail_fast);
    }

    #[test]
    fn test_yaml_config_invalid_delimiter() {
        let file = write_yaml("delimiter: \"\"\n");

        let result = JudgeConfig::from_yaml_file(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_yaml_config_unknown_dialect() {
        let file = write_yaml("dialect: oracle\n");

        let result = JudgeConfig::from_yaml_file(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_yaml_config_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let result = JudgeConfig::from_yaml_file(dir.path().join("missing.yaml"));
        match result {
            Err(ConfigError::Parse { field, .. }) => assert_eq!(field, "yaml_file"),
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_env_config_defaults() {
        clear_env();

        let config = JudgeConfig::from_env().expect("Config should load");
        assert_eq!(config, JudgeConfig::default());
    }

    #[test]
    #[serial]
    fn test_env_config_values() {
        clear_env();
        std::env::set_var("SQLJUDGE_DIALECT", "sql92");
        std::env::set_var("SQLJUDGE_OUTPUT", "json");
        std::env::set_var("SQLJUDGE_DELIMITER", "//");
        std::env::set_var("SQLJUDGE_FAIL_FAST", "true");

        let config = JudgeConfig::from_env();
        clear_env();

        let config = config.expect("Config should load");
        assert_eq!(config.dialect, Dialect::Sql92);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.delimiter, "//");
        assert!(config.fail_fast);
    }

    #[test]
    #[serial]
    fn test_env_config_bad_value() {
        clear_env();
        std::env::set_var("SQLJUDGE_FAIL_FAST", "sometimes");

        let result = JudgeConfig::from_env();
        clear_env();

        match result {
            Err(ConfigError::Parse { field, value, .. }) => {
                assert_eq!(field, "SQLJUDGE_FAIL_FAST");
                assert_eq!(value, "sometimes");
            }
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_env_config_non_unicode_value() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        clear_env();
        std::env::set_var("SQLJUDGE_DELIMITER", OsString::from_vec(vec![b';', 0xff]));

        let result = JudgeConfig::from_env();
        clear_env();

        match result {
            Err(ConfigError::EnvVar { key, .. }) => assert_eq!(key, "SQLJUDGE_DELIMITER"),
            other => panic!("Expected env var error, got {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_cli_overrides_yaml() {
        clear_env();
        let file = write_yaml("dialect: postgresql\noutput_format: json\n");

        let config = JudgeConfig::from_cli(CliConfig {
            config_file: Some(file.path().to_path_buf()),
            dialect: Some(Dialect::MySql),
            fail_fast: true,
            ..Default::default()
        })
        .expect("Config should load");

        assert_eq!(config.dialect, Dialect::MySql);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(config.fail_fast);
    }

    #[test]
    #[serial]
    fn test_cli_override_is_validated() {
        clear_env();

        let result = JudgeConfig::from_cli(CliConfig {
            delimiter: Some(" ".to_string()),
            ..Default::default()
        });
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
