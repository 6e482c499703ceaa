use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use thiserror::Error;
use validator::{Validate, ValidationError};

use crate::output::OutputFormat;
use crate::sql_judge::Dialect;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable error for {key}: {source}")]
    EnvVar {
        key: String,
        source: std::env::VarError,
    },

    #[error("Parse error for {field}: {value} - {source}")]
    Parse {
        field: String,
        value: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Judge configuration with validation
#[derive(Clone, Debug, PartialEq, Validate, Serialize, Deserialize)]
#[serde(default)]
pub struct JudgeConfig {
    /// SQL dialect whose rule table is applied
    pub dialect: Dialect,

    /// How each judged statement is printed
    pub output_format: OutputFormat,

    /// Statement delimiter used to split scripts
    #[validate(
        length(min = 1, max = 16, message = "Delimiter must be 1 to 16 characters"),
        custom(function = "validate_delimiter")
    )]
    pub delimiter: String,

    /// Stop at the first statement that cannot be classified
    pub fail_fast: bool,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::MySql,
            output_format: OutputFormat::Text,
            delimiter: ";".to_string(),
            fail_fast: false,
        }
    }
}

impl JudgeConfig {
    /// Create configuration from environment variables with validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            dialect: parse_env_var("SQLJUDGE_DIALECT", "mysql")?,
            output_format: parse_env_var("SQLJUDGE_OUTPUT", "text")?,
            delimiter: parse_env_var("SQLJUDGE_DELIMITER", ";")?,
            fail_fast: parse_env_var("SQLJUDGE_FAIL_FAST", "false")?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Create configuration from YAML file
    pub fn from_yaml_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Parse {
            field: "yaml_file".to_string(),
            value: "file read failed".to_string(),
            source: Box::new(e),
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
            field: "yaml_content".to_string(),
            value: content,
            source: Box::new(e),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load from the YAML file named on the command line, or from the environment,
    /// then apply command line overrides
    pub fn from_cli(cli: CliConfig) -> Result<Self, ConfigError> {
        let mut config = match &cli.config_file {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::from_env()?,
        };
        config.merge(cli);

        config.validate()?;
        Ok(config)
    }

    /// Merge command line overrides (CLI overrides file and environment)
    pub fn merge(&mut self, cli: CliConfig) {
        if let Some(dialect) = cli.dialect {
            self.dialect = dialect;
        }
        if let Some(output_format) = cli.output_format {
            self.output_format = output_format;
        }
        if let Some(delimiter) = cli.delimiter {
            self.delimiter = delimiter;
        }
        self.fail_fast |= cli.fail_fast;
    }
}

/// CLI configuration (parsed from command line arguments)
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub config_file: Option<PathBuf>,
    pub dialect: Option<Dialect>,
    pub output_format: Option<OutputFormat>,
    pub delimiter: Option<String>,
    pub fail_fast: bool,
}

// Must not be blank or open a quoted run, else no statement boundary could ever be found
fn validate_delimiter(delimiter: &str) -> Result<(), ValidationError> {
    if delimiter.trim().is_empty() {
        return Err(ValidationError::new("blank_delimiter"));
    }
    if delimiter.contains(['\'', '"', '`']) {
        return Err(ValidationError::new("quote_in_delimiter"));
    }
    Ok(())
}

/// Parse an environment variable with a default value. A set but non-unicode
/// value is an error rather than a silent fallback to the default.
fn parse_env_var<T: std::str::FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = match env::var(key) {
        Ok(value) => value,
        Err(env::VarError::NotPresent) => default.to_string(),
        Err(source) => {
            return Err(ConfigError::EnvVar {
                key: key.to_string(),
                source,
            })
        }
    };
    value.parse().map_err(|e| ConfigError::Parse {
        field: key.to_string(),
        value,
        source: Box::new(e),
    })
}
