//! Runtime configuration.
//!
//! Values come from the process environment, which `main` first populates from
//! an optional `.env` file via `dotenv`.

use crate::errors::ConfigError;
use std::path::PathBuf;
use std::str::FromStr;

/// Selects the report renderer.
pub const ENV_OUTPUT: &str = "SUBNET_CALC_OUTPUT";
/// Enables or disables ANSI colours in the text report.
pub const ENV_COLOR: &str = "SUBNET_CALC_COLOR";
/// Path to the log4rs YAML configuration.
pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::OutputFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output: OutputFormat,
    pub color: bool,
    pub log_config: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: OutputFormat::Text,
            color: true,
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
        }
    }
}

impl Config {
    /// Read configuration from the environment, falling back to defaults for
    /// unset variables.
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from any name -> value lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(output) = lookup(ENV_OUTPUT) {
            config.output = output.parse()?;
        }
        if let Some(color) = lookup(ENV_COLOR) {
            config.color = parse_bool(ENV_COLOR, &color)?;
        }
        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            config.log_config = PathBuf::from(path);
        }
        Ok(config)
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Bool {
            name,
            value: value.to_string(),
        }),
    }
}
