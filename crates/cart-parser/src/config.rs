//! Parser configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command-line flags in `cart-parse` override what is loaded here.
//!
//! | Variable             | Values          | Default |
//! |----------------------|-----------------|---------|
//! | `CART_OUTPUT_FORMAT` | `text` / `json` | `text`  |
//! | `CART_LOG`           | tracing filter  | `warn`  |

use std::env;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;

pub const OUTPUT_FORMAT_VAR: &str = "CART_OUTPUT_FORMAT";
pub const LOG_FILTER_VAR: &str = "CART_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

/// How `cart-parse` prints a successful result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per item, then the total.
    #[default]
    Text,
    /// The parse result as JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue(OUTPUT_FORMAT_VAR.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Parser configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Output format for the CLI
    pub output_format: OutputFormat,

    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            output_format: OutputFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ParserConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output_format = match lookup(OUTPUT_FORMAT_VAR) {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };

        let log_filter = lookup(LOG_FILTER_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let config = ParserConfig {
            output_format,
            log_filter,
        };
        config.env_filter()?;

        Ok(config)
    }

    /// Builds the tracing filter from `log_filter`.
    ///
    /// A directive that `EnvFilter` rejects is reported against `CART_LOG`
    /// instead of being replaced by a default.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log_filter)
            .map_err(|_| ConfigError::InvalidValue(LOG_FILTER_VAR.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ParserConfig::from_lookup(lookup_in(&[])).unwrap();
        assert_eq!(config, ParserConfig::default());
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_env_values() {
        let config = ParserConfig::from_lookup(lookup_in(&[
            ("CART_OUTPUT_FORMAT", "JSON"),
            ("CART_LOG", "cart_parser=debug"),
        ]))
        .unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.log_filter, "cart_parser=debug");
    }

    #[test]
    fn test_invalid_format() {
        let err = ParserConfig::from_lookup(lookup_in(&[("CART_OUTPUT_FORMAT", "xml")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for CART_OUTPUT_FORMAT");
    }

    #[test]
    fn test_invalid_log_filter() {
        let err = ParserConfig::from_lookup(lookup_in(&[("CART_LOG", "cart_parser=[[notalevel")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for CART_LOG");
    }

    #[test]
    fn test_env_filter_from_default() {
        assert!(ParserConfig::default().env_filter().is_ok());
    }

    #[test]
    fn test_blank_log_filter_falls_back() {
        let config = ParserConfig::from_lookup(lookup_in(&[("CART_LOG", "  ")])).unwrap();
        assert_eq!(config.log_filter, "warn");
    }
}
