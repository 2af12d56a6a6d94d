//! Configuration file support.
//!
//! The calculator reads an optional TOML file:
//!
//! ```toml
//! currency = "USD"       # any supported currency code, default "TRY"
//! log_level = "debug"    # EnvFilter directive, default "info"
//! log_file = "calc.log"  # optional; appended to when set
//! ```
//!
//! An explicit `--config` path must exist. Without one, `profit-calc.toml` in
//! the working directory is used when present, otherwise built-in defaults.

use std::path::{Path, PathBuf};

use profit_core::{Currency, DEFAULT_CURRENCY_CODE, ModelError};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::logging::DEFAULT_FILTER;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "profit-calc.toml";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Currency(#[from] ModelError),
}

/// Settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Currency code used to label amounts.
    pub currency: String,
    /// Tracing filter directive.
    pub log_level: String,
    /// File that receives a copy of every log line.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY_CODE.to_string(),
            log_level: DEFAULT_FILTER.to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Parses and validates TOML text.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        Currency::parse(&config.currency)?;
        Ok(config)
    }

    /// Loads the configuration from `path`, or from [`DEFAULT_CONFIG_FILE`]
    /// when `path` is `None` and that file exists.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    debug!("no config file found, using defaults");
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&contents)
    }

    /// Applies command-line overrides on top of the file values.
    pub fn apply_overrides(
        &mut self,
        currency: Option<String>,
        log_level: Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(currency) = currency {
            Currency::parse(&currency)?;
            self.currency = currency;
        }
        if let Some(log_level) = log_level {
            self.log_level = log_level;
        }
        Ok(())
    }

    /// The configured currency, or the default currency if the code is not
    /// in the table.
    pub fn currency(&self) -> &'static Currency {
        Currency::find(&self.currency).unwrap_or_else(Currency::default_currency)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.currency().code, "TRY");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn file_values_are_read() {
        let config = AppConfig::from_toml_str(
            r#"
            currency = "gbp"
            log_level = "debug"
            log_file = "calc.log"
            "#,
        )
        .unwrap();

        assert_eq!(config.currency().symbol, "£");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file, Some(PathBuf::from("calc.log")));
    }

    #[test]
    fn unknown_currency_is_rejected() {
        let err = AppConfig::from_toml_str(r#"currency = "EUR""#).unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Currency(ModelError::UnknownCurrency(ref code)) if code == "EUR"
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = AppConfig::from_toml_str("colour = \"blue\"").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = AppConfig::load(Some(Path::new("does/not/exist.toml"))).unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut config = AppConfig::default();

        config
            .apply_overrides(Some("AUD".to_string()), Some("warn".to_string()))
            .unwrap();

        assert_eq!(config.currency().code, "AUD");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn invalid_currency_override_keeps_previous_value() {
        let mut config = AppConfig::default();

        let result = config.apply_overrides(Some("XXX".to_string()), None);

        assert!(result.is_err());
        assert_eq!(config.currency, "TRY");
    }
}
