//! CLI configuration

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use domain_fnol::FAST_TRACK_THRESHOLD;

/// Prefix of the environment variables read by [`CliConfig::from_env`]
pub const ENV_PREFIX: &str = "FNOL";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CliConfig {
    /// Log level or filter directive
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Damage amount below which claims are fast-tracked
    pub fast_track_threshold: f64,
    /// Pretty-print the output document
    pub pretty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            fast_track_threshold: FAST_TRACK_THRESHOLD,
            pretty: true,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `FNOL_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration from an environment source, filling in defaults
    pub fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config: Self = Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", "text")?
            .set_default("fast_track_threshold", defaults.fast_track_threshold)?
            .set_default("pretty", defaults.pretty)?
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.fast_track_threshold.is_finite() || self.fast_track_threshold < 0.0 {
            return Err(ConfigError::Message(format!(
                "fast_track_threshold must be a finite, non-negative amount, got {}",
                self.fast_track_threshold
            )));
        }
        Ok(())
    }
}
