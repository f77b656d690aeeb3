//! Batchline Core Configuration System
//!
//! Processor configuration with garde validation and TOML / environment
//! loaders. Only `batch_size` influences processing; `timeout`,
//! `retry_count` and `enable_caching` are carried and reported but have no
//! effect on results.

use std::env;
use std::path::Path;

use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Default number of items per batch
pub const DEFAULT_BATCH_SIZE: usize = 97;
/// Default timeout value (unused)
pub const DEFAULT_TIMEOUT: f64 = 3024.0_f64;
/// Default retry count (unused)
pub const DEFAULT_RETRY_COUNT: u32 = 3;
/// Default caching flag (unused)
pub const DEFAULT_ENABLE_CACHING: bool = true;

/// Environment variable overriding `batch_size`
pub const ENV_BATCH_SIZE: &str = "BATCHLINE_BATCH_SIZE";
/// Environment variable overriding `timeout`
pub const ENV_TIMEOUT: &str = "BATCHLINE_TIMEOUT";
/// Environment variable overriding `retry_count`
pub const ENV_RETRY_COUNT: &str = "BATCHLINE_RETRY_COUNT";
/// Environment variable overriding `enable_caching`
pub const ENV_ENABLE_CACHING: &str = "BATCHLINE_ENABLE_CACHING";

/// Processor configuration
///
/// Constructing the struct directly performs no validation. The loaders
/// (`from_toml_str`, `from_file`, `from_env`) always validate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Number of items per batch
    #[garde(range(min = 1))]
    pub batch_size: usize,

    /// Timeout value (carried, never enforced)
    #[garde(range(min = 0.0_f64))]
    pub timeout: f64,

    /// Retry count (carried, no retries are performed)
    #[garde(skip)]
    pub retry_count: u32,

    /// Caching flag (carried, nothing is cached)
    #[garde(skip)]
    pub enable_caching: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            timeout: DEFAULT_TIMEOUT,
            retry_count: DEFAULT_RETRY_COUNT,
            enable_caching: DEFAULT_ENABLE_CACHING,
        }
    }
}

impl ProcessorConfig {
    /// Default configuration with a custom batch size
    #[must_use]
    pub fn with_batch_size(batch_size: usize) -> Self {
        Self {
            batch_size,
            ..Self::default()
        }
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns error if configuration validation fails.
    pub fn validate(&self) -> CoreResult<()> {
        garde::Validate::validate(self, &())
            .map_err(|e| CoreError::validation("config", format!("Validation failed: {e}")))?;

        // garde range checks let NaN through
        if !self.timeout.is_finite() {
            return Err(CoreError::validation(
                "timeout",
                "Timeout must be a finite number",
            ));
        }

        Ok(())
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the TOML is malformed or the result is invalid.
    pub fn from_toml_str(toml: &str) -> CoreResult<Self> {
        let config: Self = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, parsed or validated.
    pub fn from_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CoreError::config(format!(
                "Failed to read config file '{}': {e}",
                path.display()
            ))
        })?;

        Self::from_toml_str(&contents)
    }

    /// Build configuration from defaults overridden by `BATCHLINE_*`
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if a variable cannot be parsed or the result is invalid.
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] but reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns error if a value cannot be parsed or the result is invalid.
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_BATCH_SIZE) {
            config.batch_size = parse_var(ENV_BATCH_SIZE, &raw)?;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT) {
            config.timeout = parse_var(ENV_TIMEOUT, &raw)?;
        }
        if let Some(raw) = lookup(ENV_RETRY_COUNT) {
            config.retry_count = parse_var(ENV_RETRY_COUNT, &raw)?;
        }
        if let Some(raw) = lookup(ENV_ENABLE_CACHING) {
            config.enable_caching = parse_var(ENV_ENABLE_CACHING, &raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_toml_string(&self) -> CoreResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CoreError::config(format!("Failed to serialize config: {e}")))
    }
}

fn parse_var<T>(key: &str, raw: &str) -> CoreResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| CoreError::config(format!("Invalid value '{raw}' for {key}: {e}")))
}
