// src/config.rs

//! Manages client configuration: loading from TOML, defaults, and validation.

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Settings for a [`ListClient`](crate::ListClient).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Timeout used by `blpop_default`/`brpop_default`. `0s` blocks indefinitely.
    #[serde(with = "humantime_serde", default = "default_block_timeout")]
    pub default_block_timeout: Duration,

    /// Logs every dispatched command at debug level.
    #[serde(default)]
    pub trace_commands: bool,

    /// An `EnvFilter` directive, e.g. `"info"` or `"warn,spinel_lists=debug"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            default_block_timeout: default_block_timeout(),
            trace_commands: false,
            log_level: default_log_level(),
        }
    }
}

fn default_block_timeout() -> Duration {
    Duration::ZERO
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ClientConfig {
    /// Loads and validates a configuration file. Missing keys take their defaults.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at '{path}'"))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to load client config from '{path}'"))
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: ClientConfig =
            toml::from_str(contents).context("Failed to parse client config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration to ensure logical consistency.
    fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            return Err(anyhow!("log_level cannot be empty"));
        }
        EnvFilter::try_new(&self.log_level)
            .map_err(|e| anyhow!("invalid log_level '{}': {e}", self.log_level))?;
        Ok(())
    }
}
