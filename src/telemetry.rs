// src/telemetry.rs

//! Logging setup for applications embedding the list client.

use crate::config::ClientConfig;
use anyhow::{Result, anyhow};
use tracing_subscriber::filter::EnvFilter;

/// Installs a compact `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the configured `log_level`. Calling this
/// more than once is harmless; later calls leave the first subscriber in place
/// and return `Ok(false)`.
pub fn init_tracing(config: &ClientConfig) -> Result<bool> {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone());
    let filter = EnvFilter::try_new(&log_level)
        .map_err(|e| anyhow!("invalid log filter '{log_level}': {e}"))?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_ansi(true)
        .try_init()
        .is_ok();
    Ok(installed)
}
