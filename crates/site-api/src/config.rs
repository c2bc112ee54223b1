//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

/// Site API server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `SITE_ADDR` | Server bind address | `127.0.0.1:8780` |
    /// | `SQLITE_PATH` | SQLite database URL | `sqlite:sleeq.db?mode=rwc` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("SITE_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8780".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url = env::var("SQLITE_PATH")
            .unwrap_or_else(|_| "sqlite:sleeq.db?mode=rwc".to_string());

        Ok(Self { addr, database_url })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid SITE_ADDR format")]
    InvalidAddr,
}
