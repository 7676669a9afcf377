//! Configuration Module
//!
//! Handles loading and validating cache and server configuration from
//! environment variables.

use std::env;
use std::time::Duration;

use crate::error::{CacheError, Result};

/// Cache and server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Time-to-live in seconds applied to every entry
    pub ttl: u64,
    /// Seconds between reaper sweeps, None = sweep once per TTL
    pub reap_interval: Option<u64>,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL` - Entry TTL in seconds (default: 5)
    /// - `REAP_INTERVAL` - Sweep period in seconds (default: same as `CACHE_TTL`)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            reap_interval: env::var("REAP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }

    /// Rejects zero durations before they reach the reaper's timer.
    pub fn validate(&self) -> Result<()> {
        if self.ttl == 0 {
            return Err(CacheError::InvalidConfig(
                "CACHE_TTL must be at least 1 second".to_string(),
            ));
        }
        if self.reap_interval == Some(0) {
            return Err(CacheError::InvalidConfig(
                "REAP_INTERVAL must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }

    /// Entry TTL as a `Duration`.
    pub fn ttl_duration(&self) -> Duration {
        Duration::from_secs(self.ttl)
    }

    /// Sweep period as a `Duration`, falling back to the TTL.
    pub fn reap_interval_duration(&self) -> Duration {
        Duration::from_secs(self.reap_interval.unwrap_or(self.ttl))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ttl: 5,
            reap_interval: None,
            server_port: 3000,
        }
    }
}
