//! Configuration loading from environment.

use std::env;

/// Application configuration.
pub struct Config {
    /// SQLite URL; the in-memory store is used when unset
    pub database_url: Option<String>,
    /// Approval probability for the simulated gateway
    pub approval_rate: f64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").ok();

        let approval_rate = env::var("GATEWAY_APPROVAL_RATE")
            .unwrap_or_else(|_| "0.9".to_string())
            .parse()?;

        Ok(Self {
            database_url,
            approval_rate,
        })
    }
}
