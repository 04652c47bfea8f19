// src/config.rs
use crate::application::timing::Timing;
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    log_filter: String,
    simulated_latency: Duration,
    operation_timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_log_filter() -> String {
    "info,tower_http=info".into()
}

fn default_simulated_latency_ms() -> u64 {
    1000
}

fn default_operation_timeout_ms() -> u64 {
    10_000
}

fn millis(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: fn() -> u64,
) -> Result<u64, ConfigError> {
    match lookup(name) {
        None => Ok(default()),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::Invalid(format!("{name} must be a whole number of milliseconds, got '{raw}'"))),
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset. Load `.env` before calling this.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let log_filter = lookup("RUST_LOG")
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(default_log_filter);
        let latency_ms = millis(&lookup, "SIMULATED_LATENCY_MS", default_simulated_latency_ms)?;
        let timeout_ms = millis(&lookup, "OPERATION_TIMEOUT_MS", default_operation_timeout_ms)?;

        if timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "OPERATION_TIMEOUT_MS must be greater than zero".into(),
            ));
        }

        Ok(Self {
            listen_addr,
            log_filter,
            simulated_latency: Duration::from_millis(latency_ms),
            operation_timeout: Duration::from_millis(timeout_ms),
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// `tracing_subscriber::EnvFilter` directives, from `RUST_LOG`.
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    pub fn simulated_latency(&self) -> Duration {
        self.simulated_latency
    }

    pub fn operation_timeout(&self) -> Duration {
        self.operation_timeout
    }

    pub fn timing(&self) -> Timing {
        Timing::new(self.simulated_latency, self.operation_timeout)
    }
}
