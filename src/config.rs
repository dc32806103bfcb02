// src/config.rs
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_DELAY_MS: u64 = 2000;

/// Application configuration loaded from environment variables.
/// Every value has a default so the app runs with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// Simulated latency of the analysis backend.
    pub analysis_delay: Duration,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let analysis_delay = match std::env::var("RESUME_LENS_DELAY_MS") {
            Ok(raw) => Duration::from_millis(
                raw.parse::<u64>()
                    .context("RESUME_LENS_DELAY_MS must be a whole number of milliseconds")?,
            ),
            Err(_) => Duration::from_millis(DEFAULT_DELAY_MS),
        };

        Ok(Config {
            analysis_delay,
            log_filter: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis_delay: Duration::from_millis(DEFAULT_DELAY_MS),
            log_filter: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delay_is_two_seconds() {
        let config = Config::default();
        assert_eq!(config.analysis_delay, Duration::from_millis(2000));
    }
}
