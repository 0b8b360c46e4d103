//! Runtime configuration, read from the environment (and an optional `.env`).

use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use validator::Validate;

use crate::error::AppError;

pub const ENV_HOST: &str = "STYLETYPE_HOST";
pub const ENV_PORT: &str = "STYLETYPE_PORT";
pub const ENV_MAX_TEXT_CHARS: &str = "STYLETYPE_MAX_TEXT_CHARS";
pub const ENV_RATE_LIMIT: &str = "STYLETYPE_RATE_LIMIT";
pub const ENV_RATE_WINDOW_SECS: &str = "STYLETYPE_RATE_WINDOW_SECS";
pub const ENV_LOG_FORMAT: &str = "STYLETYPE_LOG_FORMAT";

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// Bunyan-style JSON records
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" | "bunyan" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!("Unknown log format: {}", other))),
        }
    }
}

/// Dashboard server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    #[validate(length(min = 1))]
    pub host: String,
    /// TCP port. 0 lets the OS pick one.
    pub port: u16,
    /// Longest accepted input, in characters.
    #[validate(range(min = 1, max = 1000000))]
    pub max_text_chars: usize,
    /// Analyze requests allowed per client within one window.
    #[validate(range(min = 1))]
    pub rate_limit: usize,
    /// Rate limiter window length in seconds.
    #[validate(range(min = 1))]
    pub rate_window_secs: u64,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
            max_text_chars: 10_000,
            rate_limit: 60,
            rate_window_secs: 60,
            log_format: LogFormat::Pretty,
        }
    }
}

/// Read `key`, falling back to `default` when unset. Set-but-unparsable is an error.
fn env_or<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{} has invalid value '{}': {}", key, raw, e))),
        Err(_) => Ok(default),
    }
}

impl AppConfig {
    /// Load configuration from `.env` (if present) and the process environment.
    pub fn load() -> Result<Self, AppError> {
        // A missing .env file is fine
        let _ = dotenv::dotenv();
        Self::from_env()
    }

    /// Build configuration from the process environment only.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let config = Self {
            host: env_or(ENV_HOST, defaults.host)?,
            port: env_or(ENV_PORT, defaults.port)?,
            max_text_chars: env_or(ENV_MAX_TEXT_CHARS, defaults.max_text_chars)?,
            rate_limit: env_or(ENV_RATE_LIMIT, defaults.rate_limit)?,
            rate_window_secs: env_or(ENV_RATE_WINDOW_SECS, defaults.rate_window_secs)?,
            log_format: env_or(ENV_LOG_FORMAT, defaults.log_format)?,
        };

        config
            .validate()
            .map_err(|e| AppError::Config(format!("Invalid configuration: {}", e)))?;

        Ok(config)
    }

    /// Socket address for the HTTP listener.
    pub fn bind_addr(&self) -> Result<SocketAddr, AppError> {
        let ip: IpAddr = self.host.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn rate_window(&self) -> Duration {
        Duration::from_secs(self.rate_window_secs)
    }
}
