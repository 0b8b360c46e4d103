//! Configuration Tests
//!
//! Environment-driven loading of the dashboard configuration.

use crate::config::{
    AppConfig, LogFormat, ENV_HOST, ENV_LOG_FORMAT, ENV_MAX_TEXT_CHARS, ENV_PORT, ENV_RATE_LIMIT,
    ENV_RATE_WINDOW_SECS,
};
use crate::error::AppError;

/// Run `f` with every config variable unset except the given overrides
fn with_env<F: FnOnce()>(overrides: &[(&str, &str)], f: F) {
    let keys = [
        ENV_HOST,
        ENV_PORT,
        ENV_MAX_TEXT_CHARS,
        ENV_RATE_LIMIT,
        ENV_RATE_WINDOW_SECS,
        ENV_LOG_FORMAT,
    ];
    let vars: Vec<(&str, Option<&str>)> = keys
        .iter()
        .map(|key| {
            let value = overrides.iter().find(|(k, _)| k == key).map(|(_, v)| *v);
            (*key, value)
        })
        .collect();

    temp_env::with_vars(vars, f);
}

#[cfg(test)]
mod config_loading_tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_defaults_when_unset() {
        with_env(&[], || {
            let config = AppConfig::from_env().expect("defaults should load");

            assert_eq!(config.host, "127.0.0.1");
            assert_eq!(config.port, 8501);
            assert_eq!(config.max_text_chars, 10_000);
            assert_eq!(config.rate_limit, 60);
            assert_eq!(config.rate_window(), Duration::from_secs(60));
            assert_eq!(config.log_format, LogFormat::Pretty);
        });
    }

    #[test]
    fn test_overrides() {
        with_env(
            &[
                (ENV_HOST, "0.0.0.0"),
                (ENV_PORT, "9000"),
                (ENV_MAX_TEXT_CHARS, "500"),
                (ENV_RATE_LIMIT, "5"),
                (ENV_RATE_WINDOW_SECS, "10"),
                (ENV_LOG_FORMAT, "JSON"),
            ],
            || {
                let config = AppConfig::from_env().expect("overrides should load");

                assert_eq!(config.bind_addr().unwrap().to_string(), "0.0.0.0:9000");
                assert_eq!(config.max_text_chars, 500);
                assert_eq!(config.rate_limit, 5);
                assert_eq!(config.rate_window_secs, 10);
                assert_eq!(config.log_format, LogFormat::Json);
            },
        );
    }

    #[test]
    fn test_unparsable_port() {
        with_env(&[(ENV_PORT, "eighty")], || {
            let err = AppConfig::from_env().unwrap_err();
            assert!(matches!(err, AppError::Config(_)));
            assert!(err.to_string().contains(ENV_PORT));
        });
    }

    #[test]
    fn test_zero_rate_limit_rejected() {
        with_env(&[(ENV_RATE_LIMIT, "0")], || {
            assert!(matches!(AppConfig::from_env(), Err(AppError::Config(_))));
        });
    }

    #[test]
    fn test_max_text_chars_out_of_range() {
        with_env(&[(ENV_MAX_TEXT_CHARS, "2000000")], || {
            assert!(matches!(AppConfig::from_env(), Err(AppError::Config(_))));
        });
    }

    #[test]
    fn test_unknown_log_format() {
        with_env(&[(ENV_LOG_FORMAT, "xml")], || {
            assert!(matches!(AppConfig::from_env(), Err(AppError::Config(_))));
        });
    }

    #[test]
    fn test_invalid_host_fails_at_bind() {
        with_env(&[(ENV_HOST, "localhost:80")], || {
            let config = AppConfig::from_env().expect("host is only checked at bind time");
            assert!(matches!(config.bind_addr(), Err(AppError::Config(_))));
        });
    }
}
