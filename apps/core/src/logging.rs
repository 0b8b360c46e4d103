//! Tracing subscriber setup.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogFormat;
use crate::error::AppError;

const APP_NAME: &str = "styletype";

/// Install the global subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init(format: LogFormat) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (pretty, bunyan) = match format {
        LogFormat::Pretty => (Some(fmt::layer().with_target(false)), None),
        LogFormat::Json => (
            None,
            Some(BunyanFormattingLayer::new(
                APP_NAME.to_string(),
                std::io::stdout,
            )),
        ),
    };
    // JsonStorageLayer must sit in front of the bunyan formatter
    let storage = bunyan.as_ref().map(|_| JsonStorageLayer);

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(storage)
        .with(bunyan)
        .try_init()
        .map_err(|e| AppError::Internal(format!("Failed to install tracing subscriber: {}", e)))
}
