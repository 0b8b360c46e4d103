//! StyleType core: rule-based writing style scorer and its dashboard server.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod rate_limiter;
pub mod samples;
pub mod server;
pub mod style;

#[cfg(test)]
mod tests;
