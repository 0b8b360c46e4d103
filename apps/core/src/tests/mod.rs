//! Test Module
//!
//! Test suite for the StyleType core.
//!
//! ## Test Categories
//! - `style_tests`: whole-pipeline properties and worked scenarios
//! - `server_tests`: dashboard handlers and an HTTP round trip
//! - `config_tests`: environment-driven configuration

pub mod config_tests;
