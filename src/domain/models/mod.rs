//! Domain models

pub mod config;

pub use config::{ApiConfig, Config, LoggingConfig};
