//! Support code for the `storefront-state` binary.
//!
//! The binary inspects a fjall-backed store, resolves translation keys and
//! runs the translation consistency check. This module holds its TOML
//! configuration and tracing setup.

mod config;
pub mod logging;

pub use config::{Config, ConfigError, I18nConfig, LogFormat, LoggingConfig, StoreConfig};
pub use logging::LoggingError;
