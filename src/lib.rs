//! Token-pair scan configuration for the swap bridge.
//!
//! Loads, validates and hot-reloads the set of monitored cross-chain pairs.

pub mod chain;
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::{ConfigError, ConfigStore, ScanConfig, TokenConfig};
pub use lifecycle::Shutdown;
