//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, or JSON by extension)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (field and cross-entry checks)
//!     → ScanConfig (validated, immutable)
//!     → store.rs publishes it as Arc<ScanConfig>
//!
//! On reload (watcher.rs file change, SIGHUP, or direct call):
//!     → store.rs re-reads its source path
//!     → loader.rs + validation.rs as above
//!     → atomic swap of Arc<ScanConfig>, or keep the old one on error
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a full reload
//! - A failed initial load is fatal to the caller; a failed reload is not
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod store;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, ConfigError, ConfigFormat, DecodeError};
pub use schema::{ScanConfig, TokenConfig, NATIVE_TOKEN};
pub use store::ConfigStore;
pub use validation::{validate_config, ValidationError};
pub use watcher::ConfigWatcher;
