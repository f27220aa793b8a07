//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → fatal on error → start reload triggers
//!
//! Signals (signals.rs):
//!     SIGHUP → ConfigStore::reload
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C → broadcast → background tasks exit
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::reload_on_sighup;
