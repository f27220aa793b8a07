//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! ConfigStore load/reload:
//!     → logging.rs (structured log events, config dumps)
//!     → metrics.rs (load/reload counters, pair gauge)
//!
//! Consumers:
//!     → Log aggregation (stdout, JSON or human-readable)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```

pub mod logging;
pub mod metrics;

pub use logging::{init_logging, LogFormat};
