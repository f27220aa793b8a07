//! Metrics collection and exposition.
//!
//! # Metrics
//! - `scan_config_loads_total` (counter): initial loads by outcome
//! - `scan_config_reloads_total` (counter): reload attempts by outcome
//! - `scan_config_token_pairs` (gauge): pairs in the published config
//!
//! Recording is a no-op until a recorder is installed, so the library can be
//! used without an exporter.

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Result label for load/reload counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    fn as_str(self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Failure => "failure",
        }
    }
}

/// Install the Prometheus recorder with an HTTP scrape endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint started");
    Ok(())
}

pub fn record_load(outcome: Outcome) {
    metrics::counter!("scan_config_loads_total", "outcome" => outcome.as_str()).increment(1);
}

pub fn record_reload(outcome: Outcome) {
    metrics::counter!("scan_config_reloads_total", "outcome" => outcome.as_str()).increment(1);
}

pub fn record_token_pairs(count: usize) {
    metrics::gauge!("scan_config_token_pairs").set(count as f64);
}
