//! Bridge scan config daemon.
//!
//! Loads the scan config once (fatal on error), then keeps it current:
//!
//! ```text
//!   config file ──load──▶ ConfigStore ──current()──▶ consumers
//!        │                    ▲
//!        ├── file change ─────┤ reload (errors logged, old config kept)
//!        └── SIGHUP ──────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use bridge_scan_config::config::{ConfigStore, ConfigWatcher};
use bridge_scan_config::lifecycle::{reload_on_sighup, Shutdown};
use bridge_scan_config::observability::{self, logging, LogFormat};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

#[derive(Parser)]
#[command(name = "bridge-scan")]
#[command(about = "Load and hot-reload the swap bridge scan config", long_about = None)]
struct Cli {
    /// Path to the scan config file (TOML, or JSON with a .json extension).
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Reload automatically when the config file changes.
    #[arg(short, long)]
    watch: bool,

    /// Emit logs as JSON.
    #[arg(long)]
    log_json: bool,

    /// Serve Prometheus metrics on this address.
    #[arg(long)]
    metrics_address: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    observability::init_logging(log_format, logging::DEFAULT_DIRECTIVE)?;

    tracing::info!("bridge-scan v{} starting", env!("CARGO_PKG_VERSION"));

    if let Some(addr) = cli.metrics_address {
        observability::metrics::init_metrics(addr)?;
    }

    let store = match ConfigStore::open(&cli.config, log_format) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!(error = %e, "LoadConfig failed");
            std::process::exit(1);
        }
    };

    let shutdown = Shutdown::new();

    let sighup_task = tokio::spawn(reload_on_sighup(store.clone(), shutdown.subscribe()));

    // Dropping the watcher handle stops the watch, so hold it until exit.
    let _watcher = if cli.watch {
        let (watcher, mut updates) = ConfigWatcher::new(store.clone())?;
        let handle = watcher.run()?;
        tokio::spawn(async move {
            while let Some(config) = updates.recv().await {
                tracing::info!(
                    pairs = config.len(),
                    pair_ids = ?config.pair_ids().collect::<Vec<_>>(),
                    "Scan config updated from file change"
                );
            }
        });
        Some(handle)
    } else {
        None
    };

    shutdown.trigger_on_ctrl_c().await?;
    tracing::info!(
        tasks = shutdown.receiver_count(),
        "Waiting for background tasks to stop"
    );
    let remaining = shutdown.drained(SHUTDOWN_GRACE).await;
    if remaining > 0 {
        tracing::warn!(tasks = remaining, "Background tasks still running at shutdown");
        sighup_task.abort();
    }

    match sighup_task.await {
        Ok(Err(e)) => tracing::error!(error = %e, "Reload signal handler failed"),
        Err(e) if !e.is_cancelled() => return Err(e.into()),
        _ => {}
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
