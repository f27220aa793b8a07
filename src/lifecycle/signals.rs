//! OS signal handling.
//!
//! # Responsibilities
//! - SIGHUP triggers a config reload, not a shutdown
//! - Reload failures are logged by the store and never end the loop
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - On non-unix targets there is no reload signal; the task just waits
//!   for shutdown

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::config::ConfigStore;

/// Reload `store` on every SIGHUP until shutdown fires.
#[cfg(unix)]
pub async fn reload_on_sighup(
    store: Arc<ConfigStore>,
    mut shutdown: broadcast::Receiver<()>,
) -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut hangup = signal(SignalKind::hangup())?;
    tracing::info!("Listening for SIGHUP to reload scan config");

    loop {
        tokio::select! {
            received = hangup.recv() => {
                if received.is_none() {
                    break;
                }
                tracing::info!("SIGHUP received");
                store.reload();
            }
            _ = shutdown.recv() => break,
        }
    }

    tracing::info!("Reload signal handler stopped");
    Ok(())
}

#[cfg(not(unix))]
pub async fn reload_on_sighup(
    _store: Arc<ConfigStore>,
    mut shutdown: broadcast::Receiver<()>,
) -> std::io::Result<()> {
    let _ = shutdown.recv().await;
    Ok(())
}
