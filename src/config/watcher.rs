//! Configuration file watcher for hot reload.
//!
//! The parent directory is watched rather than the file itself, so saves that
//! write a temp file and rename it over the config keep being seen. Events for
//! the config file are coalesced for [`DEBOUNCE`] before a single reload.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::ConfigError;
use crate::config::schema::ScanConfig;
use crate::config::store::ConfigStore;

/// Quiet period after the last file event before reloading.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// A watcher that reloads the store whenever its source file changes.
pub struct ConfigWatcher {
    store: Arc<ConfigStore>,
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<Arc<ScanConfig>>,
}

impl ConfigWatcher {
    /// Create a watcher on the store's current source file.
    ///
    /// Returns the watcher and a receiver that gets every config published
    /// by a successful reload.
    pub fn new(
        store: Arc<ConfigStore>,
    ) -> Result<(Self, mpsc::UnboundedReceiver<Arc<ScanConfig>>), ConfigError> {
        let path = store.source_path().ok_or(ConfigError::NoSource)?;
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        Ok((
            Self {
                store,
                path,
                update_tx,
            },
            update_rx,
        ))
    }

    /// Start watching. Keep the returned handle alive to keep watching.
    ///
    /// Must be called from within a Tokio runtime: reloads run on a spawned
    /// task that ends once the handle is dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let dir = watch_dir(&self.path).to_path_buf();
        let file_name = self.path.file_name().map(OsString::from).unwrap_or_default();
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if is_config_event(&event, &file_name) {
                        let _ = event_tx.send(());
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        tokio::spawn(reload_on_events(self.store, event_rx, self.update_tx));

        tracing::info!(path = ?self.path, dir = ?dir, "Config watcher started");
        Ok(watcher)
    }
}

/// Directory holding `path`; `.` for a bare file name.
fn watch_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// True if `event` changes, creates, removes or renames the config file.
fn is_config_event(event: &Event, file_name: &OsString) -> bool {
    let relevant_kind =
        event.kind.is_modify() || event.kind.is_create() || event.kind.is_remove();
    relevant_kind
        && event
            .paths
            .iter()
            .any(|path| path.file_name() == Some(file_name.as_os_str()))
}

async fn reload_on_events(
    store: Arc<ConfigStore>,
    mut events: mpsc::UnboundedReceiver<()>,
    updates: mpsc::UnboundedSender<Arc<ScanConfig>>,
) {
    while events.recv().await.is_some() {
        // One save can emit several events (truncate, write, rename).
        let mut closed = false;
        loop {
            match tokio::time::timeout(DEBOUNCE, events.recv()).await {
                Ok(Some(())) => continue,
                Ok(None) => {
                    closed = true;
                    break;
                }
                Err(_) => break,
            }
        }

        tracing::info!("Config file change detected, reloading...");
        match store.try_reload() {
            Ok(config) => {
                tracing::info!(pairs = config.len(), "Scan config reloaded");
                let _ = updates.send(config);
            }
            Err(e) => {
                tracing::error!(error = %e, "Reload failed, keeping current scan config");
            }
        }

        if closed {
            break;
        }
    }
    tracing::info!("Config watcher stopped");
}
