//! The published scan config and its reload policy.
//!
//! `load` is for startup: any error is returned to the caller, which is
//! expected to abort. `reload` is for a running service: errors are logged
//! and the previous config stays published.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use arc_swap::{ArcSwap, ArcSwapOption};

use crate::config::loader::{read_config, ConfigError};
use crate::config::schema::ScanConfig;
use crate::config::validation::validate_config;
use crate::observability::logging::{render_json, LogFormat};
use crate::observability::metrics::{self, Outcome};

/// Owner of the current scan config.
///
/// Share it as `Arc<ConfigStore>`. Readers get immutable snapshots; a
/// reload swaps the whole snapshot, so a reader sees either the old or
/// the new config.
pub struct ConfigStore {
    current: ArcSwap<ScanConfig>,
    source: ArcSwapOption<PathBuf>,
    log_format: LogFormat,
}

impl ConfigStore {
    /// Create a store publishing an empty config and no source.
    pub fn new(log_format: LogFormat) -> Self {
        Self {
            current: ArcSwap::from_pointee(ScanConfig::default()),
            source: ArcSwapOption::empty(),
            log_format,
        }
    }

    /// Create a store and load `path` into it.
    pub fn open(path: impl AsRef<Path>, log_format: LogFormat) -> Result<Self, ConfigError> {
        let store = Self::new(log_format);
        store.load(path)?;
        Ok(store)
    }

    /// Load, validate and publish the config at `path`.
    ///
    /// On success `path` becomes the source for later reloads. On failure
    /// nothing is published and the source is unchanged.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Arc<ScanConfig>, ConfigError> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "Loading scan config");

        let config = match self.read_and_validate(path) {
            Ok(config) => config,
            Err(e) => {
                metrics::record_load(Outcome::Failure);
                return Err(e);
            }
        };

        self.source.store(Some(Arc::new(path.to_path_buf())));
        let config = self.publish(config);
        metrics::record_load(Outcome::Success);
        tracing::info!(path = %path.display(), pairs = config.len(), "Scan config loaded");
        Ok(config)
    }

    /// Re-read the source file, keeping the current config on failure.
    ///
    /// Returns true if a new config was published.
    pub fn reload(&self) -> bool {
        match self.try_reload() {
            Ok(config) => {
                tracing::info!(pairs = config.len(), "Scan config reloaded");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Reload failed, keeping current scan config");
                false
            }
        }
    }

    /// Re-read the source file, returning the error instead of logging it.
    pub fn try_reload(&self) -> Result<Arc<ScanConfig>, ConfigError> {
        let result = self.reload_from_source();
        let outcome = if result.is_ok() {
            Outcome::Success
        } else {
            Outcome::Failure
        };
        metrics::record_reload(outcome);
        result
    }

    fn reload_from_source(&self) -> Result<Arc<ScanConfig>, ConfigError> {
        let path = self.source.load_full().ok_or(ConfigError::NoSource)?;
        tracing::info!(path = %path.display(), "Reloading scan config");

        let config = self.read_and_validate(&path)?;
        Ok(self.publish(config))
    }

    /// The published config.
    pub fn current(&self) -> Arc<ScanConfig> {
        self.current.load_full()
    }

    /// The file the published config came from, if any was loaded.
    pub fn source_path(&self) -> Option<PathBuf> {
        self.source.load_full().map(|path| PathBuf::clone(&path))
    }

    fn read_and_validate(&self, path: &Path) -> Result<ScanConfig, ConfigError> {
        let config = read_config(path)?;
        tracing::info!(config = %render_json(&config, self.log_format), "Scan config decoded");
        validate_config(&config)?;
        Ok(config)
    }

    fn publish(&self, config: ScanConfig) -> Arc<ScanConfig> {
        let config = Arc::new(config);
        self.current.store(Arc::clone(&config));
        metrics::record_token_pairs(config.len());
        config
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(LogFormat::default())
    }
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("source", &self.source_path())
            .field("pairs", &self.current.load().len())
            .finish()
    }
}
