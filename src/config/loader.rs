//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::ScanConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file '{}' not exist", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode config file '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    #[error("check config failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("no config file has been loaded")]
    NoSource,
}

/// Decoder failure, by document format.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick a format from the file extension. Anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }

    /// Decode a document in this format.
    pub fn decode(self, content: &str) -> Result<ScanConfig, DecodeError> {
        let config = match self {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };
        Ok(config)
    }
}

/// Read and decode a config file without validating it.
pub fn read_config(path: &Path) -> Result<ScanConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    ConfigFormat::from_path(path)
        .decode(&content)
        .map_err(|source| ConfigError::Decode {
            path: path.to_path_buf(),
            source,
        })
}

/// Load and validate configuration from a file.
pub fn load_config(path: &Path) -> Result<ScanConfig, ConfigError> {
    let config = read_config(path)?;
    validate_config(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const VALID_TOML: &str = r#"
[[Tokens]]
PairID = "P1"
SwapServer = "s"
TokenAddress = "native"
"#;

    fn write_config(suffix: &str, content: &str) -> NamedTempFile {
        let mut f = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_load_toml() {
        let f = write_config(".toml", VALID_TOML);
        let config = load_config(f.path()).unwrap();
        assert_eq!(config.tokens.len(), 1);
        assert!(config.tokens[0].is_native_token());
    }

    #[test]
    fn test_load_json() {
        let f = write_config(
            ".json",
            r#"{"Tokens":[{"PairID":"P1","SwapServer":"s","TokenAddress":"native"}]}"#,
        );
        let config = load_config(f.path()).unwrap();
        assert_eq!(config.tokens[0].pair_id, "P1");
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("a.JSON")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("config")), ConfigFormat::Toml);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/scan.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
        assert_eq!(err.to_string(), "config file '/nonexistent/scan.toml' not exist");
    }

    #[test]
    fn test_decode_error() {
        let f = write_config(".toml", "[[Tokens]\nPairID = ");
        let err = load_config(f.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Decode {
                source: DecodeError::Toml(_),
                ..
            }
        ));
    }

    #[test]
    fn test_validation_error() {
        let f = write_config(".toml", "");
        let err = load_config(f.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Validation(ValidationError::EmptyTokenList)
        ));
        assert!(err.to_string().contains("no token config exist"));
    }

    #[test]
    fn test_read_skips_validation() {
        let f = write_config(".toml", "");
        assert!(read_config(f.path()).unwrap().is_empty());
    }
}
