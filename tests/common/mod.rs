//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const USDT: &str = "0xdac17f958d2ee523a2206206994597c13d831ec7";
pub const USDC: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";
pub const TRANSFER_TOPIC: &str =
    "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef";

/// Render one `[[Tokens]]` table.
pub fn token_entry(pair_id: &str, token_address: &str) -> String {
    format!(
        "[[Tokens]]\nPairID = \"{pair_id}\"\nSwapServer = \"http://127.0.0.1:11556/rpc\"\nTokenAddress = \"{token_address}\"\n\n"
    )
}

/// A temp dir holding a single config file.
pub struct ConfigFile {
    _dir: TempDir,
    path: PathBuf,
}

impl ConfigFile {
    pub fn new(name: &str, content: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        Self { _dir: dir, path }
    }

    pub fn toml(content: &str) -> Self {
        Self::new("scan.toml", content)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rewrite(&self, content: &str) {
        fs::write(&self.path, content).unwrap();
    }

    /// Save the way editors do: write a sibling temp file, rename it over.
    pub fn replace_atomically(&self, content: &str) {
        let tmp = self.path.with_file_name(".scan.toml.tmp");
        fs::write(&tmp, content).unwrap();
        fs::rename(&tmp, &self.path).unwrap();
    }

    pub fn remove(&self) {
        fs::remove_file(&self.path).unwrap();
    }
}
