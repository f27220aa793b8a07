//! Configuration schema definitions.
//!
//! This module defines the scan configuration consumed by the swap bridge.
//! Key names match the on-disk documents exactly (`PairID`, `SwapServer`, ...).

use alloy::primitives::{Address, B256};
use serde::{Deserialize, Serialize};

use crate::chain;

/// Sentinel `TokenAddress` for the chain's base asset.
pub const NATIVE_TOKEN: &str = "native";

/// Root configuration: the set of monitored token pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Monitored pairs, in document order.
    #[serde(rename = "Tokens")]
    pub tokens: Vec<TokenConfig>,
}

impl ScanConfig {
    /// Find a pair by id, ignoring letter case.
    pub fn find_pair(&self, pair_id: &str) -> Option<&TokenConfig> {
        self.tokens
            .iter()
            .find(|token| token.pair_id.eq_ignore_ascii_case(pair_id))
    }

    /// Pair ids in document order.
    pub fn pair_ids(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|token| token.pair_id.as_str())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// One monitored token pair.
///
/// Missing keys decode to empty values so that validation, not the decoder,
/// reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Unique pair identifier (case-insensitive).
    #[serde(rename = "PairID")]
    pub pair_id: String,

    /// Swap server coordinating this pair.
    #[serde(rename = "SwapServer")]
    pub swap_server: String,

    /// Token contract address, or `"native"` for the base asset.
    #[serde(rename = "TokenAddress")]
    pub token_address: String,

    /// Address receiving deposits, if any.
    #[serde(rename = "DepositAddress", skip_serializing_if = "String::is_empty")]
    pub deposit_address: String,

    /// Event log topics to filter on.
    #[serde(rename = "LogTopics", skip_serializing_if = "Vec::is_empty")]
    pub log_topics: Vec<String>,
}

impl TokenConfig {
    /// True if this pair tracks the chain's base asset.
    pub fn is_native_token(&self) -> bool {
        self.token_address == NATIVE_TOKEN
    }

    /// Parsed token contract address. `None` for native tokens.
    pub fn token_address(&self) -> Option<Address> {
        if self.is_native_token() {
            return None;
        }
        chain::parse_address(&self.token_address)
    }

    /// Parsed deposit address. `None` when unset.
    pub fn deposit_address(&self) -> Option<Address> {
        if self.deposit_address.is_empty() {
            return None;
        }
        chain::parse_address(&self.deposit_address)
    }

    /// Parsed log topics. Entries that fail to parse are skipped.
    pub fn log_topics(&self) -> Vec<B256> {
        self.log_topics
            .iter()
            .filter_map(|topic| chain::parse_hash(topic))
            .collect()
    }
}
