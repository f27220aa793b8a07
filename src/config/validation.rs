//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Field checks: required values, address and topic formats
//! - Cross-entry checks: unique pair ids, unique token addresses
//!
//! # Design Decisions
//! - Fails fast: the first error found is returned, entries checked in order
//! - Uniqueness is case-insensitive; format checks are not
//! - Native tokens are exempt from address format and uniqueness checks
//! - Validation is a pure function: &ScanConfig → Result<(), ValidationError>

use std::collections::HashSet;

use thiserror::Error;

use crate::chain;
use crate::config::schema::{ScanConfig, TokenConfig};

/// A semantic error in an otherwise well-formed config document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no token config exist")]
    EmptyTokenList,

    #[error("empty '{field}'")]
    MissingField { field: &'static str },

    #[error("wrong '{field}' {value}")]
    MalformedAddress { field: &'static str, value: String },

    #[error("wrong 'LogTopics' {value}")]
    MalformedHash { value: String },

    #[error("duplicate pairID {0}")]
    DuplicatePairId(String),

    #[error("duplicate token address {0}")]
    DuplicateTokenAddress(String),
}

/// Validate a whole scan config.
pub fn validate_config(config: &ScanConfig) -> Result<(), ValidationError> {
    if config.tokens.is_empty() {
        return Err(ValidationError::EmptyTokenList);
    }

    let mut pair_ids = HashSet::new();
    let mut token_addresses = HashSet::new();

    for token in &config.tokens {
        validate_token(token)?;

        let pair_id = token.pair_id.to_lowercase();
        if !pair_ids.insert(pair_id.clone()) {
            return Err(ValidationError::DuplicatePairId(pair_id));
        }

        if !token.is_native_token() {
            let address = token.token_address.to_lowercase();
            if !token_addresses.insert(address.clone()) {
                return Err(ValidationError::DuplicateTokenAddress(address));
            }
        }
    }

    Ok(())
}

/// Validate the fields of a single token entry.
pub fn validate_token(token: &TokenConfig) -> Result<(), ValidationError> {
    if token.pair_id.is_empty() {
        return Err(ValidationError::MissingField { field: "PairID" });
    }
    if token.swap_server.is_empty() {
        return Err(ValidationError::MissingField { field: "SwapServer" });
    }
    if !token.is_native_token() && !chain::is_hex_address(&token.token_address) {
        return Err(ValidationError::MalformedAddress {
            field: "TokenAddress",
            value: token.token_address.clone(),
        });
    }
    if !token.deposit_address.is_empty() && !chain::is_hex_address(&token.deposit_address) {
        return Err(ValidationError::MalformedAddress {
            field: "DepositAddress",
            value: token.deposit_address.clone(),
        });
    }
    if let Some(topic) = token
        .log_topics
        .iter()
        .find(|topic| !chain::is_canonical_hash(topic))
    {
        return Err(ValidationError::MalformedHash {
            value: topic.clone(),
        });
    }
    Ok(())
}
