//! Chain utilities shared by the configuration subsystem.
//!
//! # Responsibilities
//! - Recognize well-formed hex addresses (20 bytes)
//! - Recognize canonical 32-byte hashes (event log topics)
//!
//! # Design Decisions
//! - Parsing is delegated to `alloy` primitives (`Address`, `B256`)
//! - Address checks accept any letter case; hash checks are canonical-only

pub mod hex;

pub use hex::{is_canonical_hash, is_hex_address, parse_address, parse_hash};
