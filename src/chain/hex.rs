//! Hex address and hash format checks.

use alloy::primitives::{hex, Address, B256};

/// Number of hex digits in a 20-byte address.
const ADDRESS_HEX_LEN: usize = 40;

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Returns true if `s` is a 20-byte hex address.
///
/// The `0x`/`0X` prefix is optional and digits may be in any case. Checksums
/// are not enforced.
pub fn is_hex_address(s: &str) -> bool {
    parse_address(s).is_some()
}

/// Parse a hex address with the same leniency as [`is_hex_address`].
pub fn parse_address(s: &str) -> Option<Address> {
    let digits = strip_hex_prefix(s);
    if digits.len() != ADDRESS_HEX_LEN || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    format!("0x{digits}").parse().ok()
}

/// Parse a 32-byte hash. Any prefix or letter case accepted by `B256` parses.
pub fn parse_hash(s: &str) -> Option<B256> {
    s.parse::<B256>().ok()
}

/// Returns true if `s` is a 32-byte hash in canonical form.
///
/// Canonical means rendering the parsed hash yields exactly `s` again:
/// a `0x` prefix followed by 64 lower-case hex digits.
pub fn is_canonical_hash(s: &str) -> bool {
    parse_hash(s).is_some_and(|hash| hex::encode_prefixed(hash) == s)
}
