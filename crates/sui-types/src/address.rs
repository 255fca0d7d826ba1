//! Address normalization utilities.
//!
//! This module is the canonical source for address normalization in the workspace.
//! Other crates should import from here rather than defining their own logic.
//!
//! Sui addresses are 32-byte values, but users type them in different formats:
//! - Short form: "0x2"
//! - Full form: "0x0000000000000000000000000000000000000000000000000000000000000002"
//! - Without prefix: "2"
//!
//! Pure `address` arguments are always handed to the encoder in the full form.

use move_core_types::account_address::AccountAddress;

/// Length of a normalized address string: `0x` followed by 64 hex characters.
pub const NORMALIZED_ADDRESS_LEN: usize = 2 + 2 * AccountAddress::LENGTH;

/// Normalize an address to lowercase with 0x prefix, left-padded to 64 hex characters.
///
/// Input longer than 64 hex characters is kept as-is so that
/// [`is_valid_address`] rejects it instead of silently truncating.
///
/// # Examples
///
/// ```
/// use sui_pure_args_types::address::normalize_address;
///
/// assert_eq!(
///     normalize_address("0x2"),
///     "0x0000000000000000000000000000000000000000000000000000000000000002"
/// );
/// assert_eq!(
///     normalize_address("ABC"),
///     "0x0000000000000000000000000000000000000000000000000000000000000abc"
/// );
/// ```
pub fn normalize_address(addr: &str) -> String {
    let addr = addr.trim();
    let hex = addr
        .strip_prefix("0x")
        .or_else(|| addr.strip_prefix("0X"))
        .unwrap_or(addr)
        .to_lowercase();
    format!("0x{:0>64}", hex)
}

/// Check that a string is an address in normalized form (`0x` + 64 hex chars).
pub fn is_valid_address(normalized: &str) -> bool {
    normalized.len() == NORMALIZED_ADDRESS_LEN
        && AccountAddress::from_hex_literal(normalized).is_ok()
}

/// Normalize an address, returning None if it's not a valid hex address.
///
/// ```
/// use sui_pure_args_types::address::normalize_address_checked;
///
/// assert_eq!(
///     normalize_address_checked("0x2"),
///     Some("0x0000000000000000000000000000000000000000000000000000000000000002".to_string())
/// );
/// assert_eq!(normalize_address_checked("not-hex"), None);
/// ```
pub fn normalize_address_checked(addr: &str) -> Option<String> {
    let normalized = normalize_address(addr);
    is_valid_address(&normalized).then_some(normalized)
}

/// Parse a string address into an AccountAddress.
///
/// Handles both short ("0x2") and full forms.
pub fn parse_address(addr: &str) -> Option<AccountAddress> {
    let normalized = normalize_address_checked(addr)?;
    AccountAddress::from_hex_literal(&normalized).ok()
}

/// Convert an AccountAddress to its normalized full-form string.
pub fn address_to_string(addr: &AccountAddress) -> String {
    format!("0x{}", hex::encode(addr.as_ref()))
}
