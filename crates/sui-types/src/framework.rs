//! Framework addresses and the well-known struct shapes that pure arguments
//! can take.
//!
//! # Example
//!
//! ```
//! use sui_pure_args_types::framework::STD_OPTION;
//! use sui_pure_args_types::NormalizedStruct;
//!
//! let option = NormalizedStruct::new("0x1", "option", "Option", vec![]);
//! assert!(STD_OPTION.matches(&option));
//! ```

use std::fmt;

use move_core_types::account_address::AccountAddress;

use crate::address::{address_to_string, parse_address};
use crate::normalized::NormalizedStruct;

// ============================================================================
// Framework Package Addresses
// ============================================================================

/// Move standard library address (0x1)
pub const MOVE_STDLIB: AccountAddress = AccountAddress::ONE;

/// Sui framework address (0x2)
pub const SUI_FRAMEWORK: AccountAddress = {
    let mut bytes = [0u8; 32];
    bytes[31] = 2;
    AccountAddress::new(bytes)
};

// ============================================================================
// Well-Known Struct Shapes
// ============================================================================

/// A struct identity (address, module, name) without type arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructTemplate {
    pub address: AccountAddress,
    pub module: &'static str,
    pub name: &'static str,
}

impl StructTemplate {
    pub const fn new(address: AccountAddress, module: &'static str, name: &'static str) -> Self {
        Self {
            address,
            module,
            name,
        }
    }

    /// Whether `candidate` names this struct. Addresses are compared after
    /// normalization, so `0x1` and its 64-digit form both match.
    pub fn matches(&self, candidate: &NormalizedStruct) -> bool {
        candidate.module == self.module
            && candidate.name == self.name
            && parse_address(&candidate.address) == Some(self.address)
    }
}

impl fmt::Display for StructTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}::{}::{}",
            address_to_string(&self.address),
            self.module,
            self.name
        )
    }
}

/// `0x1::ascii::String`
pub const STD_ASCII_STRING: StructTemplate = StructTemplate::new(MOVE_STDLIB, "ascii", "String");

/// `0x1::string::String`
pub const STD_UTF8_STRING: StructTemplate = StructTemplate::new(MOVE_STDLIB, "string", "String");

/// `0x1::option::Option`
pub const STD_OPTION: StructTemplate = StructTemplate::new(MOVE_STDLIB, "option", "Option");

/// `0x2::object::ID`
pub const SUI_OBJECT_ID: StructTemplate = StructTemplate::new(SUI_FRAMEWORK, "object", "ID");

/// `0x2::tx_context::TxContext`, injected by the runtime as the implicit
/// last argument of entry functions.
pub const SUI_TX_CONTEXT: StructTemplate =
    StructTemplate::new(SUI_FRAMEWORK, "tx_context", "TxContext");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_addresses() {
        assert_eq!(MOVE_STDLIB, AccountAddress::from_hex_literal("0x1").unwrap());
        assert_eq!(SUI_FRAMEWORK, AccountAddress::from_hex_literal("0x2").unwrap());
    }

    #[test]
    fn test_template_matches_normalized_addresses() {
        let short = NormalizedStruct::new("0x2", "object", "ID", vec![]);
        let long = NormalizedStruct::new(
            "0x0000000000000000000000000000000000000000000000000000000000000002",
            "object",
            "ID",
            vec![],
        );
        assert!(SUI_OBJECT_ID.matches(&short));
        assert!(SUI_OBJECT_ID.matches(&long));
    }

    #[test]
    fn test_template_rejects_other_structs() {
        let wrong_module = NormalizedStruct::new("0x1", "strings", "String", vec![]);
        let wrong_address = NormalizedStruct::new("0x2", "string", "String", vec![]);
        let bad_address = NormalizedStruct::new("not-hex", "string", "String", vec![]);
        assert!(!STD_UTF8_STRING.matches(&wrong_module));
        assert!(!STD_UTF8_STRING.matches(&wrong_address));
        assert!(!STD_UTF8_STRING.matches(&bad_address));
    }

    #[test]
    fn test_template_display() {
        assert_eq!(
            STD_OPTION.to_string(),
            "0x0000000000000000000000000000000000000000000000000000000000000001::option::Option"
        );
    }
}
