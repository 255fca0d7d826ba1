//! Shared types for the sui-pure-args workspace.
//!
//! - [`normalized`]: the [`NormalizedType`] model, in the shape the Sui
//!   JSON-RPC reports function parameters
//! - [`type_parsing`]: parser for textual type arguments (`vector<u8>`,
//!   `0x2::coin::Coin<0x2::sui::SUI>`)
//! - [`framework`]: framework addresses and well-known struct shapes
//! - [`address`]: address normalization
//! - [`env_utils`]: environment-driven configuration helpers

pub mod address;
pub mod env_utils;
pub mod error;
pub mod framework;
pub mod normalized;
pub mod type_parsing;

pub use error::TypeParseError;
pub use normalized::{NormalizedStruct, NormalizedType, PrimitiveType};
pub use type_parsing::{
    parse_type_argument_list, parse_type_argument_list_with_limit, parse_type_expression,
    parse_type_expression_with_limit, split_type_params,
};
