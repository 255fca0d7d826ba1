//! sui-pure-args
//!
//! Resolves loosely-typed Move call arguments into the typed "pure" inputs a
//! Sui programmable transaction needs:
//!
//! - **Type parsing**: textual type arguments (`vector<u8>`,
//!   `0x1::option::Option<u64>`) into [`NormalizedType`]s
//! - **Argument resolution**: a normalized parameter type plus a raw value into
//!   a serialization type and a coerced value ([`PureArg`])
//! - **Call batches**: every argument of a call, with per-argument errors
//!
//! See [`sui_pure_args_resolver`] for the resolution rules.

pub mod call_args;
pub mod raw;

pub use call_args::{
    is_tx_context, resolve_call_arguments, user_parameters, CallArgumentError, ResolvedCall,
};
pub use raw::parse_raw_value;

pub use sui_pure_args_resolver::{
    resolve_pure_arg, PureArg, PureArgError, PureArgResolver, PureTag, ResolverConfig,
    SerializationType,
};
pub use sui_pure_args_types::{
    parse_type_argument_list, parse_type_expression, NormalizedStruct, NormalizedType,
    PrimitiveType, TypeParseError,
};
