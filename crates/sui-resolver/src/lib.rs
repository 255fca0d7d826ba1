//! Sui Pure Argument Resolver
//!
//! Converts loosely-typed call arguments (strings, numbers, booleans, nested
//! arrays) into the serialization type and coerced value needed to encode
//! them as pure inputs of a Move call.
//!
//! This crate provides:
//! - [`pure`]: the recursive resolver ([`PureArgResolver`], [`resolve_pure_arg`])
//! - [`serialization`]: serialization tags and the resolved [`PureArg`]
//! - [`error`]: the [`PureArgError`] taxonomy
//! - [`config`]: [`ResolverConfig`] (nesting limit)
//!
//! Well-known struct shapes (`String`, `ascii::String`, `object::ID`,
//! `Option<T>`) are dispatched through an ordered table; any other struct is
//! reported as unresolved so the caller can fall back to raw bytes.

pub mod config;
pub mod error;
mod known_structs;
pub mod pure;
pub mod serialization;

pub use config::{ResolverConfig, MAX_DEPTH_ENV};
pub use error::PureArgError;
pub use pure::{resolve_pure_arg, PureArgResolver};
pub use serialization::{PureArg, PureTag, SerializationType};
