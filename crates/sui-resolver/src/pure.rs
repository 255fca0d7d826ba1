//! Type-directed resolution of pure arguments.
//!
//! Given a parameter's [`NormalizedType`], the loosely-typed value a user
//! typed for it, and the call's type arguments, [`PureArgResolver`] walks the
//! type recursively and produces the [`SerializationType`] plus the coerced
//! value the BCS encoder expects:
//!
//! | Parameter type | Accepted raw value | Result |
//! |----------------|--------------------|--------|
//! | `u8`..`u256` | number | `[U8]`..`[U256]`, value unchanged |
//! | `bool` | `true`/`false`/`1`/`0` (string, number or bool) | `[Bool]`, JSON bool |
//! | `address` | hex string | `[Address]`, 64-digit lowercase hex |
//! | `vector<u8>` | plain string | `[String]`, value unchanged |
//! | `vector<T>` | array or JSON-array string | `[Vector, ..T]`, each element coerced |
//! | `Option<T>` | `T` or absent | `[Option, ..T]`, `[v]` or `[]` |
//! | `String` / `ascii::String` | string | `[String]` |
//! | `object::ID` | string | `[Address]` |
//!
//! Anything else (other structs, references) is unresolved: the value is
//! returned untouched with no serialization type.

use serde_json::Value;
use sui_pure_args_types::address::{is_valid_address, normalize_address};
use sui_pure_args_types::{
    parse_type_expression, parse_type_expression_with_limit, NormalizedType, PrimitiveType,
    TypeParseError,
};

use crate::config::ResolverConfig;
use crate::error::{display_value, type_mismatch, value_category, PureArgError};
use crate::known_structs;
use crate::serialization::{PureArg, PureTag, SerializationType};

const NUMBER: &str = "number";
const STRING: &str = "string";
const BOOLEAN: &str = "boolean";

/// Resolve a single argument against a parameter type.
///
/// Convenience wrapper around [`PureArgResolver`] for one-off calls.
///
/// ```
/// use serde_json::json;
/// use sui_pure_args_resolver::resolve_pure_arg;
/// use sui_pure_args_types::{NormalizedType, PrimitiveType};
///
/// let ty = NormalizedType::vector(NormalizedType::Primitive(PrimitiveType::U8));
/// let arg = resolve_pure_arg(&ty, Some(json!("[1,2,3]")), &[] as &[&str]).unwrap();
/// assert_eq!(arg.type_strings(), Some(vec!["Vector", "U8"]));
/// assert_eq!(arg.value, Some(json!([1, 2, 3])));
/// ```
pub fn resolve_pure_arg<S: AsRef<str>>(
    ty: &NormalizedType,
    raw: Option<Value>,
    type_arguments: &[S],
) -> Result<PureArg, PureArgError> {
    PureArgResolver::new(type_arguments).resolve(ty, raw)
}

/// Resolves arguments of one Move call.
///
/// The call's type arguments are parsed once, up front. A type argument that
/// does not parse only fails the arguments whose type actually refers to it.
#[derive(Debug, Clone)]
pub struct PureArgResolver {
    type_arguments: Vec<Result<NormalizedType, TypeParseError>>,
    config: ResolverConfig,
}

impl PureArgResolver {
    pub fn new<S: AsRef<str>>(type_arguments: &[S]) -> Self {
        Self::with_config(type_arguments, ResolverConfig::default())
    }

    pub fn with_config<S: AsRef<str>>(type_arguments: &[S], config: ResolverConfig) -> Self {
        let type_arguments = type_arguments
            .iter()
            .map(|arg| match config.max_depth {
                Some(limit) => parse_type_expression_with_limit(arg.as_ref(), limit),
                None => parse_type_expression(arg.as_ref()),
            })
            .collect();
        Self {
            type_arguments,
            config,
        }
    }

    /// The parsed type argument bound to `TypeParameter(index)`.
    pub fn type_argument(&self, index: u16) -> Result<&NormalizedType, PureArgError> {
        match self.type_arguments.get(usize::from(index)) {
            Some(Ok(ty)) => Ok(ty),
            Some(Err(err)) => Err(err.clone().into()),
            None => Err(PureArgError::TypeParameterIndexOutOfRange {
                index,
                len: self.type_arguments.len(),
            }),
        }
    }

    /// Resolve `raw` against `ty`. `None` and JSON `null` both mean "no value".
    pub fn resolve(&self, ty: &NormalizedType, raw: Option<Value>) -> Result<PureArg, PureArgError> {
        self.resolve_at(ty, raw, 0)
    }

    fn resolve_at(
        &self,
        ty: &NormalizedType,
        raw: Option<Value>,
        depth: usize,
    ) -> Result<PureArg, PureArgError> {
        self.check_depth(depth)?;
        let raw = raw.filter(|v| !v.is_null());
        tracing::debug!(normalized_type = %ty, raw = ?raw, "resolving pure argument");

        match ty {
            NormalizedType::Primitive(primitive) => resolve_primitive(*primitive, raw),
            NormalizedType::TypeParameter(index) => {
                let substituted = self.type_argument(*index)?;
                self.resolve_at(substituted, raw, depth)
            }
            NormalizedType::Vector(element) => self.resolve_vector(element, raw, false, depth),
            NormalizedType::Struct(st) => match known_structs::lookup(st) {
                Some(known) => (known.handler)(self, st, raw, depth),
                None => Ok(PureArg::unresolved(raw)),
            },
            NormalizedType::Reference(_) | NormalizedType::MutableReference(_) => {
                Ok(PureArg::unresolved(raw))
            }
        }
    }

    /// Resolve a `vector<element>`, tagged `Option` instead of `Vector` when
    /// it stands for an `Option<element>`.
    pub(crate) fn resolve_vector(
        &self,
        element: &NormalizedType,
        raw: Option<Value>,
        is_option: bool,
        depth: usize,
    ) -> Result<PureArg, PureArgError> {
        let raw = raw.filter(|v| !v.is_null());

        // vector<u8> accepts plain text, encoded as a string
        if let Some(Value::String(text)) = &raw {
            if *element == NormalizedType::Primitive(PrimitiveType::U8)
                && !text.trim_start().starts_with('[')
            {
                return Ok(PureArg::resolved(
                    SerializationType::single(PureTag::String),
                    raw,
                ));
            }
        }

        let raw = match raw {
            Some(Value::String(text)) => match serde_json::from_str::<Value>(&text) {
                Ok(parsed) => Some(parsed).filter(|v| !v.is_null()),
                Err(err) => {
                    return Err(PureArgError::MalformedArrayLiteral {
                        value: text,
                        reason: err.to_string(),
                    })
                }
            },
            other => other,
        };

        let items = match raw {
            None => None,
            Some(Value::Array(items)) => Some(items),
            Some(other) => {
                return Err(PureArgError::NotAnArray {
                    value: display_value(&other),
                    received: value_category(&other),
                })
            }
        };

        // The element type is inferred from the first element only
        let sample = items.as_ref().and_then(|items| items.first().cloned());
        let inner = self.resolve_at(element, sample, depth + 1)?;
        let Some(inner_type) = inner.serialization_type else {
            return Ok(PureArg::unresolved(items.map(Value::Array)));
        };

        let value = match items {
            Some(items) => {
                let coerced = items
                    .into_iter()
                    .map(|item| {
                        self.resolve_at(element, Some(item), depth + 1)
                            .map(|arg| arg.value.unwrap_or(Value::Null))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Some(Value::Array(coerced))
            }
            None => None,
        };

        let container = if is_option {
            PureTag::Option
        } else {
            PureTag::Vector
        };
        Ok(PureArg::resolved(
            SerializationType::wrap(container, inner_type),
            value,
        ))
    }

    fn check_depth(&self, depth: usize) -> Result<(), PureArgError> {
        match self.config.max_depth {
            Some(limit) if depth > limit => Err(PureArgError::NestingTooDeep { limit }),
            _ => Ok(()),
        }
    }
}

fn resolve_primitive(primitive: PrimitiveType, raw: Option<Value>) -> Result<PureArg, PureArgError> {
    let tag = SerializationType::single(primitive);

    if primitive.is_unsigned_integer() {
        return match raw {
            None | Some(Value::Number(_)) => Ok(PureArg::resolved(tag, raw)),
            Some(other) => Err(type_mismatch(&other, &[NUMBER])),
        };
    }

    match primitive {
        PrimitiveType::Bool => {
            let literal = match raw {
                None => return Ok(PureArg::resolved(tag, None)),
                Some(Value::String(s)) => s,
                Some(Value::Bool(b)) => b.to_string(),
                Some(Value::Number(n)) => number_literal(&n),
                Some(other) => return Err(type_mismatch(&other, &[STRING, NUMBER, BOOLEAN])),
            };
            let value = match literal.as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => return Err(PureArgError::InvalidBoolLiteral { value: literal }),
            };
            Ok(PureArg::resolved(tag, Some(Value::Bool(value))))
        }
        PrimitiveType::Address => match raw {
            None => Ok(PureArg::resolved(tag, None)),
            Some(Value::String(addr)) => {
                let normalized = normalize_address(&addr);
                if !is_valid_address(&normalized) {
                    return Err(PureArgError::InvalidAddress { value: addr });
                }
                Ok(PureArg::resolved(tag, Some(Value::String(normalized))))
            }
            Some(other) => Err(type_mismatch(&other, &[STRING])),
        },
        _ => Ok(PureArg::resolved(tag, raw)),
    }
}

/// Integral floats print without a fraction, so `1.0` reads as `1`.
fn number_literal(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}
