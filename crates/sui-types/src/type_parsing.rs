//! Type expression parsing.
//!
//! Turns user-authored type arguments such as `u64`, `vector<u8>` or
//! `0x2::coin::Coin<0x2::sui::SUI>` into the same [`NormalizedType`] the
//! on-chain signature lookup produces, so substituted type parameters can be
//! resolved exactly like declared parameter types.
//!
//! Supports:
//! - Primitive types in any casing: `bool`, `u8` .. `u256`, `address`, `signer`
//! - Vector types: `vector<T>`
//! - Struct types: `0x2::module::Struct` or `0x2::module::Struct<T1, T2>`
//!
//! # Examples
//!
//! ```
//! use sui_pure_args_types::type_parsing::parse_type_expression;
//! use sui_pure_args_types::{NormalizedType, PrimitiveType};
//!
//! let ty = parse_type_expression("vector<vector<u8>>").unwrap();
//! assert_eq!(
//!     ty,
//!     NormalizedType::vector(NormalizedType::vector(NormalizedType::Primitive(PrimitiveType::U8)))
//! );
//! ```

use crate::error::TypeParseError;
use crate::normalized::{NormalizedType, PrimitiveType};

/// Parse a single type expression.
pub fn parse_type_expression(text: &str) -> Result<NormalizedType, TypeParseError> {
    TypeParser { max_depth: None }.expression(text, 0)
}

/// Parse a single type expression, rejecting nesting deeper than `max_depth`.
pub fn parse_type_expression_with_limit(
    text: &str,
    max_depth: usize,
) -> Result<NormalizedType, TypeParseError> {
    TypeParser {
        max_depth: Some(max_depth),
    }
    .expression(text, 0)
}

/// Parse a comma-separated list of type expressions, e.g. `u64, vector<u8>`.
pub fn parse_type_argument_list(text: &str) -> Result<Vec<NormalizedType>, TypeParseError> {
    TypeParser { max_depth: None }.list(text, 0)
}

/// Parse a comma-separated list of type expressions with a nesting limit.
pub fn parse_type_argument_list_with_limit(
    text: &str,
    max_depth: usize,
) -> Result<Vec<NormalizedType>, TypeParseError> {
    TypeParser {
        max_depth: Some(max_depth),
    }
    .list(text, 0)
}

/// Split type parameters respecting nested angle brackets.
///
/// Given "A, B<C, D>, E", returns ["A", "B<C, D>", "E"] by tracking bracket depth.
/// Every fragment is trimmed; a trailing fragment is only kept when non-empty.
pub fn split_type_params(s: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth -= 1,
            ',' if depth == 0 => {
                result.push(s[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    let last = s[start..].trim();
    if !last.is_empty() {
        result.push(last);
    }

    result
}

struct TypeParser {
    max_depth: Option<usize>,
}

impl TypeParser {
    fn expression(&self, text: &str, depth: usize) -> Result<NormalizedType, TypeParseError> {
        if let Some(limit) = self.max_depth {
            if depth > limit {
                return Err(TypeParseError::NestingTooDeep { limit });
            }
        }

        let text = text.trim();

        if let Some(inner) = text
            .strip_prefix("vector<")
            .and_then(|s| s.strip_suffix('>'))
        {
            return Ok(NormalizedType::vector(self.expression(inner, depth + 1)?));
        }

        if let Some(primitive) = PrimitiveType::from_keyword(text) {
            return Ok(NormalizedType::Primitive(primitive));
        }

        if let Some((address, module, name, type_args)) = split_struct(text) {
            let type_arguments = match type_args {
                Some(args) => self.list(args, depth + 1)?,
                None => vec![],
            };
            return Ok(NormalizedType::structure(address, module, name, type_arguments));
        }

        tracing::warn!(input = %text, "unsupported type expression");
        Err(TypeParseError::UnsupportedTypeExpression {
            input: text.to_string(),
        })
    }

    fn list(&self, text: &str, depth: usize) -> Result<Vec<NormalizedType>, TypeParseError> {
        split_type_params(text)
            .into_iter()
            .map(|arg| self.expression(arg, depth))
            .collect()
    }
}

/// Split `0x<hex>::<module>::<name>[<args>]` into its parts.
fn split_struct(text: &str) -> Option<(&str, &str, &str, Option<&str>)> {
    let (base, type_args) = match text.find('<') {
        Some(pos) => {
            let args = text[pos..].strip_prefix('<')?.strip_suffix('>')?;
            if args.is_empty() {
                return None;
            }
            (&text[..pos], Some(args))
        }
        None => (text, None),
    };

    let parts: Vec<&str> = base.split("::").collect();
    let [address, module, name] = parts.as_slice() else {
        return None;
    };

    let hex = address.strip_prefix("0x")?;
    if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    if !is_identifier(module) || !is_identifier(name) {
        return None;
    }

    Some((*address, *module, *name, type_args))
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prim(p: PrimitiveType) -> NormalizedType {
        NormalizedType::Primitive(p)
    }

    #[test]
    fn test_parse_primitives() {
        assert_eq!(parse_type_expression("bool").unwrap(), prim(PrimitiveType::Bool));
        assert_eq!(parse_type_expression(" u64 ").unwrap(), prim(PrimitiveType::U64));
        assert_eq!(parse_type_expression("U256").unwrap(), prim(PrimitiveType::U256));
        assert_eq!(
            parse_type_expression("address").unwrap(),
            prim(PrimitiveType::Address)
        );
        assert_eq!(parse_type_expression("signer").unwrap(), prim(PrimitiveType::Signer));
    }

    #[test]
    fn test_parse_nested_vector() {
        assert_eq!(
            parse_type_expression("vector<vector<u8>>").unwrap(),
            NormalizedType::vector(NormalizedType::vector(prim(PrimitiveType::U8)))
        );
        assert_eq!(
            parse_type_expression("vector< u16 >").unwrap(),
            NormalizedType::vector(prim(PrimitiveType::U16))
        );
    }

    #[test]
    fn test_parse_struct() {
        let ty = parse_type_expression("0x2::coin::Coin<0x2::sui::SUI>").unwrap();
        assert_eq!(
            ty,
            NormalizedType::structure(
                "0x2",
                "coin",
                "Coin",
                vec![NormalizedType::structure("0x2", "sui", "SUI", vec![])],
            )
        );
    }

    #[test]
    fn test_parse_struct_with_nested_generics() {
        let ty = parse_type_expression("vector<0xabc::pool::Pool<u8, vector<u64>>>").unwrap();
        let NormalizedType::Vector(inner) = ty else {
            panic!("expected vector");
        };
        let NormalizedType::Struct(st) = *inner else {
            panic!("expected struct");
        };
        assert_eq!(st.address, "0xabc");
        assert_eq!(st.module, "pool");
        assert_eq!(st.name, "Pool");
        assert_eq!(
            st.type_arguments,
            vec![
                prim(PrimitiveType::U8),
                NormalizedType::vector(prim(PrimitiveType::U64))
            ]
        );
    }

    #[test]
    fn test_parse_unsupported() {
        for input in [
            "",
            "u512",
            "0x2::coin",
            "2::coin::Coin",
            "0x::coin::Coin",
            "0xzz::coin::Coin",
            "0x2::coin::Coin<>",
            "0x2::co-in::Coin",
            "Vector<u8>",
        ] {
            assert!(
                matches!(
                    parse_type_expression(input),
                    Err(TypeParseError::UnsupportedTypeExpression { .. })
                ),
                "{input:?} should be unsupported"
            );
        }
    }

    #[test]
    fn test_unsupported_error_names_input() {
        let err = parse_type_expression("  float ").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported type: float");
    }

    #[test]
    fn test_parse_argument_list() {
        let list = parse_type_argument_list("u64, vector<u8>").unwrap();
        assert_eq!(
            list,
            vec![
                prim(PrimitiveType::U64),
                NormalizedType::vector(prim(PrimitiveType::U8))
            ]
        );

        let list = parse_type_argument_list("0x1::m::S<u8,u64>, bool").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1], prim(PrimitiveType::Bool));

        assert!(parse_type_argument_list("").unwrap().is_empty());
        assert_eq!(parse_type_argument_list("u8,").unwrap().len(), 1);
        assert!(parse_type_argument_list("u8,,u64").is_err());
    }

    #[test]
    fn test_split_type_params() {
        let params = split_type_params("u64, 0x2::coin::Coin<0x2::sui::SUI>, bool");
        assert_eq!(params, vec!["u64", "0x2::coin::Coin<0x2::sui::SUI>", "bool"]);

        let params = split_type_params("0x1::option::Option<vector<u8>>, u64");
        assert_eq!(params, vec!["0x1::option::Option<vector<u8>>", "u64"]);
    }

    #[test]
    fn test_depth_limit() {
        assert!(parse_type_expression_with_limit("vector<vector<u8>>", 2).is_ok());
        assert_eq!(
            parse_type_expression_with_limit("vector<vector<vector<u8>>>", 2),
            Err(TypeParseError::NestingTooDeep { limit: 2 })
        );
        assert_eq!(
            parse_type_argument_list_with_limit("u8, 0x1::m::S<0x1::m::S<u8>>", 1),
            Err(TypeParseError::NestingTooDeep { limit: 1 })
        );
    }
}
