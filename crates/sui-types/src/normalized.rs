//! The normalized Move type model.
//!
//! [`NormalizedType`] mirrors the shape the Sui JSON-RPC returns for function
//! parameters (`sui_getNormalizedMoveFunction`), so the same value can come
//! either from an on-chain signature lookup or from
//! [`parse_type_expression`](crate::type_parsing::parse_type_expression).
//!
//! JSON shape:
//!
//! ```text
//! "U64"
//! {"TypeParameter": 0}
//! {"Vector": "U8"}
//! {"Struct": {"address": "0x1", "module": "option", "name": "Option", "typeArguments": ["U64"]}}
//! {"Reference": {...}} / {"MutableReference": {...}}
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::TypeParseError;

/// Primitive Move types, named the way the normalized-type JSON names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    Address,
    Bool,
    U8,
    U16,
    U32,
    U64,
    U128,
    U256,
    Signer,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 9] = [
        PrimitiveType::Address,
        PrimitiveType::Bool,
        PrimitiveType::U8,
        PrimitiveType::U16,
        PrimitiveType::U32,
        PrimitiveType::U64,
        PrimitiveType::U128,
        PrimitiveType::U256,
        PrimitiveType::Signer,
    ];

    pub const UNSIGNED_INTEGERS: [PrimitiveType; 6] = [
        PrimitiveType::U8,
        PrimitiveType::U16,
        PrimitiveType::U32,
        PrimitiveType::U64,
        PrimitiveType::U128,
        PrimitiveType::U256,
    ];

    /// Name as it appears in normalized-type JSON (`"U64"`).
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveType::Address => "Address",
            PrimitiveType::Bool => "Bool",
            PrimitiveType::U8 => "U8",
            PrimitiveType::U16 => "U16",
            PrimitiveType::U32 => "U32",
            PrimitiveType::U64 => "U64",
            PrimitiveType::U128 => "U128",
            PrimitiveType::U256 => "U256",
            PrimitiveType::Signer => "Signer",
        }
    }

    /// Keyword as written in Move source (`"u64"`).
    pub fn move_keyword(self) -> &'static str {
        match self {
            PrimitiveType::Address => "address",
            PrimitiveType::Bool => "bool",
            PrimitiveType::U8 => "u8",
            PrimitiveType::U16 => "u16",
            PrimitiveType::U32 => "u32",
            PrimitiveType::U64 => "u64",
            PrimitiveType::U128 => "u128",
            PrimitiveType::U256 => "u256",
            PrimitiveType::Signer => "signer",
        }
    }

    /// Exact lookup by normalized name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Lookup that accepts any casing: the first letter is upper-cased and
    /// the rest lower-cased before matching, so `u64`, `U64` and `BOOL` all
    /// resolve.
    pub fn from_keyword(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        let capitalized: String = match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(|c| c.to_lowercase()))
                .collect(),
            None => return None,
        };
        Self::from_name(&capitalized)
    }

    pub fn is_unsigned_integer(self) -> bool {
        Self::UNSIGNED_INTEGERS.contains(&self)
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A struct reference with its (already normalized) type arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedStruct {
    pub address: String,
    pub module: String,
    pub name: String,
    pub type_arguments: Vec<NormalizedType>,
}

impl NormalizedStruct {
    pub fn new(
        address: impl Into<String>,
        module: impl Into<String>,
        name: impl Into<String>,
        type_arguments: Vec<NormalizedType>,
    ) -> Self {
        Self {
            address: address.into(),
            module: module.into(),
            name: name.into(),
            type_arguments,
        }
    }
}

/// A Move type as seen by a function signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedType {
    Primitive(PrimitiveType),
    /// Index into the enclosing call's type-argument list.
    TypeParameter(u16),
    Vector(Box<NormalizedType>),
    Struct(NormalizedStruct),
    Reference(Box<NormalizedType>),
    MutableReference(Box<NormalizedType>),
}

impl NormalizedType {
    pub fn vector(element: NormalizedType) -> Self {
        NormalizedType::Vector(Box::new(element))
    }

    pub fn structure(
        address: impl Into<String>,
        module: impl Into<String>,
        name: impl Into<String>,
        type_arguments: Vec<NormalizedType>,
    ) -> Self {
        NormalizedType::Struct(NormalizedStruct::new(address, module, name, type_arguments))
    }

    /// Build a type from the Sui JSON-RPC normalized-type representation.
    pub fn from_json(value: &Value) -> Result<Self, TypeParseError> {
        match value {
            Value::String(name) => PrimitiveType::from_name(name)
                .map(NormalizedType::Primitive)
                .ok_or_else(|| TypeParseError::UnknownPrimitiveType { name: name.clone() }),
            Value::Object(map) if map.len() == 1 => {
                let Some((key, inner)) = map.iter().next() else {
                    return Err(malformed("empty object"));
                };
                match key.as_str() {
                    "TypeParameter" => inner
                        .as_u64()
                        .and_then(|idx| u16::try_from(idx).ok())
                        .map(NormalizedType::TypeParameter)
                        .ok_or_else(|| {
                            malformed(format!("TypeParameter index must be a u16, got {}", inner))
                        }),
                    "Vector" => Ok(NormalizedType::vector(Self::from_json(inner)?)),
                    "Reference" => Ok(NormalizedType::Reference(Box::new(Self::from_json(inner)?))),
                    "MutableReference" => Ok(NormalizedType::MutableReference(Box::new(
                        Self::from_json(inner)?,
                    ))),
                    "Struct" => struct_from_json(inner).map(NormalizedType::Struct),
                    other => Err(malformed(format!("unknown variant {:?}", other))),
                }
            }
            other => Err(malformed(format!("unexpected JSON {}", other))),
        }
    }
}

fn malformed(reason: impl Into<String>) -> TypeParseError {
    TypeParseError::MalformedNormalizedType {
        reason: reason.into(),
    }
}

fn struct_from_json(value: &Value) -> Result<NormalizedStruct, TypeParseError> {
    let map = value
        .as_object()
        .ok_or_else(|| malformed("Struct must be an object"))?;
    let field = |map: &Map<String, Value>, key: &str| -> Result<String, TypeParseError> {
        map.get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| malformed(format!("Struct is missing string field {:?}", key)))
    };

    let type_arguments = match map.get("typeArguments") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(args)) => args
            .iter()
            .map(NormalizedType::from_json)
            .collect::<Result<Vec<_>, _>>()?,
        Some(other) => {
            return Err(malformed(format!(
                "typeArguments must be an array, got {}",
                other
            )))
        }
    };

    Ok(NormalizedStruct {
        address: field(map, "address")?,
        module: field(map, "module")?,
        name: field(map, "name")?,
        type_arguments,
    })
}

impl Serialize for NormalizedType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NormalizedType::Primitive(p) => serializer.serialize_str(p.name()),
            NormalizedType::TypeParameter(idx) => {
                serializer.serialize_newtype_variant("NormalizedType", 1, "TypeParameter", idx)
            }
            NormalizedType::Vector(inner) => {
                serializer.serialize_newtype_variant("NormalizedType", 2, "Vector", inner)
            }
            NormalizedType::Struct(st) => {
                serializer.serialize_newtype_variant("NormalizedType", 3, "Struct", st)
            }
            NormalizedType::Reference(inner) => {
                serializer.serialize_newtype_variant("NormalizedType", 4, "Reference", inner)
            }
            NormalizedType::MutableReference(inner) => serializer.serialize_newtype_variant(
                "NormalizedType",
                5,
                "MutableReference",
                inner,
            ),
        }
    }
}

impl<'de> Deserialize<'de> for NormalizedType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        NormalizedType::from_json(&value).map_err(serde::de::Error::custom)
    }
}

/// Renders the Move source form: `vector<u8>`, `0x1::option::Option<u64>`, `T0`.
impl fmt::Display for NormalizedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizedType::Primitive(p) => f.write_str(p.move_keyword()),
            NormalizedType::TypeParameter(idx) => write!(f, "T{}", idx),
            NormalizedType::Vector(inner) => write!(f, "vector<{}>", inner),
            NormalizedType::Struct(st) => {
                write!(f, "{}::{}::{}", st.address, st.module, st.name)?;
                if !st.type_arguments.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in st.type_arguments.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
            NormalizedType::Reference(inner) => write!(f, "&{}", inner),
            NormalizedType::MutableReference(inner) => write!(f, "&mut {}", inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primitive_from_keyword() {
        assert_eq!(PrimitiveType::from_keyword("u64"), Some(PrimitiveType::U64));
        assert_eq!(PrimitiveType::from_keyword("BOOL"), Some(PrimitiveType::Bool));
        assert_eq!(PrimitiveType::from_keyword("Address"), Some(PrimitiveType::Address));
        assert_eq!(PrimitiveType::from_keyword("signer"), Some(PrimitiveType::Signer));
        assert_eq!(PrimitiveType::from_keyword("u512"), None);
        assert_eq!(PrimitiveType::from_keyword(""), None);
    }

    #[test]
    fn test_unsigned_integer_membership() {
        for p in PrimitiveType::UNSIGNED_INTEGERS {
            assert!(p.is_unsigned_integer());
        }
        assert!(!PrimitiveType::Bool.is_unsigned_integer());
        assert!(!PrimitiveType::Address.is_unsigned_integer());
        assert!(!PrimitiveType::Signer.is_unsigned_integer());
    }

    #[test]
    fn test_from_rpc_json() {
        let ty = NormalizedType::from_json(&json!({
            "Struct": {
                "address": "0x1",
                "module": "option",
                "name": "Option",
                "typeArguments": [{"Vector": "U8"}]
            }
        }))
        .unwrap();

        assert_eq!(
            ty,
            NormalizedType::structure(
                "0x1",
                "option",
                "Option",
                vec![NormalizedType::vector(NormalizedType::Primitive(PrimitiveType::U8))],
            )
        );
        assert_eq!(ty.to_string(), "0x1::option::Option<vector<u8>>");
    }

    #[test]
    fn test_unknown_primitive_is_rejected() {
        let err = NormalizedType::from_json(&json!("U512")).unwrap_err();
        assert_eq!(
            err,
            TypeParseError::UnknownPrimitiveType {
                name: "U512".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            NormalizedType::from_json(&json!({"TypeParameter": -1})),
            Err(TypeParseError::MalformedNormalizedType { .. })
        ));
        assert!(matches!(
            NormalizedType::from_json(&json!({"Tuple": []})),
            Err(TypeParseError::MalformedNormalizedType { .. })
        ));
        assert!(matches!(
            NormalizedType::from_json(&json!(42)),
            Err(TypeParseError::MalformedNormalizedType { .. })
        ));
    }

    #[test]
    fn test_serde_uses_rpc_shape() {
        let ty = NormalizedType::MutableReference(Box::new(NormalizedType::structure(
            "0x2",
            "tx_context",
            "TxContext",
            vec![],
        )));
        let value = serde_json::to_value(&ty).unwrap();
        assert_eq!(
            value,
            json!({"MutableReference": {"Struct": {
                "address": "0x2",
                "module": "tx_context",
                "name": "TxContext",
                "typeArguments": []
            }}})
        );

        let back: NormalizedType = serde_json::from_value(value).unwrap();
        assert_eq!(back, ty);
        assert_eq!(back.to_string(), "&mut 0x2::tx_context::TxContext");
    }
}
