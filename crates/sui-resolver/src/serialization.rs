//! Serialization type tags handed to the downstream BCS encoder.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use sui_pure_args_types::PrimitiveType;

/// One tag of a serialization type, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PureTag {
    Address,
    Bool,
    U8,
    U16,
    U32,
    U64,
    U128,
    U256,
    Signer,
    String,
    Vector,
    Option,
}

impl PureTag {
    pub fn as_str(self) -> &'static str {
        match self {
            PureTag::Address => "Address",
            PureTag::Bool => "Bool",
            PureTag::U8 => "U8",
            PureTag::U16 => "U16",
            PureTag::U32 => "U32",
            PureTag::U64 => "U64",
            PureTag::U128 => "U128",
            PureTag::U256 => "U256",
            PureTag::Signer => "Signer",
            PureTag::String => "String",
            PureTag::Vector => "Vector",
            PureTag::Option => "Option",
        }
    }
}

impl From<PrimitiveType> for PureTag {
    fn from(p: PrimitiveType) -> Self {
        match p {
            PrimitiveType::Address => PureTag::Address,
            PrimitiveType::Bool => PureTag::Bool,
            PrimitiveType::U8 => PureTag::U8,
            PrimitiveType::U16 => PureTag::U16,
            PrimitiveType::U32 => PureTag::U32,
            PrimitiveType::U64 => PureTag::U64,
            PrimitiveType::U128 => PureTag::U128,
            PrimitiveType::U256 => PureTag::U256,
            PrimitiveType::Signer => PureTag::Signer,
        }
    }
}

impl fmt::Display for PureTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-empty tag sequence such as `["Vector", "U8"]` or `["Option", "Address"]`.
///
/// Serializes as a JSON array of tag names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SerializationType(Vec<PureTag>);

impl SerializationType {
    pub fn single(tag: impl Into<PureTag>) -> Self {
        Self(vec![tag.into()])
    }

    /// Prefix `inner` with a container tag (`Vector` or `Option`).
    pub fn wrap(outer: PureTag, inner: SerializationType) -> Self {
        let mut tags = Vec::with_capacity(inner.0.len() + 1);
        tags.push(outer);
        tags.extend(inner.0);
        Self(tags)
    }

    pub fn to_strings(&self) -> Vec<&'static str> {
        self.0.iter().map(|t| t.as_str()).collect()
    }
}

impl fmt::Display for SerializationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.to_strings().join(", "))
    }
}

/// A resolved argument: the serialization type plus the encoder-ready value.
///
/// `serialization_type == None` means the type could not be resolved to a
/// pure encoding and the caller has to supply pre-encoded bytes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PureArg {
    #[serde(rename = "type")]
    pub serialization_type: Option<SerializationType>,
    pub value: Option<Value>,
}

impl PureArg {
    pub fn resolved(serialization_type: SerializationType, value: Option<Value>) -> Self {
        Self {
            serialization_type: Some(serialization_type),
            value,
        }
    }

    pub fn unresolved(value: Option<Value>) -> Self {
        Self {
            serialization_type: None,
            value,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.serialization_type.is_some()
    }

    /// Tag names, or `None` when unresolved.
    pub fn type_strings(&self) -> Option<Vec<&'static str>> {
        self.serialization_type.as_ref().map(SerializationType::to_strings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wrap_flattens_inner_tags() {
        let inner = SerializationType::wrap(PureTag::Vector, SerializationType::single(PureTag::U8));
        let outer = SerializationType::wrap(PureTag::Option, inner);
        assert_eq!(outer.to_strings(), ["Option", "Vector", "U8"]);
        assert_eq!(outer.to_string(), "[Option, Vector, U8]");
    }

    #[test]
    fn test_pure_arg_json_shape() {
        let arg = PureArg::resolved(
            SerializationType::single(PrimitiveType::Bool),
            Some(json!(true)),
        );
        assert_eq!(
            serde_json::to_value(&arg).unwrap(),
            json!({"type": ["Bool"], "value": true})
        );

        let arg = PureArg::unresolved(Some(json!("0xdead")));
        assert_eq!(
            serde_json::to_value(&arg).unwrap(),
            json!({"type": null, "value": "0xdead"})
        );
    }
}
