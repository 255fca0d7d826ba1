//! Argument resolution errors.
//!
//! Every variant is a rejection of caller input. Resolution stops at the
//! first one; the caller decides how to surface it per argument.

use serde_json::Value;
use sui_pure_args_types::TypeParseError;

/// Structured errors raised while resolving a pure argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PureArgError {
    /// The raw value's category does not fit the parameter type.
    TypeMismatch {
        /// The offending value, rendered for display
        value: String,
        /// Accepted value categories (`string`, `number`, `boolean`)
        expected: Vec<&'static str>,
        /// Category of the value that was supplied
        received: &'static str,
    },

    /// A `bool` argument that is not `true`, `false`, `1` or `0`.
    InvalidBoolLiteral { value: String },

    /// An `address` argument that is not a 32-byte hex address.
    InvalidAddress { value: String },

    /// A vector argument given as text that is not valid JSON.
    MalformedArrayLiteral { value: String, reason: String },

    /// A vector argument whose value is not an array.
    NotAnArray {
        value: String,
        received: &'static str,
    },

    /// Normalized type names a primitive that does not exist.
    UnknownPrimitiveType { name: String },

    /// A type argument string the type-expression parser cannot handle.
    UnsupportedTypeExpression { input: String },

    /// Normalized-type JSON that could not be interpreted.
    MalformedNormalizedType { reason: String },

    /// `TypeParameter(index)` with no matching entry in the type argument list.
    TypeParameterIndexOutOfRange { index: u16, len: usize },

    /// Type or value nesting exceeded the configured limit.
    NestingTooDeep { limit: usize },
}

impl std::fmt::Display for PureArgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PureArgError::TypeMismatch {
                value,
                expected,
                received,
            } => {
                let expected = match expected.as_slice() {
                    [single] => single.to_string(),
                    many => format!("one of {}", many.join(", ")),
                };
                write!(
                    f,
                    "Expected {} to be {}, received {}",
                    value, expected, received
                )
            }
            PureArgError::InvalidBoolLiteral { value } => write!(f, "Invalid Bool: {:?}", value),
            PureArgError::InvalidAddress { value } => {
                write!(f, "Invalid Sui address: {:?}", value)
            }
            PureArgError::MalformedArrayLiteral { value, reason } => {
                write!(f, "Malformed array: {} ({})", value, reason)
            }
            PureArgError::NotAnArray { value, received } => {
                write!(f, "Expected {} to be an array, received {}", value, received)
            }
            PureArgError::UnknownPrimitiveType { name } => {
                write!(f, "Unknown pure normalized type {:?}", name)
            }
            PureArgError::UnsupportedTypeExpression { input } => {
                write!(f, "Unsupported type: {}", input)
            }
            PureArgError::MalformedNormalizedType { reason } => {
                write!(f, "Malformed normalized type: {}", reason)
            }
            PureArgError::TypeParameterIndexOutOfRange { index, len } => write!(
                f,
                "Type parameter T{} is out of range: {} type argument(s) supplied",
                index, len
            ),
            PureArgError::NestingTooDeep { limit } => {
                write!(f, "Argument nests deeper than the limit of {} levels", limit)
            }
        }
    }
}

impl std::error::Error for PureArgError {}

impl From<TypeParseError> for PureArgError {
    fn from(err: TypeParseError) -> Self {
        match err {
            TypeParseError::UnsupportedTypeExpression { input } => {
                PureArgError::UnsupportedTypeExpression { input }
            }
            TypeParseError::UnknownPrimitiveType { name } => {
                PureArgError::UnknownPrimitiveType { name }
            }
            TypeParseError::MalformedNormalizedType { reason } => {
                PureArgError::MalformedNormalizedType { reason }
            }
            TypeParseError::NestingTooDeep { limit } => PureArgError::NestingTooDeep { limit },
        }
    }
}

/// Category name of a JSON value, as reported in mismatch errors.
pub(crate) fn value_category(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Strings are shown without quotes, everything else as JSON text.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub(crate) fn type_mismatch(value: &Value, expected: &[&'static str]) -> PureArgError {
    PureArgError::TypeMismatch {
        value: display_value(value),
        expected: expected.to_vec(),
        received: value_category(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_mismatch_message() {
        let err = type_mismatch(&json!("abc"), &["number"]);
        assert_eq!(err.to_string(), "Expected abc to be number, received string");

        let err = type_mismatch(&json!([1]), &["string", "number", "boolean"]);
        assert_eq!(
            err.to_string(),
            "Expected [1] to be one of string, number, boolean, received array"
        );
    }

    #[test]
    fn test_from_parse_error() {
        let err: PureArgError = TypeParseError::UnsupportedTypeExpression {
            input: "float".to_string(),
        }
        .into();
        assert_eq!(
            err,
            PureArgError::UnsupportedTypeExpression {
                input: "float".to_string()
            }
        );
        assert_eq!(err.to_string(), "Unsupported type: float");
    }
}
