//! Errors raised while building a [`NormalizedType`](crate::NormalizedType).

/// Failure to turn text or RPC JSON into a normalized Move type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeParseError {
    /// The type expression is not a primitive, a `vector<T>` or a
    /// fully-qualified struct.
    UnsupportedTypeExpression {
        /// The (trimmed) text that could not be parsed
        input: String,
    },

    /// A bare primitive name in normalized-type JSON that is not one of the
    /// known primitive names.
    UnknownPrimitiveType {
        /// The offending name
        name: String,
    },

    /// Normalized-type JSON that has neither a primitive name nor one of the
    /// known variant keys.
    MalformedNormalizedType {
        /// What was wrong with the JSON
        reason: String,
    },

    /// The expression nests deeper than the configured limit.
    NestingTooDeep {
        /// The limit that was exceeded
        limit: usize,
    },
}

impl std::fmt::Display for TypeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeParseError::UnsupportedTypeExpression { input } => {
                write!(f, "Unsupported type: {}", input)
            }
            TypeParseError::UnknownPrimitiveType { name } => {
                write!(f, "Unknown pure normalized type {:?}", name)
            }
            TypeParseError::MalformedNormalizedType { reason } => {
                write!(f, "Malformed normalized type: {}", reason)
            }
            TypeParseError::NestingTooDeep { limit } => {
                write!(f, "Type nests deeper than the limit of {} levels", limit)
            }
        }
    }
}

impl std::error::Error for TypeParseError {}
