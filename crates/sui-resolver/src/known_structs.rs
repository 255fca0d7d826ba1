//! Struct shapes with a pure encoding.
//!
//! Checked in order; the first template whose address, module and name match
//! the parameter's struct decides how the argument is encoded. Structs that
//! match nothing are left unresolved.

use serde_json::Value;
use sui_pure_args_types::framework::{
    StructTemplate, STD_ASCII_STRING, STD_OPTION, STD_UTF8_STRING, SUI_OBJECT_ID,
};
use sui_pure_args_types::NormalizedStruct;

use crate::error::PureArgError;
use crate::pure::PureArgResolver;
use crate::serialization::{PureArg, PureTag, SerializationType};

pub(crate) type StructHandler = fn(
    &PureArgResolver,
    &NormalizedStruct,
    Option<Value>,
    usize,
) -> Result<PureArg, PureArgError>;

pub(crate) struct KnownStruct {
    pub template: StructTemplate,
    pub handler: StructHandler,
}

pub(crate) static KNOWN_STRUCTS: [KnownStruct; 4] = [
    KnownStruct {
        template: STD_ASCII_STRING,
        handler: encode_as_string,
    },
    KnownStruct {
        template: STD_UTF8_STRING,
        handler: encode_as_string,
    },
    KnownStruct {
        template: SUI_OBJECT_ID,
        handler: encode_as_address,
    },
    KnownStruct {
        template: STD_OPTION,
        handler: encode_as_option,
    },
];

pub(crate) fn lookup(candidate: &NormalizedStruct) -> Option<&'static KnownStruct> {
    KNOWN_STRUCTS
        .iter()
        .find(|known| known.template.matches(candidate))
}

fn encode_as_string(
    _resolver: &PureArgResolver,
    _st: &NormalizedStruct,
    raw: Option<Value>,
    _depth: usize,
) -> Result<PureArg, PureArgError> {
    Ok(PureArg::resolved(
        SerializationType::single(PureTag::String),
        raw,
    ))
}

fn encode_as_address(
    _resolver: &PureArgResolver,
    _st: &NormalizedStruct,
    raw: Option<Value>,
    _depth: usize,
) -> Result<PureArg, PureArgError> {
    Ok(PureArg::resolved(
        SerializationType::single(PureTag::Address),
        raw,
    ))
}

/// `Option<T>` is a vector of at most one `T`: present is `[v]`, absent is `[]`.
fn encode_as_option(
    resolver: &PureArgResolver,
    st: &NormalizedStruct,
    raw: Option<Value>,
    depth: usize,
) -> Result<PureArg, PureArgError> {
    let Some(element) = st.type_arguments.first() else {
        return Ok(PureArg::unresolved(raw));
    };
    let wrapped = Value::Array(raw.into_iter().filter(|v| !v.is_null()).collect());
    resolver.resolve_vector(element, Some(wrapped), true, depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_order_and_misses() {
        let ascii = NormalizedStruct::new("0x1", "ascii", "String", vec![]);
        let id = NormalizedStruct::new("0x2", "object", "ID", vec![]);
        let uid = NormalizedStruct::new("0x2", "object", "UID", vec![]);

        assert_eq!(lookup(&ascii).map(|k| k.template), Some(STD_ASCII_STRING));
        assert_eq!(lookup(&id).map(|k| k.template), Some(SUI_OBJECT_ID));
        assert!(lookup(&uid).is_none());
    }
}
