//! Resolve every argument of a Move call at once.
//!
//! Arguments are matched positionally against the function's parameters. A
//! trailing `&TxContext` / `&mut TxContext` parameter is supplied by the
//! runtime and is not matched against user input. Each argument resolves
//! independently, so one bad value does not hide the others.

use serde_json::{json, Value};
use sui_pure_args_resolver::{PureArg, PureArgError, PureArgResolver, ResolverConfig};
use sui_pure_args_types::framework::SUI_TX_CONTEXT;
use sui_pure_args_types::NormalizedType;

/// Failure to resolve the arguments of a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallArgumentError {
    /// The argument at `index` was rejected.
    Argument { index: usize, source: PureArgError },

    /// More raw arguments than the function takes.
    ArgumentCountMismatch { expected: usize, got: usize },
}

impl std::fmt::Display for CallArgumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallArgumentError::Argument { index, source } => {
                write!(f, "argument #{}: {}", index, source)
            }
            CallArgumentError::ArgumentCountMismatch { expected, got } => write!(
                f,
                "function takes {} argument(s), {} supplied",
                expected, got
            ),
        }
    }
}

impl std::error::Error for CallArgumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CallArgumentError::Argument { source, .. } => Some(source),
            CallArgumentError::ArgumentCountMismatch { .. } => None,
        }
    }
}

/// Per-argument outcomes of [`resolve_call_arguments`], in parameter order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCall {
    pub arguments: Vec<Result<PureArg, CallArgumentError>>,
}

impl ResolvedCall {
    pub fn errors(&self) -> impl Iterator<Item = &CallArgumentError> {
        self.arguments.iter().filter_map(|arg| arg.as_ref().err())
    }

    pub fn is_ok(&self) -> bool {
        self.errors().next().is_none()
    }

    /// All resolved arguments, or the first failure.
    pub fn into_result(self) -> Result<Vec<PureArg>, CallArgumentError> {
        self.arguments.into_iter().collect()
    }

    /// `[{"index", "type", "value"} | {"index", "error"}, ...]`
    pub fn to_json(&self) -> Value {
        let entries = self
            .arguments
            .iter()
            .enumerate()
            .map(|(index, outcome)| match outcome {
                Ok(arg) => json!({
                    "index": index,
                    "type": arg.serialization_type,
                    "value": arg.value,
                }),
                Err(err) => json!({
                    "index": index,
                    "error": err.to_string(),
                }),
            })
            .collect();
        Value::Array(entries)
    }
}

/// Whether `ty` is the runtime-injected transaction context.
pub fn is_tx_context(ty: &NormalizedType) -> bool {
    match ty {
        NormalizedType::Reference(inner) | NormalizedType::MutableReference(inner) => {
            matches!(&**inner, NormalizedType::Struct(st) if SUI_TX_CONTEXT.matches(st))
        }
        _ => false,
    }
}

/// Parameters the caller has to supply values for.
pub fn user_parameters(parameters: &[NormalizedType]) -> &[NormalizedType] {
    match parameters.split_last() {
        Some((last, rest)) if is_tx_context(last) => {
            tracing::debug!(parameter = %last, "skipping runtime-injected TxContext");
            rest
        }
        _ => parameters,
    }
}

/// Resolve `raw_args` positionally against `parameters`.
///
/// Missing trailing arguments are treated as absent values, which is how
/// `Option<T>` parameters are left empty.
pub fn resolve_call_arguments<S: AsRef<str>>(
    parameters: &[NormalizedType],
    raw_args: Vec<Value>,
    type_arguments: &[S],
    config: ResolverConfig,
) -> Result<ResolvedCall, CallArgumentError> {
    let parameters = user_parameters(parameters);
    if raw_args.len() > parameters.len() {
        return Err(CallArgumentError::ArgumentCountMismatch {
            expected: parameters.len(),
            got: raw_args.len(),
        });
    }

    let resolver = PureArgResolver::with_config(type_arguments, config);
    let mut raw_args = raw_args.into_iter();
    let arguments = parameters
        .iter()
        .enumerate()
        .map(|(index, param)| {
            resolver
                .resolve(param, raw_args.next())
                .map_err(|source| CallArgumentError::Argument { index, source })
        })
        .collect();

    Ok(ResolvedCall { arguments })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sui_pure_args_types::parse_type_expression;

    fn tx_context() -> NormalizedType {
        NormalizedType::MutableReference(Box::new(NormalizedType::structure(
            "0x2",
            "tx_context",
            "TxContext",
            vec![],
        )))
    }

    #[test]
    fn test_trailing_tx_context_is_skipped() {
        let params = vec![parse_type_expression("u64").unwrap(), tx_context()];
        assert_eq!(user_parameters(&params).len(), 1);

        let only_ctx = vec![tx_context(), parse_type_expression("u64").unwrap()];
        assert_eq!(user_parameters(&only_ctx).len(), 2);
    }

    #[test]
    fn test_errors_carry_argument_index() {
        let params = vec![
            parse_type_expression("bool").unwrap(),
            parse_type_expression("address").unwrap(),
        ];
        let call = resolve_call_arguments(
            &params,
            vec![json!("1"), json!("0xzz")],
            &[] as &[&str],
            ResolverConfig::default(),
        )
        .unwrap();

        assert!(!call.is_ok());
        assert_eq!(call.arguments[0].as_ref().unwrap().value, Some(json!(true)));
        let errors: Vec<_> = call.errors().collect();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0],
            CallArgumentError::Argument {
                index: 1,
                source: PureArgError::InvalidAddress { .. }
            }
        ));
        assert!(errors[0].to_string().starts_with("argument #1: "));
    }

    #[test]
    fn test_too_many_arguments() {
        let params = vec![parse_type_expression("u8").unwrap(), tx_context()];
        let err = resolve_call_arguments(
            &params,
            vec![json!(1), json!(2)],
            &[] as &[&str],
            ResolverConfig::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            CallArgumentError::ArgumentCountMismatch {
                expected: 1,
                got: 2
            }
        );
    }

    #[test]
    fn test_missing_arguments_are_absent() {
        let params = vec![
            parse_type_expression("u8").unwrap(),
            parse_type_expression("0x1::option::Option<u64>").unwrap(),
        ];
        let call = resolve_call_arguments(
            &params,
            vec![json!(3)],
            &[] as &[&str],
            ResolverConfig::default(),
        )
        .unwrap();
        let args = call.into_result().unwrap();
        assert_eq!(args[1].value, Some(json!([])));
    }

    #[test]
    fn test_to_json() {
        let params = vec![NormalizedType::TypeParameter(0)];
        let call = resolve_call_arguments(
            &params,
            vec![json!("[1,2]")],
            &["vector<u16>"],
            ResolverConfig::default(),
        )
        .unwrap();
        assert_eq!(
            call.to_json(),
            json!([{"index": 0, "type": ["Vector", "U16"], "value": [1, 2]}])
        );
    }
}
