//! Raw argument text as typed by a user.

use serde_json::Value;

/// Interpret user input as a raw argument value.
///
/// Valid JSON (`42`, `true`, `[1,2]`, `"0x2"`) is taken as JSON; anything
/// else is kept as a plain string, so `hello` and `0x2` need no quoting.
///
/// ```
/// use serde_json::json;
/// use sui_pure_args::parse_raw_value;
///
/// assert_eq!(parse_raw_value("42"), json!(42));
/// assert_eq!(parse_raw_value("0x2"), json!("0x2"));
/// ```
pub fn parse_raw_value(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
