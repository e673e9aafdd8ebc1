//! Heuristic coercion of raw string tokens into typed JSON values.

use percent_encoding::percent_decode_str;
use serde_json::{Number, Value};

/// Convert a raw string token into the most specific value it plausibly
/// represents: signed integer, boolean, float, else unescaped string.
///
/// First match wins. Floats are only attempted for tokens that don't start
/// with `.` — a deliberate quirk: `".1"` stays the literal string `".1"`.
/// A token that can't be unescaped is returned unchanged.
pub(super) fn coerce(token: &str) -> Value {
    if let Ok(integer) = token.parse::<i64>() {
        return Value::Number(integer.into());
    }
    if let Ok(flag) = token.parse::<bool>() {
        return Value::Bool(flag);
    }
    if !token.starts_with('.')
        && let Ok(float) = token.parse::<f64>()
        // Non-finite parses (`inf`, `NaN`) have no JSON representation and
        // fall through to the string branch.
        && let Some(number) = Number::from_f64(float)
    {
        return Value::Number(number);
    }
    match unescape(token) {
        Some(unescaped) => Value::String(unescaped),
        None => Value::String(token.to_owned()),
    }
}

fn unescape(token: &str) -> Option<String> {
    let spaced = token.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}
