//! Loose coercions used by request-field checks
//!
//! Request bags come from untyped clients, so a few fields are read the
//! lenient way browsers read them: numbers are parsed from the leading digits
//! of the value's text form, and flags are truthy rather than strictly
//! boolean.

use serde_json::Value;

/// Renders a value to the text a lenient integer parse reads.
///
/// Arrays render as their comma-joined items (`null` items render empty),
/// objects as `[object Object]`. `null` itself has no text form.
pub(crate) fn render_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| render_text(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some("[object Object]".to_owned()),
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
    }
}

/// Parses the leading base-10 integer of `text`.
///
/// Leading whitespace and one sign are skipped; parsing stops at the first
/// non-digit. Returns `None` when no digit is found.
pub(crate) fn leading_integer(text: &str) -> Option<f64> {
    let rest = text.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let magnitude: f64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Whitespace as browsers trim it: the Unicode space separators, the BOM
/// and the four line terminators.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Trims `text` the way browsers do.
///
/// Unlike [`str::trim`], strips U+FEFF and keeps U+0085.
pub(crate) fn trim(text: &str) -> &str {
    text.trim_matches(is_js_whitespace)
}

/// Truthiness of a flag value: `false`, `0`, `""` and `null` are false.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
