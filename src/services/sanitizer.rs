use serde_json::Value;

/// Strip angle brackets and surrounding whitespace from user input
///
/// This is character deletion only. No escaping or entity encoding is done,
/// so `<b>bold</b>` becomes `bbold/b`.
///
/// Brackets are removed before trimming: `"< x"` must come out as `"x"`, and
/// trimming first would leave `" x"`.
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '<' | '>'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Sanitize a JSON value taken from a request body
///
/// Strings are sanitized; every other value, `null` included, is returned as is.
pub fn sanitize_value(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(sanitize(&s)),
        other => other,
    }
}
