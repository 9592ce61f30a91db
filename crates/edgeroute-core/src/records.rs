//! Utilities for records output format

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Render a location name as a single records field.
///
/// Names that would split or confuse a whitespace-separated line are
/// wrapped in double quotes with inner quotes escaped.
pub fn field(name: &str) -> String {
    let needs_quotes =
        name.is_empty() || name.chars().any(|c| c.is_whitespace() || c == '"' || c == '=');
    if needs_quotes {
        format!("\"{}\"", escape_quotes(name))
    } else {
        name.to_string()
    }
}
