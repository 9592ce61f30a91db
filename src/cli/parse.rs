use edgeroute_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a field delimiter, which must be a single ASCII character
pub fn parse_delimiter(s: &str) -> std::result::Result<String, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(s.to_string()),
        _ => Err(format!(
            "delimiter must be a single ASCII character, got {:?}",
            s
        )),
    }
}
