//! TEXT value escaping (RFC 5545 §3.3.11).

/// Escape sequence for a character that may not appear raw in a TEXT value.
const fn escape_for(c: char) -> Option<&'static str> {
    match c {
        '\\' => Some("\\\\"),
        ',' => Some("\\,"),
        ';' => Some("\\;"),
        '\n' | '\r' => Some("\\n"),
        _ => None,
    }
}

/// Escapes a SUMMARY or DESCRIPTION value.
///
/// Line breaks of any style (`\n`, `\r\n`, lone `\r`) become one `\n` escape.
#[must_use]
pub fn escape_text(value: &str) -> String {
    let normalized = value.replace("\r\n", "\n");
    let mut escaped = String::with_capacity(normalized.len());

    for c in normalized.chars() {
        match escape_for(c) {
            Some(sequence) => escaped.push_str(sequence),
            None => escaped.push(c),
        }
    }
    escaped
}
