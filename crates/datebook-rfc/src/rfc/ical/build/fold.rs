//! Content line folding for iCalendar (RFC 5545 §3.1).

/// Maximum line length in octets (not including CRLF).
const MAX_LINE_OCTETS: usize = 75;

/// Folds a content line to comply with the 75-octet limit and terminates it
/// with CRLF.
///
/// Continuation lines start with a single space, which counts toward their
/// limit. Splits always land on UTF-8 character boundaries.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return format!("{line}\r\n");
    }

    let mut result = String::with_capacity(line.len() + (line.len() / MAX_LINE_OCTETS) * 3);
    let mut rest = line;
    let mut limit = MAX_LINE_OCTETS;

    while rest.len() > limit {
        let mut end = limit;
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        let (head, tail) = rest.split_at(end);
        result.push_str(head);
        result.push_str("\r\n ");
        rest = tail;
        limit = MAX_LINE_OCTETS - 1;
    }

    result.push_str(rest);
    result.push_str("\r\n");
    result
}
