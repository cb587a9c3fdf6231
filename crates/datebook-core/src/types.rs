use serde::Deserialize;

/// How TEXT values are written into exported iCalendar documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IcsTextMode {
    /// RFC 5545 escaping, CRLF line endings and 75-octet folding.
    #[default]
    Escaped,
    /// Values written verbatim, `\n` separated, no trailing newline.
    Literal,
}

impl IcsTextMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Escaped => "escaped",
            Self::Literal => "literal",
        }
    }
}

impl std::fmt::Display for IcsTextMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
