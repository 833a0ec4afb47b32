//! Per-line classification.
//!
//! The classifier looks at exactly one physical line and never at its
//! neighbours. It tolerates a mix of YAML-ish and JSON-ish spellings by
//! stripping one trailing comma and surrounding quotes; it does not
//! deserialize anything.

/// A bare structural token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
}

impl Bracket {
    fn from_text(text: &str) -> Option<Self> {
        match text {
            "{" => Some(Self::OpenBrace),
            "}" => Some(Self::CloseBrace),
            "[" => Some(Self::OpenBracket),
            "]" => Some(Self::CloseBracket),
            _ => None,
        }
    }
}

/// What a single line carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or a `#` comment.
    Blank,
    /// A line that is only `{`, `}`, `[` or `]`.
    Bracket(Bracket),
    /// `key: value`. `value` is `None` when the line opens a nested
    /// structure (`key: {` or `key: [`).
    KeyValue { key: &'a str, value: Option<&'a str> },
    /// No colon, or nothing before it.
    Unkeyed,
}

/// A classified line together with its normalized text.
///
/// The text is kept because feature-list markers are only meaningful
/// once the section is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub text: &'a str,
    pub kind: LineKind<'a>,
}

/// Classify one raw line (without its newline).
pub fn classify(raw: &str) -> Line<'_> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Line {
            text: trimmed,
            kind: LineKind::Blank,
        };
    }

    let text = trimmed.strip_suffix(',').unwrap_or(trimmed).trim();
    Line {
        text,
        kind: classify_text(text),
    }
}

/// Classify already-normalized text.
///
/// Used directly by the state machine to re-classify what follows a
/// feature-list marker.
pub fn classify_text(text: &str) -> LineKind<'_> {
    if let Some(bracket) = Bracket::from_text(text) {
        return LineKind::Bracket(bracket);
    }

    let Some((key, value)) = text.split_once(':') else {
        return LineKind::Unkeyed;
    };

    let key = strip_quotes(key.trim());
    if key.is_empty() {
        return LineKind::Unkeyed;
    }

    let value = strip_quotes(value.trim());
    let value = match value {
        "{" | "[" => None,
        other => Some(other),
    };

    LineKind::KeyValue { key, value }
}

fn strip_quotes(text: &str) -> &str {
    text.trim_matches(|c| c == '"' || c == '\'')
}
