//! The typed tooltip content model: labeled lines grouped into sections.
//!
//! Extractors push lines through the helpers below; a helper given an absent
//! value pushes nothing, so empty lines never exist in the model. Rendering
//! (HTML classes, escaping, entity markers) lives in `tippet-render`.

/// Rendered value of a tooltip line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineValue {
    /// Free text; the renderer escapes it and turns embedded newlines into
    /// `<br/>`.
    Text(String),
    /// A yes/no marker (check mark / cross).
    Marker(bool),
}

/// Visual style of a line's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Text,
    Code,
}

/// A single `key: value` tooltip line.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub key: String,
    pub value: LineValue,
    pub style: LineStyle,
}

/// A labeled group of lines. Sections without lines are dropped by the
/// assembler.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub header: &'static str,
    pub lines: Vec<Line>,
}

impl Section {
    pub fn new(header: &'static str) -> Self {
        Self {
            header,
            lines: Vec::new(),
        }
    }

    pub fn with_lines(header: &'static str, lines: Vec<Line>) -> Self {
        Self { header, lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn push(lines: &mut Vec<Line>, key: &str, value: LineValue, style: LineStyle) {
    lines.push(Line {
        key: key.to_string(),
        value,
        style,
    });
}

/// Pushes a plain-text line, or nothing when the value is absent.
pub fn push_text(lines: &mut Vec<Line>, key: &str, value: Option<impl Into<String>>) {
    if let Some(value) = value {
        push(lines, key, LineValue::Text(value.into()), LineStyle::Text);
    }
}

/// Pushes a code-styled line, or nothing when the value is absent.
pub fn push_code(lines: &mut Vec<Line>, key: &str, value: Option<impl Into<String>>) {
    if let Some(value) = value {
        push(lines, key, LineValue::Text(value.into()), LineStyle::Code);
    }
}

/// Like [`push_text`], but an absent value renders the fallback instead of
/// dropping the line. Used where "n/a" is meaningful.
pub fn push_text_or(lines: &mut Vec<Line>, key: &str, value: Option<impl Into<String>>, fallback: &str) {
    let value = value.map_or_else(|| fallback.to_string(), Into::into);
    push(lines, key, LineValue::Text(value), LineStyle::Text);
}

/// Like [`push_code`], but an absent value renders the fallback instead of
/// dropping the line.
pub fn push_code_or(lines: &mut Vec<Line>, key: &str, value: Option<impl Into<String>>, fallback: &str) {
    let value = value.map_or_else(|| fallback.to_string(), Into::into);
    push(lines, key, LineValue::Text(value), LineStyle::Code);
}

/// Pushes a yes/no marker line.
pub fn push_marker(lines: &mut Vec<Line>, key: &str, yes: bool) {
    push(lines, key, LineValue::Marker(yes), LineStyle::Text);
}
