//! Line and section rendering.
//!
//! All user-controlled text (keys and values alike) is HTML-escaped; embedded
//! newlines in multi-line bodies (scripts, condition expressions) become
//! `<br/>` afterwards, so escaping can never mangle the break tags.

use crate::tooltip::escape;
use regex::Regex;
use std::sync::OnceLock;
use tippet_core::section::{Line, LineStyle, LineValue, Section};

pub(crate) const HTML_OK: &str = "&#10004;";
pub(crate) const HTML_NOK: &str = "&#10006;";

fn newline_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\r\n|\r|\n").expect("valid regex"))
}

/// A single `key: value` line div.
pub fn render_line(line: &Line) -> String {
    let css = match line.style {
        LineStyle::Text => "tooltip-value-text",
        LineStyle::Code => "tooltip-value-code",
    };

    let value = match &line.value {
        LineValue::Text(text) => newline_regex()
            .replace_all(&escape(text), "<br/>")
            .into_owned(),
        LineValue::Marker(true) => HTML_OK.to_string(),
        LineValue::Marker(false) => HTML_NOK.to_string(),
    };

    format!(
        "<div class=\"tooltip-line\"><span class=\"tooltip-key\">{key}:&nbsp;</span><span class=\"tooltip-value {css}\">{value}</span></div>",
        key = escape(&line.key),
    )
}

/// A subheader plus all lines, or the empty string for an empty section (the
/// whole container is omitted).
pub fn render_section(section: &Section) -> String {
    if section.is_empty() {
        return String::new();
    }

    let mut html = format!(
        "<div class=\"tooltip-container\"><div class=\"tooltip-subheader\">{}</div>",
        section.header
    );
    for line in &section.lines {
        html.push_str(&render_line(line));
    }
    html.push_str("</div>");
    html
}
