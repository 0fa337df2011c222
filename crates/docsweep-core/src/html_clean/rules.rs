//! Line patterns recognized in the generated HTML reference.

use std::sync::LazyLock;

use regex::Regex;

use crate::lines::split_ending;

/// `<h3 class='fl m0' id='obj_rectangle'>` and friends.
static DEFINITION_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)^\s*<h[1-6]\b[^>]*\bid\s*=\s*["'](?:eqn|obj)_"#)
        .expect("DEFINITION_HEADING_RE should compile")
});
/// Outer element of each entry card.
static CARD_START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*<section\b[^>]*\bclass\s*=\s*["']p2 mb2\b"#)
        .expect("CARD_START_RE should compile")
});
static PRE_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*<pre\b").expect("PRE_OPEN_RE should compile"));
static TYPE_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*Type:").expect("TYPE_LABEL_RE should compile"));
static PARAGRAPH_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*<p>\s*$").expect("PARAGRAPH_OPEN_RE should compile"));

const HIDDEN_ATTR: &str = r#" style="display:none">"#;

pub(crate) fn is_definition_heading(line: &str) -> bool {
    DEFINITION_HEADING_RE.is_match(line)
}

pub(crate) fn is_card_start(line: &str) -> bool {
    CARD_START_RE.is_match(line)
}

pub(crate) fn is_pre_open(line: &str) -> bool {
    PRE_OPEN_RE.is_match(line)
}

pub(crate) fn is_type_label(line: &str) -> bool {
    TYPE_LABEL_RE.is_match(line)
}

pub(crate) fn is_paragraph_open(line: &str) -> bool {
    PARAGRAPH_OPEN_RE.is_match(line)
}

/// Replace the closing `>` of a paragraph tag with an inline `display:none`.
pub(crate) fn hide_paragraph(line: &str) -> Option<String> {
    let (body, ending) = split_ending(line);
    let head = body.trim_end().strip_suffix('>')?;
    Some(format!("{head}{HIDDEN_ATTR}{ending}"))
}
