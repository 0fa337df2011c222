//! Markdown reference cleaner.
//!
//! Drops the `Properties` / `Examples` / `Parameters` navigation bullets the
//! generator emits and the `Type:` metadata line under `Type*` and `EQN*`
//! headings. The scratch input is left alone; the result goes to a separate
//! canonical file.

use crate::error::{Error, Result};
use crate::lines::{read_lines, write_lines};
use regex::Regex;
use serde::Serialize;
use std::path::Path;
use std::sync::LazyLock;

static NAV_BULLET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*- \[(?:Properties|Examples|Parameters)\]").expect("NAV_BULLET_RE should compile")
});
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#+\s*(.*)$").expect("HEADING_RE should compile"));
// `Type`/`EQN` as a whole word or CamelCase prefix: `TypeArrowHead`, `EQN_Bar`, not `Typeface`.
static TYPE_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:Type|EQN)(?:[^a-z]|$)").expect("TYPE_HEADING_RE should compile")
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MarkdownCleanReport {
    pub lines_read: usize,
    pub lines_written: usize,
    pub bullets_dropped: usize,
    pub type_lines_dropped: usize,
}

/// Clean a Markdown document given as lines (terminators included).
pub fn clean_markdown(lines: &[String]) -> (Vec<String>, MarkdownCleanReport) {
    let mut out = Vec::with_capacity(lines.len());
    let mut report = MarkdownCleanReport {
        lines_read: lines.len(),
        ..Default::default()
    };
    let mut in_type = false;

    for line in lines {
        if NAV_BULLET_RE.is_match(line) {
            report.bullets_dropped += 1;
            continue;
        }
        if let Some(caps) = HEADING_RE.captures(line.trim_end()) {
            in_type = caps
                .get(1)
                .is_some_and(|title| TYPE_HEADING_RE.is_match(title.as_str()));
        }
        if in_type && line.starts_with("Type:") {
            report.type_lines_dropped += 1;
            continue;
        }
        out.push(line.clone());
    }

    report.lines_written = out.len();
    (out, report)
}

/// Read `input`, clean it, and write the result to `output`.
pub fn clean_markdown_file(input: &Path, output: &Path) -> Result<MarkdownCleanReport> {
    if same_file(input, output) {
        return Err(Error::SamePath(output.to_path_buf()));
    }
    let lines = read_lines(input)?;
    let (out, report) = clean_markdown(&lines);
    write_lines(output, &out)?;
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        bullets = report.bullets_dropped,
        type_lines = report.type_lines_dropped,
        "cleaned Markdown reference"
    );
    Ok(report)
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
