//! HTML reference cleaner.
//!
//! Post-processes the generated HTML API reference: drops `<pre>` opening
//! lines and hides the paragraph wrapping each `Type:` annotation by giving
//! it an inline `display:none`. The paragraph is the last line already
//! emitted, so the rewrite targets the output, not the current input line.

mod rules;

use crate::error::Result;
use crate::lines::{read_lines, write_lines};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlCleanOptions {
    /// Only hide `Type:` paragraphs while inside an `obj_`/`eqn_` definition.
    pub only_in_definitions: bool,
}

/// Counts from one cleaning pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HtmlCleanReport {
    pub lines_read: usize,
    pub lines_written: usize,
    pub pre_dropped: usize,
    pub paragraphs_hidden: usize,
    /// `Type:` lines with no paragraph opener directly before them.
    pub unmatched_type_labels: usize,
}

/// Clean an HTML document given as lines (terminators included).
pub fn clean_html(lines: &[String], options: HtmlCleanOptions) -> (Vec<String>, HtmlCleanReport) {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut report = HtmlCleanReport {
        lines_read: lines.len(),
        ..Default::default()
    };
    let mut in_type = false;

    for line in lines {
        if rules::is_definition_heading(line) {
            in_type = true;
        }
        if rules::is_card_start(line) {
            in_type = false;
        }
        if rules::is_pre_open(line) {
            report.pre_dropped += 1;
            continue;
        }
        if rules::is_type_label(line) && (in_type || !options.only_in_definitions) {
            match out.last_mut() {
                Some(prev) if rules::is_paragraph_open(prev.as_str()) => {
                    if let Some(hidden) = rules::hide_paragraph(prev) {
                        *prev = hidden;
                        report.paragraphs_hidden += 1;
                    }
                }
                _ => {
                    tracing::debug!("Type: label without a preceding <p>: {:?}", line.trim());
                    report.unmatched_type_labels += 1;
                }
            }
        }
        out.push(line.clone());
    }

    report.lines_written = out.len();
    (out, report)
}

/// Clean the HTML file at `path` and overwrite it.
pub fn clean_html_file(path: &Path, options: HtmlCleanOptions) -> Result<HtmlCleanReport> {
    let lines = read_lines(path)?;
    let (out, report) = clean_html(&lines, options);
    write_lines(path, &out)?;
    tracing::info!(
        path = %path.display(),
        read = report.lines_read,
        written = report.lines_written,
        hidden = report.paragraphs_hidden,
        "cleaned HTML reference"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::split_lines;

    const PAGE: &str = "\
<section class='p2 mb2 clearfix bg-white minishadow'>
  <div class='clearfix'>
    <h3 class='fl m0' id='obj_rectangle'>
      OBJ_Rectangle
    </h3>
  </div>
  <p>
    Type:
    <a href=\"https://developer.mozilla.org/docs/Web/JavaScript/Reference/Global_Objects/Object\">Object</a>
  </p>
  <pre class='p1 overflow-auto round fill-light'>OBJ_Rectangle</pre>
</section>
<section class='p2 mb2 clearfix bg-white minishadow'>
  <h3 class='fl m0' id='figure'>Figure</h3>
  <p>
    Type:
    Function
  </p>
</section>
";

    fn clean(text: &str, options: HtmlCleanOptions) -> (Vec<String>, HtmlCleanReport) {
        clean_html(&split_lines(text), options)
    }

    #[test]
    fn drops_pre_lines_and_keeps_count_invariant() {
        let (out, report) = clean(PAGE, HtmlCleanOptions::default());
        assert!(out.iter().all(|l| !l.trim_start().starts_with("<pre")));
        assert_eq!(report.pre_dropped, 1);
        assert_eq!(out.len(), report.lines_read - report.pre_dropped);
        assert_eq!(report.lines_written, out.len());
    }

    #[test]
    fn hides_paragraph_before_type_label() {
        let (out, report) = clean(PAGE, HtmlCleanOptions::default());
        assert_eq!(report.paragraphs_hidden, 2);
        assert_eq!(out[6], "  <p style=\"display:none\">\n");
        assert_eq!(out[7], "    Type:\n");
    }

    #[test]
    fn gating_limits_hiding_to_definitions() {
        let options = HtmlCleanOptions {
            only_in_definitions: true,
        };
        let (out, report) = clean(PAGE, options);
        assert_eq!(report.paragraphs_hidden, 1);
        assert!(out.contains(&"  <p style=\"display:none\">\n".to_string()));
        assert!(out.contains(&"  <p>\n".to_string()));
    }

    #[test]
    fn type_label_first_line_is_guarded() {
        let (out, report) = clean("  Type: Number\n<p>\n", HtmlCleanOptions::default());
        assert_eq!(out, vec!["  Type: Number\n", "<p>\n"]);
        assert_eq!(report.unmatched_type_labels, 1);
        assert_eq!(report.paragraphs_hidden, 0);
    }

    #[test]
    fn type_label_after_non_paragraph_untouched() {
        let (out, _) = clean("<div>\n  Type:\n", HtmlCleanOptions::default());
        assert_eq!(out, vec!["<div>\n", "  Type:\n"]);
    }

    #[test]
    fn paragraph_before_dropped_pre_is_still_previous_output() {
        // The `<pre>` line is never emitted, so the `<p>` above it is the last output line.
        let (out, report) = clean("<p>\n<pre>x</pre>\n Type:\n", HtmlCleanOptions::default());
        assert_eq!(report.paragraphs_hidden, 1);
        assert_eq!(out, vec!["<p style=\"display:none\">\n", " Type:\n"]);
    }

    #[test]
    fn clean_html_file_rewrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        std::fs::write(&path, PAGE).unwrap();
        let report = clean_html_file(&path, HtmlCleanOptions::default()).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), report.lines_written);
        assert!(!written.contains("<pre"));
        assert!(written.contains("<p style=\"display:none\">"));
    }

    #[test]
    fn clean_html_file_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.html");
        assert!(clean_html_file(&missing, HtmlCleanOptions::default()).is_err());
        assert!(!missing.exists());
    }
}
