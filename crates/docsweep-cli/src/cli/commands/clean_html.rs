//! `docsweep clean-html [path]` – clean the HTML reference in place.

use anyhow::{Context, Result};
use docsweep_core::html_clean::{self, HtmlCleanOptions};
use std::path::Path;

use crate::cli::Outcome;

pub fn run_clean_html(path: &Path, only_in_definitions: bool) -> Result<Outcome> {
    let options = HtmlCleanOptions {
        only_in_definitions,
    };
    let report = html_clean::clean_html_file(path, options)
        .with_context(|| format!("clean {}", path.display()))?;
    println!(
        "{}: {} lines -> {} ({} <pre> dropped, {} Type: paragraphs hidden)",
        path.display(),
        report.lines_read,
        report.lines_written,
        report.pre_dropped,
        report.paragraphs_hidden
    );
    if report.unmatched_type_labels > 0 {
        println!(
            "  {} Type: label(s) had no <p> directly above; left as is",
            report.unmatched_type_labels
        );
    }
    Ok(Outcome::Clean)
}
