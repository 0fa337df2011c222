//! `docsweep clean-md [input] [output]` – clean the scratch Markdown reference.

use anyhow::{Context, Result};
use docsweep_core::markdown_clean;
use std::path::Path;

use crate::cli::Outcome;

pub fn run_clean_md(input: &Path, output: &Path) -> Result<Outcome> {
    let report = markdown_clean::clean_markdown_file(input, output)
        .with_context(|| format!("clean {}", input.display()))?;
    println!(
        "{} -> {}: {} lines -> {} ({} nav bullets, {} Type: lines dropped)",
        input.display(),
        output.display(),
        report.lines_read,
        report.lines_written,
        report.bullets_dropped,
        report.type_lines_dropped
    );
    Ok(Outcome::Clean)
}
