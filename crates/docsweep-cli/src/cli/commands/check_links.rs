//! `docsweep check-links [url]...` – audit navigation-region links.

use anyhow::Result;
use docsweep_core::audit::{self, AuditEvent, AuditReport};
use docsweep_core::config::{AuditConfig, HttpConfig};
use docsweep_core::http::CurlClient;
use std::fmt::Write;

use crate::cli::Outcome;

#[derive(Debug, Clone, Copy, Default)]
pub struct CheckLinksArgs {
    pub progress: bool,
    pub json: bool,
}

impl CheckLinksArgs {
    /// Where progress lines go, if anywhere. Stdout is reserved for the document under `--json`.
    fn progress_to_stderr(&self) -> Option<bool> {
        self.progress.then_some(self.json)
    }
}

pub fn run_check_links(http: &HttpConfig, cfg: &AuditConfig, args: CheckLinksArgs) -> Result<Outcome> {
    let client = CurlClient::new(http);
    let progress = args.progress_to_stderr();
    let report = audit::audit(&client, cfg, |event| {
        match progress {
            Some(true) => eprint!("{}", progress_line(event)),
            Some(false) => print!("{}", progress_line(event)),
            None => {}
        }
    });

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }
    Ok(Outcome::from_clean(report.is_clean()))
}

fn progress_line(event: AuditEvent<'_>) -> String {
    match event {
        AuditEvent::Source { url } => format!("{url}\n"),
        AuditEvent::Link { index, total, url } => format!("  [{index}/{total}] {url}\n"),
        AuditEvent::Folder { url } => format!("  following {url}\n"),
    }
}

/// Sources with problems, each followed by its failed links and duplicates.
fn render_report(report: &AuditReport) -> String {
    let mut out = String::new();
    for src in &report.sources {
        if src.is_clean() {
            continue;
        }
        let _ = writeln!(out, "{}", src.source);
        if let Some(err) = &src.error {
            let _ = writeln!(out, "  not audited: {err}");
        }
        for failure in &src.failures {
            let _ = writeln!(out, "  {}  ({})", failure.url, failure.reason());
        }
        if !src.duplicates.is_empty() {
            let _ = writeln!(out, "  duplicate links:");
            for dup in &src.duplicates {
                let _ = writeln!(out, "    {dup}");
            }
        }
    }
    let _ = writeln!(
        out,
        "{} links checked across {} sources, {} failed",
        report.links_checked(),
        report.sources.len(),
        report.failure_count()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsweep_core::audit::{LinkFailure, SourceReport};

    #[test]
    fn render_lists_only_sources_with_problems() {
        let report = AuditReport {
            sources: vec![
                SourceReport {
                    source: "https://docs.example.com/examples".into(),
                    links_checked: 3,
                    failures: vec![LinkFailure {
                        url: "https://docs.example.com/missing".into(),
                        status: Some(404),
                        error: None,
                    }],
                    duplicates: vec!["https://docs.example.com/ok".into()],
                    ..Default::default()
                },
                SourceReport {
                    source: "https://docs.example.com/tutorials".into(),
                    links_checked: 2,
                    ..Default::default()
                },
            ],
        };
        let text = render_report(&report);
        assert_eq!(
            text,
            "https://docs.example.com/examples\n\
             \x20 https://docs.example.com/missing  (HTTP 404)\n\
             \x20 duplicate links:\n\
             \x20   https://docs.example.com/ok\n\
             5 links checked across 2 sources, 1 failed\n"
        );
    }

    #[test]
    fn progress_goes_to_stderr_under_json() {
        let plain = CheckLinksArgs {
            progress: true,
            json: false,
        };
        let json = CheckLinksArgs {
            progress: true,
            json: true,
        };
        let quiet = CheckLinksArgs {
            progress: false,
            json: true,
        };
        assert_eq!(plain.progress_to_stderr(), Some(false));
        assert_eq!(json.progress_to_stderr(), Some(true));
        assert_eq!(quiet.progress_to_stderr(), None);
    }

    #[test]
    fn progress_lines() {
        let line = progress_line(AuditEvent::Link {
            index: 2,
            total: 5,
            url: "https://docs.example.com/a",
        });
        assert_eq!(line, "  [2/5] https://docs.example.com/a\n");
    }

    #[test]
    fn render_source_error() {
        let report = AuditReport {
            sources: vec![SourceReport {
                source: "https://docs.example.com/examples".into(),
                error: Some("GET https://docs.example.com/examples returned HTTP 500".into()),
                ..Default::default()
            }],
        };
        let text = render_report(&report);
        assert!(text.contains("  not audited: GET https://docs.example.com/examples returned HTTP 500\n"));
        assert!(text.ends_with("0 links checked across 1 sources, 0 failed\n"));
    }
}
