//! Documentation link auditor.
//!
//! For each source page: fetch it, take the links inside the navigation
//! region, GET each one in order and record everything that is not a 200.
//! A source that cannot be fetched, or has no region, is recorded and the
//! run moves on. All requests are sequential.

mod anchors;
mod report;

pub use anchors::check_anchors;
pub use report::{AnchorResult, AuditReport, LinkFailure, SourceReport};

use crate::config::AuditConfig;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::links::{extract_links, extract_region, find_duplicates};
use url::Url;

/// Progress notifications emitted while auditing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditEvent<'a> {
    Source { url: &'a str },
    /// `index` is 1-based; `total` can grow when folders are followed.
    Link {
        index: usize,
        total: usize,
        url: &'a str,
    },
    Folder { url: &'a str },
}

/// Audit every configured source in order.
pub fn audit<C, F>(client: &C, cfg: &AuditConfig, mut on_event: F) -> AuditReport
where
    C: HttpClient + ?Sized,
    F: FnMut(AuditEvent<'_>),
{
    let mut report = AuditReport::default();
    for source in &cfg.sources {
        on_event(AuditEvent::Source { url: source });
        report
            .sources
            .push(audit_source(client, source, cfg, &mut on_event));
    }
    tracing::info!(
        sources = report.sources.len(),
        links = report.links_checked(),
        failures = report.failure_count(),
        "audit finished"
    );
    report
}

/// Audit a single source page.
pub fn audit_source<C, F>(client: &C, source: &str, cfg: &AuditConfig, on_event: &mut F) -> SourceReport
where
    C: HttpClient + ?Sized,
    F: FnMut(AuditEvent<'_>),
{
    let mut report = SourceReport::new(source);
    let links = match fetch_page(client, source)
        .and_then(|page| region_links(&page, source, &cfg.region_id))
    {
        Ok(links) => links,
        Err(e) => {
            tracing::warn!(source, "source not audited: {}", e);
            report.error = Some(e.to_string());
            return report;
        }
    };

    report.duplicates = find_duplicates(&links);
    let top_level = links.len();
    let folder_prefix = format!("{}/", source.trim_end_matches('/'));
    let mut queue = links;

    let mut i = 0;
    while i < queue.len() {
        let url = queue[i].clone();
        i += 1;
        on_event(AuditEvent::Link {
            index: i,
            total: queue.len(),
            url: &url,
        });
        report.links_checked += 1;

        let resp = match client.get(&url) {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(link = %url, "link unreachable: {}", e);
                report.failures.push(LinkFailure::transport(&url, &e));
                continue;
            }
        };
        if !resp.is_ok() {
            tracing::debug!(link = %url, status = resp.status, "link failed");
            report.failures.push(LinkFailure::status(&url, resp.status));
            continue;
        }

        // Folders are followed from the source page only, never from a folder.
        if cfg.follow_folders && i <= top_level && url.starts_with(&folder_prefix) {
            match region_links(&resp.body, &url, &cfg.region_id) {
                Ok(sub) => {
                    on_event(AuditEvent::Folder { url: &url });
                    for dup in find_duplicates(&sub) {
                        if !report.duplicates.contains(&dup) {
                            report.duplicates.push(dup);
                        }
                    }
                    report.folders.push(url.clone());
                    queue.extend(sub);
                }
                Err(e) => tracing::debug!(folder = %url, "folder not followed: {}", e),
            }
        }
    }

    report
}

/// GET `url` and return the body; anything but 200 is an error.
pub(crate) fn fetch_page<C: HttpClient + ?Sized>(client: &C, url: &str) -> Result<String> {
    let resp = client.get(url)?;
    if !resp.is_ok() {
        return Err(Error::Status {
            url: url.to_string(),
            status: resp.status,
        });
    }
    Ok(resp.body)
}

fn region_links(page: &str, page_url: &str, region_id: &str) -> Result<Vec<String>> {
    let base = Url::parse(page_url).map_err(|source| Error::InvalidUrl {
        url: page_url.to_string(),
        source,
    })?;
    let region = extract_region(page, region_id).ok_or_else(|| Error::RegionNotFound {
        url: page_url.to_string(),
        id: region_id.to_string(),
    })?;
    Ok(extract_links(region, &base))
}
