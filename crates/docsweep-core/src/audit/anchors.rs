//! Fragment identifier check against the published reference page.

use super::report::AnchorResult;
use crate::error::Result;
use crate::http::HttpClient;
use crate::links::has_anchor;

/// Fetch `reference_url` once and report which `fragments` exist as element ids.
///
/// Fails only if the reference page itself cannot be fetched.
pub fn check_anchors<C: HttpClient + ?Sized>(
    client: &C,
    reference_url: &str,
    fragments: &[String],
) -> Result<Vec<AnchorResult>> {
    let page = super::fetch_page(client, reference_url)?;
    let results: Vec<AnchorResult> = fragments
        .iter()
        .map(|fragment| AnchorResult {
            fragment: fragment.clone(),
            found: has_anchor(&page, fragment),
        })
        .collect();
    let missing = results.iter().filter(|r| !r.found).count();
    tracing::info!(reference_url, checked = results.len(), missing, "anchor check");
    Ok(results)
}
