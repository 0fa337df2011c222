//! Link extraction from fetched documentation pages.
//!
//! Pages are scanned with regexes rather than a DOM: the auditor only needs
//! one element's inner HTML, the `href`s inside it, and `id` lookups.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use url::Url;

static HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a\b[^>]*?\bhref\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
        .expect("HREF_RE should compile")
});

/// Inner HTML of the first element whose `id` is `id`, or `None`.
///
/// Nested elements with the same tag name are balanced, so a `<div id="x">`
/// containing other `<div>`s yields its whole body. An unclosed element runs
/// to the end of the document.
pub fn extract_region<'a>(html: &'a str, id: &str) -> Option<&'a str> {
    let open_pattern = format!(
        r#"(?is)<([a-z][a-z0-9-]*)\s(?:[^>]*\s)?id\s*=\s*["']{}["'][^>]*>"#,
        regex::escape(id)
    );
    let open_re = Regex::new(&open_pattern).ok()?;
    let caps = open_re.captures(html)?;
    let open = caps.get(0)?;
    if open.as_str().ends_with("/>") {
        return Some("");
    }
    let tag = caps.get(1)?.as_str();
    let tag_re = Regex::new(&format!(r"(?i)<(/?){}\b[^>]*>", regex::escape(tag))).ok()?;

    let start = open.end();
    let mut depth = 1usize;
    for m in tag_re.captures_iter(&html[start..]) {
        let whole = m.get(0)?;
        let closing = m.get(1).is_some_and(|c| !c.as_str().is_empty());
        if closing {
            depth -= 1;
            if depth == 0 {
                return Some(&html[start..start + whole.start()]);
            }
        } else if !whole.as_str().ends_with("/>") {
            depth += 1;
        }
    }
    Some(&html[start..])
}

/// Every hyperlink in `html`, in document order, resolved against `base`.
///
/// Only `http`/`https` results are kept; fragment-only, `mailto:`,
/// `javascript:` and unparseable targets are skipped. Duplicates are kept.
pub fn extract_links(html: &str, base: &Url) -> Vec<String> {
    HREF_RE
        .captures_iter(html)
        .filter_map(|caps| {
            caps.get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(3))
                .map(|m| m.as_str())
        })
        .filter_map(|href| resolve_href(href, base))
        .collect()
}

fn resolve_href(href: &str, base: &Url) -> Option<String> {
    let href = href.trim().replace("&amp;", "&");
    if href.is_empty() || href.starts_with('#') {
        return None;
    }
    let lower = href.to_ascii_lowercase();
    if ["mailto:", "javascript:", "tel:", "data:"]
        .iter()
        .any(|p| lower.starts_with(p))
    {
        return None;
    }
    let url = base.join(&href).ok()?;
    matches!(url.scheme(), "http" | "https").then(|| url.to_string())
}

/// True if some element in `html` carries `id="<fragment>"` (leading `#` optional).
pub fn has_anchor(html: &str, fragment: &str) -> bool {
    let id = fragment.strip_prefix('#').unwrap_or(fragment);
    if id.is_empty() {
        return false;
    }
    let pattern = format!(r#"(?i)<[a-z][a-z0-9-]*\s(?:[^>]*\s)?id\s*=\s*["']{}["']"#, regex::escape(id));
    Regex::new(&pattern).is_ok_and(|re| re.is_match(html))
}

/// Values occurring more than once in `links`, in first-seen order.
///
/// Empty exactly when `links.len()` equals the number of distinct links.
pub fn find_duplicates(links: &[String]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(links.len());
    let mut reported = HashSet::new();
    let mut dupes = Vec::new();
    for link in links {
        if !seen.insert(link.as_str()) && reported.insert(link.as_str()) {
            dupes.push(link.clone());
        }
    }
    dupes
}
