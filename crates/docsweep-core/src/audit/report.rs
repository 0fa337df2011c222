//! Audit results, kept serializable for `--json`.

use serde::Serialize;

/// A link that did not answer 200.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkFailure {
    pub url: String,
    /// HTTP status, when a response was received.
    pub status: Option<u32>,
    /// Transport error text, when no response was received.
    pub error: Option<String>,
}

impl LinkFailure {
    pub(crate) fn status(url: &str, status: u32) -> Self {
        Self {
            url: url.to_string(),
            status: Some(status),
            error: None,
        }
    }

    pub(crate) fn transport(url: &str, err: &crate::Error) -> Self {
        Self {
            url: url.to_string(),
            status: None,
            error: Some(err.to_string()),
        }
    }

    /// Short reason: `HTTP 404` or the transport error.
    pub fn reason(&self) -> String {
        match (self.status, &self.error) {
            (Some(code), _) => format!("HTTP {code}"),
            (None, Some(e)) => e.clone(),
            (None, None) => "unknown".to_string(),
        }
    }
}

/// Outcome for one configured source page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceReport {
    pub source: String,
    pub links_checked: usize,
    /// Failed links in the order they were checked.
    pub failures: Vec<LinkFailure>,
    /// Links listed more than once within one page's region.
    pub duplicates: Vec<String>,
    /// Sub-folder pages whose regions were also audited.
    pub folders: Vec<String>,
    /// Set when the source page itself could not be audited.
    pub error: Option<String>,
}

impl SourceReport {
    pub(crate) fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            ..Default::default()
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.duplicates.is_empty() && self.error.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub sources: Vec<SourceReport>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.sources.iter().all(SourceReport::is_clean)
    }

    pub fn links_checked(&self) -> usize {
        self.sources.iter().map(|s| s.links_checked).sum()
    }

    pub fn failure_count(&self) -> usize {
        self.sources.iter().map(|s| s.failures.len()).sum()
    }
}

/// Presence of one fragment identifier in the reference page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnchorResult {
    pub fragment: String,
    pub found: bool,
}
