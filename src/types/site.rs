//! Per-site and per-run aggregates.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Combined lint outcome for one website root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteResult {
    pub site_name: String,
    /// Per-file blocks, in discovery order. Not serialized; it goes to the report file.
    #[serde(skip)]
    pub report_text: String,
    pub total_errors: usize,
    pub total_warnings: usize,
    pub files_linted: usize,
    pub files_with_issues: usize,
}

impl SiteResult {
    #[must_use]
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
            report_text: String::new(),
            total_errors: 0,
            total_warnings: 0,
            files_linted: 0,
            files_with_issues: 0,
        }
    }

    #[must_use]
    pub fn has_issues(&self) -> bool {
        self.total_errors > 0 || self.total_warnings > 0
    }
}

/// Totals for a whole run, written to the run log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Sites that had a content directory, with or without findings.
    pub sites_processed: usize,
    pub total_errors: usize,
    pub total_warnings: usize,
    pub timestamp: DateTime<Utc>,
}

impl RunSummary {
    #[must_use]
    pub fn has_issues(&self) -> bool {
        self.total_errors > 0 || self.total_warnings > 0
    }
}
