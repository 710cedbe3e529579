// src/aggregate.rs
//! Folding per-file results into site totals and site totals into a run summary.

use crate::types::{FileDiagnostics, RunSummary, SiteResult};
use chrono::{DateTime, Utc};
use std::fmt::Write;
use std::path::Path;

impl SiteResult {
    /// Adds one file's outcome. Clean files only bump `files_linted`.
    pub fn absorb(&mut self, path: &Path, diag: &FileDiagnostics) {
        self.files_linted += 1;
        if !diag.has_issues() {
            return;
        }
        self.files_with_issues += 1;
        self.total_errors += diag.error_count();
        self.total_warnings += diag.warning_count();

        let _ = writeln!(
            self.report_text,
            "File: {} - Errors: {}, Warnings: {}",
            path.display(),
            diag.error_count(),
            diag.warning_count()
        );
        self.report_text.push_str(diag.diagnostic_text());
        self.report_text.push('\n');
    }
}

/// Folds file results, in discovery order, into one site result.
pub fn fold_site<'a, I>(site_name: &str, files: I) -> SiteResult
where
    I: IntoIterator<Item = (&'a Path, &'a FileDiagnostics)>,
{
    let mut site = SiteResult::new(site_name);
    for (path, diag) in files {
        site.absorb(path, diag);
    }
    site
}

/// Sums every processed site. Each entry is a site that had a content dir.
#[must_use]
pub fn summarize_run(sites: &[SiteResult], timestamp: DateTime<Utc>) -> RunSummary {
    RunSummary {
        sites_processed: sites.len(),
        total_errors: sites.iter().map(|s| s.total_errors).sum(),
        total_warnings: sites.iter().map(|s| s.total_warnings).sum(),
        timestamp,
    }
}
