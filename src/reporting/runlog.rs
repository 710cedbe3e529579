// src/reporting/runlog.rs
//! Append-only run log, one line per run.
//!
//! The log is a capability handed to the run rather than a global, so tests
//! can capture entries in memory.

use crate::constants::LOG_STAMP_FORMAT;
use crate::error::{Result, SiteLintError};
use crate::types::{RunMode, RunSummary};
use chrono::{DateTime, Utc};
use std::cell::RefCell;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Destination for run summary lines.
pub trait RunLog {
    /// Appends one already formatted line.
    ///
    /// # Errors
    /// Returns error if the line cannot be persisted.
    fn append(&self, line: &str) -> Result<()>;
}

/// `<UTC timestamp>: <message>`
#[must_use]
pub fn format_entry(timestamp: DateTime<Utc>, message: &str) -> String {
    format!("{}: {message}", timestamp.format(LOG_STAMP_FORMAT))
}

/// Message recording mode, sites and totals of a run.
#[must_use]
pub fn summary_message(mode: RunMode, sites: &[String], summary: &RunSummary) -> String {
    let site_list = if sites.is_empty() {
        "(none)".to_string()
    } else {
        sites.join(", ")
    };
    format!(
        "Mode: {mode} | Sites: {site_list} | Sites processed: {} | Errors: {} | Warnings: {}",
        summary.sites_processed, summary.total_errors, summary.total_warnings
    )
}

/// Appends to a file on disk, creating it (and its parent) on first use.
#[derive(Debug, Clone)]
pub struct FileRunLog {
    path: PathBuf,
}

impl FileRunLog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RunLog for FileRunLog {
    fn append(&self, line: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| SiteLintError::io(parent, e))?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| SiteLintError::io(&self.path, e))?;
        writeln!(file, "{line}").map_err(|e| SiteLintError::io(&self.path, e))?;
        Ok(())
    }
}

/// Keeps lines in memory.
#[derive(Debug, Default)]
pub struct MemoryRunLog {
    lines: RefCell<Vec<String>>,
}

impl MemoryRunLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl RunLog for MemoryRunLog {
    fn append(&self, line: &str) -> Result<()> {
        self.lines.borrow_mut().push(line.to_string());
        Ok(())
    }
}
