// src/reporting/writer.rs
//! Per-site report files.

use crate::constants::REPORT_STAMP_FORMAT;
use crate::error::{Result, SiteLintError};
use crate::types::SiteResult;
use chrono::{DateTime, Utc};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

/// Writes `<site>_<yyyyMMdd_HHmmss>.txt` files into one directory.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    dir: PathBuf,
}

impl ReportWriter {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Deterministic file name for a site within a run.
    #[must_use]
    pub fn report_path(&self, site_name: &str, stamp: DateTime<Utc>) -> PathBuf {
        self.dir.join(format!(
            "{}_{}.txt",
            file_safe(site_name),
            stamp.format(REPORT_STAMP_FORMAT)
        ))
    }

    /// Writes the site's report if it has findings. Returns the path written.
    ///
    /// An existing file is never overwritten; a numeric suffix is added instead.
    ///
    /// # Errors
    /// Returns error if the directory cannot be created or the file written.
    pub fn write_site(&self, site: &SiteResult, stamp: DateTime<Utc>) -> Result<Option<PathBuf>> {
        if !site.has_issues() {
            return Ok(None);
        }
        fs::create_dir_all(&self.dir).map_err(|e| SiteLintError::io(&self.dir, e))?;
        let (path, mut file) = self.create_unique(&site.site_name, stamp)?;
        file.write_all(site.report_text.as_bytes())
            .map_err(|e| SiteLintError::io(&path, e))?;
        tracing::info!(site = %site.site_name, path = %path.display(), "report written");
        Ok(Some(path))
    }

    fn create_unique(&self, site_name: &str, stamp: DateTime<Utc>) -> Result<(PathBuf, File)> {
        let base = self.report_path(site_name, stamp);
        let stem = base.with_extension("");
        let mut attempt = 0usize;
        loop {
            let path = if attempt == 0 {
                base.clone()
            } else {
                PathBuf::from(format!("{}_{attempt}.txt", stem.display()))
            };
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
                Err(e) => return Err(SiteLintError::io(&path, e)),
            }
        }
    }
}

/// Site names come from directory names; strip anything that would change the target dir.
fn file_safe(name: &str) -> String {
    name.chars()
        .map(|c| if matches!(c, '/' | '\\' | ':') { '_' } else { c })
        .collect()
}
