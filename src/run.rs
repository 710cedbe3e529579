// src/run.rs
//! One run: site discovery, per-file linting, aggregation and persistence.
//!
//! Sites are processed one after another and, within a site, files one at a
//! time. Progress and recoverable failures are reported through `RunEvent`
//! so the caller decides how to present them.

use crate::aggregate::summarize_run;
use crate::discovery::{select_files, SelectionRules};
use crate::error::{Result, SiteLintError};
use crate::linter::{Linter, OutputParser};
use crate::reporting::runlog::{format_entry, summary_message};
use crate::reporting::{ReportWriter, RunLog};
use crate::types::{FileDiagnostics, RunMode, RunSummary, SiteResult};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Progress and non-fatal failures emitted while a run proceeds.
#[derive(Debug)]
pub enum RunEvent<'a> {
    SiteStarted {
        name: &'a str,
        index: usize,
        total: usize,
    },
    /// Site root has no content directory.
    SiteSkipped { name: &'a str },
    /// File selection for the site failed; the site is not counted.
    SiteFailed {
        name: &'a str,
        error: &'a SiteLintError,
    },
    FileStarted {
        path: &'a Path,
        index: usize,
        total: usize,
    },
    LinterStderr { path: &'a Path, stderr: &'a str },
    FileFailed {
        path: &'a Path,
        error: &'a SiteLintError,
    },
    SiteFinished {
        site: &'a SiteResult,
        report: Option<&'a Path>,
    },
    ReportFailed {
        name: &'a str,
        error: &'a SiteLintError,
    },
    LogFailed { error: &'a SiteLintError },
}

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub summary: RunSummary,
    pub sites: Vec<SiteResult>,
    pub reports: Vec<PathBuf>,
}

/// Wiring of the pipeline stages for one run.
pub struct Pipeline<'a, L: Linter, P: OutputParser> {
    linter: &'a L,
    parser: &'a P,
    rules: SelectionRules,
    content_dir: String,
    writer: ReportWriter,
}

impl<'a, L: Linter, P: OutputParser> Pipeline<'a, L, P> {
    #[must_use]
    pub fn new(
        linter: &'a L,
        parser: &'a P,
        rules: SelectionRules,
        content_dir: impl Into<String>,
        writer: ReportWriter,
    ) -> Self {
        Self {
            linter,
            parser,
            rules,
            content_dir: content_dir.into(),
            writer,
        }
    }

    /// Lints every site under `target` and appends the run summary to `log`.
    ///
    /// # Errors
    /// Returns error only if the site roots themselves cannot be listed;
    /// per-site and per-file failures are reported as events.
    pub fn run<F>(
        &self,
        mode: RunMode,
        target: &Path,
        log: &dyn RunLog,
        mut on_event: F,
    ) -> Result<RunOutcome>
    where
        F: FnMut(RunEvent<'_>),
    {
        let stamp = Utc::now();
        let roots = site_roots(mode, target)?;
        let total = roots.len();
        let mut sites = Vec::new();
        let mut reports = Vec::new();

        for (idx, root) in roots.iter().enumerate() {
            let name = site_name(root);
            on_event(RunEvent::SiteStarted {
                name: &name,
                index: idx + 1,
                total,
            });

            let site = match self.lint_site(root, &name, &mut on_event) {
                Ok(Some(site)) => site,
                Ok(None) => {
                    on_event(RunEvent::SiteSkipped { name: &name });
                    continue;
                }
                Err(error) => {
                    on_event(RunEvent::SiteFailed { name: &name, error: &error });
                    continue;
                }
            };

            let report = self.persist(&site, stamp, &mut on_event);
            on_event(RunEvent::SiteFinished {
                site: &site,
                report: report.as_deref(),
            });
            reports.extend(report);
            sites.push(site);
        }

        let summary = summarize_run(&sites, stamp);
        let names: Vec<String> = sites.iter().map(|s| s.site_name.clone()).collect();
        let line = format_entry(stamp, &summary_message(mode, &names, &summary));
        if let Err(error) = log.append(&line) {
            on_event(RunEvent::LogFailed { error: &error });
        }

        tracing::info!(
            sites = summary.sites_processed,
            errors = summary.total_errors,
            warnings = summary.total_warnings,
            "run complete"
        );
        Ok(RunOutcome {
            summary,
            sites,
            reports,
        })
    }

    /// Lints one site root. `Ok(None)` when it has no content directory.
    ///
    /// # Errors
    /// Returns error if the candidate files cannot be selected.
    pub fn lint_site<F>(&self, root: &Path, name: &str, on_event: &mut F) -> Result<Option<SiteResult>>
    where
        F: FnMut(RunEvent<'_>),
    {
        let content = root.join(&self.content_dir);
        if !content.is_dir() {
            tracing::debug!(root = %root.display(), "no content dir, skipping");
            return Ok(None);
        }

        let files = select_files(&content, &self.rules)?;
        let total = files.len();
        let mut site = SiteResult::new(name);

        for (idx, path) in files.iter().enumerate() {
            on_event(RunEvent::FileStarted {
                path: path.as_path(),
                index: idx + 1,
                total,
            });
            let diag = self.lint_file(path, on_event);
            site.absorb(path, &diag);
        }
        Ok(Some(site))
    }

    /// Failures to run the linter leave the file with no diagnostics.
    fn lint_file<F>(&self, path: &Path, on_event: &mut F) -> FileDiagnostics
    where
        F: FnMut(RunEvent<'_>),
    {
        match self.linter.lint(path) {
            Ok(output) => {
                if output.has_stderr() {
                    on_event(RunEvent::LinterStderr {
                        path,
                        stderr: &output.stderr,
                    });
                }
                self.parser.parse(&output.stdout)
            }
            Err(error) => {
                tracing::warn!(file = %path.display(), %error, "linter invocation failed");
                on_event(RunEvent::FileFailed { path, error: &error });
                FileDiagnostics::empty()
            }
        }
    }

    fn persist<F>(&self, site: &SiteResult, stamp: DateTime<Utc>, on_event: &mut F) -> Option<PathBuf>
    where
        F: FnMut(RunEvent<'_>),
    {
        match self.writer.write_site(site, stamp) {
            Ok(path) => path,
            Err(error) => {
                on_event(RunEvent::ReportFailed {
                    name: &site.site_name,
                    error: &error,
                });
                None
            }
        }
    }
}

/// Site roots for a mode: the path itself, or its subdirectories sorted by name.
///
/// # Errors
/// Returns error if `target` is not a directory or cannot be listed.
pub fn site_roots(mode: RunMode, target: &Path) -> Result<Vec<PathBuf>> {
    if !target.is_dir() {
        return Err(SiteLintError::InvalidInput(format!(
            "not a directory: {}",
            target.display()
        )));
    }
    let target = std::path::absolute(target).map_err(|e| SiteLintError::io(target, e))?;
    match mode {
        RunMode::Single => Ok(vec![target]),
        RunMode::Bulk => {
            let mut roots = Vec::new();
            for entry in fs::read_dir(&target).map_err(|e| SiteLintError::io(&target, e))? {
                let path = entry.map_err(|e| SiteLintError::io(&target, e))?.path();
                if path.is_dir() {
                    roots.push(path);
                }
            }
            roots.sort();
            Ok(roots)
        }
    }
}

/// Last path component, used as the site's display and file name.
#[must_use]
pub fn site_name(root: &Path) -> String {
    root.components()
        .next_back()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "site".to_string())
}
