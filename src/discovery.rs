// src/discovery.rs
//! Candidate file selection for one site.
//!
//! Everything with a lintable extension under the content root is taken,
//! except the reserved template directory: of that, only the files sitting
//! directly inside it with the inline prefix survive.

use crate::config::Config;
use crate::error::{Result, SiteLintError};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File selection rules resolved from config.
#[derive(Debug, Clone)]
pub struct SelectionRules {
    extensions: Vec<String>,
    reserved_dir: PathBuf,
    inline_prefix: String,
}

impl SelectionRules {
    #[must_use]
    pub fn new(extensions: Vec<String>, reserved_dir: impl Into<PathBuf>, inline_prefix: &str) -> Self {
        Self {
            extensions,
            reserved_dir: reserved_dir.into(),
            inline_prefix: inline_prefix.to_lowercase(),
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.normalized_extensions(),
            &config.selection.reserved_dir,
            &config.selection.inline_prefix,
        )
    }

    fn is_lintable(&self, path: &Path) -> bool {
        path.extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .is_some_and(|e| self.extensions.iter().any(|x| *x == e))
    }

    fn is_inline(&self, path: &Path) -> bool {
        path.file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .is_some_and(|n| n.starts_with(&self.inline_prefix))
    }
}

/// Produces the ordered list of files to lint under `root`.
///
/// Order is stable across runs: entries are visited sorted by file name,
/// and re-admitted inline files are appended last.
///
/// # Errors
/// Returns error if `root` cannot be made absolute, any entry under it cannot
/// be read, or the reserved directory exists but cannot be listed.
pub fn select_files(root: &Path, rules: &SelectionRules) -> Result<Vec<PathBuf>> {
    let root = std::path::absolute(root).map_err(|e| SiteLintError::io(root, e))?;
    let mut files: Vec<PathBuf> = walk_filesystem(&root)?
        .into_iter()
        .filter(|p| rules.is_lintable(p))
        .collect();

    let reserved = root.join(&rules.reserved_dir);
    if reserved.is_dir() {
        files.retain(|p| !p.starts_with(&reserved));
        files.extend(inline_files(&reserved, rules)?);
    }

    tracing::debug!(root = %root.display(), count = files.len(), "selected files");
    Ok(files)
}

fn walk_filesystem(root: &Path) -> Result<Vec<PathBuf>> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();
    accumulate_walker(walker)
}

/// Collects regular files. The first walk error aborts the selection so a
/// partially readable tree is never linted as if it were complete.
fn accumulate_walker<I>(walker: I) -> Result<Vec<PathBuf>>
where
    I: Iterator<Item = walkdir::Result<walkdir::DirEntry>>,
{
    let mut paths = Vec::new();
    for item in walker {
        let entry = item?;
        if entry.file_type().is_file() {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

/// Files directly inside `dir` (non-recursive) carrying the inline prefix.
fn inline_files(dir: &Path, rules: &SelectionRules) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| SiteLintError::io(dir, e))?;
    let mut found = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SiteLintError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() && rules.is_inline(&path) && rules.is_lintable(&path) {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}
