// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{Config, LinterConfig, OutputConfig, SelectionConfig};
use crate::error::Result;
use std::path::Path;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `sitelint.toml` from the current directory, or `explicit` when given.
    ///
    /// # Errors
    /// Returns error if a config file exists but is unreadable or malformed.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => io::load_file(path),
            None => io::load_from_dir(Path::new(".")),
        }
    }

    /// Extensions lowercased and stripped of any leading dot.
    #[must_use]
    pub fn normalized_extensions(&self) -> Vec<String> {
        self.selection
            .extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn defaults_match_site_layout() {
        let c = Config::new();
        assert_eq!(c.selection.content_dir, "www");
        assert_eq!(c.selection.reserved_dir, "cms/includes");
        assert_eq!(c.selection.inline_prefix, "inline_");
        assert_eq!(c.linter.timeout_secs, 120);
        assert!(c.linter.fix);
        assert!(c.linter.config_file.is_none());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let c = io::parse_toml("[linter]\ntimeout_secs = 5\n", Path::new("x.toml")).unwrap();
        assert_eq!(c.linter.timeout_secs, 5);
        assert_eq!(c.linter.command, "npx eslint");
        assert_eq!(c.output.reports_dir, PathBuf::from("lint_reports"));
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = io::parse_toml("[linter\n", Path::new("bad.toml")).unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn extensions_are_normalized() {
        let mut c = Config::new();
        c.selection.extensions = vec![".JS".into(), "mjs".into(), String::new()];
        assert_eq!(c.normalized_extensions(), vec!["js", "mjs"]);
    }
}
