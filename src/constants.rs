// src/constants.rs
//! Fixed names and defaults shared across the pipeline.

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "sitelint.toml";

/// Subdirectory of a site root that holds served content.
pub const CONTENT_DIR: &str = "www";

/// Template fragments under the content dir; only inline scripts are linted.
pub const RESERVED_DIR: &str = "cms/includes";

pub const INLINE_PREFIX: &str = "inline_";

pub const DEFAULT_EXTENSIONS: &[&str] = &["js"];

pub const LINTER_COMMAND: &str = "npx eslint";
pub const LINTER_TIMEOUT_SECS: u64 = 120;

pub const NO_COLOR_FLAG: &str = "--no-color";
pub const RULE_FLAG: &str = "--rule";
pub const NO_UNDEF_RULE: &str = "no-undef:error";
pub const CONFIG_FLAG: &str = "--config";
pub const FIX_FLAG: &str = "--fix";

/// Leading glyph of ESLint's `✖ N problems (...)` summary line.
pub const SUMMARY_MARKER: char = '\u{2716}';

pub const REPORTS_DIR: &str = "lint_reports";
pub const RUN_LOG_FILE: &str = "sitelint.log";

/// `yyyyMMdd_HHmmss`, used in report file names.
pub const REPORT_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
pub const LOG_STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";
