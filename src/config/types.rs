use crate::constants::{
    CONTENT_DIR, DEFAULT_EXTENSIONS, INLINE_PREFIX, LINTER_COMMAND, LINTER_TIMEOUT_SECS,
    REPORTS_DIR, RESERVED_DIR, RUN_LOG_FILE,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Effective configuration: defaults, then `sitelint.toml`, then CLI flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub linter: LinterConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinterConfig {
    /// Program plus leading arguments, split with shell quoting rules.
    #[serde(default = "default_command")]
    pub command: String,
    #[serde(default)]
    pub extra_args: Vec<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// ESLint config passed with `--config` in bulk mode.
    #[serde(default)]
    pub config_file: Option<PathBuf>,
    /// Pass `--fix` in bulk mode.
    #[serde(default = "default_true")]
    pub fix: bool,
}

impl Default for LinterConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            extra_args: Vec::new(),
            timeout_secs: default_timeout_secs(),
            config_file: None,
            fix: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_content_dir")]
    pub content_dir: String,
    #[serde(default = "default_reserved_dir")]
    pub reserved_dir: String,
    #[serde(default = "default_inline_prefix")]
    pub inline_prefix: String,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            content_dir: default_content_dir(),
            reserved_dir: default_reserved_dir(),
            inline_prefix: default_inline_prefix(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_reports_dir")]
    pub reports_dir: PathBuf,
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            reports_dir: default_reports_dir(),
            log_file: default_log_file(),
        }
    }
}

const fn default_true() -> bool { true }
const fn default_timeout_secs() -> u64 { LINTER_TIMEOUT_SECS }
fn default_command() -> String { LINTER_COMMAND.to_string() }
fn default_content_dir() -> String { CONTENT_DIR.to_string() }
fn default_reserved_dir() -> String { RESERVED_DIR.to_string() }
fn default_inline_prefix() -> String { INLINE_PREFIX.to_string() }
fn default_reports_dir() -> PathBuf { PathBuf::from(REPORTS_DIR) }
fn default_log_file() -> PathBuf { PathBuf::from(RUN_LOG_FILE) }

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect()
}
