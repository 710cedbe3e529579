//! Data records passed between pipeline stages.

mod diagnostics;
mod site;

pub use diagnostics::FileDiagnostics;
pub use site::{RunSummary, SiteResult};

use serde::Serialize;
use std::fmt;

/// What the operator asked to lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// One website root.
    Single,
    /// A folder whose subdirectories are website roots.
    Bulk,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Bulk => write!(f, "bulk"),
        }
    }
}
