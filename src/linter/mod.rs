//! External linter boundary.
//!
//! `Linter` runs the tool against one file and hands back raw text;
//! `OutputParser` turns that text into counts. The pipeline only talks to
//! these two traits, so a stand-in linter or a structured-output parser can
//! replace either side independently.

mod invoker;
mod parser;

pub use invoker::EslintInvoker;
pub use parser::{OutputParser, StylishParser};

use crate::error::Result;
use std::path::Path;

/// Captured streams of one linter invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinterOutput {
    pub stdout: String,
    pub stderr: String,
}

impl LinterOutput {
    #[must_use]
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Whether the tool wrote anything to its error stream.
    #[must_use]
    pub fn has_stderr(&self) -> bool {
        !self.stderr.trim().is_empty()
    }
}

/// Runs the external linter against a single file.
pub trait Linter {
    /// Lints `file`, returning both output streams.
    ///
    /// A non-zero exit status is not an error; only failing to launch or
    /// finish the process is.
    ///
    /// # Errors
    /// Returns error if the process cannot be spawned or times out.
    fn lint(&self, file: &Path) -> Result<LinterOutput>;
}
