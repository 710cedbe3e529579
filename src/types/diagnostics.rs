//! Parsed result of one linter invocation.

/// Errors and warnings extracted from a single file's linter output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDiagnostics {
    /// Linter stdout exactly as captured.
    raw_output: String,
    error_count: usize,
    warning_count: usize,
    /// Retained diagnostic lines, each terminated by `\n`.
    diagnostic_text: String,
}

impl FileDiagnostics {
    #[must_use]
    pub fn new(
        raw_output: String,
        error_count: usize,
        warning_count: usize,
        diagnostic_text: String,
    ) -> Self {
        Self {
            raw_output,
            error_count,
            warning_count,
            diagnostic_text,
        }
    }

    /// A file the linter could not be run against.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn raw_output(&self) -> &str {
        &self.raw_output
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    #[must_use]
    pub fn diagnostic_text(&self) -> &str {
        &self.diagnostic_text
    }

    #[must_use]
    pub fn has_issues(&self) -> bool {
        self.error_count > 0 || self.warning_count > 0
    }
}
