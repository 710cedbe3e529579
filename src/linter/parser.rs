//! Parsing of ESLint's human-readable ("stylish") report.
//!
//! The format is not a stable contract, so parsing is line based and
//! tolerant: anything unrecognized is scanned and dropped.

use crate::constants::SUMMARY_MARKER;
use crate::types::FileDiagnostics;
use regex::Regex;
use std::sync::LazyLock;

/// Turns raw linter stdout into per-file counts.
pub trait OutputParser {
    fn parse(&self, raw: &str) -> FileDiagnostics;
}

/// Parser for ESLint's default text output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StylishParser;

static SUMMARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s+problems?\s*\(\s*(\d+)\s+errors?\s*,\s*(\d+)\s+warnings?\s*\)")
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});

impl OutputParser for StylishParser {
    /// Counts per-line diagnostics. A parseable `✖` summary line replaces
    /// the counts accumulated so far; lines after it keep counting.
    fn parse(&self, raw: &str) -> FileDiagnostics {
        let mut errors = 0;
        let mut warnings = 0;
        let mut text = String::new();

        for line in raw.lines() {
            if is_summary_line(line) {
                if let Some(counts) = parse_summary(line) {
                    (errors, warnings) = counts;
                }
                continue;
            }

            let is_error = line.contains("error");
            let is_warning = line.contains("warning");
            if is_error {
                errors += 1;
            }
            if is_warning {
                warnings += 1;
            }
            if is_error || is_warning {
                text.push_str(line);
                text.push('\n');
            }
        }

        FileDiagnostics::new(raw.to_string(), errors, warnings, text)
    }
}

fn is_summary_line(line: &str) -> bool {
    line.trim_start().starts_with(SUMMARY_MARKER)
}

/// Extracts `(errors, warnings)` from `✖ N problems (E errors, W warnings)`.
fn parse_summary(line: &str) -> Option<(usize, usize)> {
    let caps = SUMMARY_RE.captures(line)?;
    let errors = caps.get(2)?.as_str().parse().ok()?;
    let warnings = caps.get(3)?.as_str().parse().ok()?;
    Some((errors, warnings))
}
