//! Batch ESLint driver for trees of website roots.
//!
//! Pipeline, leaf to root:
//! - `discovery`: candidate files per site, with the reserved include-dir rule.
//! - `linter`: subprocess invocation and parsing of the text report.
//! - `aggregate`: per-site and per-run totals.
//! - `reporting`: report files, the run log and console output.
//! - `run`: drives the stages for one run.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod linter;
pub mod logging;
pub mod reporting;
pub mod run;
pub mod types;
