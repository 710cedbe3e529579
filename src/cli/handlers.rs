// src/cli/handlers.rs
use super::args::Cli;
use super::prompt::{prompt_mode, prompt_path, validate_path};
use crate::config::Config;
use crate::discovery::SelectionRules;
use crate::error::SiteLintError;
use crate::exit::SiteLintExit;
use crate::linter::{EslintInvoker, StylishParser};
use crate::reporting::console;
use crate::reporting::{FileRunLog, ReportWriter};
use crate::run::Pipeline;
use crate::types::RunMode;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Runs one lint pass as described by the command line.
///
/// # Errors
/// Returns error on configuration problems or if the target cannot be listed.
pub fn handle_run(cli: &Cli) -> Result<SiteLintExit> {
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    apply_overrides(&mut config, cli);

    let (mode, target) = match resolve_target(cli) {
        Ok(t) => t,
        Err(SiteLintError::InvalidInput(msg)) => {
            eprintln!("{} {msg}", "Error:".red());
            return Ok(SiteLintExit::InvalidInput);
        }
        Err(e) => return Err(e.into()),
    };
    tracing::debug!(%mode, target = %target.display(), "starting run");

    let invoker = EslintInvoker::new(&config.linter, mode)?;
    let parser = StylishParser;
    let pipeline = Pipeline::new(
        &invoker,
        &parser,
        SelectionRules::from_config(&config),
        config.selection.content_dir.clone(),
        ReportWriter::new(config.output.reports_dir.clone()),
    );
    let log = FileRunLog::new(config.output.log_file.clone());

    let outcome = pipeline
        .run(mode, &target, &log, |event| console::print_event(&event, cli.json))
        .with_context(|| format!("Failed to lint {}", target.display()))?;

    if cli.json {
        println!("{}", console::render_json(&outcome)?);
    } else {
        console::print_summary(&outcome.summary);
    }
    Ok(SiteLintExit::Success)
}

/// CLI flags win over `sitelint.toml`.
pub fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(path) = &cli.eslint_config {
        config.linter.config_file = Some(path.clone());
    }
    if cli.no_fix {
        config.linter.fix = false;
    }
    if let Some(secs) = cli.timeout {
        config.linter.timeout_secs = secs;
    }
    if let Some(dir) = &cli.reports_dir {
        config.output.reports_dir = dir.clone();
    }
}

/// Mode and path from flags, prompting for whatever is missing.
fn resolve_target(cli: &Cli) -> crate::error::Result<(RunMode, PathBuf)> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    // With --json, stdout is reserved for the document.
    let mut out: Box<dyn Write> = if cli.json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    resolve_target_from(cli, &mut input, &mut out)
}

fn resolve_target_from<R: BufRead, W: Write>(
    cli: &Cli,
    input: &mut R,
    out: &mut W,
) -> crate::error::Result<(RunMode, PathBuf)> {
    let mode = match cli.mode {
        Some(m) => m,
        None => prompt_mode(input, out)?,
    };
    let path = match &cli.path {
        Some(p) => p.clone(),
        None => prompt_path(input, out, mode)?,
    };
    Ok((mode, validate_path(&path)?))
}
