use super::pluralize;
use crate::run::{RunEvent, RunOutcome};
use crate::types::RunSummary;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Prints one progress or failure line for the operator.
///
/// With `quiet`, stdout progress is suppressed and only failures (stderr) remain.
pub fn print_event(event: &RunEvent<'_>, quiet: bool) {
    if quiet && is_progress(event) {
        return;
    }
    match event {
        RunEvent::SiteStarted { name, index, total } => {
            println!(
                "{} {}",
                format!("[{index}/{total}]").blue().bold(),
                name.bold()
            );
        }
        RunEvent::SiteSkipped { name } => {
            println!("  {} {name}: no content directory", "skip".dimmed());
        }
        RunEvent::SiteFailed { name, error } => {
            eprintln!("  {} {name}: {error}", "[!] Site failed:".red().bold());
        }
        RunEvent::FileStarted { path, index, total } => {
            println!("  {} {}", format!("({index}/{total})").dimmed(), path.display());
        }
        RunEvent::LinterStderr { path, stderr } => {
            eprintln!(
                "  {} {}",
                "Error while processing file:".yellow(),
                path.display()
            );
            for line in stderr.lines() {
                eprintln!("    {}", line.dimmed());
            }
        }
        RunEvent::FileFailed { path, error } => {
            eprintln!("  {} {}: {error}", "[!] Failed:".red().bold(), path.display());
        }
        RunEvent::SiteFinished { site, report } => {
            if let Some(path) = report {
                println!(
                    "  {} {} {}, {} {} -> {}",
                    "X".red().bold(),
                    site.total_errors,
                    pluralize("error", site.total_errors),
                    site.total_warnings,
                    pluralize("warning", site.total_warnings),
                    path.display()
                );
            } else if site.has_issues() {
                println!(
                    "  {} {} {}, {} {} (report not written)",
                    "X".red().bold(),
                    site.total_errors,
                    pluralize("error", site.total_errors),
                    site.total_warnings,
                    pluralize("warning", site.total_warnings)
                );
            } else {
                println!(
                    "  {} No lint errors found for {} ({} {}).",
                    "OK".green().bold(),
                    site.site_name,
                    site.files_linted,
                    pluralize("file", site.files_linted)
                );
            }
        }
        RunEvent::ReportFailed { name, error } => {
            eprintln!("  {} {name}: {error}", "[!] Report not written:".red().bold());
        }
        RunEvent::LogFailed { error } => {
            eprintln!("{} {error}", "[!] Run log not written:".yellow().bold());
        }
    }
}

fn is_progress(event: &RunEvent<'_>) -> bool {
    matches!(
        event,
        RunEvent::SiteStarted { .. }
            | RunEvent::SiteSkipped { .. }
            | RunEvent::FileStarted { .. }
            | RunEvent::SiteFinished { .. }
    )
}

/// Final totals line.
pub fn print_summary(summary: &RunSummary) {
    println!("{}", "-".repeat(60));
    let sites = format!(
        "{} {}",
        summary.sites_processed,
        pluralize("site", summary.sites_processed)
    );
    if summary.has_issues() {
        let marker = if summary.total_errors > 0 {
            "X".red().bold()
        } else {
            "~".yellow().bold()
        };
        println!(
            "{marker} {sites}: {} {}, {} {}.",
            summary.total_errors,
            pluralize("error", summary.total_errors),
            summary.total_warnings,
            pluralize("warning", summary.total_warnings)
        );
    } else {
        println!("{} {sites}: no lint errors or warnings.", "OK".green().bold());
    }
}

#[derive(Serialize)]
struct JsonOutcome<'a> {
    summary: &'a RunSummary,
    sites: &'a [crate::types::SiteResult],
    reports: &'a [std::path::PathBuf],
}

/// Renders the outcome as pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render_json(outcome: &RunOutcome) -> Result<String> {
    let view = JsonOutcome {
        summary: &outcome.summary,
        sites: &outcome.sites,
        reports: &outcome.reports,
    };
    Ok(serde_json::to_string_pretty(&view)?)
}
