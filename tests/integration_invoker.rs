// tests/integration_invoker.rs - pipeline driving a real subprocess
#![cfg(unix)]

use sitelint_core::config::LinterConfig;
use sitelint_core::discovery::SelectionRules;
use sitelint_core::linter::{EslintInvoker, StylishParser};
use sitelint_core::reporting::{FileRunLog, ReportWriter};
use sitelint_core::run::{Pipeline, RunEvent};
use sitelint_core::types::RunMode;
use std::fs;
use tempfile::TempDir;

/// Stand-in for eslint: `$1` is the file; bad files get a stylish report.
const FAKE_ESLINT: &str = "sh -c 'case \"$1\" in \
    *bad.js) printf \"%s\\n\" \"$1\" \"  1:1  error  x is not defined  no-undef\" \"  2:1  warning  y is unused  no-unused-vars\" \"\" \"\u{2716} 2 problems (1 error, 1 warning)\"; exit 1;; \
    *warn.js) echo \"  5:5  warning  Unexpected console  no-console\"; echo \"config deprecated\" >&2;; \
    *) exit 0;; \
    esac' eslint";

fn linter_config() -> LinterConfig {
    LinterConfig {
        command: FAKE_ESLINT.to_string(),
        timeout_secs: 10,
        ..LinterConfig::default()
    }
}

#[test]
fn subprocess_output_flows_into_reports_and_log() {
    let sites = TempDir::new().unwrap();
    let www = sites.path().join("shop/www");
    fs::create_dir_all(www.join("js")).unwrap();
    fs::write(www.join("js/bad.js"), "x;").unwrap();
    fs::write(www.join("js/warn.js"), "console.log(1);").unwrap();
    fs::write(www.join("clean.js"), "var a = 1;").unwrap();

    let out = TempDir::new().unwrap();
    let invoker = EslintInvoker::new(&linter_config(), RunMode::Single).unwrap();
    let parser = StylishParser;
    let rules = SelectionRules::new(vec!["js".into()], "cms/includes", "inline_");
    let pipeline = Pipeline::new(&invoker, &parser, rules, "www", ReportWriter::new(out.path().join("reports")));
    let log = FileRunLog::new(out.path().join("sitelint.log"));

    let mut stderr_seen = Vec::new();
    let outcome = pipeline
        .run(RunMode::Single, &sites.path().join("shop"), &log, |e| {
            if let RunEvent::LinterStderr { stderr, .. } = e {
                stderr_seen.push(stderr.trim().to_string());
            }
        })
        .unwrap();

    assert_eq!(stderr_seen, vec!["config deprecated"]);
    assert_eq!(outcome.summary.sites_processed, 1);
    assert_eq!(outcome.summary.total_errors, 1);
    assert_eq!(outcome.summary.total_warnings, 2);

    let site = &outcome.sites[0];
    assert_eq!(site.files_linted, 3);
    assert_eq!(site.files_with_issues, 2);

    let report = fs::read_to_string(&outcome.reports[0]).unwrap();
    assert!(report.contains("bad.js - Errors: 1, Warnings: 1\n  1:1  error  x is not defined  no-undef\n  2:1  warning  y is unused  no-unused-vars\n\n"));
    assert!(report.contains("warn.js - Errors: 0, Warnings: 1\n"));
    assert!(!report.contains("clean.js"));

    let log_text = fs::read_to_string(out.path().join("sitelint.log")).unwrap();
    assert_eq!(log_text.lines().count(), 1);
    assert!(log_text.contains("Mode: single | Sites: shop | Sites processed: 1 | Errors: 1 | Warnings: 2"));
}

#[test]
fn missing_linter_binary_does_not_abort_site() {
    let sites = TempDir::new().unwrap();
    let www = sites.path().join("shop/www");
    fs::create_dir_all(&www).unwrap();
    fs::write(www.join("a.js"), "").unwrap();
    fs::write(www.join("b.js"), "").unwrap();

    let out = TempDir::new().unwrap();
    let config = LinterConfig {
        command: "sitelint-no-such-eslint-binary".to_string(),
        ..LinterConfig::default()
    };
    let invoker = EslintInvoker::new(&config, RunMode::Single).unwrap();
    let parser = StylishParser;
    let rules = SelectionRules::new(vec!["js".into()], "cms/includes", "inline_");
    let pipeline = Pipeline::new(&invoker, &parser, rules, "www", ReportWriter::new(out.path()));
    let log = FileRunLog::new(out.path().join("run.log"));

    let mut failures = 0;
    let outcome = pipeline
        .run(RunMode::Single, &sites.path().join("shop"), &log, |e| {
            if matches!(e, RunEvent::FileFailed { .. }) {
                failures += 1;
            }
        })
        .unwrap();

    assert_eq!(failures, 2);
    assert_eq!(outcome.summary.sites_processed, 1);
    assert_eq!(outcome.sites[0].files_linted, 2);
    assert!(!outcome.sites[0].has_issues());
    assert!(outcome.reports.is_empty());
}
