// src/linter/invoker.rs
//! Subprocess invocation of ESLint, one file at a time.

use super::{Linter, LinterOutput};
use crate::config::LinterConfig;
use crate::constants::{CONFIG_FLAG, FIX_FLAG, NO_COLOR_FLAG, NO_UNDEF_RULE, RULE_FLAG};
use crate::error::{Result, SiteLintError};
use crate::types::RunMode;
use std::ffi::OsString;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Launches the configured linter command with a fixed argument layout.
#[derive(Debug, Clone)]
pub struct EslintInvoker {
    program: String,
    /// Arguments that belong to the command itself (e.g. `eslint` after `npx`).
    leading_args: Vec<String>,
    config_file: Option<PathBuf>,
    fix: bool,
    extra_args: Vec<String>,
    /// `None` waits indefinitely.
    timeout: Option<Duration>,
}

impl EslintInvoker {
    /// Builds an invoker from config. Bulk mode adds `--config` and `--fix`.
    ///
    /// Uses POSIX shell-style quoting rules via `shell_words::split` so a
    /// command like `node "C:/tools/eslint.js"` keeps its quoted path whole.
    ///
    /// # Errors
    /// Returns error if the command string is empty or unparseable.
    pub fn new(config: &LinterConfig, mode: RunMode) -> Result<Self> {
        let parts = shell_words::split(&config.command)
            .map_err(|_| SiteLintError::InvalidCommand(config.command.clone()))?;
        let Some((program, leading)) = parts.split_first() else {
            return Err(SiteLintError::InvalidCommand(config.command.clone()));
        };

        let bulk = mode == RunMode::Bulk;
        Ok(Self {
            program: program.clone(),
            leading_args: leading.to_vec(),
            config_file: if bulk { config.config_file.clone() } else { None },
            fix: bulk && config.fix,
            extra_args: config.extra_args.clone(),
            timeout: (config.timeout_secs > 0).then(|| Duration::from_secs(config.timeout_secs)),
        })
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Full argument list for linting `file`.
    #[must_use]
    pub fn args_for(&self, file: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.leading_args.iter().map(OsString::from).collect();
        args.push(file.as_os_str().to_os_string());
        args.push(NO_COLOR_FLAG.into());
        args.push(RULE_FLAG.into());
        args.push(NO_UNDEF_RULE.into());
        if let Some(cfg) = &self.config_file {
            args.push(CONFIG_FLAG.into());
            args.push(cfg.as_os_str().to_os_string());
        }
        if self.fix {
            args.push(FIX_FLAG.into());
        }
        args.extend(self.extra_args.iter().map(OsString::from));
        args
    }
}

impl Linter for EslintInvoker {
    fn lint(&self, file: &Path) -> Result<LinterOutput> {
        let start = Instant::now();
        let mut child = Command::new(&self.program)
            .args(self.args_for(file))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| SiteLintError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // Both pipes are drained concurrently so a chatty child never blocks on a full buffer.
        let stdout = child.stdout.take().ok_or_else(|| missing_pipe(&self.program, "stdout"))?;
        let stderr = child.stderr.take().ok_or_else(|| missing_pipe(&self.program, "stderr"))?;
        let out_thread = spawn_stream_reader(stdout);
        let err_thread = spawn_stream_reader(stderr);

        let status = wait_with_timeout(&mut child, self.timeout)
            .map_err(|e| SiteLintError::io(file, e))?;

        if status.is_none() {
            // Only the direct child; a grandchild keeps the pipes open, so the
            // reader threads are left detached instead of joined.
            let _ = child.kill();
            let _ = child.wait();
            return Err(SiteLintError::Timeout {
                path: file.to_path_buf(),
                secs: self.timeout.map_or(0, |t| t.as_secs()),
            });
        }

        let output = LinterOutput {
            stdout: out_thread.join().unwrap_or_default(),
            stderr: err_thread.join().unwrap_or_default(),
        };
        tracing::debug!(
            file = %file.display(),
            exit = ?status.and_then(|s| s.code()),
            elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            "linter finished"
        );
        Ok(output)
    }
}

fn missing_pipe(program: &str, stream: &str) -> SiteLintError {
    SiteLintError::Spawn {
        program: program.to_string(),
        source: io::Error::other(format!("{stream} was not captured")),
    }
}

fn spawn_stream_reader<R: Read + Send + 'static>(mut input: R) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = input.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    })
}

/// Polls for exit; `Ok(None)` means the deadline passed first.
fn wait_with_timeout(child: &mut Child, timeout: Option<Duration>) -> io::Result<Option<ExitStatus>> {
    let Some(limit) = timeout else {
        return child.wait().map(Some);
    };
    let start = Instant::now();
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if start.elapsed() >= limit {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(command: &str) -> LinterConfig {
        LinterConfig {
            command: command.to_string(),
            config_file: Some(PathBuf::from("eslint.config.mjs")),
            ..LinterConfig::default()
        }
    }

    fn strings(args: &[OsString]) -> Vec<String> {
        args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn single_mode_args() {
        let inv = EslintInvoker::new(&config("npx eslint"), RunMode::Single).unwrap();
        assert_eq!(inv.program(), "npx");
        assert_eq!(
            strings(&inv.args_for(Path::new("/s/www/a.js"))),
            vec!["eslint", "/s/www/a.js", "--no-color", "--rule", "no-undef:error"]
        );
    }

    #[test]
    fn bulk_mode_adds_config_and_fix() {
        let inv = EslintInvoker::new(&config("npx eslint"), RunMode::Bulk).unwrap();
        assert_eq!(
            strings(&inv.args_for(Path::new("a.js"))),
            vec![
                "eslint",
                "a.js",
                "--no-color",
                "--rule",
                "no-undef:error",
                "--config",
                "eslint.config.mjs",
                "--fix"
            ]
        );
    }

    #[test]
    fn bulk_mode_respects_no_fix_and_no_config() {
        let mut c = config("eslint");
        c.fix = false;
        c.config_file = None;
        c.extra_args = vec!["--quiet".into()];
        let inv = EslintInvoker::new(&c, RunMode::Bulk).unwrap();
        assert_eq!(
            strings(&inv.args_for(Path::new("a.js"))),
            vec!["a.js", "--no-color", "--rule", "no-undef:error", "--quiet"]
        );
    }

    #[test]
    fn quoted_command_kept_whole() {
        let inv = EslintInvoker::new(&config("node \"/opt/my tools/eslint.js\""), RunMode::Single).unwrap();
        assert_eq!(inv.program(), "node");
        assert_eq!(strings(&inv.args_for(Path::new("a.js")))[0], "/opt/my tools/eslint.js");
    }

    #[test]
    fn empty_command_rejected() {
        assert!(matches!(
            EslintInvoker::new(&config("   "), RunMode::Single),
            Err(SiteLintError::InvalidCommand(_))
        ));
    }

    #[test]
    fn unclosed_quote_rejected() {
        assert!(EslintInvoker::new(&config("eslint \"oops"), RunMode::Single).is_err());
    }

    #[test]
    fn zero_timeout_means_unbounded() {
        let mut c = config("eslint");
        c.timeout_secs = 0;
        let inv = EslintInvoker::new(&c, RunMode::Single).unwrap();
        assert!(inv.timeout.is_none());
    }

    #[test]
    fn nonexistent_program_is_spawn_error() {
        let inv = EslintInvoker::new(&config("nonexistent_binary_xyz_123"), RunMode::Single).unwrap();
        assert!(matches!(
            inv.lint(Path::new("a.js")),
            Err(SiteLintError::Spawn { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout_with_arguments() {
        let inv = EslintInvoker::new(&config("sh -c 'printf \"%s\\n\" \"$@\"' eslint"), RunMode::Single)
            .unwrap();
        let out = inv.lint(Path::new("/w/a.js")).unwrap();
        assert_eq!(out.stdout, "/w/a.js\n--no-color\n--rule\nno-undef:error\n");
        assert!(!out.has_stderr());
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_not_an_error() {
        let script = "sh -c 'echo \"1:1 error x\"; echo oops >&2; exit 1' eslint";
        let inv = EslintInvoker::new(&config(script), RunMode::Single).unwrap();
        let out = inv.lint(Path::new("a.js")).unwrap();
        assert_eq!(out.stdout, "1:1 error x\n");
        assert_eq!(out.stderr, "oops\n");
        assert!(out.has_stderr());
    }

    #[cfg(unix)]
    #[test]
    fn large_output_on_both_streams_does_not_deadlock() {
        let script = "sh -c 'i=0; while [ $i -lt 4000 ]; do \
                      echo \"line $i error xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx\"; \
                      echo \"line $i warning yyyyyyyyyyyyyyyyyyyyyyyyyyyyyyyy\" >&2; \
                      i=$((i+1)); done' eslint";
        let inv = EslintInvoker::new(&config(script), RunMode::Single).unwrap();
        let out = inv.lint(Path::new("a.js")).unwrap();
        assert_eq!(out.stdout.lines().count(), 4000);
        assert_eq!(out.stderr.lines().count(), 4000);
    }

    #[cfg(unix)]
    #[test]
    fn hung_linter_times_out() {
        let mut c = config("sh -c 'sleep 5' eslint");
        c.timeout_secs = 1;
        let inv = EslintInvoker::new(&c, RunMode::Single).unwrap();
        let start = Instant::now();
        let res = inv.lint(Path::new("a.js"));
        assert!(matches!(res, Err(SiteLintError::Timeout { secs: 1, .. })));
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[cfg(unix)]
    #[test]
    fn timeout_returns_while_grandchild_holds_pipes() {
        let mut c = config("sh -c 'sleep 5 & wait' eslint");
        c.timeout_secs = 1;
        let inv = EslintInvoker::new(&c, RunMode::Single).unwrap();
        let start = Instant::now();
        let res = inv.lint(Path::new("a.js"));
        assert!(matches!(res, Err(SiteLintError::Timeout { .. })));
        assert!(start.elapsed() < Duration::from_secs(4));
    }
}
