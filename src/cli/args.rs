use crate::types::RunMode;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sitelint",
    version,
    about = "Run ESLint over website roots and collect per-site reports",
    after_help = "Without --mode or PATH the missing values are asked for interactively.\n\nExamples:\n  sitelint --mode single /srv/sites/shop\n  sitelint --mode bulk /srv/sites --eslint-config /srv/eslint.config.mjs"
)]
pub struct Cli {
    /// Website root (single mode) or folder of website roots (bulk mode)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
    /// Lint one site or every site in a folder
    #[arg(long, value_enum)]
    pub mode: Option<RunMode>,
    /// Path to sitelint.toml (default: ./sitelint.toml if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// ESLint config passed with --config in bulk mode
    #[arg(long, value_name = "FILE")]
    pub eslint_config: Option<PathBuf>,
    /// Do not pass --fix in bulk mode
    #[arg(long)]
    pub no_fix: bool,
    /// Per-file linter timeout in seconds (0 waits forever)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
    /// Directory for per-site report files
    #[arg(long, value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,
    /// Print the run summary as JSON instead of progress output
    #[arg(long)]
    pub json: bool,
    /// Enable debug tracing on stderr
    #[arg(long, short)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_command_line() {
        let cli = Cli::try_parse_from([
            "sitelint",
            "--mode",
            "bulk",
            "/srv/sites",
            "--no-fix",
            "--timeout",
            "30",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.mode, Some(RunMode::Bulk));
        assert_eq!(cli.path, Some(PathBuf::from("/srv/sites")));
        assert!(cli.no_fix);
        assert_eq!(cli.timeout, Some(30));
        assert!(cli.json);
    }

    #[test]
    fn everything_is_optional() {
        let cli = Cli::try_parse_from(["sitelint"]).unwrap();
        assert!(cli.mode.is_none());
        assert!(cli.path.is_none());
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["sitelint", "--mode", "all"]).is_err());
    }
}
