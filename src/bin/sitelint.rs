use clap::Parser;
use colored::Colorize;
use sitelint_core::cli::{handlers, Cli};
use sitelint_core::exit::SiteLintExit;
use sitelint_core::logging;

fn main() -> SiteLintExit {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match handlers::handle_run(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            SiteLintExit::Error
        }
    }
}
