use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use brandcheck_core::cli::{dispatch, Cli};
use brandcheck_core::exit::BrandcheckExit;

const LOG_ENV: &str = "BRANDCHECK_LOG";

fn main() -> BrandcheckExit {
    init_tracing();
    let cli = Cli::parse();

    match dispatch::execute(cli.command, cli.verbose) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            BrandcheckExit::Error
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
