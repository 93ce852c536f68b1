mod cli;
mod commands;
mod config;
mod error;
mod report;

use clap::Parser;
use tracing::Level;

use crate::error::{DiffCheckError, DiffCheckResult};

fn main() {
    let args = cli::Cli::parse();

    if let Err(e) = init_logging(&args.log_level) {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }

    match commands::execute(args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(level: &str) -> DiffCheckResult<()> {
    let level: Level = level
        .parse()
        .map_err(|_| DiffCheckError::Config(format!("unknown log level: {}", level)))?;
    // Keep stdout clean for report output
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
