//! Frontlog CLI entry point.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

mod cli;
mod commands;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.execute().await {
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let result = if verbose {
        frontlog_core::log::init_with_filter("frontlog=debug,frontlog_core=debug", false)
    } else {
        frontlog_core::log::init_default()
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Warning:".yellow().bold(), e);
    }
}
