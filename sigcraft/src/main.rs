// sigcraft/src/main.rs
//! Sigcraft entry point.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use sigcraft::cli::Cli;
use sigcraft::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        Some(LevelFilter::Debug)
    } else if cli.quiet {
        Some(LevelFilter::Off)
    } else {
        None
    };
    logger::init_logger(level);

    if !sigcraft::run(cli)? {
        std::process::exit(1);
    }
    Ok(())
}
