// sigcraft/src/lib.rs
//! # Sigcraft CLI Application
//!
//! The terminal front end for `sigcraft-core`: render signatures from presets, JSON
//! files and individual field assignments, preview templates, sanitize HTML, and
//! manage the saved-signature list.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;

use anyhow::Result;

use sigcraft_core::SigcraftConfig;

use crate::cli::{Cli, Commands};
use crate::commands::CommandContext;

/// Loads configuration for `cli`, applying the `--storage` override.
pub fn load_config(cli: &Cli) -> Result<SigcraftConfig> {
    let mut config = SigcraftConfig::load(cli.config.as_deref())?;
    if let Some(path) = &cli.storage {
        config.storage.path = Some(path.clone());
    }
    Ok(config)
}

/// Runs the parsed command. Returns `false` when the command completed but reported
/// a failure the process should signal through its exit status.
pub fn run(cli: Cli) -> Result<bool> {
    let config = load_config(&cli)?;
    let ctx = CommandContext::new(config, cli.quiet);

    match &cli.command {
        Commands::Render(cmd) => commands::render::run_render(cmd, &ctx)?,
        Commands::Sanitize(cmd) => commands::sanitize::run_sanitize(cmd)?,
        Commands::Validate(cmd) => return commands::validate::run_validate(cmd, &ctx),
        Commands::Templates(cmd) => commands::templates::run_templates(cmd, &ctx)?,
        Commands::Presets(cmd) => commands::presets::run_presets(cmd, &ctx)?,
        Commands::Saved(cmd) => commands::saved::run_saved(cmd, &ctx)?,
    }
    Ok(true)
}
