//! `sigcraft sanitize`: clean arbitrary HTML against the signature allow-list.

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::io::{self, Read, Write};

use sigcraft_core::sanitize;

use crate::cli::SanitizeCommand;

pub fn run_sanitize(cmd: &SanitizeCommand) -> Result<()> {
    let input = match &cmd.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?,
        None => {
            debug!("Reading HTML from stdin.");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            buffer
        }
    };

    let cleaned = sanitize(&input);
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    writeln!(writer, "{}", cleaned)?;
    Ok(())
}
