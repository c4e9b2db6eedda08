//! `sigcraft presets`: list the sample contact presets.

use anyhow::Result;
use is_terminal::IsTerminal;
use std::io::{self, Write};

use sigcraft_core::{PresetCatalog, PresetCategory};

use crate::cli::PresetsCommand;
use crate::commands::CommandContext;
use crate::ui::output_format::paint;
use crate::ui::theme::ThemeEntry;

pub fn run_presets(cmd: &PresetsCommand, ctx: &CommandContext) -> Result<()> {
    match cmd {
        PresetsCommand::List { category } => {
            let category = category
                .as_deref()
                .map(str::parse::<PresetCategory>)
                .transpose()?;
            let catalog = PresetCatalog::load_default()?;

            let stdout = io::stdout();
            let colors = stdout.is_terminal();
            let mut writer = stdout.lock();
            for preset in catalog.by_category(category) {
                writeln!(
                    writer,
                    "{}\t{}\t{} - {}",
                    paint(&preset.id, ThemeEntry::Identifier, &ctx.theme, colors),
                    paint(&preset.category.to_string(), ThemeEntry::Muted, &ctx.theme, colors),
                    preset.name,
                    preset.description
                )?;
            }
            Ok(())
        }
    }
}
