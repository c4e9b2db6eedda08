//! `sigcraft templates`: list the catalog and preview instantiated templates.

use anyhow::Result;
use is_terminal::IsTerminal;
use std::io::{self, Write};

use sigcraft_core::templates::{self, UnfilledToken};
use sigcraft_core::{sanitize, ContactRecord};

use crate::cli::TemplatesCommand;
use crate::commands::{apply_assignments, CommandContext};
use crate::ui::output_format::paint;
use crate::ui::theme::ThemeEntry;

pub fn run_templates(cmd: &TemplatesCommand, ctx: &CommandContext) -> Result<()> {
    match cmd {
        TemplatesCommand::List => list_templates(ctx),
        TemplatesCommand::Show { id, set, blank_missing, sanitize: clean } => {
            let template = templates::require(id)?;
            let mut record = ContactRecord::default();
            apply_assignments(&mut record, set)?;

            let unfilled = if *blank_missing { UnfilledToken::Blank } else { UnfilledToken::Keep };
            let html = templates::instantiate(template, &record, unfilled);
            let html = if *clean { sanitize(&html) } else { html };

            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writeln!(writer, "{}", html)?;
            Ok(())
        }
    }
}

fn list_templates(ctx: &CommandContext) -> Result<()> {
    let stdout = io::stdout();
    let colors = stdout.is_terminal();
    let mut writer = stdout.lock();
    for template in templates::list() {
        writeln!(
            writer,
            "{}\t{}",
            paint(template.id, ThemeEntry::Identifier, &ctx.theme, colors),
            template.name
        )?;
    }
    Ok(())
}
