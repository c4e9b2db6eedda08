//! `sigcraft saved`: the saved-signature list, backed by the configured storage file.

use anyhow::Result;
use is_terminal::IsTerminal;
use std::io::{self, Write};

use sigcraft_core::{ContactPatch, SigcraftError, SignatureStorage, SignatureStore};

use crate::cli::SavedCommand;
use crate::commands::{build_record, CommandContext};
use crate::ui::output_format::paint;
use crate::ui::theme::ThemeEntry;

pub fn run_saved(cmd: &SavedCommand, ctx: &CommandContext) -> Result<()> {
    let mut store = SignatureStore::from_config(&ctx.config);
    store.load_persisted();

    match cmd {
        SavedCommand::List { search } => list_saved(&store, search.as_deref().unwrap_or(""), ctx),
        SavedCommand::Save { name, record } => {
            let record = build_record(record)?;
            store.replace_record(&ContactPatch::from(record));
            let saved = store.save(name);
            ctx.success_msg(format!("Saved '{}'.", saved.name));
            println!("{}", saved.id);
            Ok(())
        }
        SavedCommand::Show { id, sanitize } => {
            if !store.load_by_id(id) {
                return Err(SigcraftError::SignatureNotFound(id.clone()).into());
            }
            let html = if *sanitize { store.sanitized_html() } else { store.html().to_string() };
            println!("{}", html);
            Ok(())
        }
        SavedCommand::Delete { id } => {
            if !store.delete(id) {
                return Err(SigcraftError::SignatureNotFound(id.clone()).into());
            }
            ctx.success_msg(format!("Deleted {}.", id));
            Ok(())
        }
        SavedCommand::Duplicate { id } => {
            let copy = store
                .duplicate(id)
                .ok_or_else(|| SigcraftError::SignatureNotFound(id.clone()))?;
            ctx.success_msg(format!("Created '{}'.", copy.name));
            println!("{}", copy.id);
            Ok(())
        }
    }
}

fn list_saved<S: SignatureStorage>(store: &SignatureStore<S>, query: &str, ctx: &CommandContext) -> Result<()> {
    let matches = store.search(query);
    if matches.is_empty() {
        ctx.info_msg("No saved signatures.");
        return Ok(());
    }

    let stdout = io::stdout();
    let colors = stdout.is_terminal();
    let mut writer = stdout.lock();
    for saved in matches {
        writeln!(
            writer,
            "{}\t{}\t{}",
            paint(&saved.id, ThemeEntry::Identifier, &ctx.theme, colors),
            saved.name,
            paint(&saved.created_at, ThemeEntry::Muted, &ctx.theme, colors)
        )?;
    }
    Ok(())
}
