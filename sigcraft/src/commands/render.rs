//! `sigcraft render`: assemble a record, render it, and hand the HTML to its consumer.

use anyhow::Result;
use log::info;

use sigcraft_core::{ContactPatch, MemoryStorage, SignatureStore};

use crate::cli::RenderCommand;
use crate::commands::{build_record, emit_html, CommandContext};

pub fn run_render(cmd: &RenderCommand, ctx: &CommandContext) -> Result<()> {
    let record = build_record(&cmd.record)?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    let mut store = SignatureStore::new(MemoryStorage::new());
    store.replace_record(&ContactPatch::from(record));

    let html = if cmd.sanitize {
        store.sanitized_html()
    } else {
        store.html().to_string()
    };
    info!("Rendered signature ({} bytes).", html.len());

    emit_html(ctx, &html, cmd.output.as_deref(), cmd.clipboard)
}
