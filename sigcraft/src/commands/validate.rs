//! `sigcraft validate`: report per-field problems the way a form layer would.

use anyhow::Result;
use is_terminal::IsTerminal;
use std::io::{self, Write};

use sigcraft_core::{validate_record, LogoPolicy};

use crate::cli::ValidateCommand;
use crate::commands::{build_record, CommandContext};
use crate::ui::output_format::paint;
use crate::ui::theme::ThemeEntry;

/// Returns `true` when the record has no field errors.
pub fn run_validate(cmd: &ValidateCommand, ctx: &CommandContext) -> Result<bool> {
    let record = build_record(&cmd.record)?;
    let policy = LogoPolicy::from_config(&ctx.config);
    let errors = validate_record(&record, &policy);

    let stdout = io::stdout();
    let colors = stdout.is_terminal();
    let mut writer = stdout.lock();

    if cmd.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&errors)?)?;
    } else if errors.is_empty() {
        ctx.success_msg("All fields are valid.");
    } else {
        for error in &errors {
            writeln!(
                writer,
                "{}: {}",
                paint(&error.field, ThemeEntry::FieldName, &ctx.theme, colors),
                error.message
            )?;
        }
        ctx.error_msg(format!("{} field(s) need attention.", errors.len()));
    }

    Ok(errors.is_empty())
}
