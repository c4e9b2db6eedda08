// sigcraft/src/commands/mod.rs
//! Command implementations and the helpers they share: assembling a contact record
//! from CLI sources, and writing messages and results.

pub mod presets;
pub mod render;
pub mod sanitize;
pub mod saved;
pub mod templates;
pub mod validate;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::debug;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use sigcraft_core::{ContactField, ContactPatch, ContactRecord, PresetCatalog, SigcraftConfig};

use crate::cli::RecordArgs;
use crate::ui::output_format;
use crate::ui::theme::{ThemeMap, ThemeStyle};
use crate::utils::clipboard::copy_html_to_clipboard;

/// What every command needs besides its own arguments.
pub struct CommandContext {
    pub config: SigcraftConfig,
    pub theme: ThemeMap,
    pub quiet: bool,
}

impl CommandContext {
    pub fn new(config: SigcraftConfig, quiet: bool) -> Self {
        Self {
            config,
            theme: ThemeStyle::default_theme_map(),
            quiet,
        }
    }

    /// Informational note on stderr, suppressed by `--quiet`.
    pub fn info_msg(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        let colors = io::stderr().is_terminal();
        let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), &self.theme, colors);
    }

    pub fn success_msg(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        let colors = io::stderr().is_terminal();
        let _ = output_format::print_success_message(&mut io::stderr(), msg.as_ref(), &self.theme, colors);
    }

    pub fn warn_msg(&self, msg: impl AsRef<str>) {
        let colors = io::stderr().is_terminal();
        let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), &self.theme, colors);
    }

    pub fn error_msg(&self, msg: impl AsRef<str>) {
        let colors = io::stderr().is_terminal();
        let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), &self.theme, colors);
    }
}

/// Parses one `field=value` assignment. The value may itself contain `=`.
pub fn parse_assignment(raw: &str) -> Result<(ContactField, String)> {
    let (name, value) = raw
        .split_once('=')
        .with_context(|| format!("Expected FIELD=VALUE, got '{}'", raw))?;
    let field: ContactField = name.trim().parse()?;
    Ok((field, unescape_newlines(value)))
}

/// Lets `--set address='Line 1\nLine 2'` carry a line break from a shell.
fn unescape_newlines(value: &str) -> String {
    value.replace("\\n", "\n")
}

/// Applies `--set` assignments in order.
pub fn apply_assignments(record: &mut ContactRecord, assignments: &[String]) -> Result<()> {
    for raw in assignments {
        let (field, value) = parse_assignment(raw)?;
        record.set(field, value);
    }
    Ok(())
}

/// Assembles a record from a preset, then a JSON data file, then `--set` assignments.
pub fn build_record(args: &RecordArgs) -> Result<ContactRecord> {
    let mut record = ContactRecord::default();

    if let Some(id) = &args.preset {
        let catalog = PresetCatalog::load_default()?;
        let preset = catalog.require(id)?;
        debug!("Starting from preset '{}'.", preset.id);
        record.apply(&preset.patch());
    }

    if let Some(path) = &args.data {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read contact data {}", path.display()))?;
        let patch: ContactPatch = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse contact data {}", path.display()))?;
        record.apply(&patch);
    }

    apply_assignments(&mut record, &args.set)?;
    Ok(record)
}

/// Writes `content` to `output` or stdout, and copies it to the clipboard on request.
pub fn emit_html(ctx: &CommandContext, content: &str, output: Option<&Path>, clipboard: bool) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            ctx.info_msg(format!("Signature written to {}", path.display()));
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writeln!(writer, "{}", content)?;
        }
    }

    if clipboard {
        match copy_html_to_clipboard(content) {
            Ok(()) => ctx.success_msg("Signature copied to clipboard."),
            Err(e) => ctx.warn_msg(format!("Failed to copy to clipboard: {:#}", e)),
        }
    }
    Ok(())
}
