// sigcraft/src/cli.rs
//! This file defines the command-line interface (CLI) for the sigcraft application,
//! including all available commands and their arguments.
//! License: MIT OR APACHE 2.0

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "sigcraft",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Build, preview and keep email signatures",
    long_about = "Sigcraft renders contact details into a table-based, inline-styled HTML signature that survives pasting into webmail clients, sanitizes untrusted HTML for preview, browses a catalog of signature templates and sample presets, and keeps a list of named, saved signatures.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a custom configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", global = true, help = "Path to a custom configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Override where saved signatures are stored.
    #[arg(
        long = "storage",
        value_name = "FILE",
        env = "SIGCRAFT_STORAGE_FILE",
        global = true,
        help = "Store saved signatures in this JSON file."
    )]
    pub storage: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `sigcraft` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Renders a signature from contact details.
    #[command(about = "Render a signature from contact details.")]
    Render(RenderCommand),

    /// Sanitizes HTML from a file or stdin.
    #[command(about = "Sanitize HTML from a file or stdin against the signature allow-list.")]
    Sanitize(SanitizeCommand),

    /// Checks contact details and reports problems per field.
    #[command(about = "Validate contact details; exits with status 1 if any field is invalid.")]
    Validate(ValidateCommand),

    /// Browses the template catalog.
    #[command(subcommand, about = "Browse and preview the signature template catalog.")]
    Templates(TemplatesCommand),

    /// Browses the sample presets.
    #[command(subcommand, about = "Browse the sample contact presets.")]
    Presets(PresetsCommand),

    /// Manages saved signatures.
    #[command(subcommand, about = "Save, list, show, delete and duplicate saved signatures.")]
    Saved(SavedCommand),
}

/// Where a contact record comes from. Sources apply in order: preset, data file, `--set`.
#[derive(Args, Debug, Default, Clone)]
pub struct RecordArgs {
    /// Load contact details from a JSON file.
    #[arg(long = "data", value_name = "FILE", help = "Read contact details from a JSON file (camelCase keys).")]
    pub data: Option<PathBuf>,

    /// Start from a sample preset.
    #[arg(long = "preset", value_name = "ID", help = "Start from a sample preset (see `presets list`).")]
    pub preset: Option<String>,

    /// Set individual fields.
    #[arg(long = "set", value_name = "FIELD=VALUE", help = "Set a single field, e.g. --set fullName='Alex Johnson'. Repeatable.")]
    pub set: Vec<String>,
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderCommand {
    #[command(flatten)]
    pub record: RecordArgs,

    /// Pass the rendered signature through the sanitizer.
    #[arg(long, help = "Sanitize the rendered HTML, as a preview surface would.")]
    pub sanitize: bool,

    /// Write the signature to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Copy the signature to the system clipboard.
    #[arg(long, short = 'c', help = "Copy the signature to the system clipboard as HTML.")]
    pub clipboard: bool,

    /// Print the assembled contact record instead of the HTML.
    #[arg(long, help = "Print the assembled contact record as JSON instead of rendering it.")]
    pub json: bool,
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input: Option<PathBuf>,
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateCommand {
    #[command(flatten)]
    pub record: RecordArgs,

    /// Print field errors as JSON.
    #[arg(long, help = "Print field errors as a JSON array.")]
    pub json: bool,
}

/// Subcommands for the `templates` command.
#[derive(Subcommand, Debug)]
pub enum TemplatesCommand {
    #[command(about = "List the templates in catalog order.")]
    List,
    #[command(about = "Print a template with its tokens filled in.")]
    Show {
        /// The template id.
        #[arg(value_name = "ID", help = "The template id (see `templates list`).")]
        id: String,
        /// Values for the template tokens.
        #[arg(long = "set", value_name = "FIELD=VALUE", help = "Set a single field. Repeatable.")]
        set: Vec<String>,
        /// Replace tokens with no value by the empty string.
        #[arg(long = "blank-missing", help = "Blank out tokens whose field is empty instead of leaving them in place.")]
        blank_missing: bool,
        /// Pass the result through the sanitizer.
        #[arg(long, help = "Sanitize the instantiated template.")]
        sanitize: bool,
    },
}

/// Subcommands for the `presets` command.
#[derive(Subcommand, Debug)]
pub enum PresetsCommand {
    #[command(about = "List the sample presets.")]
    List {
        /// Only presets in this category.
        #[arg(long, value_name = "CATEGORY", help = "Filter by category: professional, executive, creative or minimal.")]
        category: Option<String>,
    },
}

/// Subcommands for the `saved` command.
#[derive(Subcommand, Debug)]
pub enum SavedCommand {
    #[command(about = "List saved signatures in the order they were saved.")]
    List {
        /// Only entries matching this text.
        #[arg(long, value_name = "QUERY", help = "Case-insensitive match on name, full name, company and email.")]
        search: Option<String>,
    },
    #[command(about = "Render contact details and save the result under a name.")]
    Save {
        /// The name to save the signature under.
        #[arg(value_name = "NAME")]
        name: String,
        #[command(flatten)]
        record: RecordArgs,
    },
    #[command(about = "Print the stored HTML of a saved signature.")]
    Show {
        #[arg(value_name = "ID")]
        id: String,
        /// Pass the stored HTML through the sanitizer.
        #[arg(long, help = "Sanitize the stored HTML, as a preview surface would.")]
        sanitize: bool,
    },
    #[command(about = "Delete a saved signature.")]
    Delete {
        #[arg(value_name = "ID")]
        id: String,
    },
    #[command(about = "Duplicate a saved signature under the name '<name> (Copy)'.")]
    Duplicate {
        #[arg(value_name = "ID")]
        id: String,
    },
}
