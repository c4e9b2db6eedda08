// sigcraft/src/logger.rs
//! Logger setup for the sigcraft CLI.
//!
//! `RUST_LOG` is honored unless an explicit level is passed (from `--debug` or
//! `--quiet`). Logs go to stderr so rendered HTML on stdout stays clean.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

const DEFAULT_FILTER: &str = "warn";

/// Initializes the global logger. Safe to call more than once; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.target(Target::Stderr).format_timestamp(None);
    let _ = builder.try_init();
}
