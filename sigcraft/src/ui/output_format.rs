//! Message and listing formatting for terminal output.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Applies the theme color for `entry` when `enable_colors` is set.
pub fn paint(text: &str, entry: ThemeEntry, theme: &ThemeMap, enable_colors: bool) -> String {
    if !enable_colors {
        return text.to_string();
    }
    match theme.get(&entry).and_then(|style| style.fg.as_ref()) {
        Some(color) => text.color(color.to_ansi_color()).to_string(),
        None => text.to_string(),
    }
}

fn print_prefixed<W: Write>(
    writer: &mut W,
    prefix: &str,
    msg: &str,
    entry: ThemeEntry,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", paint(&format!("{}{}", prefix, msg), entry, theme, enable_colors))
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_prefixed(writer, "", msg, ThemeEntry::Info, theme, enable_colors)
}

pub fn print_success_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_prefixed(writer, "", msg, ThemeEntry::Success, theme, enable_colors)
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_prefixed(writer, "Warning: ", msg, ThemeEntry::Warn, theme, enable_colors)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_prefixed(writer, "Error: ", msg, ThemeEntry::Error, theme, enable_colors)
}
