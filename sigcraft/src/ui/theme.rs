//! Colors for the CLI's stderr messages and listings.
//!
//! Only the 16 named ANSI colors are supported. Styling is applied solely when the
//! target stream is a terminal.

use owo_colors::AnsiColors;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeEntry {
    Success,
    Info,
    Warn,
    Error,
    /// Ids in catalog and saved-signature listings.
    Identifier,
    /// Field names in validation reports.
    FieldName,
    /// Secondary text such as timestamps and categories.
    Muted,
}

impl ThemeEntry {
    pub const ALL: [ThemeEntry; 7] = [
        ThemeEntry::Success,
        ThemeEntry::Info,
        ThemeEntry::Warn,
        ThemeEntry::Error,
        ThemeEntry::Identifier,
        ThemeEntry::FieldName,
        ThemeEntry::Muted,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeColor {
    Named(String),
}

#[derive(Debug, Clone)]
pub struct ParseThemeColorError;

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid theme color; expected one of: black, red, green, yellow, blue, \
            magenta, cyan, white, brightblack, brightred, brightgreen, brightyellow, \
            brightblue, brightmagenta, brightcyan, brightwhite."
        )
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "black" | "red" | "green" | "yellow" | "blue" | "magenta" | "cyan" | "white"
            | "brightblack" | "brightred" | "brightgreen" | "brightyellow" | "brightblue"
            | "brightmagenta" | "brightcyan" | "brightwhite" => Ok(ThemeColor::Named(lower)),
            _ => Err(ParseThemeColorError),
        }
    }
}

impl ThemeColor {
    pub fn to_ansi_color(&self) -> AnsiColors {
        match self {
            ThemeColor::Named(name) => match name.as_str() {
                "black" => AnsiColors::Black,
                "red" => AnsiColors::Red,
                "green" => AnsiColors::Green,
                "yellow" => AnsiColors::Yellow,
                "blue" => AnsiColors::Blue,
                "magenta" => AnsiColors::Magenta,
                "cyan" => AnsiColors::Cyan,
                "white" => AnsiColors::White,
                "brightblack" => AnsiColors::BrightBlack,
                "brightred" => AnsiColors::BrightRed,
                "brightgreen" => AnsiColors::BrightGreen,
                "brightyellow" => AnsiColors::BrightYellow,
                "brightblue" => AnsiColors::BrightBlue,
                "brightmagenta" => AnsiColors::BrightMagenta,
                "brightcyan" => AnsiColors::BrightCyan,
                "brightwhite" => AnsiColors::BrightWhite,
                _ => AnsiColors::Default,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeStyle {
    pub fg: Option<ThemeColor>,
}

impl ThemeStyle {
    fn named(color: &str) -> Self {
        ThemeStyle { fg: Some(ThemeColor::Named(color.to_string())) }
    }

    /// The built-in palette.
    pub fn default_theme_map() -> ThemeMap {
        let mut theme = HashMap::new();
        theme.insert(ThemeEntry::Success, Self::named("green"));
        theme.insert(ThemeEntry::Info, Self::named("cyan"));
        theme.insert(ThemeEntry::Warn, Self::named("yellow"));
        theme.insert(ThemeEntry::Error, Self::named("red"));
        theme.insert(ThemeEntry::Identifier, Self::named("brightblue"));
        theme.insert(ThemeEntry::FieldName, Self::named("magenta"));
        theme.insert(ThemeEntry::Muted, Self::named("brightblack"));
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_named_colors() {
        assert!("red".parse::<ThemeColor>().is_ok());
        assert!("BrightGreen".parse::<ThemeColor>().is_ok());
        assert!("unknown".parse::<ThemeColor>().is_err());
    }

    #[test]
    fn default_theme_covers_every_entry() {
        let theme = ThemeStyle::default_theme_map();
        for entry in ThemeEntry::ALL {
            assert!(theme.get(&entry).and_then(|s| s.fg.as_ref()).is_some(), "{:?}", entry);
        }
        assert_eq!(theme[&ThemeEntry::Error].fg.as_ref().unwrap().to_ansi_color(), AnsiColors::Red);
    }
}
