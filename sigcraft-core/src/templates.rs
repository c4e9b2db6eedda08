//! Template catalog: fixed, compiled-in signature layouts with placeholder tokens.
//!
//! Templates are independent of the live-edited record and are only instantiated for
//! catalog preview. Instantiation is a single literal scan over a fixed set of
//! tokens; there is no user-controlled token syntax.

use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

use crate::errors::SigcraftError;
use crate::escape::escape_any;
use crate::record::{ContactField, ContactRecord};

/// A read-only catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub html: &'static str,
}

/// Placeholder tokens and the record field each one takes its value from.
pub const TOKENS: [(&str, ContactField); 6] = [
    ("[FULL_NAME]", ContactField::FullName),
    ("[ROLE]", ContactField::JobTitle),
    ("[COMPANY]", ContactField::CompanyName),
    ("[EMAIL]", ContactField::Email),
    ("[PHONE]", ContactField::PhoneNumber),
    ("[LOGO_URL]", ContactField::LogoUrl),
];

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternatives: Vec<String> = TOKENS.iter().map(|(token, _)| regex::escape(token)).collect();
    Regex::new(&alternatives.join("|")).unwrap()
});

/// What to do with a token whose field is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnfilledToken {
    /// Leave the token text in place, e.g. `[PHONE]`.
    #[default]
    Keep,
    /// Replace the token with the empty string.
    Blank,
}

static CATALOG: [Template; 5] = [
    Template {
        id: "modern-accent-bar",
        name: "Modern Accent Bar",
        html: include_str!("../templates/modern-accent-bar.html"),
    },
    Template {
        id: "minimalist-centered",
        name: "Minimalist Centered Layout",
        html: include_str!("../templates/minimalist-centered.html"),
    },
    Template {
        id: "dual-tone-split",
        name: "Dual Tone Split Background",
        html: include_str!("../templates/dual-tone-split.html"),
    },
    Template {
        id: "icon-contact-strip",
        name: "Icon-Focused Contact Strip",
        html: include_str!("../templates/icon-contact-strip.html"),
    },
    Template {
        id: "bold-header-style",
        name: "Bold Color Header Style",
        html: include_str!("../templates/bold-header-style.html"),
    },
];

/// All templates, in catalog order.
pub fn list() -> &'static [Template] {
    &CATALOG
}

pub fn get(id: &str) -> Option<&'static Template> {
    CATALOG.iter().find(|t| t.id == id)
}

/// Like [`get`], but reports a missing id as an error.
pub fn require(id: &str) -> Result<&'static Template, SigcraftError> {
    get(id).ok_or_else(|| SigcraftError::TemplateNotFound(id.to_string()))
}

/// Substitutes every occurrence of every token with the record's value.
///
/// The template is scanned once, left to right, so substituted values are never
/// themselves searched for tokens. Values are escaped for both text and attribute
/// positions, since tokens such as `[EMAIL]` appear inside `href` as well as in
/// element text.
pub fn instantiate(template: &Template, record: &ContactRecord, unfilled: UnfilledToken) -> String {
    let html = TOKEN_PATTERN.replace_all(template.html, |caps: &Captures| {
        let token = &caps[0];
        let value = TOKENS
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, field)| record.get(*field))
            .unwrap_or_default();
        if value.is_empty() && unfilled == UnfilledToken::Keep {
            token.to_string()
        } else {
            escape_any(value)
        }
    });
    let html = html.into_owned();
    debug!("Instantiated template '{}': {} bytes.", template.id, html.len());
    html
}
