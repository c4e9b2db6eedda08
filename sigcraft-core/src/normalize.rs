//! Field normalization: turns a [`ContactRecord`] into display-safe, escaped strings.
//!
//! The record itself is never modified. Required fields fall back to bracketed
//! placeholders, links get a usable target, and multi-line addresses become `<br>`
//! separated markup. Link targets the sanitizer would strip are dropped here so the
//! rendered markup is already sanitizer-clean.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::escape::{encode_url, escape_attr, escape_text, normalize_input};
use crate::record::ContactRecord;
use crate::sanitizer::url_passes_policy;
use crate::validators::is_animated_gif;

pub const PLACEHOLDER_FULL_NAME: &str = "[Full Name]";
pub const PLACEHOLDER_JOB_TITLE: &str = "[Job Title]";
pub const PLACEHOLDER_COMPANY_NAME: &str = "[Company Name]";
pub const PLACEHOLDER_EMAIL: &str = "[Email]";

static TRANSPORT_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^https?://").unwrap());

/// Visible text plus an optional, already-escaped link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLink {
    pub text: String,
    pub href: Option<String>,
}

/// An escaped logo source and whether it should be frozen (animated GIF).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLogo {
    pub src: String,
    pub animated: bool,
}

/// Social profile networks, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialNetwork {
    LinkedIn,
    Twitter,
    Facebook,
    Instagram,
}

impl SocialNetwork {
    pub fn label(self) -> &'static str {
        match self {
            SocialNetwork::LinkedIn => "LinkedIn",
            SocialNetwork::Twitter => "Twitter",
            SocialNetwork::Facebook => "Facebook",
            SocialNetwork::Instagram => "Instagram",
        }
    }
}

/// The normalized, escaped view of a record the renderer composes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub full_name: String,
    pub job_title: String,
    pub company_name: String,
    /// Placeholder line shown in the identity block while the email is empty.
    pub email_placeholder: Option<String>,
    pub email: Option<DisplayLink>,
    pub phone: Option<String>,
    pub website: Option<DisplayLink>,
    pub address: Option<String>,
    pub logo: Option<DisplayLogo>,
    pub socials: Vec<(SocialNetwork, DisplayLink)>,
}

/// Builds the normalized view of `record`.
pub fn normalize(record: &ContactRecord) -> NormalizedRecord {
    let socials = [
        (SocialNetwork::LinkedIn, &record.linkedin_url),
        (SocialNetwork::Twitter, &record.twitter_url),
        (SocialNetwork::Facebook, &record.facebook_url),
        (SocialNetwork::Instagram, &record.instagram_url),
    ]
    .into_iter()
    .filter(|(_, url)| !url.is_empty())
    .map(|(network, url)| (network, web_link(url)))
    .collect();

    NormalizedRecord {
        full_name: display_or(&record.full_name, PLACEHOLDER_FULL_NAME),
        job_title: display_or(&record.job_title, PLACEHOLDER_JOB_TITLE),
        company_name: display_or(&record.company_name, PLACEHOLDER_COMPANY_NAME),
        email_placeholder: record.email.is_empty().then(|| PLACEHOLDER_EMAIL.to_string()),
        email: non_empty(&record.email).map(email_link),
        phone: non_empty(&record.phone_number).map(escape_text),
        website: non_empty(&record.website).map(web_link),
        address: non_empty(&record.address).map(address_markup),
        logo: non_empty(&record.logo_url).and_then(logo),
        socials,
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

fn display_or(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        escape_text(value)
    }
}

/// `https://` is prepended when the value carries no transport prefix.
pub fn website_href(website: &str) -> String {
    if TRANSPORT_PREFIX.is_match(website) {
        website.to_string()
    } else {
        format!("https://{}", website)
    }
}

/// The website as shown to readers: any `http(s)://` prefix removed.
pub fn website_display(website: &str) -> &str {
    match TRANSPORT_PREFIX.find(website) {
        Some(m) => &website[m.end()..],
        None => website,
    }
}

fn checked_href(raw: &str) -> Option<String> {
    let encoded = encode_url(raw);
    url_passes_policy(&encoded).then(|| escape_attr(&encoded))
}

fn web_link(value: &str) -> DisplayLink {
    DisplayLink {
        text: escape_text(website_display(value)),
        href: checked_href(&website_href(value)),
    }
}

fn email_link(email: &str) -> DisplayLink {
    DisplayLink {
        text: escape_text(email),
        href: checked_href(&format!("mailto:{}", email)),
    }
}

fn address_markup(address: &str) -> String {
    normalize_input(address)
        .split('\n')
        .map(escape_text)
        .collect::<Vec<_>>()
        .join("<br>")
}

fn logo(url: &str) -> Option<DisplayLogo> {
    let src = checked_href(url)?;
    Some(DisplayLogo {
        src,
        animated: is_animated_gif(url),
    })
}
