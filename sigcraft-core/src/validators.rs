// File: sigcraft-core/src/validators.rs
//! Programmatic validation of contact fields for form-layer collaborators.
//!
//! None of this runs inside the renderer, which degrades to placeholders instead of
//! failing. Front ends call [`validate_record`] to report problems next to the field
//! that caused them, most importantly the logo URL policy (secure scheme and a raster
//! image extension).
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use url::Url;

use crate::config::SigcraftConfig;
use crate::record::{ContactField, ContactRecord};

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@<>()\[\],;:]+@[^\s@<>()\[\],;:]+\.[A-Za-z]{2,}$").unwrap());

/// A single problem with a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: ContactField, message: impl Into<String>) -> Self {
        Self {
            field: field.key().to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Logo URL rules, taken from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoPolicy {
    pub require_https: bool,
    pub allowed_extensions: Vec<String>,
}

impl LogoPolicy {
    pub fn from_config(config: &SigcraftConfig) -> Self {
        Self {
            require_https: config.logo_requires_https(),
            allowed_extensions: config.logo_extensions(),
        }
    }

    /// Checks `url`, returning the message to show the user on failure.
    pub fn check(&self, url: &str) -> Result<(), String> {
        if url.is_empty() {
            return Err("Logo URL is required".to_string());
        }
        let parsed = Url::parse(url).map_err(|_| "Please enter a valid URL".to_string())?;
        if self.require_https && parsed.scheme() != "https" {
            return Err("Logo URL must start with https://".to_string());
        }
        let path = parsed.path().to_ascii_lowercase();
        if !self
            .allowed_extensions
            .iter()
            .any(|ext| path.ends_with(&ext.to_ascii_lowercase()))
        {
            return Err(format!("Logo must be {}", describe_extensions(&self.allowed_extensions)));
        }
        Ok(())
    }
}

impl Default for LogoPolicy {
    fn default() -> Self {
        Self::from_config(&SigcraftConfig::default())
    }
}

fn describe_extensions(exts: &[String]) -> String {
    match exts.split_last() {
        None => "an image".to_string(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{}, or {}", rest.join(", "), last),
    }
}

/// Detects GIF logos by extension, including ones followed by a query or fragment.
pub fn is_animated_gif(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.ends_with(".gif") || [".gif?", ".gif#", ".gif&"].iter().any(|m| lower.contains(m))
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Validates every field of `record`, in field order. An empty result means the
/// record is ready to be used as a signature.
pub fn validate_record(record: &ContactRecord, policy: &LogoPolicy) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for (field, message) in [
        (ContactField::FullName, "Full name is required"),
        (ContactField::JobTitle, "Job title is required"),
        (ContactField::CompanyName, "Company name is required"),
    ] {
        if record.get(field).trim().is_empty() {
            errors.push(FieldError::new(field, message));
        }
    }

    if !is_valid_email(&record.email) {
        errors.push(FieldError::new(ContactField::Email, "Please enter a valid email address"));
    }

    if !record.website.is_empty() && !record.website.starts_with("https://") {
        errors.push(FieldError::new(ContactField::Website, "Website must start with https://"));
    }

    if let Err(message) = policy.check(&record.logo_url) {
        errors.push(FieldError::new(ContactField::LogoUrl, message));
    }

    for field in [
        ContactField::LinkedinUrl,
        ContactField::TwitterUrl,
        ContactField::FacebookUrl,
        ContactField::InstagramUrl,
    ] {
        let value = record.get(field);
        if !value.is_empty() && Url::parse(&crate::normalize::website_href(value)).is_err() {
            errors.push(FieldError::new(field, "Please enter a valid URL"));
        }
    }

    errors
}
