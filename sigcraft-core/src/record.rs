//! Contact data model: the record a signature is rendered from, the field names
//! used to address it, and the partial patch used for bulk updates.
//!
//! Every field is a plain `String`; absence is the empty string. Missing JSON keys
//! deserialize to empty strings so older or partial documents always load.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SigcraftError;

/// The structured input data for one signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRecord {
    pub full_name: String,
    pub job_title: String,
    pub company_name: String,
    pub email: String,
    pub phone_number: String,
    pub website: String,
    pub address: String,
    pub logo_url: String,
    pub linkedin_url: String,
    pub twitter_url: String,
    pub facebook_url: String,
    pub instagram_url: String,
}

/// Names every field of a [`ContactRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FullName,
    JobTitle,
    CompanyName,
    Email,
    PhoneNumber,
    Website,
    Address,
    LogoUrl,
    LinkedinUrl,
    TwitterUrl,
    FacebookUrl,
    InstagramUrl,
}

impl ContactField {
    pub const ALL: [ContactField; 12] = [
        ContactField::FullName,
        ContactField::JobTitle,
        ContactField::CompanyName,
        ContactField::Email,
        ContactField::PhoneNumber,
        ContactField::Website,
        ContactField::Address,
        ContactField::LogoUrl,
        ContactField::LinkedinUrl,
        ContactField::TwitterUrl,
        ContactField::FacebookUrl,
        ContactField::InstagramUrl,
    ];

    /// The camelCase key used in JSON documents.
    pub fn key(self) -> &'static str {
        match self {
            ContactField::FullName => "fullName",
            ContactField::JobTitle => "jobTitle",
            ContactField::CompanyName => "companyName",
            ContactField::Email => "email",
            ContactField::PhoneNumber => "phoneNumber",
            ContactField::Website => "website",
            ContactField::Address => "address",
            ContactField::LogoUrl => "logoUrl",
            ContactField::LinkedinUrl => "linkedinUrl",
            ContactField::TwitterUrl => "twitterUrl",
            ContactField::FacebookUrl => "facebookUrl",
            ContactField::InstagramUrl => "instagramUrl",
        }
    }

    /// Fields a complete signature cannot go without.
    pub fn is_required(self) -> bool {
        matches!(
            self,
            ContactField::FullName
                | ContactField::JobTitle
                | ContactField::CompanyName
                | ContactField::Email
                | ContactField::LogoUrl
        )
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ContactField {
    type Err = SigcraftError;

    /// Accepts the camelCase key as well as snake_case and kebab-case spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        ContactField::ALL
            .into_iter()
            .find(|field| field.key().to_ascii_lowercase() == folded)
            .ok_or_else(|| SigcraftError::UnknownField(s.to_string()))
    }
}

impl ContactRecord {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FullName => &self.full_name,
            ContactField::JobTitle => &self.job_title,
            ContactField::CompanyName => &self.company_name,
            ContactField::Email => &self.email,
            ContactField::PhoneNumber => &self.phone_number,
            ContactField::Website => &self.website,
            ContactField::Address => &self.address,
            ContactField::LogoUrl => &self.logo_url,
            ContactField::LinkedinUrl => &self.linkedin_url,
            ContactField::TwitterUrl => &self.twitter_url,
            ContactField::FacebookUrl => &self.facebook_url,
            ContactField::InstagramUrl => &self.instagram_url,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::FullName => &mut self.full_name,
            ContactField::JobTitle => &mut self.job_title,
            ContactField::CompanyName => &mut self.company_name,
            ContactField::Email => &mut self.email,
            ContactField::PhoneNumber => &mut self.phone_number,
            ContactField::Website => &mut self.website,
            ContactField::Address => &mut self.address,
            ContactField::LogoUrl => &mut self.logo_url,
            ContactField::LinkedinUrl => &mut self.linkedin_url,
            ContactField::TwitterUrl => &mut self.twitter_url,
            ContactField::FacebookUrl => &mut self.facebook_url,
            ContactField::InstagramUrl => &mut self.instagram_url,
        };
        *slot = value.into();
    }

    /// Applies every field the patch carries, leaving the rest untouched.
    pub fn apply(&mut self, patch: &ContactPatch) {
        for field in ContactField::ALL {
            if let Some(value) = patch.get(field) {
                self.set(field, value);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.into_iter().all(|f| self.get(f).is_empty())
    }
}

/// A partial record: `None` leaves the target field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
}

impl ContactPatch {
    pub fn get(&self, field: ContactField) -> Option<&str> {
        let value = match field {
            ContactField::FullName => &self.full_name,
            ContactField::JobTitle => &self.job_title,
            ContactField::CompanyName => &self.company_name,
            ContactField::Email => &self.email,
            ContactField::PhoneNumber => &self.phone_number,
            ContactField::Website => &self.website,
            ContactField::Address => &self.address,
            ContactField::LogoUrl => &self.logo_url,
            ContactField::LinkedinUrl => &self.linkedin_url,
            ContactField::TwitterUrl => &self.twitter_url,
            ContactField::FacebookUrl => &self.facebook_url,
            ContactField::InstagramUrl => &self.instagram_url,
        };
        value.as_deref()
    }

    /// Builder-style setter, handy when assembling a patch from `field=value` pairs.
    pub fn with(mut self, field: ContactField, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            ContactField::FullName => self.full_name = value,
            ContactField::JobTitle => self.job_title = value,
            ContactField::CompanyName => self.company_name = value,
            ContactField::Email => self.email = value,
            ContactField::PhoneNumber => self.phone_number = value,
            ContactField::Website => self.website = value,
            ContactField::Address => self.address = value,
            ContactField::LogoUrl => self.logo_url = value,
            ContactField::LinkedinUrl => self.linkedin_url = value,
            ContactField::TwitterUrl => self.twitter_url = value,
            ContactField::FacebookUrl => self.facebook_url = value,
            ContactField::InstagramUrl => self.instagram_url = value,
        }
        self
    }
}

impl From<ContactRecord> for ContactPatch {
    /// A full record as a patch: applying it replaces every field.
    fn from(record: ContactRecord) -> Self {
        ContactField::ALL
            .into_iter()
            .fold(ContactPatch::default(), |patch, field| {
                patch.with(field, record.get(field))
            })
    }
}
