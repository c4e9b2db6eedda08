//! Preset catalog: sample contact records grouped by category.
//!
//! Presets are embedded at compile time from `config/presets.yaml`. Loading one
//! into the store goes through `replace_record`, like any other bulk update.

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SigcraftError;
use crate::record::{ContactPatch, ContactRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetCategory {
    Professional,
    Executive,
    Creative,
    Minimal,
}

impl fmt::Display for PresetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PresetCategory::Professional => "professional",
            PresetCategory::Executive => "executive",
            PresetCategory::Creative => "creative",
            PresetCategory::Minimal => "minimal",
        };
        f.write_str(name)
    }
}

impl FromStr for PresetCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "professional" => Ok(PresetCategory::Professional),
            "executive" => Ok(PresetCategory::Executive),
            "creative" => Ok(PresetCategory::Creative),
            "minimal" => Ok(PresetCategory::Minimal),
            other => anyhow::bail!("Unknown preset category '{}'", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: PresetCategory,
    pub data: ContactRecord,
}

impl Preset {
    /// The preset as a full-record patch for `replace_record`.
    pub fn patch(&self) -> ContactPatch {
        ContactPatch::from(self.data.clone())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PresetCatalog {
    pub presets: Vec<Preset>,
}

impl PresetCatalog {
    /// Loads the presets embedded in the library.
    pub fn load_default() -> Result<Self> {
        debug!("Loading presets from embedded string...");
        let yaml = include_str!("../config/presets.yaml");
        let catalog: PresetCatalog =
            serde_yml::from_str(yaml).context("Failed to parse embedded presets")?;
        debug!("Loaded {} presets.", catalog.presets.len());
        Ok(catalog)
    }

    pub fn all(&self) -> &[Preset] {
        &self.presets
    }

    /// Presets in `category`; `None` means every preset.
    pub fn by_category(&self, category: Option<PresetCategory>) -> Vec<&Preset> {
        self.presets
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id == id)
    }

    pub fn require(&self, id: &str) -> Result<&Preset, SigcraftError> {
        self.get(id).ok_or_else(|| SigcraftError::PresetNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_presets_load() -> Result<()> {
        let catalog = PresetCatalog::load_default()?;
        assert_eq!(catalog.all().len(), 6);
        let alex = catalog.require("professional-1")?;
        assert_eq!(alex.data.full_name, "Alex Johnson");
        assert_eq!(alex.data.address, "123 Business Ave\nNew York, NY 10001");
        assert_eq!(alex.data.phone_number, "+1 (555) 123-4567");
        Ok(())
    }

    #[test]
    fn filter_by_category() -> Result<()> {
        let catalog = PresetCatalog::load_default()?;
        let creative = catalog.by_category(Some(PresetCategory::Creative));
        assert_eq!(creative.len(), 2);
        assert!(creative.iter().all(|p| p.category == PresetCategory::Creative));
        assert_eq!(catalog.by_category(None).len(), 6);
        Ok(())
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Executive".parse::<PresetCategory>().unwrap(), PresetCategory::Executive);
        assert!("fancy".parse::<PresetCategory>().is_err());
    }

    #[test]
    fn preset_patch_replaces_every_field() -> Result<()> {
        let catalog = PresetCatalog::load_default()?;
        let minimal = catalog.require("minimal-1")?;
        let mut record = ContactRecord {
            address: "stale".into(),
            ..Default::default()
        };
        record.apply(&minimal.patch());
        assert_eq!(record, minimal.data);
        Ok(())
    }
}
