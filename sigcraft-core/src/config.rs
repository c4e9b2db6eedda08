//! Configuration management for `sigcraft-core`.
//!
//! This module defines the configuration structure (storage location, logo policy),
//! loads the built-in defaults embedded at compile time and overlays an optional
//! user-supplied YAML file on top of them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{bail, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Storage key used when neither the defaults nor the user configure one.
pub const DEFAULT_STORAGE_KEY: &str = "signatures_v1";

/// Fixed logo box the renderer reserves, in CSS pixels.
pub const LOGO_WIDTH: u32 = 87;
pub const LOGO_HEIGHT: u32 = 113;

/// Where saved signatures are persisted.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// The single durable-storage key holding the JSON array of saved signatures.
    pub key: Option<String>,
    /// Explicit file to store the list in. Overrides the platform data directory.
    pub path: Option<PathBuf>,
}

/// Logo URL policy applied by the validators (never by the renderer).
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogoConfig {
    pub require_https: Option<bool>,
    pub allowed_extensions: Option<Vec<String>>,
}

/// Represents the top-level configuration structure for sigcraft.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SigcraftConfig {
    pub storage: StorageConfig,
    pub logo: LogoConfig,
}

impl SigcraftConfig {
    /// Loads the built-in configuration embedded in the binary.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default configuration from embedded string...");
        let default_yaml = include_str!("../config/default_config.yaml");
        let config: SigcraftConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default configuration")?;
        Ok(config)
    }

    /// Loads a configuration file from disk without applying defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: SigcraftConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Loads the defaults and overlays either the given file or, when none is given,
    /// the first existing file among [`config_candidate_paths`].
    pub fn load(user_path: Option<&Path>) -> Result<Self> {
        let defaults = Self::load_default()?;
        let user = match user_path {
            Some(path) => Some(Self::load_from_file(path)?),
            None => match config_candidate_paths().into_iter().find(|p| p.is_file()) {
                Some(found) => Some(Self::load_from_file(found)?),
                None => None,
            },
        };
        Ok(merge_config(defaults, user))
    }

    fn validate(&self) -> Result<()> {
        if let Some(key) = &self.storage.key {
            if key.trim().is_empty() {
                bail!("'storage.key' cannot be empty.");
            }
            if key.contains(['/', '\\']) {
                bail!("'storage.key' must not contain path separators: '{}'.", key);
            }
        }
        if let Some(exts) = &self.logo.allowed_extensions {
            if let Some(bad) = exts.iter().find(|e| !e.starts_with('.')) {
                bail!("'logo.allowed_extensions' entries must start with '.': '{}'.", bad);
            }
        }
        Ok(())
    }

    pub fn storage_key(&self) -> &str {
        self.storage.key.as_deref().unwrap_or(DEFAULT_STORAGE_KEY)
    }

    /// The file the saved-signature list lives in, if one can be determined.
    pub fn storage_file(&self) -> Option<PathBuf> {
        if let Some(path) = &self.storage.path {
            return Some(path.clone());
        }
        dirs::data_dir().map(|d| d.join("sigcraft").join(format!("{}.json", self.storage_key())))
    }

    pub fn logo_requires_https(&self) -> bool {
        self.logo.require_https.unwrap_or(true)
    }

    pub fn logo_extensions(&self) -> Vec<String> {
        self.logo.allowed_extensions.clone().unwrap_or_else(|| {
            [".png", ".jpg", ".jpeg", ".gif", ".webp"].iter().map(|s| s.to_string()).collect()
        })
    }
}

/// Locations searched for a user configuration file, most specific first.
pub fn config_candidate_paths() -> Vec<PathBuf> {
    let base_dirs = vec![
        dirs::config_dir().map(|p| p.join("sigcraft")),
        dirs::home_dir().map(|p| p.join(".sigcraft")),
        Some(PathBuf::from("./config")),
    ];

    base_dirs
        .into_iter()
        .flatten()
        .map(|dir| dir.join("sigcraft.yaml"))
        .collect()
}

/// Overlays every value the user set on top of the defaults.
pub fn merge_config(defaults: SigcraftConfig, user: Option<SigcraftConfig>) -> SigcraftConfig {
    let Some(user) = user else {
        return defaults;
    };
    let mut merged = defaults;

    if let Some(key) = user.storage.key {
        debug!("Overriding storage key with user value.");
        merged.storage.key = Some(key);
    }
    if let Some(path) = user.storage.path {
        debug!("Overriding storage path with user value: {}", path.display());
        merged.storage.path = Some(path);
    }
    if let Some(flag) = user.logo.require_https {
        merged.logo.require_https = Some(flag);
    }
    if let Some(exts) = user.logo.allowed_extensions {
        merged.logo.allowed_extensions = Some(exts);
    }

    merged
}
