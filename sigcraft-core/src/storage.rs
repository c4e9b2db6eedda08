//! Durable key/value storage for the saved-signature list.
//!
//! The store only ever reads and writes whole values under a single key, so the
//! trait is deliberately small. [`FileStorage`] keeps one JSON file per key;
//! [`MemoryStorage`] backs tests and ephemeral sessions.

use anyhow::{Context, Result};
use log::debug;
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

const TMP_SUFFIX: &str = ".tmp";

/// A durable string store addressed by key.
pub trait SignatureStorage {
    /// Returns the stored value, or `None` when nothing was ever written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Clone)]
enum Location {
    Dir(PathBuf),
    File(PathBuf),
}

/// File-backed storage: `<dir>/<key>.json`, or one pinned file for every key.
#[derive(Debug, Clone)]
pub struct FileStorage {
    location: Location,
}

impl FileStorage {
    /// Stores each key as `<dir>/<key>.json`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self { location: Location::Dir(dir.into()) }
    }

    /// Stores every key in the same file.
    pub fn at_file(path: impl Into<PathBuf>) -> Self {
        Self { location: Location::File(path.into()) }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        match &self.location {
            Location::Dir(dir) => dir.join(format!("{}.json", key)),
            Location::File(path) => path.clone(),
        }
    }
}

impl SignatureStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            debug!("No stored value at {}.", path.display());
            return Ok(None);
        }

        let mut file = OpenOptions::new()
            .read(true)
            .open(&path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        fs2::FileExt::lock_shared(&file)?;
        let mut raw = String::new();
        let read = file.read_to_string(&mut raw);
        fs2::FileExt::unlock(&file)?;
        read.with_context(|| format!("Failed to read {}", path.display()))?;

        Ok(Some(raw))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        let tmp_path = tmp_path_for(&path);
        {
            let mut tmp = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&tmp_path)
                .with_context(|| format!("Failed to open {}", tmp_path.display()))?;
            fs2::FileExt::lock_exclusive(&tmp)?;
            tmp.write_all(value.as_bytes())?;
            tmp.flush()?;
            fs2::FileExt::unlock(&tmp)?;
        }

        fs::rename(&tmp_path, &path)
            .with_context(|| format!("Failed to move {} into place", tmp_path.display()))?;
        debug!("Wrote {} bytes to {}.", value.len(), path.display());
        Ok(())
    }
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(TMP_SUFFIX);
    path.with_file_name(name)
}

/// In-process storage. Values vanish with the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds a value, e.g. to simulate what a previous session left behind.
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl SignatureStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: SignatureStorage + ?Sized> SignatureStorage for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}
