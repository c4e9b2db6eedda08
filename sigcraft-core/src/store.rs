//! Signature state store.
//!
//! Owns the current [`ContactRecord`], its rendered HTML, and the ordered list of
//! [`SavedSignature`]s. Every record mutation re-renders synchronously and notifies
//! subscribers; every list mutation flushes the whole list to storage.
//!
//! Persistence is fire-and-forget. A failed write is logged and swallowed: the
//! in-memory state stays authoritative for the session.
//!
//! License: MIT OR APACHE 2.0

use chrono::{SecondsFormat, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{SigcraftConfig, DEFAULT_STORAGE_KEY};
use crate::record::{ContactField, ContactPatch, ContactRecord};
use crate::renderer::render;
use crate::sanitizer::sanitize;
use crate::storage::{FileStorage, MemoryStorage, SignatureStorage};

/// A named, persisted snapshot of a record and its rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSignature {
    pub id: String,
    pub name: String,
    pub data: ContactRecord,
    pub html: String,
    pub created_at: String,
}

/// What subscribers are told after a mutation.
#[derive(Debug)]
pub enum StoreEvent<'a> {
    /// The record changed and `html` is its new rendering.
    Rendered { record: &'a ContactRecord, html: &'a str },
    /// The saved list changed (and was flushed to storage).
    SavedChanged { saved: &'a [SavedSignature] },
}

type Subscriber = Box<dyn FnMut(&StoreEvent<'_>)>;

pub struct SignatureStore<S: SignatureStorage> {
    record: ContactRecord,
    html: String,
    saved: Vec<SavedSignature>,
    storage: S,
    storage_key: String,
    subscribers: Vec<Subscriber>,
}

impl<S: SignatureStorage> SignatureStore<S> {
    /// A store with the empty record rendered and an empty saved list.
    /// Call [`load_persisted`](Self::load_persisted) to hydrate the list.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, storage_key: impl Into<String>) -> Self {
        let record = ContactRecord::default();
        let html = render(&record);
        Self {
            record,
            html,
            saved: Vec::new(),
            storage,
            storage_key: storage_key.into(),
            subscribers: Vec::new(),
        }
    }

    pub fn record(&self) -> &ContactRecord {
        &self.record
    }

    /// The current rendering, exactly as produced (or as restored by `load`).
    pub fn html(&self) -> &str {
        &self.html
    }

    /// The current rendering, cleaned for a script-capable preview surface.
    pub fn sanitized_html(&self) -> String {
        sanitize(&self.html)
    }

    pub fn saved(&self) -> &[SavedSignature] {
        &self.saved
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&StoreEvent<'_>) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Sets one field and re-renders.
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.record.set(field, value);
        self.rerender();
    }

    /// Merges every field present in `patch` and re-renders once.
    pub fn replace_record(&mut self, patch: &ContactPatch) {
        self.record.apply(patch);
        self.rerender();
    }

    /// Restores the all-empty record and its rendering.
    pub fn reset(&mut self) {
        self.record = ContactRecord::default();
        self.rerender();
    }

    /// Snapshots the current record and rendering under `name`, appends it and persists.
    pub fn save(&mut self, name: &str) -> SavedSignature {
        let entry = SavedSignature {
            id: new_id(),
            name: name.to_string(),
            data: self.record.clone(),
            html: self.html.clone(),
            created_at: now_timestamp(),
        };
        info!("Saving signature '{}'.", entry.id);
        self.saved.push(entry.clone());
        self.persist();
        self.notify_saved();
        entry
    }

    /// Makes `saved` current. The stored HTML is used verbatim, not re-rendered.
    pub fn load(&mut self, saved: &SavedSignature) {
        debug!("Loading saved signature '{}'.", saved.id);
        self.record = saved.data.clone();
        self.html = saved.html.clone();
        self.notify_rendered();
    }

    /// Loads the saved entry with `id`. Returns `false` when there is none.
    pub fn load_by_id(&mut self, id: &str) -> bool {
        match self.find(id).cloned() {
            Some(saved) => {
                self.load(&saved);
                true
            }
            None => false,
        }
    }

    /// Removes the entry with `id`; an unknown id is a no-op.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.saved.len();
        self.saved.retain(|s| s.id != id);
        if self.saved.len() == before {
            debug!("Delete ignored: no saved signature '{}'.", id);
            return false;
        }
        info!("Deleted saved signature '{}'.", id);
        self.persist();
        self.notify_saved();
        true
    }

    /// Appends a copy of the entry with `id` under a new identity.
    pub fn duplicate(&mut self, id: &str) -> Option<SavedSignature> {
        let original = self.find(id)?;
        let copy = SavedSignature {
            id: new_id(),
            name: format!("{} (Copy)", original.name),
            data: original.data.clone(),
            html: original.html.clone(),
            created_at: now_timestamp(),
        };
        info!("Duplicated saved signature '{}' as '{}'.", id, copy.id);
        self.saved.push(copy.clone());
        self.persist();
        self.notify_saved();
        Some(copy)
    }

    pub fn find(&self, id: &str) -> Option<&SavedSignature> {
        self.saved.iter().find(|s| s.id == id)
    }

    /// Case-insensitive search over name, full name, company and email.
    /// A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&SavedSignature> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.saved.iter().collect();
        }
        self.saved
            .iter()
            .filter(|s| {
                [&s.name, &s.data.full_name, &s.data.company_name, &s.data.email]
                    .iter()
                    .any(|v| v.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Hydrates the saved list from storage. Missing data yields an empty list;
    /// malformed data is discarded and also yields an empty list.
    pub fn load_persisted(&mut self) {
        self.saved = match self.storage.read(&self.storage_key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<SavedSignature>>(&raw) {
                Ok(list) => {
                    info!("Loaded {} saved signatures.", list.len());
                    list
                }
                Err(e) => {
                    warn!("Failed to load saved signatures, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read saved signatures, starting empty: {:#}", e);
                Vec::new()
            }
        };
        self.notify_saved();
    }

    fn rerender(&mut self) {
        self.html = render(&self.record);
        self.notify_rendered();
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.saved) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize saved signatures: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.write(&self.storage_key, &json) {
            warn!("Failed to persist saved signatures; keeping in-memory state: {:#}", e);
        }
    }

    fn notify_rendered(&mut self) {
        let mut subscribers = std::mem::take(&mut self.subscribers);
        let event = StoreEvent::Rendered { record: &self.record, html: &self.html };
        for subscriber in subscribers.iter_mut() {
            subscriber(&event);
        }
        self.subscribers = subscribers;
    }

    fn notify_saved(&mut self) {
        let mut subscribers = std::mem::take(&mut self.subscribers);
        let event = StoreEvent::SavedChanged { saved: &self.saved };
        for subscriber in subscribers.iter_mut() {
            subscriber(&event);
        }
        self.subscribers = subscribers;
    }
}

impl SignatureStore<Box<dyn SignatureStorage>> {
    /// A store backed by the configured storage file, falling back to in-memory
    /// storage when no data directory can be determined.
    pub fn from_config(config: &SigcraftConfig) -> Self {
        let storage: Box<dyn SignatureStorage> = match config.storage_file() {
            Some(path) => {
                debug!("Using signature storage at {}.", path.display());
                Box::new(FileStorage::at_file(path))
            }
            None => {
                warn!("No data directory available; saved signatures will not persist.");
                Box::new(MemoryStorage::new())
            }
        };
        Self::with_key(storage, config.storage_key())
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
