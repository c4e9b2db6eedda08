// sigcraft-core/src/lib.rs
//! # Sigcraft Core Library
//!
//! `sigcraft-core` turns a structured contact record into an email-client-compatible HTML
//! signature, cleans untrusted HTML against a fixed allow-list before it reaches a
//! script-capable preview surface, and keeps an ordered list of named, saved signatures.
//!
//! Rendering, normalization and sanitization are pure and total: they never fail and
//! never touch I/O. State and persistence live in [`SignatureStore`], behind the
//! [`SignatureStorage`] trait.
//!
//! ## Modules
//!
//! * `record`: The [`ContactRecord`] input type, its fields and partial updates.
//! * `normalize`: Display values for each field (placeholders, links, line breaks).
//! * `renderer`: The table-based, inline-styled HTML renderer.
//! * `sanitizer`: Allow-list HTML cleaning built on `ammonia`.
//! * `templates`: The compiled-in template catalog and token substitution.
//! * `presets`: Sample records grouped by category.
//! * `validators`: Field checks for form layers, including the logo URL policy.
//! * `store`: The signature state store and saved-signature list.
//! * `storage`: Durable key/value backends for the store.
//! * `config`: YAML configuration with embedded defaults.
//! * `errors`: The library's error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use sigcraft_core::{render, sanitize, ContactField, MemoryStorage, SignatureStore};
//!
//! let mut store = SignatureStore::new(MemoryStorage::new());
//! store.update_field(ContactField::FullName, "Alex Johnson");
//! store.update_field(ContactField::PhoneNumber, "+1 (555) 123-4567");
//!
//! let html = render(store.record());
//! assert_eq!(html, store.html());
//! assert_eq!(sanitize(&html), html);
//!
//! let saved = store.save("Work");
//! assert_eq!(store.saved().len(), 1);
//! assert_eq!(saved.html, html);
//! ```
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod config;
pub mod errors;
pub mod escape;
pub mod normalize;
pub mod presets;
pub mod record;
pub mod renderer;
pub mod sanitizer;
pub mod storage;
pub mod store;
pub mod templates;
pub mod validators;

/// Re-exports the configuration types and the overlay function.
pub use config::{config_candidate_paths, merge_config, SigcraftConfig, DEFAULT_STORAGE_KEY};

pub use errors::SigcraftError;

/// Re-exports the record model.
pub use record::{ContactField, ContactPatch, ContactRecord};

/// Re-exports the pure HTML pipeline.
pub use renderer::render;
pub use sanitizer::{sanitize, ALLOWED_ATTRIBUTES, ALLOWED_TAGS};

/// Re-exports the catalogs.
pub use presets::{Preset, PresetCatalog, PresetCategory};
pub use templates::{Template, UnfilledToken};

pub use validators::{validate_record, FieldError, LogoPolicy};

/// Re-exports the store and its storage backends.
pub use storage::{FileStorage, MemoryStorage, SignatureStorage};
pub use store::{SavedSignature, SignatureStore, StoreEvent};
