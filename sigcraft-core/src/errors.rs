//! errors.rs - Custom error types for the sigcraft-core library.
//!
//! Rendering, normalization and sanitization are total and never produce these.
//! They surface at the parsing and lookup boundaries (field names, catalog ids,
//! saved-signature ids) and from configuration or storage plumbing.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `sigcraft-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream `match` arms.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SigcraftError {
    #[error("Unknown contact field '{0}'")]
    UnknownField(String),

    #[error("Template '{0}' not found in the catalog")]
    TemplateNotFound(String),

    #[error("Preset '{0}' not found in the catalog")]
    PresetNotFound(String),

    #[error("Saved signature '{0}' not found")]
    SignatureNotFound(String),

    #[error("Failed to serialize signature data: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}
