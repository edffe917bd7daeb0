//! Error types for the keystore.
//!
//! Every failure a caller can observe is a [`KeystoreError`] variant. The
//! variants distinguish the validation layer that rejected the input (file
//! missing, empty, unparseable, structurally wrong, cryptographically wrong)
//! so callers can decide what is recoverable. Private key material is never
//! included in error messages.

use std::path::PathBuf;

/// Keystore error types covering all operations.
#[derive(Debug, thiserror::Error)]
pub enum KeystoreError {
    /// No file exists at the given path.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but has no content.
    #[error("Empty file: {}", .0.display())]
    EmptyFile(PathBuf),

    /// The file exists but its content is unusable for its format.
    #[error("Invalid file: {}", .0.display())]
    InvalidFile(PathBuf),

    /// The file content could not be parsed as text or JSON.
    #[error("Parse error in {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    /// A parsed record is missing required fields or carries empty ones.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// An identity is missing the key material an operation requires.
    #[error("Invalid identity: {0}")]
    InvalidIdentity(String),

    /// A key value was rejected before it reached storage.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// In-memory material could not be converted to its storage form.
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    /// The cryptographic provider rejected the key material.
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// An underlying filesystem operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A persist step failed after the value to persist was produced.
    #[error("Save failed: {source}")]
    SaveFailed {
        #[source]
        source: Box<KeystoreError>,
    },
}

/// Convenience Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KeystoreError>;
