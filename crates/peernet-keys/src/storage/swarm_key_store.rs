//! Swarm key persistence for private-network membership.
//!
//! A swarm key file holds raw bytes. Interpreted as text it has three
//! meaningful lines:
//!
//! ```text
//! /key/swarm/psk/1.0.0/
//! /base16/
//! <64 hex characters of key material>
//! ```
//!
//! Lines beyond the third are tolerated and ignored. The store itself
//! round-trips exact raw bytes; [`SwarmKeyRecord`] is the structured view
//! callers use to inspect and validate the content.

use std::path::{Path, PathBuf};

use crate::error::{KeystoreError, Result};
use crate::storage::byte_store::{resolve_or_default, ByteStore, FsByteStore, DEFAULT_CONFIG_DIR};

/// File name of the swarm key inside the config directory.
const SWARM_KEY_FILENAME: &str = ".swarmKey";

// ── Record view ───────────────────────────────────────────────────────────────

/// View raw swarm key bytes as text.
///
/// Returns `None` (and logs the failure) if the bytes are not valid UTF-8.
/// An unreadable key is reported by callers as a rejection, not an error.
pub fn swarm_key_to_text(bytes: &[u8]) -> Option<&str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Some(text),
        Err(e) => {
            log::warn!("swarm key is not valid UTF-8: {e}");
            None
        }
    }
}

/// The three-line record parsed from a swarm key file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwarmKeyRecord {
    /// Protocol identifier line, e.g. `/key/swarm/psk/1.0.0/`.
    pub protocol: String,
    /// Encoding identifier line, e.g. `/base16/`.
    pub encode: String,
    /// Encoded key material line.
    pub key: String,
}

impl SwarmKeyRecord {
    /// Parse the record from raw swarm key bytes.
    ///
    /// The first three lines must all be non-empty; both `\n` and `\r\n`
    /// line endings are accepted. Returns `None` for non-UTF-8 content,
    /// fewer than three lines, or an empty line among the first three.
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        let text = swarm_key_to_text(bytes)?;

        let mut lines = text.lines();
        let protocol = lines.next()?;
        let encode = lines.next()?;
        let key = lines.next()?;

        if protocol.is_empty() || encode.is_empty() || key.is_empty() {
            return None;
        }

        Some(Self {
            protocol: protocol.to_string(),
            encode: encode.to_string(),
            key: key.to_string(),
        })
    }
}

// ── SwarmKeyStore ─────────────────────────────────────────────────────────────

/// Repository for the node's swarm key file.
///
/// Safe for single-process use. Concurrent saves to the same path from
/// multiple processes are not coordinated; the last writer wins.
pub struct SwarmKeyStore<S: ByteStore = FsByteStore> {
    store: S,
    config_dir: PathBuf,
}

impl SwarmKeyStore<FsByteStore> {
    /// Create a store whose default file lives under `config_dir`.
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self::with_store(FsByteStore, config_dir)
    }
}

impl Default for SwarmKeyStore<FsByteStore> {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_DIR)
    }
}

impl<S: ByteStore> SwarmKeyStore<S> {
    /// Create a store over a custom byte store.
    pub fn with_store(store: S, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            config_dir: config_dir.into(),
        }
    }

    /// Path used when no explicit path is given: `{config_dir}/.swarmKey`.
    pub fn default_path(&self) -> PathBuf {
        self.config_dir.join(SWARM_KEY_FILENAME)
    }

    /// Resolve an optional caller-supplied path against the default.
    ///
    /// `None` and the empty path both resolve to [`SwarmKeyStore::default_path`].
    pub fn resolve_path(&self, path: Option<&Path>) -> PathBuf {
        resolve_or_default(path, self.default_path())
    }

    /// Write raw swarm key bytes to `path` (or the default path).
    ///
    /// The bytes are stored as-is; no structural validation is applied so
    /// keys from other tools round-trip exactly.
    ///
    /// # Errors
    ///
    /// Returns `KeystoreError::InvalidKey` for an empty key, or
    /// `KeystoreError::Io` for write faults.
    pub fn save(&self, path: Option<&Path>, key: &[u8]) -> Result<()> {
        if key.is_empty() {
            return Err(KeystoreError::InvalidKey(
                "swarm key must not be empty".to_string(),
            ));
        }

        let path = self.resolve_path(path);
        self.store.write_bytes(&path, key)
    }

    /// Load the raw swarm key bytes at `path` (or the default path).
    ///
    /// # Errors
    ///
    /// Returns `KeystoreError::NotFound` if the file is absent,
    /// `KeystoreError::InvalidFile` for an empty file, or
    /// `KeystoreError::Io` for read faults.
    pub fn load(&self, path: Option<&Path>) -> Result<Vec<u8>> {
        let path = self.resolve_path(path);

        if !self.store.exists(&path) {
            return Err(KeystoreError::NotFound(path));
        }

        let bytes = self.store.read_bytes(&path)?;
        if bytes.is_empty() {
            return Err(KeystoreError::InvalidFile(path));
        }

        Ok(bytes)
    }
}
