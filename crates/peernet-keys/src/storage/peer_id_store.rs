//! Peer identity persistence in the libp2p JSON key format.
//!
//! A peer identity file is a JSON object with three fields:
//!
//! ```json
//! {
//!     "id": "12D3KooW...",
//!     "privKey": "CAESQ...",
//!     "pubKey": "CAESI..."
//! }
//! ```
//!
//! `id` is the peer's multihash identifier in base58btc. `privKey` and
//! `pubKey` are the libp2p protobuf encodings of the key material in padded
//! base64. Files written by other libp2p implementations in this format are
//! accepted, including RSA identities, which this crate can load but not
//! generate.
//!
//! Loading validates outside-in: file presence, non-emptiness, JSON shape,
//! record structure, then cryptographic reconstruction. Each layer has its
//! own error variant so a caller can tell a missing file from a corrupt one.

use std::path::{Path, PathBuf};

use libp2p_identity::{Keypair, PeerId, PublicKey};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::error::{KeystoreError, Result};
use crate::identity::PeerIdentity;
use crate::storage::byte_store::{resolve_or_default, ByteStore, FsByteStore, DEFAULT_CONFIG_DIR};

/// File name of the peer identity record inside the config directory.
const PEER_ID_FILENAME: &str = ".peerId";

// ── On-disk record ────────────────────────────────────────────────────────────

/// The three-field JSON record written to a peer identity file.
#[derive(Debug, Serialize, Deserialize, Zeroize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPeerIdentity {
    /// Peer ID multihash, base58btc.
    pub id: String,
    /// Protobuf-encoded private key, padded base64.
    pub priv_key: String,
    /// Protobuf-encoded public key, padded base64.
    pub pub_key: String,
}

impl StoredPeerIdentity {
    /// Encode a complete identity into its storage record.
    ///
    /// # Errors
    ///
    /// Returns `KeystoreError::InvalidIdentity` if the identity is missing
    /// its private or public half, or `KeystoreError::EncodingFailed` if
    /// the key material can not be marshaled (the provider keeps RSA
    /// private keys opaque, so RSA identities are load-only).
    pub fn from_identity(identity: &PeerIdentity) -> Result<Self> {
        let keypair = identity.keypair().ok_or_else(|| {
            KeystoreError::InvalidIdentity("private key is required for storage".to_string())
        })?;
        let public_key = identity.public_key().ok_or_else(|| {
            KeystoreError::InvalidIdentity("public key is required for storage".to_string())
        })?;

        let mut priv_bytes = keypair
            .to_protobuf_encoding()
            .map_err(|e| KeystoreError::EncodingFailed(format!("private key: {e}")))?;
        let priv_key =
            base64::Engine::encode(&base64::engine::general_purpose::STANDARD, &priv_bytes);
        priv_bytes.zeroize();

        let pub_key = base64::Engine::encode(
            &base64::engine::general_purpose::STANDARD,
            public_key.encode_protobuf(),
        );

        Ok(Self {
            id: bs58::encode(identity.peer_id().to_bytes()).into_string(),
            priv_key,
            pub_key,
        })
    }

    /// Reconstruct the in-memory identity from this record.
    ///
    /// The three fields must be mutually consistent: the public key must
    /// match the private key, and the id must be the peer ID derived from
    /// the public key. A record that decodes but fails these checks is
    /// treated as corrupt.
    ///
    /// # Errors
    ///
    /// Returns `KeystoreError::Crypto` for malformed base58, base64 or
    /// protobuf material, and for any mismatch between the three fields.
    pub fn to_identity(&self) -> Result<PeerIdentity> {
        let mut priv_bytes =
            base64::Engine::decode(&base64::engine::general_purpose::STANDARD, &self.priv_key)
                .map_err(|e| KeystoreError::Crypto(format!("invalid private key base64: {e}")))?;
        let keypair = Keypair::from_protobuf_encoding(&priv_bytes)
            .map_err(|e| KeystoreError::Crypto(format!("invalid private key: {e}")))?;
        priv_bytes.zeroize();

        let pub_bytes =
            base64::Engine::decode(&base64::engine::general_purpose::STANDARD, &self.pub_key)
                .map_err(|e| KeystoreError::Crypto(format!("invalid public key base64: {e}")))?;
        let public_key = PublicKey::try_decode_protobuf(&pub_bytes)
            .map_err(|e| KeystoreError::Crypto(format!("invalid public key: {e}")))?;

        if keypair.public() != public_key {
            return Err(KeystoreError::Crypto(
                "public key does not match private key".to_string(),
            ));
        }

        let id_bytes = bs58::decode(&self.id)
            .into_vec()
            .map_err(|e| KeystoreError::Crypto(format!("invalid id base58: {e}")))?;
        let peer_id = PeerId::from_bytes(&id_bytes)
            .map_err(|e| KeystoreError::Crypto(format!("invalid peer id multihash: {e}")))?;

        if public_key.to_peer_id() != peer_id {
            return Err(KeystoreError::Crypto(
                "id does not match the public key".to_string(),
            ));
        }

        Ok(PeerIdentity::from_keypair(keypair))
    }

    /// Validate a parsed JSON value as a storage record.
    ///
    /// The value must be an object carrying non-empty string values for
    /// `id`, `privKey` and `pubKey`. Extra fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns `KeystoreError::InvalidRecord` naming the first field that
    /// is missing, not a string, or empty.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(KeystoreError::InvalidRecord(
                "not a JSON object".to_string(),
            ));
        }

        Ok(Self {
            id: string_field(value, "id")?,
            priv_key: string_field(value, "privKey")?,
            pub_key: string_field(value, "pubKey")?,
        })
    }
}

fn string_field(value: &serde_json::Value, name: &str) -> Result<String> {
    let field = value
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| KeystoreError::InvalidRecord(format!("missing string field '{name}'")))?;
    if field.is_empty() {
        return Err(KeystoreError::InvalidRecord(format!(
            "empty field '{name}'"
        )));
    }
    Ok(field.to_string())
}

// ── PeerIdStore ───────────────────────────────────────────────────────────────

/// Repository for the node's peer identity file.
///
/// Safe for single-process use. Concurrent saves to the same path from
/// multiple processes are not coordinated; the last writer wins.
pub struct PeerIdStore<S: ByteStore = FsByteStore> {
    store: S,
    config_dir: PathBuf,
}

impl PeerIdStore<FsByteStore> {
    /// Create a store whose default file lives under `config_dir`.
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self::with_store(FsByteStore, config_dir)
    }
}

impl Default for PeerIdStore<FsByteStore> {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_DIR)
    }
}

impl<S: ByteStore> PeerIdStore<S> {
    /// Create a store over a custom byte store.
    pub fn with_store(store: S, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            config_dir: config_dir.into(),
        }
    }

    /// Path used when no explicit path is given: `{config_dir}/.peerId`.
    pub fn default_path(&self) -> PathBuf {
        self.config_dir.join(PEER_ID_FILENAME)
    }

    /// Resolve an optional caller-supplied path against the default.
    ///
    /// `None` and the empty path both resolve to [`PeerIdStore::default_path`].
    pub fn resolve_path(&self, path: Option<&Path>) -> PathBuf {
        resolve_or_default(path, self.default_path())
    }

    /// Persist a complete identity as JSON at `path` (or the default path).
    ///
    /// Overwrites any existing file at the resolved path.
    ///
    /// # Errors
    ///
    /// Returns `KeystoreError::InvalidIdentity` for an incomplete identity,
    /// `KeystoreError::EncodingFailed` if the key material can not be
    /// marshaled, or `KeystoreError::Io` for write faults.
    pub fn save(&self, path: Option<&Path>, identity: &PeerIdentity) -> Result<()> {
        if !identity.is_complete() {
            return Err(KeystoreError::InvalidIdentity(
                "identity is missing private or public key material".to_string(),
            ));
        }

        let mut record = StoredPeerIdentity::from_identity(identity)?;
        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| KeystoreError::EncodingFailed(format!("record serialization: {e}")));
        record.zeroize();
        let mut json = json?;

        let path = self.resolve_path(path);
        let result = self.store.write_bytes(&path, json.as_bytes());
        json.zeroize();
        result
    }

    /// Load and fully reconstruct the identity stored at `path` (or the
    /// default path).
    ///
    /// # Errors
    ///
    /// `KeystoreError::NotFound` if the file is absent, `EmptyFile` for a
    /// zero-length file, `Parse` for invalid UTF-8 or malformed JSON,
    /// `InvalidRecord` for a structurally invalid record, `Crypto` if key
    /// reconstruction rejects the material, and `InvalidIdentity` if the
    /// result is not a complete identity.
    pub fn load(&self, path: Option<&Path>) -> Result<PeerIdentity> {
        let mut record = self.load_record(path)?;
        let identity = record.to_identity();
        record.zeroize();
        let identity = identity?;

        if !identity.is_complete() {
            return Err(KeystoreError::InvalidIdentity(
                "stored identity is missing key material".to_string(),
            ));
        }

        Ok(identity)
    }

    /// Load the raw storage record at `path` without reconstructing keys.
    ///
    /// This stops at structural validation, which makes it usable for
    /// inspecting files whose key material this build can not reconstruct.
    ///
    /// # Errors
    ///
    /// As [`PeerIdStore::load`], minus the reconstruction errors.
    pub fn load_record(&self, path: Option<&Path>) -> Result<StoredPeerIdentity> {
        let path = self.resolve_path(path);

        if !self.store.exists(&path) {
            return Err(KeystoreError::NotFound(path));
        }

        let bytes = self.store.read_bytes(&path)?;
        let text = String::from_utf8(bytes).map_err(|e| KeystoreError::Parse {
            path: path.clone(),
            reason: format!("not valid UTF-8: {e}"),
        })?;

        if text.is_empty() {
            return Err(KeystoreError::EmptyFile(path));
        }

        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| KeystoreError::Parse {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        StoredPeerIdentity::from_value(&value)
    }
}
