//! Facade services over the key stores.
//!
//! These are the operations a node (or the CLI) calls during bootstrap:
//! generate a secret, persist it, load it back. Generation is delegated to
//! the crypto collaborators, persistence to the stores; the services only
//! compose the two.

use std::path::{Path, PathBuf};

use libp2p_identity::KeyType;
use zeroize::Zeroize;

use crate::error::{KeystoreError, Result};
use crate::identity::{keygen, PeerIdentity};
use crate::psk;
use crate::storage::byte_store::{ByteStore, FsByteStore};
use crate::storage::peer_id_store::PeerIdStore;
use crate::storage::swarm_key_store::SwarmKeyStore;

// ── Peer identity service ─────────────────────────────────────────────────────

/// Generate, persist and load peer identities.
pub struct PeerIdService<S: ByteStore = FsByteStore> {
    store: PeerIdStore<S>,
}

impl PeerIdService<FsByteStore> {
    /// Create a service whose default identity file lives under `config_dir`.
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            store: PeerIdStore::new(config_dir),
        }
    }
}

impl Default for PeerIdService<FsByteStore> {
    fn default() -> Self {
        Self {
            store: PeerIdStore::default(),
        }
    }
}

impl<S: ByteStore> PeerIdService<S> {
    /// Create a service over a custom repository.
    pub fn with_store(store: PeerIdStore<S>) -> Self {
        Self { store }
    }

    /// The underlying repository.
    pub fn store(&self) -> &PeerIdStore<S> {
        &self.store
    }

    /// Generate a fresh identity of the given key type.
    ///
    /// # Errors
    ///
    /// Returns `KeystoreError::Crypto` for key types that can not be
    /// generated (RSA, ECDSA).
    pub fn generate(&self, key_type: KeyType) -> Result<PeerIdentity> {
        Ok(PeerIdentity::from_keypair(keygen::generate(key_type)?))
    }

    /// Generate a fresh identity and persist it at `path` (or the default
    /// path).
    pub fn generate_and_persist(
        &self,
        path: Option<&Path>,
        key_type: KeyType,
    ) -> Result<PeerIdentity> {
        let identity = self.generate(key_type)?;
        self.store.save(path, &identity)?;
        Ok(identity)
    }

    /// Load the identity stored at `path` (or the default path).
    pub fn load(&self, path: Option<&Path>) -> Result<PeerIdentity> {
        self.store.load(path)
    }

    /// Load the identity, treating any failure as absence.
    ///
    /// The swallowed failure is logged at debug level so an operator can
    /// still see why a node considered itself identity-less.
    pub fn load_or_none(&self, path: Option<&Path>) -> Option<PeerIdentity> {
        match self.store.load(path) {
            Ok(identity) => Some(identity),
            Err(e) => {
                log::debug!("no usable peer identity: {e}");
                None
            }
        }
    }

    /// Load the stored identity, generating and persisting a fresh one of
    /// the given type if no usable identity exists.
    pub fn load_or_create(&self, path: Option<&Path>, key_type: KeyType) -> Result<PeerIdentity> {
        match self.load_or_none(path) {
            Some(identity) => Ok(identity),
            None => self.generate_and_persist(path, key_type),
        }
    }
}

// ── Swarm key service ─────────────────────────────────────────────────────────

/// Generate, persist and load swarm keys.
///
/// There is deliberately no `load_or_create` here: a swarm key is shared
/// network state, and a joining node that invents its own key would split
/// itself off into a network of one. Provisioning the key is an explicit
/// operator action.
pub struct SwarmKeyService<S: ByteStore = FsByteStore> {
    store: SwarmKeyStore<S>,
}

impl SwarmKeyService<FsByteStore> {
    /// Create a service whose default key file lives under `config_dir`.
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            store: SwarmKeyStore::new(config_dir),
        }
    }
}

impl Default for SwarmKeyService<FsByteStore> {
    fn default() -> Self {
        Self {
            store: SwarmKeyStore::default(),
        }
    }
}

impl<S: ByteStore> SwarmKeyService<S> {
    /// Create a service over a custom repository.
    pub fn with_store(store: SwarmKeyStore<S>) -> Self {
        Self { store }
    }

    /// The underlying repository.
    pub fn store(&self) -> &SwarmKeyStore<S> {
        &self.store
    }

    /// Generate a fresh swarm key in its canonical trimmed form.
    pub fn generate(&self) -> Vec<u8> {
        let mut buf = [0u8; psk::SWARM_KEY_BUFFER_LEN];
        psk::generate_psk(&mut buf);
        let key = psk::trim_trailing_zeros(&buf).to_vec();
        buf.zeroize();
        key
    }

    /// Generate a fresh swarm key and persist it at `path` (or the default
    /// path).
    ///
    /// # Errors
    ///
    /// Returns `KeystoreError::SaveFailed` wrapping the store error when
    /// the write fails.
    pub fn generate_and_persist(&self, path: Option<&Path>) -> Result<Vec<u8>> {
        let key = self.generate();
        self.store
            .save(path, &key)
            .map_err(|e| KeystoreError::SaveFailed {
                source: Box::new(e),
            })?;
        Ok(key)
    }

    /// Load the swarm key stored at `path` (or the default path).
    pub fn load(&self, path: Option<&Path>) -> Result<Vec<u8>> {
        self.store.load(path)
    }
}
