//! peernet-keys: peer identity and swarm key persistence for private
//! peer-to-peer networks.
//!
//! A node joining a private network needs two secrets on disk: its peer
//! identity (a keypair plus the multihash-derived peer ID other nodes know
//! it by) and the network's shared swarm key. This crate owns the canonical
//! on-disk form of both, the validation that guards against corrupt files,
//! and the conversion between in-memory key objects and their durable form.
//!
//! # File formats
//!
//! Peer identity (`{config_dir}/.peerId`), the libp2p JSON key format:
//!
//! ```json
//! {
//!     "id": "12D3KooW...",
//!     "privKey": "CAESQ...",
//!     "pubKey": "CAESI..."
//! }
//! ```
//!
//! Swarm key (`{config_dir}/.swarmKey`), the libp2p PSK v1 text format:
//!
//! ```text
//! /key/swarm/psk/1.0.0/
//! /base16/
//! <64 hex characters of key material>
//! ```
//!
//! # Quick start
//!
//! ```no_run
//! use peernet_keys::{KeyType, PeerIdService};
//!
//! # fn main() -> peernet_keys::Result<()> {
//! let service = PeerIdService::new("/etc/peernet");
//! let identity = service.load_or_create(None, KeyType::Ed25519)?;
//! println!("peer id: {}", identity.peer_id());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod identity;
pub mod psk;
pub mod service;
pub mod storage;

// Re-export primary types
pub use error::{KeystoreError, Result};
pub use identity::PeerIdentity;
pub use service::{PeerIdService, SwarmKeyService};
pub use storage::{
    swarm_key_to_text, ByteStore, FsByteStore, PeerIdStore, StoredPeerIdentity, SwarmKeyRecord,
    SwarmKeyStore, DEFAULT_CONFIG_DIR,
};

// Re-export the collaborator's key types so embedders do not need a direct
// libp2p-identity dependency for ordinary use.
pub use libp2p_identity::{KeyType, Keypair, PeerId, PublicKey};
