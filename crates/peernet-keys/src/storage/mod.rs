//! Storage layer for peer identity and swarm key files.
//!
//! # Directory layout
//!
//! By default both files live in `/etc/peernet`:
//!
//! ```text
//! /etc/peernet/
//! ├── .peerId      (JSON identity record)
//! └── .swarmKey    (PSK v1 text)
//! ```
//!
//! Every store operation accepts an explicit path; the config directory
//! only determines the default. Writes are atomic (sibling temp file plus
//! rename) and key files are created with mode 0600 on unix.

pub mod byte_store;
pub mod peer_id_store;
pub mod swarm_key_store;

pub use byte_store::{ByteStore, FsByteStore, DEFAULT_CONFIG_DIR};
pub use peer_id_store::{PeerIdStore, StoredPeerIdentity};
pub use swarm_key_store::{swarm_key_to_text, SwarmKeyRecord, SwarmKeyStore};
