//! The in-memory peer identity.

use libp2p_identity::{KeyType, Keypair, PeerId, PublicKey};

/// A peer's cryptographic identity.
///
/// The peer ID is the multihash-derived identifier the rest of the network
/// knows this node by. The keypair is the private half and is only present
/// for identities this node owns; an identity reconstructed from a public
/// key alone can verify signatures but not prove ownership.
///
/// An identity is *complete* when both the keypair and the public key are
/// present. Only complete identities can be persisted.
#[derive(Clone)]
pub struct PeerIdentity {
    peer_id: PeerId,
    public_key: Option<PublicKey>,
    keypair: Option<Keypair>,
}

impl PeerIdentity {
    /// Build an identity from a keypair.
    ///
    /// The public key and peer ID are derived from the keypair, never
    /// supplied independently, so the three can not disagree.
    pub fn from_keypair(keypair: Keypair) -> Self {
        let public_key = keypair.public();
        let peer_id = public_key.to_peer_id();
        Self {
            peer_id,
            public_key: Some(public_key),
            keypair: Some(keypair),
        }
    }

    /// Build a verification-only identity from a public key.
    pub fn from_public_key(public_key: PublicKey) -> Self {
        let peer_id = public_key.to_peer_id();
        Self {
            peer_id,
            public_key: Some(public_key),
            keypair: None,
        }
    }

    /// The multihash-derived peer ID.
    pub fn peer_id(&self) -> &PeerId {
        &self.peer_id
    }

    /// The public key, if present.
    pub fn public_key(&self) -> Option<&PublicKey> {
        self.public_key.as_ref()
    }

    /// The keypair (private half), if present.
    pub fn keypair(&self) -> Option<&Keypair> {
        self.keypair.as_ref()
    }

    /// The key algorithm, when key material is present.
    pub fn key_type(&self) -> Option<KeyType> {
        self.public_key.as_ref().map(|public| public.key_type())
    }

    /// True when both the private and public halves are present.
    pub fn is_complete(&self) -> bool {
        self.keypair.is_some() && self.public_key.is_some()
    }
}
