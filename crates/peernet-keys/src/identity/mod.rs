//! Peer identity types and key generation.

pub mod keygen;
pub mod peer;

pub use peer::PeerIdentity;
