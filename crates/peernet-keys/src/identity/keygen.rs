//! Keypair generation for the supported algorithms.

use libp2p_identity::{KeyType, Keypair};

use crate::error::{KeystoreError, Result};

/// Generate a fresh keypair of the given type.
///
/// Ed25519 and secp256k1 are supported. RSA keypairs can not be generated
/// here: the underlying provider keeps RSA private keys opaque, so a
/// generated RSA key could never be persisted. RSA identities written by
/// other implementations can still be loaded. ECDSA is not used by this
/// system.
///
/// # Errors
///
/// Returns `KeystoreError::Crypto` for RSA and ECDSA.
pub fn generate(key_type: KeyType) -> Result<Keypair> {
    match key_type {
        KeyType::Ed25519 => Ok(generate_ed25519()),
        KeyType::Secp256k1 => Ok(generate_secp256k1()),
        KeyType::RSA => Err(KeystoreError::Crypto(
            "RSA key generation is not supported; RSA identities are load-only".to_string(),
        )),
        KeyType::Ecdsa => Err(KeystoreError::Crypto(
            "ECDSA key generation is not supported".to_string(),
        )),
    }
}

/// Generate a fresh Ed25519 keypair.
pub fn generate_ed25519() -> Keypair {
    Keypair::generate_ed25519()
}

/// Generate a fresh secp256k1 keypair.
pub fn generate_secp256k1() -> Keypair {
    Keypair::generate_secp256k1()
}
