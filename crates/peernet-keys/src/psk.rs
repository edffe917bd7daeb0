//! Swarm key generation in the libp2p private-network PSK v1 format.
//!
//! A generated swarm key is the UTF-8 text
//!
//! ```text
//! /key/swarm/psk/1.0.0/
//! /base16/
//! <64 hex characters of key material>
//! ```
//!
//! written into the start of a fixed 256-byte scratch buffer. The text has
//! no trailing newline, so the remainder of the buffer stays zero and is
//! trimmed off to obtain the canonical in-memory form.

use rand::RngCore;
use zeroize::Zeroize;

/// Size of the scratch buffer a swarm key is generated into.
pub const SWARM_KEY_BUFFER_LEN: usize = 256;

/// Length in bytes of the raw pre-shared key material.
pub const PSK_LEN: usize = 32;

/// Protocol line of the PSK v1 text format.
pub const PSK_V1_PROTOCOL: &str = "/key/swarm/psk/1.0.0/";

/// Encoding line of the PSK v1 text format.
pub const PSK_V1_ENCODING: &str = "/base16/";

/// Fill the start of `buf` with a freshly generated PSK v1 swarm key.
///
/// The key text occupies the first 95 bytes; bytes past the text are not
/// modified. Use [`trim_trailing_zeros`] on a zeroed buffer to recover the
/// exact text.
pub fn generate_psk(buf: &mut [u8; SWARM_KEY_BUFFER_LEN]) {
    let mut psk = [0u8; PSK_LEN];
    rand::thread_rng().fill_bytes(&mut psk);

    let mut text = format!("{PSK_V1_PROTOCOL}\n{PSK_V1_ENCODING}\n{}", hex::encode(psk));
    buf[..text.len()].copy_from_slice(text.as_bytes());

    psk.zeroize();
    text.zeroize();
}

/// Strip trailing zero bytes, yielding the canonical form of a key that was
/// generated into an oversized zeroed buffer.
pub fn trim_trailing_zeros(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &bytes[..end]
}
