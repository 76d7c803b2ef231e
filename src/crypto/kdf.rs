// src/crypto/kdf.rs
//! Password-to-key transform (legacy scheme)

use zeroize::ZeroizeOnDrop;

use crate::consts::DERIVED_KEY_LEN;

/// A 256-bit AES key derived from a password.
///
/// Wiped on drop; the raw bytes never leave the crate.
#[derive(ZeroizeOnDrop)]
pub struct DerivedKey([u8; DERIVED_KEY_LEN]);

impl DerivedKey {
    pub(crate) fn as_bytes(&self) -> &[u8; DERIVED_KEY_LEN] {
        &self.0
    }
}

/// Derive a fixed 256-bit key from a password.
///
/// The password's UTF-8 bytes are truncated to 32 bytes, or right-padded
/// with zero bytes up to 32. Deterministic — no salt, no stretching. Every
/// existing envelope depends on this exact transform, so it must not change
/// within the current envelope format.
///
/// TODO: versioned envelope with a salted, iterated KDF — incompatible with
/// envelopes produced by this scheme.
pub fn derive_key(password: &str) -> DerivedKey {
    let mut key = [0u8; DERIVED_KEY_LEN];
    let bytes = password.as_bytes();
    let n = bytes.len().min(DERIVED_KEY_LEN);
    key[..n].copy_from_slice(&bytes[..n]);
    DerivedKey(key)
}
