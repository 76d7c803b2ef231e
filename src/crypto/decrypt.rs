// src/crypto/decrypt.rs
use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, KeyIvInit};

use crate::consts::{BLOCK_LEN, IV_LEN};
use crate::crypto::kdf::derive_key;
use crate::crypto::Result;
use crate::error::CoreError;

type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Decrypt an `IV ‖ ciphertext` envelope → plaintext (in-memory)
///
/// Rejects envelopes with no room for an IV and ciphertext bodies that are
/// not block-aligned before touching the cipher. A wrong password surfaces
/// as `InvalidPadding` after decryption; both rejection paths display the
/// same generic message.
pub fn decrypt_to_vec(envelope: &[u8], password: &str) -> Result<Vec<u8>> {
    if envelope.len() < IV_LEN {
        return Err(CoreError::MalformedInput);
    }
    let (iv, ciphertext) = envelope.split_at(IV_LEN);
    if ciphertext.len() % BLOCK_LEN != 0 {
        return Err(CoreError::MalformedInput);
    }

    let key = derive_key(password);
    let cipher = Aes256CbcDec::new_from_slices(key.as_bytes(), iv)
        .map_err(|_| CoreError::MalformedInput)?;

    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CoreError::InvalidPadding)
}
