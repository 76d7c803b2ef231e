// src/crypto/encrypt.rs
use aes::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};
use rand::RngCore;

use crate::consts::IV_LEN;
use crate::crypto::kdf::derive_key;
use crate::crypto::Result;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;

/// Encrypt plaintext → `IV ‖ ciphertext` envelope (in-memory)
///
/// A fresh 16-byte IV is drawn from the OS CSPRNG on every call, so the same
/// (plaintext, password) pair never yields the same envelope twice. Plaintext
/// is PKCS#7-padded; an already block-aligned input gains a full padding
/// block.
pub fn encrypt_to_vec(plaintext: &[u8], password: &str) -> Result<Vec<u8>> {
    let key = derive_key(password);

    let mut iv = [0u8; IV_LEN];
    rand::rngs::OsRng.fill_bytes(&mut iv);

    let ciphertext = Aes256CbcEnc::new(key.as_bytes().into(), &iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut envelope = Vec::with_capacity(IV_LEN + ciphertext.len());
    envelope.extend_from_slice(&iv);
    envelope.extend_from_slice(&ciphertext);
    Ok(envelope)
}
