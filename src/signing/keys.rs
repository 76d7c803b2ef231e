// src/signing/keys.rs
//! RSA key pair generation and PEM encoding
//!
//! Emits the interchange formats most tooling expects: PKCS#1 for the
//! private half (`RSA PRIVATE KEY`), SPKI for the public half
//! (`PUBLIC KEY`). Parsing is lenient and accepts both families.

use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePublicKey, LineEnding};
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::consts::RSA_KEY_BITS;
use crate::error::CoreError;
use crate::signing::Result;

/// A freshly generated RSA key pair, PEM-encoded.
///
/// Nothing is retained after the call — the caller owns both halves.
#[derive(Debug, Clone)]
pub struct KeyPair {
    pub private_pem: String,
    pub public_pem: String,
}

/// Generate a fresh 2048-bit RSA key pair from the OS CSPRNG.
pub fn generate_keypair() -> Result<KeyPair> {
    let mut rng = rand::rngs::OsRng;
    let private_key = RsaPrivateKey::new(&mut rng, RSA_KEY_BITS)?;
    let public_key = RsaPublicKey::from(&private_key);

    let private_pem = private_key
        .to_pkcs1_pem(LineEnding::LF)
        .map_err(|e| CoreError::KeyEncoding(e.to_string()))?
        .to_string();
    let public_pem = public_key
        .to_public_key_pem(LineEnding::LF)
        .map_err(|e| CoreError::KeyEncoding(e.to_string()))?;

    Ok(KeyPair {
        private_pem,
        public_pem,
    })
}

/// Parse a PEM private key — PKCS#1 (`RSA PRIVATE KEY`) or PKCS#8 (`PRIVATE KEY`)
pub(crate) fn parse_private_key(pem: &str) -> Result<RsaPrivateKey> {
    RsaPrivateKey::from_pkcs1_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs8_pem(pem))
        .map_err(|e| CoreError::InvalidKey(e.to_string()))
}

/// Parse a PEM public key — SPKI (`PUBLIC KEY`) or PKCS#1 (`RSA PUBLIC KEY`)
pub(crate) fn parse_public_key(pem: &str) -> Result<RsaPublicKey> {
    RsaPublicKey::from_public_key_pem(pem)
        .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
        .map_err(|e| CoreError::InvalidKey(e.to_string()))
}
