// src/signing/signature.rs
//! PKCS#1 v1.5 signing and verification over SHA-256 digests

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::Pkcs1v15Sign;
use sha2::{Digest, Sha256};

use crate::signing::keys::{parse_private_key, parse_public_key};
use crate::signing::Result;

/// Sign `message` with a PEM-encoded private key.
///
/// Returns the raw PKCS#1 v1.5 signature bytes as base64 text. Deterministic
/// for a given (message, key) pair — the scheme has no randomized padding.
pub fn sign(message: &[u8], private_key_pem: &str) -> Result<String> {
    let key = parse_private_key(private_key_pem)?;
    let digest = Sha256::digest(message);
    let signature = key.sign(Pkcs1v15Sign::new::<Sha256>(), &digest)?;
    Ok(STANDARD.encode(signature))
}

/// Verify a base64 signature against `message` with a PEM-encoded public key.
///
/// Total over untrusted input: an unparsable key, bad base64, or any
/// cryptographic mismatch collapses to `false`. Never panics, never returns
/// an error — the outcome space is exactly {true, false}.
pub fn verify(message: &[u8], signature_b64: &str, public_key_pem: &str) -> bool {
    let Ok(key) = parse_public_key(public_key_pem) else {
        return false;
    };
    let Ok(signature) = STANDARD.decode(signature_b64) else {
        return false;
    };

    let digest = Sha256::digest(message);
    key.verify(Pkcs1v15Sign::new::<Sha256>(), &digest, &signature)
        .is_ok()
}
