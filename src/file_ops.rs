// src/file_ops.rs
//! File-level encryption/decryption operations
//!
//! This module handles encryption and decryption with file I/O,
//! building on the pure crypto primitives from crypto/.

use std::path::Path;

use crate::crypto::{decrypt_to_vec, encrypt_to_vec};
use crate::error::CoreError;

/// Encrypt a file on disk into an IV-prefixed envelope
///
/// Reads the plaintext file, encrypts it in-memory, writes the envelope.
/// Returns the plaintext size in bytes.
pub fn encrypt_file<P: AsRef<Path>>(
    input_path: P,
    output_path: P,
    password: &str,
) -> Result<u64, CoreError> {
    let plaintext = std::fs::read(input_path.as_ref())?;
    let envelope = encrypt_to_vec(&plaintext, password)?;
    std::fs::write(output_path.as_ref(), envelope)?;

    Ok(plaintext.len() as u64)
}

/// Decrypt an envelope file on disk
///
/// Reads the envelope file, decrypts it in-memory, writes the plaintext.
/// Returns the plaintext size in bytes.
pub fn decrypt_file<P: AsRef<Path>>(
    input_path: P,
    output_path: P,
    password: &str,
) -> Result<u64, CoreError> {
    let envelope = std::fs::read(input_path.as_ref())?;
    let plaintext = decrypt_to_vec(&envelope, password)?;
    std::fs::write(output_path.as_ref(), &plaintext)?;

    Ok(plaintext.len() as u64)
}
