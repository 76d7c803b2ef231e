// src/consts.rs
//! Shared constants — cipher geometry and key sizes

/// Derived AES key length in bytes (AES-256)
pub const DERIVED_KEY_LEN: usize = 32;

/// Initialization vector length — one cipher block, prefixed to every envelope
pub const IV_LEN: usize = 16;

/// AES block size in bytes; ciphertext bodies are always a multiple of this
pub const BLOCK_LEN: usize = 16;

/// RSA modulus size for generated key pairs
pub const RSA_KEY_BITS: usize = 2048;
