// src/crypto/mod.rs
//! Symmetric cipher engine — pure in-memory primitives, no I/O
//!
//! Envelope layout: `IV (16 bytes) ‖ AES-256-CBC ciphertext` of the
//! PKCS#7-padded plaintext.

pub mod decrypt;
pub mod encrypt;
pub mod kdf;

pub use decrypt::decrypt_to_vec;
pub use encrypt::encrypt_to_vec;
pub use kdf::{derive_key, DerivedKey};

pub type Result<T> = std::result::Result<T, crate::error::CoreError>;
