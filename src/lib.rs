// src/lib.rs
//! fileseal — password-based file encryption and RSA digital signatures
//!
//! Two independent, stateless engines:
//! - AES-256-CBC password encryption with an IV-prefixed envelope
//! - RSA-2048 PKCS#1 v1.5 signatures over SHA-256 digests

pub mod config;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod file_ops;
pub mod signing;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use crypto::{decrypt_to_vec, derive_key, encrypt_to_vec, DerivedKey};
pub use error::CoreError;
pub use file_ops::{decrypt_file, encrypt_file};
pub use signing::{generate_keypair, sign, verify, KeyPair};

pub type Result<T> = std::result::Result<T, CoreError>;
