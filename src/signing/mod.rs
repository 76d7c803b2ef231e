// src/signing/mod.rs
//! Asymmetric signature engine — RSA-2048, SHA-256, PKCS#1 v1.5
//!
//! Stateless: key pairs are generated per call and never retained; sign and
//! verify are pure functions over their inputs.

pub mod keys;
pub mod signature;

pub use keys::{generate_keypair, KeyPair};
pub use signature::{sign, verify};

pub type Result<T> = std::result::Result<T, crate::error::CoreError>;
