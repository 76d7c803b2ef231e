// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // The two decryption failures render identically — callers must not be
    // able to tell a short or ragged envelope from bad padding.
    #[error("decryption failed: wrong password or corrupted data")]
    MalformedInput,

    #[error("decryption failed: wrong password or corrupted data")]
    InvalidPadding,

    #[error("invalid key encoding: {0}")]
    InvalidKey(String),

    #[error("RSA operation failed: {0}")]
    Rsa(#[from] rsa::Error),

    #[error("key serialization failed: {0}")]
    KeyEncoding(String),
}
