// src/config/defaults.rs
use crate::config::app::{Features, Naming};

pub const DEFAULT_ENCRYPTED_PREFIX: &str = "encrypted_";
pub const DEFAULT_DECRYPTED_PREFIX: &str = "decrypted_";

pub fn default_naming() -> Naming {
    Naming {
        encrypted_prefix: DEFAULT_ENCRYPTED_PREFIX.into(),
        decrypted_prefix: DEFAULT_DECRYPTED_PREFIX.into(),
    }
}

pub fn default_features() -> Features {
    Features {
        overwrite_existing: false,
    }
}
