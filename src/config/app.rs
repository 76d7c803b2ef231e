// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub naming: Naming,
    pub features: Features,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Naming {
    pub encrypted_prefix: String,
    pub decrypted_prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Features {
    pub overwrite_existing: bool,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var("FILESEAL_CONFIG").unwrap_or_else(|_| "fileseal.toml".to_string());

        if std::path::Path::new(&config_path).exists() {
            let content =
                std::fs::read_to_string(&config_path).expect("Failed to read fileseal.toml");
            toml::from_str(&content).expect("Invalid TOML in fileseal.toml")
        } else {
            Config {
                naming: default_naming(),
                features: default_features(),
            }
        }
    })
}
