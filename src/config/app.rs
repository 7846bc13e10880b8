// src/config/app.rs
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::defaults::*;
use crate::cipher::ShiftKey;
use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH, MAX_RING_CAPACITY};
use crate::error::{CoreError, Result};
use crate::extract::RecordFormat;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cipher: CipherSettings,
    pub extractor: RecordFormat,
    pub ring: RingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherSettings {
    pub key: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingSettings {
    pub capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        default_config()
    }
}

impl Default for CipherSettings {
    fn default() -> Self {
        default_cipher()
    }
}

impl Default for RingSettings {
    fn default() -> Self {
        default_ring()
    }
}

impl Config {
    /// Reject values the library would refuse at call time anyway
    pub fn validate(&self) -> Result<()> {
        ShiftKey::new(self.cipher.key)?;
        self.extractor.validate()?;
        if !(1..=MAX_RING_CAPACITY).contains(&self.ring.capacity) {
            return Err(CoreError::InvalidRingState(format!(
                "configured ring capacity {} is outside 1..={MAX_RING_CAPACITY}",
                self.ring.capacity
            )));
        }
        Ok(())
    }
}

/// Read and validate a TOML config file
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let conf: Config = toml::from_str(&content)?;
    conf.validate()?;
    Ok(conf)
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config once per process — falls back to defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if !Path::new(&config_path).exists() {
            debug!(path = %config_path, "config file not found, using built-in defaults");
            return default_config();
        }

        match load_from(&config_path) {
            Ok(conf) => conf,
            Err(err) => {
                warn!(path = %config_path, %err, "ignoring config file, using built-in defaults");
                default_config()
            }
        }
    })
}
