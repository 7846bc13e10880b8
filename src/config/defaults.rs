// src/config/defaults.rs
use crate::config::app::{CipherSettings, Config, RingSettings};
use crate::consts::{DEFAULT_KEY, DEFAULT_RING_CAPACITY};
use crate::extract::RecordFormat;

pub fn default_cipher() -> CipherSettings {
    CipherSettings { key: DEFAULT_KEY }
}

pub fn default_ring() -> RingSettings {
    RingSettings {
        capacity: DEFAULT_RING_CAPACITY,
    }
}

pub fn default_config() -> Config {
    Config {
        cipher: default_cipher(),
        extractor: RecordFormat::default(),
        ring: default_ring(),
    }
}
