// src/config/mod.rs
//! Configuration system for sensor-kit
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, load_from, CipherSettings, Config, RingSettings};

mod app;
mod defaults;
