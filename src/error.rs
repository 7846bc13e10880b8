// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("cipher key {0} is outside 1..=26")]
    InvalidKey(i32),

    #[error("invalid character {ch:?} at position {position}: only A-Z is accepted")]
    InvalidCharacter { ch: char, position: usize },

    #[error("subject and token must both be non-empty")]
    EmptyInput,

    #[error("no well-formed record for token {0:?}")]
    TokenNotFound(String),

    #[error("malformed record {record:?}: {reason}")]
    MalformedRecord { record: String, reason: &'static str },

    #[error("ring buffer is empty")]
    BufferEmpty,

    #[error("invalid ring buffer state: {0}")]
    InvalidRingState(String),

    #[error("invalid record format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
