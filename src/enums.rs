// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the outcome and direction enums that make up
//! the public contract of the cipher and ring buffer.

use serde::{Deserialize, Serialize};

/// Which way a Caesar rotation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CipherDirection {
    #[default]
    Encrypt,
    Decrypt,
}

/// Result of [`RingBuffer::insert`](crate::ring::RingBuffer::insert)
///
/// Insertion never fails. `Overwrite` means the buffer was full and the
/// oldest element was displaced by the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertOutcome {
    CleanInsert,
    Overwrite,
}

/// Result of [`RingBuffer::remove_into`](crate::ring::RingBuffer::remove_into)
///
/// On `Empty` the caller's output slot has not been touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoveOutcome {
    Success,
    Empty,
}

impl InsertOutcome {
    pub fn is_overwrite(self) -> bool {
        self == InsertOutcome::Overwrite
    }
}

impl RemoveOutcome {
    pub fn is_success(self) -> bool {
        self == RemoveOutcome::Success
    }
}
