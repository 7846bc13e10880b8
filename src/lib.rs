// src/lib.rs
//! sensor-kit — small data-transformation primitives for sensor payloads
//!
//! Features:
//! - Caesar cipher over `A`–`Z` with all-or-nothing validation
//! - Zero-copy extraction of `TOKEN&unit::UNIT&value::NUMBER` records
//! - Fixed-capacity ring buffer over caller-owned storage

pub mod cipher;
pub mod config;
pub mod consts;
pub mod enums;
pub mod extract;
pub mod ring;

pub mod error;

// Re-export everything users need at the crate root
pub use cipher::{decrypt, encrypt, ShiftKey};
pub use config::load as load_config;
pub use enums::{CipherDirection, InsertOutcome, RemoveOutcome};
pub use error::{CoreError, Result as CoreResult};
pub use extract::{extract, Record, RecordFormat};
pub use ring::RingBuffer;
