// src/cipher/mod.rs
//! Caesar cipher over the uppercase Latin alphabet
//!
//! Pure functions only: no state survives between calls and every
//! rejection is all-or-nothing.

pub mod decrypt;
pub mod encrypt;
pub mod key;
mod rotate;

pub use decrypt::decrypt;
pub use encrypt::encrypt;
pub use key::ShiftKey;

use crate::enums::CipherDirection;
use crate::error::Result;

/// Run the cipher in the given direction
pub fn apply(direction: CipherDirection, input: &str, key: i32) -> Result<String> {
    match direction {
        CipherDirection::Encrypt => encrypt(input, key),
        CipherDirection::Decrypt => decrypt(input, key),
    }
}
