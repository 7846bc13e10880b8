// src/cipher/decrypt.rs
use super::key::ShiftKey;
use super::rotate::rotate;
use crate::error::Result;

/// Decrypt uppercase text: `c -> 'A' + ((c - 'A' - key + 26) mod 26)`
///
/// Validation matches [`encrypt`](super::encrypt) exactly.
pub fn decrypt(input: &str, key: i32) -> Result<String> {
    decrypt_with(input, ShiftKey::new(key)?)
}

/// Same as [`decrypt`] with an already validated key
pub fn decrypt_with(input: &str, key: ShiftKey) -> Result<String> {
    rotate(input, key.backward())
}
