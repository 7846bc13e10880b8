// src/cipher/encrypt.rs
use super::key::ShiftKey;
use super::rotate::rotate;
use crate::error::Result;

/// Encrypt uppercase text: `c -> 'A' + ((c - 'A' + key) mod 26)`
///
/// Fails with `InvalidKey` outside `1..=26` and with `InvalidCharacter`
/// if any character is not `A`–`Z`. Empty input encrypts to empty output.
pub fn encrypt(input: &str, key: i32) -> Result<String> {
    encrypt_with(input, ShiftKey::new(key)?)
}

/// Same as [`encrypt`] with an already validated key
pub fn encrypt_with(input: &str, key: ShiftKey) -> Result<String> {
    rotate(input, key.forward())
}
