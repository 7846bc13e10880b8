// src/cipher/rotate.rs
use crate::consts::ALPHABET_LEN;
use crate::error::{CoreError, Result};

/// Reject anything outside `A`–`Z` before producing any output
fn validate(input: &str) -> Result<()> {
    match input.char_indices().find(|(_, c)| !c.is_ascii_uppercase()) {
        Some((position, ch)) => Err(CoreError::InvalidCharacter { ch, position }),
        None => Ok(()),
    }
}

/// Rotate every letter forward by `shift` positions (`shift < 26`)
pub(crate) fn rotate(input: &str, shift: u8) -> Result<String> {
    validate(input)?;

    let rotated: String = input
        .bytes()
        .map(|b| char::from(b'A' + (b - b'A' + shift) % ALPHABET_LEN))
        .collect();
    Ok(rotated)
}
