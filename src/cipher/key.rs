// src/cipher/key.rs
//! Validated shift key

use std::fmt;

use crate::consts::{ALPHABET_LEN, MAX_KEY, MIN_KEY};
use crate::error::{CoreError, Result};

/// A Caesar shift in `1..=26`
///
/// Construction is the only place the key range is checked; everything
/// downstream can rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShiftKey(u8);

impl ShiftKey {
    pub fn new(key: i32) -> Result<Self> {
        if !(MIN_KEY..=MAX_KEY).contains(&key) {
            return Err(CoreError::InvalidKey(key));
        }
        // range checked above
        Ok(Self(key as u8))
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Forward rotation in `0..26` applied when encrypting
    #[inline]
    pub(crate) fn forward(self) -> u8 {
        self.0 % ALPHABET_LEN
    }

    /// Rotation in `0..26` that undoes [`forward`](Self::forward), applied when decrypting
    #[inline]
    pub(crate) fn backward(self) -> u8 {
        (ALPHABET_LEN - self.forward()) % ALPHABET_LEN
    }

    /// The key that undoes this one when used for encryption
    ///
    /// Key 26 is its own inverse.
    pub fn inverse(self) -> Self {
        match self.backward() {
            0 => Self(ALPHABET_LEN),
            shift => Self(shift),
        }
    }
}

impl TryFrom<i32> for ShiftKey {
    type Error = CoreError;

    fn try_from(key: i32) -> Result<Self> {
        Self::new(key)
    }
}

impl From<ShiftKey> for i32 {
    fn from(key: ShiftKey) -> Self {
        i32::from(key.0)
    }
}

impl fmt::Display for ShiftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
