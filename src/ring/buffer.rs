// src/ring/buffer.rs
use tracing::trace;

use super::iter::Iter;
use crate::enums::{InsertOutcome, RemoveOutcome};
use crate::error::{CoreError, Result};

/// Circular queue state over a borrowed slice
///
/// Invariant: `len` elements are valid starting at `read`, read
/// circularly, and `write == (read + len) % capacity`.
#[derive(Debug)]
pub struct RingBuffer<'a, T> {
    storage: &'a mut [T],
    len: usize,
    read: usize,
    write: usize,
}

impl<'a, T: Copy> RingBuffer<'a, T> {
    /// Empty buffer using every slot of `storage`
    pub fn new(storage: &'a mut [T]) -> Result<Self> {
        Self::from_parts(storage, 0, 0, 0)
    }

    /// Adopt storage that already holds `len` elements starting at `read_index`
    ///
    /// `write_index` must sit right after the last element.
    pub fn from_parts(
        storage: &'a mut [T],
        len: usize,
        read_index: usize,
        write_index: usize,
    ) -> Result<Self> {
        let capacity = storage.len();
        if capacity == 0 {
            return Err(CoreError::InvalidRingState("storage has no slots".into()));
        }
        if len > capacity {
            return Err(CoreError::InvalidRingState(format!(
                "count {len} exceeds capacity {capacity}"
            )));
        }
        if read_index >= capacity || write_index >= capacity {
            return Err(CoreError::InvalidRingState(format!(
                "indices ({read_index}, {write_index}) out of range for capacity {capacity}"
            )));
        }
        if (read_index + len) % capacity != write_index {
            return Err(CoreError::InvalidRingState(format!(
                "write index {write_index} does not follow {len} element(s) from read index {read_index}"
            )));
        }

        Ok(Self {
            storage,
            len,
            read: read_index,
            write: write_index,
        })
    }

    #[inline]
    fn advance(&self, index: usize) -> usize {
        (index + 1) % self.storage.len()
    }

    /// Append `value`, displacing the oldest element when full
    pub fn insert(&mut self, value: T) -> InsertOutcome {
        self.storage[self.write] = value;
        self.write = self.advance(self.write);

        if self.is_full() {
            self.read = self.advance(self.read);
            trace!(read = self.read, write = self.write, "ring overwrite");
            InsertOutcome::Overwrite
        } else {
            self.len += 1;
            InsertOutcome::CleanInsert
        }
    }

    /// Move the oldest element into `slot`; `slot` is untouched when empty
    pub fn remove_into(&mut self, slot: &mut T) -> RemoveOutcome {
        match self.pop() {
            Some(value) => {
                *slot = value;
                RemoveOutcome::Success
            }
            None => RemoveOutcome::Empty,
        }
    }

    /// Take the oldest element
    pub fn remove(&mut self) -> Result<T> {
        self.pop().ok_or(CoreError::BufferEmpty)
    }

    fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.storage[self.read];
        self.read = self.advance(self.read);
        self.len -= 1;
        Some(value)
    }

    /// Oldest element without removing it
    pub fn peek(&self) -> Option<T> {
        (!self.is_empty()).then(|| self.storage[self.read])
    }

    /// Forget every element; slot contents are left as they are
    pub fn clear(&mut self) {
        self.len = 0;
        self.read = 0;
        self.write = 0;
    }

    /// Elements from oldest to newest
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&*self.storage, self.read, self.len)
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.storage.len()
    }

    pub fn read_index(&self) -> usize {
        self.read
    }

    pub fn write_index(&self) -> usize {
        self.write
    }
}

impl<'r, T: Copy> IntoIterator for &'r RingBuffer<'_, T> {
    type Item = T;
    type IntoIter = Iter<'r, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
