// src/ring/iter.rs

/// Iterator over a [`RingBuffer`](super::RingBuffer), oldest first
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    storage: &'a [T],
    next: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(storage: &'a [T], start: usize, len: usize) -> Self {
        Self {
            storage,
            next: start,
            remaining: len,
        }
    }
}

impl<T: Copy> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.storage[self.next];
        self.next = (self.next + 1) % self.storage.len();
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Copy> ExactSizeIterator for Iter<'_, T> {}
