// src/ring/mod.rs
//! Fixed-capacity circular buffer over caller-owned storage
//!
//! The caller allocates the slots; [`RingBuffer`] only tracks the count
//! and the read/write positions and never allocates or resizes.

mod buffer;
mod iter;

pub use buffer::RingBuffer;
pub use iter::Iter;
