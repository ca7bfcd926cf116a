// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{next_capacity, GrowVec};

// External imports - log
use log::{debug, trace};

impl<T> GrowVec<T> {
    /// Ensures a total capacity of at least `capacity` slots.
    ///
    /// Unlike `Vec::reserve`, the argument is the requested **total**
    /// capacity, not an additional amount:
    ///
    /// - `capacity <= self.capacity()` is a no-op (capacity never shrinks here);
    /// - otherwise a buffer of exactly `capacity` slots is allocated, the live
    ///   elements are relocated into it in order and the old buffer is released.
    ///
    /// Raw pointers obtained before a reallocation are invalidated.
    pub fn reserve(&mut self, capacity: usize) {
        let old = self.capacity();
        if capacity <= old {
            return;
        }
        debug!("reserve: capacity {old} -> {capacity} (len {})", self.len);
        self.reallocate(capacity);
    }

    /// Shrinks the buffer to exactly `len` slots.
    ///
    /// An empty vector releases its buffer entirely. Never called implicitly.
    pub fn shrink_to_fit(&mut self) {
        let old = self.capacity();
        if self.len == old {
            return;
        }
        debug!("shrink_to_fit: capacity {old} -> {}", self.len);
        self.reallocate(self.len);
    }

    /// Grows by the doubling policy. Called by appends on a full vector.
    #[inline]
    pub(crate) fn grow(&mut self) {
        let new_cap = next_capacity(self.capacity());
        self.reallocate(new_cap);
    }

    /// Moves the live elements into a fresh buffer of `new_cap` slots.
    ///
    /// Both buffers are held while elements are relocated; the old one is
    /// released afterwards. `new_cap` must be at least `len`.
    pub(crate) fn reallocate(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        let old_cap = self.capacity();
        let len = self.len;

        let mut fresh = Self::allocate(new_cap);
        if let Some(dst) = fresh.as_deref_mut() {
            // Relocating swaps initialized slots out of the old buffer; the
            // old slots are left logically uninitialized and are never read.
            for (to, from) in dst.iter_mut().zip(self.slots_mut()).take(len) {
                core::mem::swap(to, from);
            }
        }
        // Dropping a `Box<[MaybeUninit<T>]>` frees memory without touching elements.
        self.buf = fresh;

        trace!("reallocated: capacity {old_cap} -> {new_cap} (len {len})");
    }
}
