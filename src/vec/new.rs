// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

// Alloc imports
use alloc::boxed::Box;

impl<T> GrowVec<T> {
    /// Constructs an empty vector. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self { buf: None, len: 0 }
    }

    /// Constructs an empty vector with exactly `capacity` slots.
    ///
    /// `with_capacity(0)` does not allocate.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Self::allocate(capacity),
            len: 0,
        }
    }

    /// Allocates `capacity` uninitialized slots, or nothing for zero.
    ///
    /// Allocation failure aborts through the global OOM handler.
    #[inline]
    pub(crate) fn allocate(capacity: usize) -> Option<Box<[core::mem::MaybeUninit<T>]>> {
        (capacity > 0).then(|| Box::new_uninit_slice(capacity))
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}
