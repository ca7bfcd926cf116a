// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

impl<T> GrowVec<T> {
    /// Appends `value`, growing first if the vector is full.
    ///
    /// Amortized `O(1)`; see the type-level docs for the growth policy.
    #[inline]
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        let len = self.len;
        self.slots_mut()[len].write(value);
        self.len = len + 1;
    }
}
