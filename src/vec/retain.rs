// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate import
use crate::vec::GrowVec;

impl<T> GrowVec<T> {
    /// Retains only the elements specified by the predicate `f`, preserving order.
    ///
    /// The predicate is applied to each element in iteration order. Rejected
    /// elements are dropped once all elements have been visited.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let len = self.len;
        let mut write = 0;
        for read in 0..len {
            if f(&self.as_slice()[read]) {
                // Everything in [write..read) was rejected; swapping keeps the
                // kept elements in their original relative order.
                if write != read {
                    self.as_mut_slice().swap(write, read);
                }
                write += 1;
            }
        }
        self.truncate(write);
    }
}
