// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

impl<T> GrowVec<T> {
    /// Removes the last element and hands it back, or returns `None` when empty.
    ///
    /// The vacated slot drops out of the live range; capacity is unchanged.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            let last = self.len;
            // SAFETY: Before decrementing, `buf[..old_len]` was initialized, so
            // `buf[last]` holds a `T`. It is now outside the live prefix and
            // will not be read or dropped again.
            Some(unsafe { self.slots_mut()[last].assume_init_read() })
        }
    }
}
