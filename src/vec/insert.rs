// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::GrowVec};

impl<T> GrowVec<T> {
    /// Inserts `value` at `index`, shifting `[index..len)` one slot to the right.
    ///
    /// - Returns [`Error::OutOfRange`] if `index > len`; the vector is unchanged.
    /// - Grows first when full, following the regular growth policy.
    ///
    /// `index == len` appends. A cursor position ([`Cursor::index`](crate::Cursor::index))
    /// can be used as `index`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        let len = self.len;
        if index > len {
            return Err(Error::OutOfRange { index, len });
        }
        if len == self.capacity() {
            self.grow();
        }

        // Write into the first spare slot, then rotate it into place:
        // [index..=len) becomes [value, old index.., old len-1].
        let slots = self.slots_mut();
        slots[len].write(value);
        slots[index..=len].rotate_right(1);

        self.len = len + 1;
        Ok(())
    }
}
