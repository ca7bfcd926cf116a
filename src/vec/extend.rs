// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    vec::{resolve_range, GrowVec},
};

// Core imports
use core::ops::RangeBounds;

impl<T> Extend<T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for item in iter {
            self.push(*item);
        }
    }
}

impl<T: Clone> GrowVec<T> {
    /// Appends clones of every element of `src`, in order.
    ///
    /// Each element goes through the same full-vector check as [`push`](GrowVec::push),
    /// so a long slice may trigger several reallocations.
    pub fn extend_from_slice(&mut self, src: &[T]) {
        for item in src {
            self.push(item.clone());
        }
    }

    /// Appends clones of all of `other`'s elements, in order.
    ///
    /// `other` cannot be `self`: the borrow checker rejects
    /// `v.append_clone(&v)`. Use [`extend_from_within`](GrowVec::extend_from_within)
    /// to append a vector's own elements.
    #[inline]
    pub fn append_clone(&mut self, other: &GrowVec<T>) {
        self.extend_from_slice(other.as_slice());
    }

    /// Appends clones of the elements in `range` of `self`.
    ///
    /// The range is resolved against the length at the time of the call, so
    /// elements appended by this call are never re-read.
    ///
    /// Returns [`Error::OutOfRange`] if the range is inverted or ends past
    /// `len`; the vector is unchanged in that case.
    pub fn extend_from_within<R: RangeBounds<usize>>(&mut self, range: R) -> Result<(), Error> {
        let range = resolve_range(range, self.len)?;
        for i in range {
            let item = self.as_slice()[i].clone();
            self.push(item);
        }
        Ok(())
    }
}
