// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    vec::{resolve_range, GrowVec},
};

// Core imports
use core::{ops::RangeBounds, ptr};

impl<T> GrowVec<T> {
    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    pub fn erase(&mut self, index: usize) -> Result<T, Error> {
        let len = self.len;
        if index >= len {
            return Err(Error::OutOfRange { index, len });
        }

        // Rotate the removed element to the last live slot, then drop it out
        // of the live range.
        self.slots_mut()[index..len].rotate_left(1);
        self.len = len - 1;

        // SAFETY: `buf[len - 1]` was initialized (it was inside the live prefix
        // before `len` was lowered) and is now read out exactly once.
        Ok(unsafe { self.slots_mut()[len - 1].assume_init_read() })
    }

    /// Removes the first element equal to `value` and returns it.
    ///
    /// Returns `None` (and leaves the vector unchanged) if there is no match.
    pub fn erase_value(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.as_slice().iter().position(|x| x == value)?;
        self.erase(index).ok()
    }

    /// Like [`erase_value`](GrowVec::erase_value), but reports a missing value
    /// as [`Error::NotFound`].
    #[inline]
    pub fn try_erase_value(&mut self, value: &T) -> Result<T, Error>
    where
        T: PartialEq,
    {
        self.erase_value(value).ok_or(Error::NotFound)
    }

    /// Removes every element equal to `value`, preserving the order of the
    /// rest. Returns how many were removed.
    pub fn erase_all(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        let before = self.len;
        self.retain(|x| x != value);
        before - self.len
    }

    /// Removes the elements in `range`, closing the gap, and returns how many
    /// were removed.
    ///
    /// Returns [`Error::OutOfRange`] if `start > end` or `end > len`; the
    /// vector is unchanged in that case. An empty range is a no-op.
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) -> Result<usize, Error> {
        let len = self.len;
        let range = resolve_range(range, len)?;
        let count = range.len();
        if count == 0 {
            return Ok(0);
        }

        // Move the doomed elements behind the survivors: [start..len) becomes
        // [tail.., removed..].
        self.slots_mut()[range.start..len].rotate_left(count);
        let new_len = len - count;
        let doomed: *mut [T] = &mut self.as_mut_slice()[new_len..];
        self.len = new_len;

        // SAFETY: `doomed` covers slots initialized before `len` was lowered;
        // they are outside the live prefix now and dropped exactly once.
        unsafe { ptr::drop_in_place(doomed) };
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        grow_vec,
        vec::{tests::DropCounter, GrowVec},
        Error,
    };
    use core::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_erase_index_shifts_and_returns() {
        let mut v: GrowVec<i32> = grow_vec![1, 2, 3, 4, 5];
        assert_eq!(v.erase(2), Ok(3));
        assert_eq!(v.as_slice(), &[1, 2, 4, 5]);
        assert_eq!(v.erase(0), Ok(1));
        assert_eq!(v.erase(v.len() - 1), Ok(5));
        assert_eq!(v.as_slice(), &[2, 4]);
    }

    #[test]
    fn test_erase_out_of_range_errors() {
        let mut v: GrowVec<i32> = grow_vec![1, 2];
        assert_eq!(v.erase(2), Err(Error::OutOfRange { index: 2, len: 2 }));
        assert_eq!(v.as_slice(), &[1, 2]);

        let mut empty: GrowVec<i32> = GrowVec::new();
        assert_eq!(empty.erase(0), Err(Error::OutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn test_erase_value_first_match_only() {
        let mut v: GrowVec<i32> = grow_vec![1, 2, 1, 3];
        assert_eq!(v.erase_value(&1), Some(1));
        assert_eq!(v.as_slice(), &[2, 1, 3]);
        assert_eq!(v.erase_value(&9), None);
        assert_eq!(v.as_slice(), &[2, 1, 3]);
    }

    #[test]
    fn test_try_erase_value_reports_not_found() {
        let mut v: GrowVec<i32> = grow_vec![4, 5];
        assert_eq!(v.try_erase_value(&5), Ok(5));
        assert_eq!(v.try_erase_value(&5), Err(Error::NotFound));
    }

    #[test]
    fn test_erase_all_counts_matches() {
        let mut v: GrowVec<i32> = grow_vec![7, 1, 7, 2, 7];
        assert_eq!(v.erase_all(&7), 3);
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.erase_all(&7), 0);
    }

    #[test]
    fn test_erase_range_middle_prefix_suffix() {
        let mut v: GrowVec<i32> = grow_vec![1, 2, 3, 4, 5];
        assert_eq!(v.erase_range(1..4), Ok(3));
        assert_eq!(v.as_slice(), &[1, 5]);

        let mut w: GrowVec<i32> = grow_vec![1, 2, 3, 4, 5];
        assert_eq!(w.erase_range(..2), Ok(2));
        assert_eq!(w.as_slice(), &[3, 4, 5]);
        assert_eq!(w.erase_range(1..), Ok(2));
        assert_eq!(w.as_slice(), &[3]);
        assert_eq!(w.erase_range(..), Ok(1));
        assert!(w.is_empty());
    }

    #[test]
    fn test_erase_range_inclusive_and_empty() {
        let mut v: GrowVec<i32> = grow_vec![1, 2, 3, 4, 5];
        assert_eq!(v.erase_range(2..2), Ok(0));
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(v.erase_range(..=2), Ok(3));
        assert_eq!(v.as_slice(), &[4, 5]);
    }

    #[test]
    fn test_erase_range_invalid_is_noop() {
        let mut v: GrowVec<i32> = grow_vec![1, 2, 3, 4];
        assert_eq!(v.erase_range(2..10), Err(Error::OutOfRange { index: 10, len: 4 }));
        #[allow(clippy::reversed_empty_ranges)]
        let inverted = v.erase_range(3..1);
        assert_eq!(inverted, Err(Error::OutOfRange { index: 3, len: 4 }));
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_erase_range_drops_removed_once() {
        let drops = Rc::new(Cell::new(0));
        let mut v = GrowVec::new();
        for _ in 0..6 {
            v.push(DropCounter(drops.clone()));
        }
        assert_eq!(v.erase_range(1..4), Ok(3));
        assert_eq!(drops.get(), 3);
        let removed = v.erase(0).unwrap();
        assert_eq!(drops.get(), 3);
        drop(removed);
        assert_eq!(drops.get(), 4);
        drop(v);
        assert_eq!(drops.get(), 6);
    }
}
