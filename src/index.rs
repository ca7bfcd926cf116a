// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`GrowVec`](crate::GrowVec).
//!
//! `v[i]` and `v[a..b]` behave exactly like slice indexing over the live
//! prefix `[0..len)`: out-of-bounds positions and inverted ranges panic.
//! Slots past `len` are never reachable, even when capacity is larger.
//!
//! The checked form is [`GrowVec::at`](crate::GrowVec::at); the unchecked
//! form is `get_unchecked` through `Deref<Target = [T]>`.

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>> Index<I> for GrowVec<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for GrowVec<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{grow_vec, vec::GrowVec};

    #[test]
    fn test_index_reads_and_writes() {
        let mut v: GrowVec<i32> = grow_vec![1, 2, 3, 4];
        v[1] = 10;
        v[3] = 40;
        assert_eq!(v[0], 1);
        assert_eq!(v.as_slice(), &[1, 10, 3, 40]);
    }

    #[test]
    fn test_ranges() {
        let mut v: GrowVec<i32> = grow_vec![0, 1, 2, 3, 4];
        assert_eq!(&v[1..3], &[1, 2]);
        assert_eq!(&v[2..], &[2, 3, 4]);
        assert_eq!(&v[..3], &[0, 1, 2]);
        assert_eq!(&v[..=2], &[0, 1, 2]);
        assert_eq!(&v[1..=3], &[1, 2, 3]);
        assert_eq!(&v[..], &[0, 1, 2, 3, 4]);

        v[1..3].copy_from_slice(&[10, 20]);
        v[3..].fill(0);
        assert_eq!(v.as_slice(), &[0, 10, 20, 0, 0]);
    }

    #[test]
    fn test_empty_ranges_work() {
        let v: GrowVec<i32> = grow_vec![1, 2, 3];
        assert_eq!(&v[1..1], &[] as &[i32]);
        assert_eq!(&v[..0], &[] as &[i32]);
        assert_eq!(&v[3..3], &[] as &[i32]);
    }

    #[test]
    #[should_panic]
    fn test_index_past_len_panics_even_with_spare_capacity() {
        let v: GrowVec<i32> = grow_vec![1, 2];
        assert_eq!(v.capacity(), 4);
        let _ = v[2];
    }

    #[test]
    #[should_panic]
    fn test_index_on_empty_panics() {
        let v: GrowVec<i32> = GrowVec::new();
        let _ = v[0];
    }

    #[test]
    #[should_panic]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_inverted_range_panics() {
        let v: GrowVec<i32> = grow_vec![1, 2, 3];
        let _ = &v[2..1];
    }

    #[test]
    #[should_panic]
    fn test_inclusive_upper_oob_panics() {
        let mut v: GrowVec<i32> = grow_vec![1, 2, 3];
        let _ = &mut v[..=3];
    }
}
