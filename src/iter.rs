// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`GrowVec`](crate::GrowVec).
//!
//! - `IntoIter<T>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. Elements it never yields are
//!   dropped with the iterator.
//! - `&GrowVec` and `&mut GrowVec` iterate as slices.
//! - `FromIterator` pushes one element at a time, so collecting follows the
//!   regular growth policy.

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::{fmt, iter::FusedIterator, ptr};

/// Owned iterator returned by `GrowVec::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`].
pub struct IntoIter<T> {
    // `v.len` is kept at 0: the live range is tracked by `front..back`, so
    // the vector's own `Drop` only releases the buffer.
    pub(crate) v: GrowVec<T>,
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<T> IntoIter<T> {
    /// The elements not yet yielded, as a slice.
    pub fn as_slice(&self) -> &[T] {
        let rest = &self.v.slots()[self.front..self.back];
        // SAFETY: `buf[front..back)` holds the elements not yet read out,
        // all of which are initialized.
        unsafe { core::slice::from_raw_parts(rest.as_ptr().cast::<T>(), rest.len()) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` was in `front..back` and is now excluded.
            Some(unsafe { self.v.slots_mut()[i].assume_init_read() })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            let i = self.back;
            // SAFETY: `i` was in `front..back` and is now excluded.
            Some(unsafe { self.v.slots_mut()[i].assume_init_read() })
        } else {
            None
        }
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let rest: *mut [T] = {
            let slots = &mut self.v.slots_mut()[self.front..self.back];
            ptr::slice_from_raw_parts_mut(slots.as_mut_ptr().cast::<T>(), slots.len())
        };
        self.front = self.back;
        // SAFETY: the elements in `front..back` were never read out, so they
        // are initialized and dropped exactly once here.
        unsafe { ptr::drop_in_place(rest) };
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut GrowVec<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T> IntoIterator for GrowVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(mut self) -> Self::IntoIter {
        let back = self.len;
        // Ownership of the live elements moves to the iterator.
        self.len = 0;
        IntoIter {
            front: 0,
            back,
            v: self,
        }
    }
}

impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        grow_vec,
        vec::{tests::DropCounter, GrowVec},
    };
    use alloc::{format, string::String, vec::Vec};
    use core::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_double_ended() {
        let v: GrowVec<i32> = grow_vec![10, 20, 30, 40];
        let mut it = v.into_iter();
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.next_back(), Some(40));
        assert_eq!(it.as_slice(), &[20, 30]);
        assert_eq!(it.next(), Some(20));
        assert_eq!(it.next_back(), Some(30));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_size_hint_tracks_consumption() {
        let v: GrowVec<i32> = grow_vec![10, 20, 30, 40];
        let mut it = v.into_iter();
        assert_eq!(it.size_hint(), (4, Some(4)));
        it.next();
        assert_eq!(it.size_hint(), (3, Some(3)));
        it.next_back();
        assert_eq!(it.len(), 2);
        assert_eq!(it.nth(1), Some(30));
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_into_iter_empty() {
        let v: GrowVec<u8> = GrowVec::new();
        let mut it = v.into_iter();
        assert_eq!(it.next(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_partially_consumed_into_iter_drops_rest_once() {
        let drops = Rc::new(Cell::new(0));
        let mut v = GrowVec::new();
        for _ in 0..5 {
            v.push(DropCounter(drops.clone()));
        }
        let mut it = v.into_iter();
        let first = it.next().unwrap();
        let last = it.next_back().unwrap();
        assert_eq!(drops.get(), 0);
        drop(it);
        assert_eq!(drops.get(), 3);
        drop(first);
        drop(last);
        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn test_into_iter_moves_owned_strings() {
        let v: GrowVec<String> = grow_vec![String::from("a"), String::from("b")];
        let joined: Vec<String> = v.into_iter().rev().collect();
        assert_eq!(joined, ["b", "a"]);
    }

    #[test]
    fn test_into_iter_shared_and_mut_refs() {
        let mut v: GrowVec<i32> = grow_vec![1, 2, 3];
        let mut collected = Vec::new();
        for x in &v {
            collected.push(*x);
        }
        assert_eq!(collected, [1, 2, 3]);
        for x in &mut v {
            *x *= 10;
        }
        assert_eq!(v.as_slice(), &[10, 20, 30]);
    }

    #[test]
    fn test_collect_follows_growth_policy() {
        let v: GrowVec<i32> = (0..10).collect();
        assert_eq!(v.len(), 10);
        assert_eq!(v.capacity(), 14);
        assert!(v.iter().copied().eq(0..10));
    }

    #[test]
    fn test_debug_shows_remaining() {
        let v: GrowVec<i32> = grow_vec![1, 2, 3];
        let mut it = v.into_iter();
        it.next();
        assert_eq!(format!("{it:?}"), "IntoIter([2, 3])");
    }
}
