// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate import
use crate::vec::GrowVec;

impl<T: Clone> Clone for GrowVec<T> {
    /// Deep copy with the same capacity as `self`.
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.capacity());
        for item in self.iter() {
            // Never reallocates: `out` has at least `self.len` slots.
            out.push(item.clone());
        }
        out
    }

    /// Releases the current contents and buffer, then clones `source` into
    /// a fresh buffer of `source.capacity()` slots.
    ///
    /// `a.clone_from(&a)` does not compile, so the release step can never
    /// destroy the source.
    fn clone_from(&mut self, source: &Self) {
        drop(self.take());
        self.reserve(source.capacity());
        for item in source.iter() {
            self.push(item.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        grow_vec,
        vec::{tests::DropCounter, GrowVec},
    };
    use alloc::string::{String, ToString};
    use core::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_clone_copies_len_capacity_and_elements() {
        let mut v: GrowVec<i32> = GrowVec::with_capacity(9);
        v.extend_from_slice(&[1, 2, 3]);
        let c = v.clone();
        assert_eq!(c.len(), 3);
        assert_eq!(c.capacity(), 9);
        assert_eq!(c.as_slice(), v.as_slice());
        assert_ne!(c.as_ptr(), v.as_ptr());
    }

    #[test]
    fn test_clone_is_independent() {
        let a: GrowVec<i32> = grow_vec![1, 2, 3];
        let mut b = a.clone();
        b.push(4);
        b[0] = 10;
        assert_eq!(a.len(), 3);
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        assert_eq!(b.as_slice(), &[10, 2, 3, 4]);
    }

    #[test]
    fn test_clone_empty_does_not_allocate() {
        let v: GrowVec<String> = GrowVec::new();
        let c = v.clone();
        assert!(c.buf.is_none());
    }

    #[test]
    fn test_clone_deep_copies_heap_elements() {
        let a: GrowVec<String> = grow_vec!["one".to_string(), "two".to_string()];
        let mut b = a.clone();
        b[1].push_str("!!");
        assert_eq!(a[1], "two");
        assert_eq!(b[1], "two!!");
    }

    #[test]
    fn test_clone_from_releases_then_copies() {
        let drops = Rc::new(Cell::new(0));
        let mut dst = GrowVec::new();
        dst.push(Rc::new(DropCounter(drops.clone())));
        dst.push(Rc::new(DropCounter(drops.clone())));

        let shared = Rc::new(DropCounter(drops.clone()));
        let mut src = GrowVec::with_capacity(20);
        src.push(shared.clone());

        dst.clone_from(&src);
        assert_eq!(drops.get(), 2);
        assert_eq!(dst.len(), 1);
        assert_eq!(dst.capacity(), 20);
        assert!(Rc::ptr_eq(&dst[0], &shared));
    }

    #[test]
    fn test_clone_from_equal_contents_keeps_state() {
        let mut a: GrowVec<i32> = grow_vec![1, 2, 3];
        let b = a.clone();
        a.clone_from(&b);
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        assert_eq!(a.len(), 3);
        assert_eq!(a.capacity(), b.capacity());
    }
}
