// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate import
use crate::vec::GrowVec;

// Alloc imports
use alloc::vec::Vec;

/// Capacity given to a vector built from a literal list of `n` elements.
///
/// Twice the element count, so a freshly built vector has room to grow
/// before its first reallocation. An empty list allocates nothing.
#[inline]
pub(crate) const fn literal_capacity(n: usize) -> usize {
    n.saturating_mul(2)
}

impl<T> GrowVec<T> {
    /// Constructs a vector holding clones of `src`, in order.
    ///
    /// The capacity is `2 * src.len()`.
    pub fn from_slice(src: &[T]) -> Self
    where
        T: Clone,
    {
        let mut v = Self::with_capacity(literal_capacity(src.len()));
        v.extend_from_slice(src);
        v
    }

    /// Constructs a vector of `n` clones of `elem`. Backs `grow_vec![elem; n]`.
    pub fn from_elem(elem: T, n: usize) -> Self
    where
        T: Clone,
    {
        let mut v = Self::with_capacity(literal_capacity(n));
        if n > 0 {
            v.resize(n, elem);
        }
        v
    }
}

impl<T, const N: usize> From<[T; N]> for GrowVec<T> {
    fn from(src: [T; N]) -> Self {
        let mut v = Self::with_capacity(literal_capacity(N));
        for item in src {
            v.push(item);
        }
        v
    }
}

impl<T: Clone> From<&[T]> for GrowVec<T> {
    fn from(src: &[T]) -> Self {
        Self::from_slice(src)
    }
}

impl<T> From<Vec<T>> for GrowVec<T> {
    fn from(src: Vec<T>) -> Self {
        let mut v = Self::with_capacity(literal_capacity(src.len()));
        v.extend(src);
        v
    }
}

impl<T> From<GrowVec<T>> for Vec<T> {
    fn from(src: GrowVec<T>) -> Self {
        src.into_iter().collect()
    }
}
