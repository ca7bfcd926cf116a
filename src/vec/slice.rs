// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::mem::MaybeUninit;

impl<T> GrowVec<T> {
    /// Views the live prefix `[0..len)` as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: By invariant, all slots in `buf[..self.len]` are initialized
        // and `self.len <= capacity`. With no buffer, `len == 0` and the
        // pointer of the empty slot slice is dangling but aligned.
        unsafe { core::slice::from_raw_parts(self.slots().as_ptr().cast::<T>(), self.len) }
    }

    /// Views the live prefix `[0..len)` as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        // SAFETY: As in `as_slice`; `&mut self` guarantees exclusive access.
        unsafe { core::slice::from_raw_parts_mut(self.slots_mut().as_mut_ptr().cast::<T>(), len) }
    }

    /// Returns a raw pointer to the start of the buffer.
    ///
    /// Only the first `len` elements may be read. The pointer is dangling when
    /// the vector owns no buffer, and it is invalidated by any reallocation.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.slots().as_ptr().cast::<T>()
    }

    /// Returns a mutable raw pointer to the start of the buffer.
    ///
    /// Writing past `len` does not change `len`; such writes are not part of
    /// the logical contents.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.slots_mut().as_mut_ptr().cast::<T>()
    }

    /// All allocated slots, initialized or not.
    #[inline]
    pub(crate) fn slots(&self) -> &[MaybeUninit<T>] {
        match self.buf.as_deref() {
            Some(b) => b,
            None => &[],
        }
    }

    #[inline]
    pub(crate) fn slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        match self.buf.as_deref_mut() {
            Some(b) => b,
            None => &mut [],
        }
    }
}
