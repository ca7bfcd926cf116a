// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    cursor::{Cursor, CursorMut},
    vec::GrowVec,
};

impl<T> GrowVec<T> {
    #[inline]
    fn identity(&self) -> *const () {
        (self as *const Self).cast()
    }

    /// Mutable cursor at the first element (the end sentinel when empty).
    #[inline]
    pub fn begin(&mut self) -> CursorMut<'_, T> {
        let owner = self.identity();
        CursorMut::new(self.as_mut_slice(), owner, 0)
    }

    /// Mutable cursor at the end sentinel, one past the last element.
    #[inline]
    pub fn end(&mut self) -> CursorMut<'_, T> {
        let owner = self.identity();
        let len = self.len;
        CursorMut::new(self.as_mut_slice(), owner, len)
    }

    /// Read-only cursor at the first element (the end sentinel when empty).
    #[inline]
    pub fn cbegin(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), self.identity(), 0)
    }

    /// Read-only cursor at the end sentinel, one past the last element.
    #[inline]
    pub fn cend(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), self.identity(), self.len)
    }
}
