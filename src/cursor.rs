// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bidirectional cursors over a [`GrowVec`](crate::GrowVec).
//!
//! A cursor is a position within the live elements of one vector. Index
//! `len` is the end sentinel: it compares and moves backwards but does not
//! dereference.
//!
//! - [`Cursor`] is read-only and `Copy`; any number may coexist.
//! - [`CursorMut`] can write through to the element; only one exists at a time.
//!
//! Both share the same position core, so they compare with each other: two
//! cursors are equal iff they belong to the same vector and sit at the same
//! index. Cursors from different vectors are never equal.
//!
//! Cursors borrow the vector, so growth, insertion, erasure, `reserve` or
//! dropping the vector while a cursor is alive does not compile.

// Core imports
use core::{
    fmt,
    ops::{Deref, DerefMut},
};

/// Owner identity plus index; the part both cursor kinds have in common.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Position {
    owner: *const (),
    index: usize,
}

impl Position {
    #[inline]
    fn forward(&mut self, len: usize) {
        assert!(self.index < len, "cursor moved past the end sentinel");
        self.index += 1;
    }

    #[inline]
    fn backward(&mut self) {
        assert!(self.index > 0, "cursor moved before the first element");
        self.index -= 1;
    }
}

const END_DEREF: &str = "dereferenced the end cursor";

/// Read-only cursor returned by [`GrowVec::cbegin`](crate::GrowVec::cbegin)
/// and [`GrowVec::cend`](crate::GrowVec::cend).
pub struct Cursor<'a, T> {
    elements: &'a [T],
    pos: Position,
}

impl<'a, T> Cursor<'a, T> {
    #[inline]
    pub(crate) fn new(elements: &'a [T], owner: *const (), index: usize) -> Self {
        Self {
            elements,
            pos: Position { owner, index },
        }
    }

    /// Current index; `len` at the end sentinel.
    #[inline]
    pub fn index(&self) -> usize {
        self.pos.index
    }

    /// Returns `true` at the end sentinel.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.pos.index == self.elements.len()
    }

    /// The element under the cursor, or `None` at the end sentinel.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        self.elements.get(self.pos.index)
    }

    /// Advances one position (pre-increment).
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end sentinel.
    #[inline]
    pub fn move_next(&mut self) -> &mut Self {
        self.pos.forward(self.elements.len());
        self
    }

    /// Steps back one position (pre-decrement).
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at index 0.
    #[inline]
    pub fn move_prev(&mut self) -> &mut Self {
        self.pos.backward();
        self
    }

    /// Advances one position and returns the cursor as it was (post-increment).
    #[inline]
    pub fn post_next(&mut self) -> Self {
        let before = *self;
        self.move_next();
        before
    }

    /// Steps back one position and returns the cursor as it was (post-decrement).
    #[inline]
    pub fn post_prev(&mut self) -> Self {
        let before = *self;
        self.move_prev();
        before
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Cursor<'_, T> {}

impl<T> Deref for Cursor<'_, T> {
    type Target = T;

    /// # Panics
    ///
    /// Panics at the end sentinel.
    fn deref(&self) -> &T {
        match self.get() {
            Some(x) => x,
            None => panic!("{END_DEREF}"),
        }
    }
}

impl<'b, T> PartialEq<Cursor<'b, T>> for Cursor<'_, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        self.pos == other.pos
    }
}
impl<T> Eq for Cursor<'_, T> {}

impl<'b, T> PartialEq<CursorMut<'b, T>> for Cursor<'_, T> {
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        self.pos == other.pos
    }
}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.pos.index)
            .field("len", &self.elements.len())
            .finish()
    }
}

/// Mutable cursor returned by [`GrowVec::begin`](crate::GrowVec::begin) and
/// [`GrowVec::end`](crate::GrowVec::end).
///
/// Not copyable, so it only offers the pre-increment / pre-decrement forms.
pub struct CursorMut<'a, T> {
    elements: &'a mut [T],
    pos: Position,
}

impl<'a, T> CursorMut<'a, T> {
    #[inline]
    pub(crate) fn new(elements: &'a mut [T], owner: *const (), index: usize) -> Self {
        Self {
            elements,
            pos: Position { owner, index },
        }
    }

    /// Current index; `len` at the end sentinel.
    #[inline]
    pub fn index(&self) -> usize {
        self.pos.index
    }

    /// Returns `true` at the end sentinel.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.pos.index == self.elements.len()
    }

    /// The element under the cursor, or `None` at the end sentinel.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.elements.get(self.pos.index)
    }

    /// The element under the cursor, mutably, or `None` at the end sentinel.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.elements.get_mut(self.pos.index)
    }

    /// Consumes the cursor, returning the element for the full borrow.
    #[inline]
    pub fn into_mut(self) -> Option<&'a mut T> {
        self.elements.get_mut(self.pos.index)
    }

    /// Advances one position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end sentinel.
    #[inline]
    pub fn move_next(&mut self) -> &mut Self {
        self.pos.forward(self.elements.len());
        self
    }

    /// Steps back one position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at index 0.
    #[inline]
    pub fn move_prev(&mut self) -> &mut Self {
        self.pos.backward();
        self
    }

    /// Read-only view at the same position, borrowing this cursor.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            elements: &*self.elements,
            pos: self.pos,
        }
    }

    /// Downgrades into a read-only cursor for the full borrow.
    #[inline]
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor {
            elements: self.elements,
            pos: self.pos,
        }
    }
}

impl<T> Deref for CursorMut<'_, T> {
    type Target = T;

    /// # Panics
    ///
    /// Panics at the end sentinel.
    fn deref(&self) -> &T {
        match self.get() {
            Some(x) => x,
            None => panic!("{END_DEREF}"),
        }
    }
}

impl<T> DerefMut for CursorMut<'_, T> {
    /// # Panics
    ///
    /// Panics at the end sentinel.
    fn deref_mut(&mut self) -> &mut T {
        match self.get_mut() {
            Some(x) => x,
            None => panic!("{END_DEREF}"),
        }
    }
}

impl<'b, T> PartialEq<CursorMut<'b, T>> for CursorMut<'_, T> {
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        self.pos == other.pos
    }
}
impl<T> Eq for CursorMut<'_, T> {}

impl<'b, T> PartialEq<Cursor<'b, T>> for CursorMut<'_, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        self.pos == other.pos
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.pos.index)
            .field("len", &self.elements.len())
            .finish()
    }
}
