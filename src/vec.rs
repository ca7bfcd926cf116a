// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `GrowVec` type and its inherent API.
//!
//! `GrowVec<T>` owns one contiguous heap buffer and tracks a logical length
//! separately from the allocated capacity. Methods mirror slice/vector
//! semantics, with checked (`Result`) variants for the bounds-sensitive
//! operations.
//!
//! Invariants:
//! - `0 <= len <= capacity` always holds.
//! - `buf.is_none()` exactly when `capacity == 0`.
//! - Slots in `buf[..len]` hold initialized `T` values.
//! - Slots in `buf[len..]` are logically uninitialized and are never read as `T`.
//! - All public methods maintain these invariants.

mod clone;
mod cursor;
mod erase;
mod extend;
mod from;
mod insert;
mod new;
mod pop;
mod push;
mod reserve;
mod retain;
mod slice;

// Crate imports
use crate::error::Error;

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem::MaybeUninit,
    ops::{Bound, Deref, DerefMut, Range, RangeBounds},
    ptr,
};

/// A growable, heap-allocated vector with a doubling growth policy.
///
/// `GrowVec<T>` stores its elements in a single exclusively-owned buffer of
/// `capacity` slots and tracks a logical length `len ∈ 0..=capacity`.
///
/// # Layout and invariants
///
/// - The buffer is `Option<Box<[MaybeUninit<T>]>>`; an empty vector that has
///   never grown (or was taken from, or shrunk to zero) owns no allocation.
/// - Only `buf[..len]` is initialized and visible through safe APIs
///   ([`as_slice`](GrowVec::as_slice), indexing, iteration, cursors).
///
/// # Growth
///
/// When a push finds `len == capacity`, the vector allocates a new buffer of
/// `max(1, (capacity + 1) * 2)` slots, relocates every live element into it
/// in order and then releases the old buffer. Pushing is amortized `O(1)`.
/// Capacity never shrinks on its own.
///
/// # Ownership
///
/// - [`Clone`] allocates a buffer with the source's capacity and clones the
///   live elements; the two vectors are fully independent.
/// - Moving a `GrowVec` is `O(1)`. [`take`](GrowVec::take) (or
///   [`core::mem::take`]) moves the contents out and leaves an empty vector
///   with no allocation behind, which is safe to drop or reuse.
/// - [`swap`](GrowVec::swap) exchanges buffers in `O(1)`.
///
/// # Concurrency
///
/// `GrowVec<T>` is `Send`/`Sync` exactly when `T` is. It performs no internal
/// synchronization; all mutation requires `&mut self`.
///
/// # Examples
///
/// ```rust
/// use grow_vec::GrowVec;
///
/// let mut v = GrowVec::new();
/// assert_eq!(v.capacity(), 0);
/// v.push(1);
/// assert_eq!(v.capacity(), 2);
/// v.push(2);
/// v.push(3);
/// assert_eq!(v.capacity(), 6);
/// assert_eq!(v.as_slice(), &[1, 2, 3]);
/// ```
pub struct GrowVec<T> {
    pub(crate) buf: Option<Box<[MaybeUninit<T>]>>,
    pub(crate) len: usize,
}

/// Capacity to grow to when pushing into a full vector of capacity `cap`.
///
/// # Panics
///
/// Panics with `capacity overflow` if the computation overflows `usize`.
#[inline]
pub(crate) const fn next_capacity(cap: usize) -> usize {
    let grown = match cap.checked_add(1) {
        Some(c) => c.checked_mul(2),
        None => None,
    };
    match grown {
        Some(c) if c > 1 => c,
        Some(_) => 1,
        None => panic!("capacity overflow"),
    }
}

/// Resolves `range` against a vector of length `len`.
///
/// Returns [`Error::OutOfRange`] when `start > end` or `end > len`.
pub(crate) fn resolve_range<R: RangeBounds<usize>>(range: R, len: usize) -> Result<Range<usize>, Error> {
    let start = match range.start_bound() {
        Bound::Included(&i) => i,
        Bound::Excluded(&i) => i.checked_add(1).ok_or(Error::OutOfRange { index: i, len })?,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&i) => i.checked_add(1).ok_or(Error::OutOfRange { index: i, len })?,
        Bound::Excluded(&i) => i,
        Bound::Unbounded => len,
    };

    if end > len {
        return Err(Error::OutOfRange { index: end, len });
    }
    if start > end {
        return Err(Error::OutOfRange { index: start, len });
    }
    Ok(start..end)
}

impl<T> GrowVec<T> {
    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.as_ref().map_or(0, |b| b.len())
    }

    /// Returns the current logical length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `capacity - len`, the number of pushes that will not reallocate.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.capacity() - self.len
    }

    /// Checked access: returns [`Error::OutOfRange`] if `index >= len`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        let len = self.len;
        self.as_slice().get(index).ok_or(Error::OutOfRange { index, len })
    }

    /// Checked mutable access: returns [`Error::OutOfRange`] if `index >= len`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.as_mut_slice().get_mut(index).ok_or(Error::OutOfRange { index, len })
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Returns the first element, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first element mutably, or `None` if empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, or `None` if empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns `true` if the vector contains `x` (linear search).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

impl<T> GrowVec<T> {
    /// Drops every element, keeping the allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drops the elements in `[new_len..len)` if `new_len < len`; otherwise a no-op.
    ///
    /// Capacity is unchanged.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail: *mut [T] = &mut self.as_mut_slice()[new_len..];
        // Shrink first so a panicking destructor cannot cause a double drop.
        self.len = new_len;
        // SAFETY: `tail` covers slots that were initialized before `len` was
        // lowered; they are now outside the live prefix and dropped exactly once.
        unsafe { ptr::drop_in_place(tail) };
    }

    /// Resizes to `new_len`, cloning `value` into new slots when growing.
    ///
    /// Growing appends one element at a time, so reallocation follows the
    /// regular growth policy.
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }
        while self.len + 1 < new_len {
            self.push(value.clone());
        }
        self.push(value);
    }

    /// Exchanges the contents (buffer, length and capacity) of two vectors in `O(1)`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Moves the contents out, leaving `self` empty with no allocation.
    #[inline]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }
}

impl<T> Drop for GrowVec<T> {
    fn drop(&mut self) {
        // SAFETY: `as_mut_slice` covers exactly the initialized prefix, which
        // is dropped once here; the buffer itself is released by `Box`.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) };
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

/// Renders the elements in order, separated by single spaces.
///
/// Meant for diagnostics; the exact format is not a stable contract.
impl<T: fmt::Display> fmt::Display for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut it = self.iter();
        if let Some(first) = it.next() {
            write!(f, "{first}")?;
            for x in it {
                write!(f, " {x}")?;
            }
        }
        Ok(())
    }
}

impl<T: PartialEq> PartialEq for GrowVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: PartialEq> PartialEq<[T]> for GrowVec<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}
impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for GrowVec<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}
impl<T: Eq> Eq for GrowVec<T> {}
impl<T: Ord> Ord for GrowVec<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for GrowVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for GrowVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for GrowVec<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for GrowVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for GrowVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for GrowVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for GrowVec<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for GrowVec<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
