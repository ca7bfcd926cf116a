// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `grow-vec`
//!
//! A `no_std` (with `alloc`), heap-backed, growable vector with a predictable
//! doubling growth policy and a pair of bidirectional cursors.
//!
//! The core type, [`GrowVec<T>`], owns a single contiguous buffer of
//! `capacity` slots and tracks a logical length `len ∈ 0..=capacity`.
//! Only the prefix `[0..len)` is initialized. An empty vector owns no buffer
//! at all: `capacity() == 0` exactly when nothing is allocated.
//!
//! ## Growth policy
//!
//! Appending to a full vector allocates a new buffer of
//! `max(1, (capacity + 1) * 2)` slots, relocates the live elements into it in
//! order and only then releases the old buffer. Starting from empty, capacities
//! go `0 → 2 → 6 → 14 → 30 …`. Capacity never shrinks unless
//! [`GrowVec::shrink_to_fit`] is called explicitly.
//!
//! [`GrowVec::reserve`] takes the requested **total** capacity, not an
//! additional amount.
//!
//! ## Access and errors
//!
//! - [`GrowVec::at`] / [`GrowVec::at_mut`] are the checked accessors and
//!   return [`Error::OutOfRange`] for an index `>= len`.
//! - Indexing (`v[i]`, `v[a..b]`) panics on out-of-bounds exactly like slices.
//!   The unchecked fast path is the slice method `get_unchecked`, reachable
//!   through `Deref<Target = [T]>`.
//! - [`GrowVec::front`] / [`GrowVec::back`] return `None` on an empty vector.
//!
//! ## Cursors
//!
//! [`GrowVec::cbegin`] / [`GrowVec::cend`] hand out read-only [`Cursor`]s,
//! [`GrowVec::begin`] / [`GrowVec::end`] a mutable [`CursorMut`]. A cursor at
//! index `len` is the end sentinel: it compares and moves but does not
//! dereference. Cursors borrow the vector, so any structural mutation
//! (growth, insert, erase, reserve, drop) while a cursor is alive is a
//! compile-time error.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `GrowVec<T>` as a plain sequence.
//!
//! ## Logging
//!
//! Reallocations are reported through the [`log`] facade at `trace` level,
//! explicit `reserve` / `shrink_to_fit` calls at `debug` level. The crate never
//! installs a logger itself.
//!
//! ## Example
//!
//! ```rust
//! use grow_vec::{grow_vec, GrowVec};
//!
//! let mut v: GrowVec<u32> = grow_vec![1, 2, 3, 4, 5];
//! v.extend_from_slice(&[11, 12, 13]);
//! assert_eq!(v.len(), 8);
//! assert_eq!(v.at(5), Ok(&11));
//! assert!(v.at(8).is_err());
//!
//! let mut it = v.cbegin();
//! let mut sum = 0;
//! while it != v.cend() {
//!     sum += *it;
//!     it.move_next();
//! }
//! assert_eq!(sum, 51);
//! ```
//!
//! `GrowVec` is not safe for unsynchronized concurrent mutation; it is
//! `Send` / `Sync` only when `T` is, and all mutation goes through `&mut`.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod cursor;
mod error;
mod index;
mod iter;
mod macros;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use cursor::{Cursor, CursorMut};
pub use error::Error;
pub use iter::IntoIter;
pub use vec::GrowVec;
