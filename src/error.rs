// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `GrowVec`.
//!
//! These errors represent bounds and lookup conditions. They are `Copy` and
//! implement `core::error::Error`. Allocation failure is not represented here:
//! it goes through the global OOM handler and is fatal.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`GrowVec`](crate::GrowVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An index or range bound fell outside the current logical length.
    OutOfRange {
        /// The offending index (for ranges, the offending bound).
        index: usize,
        /// The length of the vector at the time of the call.
        len: usize,
    },
    /// No element matched the requested value.
    NotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::NotFound => f.write_str("element not found"),
        }
    }
}

impl CoreError for Error {}
