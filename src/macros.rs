// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Creates a [`GrowVec`](crate::GrowVec) from a literal list.
///
/// - `grow_vec![]` is an empty vector with no buffer.
/// - `grow_vec![a, b, c]` holds the listed elements with capacity `2 * n`.
/// - `grow_vec![elem; n]` holds `n` clones of `elem` with capacity `2 * n`.
///
/// ```rust
/// use grow_vec::{grow_vec, GrowVec};
///
/// let v: GrowVec<i32> = grow_vec![1, 2, 3];
/// assert_eq!(v.capacity(), 6);
///
/// let z = grow_vec![0u8; 4];
/// assert_eq!(z.as_slice(), &[0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! grow_vec {
    () => {
        $crate::GrowVec::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::GrowVec::from_elem($elem, $n)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::GrowVec::from([$($x),+])
    };
}
