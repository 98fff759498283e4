// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::utils::num::{ClosedAdd, Zero};
use core::ops::Add;

pub mod assertions {
    //! Shape predicates evaluated when a generic function is monomorphized.
    //!
    //! Referencing one of these associated constants inside a generic function
    //! forces the predicate to be checked at compile time for every
    //! instantiation, so an ill-shaped call fails to build rather than run.

    #[non_exhaustive]
    pub struct AssertSameElementCount<
        const R0: usize,
        const C0: usize,
        const R1: usize,
        const C1: usize,
    >;

    impl<const R0: usize, const C0: usize, const R1: usize, const C1: usize>
        AssertSameElementCount<R0, C0, R1, C1>
    {
        pub const ASSERTION: () = assert!(
            R0 * C0 == R1 * C1,
            "reinterpreted shape must have the same element count as the source shape",
        );
    }

    #[non_exhaustive]
    pub struct AssertSubMatrixShape<
        const ROWS: usize,
        const COLS: usize,
        const SUB_ROWS: usize,
        const SUB_COLS: usize,
    >;

    impl<const ROWS: usize, const COLS: usize, const SUB_ROWS: usize, const SUB_COLS: usize>
        AssertSubMatrixShape<ROWS, COLS, SUB_ROWS, SUB_COLS>
    {
        pub const ASSERTION: () = assert!(
            SUB_ROWS + 1 == ROWS && SUB_COLS + 1 == COLS,
            "a sub-matrix has exactly one row and one column fewer than its source",
        );
    }
}

pub mod arrays;
pub mod num;

/// Analogous to [`Iterator::sum()`], but driven by [`Zero`] and [`ClosedAdd`]
/// instead of the `Sum` trait.
///
/// [`Zero`]: ./num/trait.Zero.html
/// [`ClosedAdd`]: ./num/trait.ClosedAdd.html
#[must_use]
#[inline(always)]
pub fn sum<I>(iter: I) -> I::Item
where
    I: IntoIterator,
    I::Item: Zero + ClosedAdd,
{
    iter.into_iter().fold(Zero::ZERO, Add::add)
}

pub use self::arrays::*;
