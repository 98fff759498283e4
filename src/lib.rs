// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic, fixed-shape matrices and row vectors for Rust.
//!
//! The shape of a [`Matrix`] is part of its type, so every structural rule of
//! linear algebra is enforced by the compiler: operands of an addition must
//! have equal shapes, the inner dimensions of a multiplication must agree,
//! and reshaping a value can neither grow nor shrink its element count.
//! Ill-shaped expressions do not panic; they fail to build.
//!
//! ```
//! use matrical::matrix::Matrix;
//!
//! let a = Matrix::new([
//!     [1, 2, 3],
//!     [4, 5, 6],
//! ]);
//! let b = Matrix::new([
//!     [7, 8],
//!     [9, 10],
//!     [11, 12],
//! ]);
//!
//! // The result shape (2x2) is derived from the operand shapes.
//! assert_eq!(a * b, Matrix::new([
//!     [58, 64],
//!     [139, 154],
//! ]));
//! ```
//!
//! Matrices are plain `repr(C)` values over `[[T; COLS]; ROWS]`, which makes
//! zero-copy reinterpretation sound: a row can be borrowed in place as a
//! [`RowVector`], and a matrix can be viewed as any same-sized shape through
//! [`Matrix::as_resized()`] or [`Matrix::as_square()`].
//!
//! The crate is `no_std` by default; the `std` feature only affects tests and
//! doc examples. Optional integrations are provided for `approx`, `bytemuck`,
//! `matrixcompare`, `mint` and `serde`.
//!
//! [`Matrix`]: ./matrix/struct.Matrix.html
//! [`RowVector`]: ./vector/type.RowVector.html
//! [`Matrix::as_resized()`]: ./matrix/struct.Matrix.html#method.as_resized
//! [`Matrix::as_square()`]: ./matrix/struct.Matrix.html#method.as_square

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod matrix;
pub mod utils;
pub mod vector;

pub use self::{
    matrix::{Matrix, Matrix2, Matrix3, Matrix4},
    vector::{RowVector, RowVector2, RowVector3, RowVector4},
};
