// SPDX-License-Identifier: MIT OR Apache-2.0

#[cfg(feature = "serde")]
use core::marker::PhantomData;
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    mem::{self, ManuallyDrop, MaybeUninit},
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
    ptr, slice,
};

#[cfg(feature = "serde")]
use serde_core::{
    de::{self, Deserialize, Deserializer, Error, SeqAccess},
    ser::{Serialize, SerializeTupleStruct, Serializer},
};

use crate::{
    utils::{
        array_assume_init, array_get_checked, array_get_mut_checked, array_get_unchecked,
        array_get_unchecked_mut,
        assertions::{AssertSameElementCount, AssertSubMatrixShape},
        num::{ClosedAdd, ClosedMul, One, Zero},
        sum, zip_map,
    },
    vector::RowVector,
};

#[cfg(test)]
mod tests;

/// A row-major matrix whose dimensions are fixed at compile time.
///
/// Shape constraints on every operation are carried by the types themselves:
/// adding matrices of unequal shapes, or multiplying a pair whose inner
/// dimensions disagree, is a build failure rather than a runtime error.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd)]
#[repr(C)]
pub struct Matrix<T = f32, const ROWS: usize = 4, const COLS: usize = 4> {
    data: [[T; COLS]; ROWS],
}

impl<T: Default, const ROWS: usize, const COLS: usize> Default for Matrix<T, ROWS, COLS> {
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_, _| Default::default())
    }
}

impl<T, const ROWS: usize, const COLS: usize> Matrix<T, ROWS, COLS> {
    pub const NUM_ROWS: usize = ROWS;
    pub const NUM_COLS: usize = COLS;
    pub const NUM_ELEMENTS: usize = ROWS * COLS;

    /// Create a new `Matrix` from the given nested array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrical::matrix::Matrix;
    /// let data: [[i32; 2]; 2] = [[1, 2], [3, 4]];
    /// let matrix: Matrix<i32, 2, 2> = Matrix::new(data);
    /// # let _matrix = matrix;
    /// ```
    #[must_use]
    #[inline]
    pub const fn new(data: [[T; COLS]; ROWS]) -> Self {
        Self { data }
    }

    #[must_use]
    #[inline]
    pub fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        let mut mat = Matrix::uninit();

        let mut row = 0;
        while row < ROWS {
            let mut col = 0;
            while col < COLS {
                unsafe {
                    mat.get_unchecked_mut(row, col).write(f(row, col));
                }

                col += 1;
            }
            row += 1;
        }

        unsafe { Matrix::assume_init(mat) }
    }

    /// Creates a new `Matrix`, where every element is uninitialized.
    #[must_use]
    #[inline]
    pub const fn uninit() -> Matrix<MaybeUninit<T>, ROWS, COLS> {
        unsafe { mem::transmute_copy(&MaybeUninit::<Matrix<T, ROWS, COLS>>::uninit()) }
    }

    /// Returns a reference to the inner array of the matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrical::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    ///
    /// let array: &[[i32; 3]; 2] = matrix.as_array();
    /// assert_eq!(array[0], [1, 2, 3]);
    /// ```
    #[must_use]
    #[inline]
    pub const fn as_array(&self) -> &[[T; COLS]; ROWS] {
        &self.data
    }

    /// Returns a mutable reference to the inner array of the matrix.
    #[must_use]
    #[inline]
    pub const fn as_array_mut(&mut self) -> &mut [[T; COLS]; ROWS] {
        &mut self.data
    }

    #[must_use]
    #[inline]
    pub const fn to_array(self) -> [[T; COLS]; ROWS] {
        let array = unsafe { ptr::read(&self.data) };
        let _self = ManuallyDrop::new(self);
        array
    }

    /// Returns the elements of the matrix as a flattened, row-major slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrical::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    ///
    /// assert_eq!(matrix.as_slice(), &[1, 2, 3, 4, 5, 6]);
    /// ```
    #[must_use]
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.as_ptr(), ROWS * COLS) }
    }

    /// Returns the elements of the matrix as a flattened, row-major mutable slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrical::matrix::Matrix;
    /// let mut matrix = Matrix::new([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    ///
    /// matrix.as_mut_slice()[4] = 9;
    ///
    /// assert_eq!(matrix, Matrix::new([
    ///     [1, 2, 3],
    ///     [4, 9, 6],
    /// ]));
    /// ```
    #[must_use]
    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), ROWS * COLS) }
    }

    /// Access the start of the `Matrix`'s element data as a pointer.
    #[must_use]
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.data.as_ptr().cast()
    }

    /// Access the start of the `Matrix`'s element data as a mutable pointer.
    #[must_use]
    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr().cast()
    }

    /// Attempt to get a reference to the element at `Matrix[row][col]`.
    ///
    /// This method returns `None` if either of the given indices are out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrical::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [5, 6],
    ///     [1, 3],
    /// ]);
    ///
    /// assert_eq!(matrix.get(1, 1), Some(&3));
    /// assert_eq!(matrix.get(6, 3), None);
    /// ```
    #[must_use]
    #[inline]
    pub const fn get(&self, row: usize, col: usize) -> Option<&T> {
        match array_get_checked(&self.data, row) {
            Some(row_data) => array_get_checked(row_data.as_slice(), col),
            None => None,
        }
    }

    /// Attempt to get a mutable reference to the element at `Matrix[row][col]`.
    ///
    /// This method returns `None` if either of the given indices are out of bounds.
    #[must_use]
    #[inline]
    pub const fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        match array_get_mut_checked(&mut self.data, row) {
            Some(row_data) => array_get_mut_checked(row_data.as_mut_slice(), col),
            None => None,
        }
    }

    /// Get a reference to the element at index `row` and `col` without performing
    /// any bounds checks.
    ///
    /// # Safety
    ///
    /// You must ensure that `row` and `col` are within the bounds of the `Matrix`,
    /// otherwise this method will cause undefined behavior.
    #[must_use]
    #[inline]
    pub const unsafe fn get_unchecked(&self, row: usize, col: usize) -> &T {
        unsafe { array_get_unchecked(array_get_unchecked(&self.data, row).as_slice(), col) }
    }

    /// Get a mutable reference to the element at index `row` and `col` without
    /// performing any bounds checks.
    ///
    /// # Safety
    ///
    /// You must ensure that `row` and `col` are within the bounds of the `Matrix`,
    /// otherwise this method will cause undefined behavior.
    #[must_use]
    #[inline]
    pub const unsafe fn get_unchecked_mut(&mut self, row: usize, col: usize) -> &mut T {
        unsafe {
            array_get_unchecked_mut(
                array_get_unchecked_mut(&mut self.data, row).as_mut_slice(),
                col,
            )
        }
    }

    /// Returns an array of references to the elements of the row at `n`.
    ///
    /// # Panics
    ///
    /// This method will panic if `n` is equal or greater to `ROWS`.
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn row_ref(&self, n: usize) -> [&T; COLS] {
        match array_get_checked(&self.data, n) {
            Some(row) => row.each_ref(),
            None => panic!("given row index is out of bounds"),
        }
    }

    /// Returns an array of mutable references to the elements of the row at `n`.
    ///
    /// # Panics
    ///
    /// This method will panic if `n` is equal or greater to `ROWS`.
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn row_mut(&mut self, n: usize) -> [&mut T; COLS] {
        match array_get_mut_checked(&mut self.data, n) {
            Some(row) => row.each_mut(),
            None => panic!("given row index is out of bounds"),
        }
    }

    /// Reinterprets the row at `n` in place as a borrowed [`RowVector`].
    ///
    /// No data is copied; the view borrows the matrix's own storage, so it
    /// cannot outlive the matrix.
    ///
    /// # Panics
    ///
    /// This method will panic if `n` is equal or greater to `ROWS`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrical::{matrix::Matrix, vector::RowVector};
    /// let matrix = Matrix::new([
    ///     [1, 2],
    ///     [3, 4],
    ///     [5, 6],
    /// ]);
    ///
    /// let row: &RowVector<i32, 2> = matrix.as_row_vector(1);
    /// assert_eq!(*row, RowVector::from_array([3, 4]));
    /// ```
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn as_row_vector(&self, n: usize) -> &RowVector<T, COLS> {
        let row: &[T; COLS] = match array_get_checked(&self.data, n) {
            Some(row) => row,
            None => panic!("given row index is out of bounds"),
        };

        // `Matrix` is `repr(C)` around `[[T; COLS]; ROWS]`, so a single row
        // and a 1xCOLS matrix share a layout.
        unsafe { &*ptr::from_ref(row).cast::<RowVector<T, COLS>>() }
    }

    /// Reinterprets the row at `n` in place as a mutable, borrowed [`RowVector`].
    ///
    /// Writes through the view are writes to the matrix itself.
    ///
    /// # Panics
    ///
    /// This method will panic if `n` is equal or greater to `ROWS`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrical::matrix::Matrix;
    /// let mut matrix = Matrix::new([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    ///
    /// matrix.as_row_vector_mut(1)[0][0] = 9;
    /// assert_eq!(matrix[1], [9, 4]);
    /// ```
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn as_row_vector_mut(&mut self, n: usize) -> &mut RowVector<T, COLS> {
        let row: &mut [T; COLS] = match array_get_mut_checked(&mut self.data, n) {
            Some(row) => row,
            None => panic!("given row index is out of bounds"),
        };

        unsafe { &mut *ptr::from_mut(row).cast::<RowVector<T, COLS>>() }
    }

    #[inline]
    pub fn zip_map<U, Ret, F: FnMut(T, U) -> Ret>(
        self,
        rhs: Matrix<U, ROWS, COLS>,
        mut f: F,
    ) -> Matrix<Ret, ROWS, COLS> {
        Matrix {
            data: zip_map(self.data, rhs.data, |lhs, rhs| zip_map(lhs, rhs, &mut f)),
        }
    }

    /// Applies the given function `f` to every element of the `Matrix`, returning
    /// a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrical::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    ///
    /// assert_eq!(matrix.map(|elem| elem * 10), Matrix::new([
    ///     [10, 20],
    ///     [30, 40],
    /// ]));
    /// ```
    #[must_use]
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Matrix<U, ROWS, COLS> {
        Matrix {
            data: self.data.map(|row| row.map(&mut f)),
        }
    }

    /// Applies the given function to every row of the `Matrix`, returning a new
    /// matrix.
    #[must_use]
    #[inline]
    pub fn map_rows<U, F: FnMut([T; COLS]) -> [U; COLS]>(self, f: F) -> Matrix<U, ROWS, COLS> {
        Matrix {
            data: self.data.map(f),
        }
    }

    /// Iterate over the elements of the matrix in row-major order.
    #[must_use]
    #[inline]
    pub fn elems(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over the elements of the matrix in row-major order.
    #[must_use]
    #[inline]
    pub fn elems_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Computes the transpose of the matrix.
    ///
    /// This method can be called on matrices of any dimensions. See
    /// [`transpose_in_place()`] for setting a square matrix to its transpose
    /// without creating a new value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrical::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [1, 2, 3, 4],
    ///     [5, 6, 7, 8],
    /// ]);
    ///
    /// assert_eq!(matrix.transpose(), Matrix::new([
    ///     [1, 5],
    ///     [2, 6],
    ///     [3, 7],
    ///     [4, 8],
    /// ]));
    /// ```
    ///
    /// [`transpose_in_place()`]: ./struct.Matrix.html#method.transpose_in_place
    #[must_use]
    #[inline]
    pub const fn transpose(self) -> Matrix<T, COLS, ROWS> {
        let mut transposed = Matrix::uninit();

        let mut row = 0;
        while row < ROWS {
            let mut col = 0;
            while col < COLS {
                unsafe {
                    let write_slot = {
                        let transposed_row = array_get_unchecked_mut(&mut transposed.data, col);
                        array_get_unchecked_mut(transposed_row.as_mut_slice(), row)
                    };

                    write_slot.write(ptr::read(self.get_unchecked(row, col)));
                }

                col += 1;
            }
            row += 1;
        }

        let _self = ManuallyDrop::new(self);
        unsafe { Matrix::assume_init(transposed) }
    }

    /// Converts the matrix into a differently shaped matrix with the same
    /// element count, preserving the row-major order of the elements.
    ///
    /// # Example
    ///
    /// ```
    /// # use matrical::matrix::Matrix;
    /// let m1 = Matrix::new([[1, 2, 3, 4]]);
    /// let m2 = Matrix::new([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    ///
    /// assert_eq!(m1.resize::<2, 2>(), m2);
    /// ```
    ///
    /// A compile time assertion is used to ensure that the number of elements in
    /// the matrix cannot grow or shrink:
    ///
    /// ```compile_fail
    /// # use matrical::matrix::Matrix;
    /// let matrix = Matrix::new([[1, 2, 3, 4]]);
    /// let _ = matrix.resize::<1, 5>();
    /// ```
    ///
    /// ```compile_fail
    /// # use matrical::matrix::Matrix;
    /// let matrix = Matrix::new([[1, 2, 3, 4]]);
    /// let _ = matrix.resize::<1, 3>();
    /// ```
    #[must_use]
    #[inline]
    pub const fn resize<const NEW_ROWS: usize, const NEW_COLS: usize>(
        self,
    ) -> Matrix<T, NEW_ROWS, NEW_COLS> {
        #[allow(path_statements)]
        <AssertSameElementCount<ROWS, COLS, NEW_ROWS, NEW_COLS>>::ASSERTION;

        let this = ManuallyDrop::new(self);
        unsafe { mem::transmute_copy(&this) }
    }

    /// Borrows the matrix as a differently shaped matrix with the same element
    /// count, without copying.
    ///
    /// Like [`resize()`], element-count equality between the two shapes is
    /// checked at compile time; unlike `resize()`, the result is a view whose
    /// lifetime is tied to `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrical::matrix::Matrix;
    /// let matrix = Matrix::new([[1, 2, 3, 4, 5, 6]]);
    /// let reshaped: &Matrix<i32, 2, 3> = matrix.as_resized();
    ///
    /// assert_eq!(*reshaped, Matrix::new([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]));
    /// ```
    ///
    /// [`resize()`]: ./struct.Matrix.html#method.resize
    #[must_use]
    #[inline]
    pub const fn as_resized<const NEW_ROWS: usize, const NEW_COLS: usize>(
        &self,
    ) -> &Matrix<T, NEW_ROWS, NEW_COLS> {
        #[allow(path_statements)]
        <AssertSameElementCount<ROWS, COLS, NEW_ROWS, NEW_COLS>>::ASSERTION;

        unsafe { &*ptr::from_ref(self).cast() }
    }

    /// Mutably borrows the matrix as a differently shaped matrix with the same
    /// element count, without copying.
    #[must_use]
    #[inline]
    pub const fn as_resized_mut<const NEW_ROWS: usize, const NEW_COLS: usize>(
        &mut self,
    ) -> &mut Matrix<T, NEW_ROWS, NEW_COLS> {
        #[allow(path_statements)]
        <AssertSameElementCount<ROWS, COLS, NEW_ROWS, NEW_COLS>>::ASSERTION;

        unsafe { &mut *ptr::from_mut(self).cast() }
    }

    /// Borrows the matrix as a square `N`x`N` matrix occupying the same storage.
    ///
    /// `N * N` must equal `ROWS * COLS`; this is checked at compile time, so a
    /// reinterpretation that does not cover the storage exactly fails to build.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrical::matrix::Matrix;
    /// let matrix = Matrix::new([[1, 2, 3, 4]]);
    /// let square: &Matrix<i32, 2, 2> = matrix.as_square();
    ///
    /// assert_eq!(square[1], [3, 4]);
    /// ```
    #[must_use]
    #[inline]
    pub const fn as_square<const N: usize>(&self) -> &Matrix<T, N, N> {
        self.as_resized::<N, N>()
    }

    /// Mutably borrows the matrix as a square `N`x`N` matrix occupying the same
    /// storage.
    #[must_use]
    #[inline]
    pub const fn as_square_mut<const N: usize>(&mut self) -> &mut Matrix<T, N, N> {
        self.as_resized_mut::<N, N>()
    }

    /// Returns a new matrix, where every element has been wrapped in a `MaybeUninit`.
    #[must_use]
    #[inline]
    pub const fn into_uninit(self) -> Matrix<MaybeUninit<T>, ROWS, COLS> {
        let this = ManuallyDrop::new(self);
        unsafe { mem::transmute_copy(&this) }
    }
}

impl<T, const ROWS: usize, const COLS: usize> Matrix<MaybeUninit<T>, ROWS, COLS> {
    /// # Safety
    ///
    /// Every element of the matrix must have been initialized.
    #[must_use]
    #[inline]
    pub const unsafe fn assume_init(self) -> Matrix<T, ROWS, COLS> {
        unsafe { mem::transmute_copy(&self) }
    }
}

impl<T: Copy, const ROWS: usize, const COLS: usize> Matrix<T, ROWS, COLS> {
    /// Creates a new matrix, where every element of `Matrix` is set to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrical::matrix::Matrix;
    /// let matrix: Matrix<_, 4, 4> = Matrix::splat(21);
    /// assert!(matrix.elems().all(|elem| *elem == 21));
    /// ```
    #[must_use]
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self {
            data: [[value; COLS]; ROWS],
        }
    }

    /// Returns a copy of the row at `n`.
    ///
    /// # Panics
    ///
    /// This method will panic if `n` is equal or greater to `ROWS`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrical::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [0, 1, 2, 3, 4],
    ///     [5, 6, 7, 8, 9],
    /// ]);
    ///
    /// assert_eq!(matrix.row(1), [5, 6, 7, 8, 9]);
    /// ```
    #[track_caller]
    #[must_use]
    #[inline]
    pub const fn row(&self, n: usize) -> [T; COLS] {
        assert!(n < ROWS, "given row index is out of bounds");
        let mut row = [MaybeUninit::uninit(); COLS];

        unsafe {
            ptr::copy_nonoverlapping(
                self.data.as_ptr().add(n).cast::<T>(),
                row.as_mut_ptr().cast(),
                COLS,
            );
        }

        unsafe { array_assume_init(row) }
    }

    /// Returns a copy of the column at `n`.
    ///
    /// # Panics
    ///
    /// This method will panic if `n` is equal or greater to `COLS`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrical::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [0, 1, 2, 3, 4],
    ///     [5, 6, 7, 8, 9],
    /// ]);
    ///
    /// assert_eq!(matrix.col(1), [1, 6]);
    /// ```
    #[track_caller]
    #[must_use]
    #[inline]
    pub const fn col(&self, n: usize) -> [T; ROWS] {
        assert!(n < COLS, "given column index is out of bounds");
        let mut col = [MaybeUninit::uninit(); ROWS];

        let mut row = 0;
        while row < ROWS {
            unsafe {
                array_get_unchecked_mut(col.as_mut_slice(), row)
                    .write(ptr::read(self.get_unchecked(row, n)));
            }
            row += 1;
        }

        unsafe { array_assume_init(col) }
    }

    /// Produces the sub-matrix obtained by deleting `excluded_row` and
    /// `excluded_col` from the matrix, preserving the relative order of the
    /// remaining elements.
    ///
    /// The output shape is named by the caller and checked at compile time: it
    /// must be exactly one row and one column smaller than the source shape,
    /// which also means this method cannot be instantiated for a matrix with
    /// zero rows or zero columns.
    ///
    /// # Panics
    ///
    /// This method will panic if `excluded_row` >= `ROWS`, or `excluded_col` >= `COLS`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrical::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    ///     [7, 8, 9],
    /// ]);
    ///
    /// assert_eq!(matrix.submatrix::<2, 2>(0, 1), Matrix::new([
    ///     [4, 6],
    ///     [7, 9],
    /// ]));
    /// ```
    ///
    /// An output shape that is not exactly one smaller in each dimension fails
    /// to build:
    ///
    /// ```compile_fail
    /// # use matrical::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    ///     [7, 8, 9],
    /// ]);
    /// let _ = matrix.submatrix::<3, 3>(0, 1);
    /// ```
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn submatrix<const SUB_ROWS: usize, const SUB_COLS: usize>(
        &self,
        excluded_row: usize,
        excluded_col: usize,
    ) -> Matrix<T, SUB_ROWS, SUB_COLS> {
        #[allow(path_statements)]
        <AssertSubMatrixShape<ROWS, COLS, SUB_ROWS, SUB_COLS>>::ASSERTION;

        assert!(excluded_row < ROWS, "excluded row index is out of bounds");
        assert!(
            excluded_col < COLS,
            "excluded column index is out of bounds"
        );

        let mut sub = Matrix::uninit();

        for row in 0..ROWS {
            if row == excluded_row {
                continue;
            }

            let sub_row = if row > excluded_row { row - 1 } else { row };

            for col in 0..COLS {
                if col == excluded_col {
                    continue;
                }

                let sub_col = if col > excluded_col { col - 1 } else { col };

                unsafe {
                    sub.get_unchecked_mut(sub_row, sub_col)
                        .write(*self.get_unchecked(row, col));
                }
            }
        }

        unsafe { Matrix::assume_init(sub) }
    }
}

impl<T: Zero, const ROWS: usize, const COLS: usize> Matrix<T, ROWS, COLS> {
    /// Creates a matrix of the declared shape with every element set to `T`'s
    /// additive identity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrical::matrix::Matrix;
    /// let matrix = Matrix::<i32, 2, 3>::zero();
    /// assert!(matrix.elems().all(|elem| *elem == 0));
    /// ```
    #[must_use]
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }
}

impl<T: Zero, const ROWS: usize, const COLS: usize> Zero for Matrix<T, ROWS, COLS> {
    const ZERO: Self = Matrix::new(Zero::ZERO);
}

impl<T: Zero + One, const N: usize> Matrix<T, N, N> {
    /// Constructs an instance of the identity matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrical::matrix::Matrix;
    /// let matrix = Matrix::<f64, 3, 3>::identity();
    ///
    /// assert_eq!(matrix, Matrix::new([
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]));
    /// ```
    #[must_use]
    #[inline]
    pub const fn identity() -> Self {
        let mut mat = Matrix::ZERO.into_uninit();

        let mut i = 0;
        while i < N {
            unsafe {
                mat.get_unchecked_mut(i, i).write(T::ONE);
            }
            i += 1;
        }

        unsafe { Matrix::assume_init(mat) }
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Transposes the matrix by swapping elements around the diagonal, without
    /// creating a new intermediate matrix.
    ///
    /// To compute the transpose of an arbitrarily-shaped matrix, use the
    /// [`transpose()`] method.
    ///
    /// [`transpose()`]: ./struct.Matrix.html#method.transpose
    #[inline]
    pub fn transpose_in_place(&mut self) {
        let slice = self.as_mut_slice();

        for row in 0..N {
            for col in (row + 1)..N {
                slice.swap(row * N + col, col * N + row);
            }
        }
    }
}

impl<T, const ROWS: usize, const COLS: usize> Index<usize> for Matrix<T, ROWS, COLS> {
    type Output = [T; COLS];

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T, const ROWS: usize, const COLS: usize> IndexMut<usize> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T, const ROWS: usize, const COLS: usize> Index<(usize, usize)> for Matrix<T, ROWS, COLS> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row][col]
    }
}

impl<T, const ROWS: usize, const COLS: usize> IndexMut<(usize, usize)> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row][col]
    }
}

impl<T, const A: usize, const B: usize, const C: usize> Mul<Matrix<T, B, C>> for Matrix<T, A, B>
where
    T: Zero + Copy + ClosedMul + ClosedAdd,
{
    type Output = Matrix<T, A, C>;

    /// Matrix multiplication; only defined when the left operand's column count
    /// equals the right operand's row count, so an incompatible pair of shapes
    /// fails to compile.
    #[inline]
    fn mul(self, rhs: Matrix<T, B, C>) -> Self::Output {
        let mut out_matrix: Matrix<_, A, C> = Matrix::uninit();

        for row in 0..A {
            for col in 0..C {
                let x = self.row(row);
                let y = rhs.col(col);

                unsafe {
                    out_matrix
                        .get_unchecked_mut(row, col)
                        .write(sum(zip_map(x, y, Mul::mul)));
                }
            }
        }

        unsafe { Matrix::assume_init(out_matrix) }
    }
}

impl<T: Copy + Mul, const ROWS: usize, const COLS: usize> Mul<T> for Matrix<T, ROWS, COLS> {
    type Output = Matrix<T::Output, ROWS, COLS>;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

impl<T: Copy + Div, const ROWS: usize, const COLS: usize> Div<T> for Matrix<T, ROWS, COLS> {
    type Output = Matrix<T::Output, ROWS, COLS>;

    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

impl<T: MulAssign<U>, U: Copy, const ROWS: usize, const COLS: usize> MulAssign<U>
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn mul_assign(&mut self, rhs: U) {
        for elem in self.elems_mut() {
            elem.mul_assign(rhs);
        }
    }
}

impl<T: DivAssign<U>, U: Copy, const ROWS: usize, const COLS: usize> DivAssign<U>
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn div_assign(&mut self, rhs: U) {
        for elem in self.elems_mut() {
            elem.div_assign(rhs);
        }
    }
}

impl<T: Add<U>, U, const ROWS: usize, const COLS: usize> Add<Matrix<U, ROWS, COLS>>
    for Matrix<T, ROWS, COLS>
{
    type Output = Matrix<T::Output, ROWS, COLS>;

    #[inline]
    fn add(self, rhs: Matrix<U, ROWS, COLS>) -> Self::Output {
        self.zip_map(rhs, Add::add)
    }
}

impl<T: AddAssign<U>, U, const ROWS: usize, const COLS: usize> AddAssign<Matrix<U, ROWS, COLS>>
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn add_assign(&mut self, rhs: Matrix<U, ROWS, COLS>) {
        for (lhs, rhs) in self.elems_mut().zip(rhs.to_array().into_iter().flatten()) {
            lhs.add_assign(rhs);
        }
    }
}

impl<T: Sub<U>, U, const ROWS: usize, const COLS: usize> Sub<Matrix<U, ROWS, COLS>>
    for Matrix<T, ROWS, COLS>
{
    type Output = Matrix<T::Output, ROWS, COLS>;

    #[inline]
    fn sub(self, rhs: Matrix<U, ROWS, COLS>) -> Self::Output {
        self.zip_map(rhs, Sub::sub)
    }
}

impl<T: SubAssign<U>, U, const ROWS: usize, const COLS: usize> SubAssign<Matrix<U, ROWS, COLS>>
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn sub_assign(&mut self, rhs: Matrix<U, ROWS, COLS>) {
        for (lhs, rhs) in self.elems_mut().zip(rhs.to_array().into_iter().flatten()) {
            lhs.sub_assign(rhs);
        }
    }
}

impl<T: Neg, const ROWS: usize, const COLS: usize> Neg for Matrix<T, ROWS, COLS> {
    type Output = Matrix<T::Output, ROWS, COLS>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(Neg::neg)
    }
}

/// Renders the matrix as text: elements within a row separated by a single
/// space, and every row, including the last, terminated by a newline.
///
/// # Examples
///
/// ```
/// # use matrical::matrix::Matrix;
/// let matrix = Matrix::new([
///     [1, 2],
///     [3, 4],
/// ]);
///
/// assert_eq!(matrix.to_string(), "1 2\n3 4\n");
/// ```
impl<T: fmt::Display, const ROWS: usize, const COLS: usize> fmt::Display for Matrix<T, ROWS, COLS> {
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            let mut elems = row.iter();
            if let Some(first) = elems.next() {
                write!(fmtr, "{first}")?;
            }

            for elem in elems {
                write!(fmtr, " {elem}")?;
            }

            fmtr.write_str("\n")?;
        }

        Ok(())
    }
}

impl<T, const ROWS: usize, const COLS: usize> From<[[T; COLS]; ROWS]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn from(value: [[T; COLS]; ROWS]) -> Self {
        Self::new(value)
    }
}

impl<T, const ROWS: usize, const COLS: usize> From<Matrix<T, ROWS, COLS>> for [[T; COLS]; ROWS] {
    #[inline]
    fn from(value: Matrix<T, ROWS, COLS>) -> Self {
        value.to_array()
    }
}

impl<T, const ROWS: usize, const COLS: usize> AsRef<[T]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const ROWS: usize, const COLS: usize> AsMut<[T]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const ROWS: usize, const COLS: usize> Borrow<[T]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const ROWS: usize, const COLS: usize> BorrowMut<[T]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const ROWS: usize, const COLS: usize> AsRef<[[T; COLS]; ROWS]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn as_ref(&self) -> &[[T; COLS]; ROWS] {
        self.as_array()
    }
}

impl<T, const ROWS: usize, const COLS: usize> AsMut<[[T; COLS]; ROWS]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn as_mut(&mut self) -> &mut [[T; COLS]; ROWS] {
        self.as_array_mut()
    }
}

impl<T, const ROWS: usize, const COLS: usize> Borrow<[[T; COLS]; ROWS]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn borrow(&self) -> &[[T; COLS]; ROWS] {
        self.as_array()
    }
}

impl<T, const ROWS: usize, const COLS: usize> BorrowMut<[[T; COLS]; ROWS]>
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn borrow_mut(&mut self) -> &mut [[T; COLS]; ROWS] {
        self.as_array_mut()
    }
}

/// A 2x2 matrix.
pub type Matrix2<T = f32> = Matrix<T, 2, 2>;

/// A 3x3 matrix.
pub type Matrix3<T = f32> = Matrix<T, 3, 3>;

/// A 4x4 matrix.
pub type Matrix4<T = f32> = Matrix<T, 4, 4>;

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const ROWS: usize, const COLS: usize> bytemuck::Zeroable
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn zeroed() -> Self {
        Matrix::from_fn(|_, _| bytemuck::Zeroable::zeroed())
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const ROWS: usize, const COLS: usize> bytemuck::Pod
    for Matrix<T, ROWS, COLS>
{
}

#[cfg(feature = "matrixcompare")]
impl<T: Copy, const ROWS: usize, const COLS: usize> matrixcompare_core::Matrix<T>
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn rows(&self) -> usize {
        ROWS
    }

    #[inline]
    fn cols(&self) -> usize {
        COLS
    }

    #[inline]
    fn access(&'_ self) -> matrixcompare_core::Access<'_, T> {
        matrixcompare_core::Access::Dense(self)
    }
}

#[cfg(feature = "matrixcompare")]
impl<T: Copy, const ROWS: usize, const COLS: usize> matrixcompare_core::DenseAccess<T>
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn fetch_single(&self, row: usize, col: usize) -> T {
        self[row][col]
    }
}

#[cfg(feature = "approx")]
impl<T: approx::AbsDiffEq, const ROWS: usize, const COLS: usize> approx::AbsDiffEq
    for Matrix<T, ROWS, COLS>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.elems()
            .zip(other.as_slice())
            .all(|(x, y)| x.abs_diff_eq(y, epsilon))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::RelativeEq, const ROWS: usize, const COLS: usize> approx::RelativeEq
    for Matrix<T, ROWS, COLS>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.elems()
            .zip(other.as_slice())
            .all(|(x, y)| x.relative_eq(y, epsilon, max_relative))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::UlpsEq, const ROWS: usize, const COLS: usize> approx::UlpsEq
    for Matrix<T, ROWS, COLS>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.elems()
            .zip(other.as_slice())
            .all(|(x, y)| x.ulps_eq(y, epsilon, max_ulps))
    }
}

#[cfg(feature = "serde")]
impl<T: Serialize, const ROWS: usize, const COLS: usize> Serialize for Matrix<T, ROWS, COLS> {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            let mut struct_serializer = serializer.serialize_tuple_struct("Matrix", ROWS * COLS)?;
            for elem in self.as_slice() {
                struct_serializer.serialize_field(elem)?;
            }
            struct_serializer.end()
        } else {
            serializer.collect_seq(self.elems())
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>, const ROWS: usize, const COLS: usize> Deserialize<'de>
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ExpectedMatrixData<const ROWS: usize, const COLS: usize>;

        impl<const ROWS: usize, const COLS: usize> de::Expected for ExpectedMatrixData<ROWS, COLS> {
            #[inline]
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    formatter,
                    "a sequence of {} row-major matrix elements",
                    ROWS * COLS
                )
            }
        }

        struct Visitor<T, const ROWS: usize, const COLS: usize>(PhantomData<Matrix<T, ROWS, COLS>>);

        impl<'de, T: Deserialize<'de>, const ROWS: usize, const COLS: usize> de::Visitor<'de>
            for Visitor<T, ROWS, COLS>
        {
            type Value = Matrix<T, ROWS, COLS>;

            #[inline]
            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                de::Expected::fmt(&ExpectedMatrixData::<ROWS, COLS>, formatter)
            }

            #[inline]
            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut ret_val = Matrix::<T, ROWS, COLS>::uninit();

                let mut i = 0;
                while let Some(item) = seq.next_element::<T>()? {
                    if i >= ROWS * COLS {
                        return Err(A::Error::invalid_length(
                            i + 1,
                            &ExpectedMatrixData::<ROWS, COLS>,
                        ));
                    }

                    if let Some(slot) = ret_val.get_mut(i / COLS, i % COLS) {
                        slot.write(item);
                    }

                    i += 1;
                }

                if i < ROWS * COLS {
                    return Err(A::Error::invalid_length(
                        i,
                        &ExpectedMatrixData::<ROWS, COLS>,
                    ));
                }

                unsafe { Ok(Matrix::assume_init(ret_val)) }
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_tuple_struct("Matrix", ROWS * COLS, Visitor(PhantomData))
        } else {
            deserializer.deserialize_seq(Visitor(PhantomData))
        }
    }
}

#[cfg(feature = "mint")]
macro_rules! impl_mint_conversions {
    (
        $(
            $matrix_name:ident => ($rows:literal, $cols:literal) [ $( $row_field:ident ),+ $(,)? ]
        )*
    ) => {
        $(
            impl<T> From<mint::$matrix_name<T>> for Matrix<T, $rows, $cols> {
                #[inline]
                fn from(value: mint::$matrix_name<T>) -> Self {
                    Matrix::new([
                        $( value.$row_field.into(), )+
                    ])
                }
            }

            impl<T> From<Matrix<T, $rows, $cols>> for mint::$matrix_name<T> {
                #[inline]
                fn from(value: Matrix<T, $rows, $cols>) -> Self {
                    mint::$matrix_name::from(value.to_array())
                }
            }

            impl<T> mint::IntoMint for Matrix<T, $rows, $cols> {
                type MintType = mint::$matrix_name<T>;
            }

            impl<T: PartialEq> PartialEq<mint::$matrix_name<T>> for Matrix<T, $rows, $cols> {
                #[inline]
                fn eq(&self, other: &mint::$matrix_name<T>) -> bool {
                    let rhs: &[[T; $cols]; $rows] = other.as_ref();
                    PartialEq::eq(self.as_array(), rhs)
                }
            }

            impl<T: PartialEq> PartialEq<Matrix<T, $rows, $cols>> for mint::$matrix_name<T> {
                #[inline]
                fn eq(&self, other: &Matrix<T, $rows, $cols>) -> bool {
                    let lhs: &[[T; $cols]; $rows] = self.as_ref();
                    PartialEq::eq(lhs, other.as_array())
                }
            }
        )*
    };
}

#[cfg(feature = "mint")]
impl_mint_conversions! {
    RowMatrix2 => (2, 2) [x, y]
    RowMatrix3 => (3, 3) [x, y, z]
    RowMatrix4 => (4, 4) [x, y, z, w]

    RowMatrix2x3 => (2, 3) [x, y]
    RowMatrix2x4 => (2, 4) [x, y]
    RowMatrix3x2 => (3, 2) [x, y, z]
    RowMatrix3x4 => (3, 4) [x, y, z]
    RowMatrix4x2 => (4, 2) [x, y, z, w]
    RowMatrix4x3 => (4, 3) [x, y, z, w]
}
