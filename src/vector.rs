// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    matrix::Matrix,
    utils::{
        num::{ClosedAdd, ClosedMul, Zero},
        sum, zip_map,
    },
};

/// A row vector with `N` elements.
///
/// A `RowVector` is a `Matrix` with a single row, so every matrix operation
/// applies to it unchanged; in particular, multiplying a `RowVector<T, N>`
/// with a `Matrix<T, N, COLS>` yields another row vector. The rows of a
/// matrix can also be borrowed in place as row vectors through
/// [`Matrix::as_row_vector()`].
///
/// [`Matrix::as_row_vector()`]: ../matrix/struct.Matrix.html#method.as_row_vector
pub type RowVector<T = f32, const N: usize = 3> = Matrix<T, 1, N>;

pub type RowVector2<T = f32> = RowVector<T, 2>;
pub type RowVector3<T = f32> = RowVector<T, 3>;
pub type RowVector4<T = f32> = RowVector<T, 4>;

impl<T, const N: usize> RowVector<T, N> {
    /// Creates a new `RowVector` from the given array of elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrical::vector::RowVector;
    /// let vector = RowVector::from_array([1, 2, 3]);
    /// assert_eq!(vector.as_slice(), &[1, 2, 3]);
    /// ```
    #[must_use]
    #[inline]
    pub const fn from_array(data: [T; N]) -> Self {
        Self::new([data])
    }

    /// Converts the `RowVector` into its array of elements.
    #[must_use]
    #[inline]
    pub const fn into_array(self) -> [T; N] {
        let data = self.to_array();
        let array = unsafe { core::ptr::read(&data[0]) };
        let _data = core::mem::ManuallyDrop::new(data);
        array
    }
}

impl<T: Zero + Copy + ClosedMul + ClosedAdd, const N: usize> RowVector<T, N> {
    /// Computes the dot product of two row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrical::vector::RowVector;
    /// let a = RowVector::from_array([1, 2, 3]);
    /// let b = RowVector::from_array([4, 5, 6]);
    ///
    /// assert_eq!(a.dot(b), 32);
    /// ```
    #[must_use]
    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        sum(zip_map(self.into_array(), rhs.into_array(), |x, y| x * y))
    }
}

impl<T, const N: usize> From<[T; N]> for RowVector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self::from_array(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{RowVector, RowVector3};
    use crate::matrix::Matrix;

    #[test]
    fn test_row_vector_is_a_single_row_matrix() {
        let vector = RowVector::from_array([1, 2, 3]);
        assert_eq!(vector, Matrix::new([[1, 2, 3]]));
        assert_eq!(RowVector::<i32, 3>::NUM_ROWS, 1);
        assert_eq!(RowVector::<i32, 3>::NUM_COLS, 3);
    }

    #[test]
    fn test_row_vector_matrix_mul() {
        let vector = RowVector::from_array([1, 2]);
        let matrix = Matrix::new([
            [3, 4, 5],
            [6, 7, 8],
        ]);

        let product: RowVector<i32, 3> = vector * matrix;
        assert_eq!(product.into_array(), [15, 18, 21]);
    }

    #[test]
    fn test_dot() {
        let a = RowVector3::from_array([1.0, 3.0, -5.0]);
        let b = RowVector3::from_array([4.0, -2.0, -1.0]);

        assert_eq!(a.dot(b), 3.0);
        assert_eq!(b.dot(a), 3.0);
    }

    #[test]
    fn test_into_array_round_trip() {
        let data = [9, 8, 7, 6];
        assert_eq!(RowVector::from_array(data).into_array(), data);
    }
}
