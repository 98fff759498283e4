// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    matrix::{Matrix, Matrix2, Matrix3},
    utils::num::Zero,
    vector::RowVector,
};

#[test]
fn test_matrix_access() {
    #[rustfmt::skip]
    let mut matrix = Matrix::new([
        [01, 02, 03, 04, 05],
        [06, 07, 08, 09, 10],
        [11, 12, 13, 14, 15],
        [16, 17, 18, 19, 20],
        [21, 22, 23, 24, 25],
    ]);

    assert_eq!(matrix.row(2), [11, 12, 13, 14, 15]);
    assert_eq!(matrix.col(4), [05, 10, 15, 20, 25]);

    for i in 0..5 {
        assert_eq!(matrix.row_ref(i).map(|elem| *elem), matrix.row(i));
        assert_eq!(matrix.row_mut(i).map(|elem| *elem), matrix.row(i));
    }

    assert_eq!(matrix.get(1, 3), Some(&9));
    assert_eq!(matrix.get(5, 0), None);
    assert_eq!(matrix.get(0, 5), None);
    assert_eq!(matrix.get_mut(4, 4), Some(&mut 25));
    assert_eq!(matrix.get_mut(4, 5), None);

    unsafe {
        assert_eq!(*matrix.get_unchecked(3, 1), 17);
        *matrix.get_unchecked_mut(3, 1) = 99;
    }

    assert_eq!(matrix[3][1], 99);
    assert_eq!(matrix[(3, 1)], 99);

    matrix[(3, 1)] = 17;
    assert_eq!(matrix[3], [16, 17, 18, 19, 20]);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_row_index_out_of_bounds() {
    let matrix = Matrix::new([[1, 2], [3, 4]]);
    let _ = matrix.row(2);
}

#[test]
fn test_shape_constants() {
    assert_eq!(Matrix::<u8, 3, 7>::NUM_ROWS, 3);
    assert_eq!(Matrix::<u8, 3, 7>::NUM_COLS, 7);
    assert_eq!(Matrix::<u8, 3, 7>::NUM_ELEMENTS, 21);
}

#[test]
fn test_construction() {
    let from_fn = Matrix::<usize, 2, 3>::from_fn(|row, col| row * 10 + col);

    #[rustfmt::skip]
    assert_eq!(from_fn, Matrix::new([
        [00, 01, 02],
        [10, 11, 12],
    ]));

    let splat: Matrix<_, 3, 3> = Matrix::splat(8);
    assert!(splat.elems().all(|elem| *elem == 8));

    let default = Matrix::<i32, 2, 2>::default();
    assert_eq!(default, Matrix::zero());
}

#[test]
fn test_zero() {
    let zero = Matrix::<i32, 3, 2>::zero();
    assert!(zero.elems().all(|elem| *elem == 0));
    assert_eq!(zero, Matrix::ZERO);

    // The additive identity.
    let matrix = Matrix::new([[4, -2], [0, 9], [7, 1]]);
    assert_eq!(matrix + zero, matrix);
    assert_eq!(zero + matrix, matrix);
}

#[test]
fn test_identity() {
    #[rustfmt::skip]
    let matrix = Matrix::new([
        [1, 2, 3],
        [4, 5, 6],
        [7, 8, 9],
    ]);

    let identity = Matrix3::identity();

    assert_eq!(matrix * identity, matrix);
    assert_eq!(identity * matrix, matrix);

    #[rustfmt::skip]
    assert_eq!(identity, Matrix::new([
        [1, 0, 0],
        [0, 1, 0],
        [0, 0, 1],
    ]));
}

#[test]
fn test_add_sub() {
    let a = Matrix::new([[1, 2], [3, 4]]);
    let b = Matrix::new([[10, 20], [30, 40]]);

    assert_eq!(a + b, Matrix::new([[11, 22], [33, 44]]));
    assert_eq!(a + b, b + a);
    assert_eq!((a + b) - b, a);
    assert_eq!(a - a, Matrix::zero());
    assert_eq!(-a, Matrix::new([[-1, -2], [-3, -4]]));

    let mut c = a;
    c += b;
    assert_eq!(c, a + b);
    c -= b;
    assert_eq!(c, a);
}

#[test]
fn test_scalar_mul_div() {
    let matrix = Matrix::new([[2, 4], [6, 8]]);

    assert_eq!(matrix * 3, Matrix::new([[6, 12], [18, 24]]));
    assert_eq!(matrix / 2, Matrix::new([[1, 2], [3, 4]]));

    let mut scaled = matrix;
    scaled *= 10;
    assert_eq!(scaled, Matrix::new([[20, 40], [60, 80]]));
    scaled /= 10;
    assert_eq!(scaled, matrix);
}

#[test]
fn test_algebraic_laws() {
    // A non-square shape exercises the same laws as a square one.
    let a = Matrix::new([[1, -2, 3], [4, 0, -6]]);
    let b = Matrix::new([[7, 8, -9], [-1, 2, 5]]);
    let c = Matrix::new([[0, 4, 1], [3, -7, 2]]);

    assert_eq!((a + b) + c, a + (b + c));
    assert_eq!((a * 5) * 3, a * (5 * 3));
    assert_eq!(a * 1, a);

    let square = Matrix::new([[2, -1], [0, 3]]);
    assert_eq!((square + square) + square, square + (square + square));
    assert_eq!((square * -2) * 4, square * -8);
    assert_eq!(square * 1, square);
}

#[test]
fn test_wrapping_and_saturating_elements() {
    use core::num::{Saturating, Wrapping};

    let matrix = Matrix::new([
        [Wrapping(i32::MAX), Wrapping(2)],
        [Wrapping(3), Wrapping(4)],
    ]);

    let identity = Matrix2::<Wrapping<i32>>::identity();
    assert_eq!(matrix * identity, matrix);

    let doubled = matrix + matrix;
    assert_eq!(doubled[(0, 0)], Wrapping(i32::MAX) + Wrapping(i32::MAX));

    let saturating = Matrix::new([[Saturating(i32::MAX), Saturating(1)]]);
    assert_eq!(saturating + Matrix::<Saturating<i32>, 1, 2>::zero(), saturating);
    assert_eq!((saturating + saturating)[(0, 0)], Saturating(i32::MAX));
}

#[test]
fn test_matrix_mul() {
    #[rustfmt::skip]
    let a = Matrix::new([
        [1, 2, 3],
        [4, 5, 6],
    ]);

    #[rustfmt::skip]
    let b = Matrix::new([
        [07, 08],
        [09, 10],
        [11, 12],
    ]);

    // 2x3 times 3x2 gives a 2x2 result.
    let product: Matrix2<i32> = a * b;

    #[rustfmt::skip]
    assert_eq!(product, Matrix::new([
        [058, 064],
        [139, 154],
    ]));
}

#[test]
fn test_matrix_mul_associativity() {
    let a = Matrix::new([[1, 2], [3, 4], [5, 6]]);
    let b = Matrix::new([[7, 8, 9], [10, 11, 12]]);
    let c = Matrix::new([[1, 0], [2, 1], [0, 3]]);

    assert_eq!((a * b) * c, a * (b * c));
}

#[test]
fn test_matrix_mul_distributes_over_add() {
    let a = Matrix::new([[2, -1], [0, 3]]);
    let b = Matrix::new([[1, 4], [5, 2]]);
    let c = Matrix::new([[3, 3], [1, -2]]);

    assert_eq!(a * (b + c), a * b + a * c);
    assert_eq!((b + c) * a, b * a + c * a);
}

#[test]
fn test_row_vector_view_aliases_storage() {
    #[rustfmt::skip]
    let mut matrix = Matrix::new([
        [1, 2],
        [3, 4],
        [5, 6],
    ]);

    {
        let row: &RowVector<i32, 2> = matrix.as_row_vector(1);
        assert_eq!(*row, RowVector::from_array([3, 4]));
    }

    // Writes through the view land in the matrix itself.
    matrix.as_row_vector_mut(1)[0][0] = 30;
    assert_eq!(matrix[1], [30, 4]);
    assert_eq!(*matrix.as_row_vector(1), RowVector::from_array([30, 4]));
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_row_vector_view_out_of_bounds() {
    let matrix = Matrix::new([[1, 2], [3, 4]]);
    let _ = matrix.as_row_vector(2);
}

#[test]
fn test_submatrix() {
    #[rustfmt::skip]
    let matrix = Matrix::new([
        [1, 2, 3],
        [4, 5, 6],
        [7, 8, 9],
    ]);

    #[rustfmt::skip]
    assert_eq!(matrix.submatrix::<2, 2>(0, 1), Matrix::new([
        [4, 6],
        [7, 9],
    ]));

    #[rustfmt::skip]
    assert_eq!(matrix.submatrix::<2, 2>(2, 2), Matrix::new([
        [1, 2],
        [4, 5],
    ]));

    #[rustfmt::skip]
    assert_eq!(matrix.submatrix::<2, 2>(1, 1), Matrix::new([
        [1, 3],
        [7, 9],
    ]));
}

#[test]
fn test_submatrix_of_non_square() {
    #[rustfmt::skip]
    let matrix = Matrix::new([
        [1, 2, 3, 4],
        [5, 6, 7, 8],
    ]);

    assert_eq!(matrix.submatrix::<1, 3>(0, 0), Matrix::new([[6, 7, 8]]));
    assert_eq!(matrix.submatrix::<1, 3>(1, 3), Matrix::new([[1, 2, 3]]));
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_submatrix_excluded_row_out_of_bounds() {
    let matrix = Matrix::new([[1, 2], [3, 4]]);
    let _ = matrix.submatrix::<1, 1>(2, 0);
}

#[test]
fn test_transpose() {
    #[rustfmt::skip]
    let matrix = Matrix::new([
        [1, 2, 3],
        [4, 5, 6],
    ]);

    #[rustfmt::skip]
    let expected = Matrix::new([
        [1, 4],
        [2, 5],
        [3, 6],
    ]);

    assert_eq!(matrix.transpose(), expected);
    assert_eq!(matrix.transpose().transpose(), matrix);
}

#[test]
fn test_transpose_in_place() {
    #[rustfmt::skip]
    let mut matrix = Matrix::new([
        [1, 2, 3],
        [4, 5, 6],
        [7, 8, 9],
    ]);

    let expected = matrix.transpose();
    matrix.transpose_in_place();
    assert_eq!(matrix, expected);
}

#[test]
fn test_resize() {
    let matrix = Matrix::new([[1, 2, 3, 4, 5, 6]]);

    #[rustfmt::skip]
    assert_eq!(matrix.resize::<2, 3>(), Matrix::new([
        [1, 2, 3],
        [4, 5, 6],
    ]));

    #[rustfmt::skip]
    assert_eq!(matrix.resize::<3, 2>(), Matrix::new([
        [1, 2],
        [3, 4],
        [5, 6],
    ]));

    assert_eq!(matrix.resize::<2, 3>().resize::<1, 6>(), matrix);
}

#[test]
fn test_resized_view() {
    let mut matrix = Matrix::new([[1, 2, 3, 4]]);

    {
        let square: &Matrix2<i32> = matrix.as_square();
        assert_eq!(square[0], [1, 2]);
        assert_eq!(square[1], [3, 4]);
    }

    // The view shares storage with the original.
    matrix.as_square_mut::<2>()[(1, 0)] = 30;
    assert_eq!(matrix[0], [1, 2, 30, 4]);

    let rows: &Matrix<i32, 4, 1> = matrix.as_resized();
    assert_eq!(rows.col(0), [1, 2, 30, 4]);
}

#[test]
fn test_map_and_zip_map() {
    let matrix = Matrix::new([[1, 2], [3, 4]]);

    assert_eq!(
        matrix.map(|elem| elem * 2 + 1),
        Matrix::new([[3, 5], [7, 9]]),
    );

    let other = Matrix::new([[10, 20], [30, 40]]);
    assert_eq!(
        matrix.zip_map(other, |x, y| y - x),
        Matrix::new([[9, 18], [27, 36]]),
    );

    let reversed = matrix.map_rows(|[a, b]| [b, a]);
    assert_eq!(reversed, Matrix::new([[2, 1], [4, 3]]));
}

#[test]
fn test_elems_iteration_is_row_major() {
    let matrix = Matrix::new([[1, 2], [3, 4], [5, 6]]);
    let collected: Vec<i32> = matrix.elems().copied().collect();
    assert_eq!(collected, [1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_slice_and_array_access() {
    let mut matrix = Matrix::new([[1, 2], [3, 4]]);

    assert_eq!(matrix.as_slice(), &[1, 2, 3, 4]);
    assert_eq!(*matrix.as_array(), [[1, 2], [3, 4]]);
    assert_eq!(matrix.to_array(), [[1, 2], [3, 4]]);

    matrix.as_mut_slice()[3] = 9;
    matrix.as_array_mut()[0][0] = 7;
    assert_eq!(matrix, Matrix::new([[7, 2], [3, 9]]));

    let roundtrip: Matrix<i32, 2, 2> = <[[i32; 2]; 2]>::from(matrix).into();
    assert_eq!(roundtrip, matrix);
}

#[test]
fn test_display() {
    #[rustfmt::skip]
    let matrix = Matrix::new([
        [1, 2, 3],
        [4, 5, 6],
    ]);

    // Elements are space separated and every row ends with a newline.
    assert_eq!(matrix.to_string(), "1 2 3\n4 5 6\n");

    let single = Matrix::new([[7]]);
    assert_eq!(single.to_string(), "7\n");

    let floats = Matrix::new([[0.5, 1.25]]);
    assert_eq!(floats.to_string(), "0.5 1.25\n");
}

#[cfg(feature = "approx")]
#[test]
fn test_approx_eq() {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    let a = Matrix::new([[0.1_f64 + 0.2, 1.0], [2.0, 3.0]]);
    let b = Matrix::new([[0.3_f64, 1.0], [2.0, 3.0]]);

    assert_ne!(a, b);
    assert_abs_diff_eq!(a, b);
    assert_relative_eq!(a, b);
}

#[cfg(feature = "matrixcompare")]
#[test]
fn test_matrixcompare() {
    use matrixcompare::assert_matrix_eq;

    let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    let b = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);

    assert_matrix_eq!(a, b);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_round_trip() {
    let matrix = Matrix::new([[1, 2, 3], [4, 5, 6]]);

    let json = serde_json::to_string(&matrix).unwrap();
    assert_eq!(json, "[1,2,3,4,5,6]");

    let parsed: Matrix<i32, 2, 3> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, matrix);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_rejects_wrong_length() {
    let too_short: Result<Matrix<i32, 2, 2>, _> = serde_json::from_str("[1,2,3]");
    assert!(too_short.is_err());

    let too_long: Result<Matrix<i32, 2, 2>, _> = serde_json::from_str("[1,2,3,4,5]");
    assert!(too_long.is_err());
}

#[cfg(feature = "mint")]
#[test]
fn test_mint_conversions() {
    let matrix = Matrix::new([[1, 2, 3], [4, 5, 6]]);

    let mint_matrix: mint::RowMatrix2x3<i32> = matrix.into();
    assert_eq!(matrix, mint_matrix);
    assert_eq!(mint_matrix, matrix);

    let round_tripped = Matrix::from(mint_matrix);
    assert_eq!(round_tripped, matrix);
}

#[cfg(feature = "bytemuck")]
#[test]
fn test_bytemuck_cast() {
    let matrix = Matrix::new([[1.0_f32, 2.0], [3.0, 4.0]]);

    let bytes: &[u8] = bytemuck::bytes_of(&matrix);
    assert_eq!(bytes.len(), core::mem::size_of::<Matrix<f32, 2, 2>>());

    let restored: &Matrix<f32, 2, 2> = bytemuck::from_bytes(bytes);
    assert_eq!(*restored, matrix);
}
