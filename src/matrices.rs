//! `matrices` submodule implements square matrices of fixed size which can be used to apply transformations
//! on vectors.
//!
//! [`Matrix`] struct is generic over element type, size and layout ([`Layout`]).
//! [`Matrix2`], [`Matrix3`] and [`Matrix4`] aliases are the sizes that implement
//! [`CofactorExpansion`] and therefore determinants, minors, cofactors, adjugates and inverses.
//!
//! All operations take matrices by value or by reference and return new matrices,
//! only compound assignment operators and explicit setters mutate.
//!

mod layout;
pub use layout::*;

mod square;
pub use square::*;

pub mod transforms;

use crate::scalars::{FloatOperations, Scalar};
use std::{
    marker::PhantomData,
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
    },
};
use thiserror::Error;

/// [`MatrixError`] enum lists all errors that could occur during matrix operations.
///
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum MatrixError {
    /// Matrix with zero (or non-finite) determinant has no inverse.
    ///
    #[error("matrix is degenerate (determinant is {determinant}) and has no inverse")]
    Degenerate {
        /// Determinant of degenerate matrix.
        ///
        determinant: f64,
    },
    /// Inverse of matrix cannot be represented because some of its elements overflow.
    ///
    #[error("inverse of matrix overflows (determinant is {determinant})")]
    Overflow {
        /// Determinant of matrix.
        ///
        determinant: f64,
    },
    /// Element index does not fit into matrix.
    ///
    #[error("index ({row}, {column}) is out of bounds for {size}x{size} matrix")]
    OutOfBounds {
        /// Requested row.
        ///
        row: usize,
        /// Requested column.
        ///
        column: usize,
        /// Size of matrix.
        ///
        size: usize,
    },
}

/// Copies `size`x`size` grid into `SIZE - 1` grid, skipping given row and column.
///
/// This is the single "delete row, delete column" routine behind minors of every matrix size.
/// Both indices must be in bounds.
///
fn submatrix_of<T: Copy, const N: usize, const M: usize>(
    arr: &[[T; N]; N],
    row: usize,
    column: usize,
    fill: T,
) -> [[T; M]; M] {
    assert!(
        M + 1 == N,
        "{M}x{M} matrix cannot be a submatrix of {N}x{N} matrix"
    );

    let mut submatrix: [[T; M]; M] = [[fill; M]; M];
    let source_rows = arr
        .iter()
        .enumerate()
        .filter(|&(r, _)| r != row)
        .map(|(_, source_row)| source_row);
    for (target_row, source_row) in submatrix.iter_mut().zip(source_rows) {
        let values = source_row
            .iter()
            .enumerate()
            .filter(|&(c, _)| c != column)
            .map(|(_, &value)| value);
        for (target, value) in target_row.iter_mut().zip(values) {
            *target = value;
        }
    }
    submatrix
}

/// [`Matrix`] struct implements linear algebra functions with square matrices.
///
/// It also implements various matrix operations with second operand being either matrix or number.
///
/// `L` parameter ([`RowMajor`] by default) only affects how flat constructor arguments are
/// interpreted (see [`Layout`]).
///
#[derive(Copy, Clone, Debug)]
pub struct Matrix<T, const N: usize, L = RowMajor> {
    /// Underlying array (`[row][column]`).
    ///
    arr: [[T; N]; N],
    /// Layout marker.
    ///
    layout: PhantomData<L>,
}
/// Type alias for 2x2 [`Matrix`].
///
pub type Matrix2<T, L = RowMajor> = Matrix<T, 2, L>;
/// Type alias for 3x3 [`Matrix`].
///
pub type Matrix3<T, L = RowMajor> = Matrix<T, 3, L>;
/// Type alias for 4x4 [`Matrix`].
///
pub type Matrix4<T, L = RowMajor> = Matrix<T, 4, L>;
impl<T: Scalar, const N: usize, L: Layout> Matrix<T, N, L> {
    /// Returns count of matrix rows (which is equal to count of its columns).
    ///
    /// # Example
    /// ```rust
    /// # use linmath::matrices::Matrix3;
    /// let matrix: Matrix3<f32> = Matrix3::zero();
    /// assert_eq!(matrix.size(), 3);
    /// ```
    ///
    pub fn size(&self) -> usize {
        N
    }
    /// Returns matrix as an array of rows.
    ///
    pub fn as_array(&self) -> [[T; N]; N] {
        self.arr
    }

    /// Initializes matrix from array of rows.
    ///
    /// Rows are copied as is regardless of layout.
    ///
    pub fn from_rows(rows: [[T; N]; N]) -> Self {
        Matrix {
            arr: rows,
            layout: PhantomData,
        }
    }
    /// Overwrites matrix with given array of rows.
    ///
    /// Rows are copied as is regardless of layout.
    ///
    pub fn set_rows(&mut self, rows: [[T; N]; N]) {
        self.arr = rows;
    }

    /// Initializes matrix with zeroes.
    ///
    /// # Example
    /// ```rust
    /// # use linmath::matrices::Matrix2;
    /// assert_eq!(Matrix2::<f32>::zero().as_array(), [[0.0; 2]; 2]);
    /// ```
    ///
    pub fn zero() -> Self {
        Matrix::from_rows([[T::zero(); N]; N])
    }
    /// Initializes matrix with ones.
    ///
    /// # Example
    /// ```rust
    /// # use linmath::matrices::Matrix2;
    /// assert_eq!(Matrix2::<f32>::one().as_array(), [[1.0; 2]; 2]);
    /// ```
    ///
    pub fn one() -> Self {
        Matrix::from_rows([[T::one(); N]; N])
    }
    /// Makes matrix with given value on main diagonal and zeroes elsewhere.
    ///
    /// # Example
    /// ```rust
    /// # use linmath::matrices::Matrix2;
    /// assert_eq!(Matrix2::<i32>::diagonal(5).as_array(), [[5, 0], [0, 5]]);
    /// ```
    ///
    pub fn diagonal(value: T) -> Self {
        let mut matrix: Self = Matrix::zero();
        for i in 0..N {
            matrix.arr[i][i] = value;
        }
        matrix
    }
    /// Makes identity matrix (square matrix with ones on main diagonal and zeroes elsewhere).
    ///
    /// # Example
    /// ```rust
    /// # use linmath::matrices::Matrix3;
    /// assert_eq!(
    ///     Matrix3::<i32>::identity().as_array(),
    ///     [
    ///         [1, 0, 0],
    ///         [0, 1, 0],
    ///         [0, 0, 1]
    ///     ]
    /// );
    /// ```
    ///
    pub fn identity() -> Self {
        Matrix::diagonal(T::one())
    }

    /// Returns element at given cell, or `None` if cell is out of bounds.
    ///
    pub fn get(&self, row: usize, column: usize) -> Option<T> {
        self.arr.get(row).and_then(|r| r.get(column)).copied()
    }
    /// Returns element at given cell.
    ///
    /// # Example
    /// ```rust
    /// # use linmath::matrices::{Matrix2, MatrixError};
    /// let matrix: Matrix2<i32> = Matrix2::new(1, 2, 3, 4);
    /// assert_eq!(matrix.try_get(1, 0), Ok(3));
    /// assert_eq!(
    ///     matrix.try_get(2, 0),
    ///     Err(MatrixError::OutOfBounds { row: 2, column: 0, size: 2 })
    /// );
    /// ```
    ///
    pub fn try_get(&self, row: usize, column: usize) -> Result<T, MatrixError> {
        self.get(row, column)
            .ok_or(MatrixError::OutOfBounds { row, column, size: N })
    }
    /// Sets element at given cell.
    ///
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<(), MatrixError> {
        let cell: &mut T = self
            .arr
            .get_mut(row)
            .and_then(|r| r.get_mut(column))
            .ok_or(MatrixError::OutOfBounds { row, column, size: N })?;
        *cell = value;
        Ok(())
    }

    /// Returns the same matrix with another layout.
    ///
    /// Every element stays in its cell; only the interpretation of flat arguments changes.
    ///
    pub fn with_layout<L2: Layout>(self) -> Matrix<T, N, L2> {
        Matrix::from_rows(self.arr)
    }

    /// Applies function to every matrix element and returns changed matrix.
    ///
    /// Allows to perform custom operations on each matrix element.
    ///
    /// # Example
    /// ```rust
    /// # use linmath::matrices::Matrix2;
    /// let matrix: Matrix2<i32> = Matrix2::new(1, 2, 3, 4).map(|x| x + 1);
    /// assert_eq!(matrix.as_array(), [[2, 3], [4, 5]]);
    /// ```
    ///
    pub fn map(self, f: impl Fn(T) -> T) -> Self {
        Matrix::from_rows(self.arr.map(|row| row.map(&f)))
    }
    /// Combines matrices by applying function on their elements.
    ///
    /// Allows performing operations with 2 matrices.
    ///
    pub fn combine(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
        let mut matrix: Self = self;
        for r in 0..N {
            for c in 0..N {
                matrix.arr[r][c] = f(self.arr[r][c], other.arr[r][c]);
            }
        }
        matrix
    }

    /// Returns transpose of initial matrix.
    ///
    /// Interchanges its rows into columns (flips matrix over its diagonal).
    ///
    /// # Example
    /// ```rust
    /// # use linmath::matrices::Matrix3;
    /// let matrix: Matrix3<f32> = Matrix3::from([
    ///     [1.0, 2.0, 3.0],
    ///     [1.0, 2.0, 3.0],
    ///     [1.0, 2.0, 3.0]
    /// ]);
    /// assert_eq!(
    ///     matrix.transpose().as_array(),
    ///     [
    ///         [1.0; 3],
    ///         [2.0; 3],
    ///         [3.0; 3]
    ///     ]
    /// );
    /// ```
    ///
    pub fn transpose(&self) -> Self {
        let mut matrix: Self = *self;
        for r in 0..N {
            for c in 0..N {
                matrix.arr[c][r] = self.arr[r][c];
            }
        }
        matrix
    }

    /// Returns matrix that is left after deleting given row and column.
    ///
    /// Target size `M` must be `N - 1` (it is inferred from usage in most cases).
    ///
    /// # Panics
    /// Panics if `M + 1 != N`.
    ///
    /// # Example
    /// ```rust
    /// # use linmath::matrices::{Matrix2, Matrix3, MatrixError};
    /// let matrix: Matrix3<i32> = Matrix3::from_flat([1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// let submatrix: Matrix2<i32> = matrix.submatrix(1, 1)?;
    /// assert_eq!(submatrix.as_array(), [[1, 3], [7, 9]]);
    /// assert!(matrix.submatrix::<2>(3, 0).is_err());
    /// # Ok::<(), MatrixError>(())
    /// ```
    ///
    pub fn submatrix<const M: usize>(
        &self,
        row: usize,
        column: usize,
    ) -> Result<Matrix<T, M, L>, MatrixError> {
        if row >= N || column >= N {
            return Err(MatrixError::OutOfBounds { row, column, size: N });
        }
        Ok(Matrix::from_rows(submatrix_of(
            &self.arr,
            row,
            column,
            T::zero(),
        )))
    }

    /// Performs matrix product of two matrices.
    ///
    /// `result[i][j]` is the sum of `self[i][k] * other[k][j]` over every `k`.
    ///
    /// # Example
    /// ```rust
    /// # use linmath::matrices::Matrix2;
    /// let m1: Matrix2<i32> = Matrix2::new(1, 2, 3, 4);
    /// let m2: Matrix2<i32> = Matrix2::new(5, 6, 7, 8);
    /// assert_eq!(m1.dot_product(m2).as_array(), [[19, 22], [43, 50]]);
    /// ```
    ///
    pub fn dot_product(self, other: Self) -> Self {
        let mut matrix: Self = Matrix::zero();
        for r in 0..N {
            for c in 0..N {
                let mut res: T = T::zero();
                for k in 0..N {
                    res = res + self.arr[r][k] * other.arr[k][c];
                }
                matrix.arr[r][c] = res;
            }
        }
        matrix
    }
}
impl<T: Scalar, const N: usize, L: Layout> Default for Matrix<T, N, L> {
    /// Default matrix is the identity matrix.
    ///
    fn default() -> Self {
        Matrix::identity()
    }
}
impl<T: Scalar + FloatOperations, const N: usize, L: Layout> FloatOperations for Matrix<T, N, L> {
    /// Constructs new matrix by correcting every matrix element that may be wronged by float operations.
    ///
    /// # Example
    /// ```rust
    /// # use linmath::matrices::Matrix2;
    /// # use linmath::scalars::FloatOperations;
    /// let matrix: Matrix2<f32> = Matrix2::new(-0.0, 0.00000001, 0.99999999, 2.0).correct_to(0);
    /// assert_eq!(matrix.as_array(), [[0.0, 0.0], [1.0, 2.0]]);
    /// ```
    ///
    fn correct_to(self, digits: i32) -> Self {
        self.map(|elem| elem.correct_to(digits))
    }
    /// Constructs new matrix by rounding every matrix element up to specified number of digits after floating
    /// point.
    ///
    fn round_up_to(self, digits: i32) -> Self {
        self.map(|elem| elem.round_up_to(digits))
    }
}
impl<T: Scalar, const N: usize, L: Layout> Index<(usize, usize)> for Matrix<T, N, L> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        match self.arr.get(row).and_then(|r| r.get(column)) {
            Some(value) => value,
            None => panic!("{}", MatrixError::OutOfBounds { row, column, size: N }),
        }
    }
}
impl<T: Scalar, const N: usize, L: Layout> IndexMut<(usize, usize)> for Matrix<T, N, L> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        match self.arr.get_mut(row).and_then(|r| r.get_mut(column)) {
            Some(value) => value,
            None => panic!("{}", MatrixError::OutOfBounds { row, column, size: N }),
        }
    }
}
impl<T: Scalar, const N: usize, L: Layout> Index<usize> for Matrix<T, N, L> {
    type Output = [T; N];

    /// Returns row of matrix.
    ///
    fn index(&self, row: usize) -> &Self::Output {
        match self.arr.get(row) {
            Some(value) => value,
            None => panic!("row {row} is out of bounds for {N}x{N} matrix"),
        }
    }
}
impl<T: Scalar, const N: usize, L: Layout> IndexMut<usize> for Matrix<T, N, L> {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        match self.arr.get_mut(row) {
            Some(value) => value,
            None => panic!("row {row} is out of bounds for {N}x{N} matrix"),
        }
    }
}
impl<T: Scalar + Neg<Output = T>, const N: usize, L: Layout> Neg for Matrix<T, N, L> {
    type Output = Self;

    /// Returns negated matrix.
    ///
    /// Is equal to `self.map(|x| -x)`.
    ///
    fn neg(self) -> Self::Output {
        self.map(|x| -x)
    }
}
impl<T: Scalar, const N: usize, L: Layout> Add<Self> for Matrix<T, N, L> {
    type Output = Self;

    /// Returns matrix where each element is a sum of those elements in given
    /// matrices.
    ///
    /// Is equal to `self.combine(rhs, |a, b| a + b)`.
    ///
    fn add(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a + b)
    }
}
impl<T: Scalar, const N: usize, L: Layout> Sub<Self> for Matrix<T, N, L> {
    type Output = Self;

    /// Returns matrix where each element is a difference of those elements in given
    /// matrices.
    ///
    /// Is equal to `self.combine(rhs, |a, b| a - b)`.
    ///
    fn sub(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a - b)
    }
}
impl<T: Scalar, const N: usize, L: Layout> Mul<Self> for Matrix<T, N, L> {
    type Output = Self;

    /// Performs matrix product of two matrices.
    ///
    /// Is equal to `self.dot_product(rhs)`.
    ///
    fn mul(self, rhs: Self) -> Self::Output {
        self.dot_product(rhs)
    }
}
impl<T: Scalar, const N: usize, L: Layout> Mul<T> for Matrix<T, N, L> {
    type Output = Self;

    /// Returns matrix where each element is multiplied by given multiplier.
    ///
    /// Is equal to `self.map(|x| x * rhs)`.
    ///
    fn mul(self, rhs: T) -> Self::Output {
        self.map(|x| x * rhs)
    }
}
impl<T: Scalar, const N: usize, L: Layout> Div<T> for Matrix<T, N, L> {
    type Output = Self;

    /// Returns matrix where each element is divided by given value.
    ///
    /// Is equal to `self.map(|x| x / rhs)`.
    ///
    fn div(self, rhs: T) -> Self::Output {
        self.map(|x| x / rhs)
    }
}
impl<T: Scalar, const N: usize, L: Layout> AddAssign<Self> for Matrix<T, N, L> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl<T: Scalar, const N: usize, L: Layout> SubAssign<Self> for Matrix<T, N, L> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl<T: Scalar, const N: usize, L: Layout> MulAssign<Self> for Matrix<T, N, L> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
impl<T: Scalar, const N: usize, L: Layout> MulAssign<T> for Matrix<T, N, L> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}
impl<T: Scalar, const N: usize, L: Layout> DivAssign<T> for Matrix<T, N, L> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}
impl<T: Scalar, const N: usize, L: Layout> PartialEq for Matrix<T, N, L> {
    /// Checks if matrices are equal (every pair of elements is approximately equal).
    ///
    fn eq(&self, other: &Self) -> bool {
        self.arr
            .iter()
            .flatten()
            .zip(other.arr.iter().flatten())
            .all(|(&a, &b)| a.approx_eq(b))
    }
}
impl<T: Scalar, const N: usize, L: Layout> From<[[T; N]; N]> for Matrix<T, N, L> {
    /// Shorthand for writing `Matrix::from_rows(...)`.
    ///
    fn from(rows: [[T; N]; N]) -> Self {
        Matrix::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::{Matrix, Matrix2, Matrix3, Matrix4, MatrixError};

    #[test]
    fn construction() {
        assert_eq!(Matrix2::<f32>::default(), Matrix2::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(Matrix4::<f64>::default(), Matrix4::identity());
        assert_eq!(Matrix3::<f64>::diagonal(-2.5), Matrix3::<f64>::identity() * -2.5);
        assert_eq!(Matrix2::<i32>::zero(), Matrix2::new(0, 0, 0, 0));
        assert_eq!(Matrix2::<i32>::one(), Matrix2::new(1, 1, 1, 1));
        assert_eq!(Matrix2::<f32>::diagonal(f32::MAX).as_array(), [[f32::MAX, 0.0], [0.0, f32::MAX]]);

        let mut matrix: Matrix4<i32> = Matrix4::zero();
        matrix.set_rows([[1; 4], [2; 4], [3; 4], [4; 4]]);
        assert_eq!(matrix.as_array()[2], [3; 4]);
        assert_eq!(matrix.size(), 4);
    }

    #[test]
    fn element_access() {
        let mut matrix: Matrix3<i32> = Matrix3::from_flat([1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(matrix[(1, 2)], 6);
        assert_eq!(matrix[2], [7, 8, 9]);
        assert_eq!(matrix.get(0, 1), Some(2));
        assert_eq!(matrix.get(0, 3), None);
        assert_eq!(matrix.get(3, 0), None);

        matrix[(0, 0)] = 10;
        matrix[1][1] = 50;
        assert_eq!(matrix.set(2, 2, 90), Ok(()));
        assert_eq!(
            matrix.set(2, 3, 0),
            Err(MatrixError::OutOfBounds {
                row: 2,
                column: 3,
                size: 3
            })
        );
        assert_eq!(matrix.as_array(), [[10, 2, 3], [4, 50, 6], [7, 8, 90]]);
        assert_eq!(
            MatrixError::OutOfBounds {
                row: 2,
                column: 3,
                size: 3
            }
            .to_string(),
            "index (2, 3) is out of bounds for 3x3 matrix"
        );
    }

    #[test]
    #[should_panic(expected = "index (0, 2) is out of bounds for 2x2 matrix")]
    fn element_access_out_of_bounds() {
        let matrix: Matrix2<f32> = Matrix2::identity();
        let _ = matrix[(0, 2)];
    }

    #[test]
    #[should_panic(expected = "row 4 is out of bounds")]
    fn row_access_out_of_bounds() {
        let mut matrix: Matrix4<f32> = Matrix4::identity();
        matrix[4][0] = 1.0;
    }

    #[test]
    fn submatrix() {
        let matrix: Matrix4<i32> =
            Matrix4::from([[4, 7, 2, 3], [0, 5, 1, -2], [3, 0, 6, 1], [2, -1, 0, 8]]);
        let submatrix: Matrix3<i32> = matrix.submatrix(1, 2).expect("indices are in bounds");
        assert_eq!(submatrix.as_array(), [[4, 7, 3], [3, 0, 1], [2, -1, 8]]);

        let corner: Matrix3<i32> = matrix.submatrix(3, 3).expect("indices are in bounds");
        assert_eq!(corner.as_array(), [[4, 7, 2], [0, 5, 1], [3, 0, 6]]);

        assert_eq!(
            matrix.submatrix::<3>(0, 4),
            Err(MatrixError::OutOfBounds {
                row: 0,
                column: 4,
                size: 4
            })
        );
    }

    #[test]
    #[should_panic(expected = "cannot be a submatrix")]
    fn submatrix_of_wrong_size() {
        let matrix: Matrix4<i32> = Matrix4::identity();
        let _ = matrix.submatrix::<2>(0, 0);
    }

    #[test]
    fn arithmetic() {
        let m1: Matrix2<f32> = Matrix2::new(1.0, 2.0, 3.0, 4.0);
        let m2: Matrix2<f32> = Matrix2::new(6.0, 5.5, 1.0, 2.5);
        let mut m3: Matrix2<f32> = m1;

        assert_eq!(m1 + m2, Matrix2::new(7.0, 7.5, 4.0, 6.5));
        assert_eq!(m1 - m2, Matrix2::new(-5.0, -3.5, 2.0, 1.5));
        assert_eq!(m1 * m2, Matrix2::new(8.0, 10.5, 22.0, 26.5));
        assert_eq!(m1 * 2.0, Matrix2::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(m1 / 2.0, Matrix2::new(0.5, 1.0, 1.5, 2.0));
        assert_eq!(-m1, m1 * -1.0);

        m3 += m2;
        assert_eq!(m3, m1 + m2);
        m3 -= m2;
        assert_eq!(m3, m1);
        m3 *= 2.0;
        assert_eq!(m3, m1 * 2.0);
        m3 /= 2.0;
        assert_eq!(m3, m1);
        m3 *= m2;
        assert_eq!(m3, m1 * m2);

        assert!(m1 == m1);
        assert!(m1 != m2);
        assert_eq!(m1.combine(m2, |a, b| a.max(b)), Matrix2::new(6.0, 5.5, 3.0, 4.0));
    }

    #[test]
    fn approximate_equality() {
        let m1: Matrix3<f64> = Matrix3::from_flat([0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9]);
        let m2: Matrix3<f64> = (m1 * 3.0) / 3.0 + Matrix3::diagonal(1e-12);
        assert_eq!(m1, m2);
        assert_ne!(m1, m1 + Matrix3::diagonal(1e-6));
    }

    #[test]
    fn matrix_product() {
        let a: Matrix3<f64> = Matrix3::from([[1.0, 2.0, 0.0], [0.0, 1.0, 3.0], [4.0, 0.0, 1.0]]);
        let b: Matrix3<f64> = Matrix3::from([[2.0, 0.0, 1.0], [1.0, 3.0, 0.0], [0.0, 1.0, 2.0]]);
        let c: Matrix3<f64> = Matrix3::from([[1.0, 1.0, 0.0], [0.0, 2.0, 1.0], [3.0, 0.0, 1.0]]);

        assert_eq!(
            (a * b).as_array(),
            [[4.0, 6.0, 1.0], [1.0, 6.0, 6.0], [8.0, 1.0, 6.0]]
        );
        assert_eq!(
            (b * a).as_array(),
            [[6.0, 4.0, 1.0], [1.0, 5.0, 9.0], [8.0, 1.0, 5.0]]
        );
        assert_ne!(a * b, b * a);
        assert_eq!((a * b) * c, a * (b * c));
        assert_eq!(a * Matrix3::identity(), a);
        assert_eq!(Matrix3::<f64>::identity() * a, a);
    }

    #[test]
    fn scalar_distributes_over_addition() {
        let a: Matrix4<f32> = Matrix4::from_flat([
            1.5, -2.0, 0.25, 4.0, 3.0, 1.0, -1.0, 0.5, 2.0, 2.0, 8.0, -3.5, 0.0, 1.0, 6.0, 1.0,
        ]);
        let b: Matrix4<f32> = Matrix4::from_flat([
            -0.5, 1.0, 2.0, 3.0, 7.0, 0.0, 1.25, -2.0, 1.0, 4.0, -6.0, 0.5, 9.0, -1.0, 2.0, 3.0,
        ]);
        for s in [0.0, -1.0, 2.5, 1e3] {
            assert_eq!((a + b) * s, a * s + b * s);
        }
    }

    #[test]
    fn double_transpose() {
        let m2: Matrix2<i32> = Matrix2::new(2, 3, 7, -2);
        assert_eq!(m2.transpose().as_array(), [[2, 7], [3, -2]]);
        assert_eq!(m2.transpose().transpose(), m2);

        let m3: Matrix3<f64> = Matrix3::from_flat([1.3, 2.0, 5.8, 8.2, 7.2, 2.1, 0.0, 1.0, 9.0]);
        assert_eq!(m3.transpose().transpose(), m3);

        let m4: Matrix<f32, 4> = Matrix4::from_flat([
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0,
        ]);
        assert_eq!(m4.transpose()[(0, 3)], 13.0);
        assert_eq!(m4.transpose().transpose(), m4);
    }
}
