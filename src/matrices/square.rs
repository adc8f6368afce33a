//! `matrices::square` submodule implements determinants and everything that is derived from them
//! (minors, cofactors, adjugates and inverses) for matrices of sizes 2, 3 and 4.
//!
//! 2x2 matrices use closed formulas, bigger matrices are expanded by cofactors into
//! submatrices of lesser size, all of which are extracted by one shared routine.
//!

use crate::{
    matrices::{submatrix_of, Layout, Matrix, MatrixError},
    scalars::{Scalar, Sign},
};
use num_traits::{Float, Signed};

/// [`CofactorExpansion`] trait is implemented by square matrices whose determinant can be computed.
///
/// It is implemented for 2x2, 3x3 and 4x4 [`Matrix`] with signed elements and unlocks
/// [`Matrix::cofactor`], [`Matrix::adjugate`] and [`Matrix::inverse`] for them.
///
/// Unsigned elements are not supported, since determinants and cofactors may be negative:
/// ```compile_fail
/// # use linmath::matrices::{CofactorExpansion, Matrix2};
/// let _ = Matrix2::<u32>::new(1, 2, 3, 4).determinant();
/// ```
///
pub trait CofactorExpansion<T: Scalar>: Sized {
    /// Returns determinant of matrix.
    ///
    /// # Example
    /// ```rust
    /// # use linmath::matrices::{CofactorExpansion, Matrix2, Matrix3};
    /// assert_eq!(Matrix2::<i32>::new(1, 2, 3, 4).determinant(), -2);
    /// assert_eq!(
    ///     Matrix3::<i32>::from([
    ///         [-3, 2, 2],
    ///         [43, 1, -12],
    ///         [5, 0, 5]
    ///     ]).determinant(),
    ///     -575
    /// );
    /// ```
    ///
    fn determinant(&self) -> T;

    /// Returns matrix of minors.
    ///
    /// Each element is replaced with determinant of submatrix that is left after deleting
    /// element's row and column.
    ///
    fn minor(&self) -> Self;
}
impl<T: Scalar + Signed, L: Layout> CofactorExpansion<T> for Matrix<T, 2, L> {
    fn determinant(&self) -> T {
        let [[a, b], [c, d]] = self.arr;
        a * d - b * c
    }

    fn minor(&self) -> Self {
        let [[a, b], [c, d]] = self.arr;
        Matrix::from_rows([[d, c], [b, a]])
    }
}
/// Implements [`CofactorExpansion`] by expansion along the first row into minors of lesser size.
///
macro_rules! impl_cofactor_expansion {
    ($($size:literal => $minor_size:literal,)+) => {$(
        impl<T: Scalar + Signed, L: Layout> CofactorExpansion<T> for Matrix<T, $size, L> {
            fn determinant(&self) -> T {
                let mut determinant: T = T::zero();
                for (column, &value) in self.arr[0].iter().enumerate() {
                    let term: T = value * self.minor_at(0, column);
                    determinant = match Sign::alternating(column) {
                        Sign::Negative => determinant - term,
                        _ => determinant + term,
                    };
                }
                determinant
            }

            fn minor(&self) -> Self {
                let mut minor: Self = Matrix::zero();
                for r in 0..$size {
                    for c in 0..$size {
                        minor.arr[r][c] = self.minor_at(r, c);
                    }
                }
                minor
            }
        }
        impl<T: Scalar + Signed, L: Layout> Matrix<T, $size, L> {
            /// Returns determinant of submatrix that is left after deleting given row and column.
            ///
            fn minor_at(&self, row: usize, column: usize) -> T {
                Matrix::<T, $minor_size, L>::from_rows(submatrix_of(&self.arr, row, column, T::zero()))
                    .determinant()
            }
        }
    )+};
}
impl_cofactor_expansion!(3 => 2, 4 => 3,);

impl<T: Scalar + Signed, const N: usize, L: Layout> Matrix<T, N, L>
where
    Self: CofactorExpansion<T>,
{
    /// Flips sign of every element in `+ - / - +` checkerboard pattern.
    ///
    fn checkerboard(self) -> Self {
        let mut matrix: Self = self;
        for r in 0..N {
            for c in 0..N {
                matrix.arr[r][c] = Sign::checkerboard(r, c).apply(self.arr[r][c]);
            }
        }
        matrix
    }

    /// Returns matrix of cofactors (minors with `(-1)^(row + column)` sign applied).
    ///
    /// # Example
    /// ```rust
    /// # use linmath::matrices::Matrix2;
    /// assert_eq!(Matrix2::<i32>::new(1, 2, 3, 4).cofactor().as_array(), [[4, -3], [-2, 1]]);
    /// ```
    ///
    pub fn cofactor(&self) -> Self {
        self.minor().checkerboard()
    }
    /// Returns adjugate matrix (transpose of cofactor matrix).
    ///
    /// # Example
    /// ```rust
    /// # use linmath::matrices::Matrix2;
    /// assert_eq!(Matrix2::<i32>::new(1, 2, 3, 4).adjugate().as_array(), [[4, -2], [-3, 1]]);
    /// ```
    ///
    pub fn adjugate(&self) -> Self {
        self.cofactor().transpose()
    }
}
impl<T: Scalar + Signed + Float, const N: usize, L: Layout> Matrix<T, N, L>
where
    Self: CofactorExpansion<T>,
{
    /// Returns inverse matrix.
    ///
    /// Determinant is taken from the untouched matrix and adjugate is divided by it.
    /// Matrices with zero or non-finite determinant have no inverse, so
    /// [`MatrixError::Degenerate`] is returned for them instead.
    /// If some element of the inverse is not finite (intermediate products overflowed),
    /// [`MatrixError::Overflow`] is returned.
    ///
    /// # Example
    /// ```rust
    /// # use linmath::matrices::{Matrix2, Matrix3, MatrixError};
    /// let matrix: Matrix2<f64> = Matrix2::new(1.0, 2.0, 3.0, 4.0);
    /// assert_eq!(matrix.inverse()?, Matrix2::new(-2.0, 1.0, 1.5, -0.5));
    ///
    /// let degenerate: Matrix3<f64> = Matrix3::from_flat([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    /// assert_eq!(degenerate.inverse(), Err(MatrixError::Degenerate { determinant: 0.0 }));
    /// # Ok::<(), MatrixError>(())
    /// ```
    ///
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let determinant: T = self.determinant();
        if determinant.is_zero() || !determinant.is_finite() {
            let determinant: f64 = determinant.to_f64().unwrap_or(f64::NAN);
            tracing::debug!(size = N, determinant, "matrix is degenerate and has no inverse");
            return Err(MatrixError::Degenerate { determinant });
        }
        let inverse: Self = self.adjugate() / determinant;
        if inverse.arr.iter().flatten().any(|element| !element.is_finite()) {
            let determinant: f64 = determinant.to_f64().unwrap_or(f64::NAN);
            tracing::debug!(size = N, determinant, "inverse of matrix overflows");
            return Err(MatrixError::Overflow { determinant });
        }
        Ok(inverse)
    }
    /// Returns inverse matrix, or identity matrix if there is no inverse.
    ///
    pub fn inverse_or_identity(&self) -> Self {
        self.inverse().unwrap_or_else(|_| Matrix::identity())
    }
}

#[cfg(test)]
mod tests {
    use super::CofactorExpansion;
    use crate::{
        matrices::{ColumnMajor, Matrix2, Matrix3, Matrix4, MatrixError},
        scalars::{ApproxEq, FloatOperations},
    };

    fn samples2() -> [Matrix2<f64>; 3] {
        [
            Matrix2::new(1.0, 2.0, 3.0, 4.0),
            Matrix2::new(4.0, 7.0, 2.0, 6.0),
            Matrix2::new(-0.5, 1.25, 3.0, 0.125),
        ]
    }

    fn samples3() -> [Matrix3<f64>; 4] {
        [
            Matrix3::from([[1.0, 2.0, 3.0], [4.0, 5.0, 7.0], [7.0, 8.0, 9.0]]),
            Matrix3::from([[3.0, 2.0, 2.0], [1.0, 2.0, 2.0], [1.0, 3.0, 2.0]]),
            Matrix3::from([[-3.0, 2.0, 2.0], [43.0, 1.0, -12.0], [5.0, 0.0, 5.0]]),
            Matrix3::from([[0.5, -1.25, 2.0], [3.5, 0.0, -4.0], [1.0, 2.0, 0.75]]),
        ]
    }

    fn samples4() -> [Matrix4<f64>; 3] {
        [
            Matrix4::from([
                [2.0, 3.0, 3.0, 1.0],
                [0.0, 4.0, 3.0, -3.0],
                [2.0, -1.0, -1.0, -3.0],
                [0.0, -4.0, -3.0, 2.0],
            ]),
            Matrix4::from([
                [4.0, 7.0, 2.0, 3.0],
                [0.0, 5.0, 1.0, -2.0],
                [3.0, 0.0, 6.0, 1.0],
                [2.0, -1.0, 0.0, 8.0],
            ]),
            Matrix4::from([
                [1.5, 0.0, -2.0, 1.0],
                [3.0, 2.5, 0.0, -1.0],
                [0.0, 1.0, 4.0, 2.0],
                [-1.0, 2.0, 0.5, 3.0],
            ]),
        ]
    }

    #[test]
    fn matrix2() {
        let matrix: Matrix2<f64> = Matrix2::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(matrix.determinant(), -2.0);
        assert_eq!(matrix.minor().as_array(), [[4.0, 3.0], [2.0, 1.0]]);
        assert_eq!(matrix.cofactor().as_array(), [[4.0, -3.0], [-2.0, 1.0]]);
        assert_eq!(matrix.adjugate().as_array(), [[4.0, -2.0], [-3.0, 1.0]]);
        assert_eq!(
            matrix.inverse().expect("determinant is not zero").as_array(),
            [[-2.0, 1.0], [1.5, -0.5]]
        );
        assert_eq!(matrix.as_array(), [[1.0, 2.0], [3.0, 4.0]]);

        let column_major: Matrix2<f64, ColumnMajor> = Matrix2::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(column_major.determinant(), -2.0);
        assert_eq!(
            column_major.inverse().expect("determinant is not zero").as_array(),
            [[-2.0, 1.5], [1.0, -0.5]]
        );

        assert_eq!(Matrix2::<i32>::new(2, 7, -1, 3).determinant(), 13);
        assert_eq!(Matrix2::<i64>::new(1, 2, 3, 4).determinant(), -2);
        assert_eq!(Matrix2::<i8>::new(5, 2, 3, 4).minor().as_array(), [[4, 3], [2, 5]]);
    }

    #[test]
    fn matrix3() {
        let matrix: Matrix3<i32> = Matrix3::from_flat([1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(matrix.determinant(), 0);
        assert_eq!(
            matrix.adjugate().as_array(),
            [[-3, 6, -3], [6, -12, 6], [-3, 6, -3]]
        );

        let matrix: Matrix3<f64> = Matrix3::from([[1.0, 2.0, 3.0], [4.0, 5.0, 7.0], [7.0, 8.0, 9.0]]);
        assert_eq!(matrix.determinant(), 6.0);
        assert_eq!(
            matrix.inverse().expect("determinant is not zero"),
            Matrix3::from([
                [-11.0 / 6.0, 1.0, -1.0 / 6.0],
                [13.0 / 6.0, -2.0, 5.0 / 6.0],
                [-0.5, 1.0, -0.5]
            ])
        );

        let matrix: Matrix3<f32> = Matrix3::from([[3.0, 2.0, 2.0], [1.0, 2.0, 2.0], [1.0, 3.0, 2.0]]);
        assert_eq!(
            matrix
                .inverse()
                .expect("determinant is not zero")
                .round_up_to(2)
                .as_array(),
            [[0.5, -0.5, 0.0], [0.0, -1.0, 1.0], [-0.25, 1.75, -1.0]]
        );
    }

    #[test]
    fn matrix4() {
        assert_eq!(Matrix4::<f64>::identity().determinant(), 1.0);
        assert_eq!(
            Matrix4::<f64>::identity().inverse(),
            Ok(Matrix4::identity())
        );

        let matrix: Matrix4<i64> = Matrix4::from([
            [2, 3, 3, 1],
            [0, 4, 3, -3],
            [2, -1, -1, -3],
            [0, -4, -3, 2],
        ]);
        assert_eq!(matrix.determinant(), 8);
        assert_eq!(
            matrix.adjugate().as_array(),
            [
                [1, -8, 3, -8],
                [-6, -40, 6, -48],
                [8, 48, -8, 56],
                [0, -8, 0, -8]
            ]
        );

        assert_eq!(
            samples4()[0].inverse().expect("determinant is not zero"),
            Matrix4::from([
                [0.125, -1.0, 0.375, -1.0],
                [-0.75, -5.0, 0.75, -6.0],
                [1.0, 6.0, -1.0, 7.0],
                [0.0, -1.0, 0.0, -1.0]
            ])
        );

        let matrix: Matrix4<i32> = Matrix4::from([
            [4, 7, 2, 3],
            [0, 5, 1, -2],
            [3, 0, 6, 1],
            [2, -1, 0, 8],
        ]);
        assert_eq!(matrix.determinant(), 515);
        assert_eq!(
            matrix.adjugate().as_array(),
            [
                [227, -352, -17, -171],
                [-2, 112, -18, 31],
                [-104, 159, 94, 67],
                [-57, 102, 2, 111]
            ]
        );
        assert_eq!(matrix.adjugate() * matrix, Matrix4::diagonal(515));
    }

    #[test]
    fn adjugate_is_transposed_cofactor() {
        for matrix in samples3() {
            assert_eq!(matrix.adjugate().as_array(), matrix.cofactor().transpose().as_array());
            assert_eq!(matrix.minor().checkerboard().as_array(), matrix.cofactor().as_array());
        }
        for matrix in samples4() {
            assert_eq!(matrix.adjugate().as_array(), matrix.cofactor().transpose().as_array());
            assert_eq!(matrix.minor().checkerboard().as_array(), matrix.cofactor().as_array());
        }
        let matrix: Matrix2<i32> = Matrix2::new(-3, 8, 5, 1);
        assert_eq!(matrix.adjugate().as_array(), matrix.cofactor().transpose().as_array());
        assert_eq!(matrix.minor().checkerboard().as_array(), matrix.cofactor().as_array());
    }

    #[test]
    fn inverse_properties() {
        for matrix in samples2() {
            let inverse: Matrix2<f64> = matrix.inverse().expect("determinant is not zero");
            assert_eq!(inverse * matrix, Matrix2::identity());
            assert_eq!(matrix * inverse, Matrix2::identity());
            assert!((matrix.determinant() * inverse.determinant()).approx_eq(1.0));
            assert_eq!(inverse.inverse(), Ok(matrix));
        }
        for matrix in samples3() {
            let inverse: Matrix3<f64> = matrix.inverse().expect("determinant is not zero");
            assert_eq!(inverse * matrix, Matrix3::identity());
            assert_eq!(matrix * inverse, Matrix3::identity());
            assert!((matrix.determinant() * inverse.determinant()).approx_eq(1.0));
        }
        for matrix in samples4() {
            let inverse: Matrix4<f64> = matrix.inverse().expect("determinant is not zero");
            assert_eq!(inverse * matrix, Matrix4::identity());
            assert!((matrix.determinant() * inverse.determinant()).approx_eq(1.0));
            assert_eq!(inverse.inverse(), Ok(matrix));
        }
    }

    #[test]
    fn degenerate_inverse() {
        let matrix2: Matrix2<f64> = Matrix2::new(1.0, 2.0, 1.0, 2.0);
        assert_eq!(matrix2.inverse(), Err(MatrixError::Degenerate { determinant: 0.0 }));
        assert_eq!(matrix2.inverse_or_identity(), Matrix2::identity());

        let matrix3: Matrix3<f32> = Matrix3::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [1.0, 2.0, 3.0]]);
        assert_eq!(matrix3.inverse(), Err(MatrixError::Degenerate { determinant: 0.0 }));
        assert_eq!(matrix3.inverse_or_identity(), Matrix3::identity());

        let matrix4: Matrix4<f64> = Matrix4::zero();
        assert_eq!(matrix4.inverse(), Err(MatrixError::Degenerate { determinant: 0.0 }));
        assert_eq!(matrix4.inverse_or_identity(), Matrix4::identity());

        let matrix4: Matrix4<f64> = Matrix4::diagonal(f64::INFINITY);
        assert!(matches!(
            matrix4.inverse(),
            Err(MatrixError::Degenerate { determinant }) if !determinant.is_finite()
        ));
        let matrix2: Matrix2<f64> = Matrix2::new(f64::NAN, 0.0, 0.0, 1.0);
        assert!(matches!(
            matrix2.inverse(),
            Err(MatrixError::Degenerate { determinant }) if determinant.is_nan()
        ));
        assert!(matrix2
            .inverse_or_identity()
            .as_array()
            .iter()
            .flatten()
            .all(|value| value.is_finite()));

        let overflowing: Matrix3<f64> = Matrix3::from([
            [1e200, 1e200, 0.0],
            [1e200, 1.0000001e200, 0.0],
            [0.0, 0.0, 1e-300],
        ]);
        assert!(overflowing.determinant().is_finite());
        assert!(matches!(
            overflowing.inverse(),
            Err(MatrixError::Overflow { determinant }) if determinant.is_finite()
        ));
        assert_eq!(overflowing.inverse_or_identity(), Matrix3::identity());

        assert_eq!(
            MatrixError::Degenerate { determinant: 0.0 }.to_string(),
            "matrix is degenerate (determinant is 0) and has no inverse"
        );
    }
}
