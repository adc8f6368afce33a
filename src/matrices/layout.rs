//! `matrices::layout` submodule implements type-level layout configuration of matrices.
//!
//! Layout decides how positional and flat constructor arguments are mapped onto rows and columns.
//! Storage itself is always indexed as `[row][column]`, and nested arrays are always read row by row,
//! so matrices with different layouts but equal elements behave identically in every other operation.
//!

use crate::{matrices::Matrix, scalars::Scalar};
use std::{fmt::Debug, hash::Hash};

/// [`Order`] enum lists possible orders in which flat sequences of elements fill a matrix.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Consecutive elements fill a row first.
    ///
    RowMajor,
    /// Consecutive elements fill a column first.
    ///
    ColumnMajor,
}
impl Order {
    /// Returns `(row, column)` cell that `index`-th element of a flat sequence occupies in `size`x`size` matrix.
    ///
    /// # Example
    /// ```rust
    /// # use linmath::matrices::Order;
    /// assert_eq!(Order::RowMajor.cell(5, 3), (1, 2));
    /// assert_eq!(Order::ColumnMajor.cell(5, 3), (2, 1));
    /// ```
    ///
    pub fn cell(self, index: usize, size: usize) -> (usize, usize) {
        let (major, minor): (usize, usize) = (index / size, index % size);
        match self {
            Order::RowMajor => (major, minor),
            Order::ColumnMajor => (minor, major),
        }
    }
}

/// [`Layout`] trait is implemented by zero-sized markers that are used as matrix layout parameter.
///
pub trait Layout: Copy + Clone + Debug + Default + PartialEq + Eq + Hash + 'static {
    /// Order in which flat constructor arguments are placed.
    ///
    const ORDER: Order;
}
/// [`RowMajor`] marker makes flat constructor arguments fill matrix row by row.
///
/// This is the default layout of [`Matrix`].
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RowMajor;
impl Layout for RowMajor {
    const ORDER: Order = Order::RowMajor;
}
/// [`ColumnMajor`] marker makes flat constructor arguments fill matrix column by column.
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColumnMajor;
impl Layout for ColumnMajor {
    const ORDER: Order = Order::ColumnMajor;
}

/// Implements flat array constructors for square matrices of given sizes.
///
macro_rules! impl_flat_constructors {
    ($(($size:literal, $length:literal),)+) => {$(
        impl<T: Scalar, L: Layout> Matrix<T, $size, L> {
            #[doc = concat!("Initializes matrix from ", stringify!($length), " values that are placed according to layout.")]
            ///
            pub fn from_flat(values: [T; $length]) -> Self {
                let mut matrix: Self = Matrix::zero();
                matrix.set_flat(values);
                matrix
            }

            #[doc = concat!("Overwrites matrix with ", stringify!($length), " values that are placed according to layout.")]
            ///
            pub fn set_flat(&mut self, values: [T; $length]) {
                for (index, value) in values.into_iter().enumerate() {
                    let (row, column): (usize, usize) = L::ORDER.cell(index, $size);
                    self.arr[row][column] = value;
                }
            }

            /// Returns matrix elements as a flat array that is ordered according to layout.
            ///
            /// It is the inverse of `from_flat`.
            ///
            pub fn to_flat(&self) -> [T; $length] {
                let mut values: [T; $length] = [T::zero(); $length];
                for (index, value) in values.iter_mut().enumerate() {
                    let (row, column): (usize, usize) = L::ORDER.cell(index, $size);
                    *value = self.arr[row][column];
                }
                values
            }
        }
    )+};
}
impl_flat_constructors!((2, 4), (3, 9), (4, 16),);

impl<T: Scalar, L: Layout> Matrix<T, 2, L> {
    /// Initializes 2x2 matrix from four values.
    ///
    /// With [`RowMajor`] layout values form `[[x, y], [z, w]]`,
    /// with [`ColumnMajor`] layout they form `[[x, z], [y, w]]`.
    ///
    /// # Example
    /// ```rust
    /// # use linmath::matrices::{ColumnMajor, Matrix2};
    /// let row_major: Matrix2<i32> = Matrix2::new(1, 2, 3, 4);
    /// assert_eq!(row_major.as_array(), [[1, 2], [3, 4]]);
    ///
    /// let column_major: Matrix2<i32, ColumnMajor> = Matrix2::new(1, 2, 3, 4);
    /// assert_eq!(column_major.as_array(), [[1, 3], [2, 4]]);
    /// ```
    ///
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::from_flat([x, y, z, w])
    }
}
