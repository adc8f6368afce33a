//! `matrices::transforms` submodule implements 4x4 transformation matrices that perform translation,
//! rotation and scaling of three-dimensional points in homogeneous coordinates.
//!
//! [`RowMajor`](super::RowMajor) matrices follow column vector convention (`M * p`, translation is
//! stored in the last column), while [`ColumnMajor`](super::ColumnMajor) matrices follow row vector
//! convention (`p * M`, translation is stored in the last row).
//!

use crate::{
    angles::Radian,
    matrices::{Layout, Matrix4, Order},
    scalars::Scalar,
    vectors::Vector3,
};
use num_traits::Float;

impl<T: Scalar, L: Layout> Matrix4<T, L> {
    /// Returns matrix whose linear part is uniformly scaled by given factor.
    ///
    /// Only three leading diagonal elements are multiplied,
    /// translation and homogeneous element are left untouched.
    ///
    /// # Example
    /// ```rust
    /// # use linmath::matrices::Matrix4;
    /// let matrix: Matrix4<i32> = Matrix4::identity().scale(3);
    /// assert_eq!(
    ///     matrix.as_array(),
    ///     [
    ///         [3, 0, 0, 0],
    ///         [0, 3, 0, 0],
    ///         [0, 0, 3, 0],
    ///         [0, 0, 0, 1]
    ///     ]
    /// );
    /// ```
    ///
    pub fn scale(&self, factor: T) -> Self {
        let mut matrix: Self = *self;
        for i in 0..3 {
            matrix.arr[i][i] = matrix.arr[i][i] * factor;
        }
        matrix
    }

    /// Returns matrix that is translated by given vector.
    ///
    /// Vector components are added into the last column if `row_major` is true
    /// and into the last row otherwise, regardless of matrix layout.
    ///
    /// # Example
    /// ```rust
    /// # use linmath::matrices::Matrix4;
    /// # use linmath::vectors::Vector3;
    /// let matrix: Matrix4<i32> = Matrix4::identity();
    /// let vector: Vector3<i32> = Vector3::new(5, 6, 7);
    /// assert_eq!(matrix.translate(vector, true)[(1, 3)], 6);
    /// assert_eq!(matrix.translate(vector, false)[(3, 1)], 6);
    /// ```
    ///
    pub fn translate(&self, vector: Vector3<T>, row_major: bool) -> Self {
        let mut matrix: Self = *self;
        for (i, component) in vector.elements().into_iter().enumerate() {
            let (row, column): (usize, usize) = if row_major { (i, 3) } else { (3, i) };
            matrix.arr[row][column] = matrix.arr[row][column] + component;
        }
        matrix
    }
    /// Returns matrix that is translated by given components.
    ///
    /// Is equal to `self.translate(Vector3::new(x, y, z), row_major)`.
    ///
    pub fn translate_xyz(&self, x: T, y: T, z: T, row_major: bool) -> Self {
        self.translate(Vector3::new(x, y, z), row_major)
    }
    /// Returns matrix that is translated by given vector according to its layout.
    ///
    pub fn translate_native(&self, vector: Vector3<T>) -> Self {
        self.translate(vector, L::ORDER == Order::RowMajor)
    }

    /// Applies affine transformation to a point.
    ///
    /// Point is extended with homogeneous coordinate equal to one,
    /// which is dropped from the result.
    ///
    /// # Example
    /// ```rust
    /// # use linmath::matrices::{ColumnMajor, Matrix4};
    /// # use linmath::vectors::Vector3;
    /// let vector: Vector3<f32> = Vector3::new(1.0, 2.0, 3.0);
    /// let point: Vector3<f32> = Vector3::new(1.0, 1.0, 1.0);
    ///
    /// let matrix: Matrix4<f32> = Matrix4::identity().translate_native(vector);
    /// assert_eq!(matrix.transform_point(point), Vector3::new(2.0, 3.0, 4.0));
    ///
    /// let matrix: Matrix4<f32, ColumnMajor> = Matrix4::identity().translate_native(vector);
    /// assert_eq!(matrix.transform_point(point), Vector3::new(2.0, 3.0, 4.0));
    /// ```
    ///
    pub fn transform_point(&self, point: Vector3<T>) -> Vector3<T> {
        let coordinates: [T; 4] = [point.x, point.y, point.z, T::one()];
        let mut result: Vector3<T> = Vector3::zero();
        for (i, component) in [&mut result.x, &mut result.y, &mut result.z]
            .into_iter()
            .enumerate()
        {
            for (k, &coordinate) in coordinates.iter().enumerate() {
                let element: T = match L::ORDER {
                    Order::RowMajor => self.arr[i][k],
                    Order::ColumnMajor => self.arr[k][i],
                };
                *component = *component + element * coordinate;
            }
        }
        result
    }
}
impl<T: Scalar + Float, L: Layout> Matrix4<T, L> {
    /// Builds rotation matrix from `(row, column)` pairs of cosine and sine cells.
    ///
    /// Cells are given for column vector convention and are mirrored for row vector convention.
    ///
    fn rotation(angle: Radian<T>, cos_cells: [(usize, usize); 2], sin_cell: (usize, usize)) -> Self {
        let (sin, cos): (T, T) = angle.sin_cos();
        let mut matrix: Self = Matrix4::identity();
        for (row, column) in cos_cells {
            matrix.arr[row][column] = cos;
        }
        let (row, column): (usize, usize) = sin_cell;
        matrix.arr[row][column] = -sin;
        matrix.arr[column][row] = sin;
        match L::ORDER {
            Order::RowMajor => matrix,
            Order::ColumnMajor => matrix.transpose(),
        }
    }

    /// Returns matrix that rotates points counterclockwise around X axis.
    ///
    pub fn rotation_x(angle: Radian<T>) -> Self {
        Matrix4::rotation(angle, [(1, 1), (2, 2)], (1, 2))
    }
    /// Returns matrix that rotates points counterclockwise around Y axis.
    ///
    pub fn rotation_y(angle: Radian<T>) -> Self {
        Matrix4::rotation(angle, [(0, 0), (2, 2)], (2, 0))
    }
    /// Returns matrix that rotates points counterclockwise around Z axis.
    ///
    /// # Example
    /// ```rust
    /// # use linmath::angles::Degree;
    /// # use linmath::matrices::Matrix4;
    /// # use linmath::scalars::FloatOperations;
    /// # use linmath::vectors::Vector3;
    /// let matrix: Matrix4<f64> = Matrix4::rotation_z(Degree::new(90.0).radians());
    /// assert_eq!(
    ///     matrix.round_up_to(2).as_array(),
    ///     [
    ///         [0.0, -1.0, 0.0, 0.0],
    ///         [1.0, 0.0, 0.0, 0.0],
    ///         [0.0, 0.0, 1.0, 0.0],
    ///         [0.0, 0.0, 0.0, 1.0]
    ///     ]
    /// );
    /// assert_eq!(matrix.transform_point(Vector3::right()), Vector3::up());
    /// ```
    ///
    pub fn rotation_z(angle: Radian<T>) -> Self {
        Matrix4::rotation(angle, [(0, 0), (1, 1)], (0, 1))
    }
}

/// [`Axis`] enum lists coordinate axes that rotation can be performed around.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X axis.
    ///
    X,
    /// Y axis.
    ///
    Y,
    /// Z axis.
    ///
    Z,
}

/// [`Transform`] struct-like enum represents 3 basic matrix transformations.
///
#[derive(Copy, Clone, Debug)]
pub enum Transform<T> {
    /// Translation moves an object along given vector.
    ///
    Translation {
        /// Vector along which object will be translated.
        ///
        vector: Vector3<T>,
    },

    /// Rotation turns an object around given axis by given angle.
    ///
    Rotation {
        /// Axis around which object will be rotated.
        ///
        axis: Axis,
        /// Angle by which object will be rotated.
        ///
        angle: Radian<T>,
    },

    /// Scaling uniformly expands or contracts an object by given factor.
    ///
    Scaling {
        /// Scaling factor.
        ///
        factor: T,
    },
}
impl<T: Scalar + Float> Transform<T> {
    /// Constructs corresponding transformation matrix in given layout.
    ///
    /// # Example
    /// ```rust
    /// # use linmath::matrices::{transforms::Transform, Matrix4};
    /// # use linmath::vectors::Vector3;
    /// let transform: Transform<f32> = Transform::Translation { vector: Vector3::new(2.0, 3.0, 4.0) };
    /// let matrix: Matrix4<f32> = transform.matrix();
    /// assert_eq!(
    ///     matrix.as_array(),
    ///     [
    ///         [1.0, 0.0, 0.0, 2.0],
    ///         [0.0, 1.0, 0.0, 3.0],
    ///         [0.0, 0.0, 1.0, 4.0],
    ///         [0.0, 0.0, 0.0, 1.0]
    ///     ]
    /// );
    /// ```
    ///
    pub fn matrix<L: Layout>(self) -> Matrix4<T, L> {
        match self {
            Self::Translation { vector } => Matrix4::identity().translate_native(vector),
            Self::Rotation { axis, angle } => match axis {
                Axis::X => Matrix4::rotation_x(angle),
                Axis::Y => Matrix4::rotation_y(angle),
                Axis::Z => Matrix4::rotation_z(angle),
            },
            Self::Scaling { factor } => Matrix4::identity().scale(factor),
        }
    }

    /// Combines given transforms into one matrix.
    ///
    /// Transforms are applied in the order they are passed (`A -> B -> C`):
    /// column vector convention multiplies them as `C * B * A`,
    /// row vector convention multiplies them as `A * B * C`.
    ///
    /// # Example
    /// ```rust
    /// # use linmath::angles::Degree;
    /// # use linmath::matrices::{transforms::{Axis, Transform}, ColumnMajor, Matrix4};
    /// # use linmath::vectors::Vector3;
    /// let transforms: [Transform<f64>; 3] = [
    ///     Transform::Scaling { factor: 2.0 },
    ///     Transform::Rotation { axis: Axis::Z, angle: Degree::new(90.0).radians() },
    ///     Transform::Translation { vector: Vector3::new(1.0, 0.0, 0.0) },
    /// ];
    /// let point: Vector3<f64> = Vector3::new(1.0, 0.0, 0.0);
    ///
    /// let matrix: Matrix4<f64> = Transform::combine(transforms.into_iter());
    /// assert_eq!(matrix.transform_point(point), Vector3::new(1.0, 2.0, 0.0));
    ///
    /// let matrix: Matrix4<f64, ColumnMajor> = Transform::combine(transforms.into_iter());
    /// assert_eq!(matrix.transform_point(point), Vector3::new(1.0, 2.0, 0.0));
    /// ```
    ///
    pub fn combine<L: Layout>(transforms: impl DoubleEndedIterator<Item = Self>) -> Matrix4<T, L> {
        match L::ORDER {
            Order::RowMajor => transforms
                .rev()
                .fold(Matrix4::identity(), |acc, transform| acc * transform.matrix::<L>()),
            Order::ColumnMajor => transforms
                .fold(Matrix4::identity(), |acc, transform| acc * transform.matrix::<L>()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, Transform};
    use crate::{
        angles::{Degree, Radian},
        matrices::{ColumnMajor, Matrix4, RowMajor},
        scalars::FloatOperations,
        vectors::Vector3,
    };

    #[test]
    fn scale() {
        let matrix: Matrix4<f32> = Matrix4::identity()
            .translate_xyz(4.0, 5.0, 6.0, true)
            .scale(2.5);
        assert_eq!(
            matrix.as_array(),
            [
                [2.5, 0.0, 0.0, 4.0],
                [0.0, 2.5, 0.0, 5.0],
                [0.0, 0.0, 2.5, 6.0],
                [0.0, 0.0, 0.0, 1.0]
            ]
        );
        assert_eq!(matrix.scale(0.4).as_array()[0][0], 1.0);
        assert_eq!(Matrix4::<f32>::one().scale(-1.0)[3], [1.0; 4]);
    }

    #[test]
    fn translate() {
        let vector: Vector3<i32> = Vector3::new(1, 2, 3);
        let by_column: Matrix4<i32> = Matrix4::identity().translate(vector, true);
        let by_row: Matrix4<i32> = Matrix4::identity().translate(vector, false);

        assert_eq!(
            by_column.as_array(),
            [[1, 0, 0, 1], [0, 1, 0, 2], [0, 0, 1, 3], [0, 0, 0, 1]]
        );
        assert_eq!(
            by_row.as_array(),
            [[1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0], [1, 2, 3, 1]]
        );
        assert_ne!(by_column, by_row);
        assert_eq!(by_column.transpose(), by_row);

        let zero: Vector3<i32> = Vector3::zero();
        assert_eq!(
            Matrix4::<i32>::identity().translate(zero, true),
            Matrix4::identity().translate(zero, false)
        );

        assert_eq!(by_column.translate_xyz(1, 1, 1, true)[(2, 3)], 4);
        assert_eq!(
            Matrix4::<i32, RowMajor>::identity().translate_native(vector),
            by_column
        );
        assert_eq!(
            Matrix4::<i32, ColumnMajor>::identity()
                .translate_native(vector)
                .as_array(),
            by_row.as_array()
        );
    }

    #[test]
    fn rotation() {
        let angle: Radian<f64> = Degree::new(90.0).radians();
        let x: Vector3<f64> = Vector3::right();
        let y: Vector3<f64> = Vector3::up();
        let z: Vector3<f64> = Vector3::forward();

        assert_eq!(Matrix4::<f64>::rotation_x(angle).transform_point(y), z);
        assert_eq!(Matrix4::<f64>::rotation_y(angle).transform_point(z), x);
        assert_eq!(Matrix4::<f64>::rotation_z(angle).transform_point(x), y);

        assert_eq!(Matrix4::<f64, ColumnMajor>::rotation_x(angle).transform_point(y), z);
        assert_eq!(Matrix4::<f64, ColumnMajor>::rotation_y(angle).transform_point(z), x);
        assert_eq!(Matrix4::<f64, ColumnMajor>::rotation_z(angle).transform_point(x), y);

        assert_eq!(
            Matrix4::<f64, ColumnMajor>::rotation_y(angle).as_array(),
            Matrix4::<f64>::rotation_y(angle).transpose().as_array()
        );
        assert_eq!(
            Matrix4::<f32>::rotation_x(Radian::new(0.0)),
            Matrix4::identity()
        );
        assert_eq!(
            Matrix4::<f64>::rotation_z(-angle)
                .inverse()
                .expect("rotation is not degenerate"),
            Matrix4::rotation_z(angle)
        );
    }

    #[test]
    fn transform() {
        let point: Vector3<f64> = Vector3::new(1.0, 2.0, 3.0);

        let translation: Transform<f64> = Transform::Translation {
            vector: Vector3::new(-1.0, 0.5, 2.0),
        };
        assert_eq!(
            translation.matrix::<RowMajor>().transform_point(point),
            Vector3::new(0.0, 2.5, 5.0)
        );

        let scaling: Transform<f64> = Transform::Scaling { factor: 3.0 };
        assert_eq!(
            scaling.matrix::<ColumnMajor>().transform_point(point),
            Vector3::new(3.0, 6.0, 9.0)
        );

        let rotation: Transform<f64> = Transform::Rotation {
            axis: Axis::Y,
            angle: Degree::new(180.0).radians(),
        };
        assert_eq!(
            rotation.matrix::<RowMajor>().round_up_to(5),
            Matrix4::from([
                [-1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, -1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0]
            ])
        );

        let transforms: [Transform<f64>; 3] = [translation, rotation, scaling];
        let expected: Vector3<f64> = Vector3::new(0.0, 7.5, -15.0);
        assert_eq!(
            Transform::combine::<RowMajor>(transforms.into_iter()).transform_point(point),
            expected
        );
        assert_eq!(
            Transform::combine::<ColumnMajor>(transforms.into_iter()).transform_point(point),
            expected
        );
        assert_eq!(
            Transform::<f64>::combine::<RowMajor>(std::iter::empty()),
            Matrix4::identity()
        );
    }
}
