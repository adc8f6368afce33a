//! `vectors` submodule implements three-dimensional vector which can be used to represent
//! translation, direction, scale and other things.
//!

use crate::{
    angles::Radian,
    scalars::{clamp, Scalar},
};
use num_traits::{Float, Signed};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// [`impl_vector_vector_operations`] macro implements component-wise vector-vector operations for vector.
///
macro_rules! impl_vector_vector_operations {
    ($struct_name:ident, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl<T: Scalar> $trait<Self> for $struct_name<T> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                self.combine(rhs, |a, b| a $op b)
            }
        }
    )+}
}
/// [`impl_vector_rhs_operations`] macro implements vector-scalar operations for vector.
///
macro_rules! impl_vector_rhs_operations {
    ($struct_name:ident, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl<T: Scalar> $trait<T> for $struct_name<T> {
            type Output = Self;

            fn $method(self, rhs: T) -> Self::Output {
                self.map(|a| a $op rhs)
            }
        }
    )+}
}
/// [`impl_vector_assignoperations`] macro implements `...Assign` traits for vector.
///
macro_rules! impl_vector_assignoperations {
    ($struct_name:ident, $rhs:ty, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl<T: Scalar> $trait<$rhs> for $struct_name<T> {
            fn $method(&mut self, rhs: $rhs) {
                *self = *self $op rhs;
            }
        }
    )+}
}

/// [`Vector3`] struct represents three-dimensional vector with coordinates of any [`Scalar`] type.
///
/// # Example
/// ```rust
/// # use linmath::vectors::Vector3;
/// let vector: Vector3<f32> = Vector3::new(1.0, 2.0, 2.0);
/// assert_eq!(vector[1], 2.0);
/// assert_eq!(vector.magnitude(), 3.0);
/// assert_eq!(vector * 2.0, Vector3::new(2.0, 4.0, 4.0));
/// ```
///
#[derive(Copy, Clone, Debug, Default)]
pub struct Vector3<T> {
    /// X component of vector.
    ///
    pub x: T,

    /// Y component of vector.
    ///
    pub y: T,

    /// Z component of vector.
    ///
    pub z: T,
}
impl<T: Scalar> Vector3<T> {
    /// Initializes vector from its components.
    ///
    pub fn new(x: T, y: T, z: T) -> Self {
        Vector3 { x, y, z }
    }
    /// Initializes vector with all components set to given value.
    ///
    pub fn splat(value: T) -> Self {
        Vector3::new(value, value, value)
    }
    /// Initializes vector with zeroes.
    ///
    pub fn zero() -> Self {
        Vector3::splat(T::zero())
    }
    /// Initializes vector with ones.
    ///
    pub fn one() -> Self {
        Vector3::splat(T::one())
    }

    /// Returns elements of vector.
    ///
    pub fn elements(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
    /// Returns component by its index (`None` if index is not in [0; 2]).
    ///
    pub fn get(&self, index: usize) -> Option<T> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => Some(self.z),
            _ => None,
        }
    }

    /// Applies function to every vector component and returns changed vector.
    ///
    pub fn map(self, f: impl Fn(T) -> T) -> Self {
        Vector3::new(f(self.x), f(self.y), f(self.z))
    }
    /// Combines vectors by applying function on their components.
    ///
    pub fn combine(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
        Vector3::new(f(self.x, other.x), f(self.y, other.y), f(self.z, other.z))
    }

    /// Performs dot product operation on two vectors.
    ///
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    /// Performs cross product operation on two vectors.
    ///
    /// # Example
    /// ```rust
    /// # use linmath::vectors::Vector3;
    /// assert_eq!(Vector3::right().cross(Vector3::up()), Vector3::<f32>::forward());
    /// ```
    ///
    pub fn cross(self, other: Self) -> Self {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
    /// Returns squared magnitude of a vector.
    ///
    pub fn sqr_magnitude(&self) -> T {
        self.dot(*self)
    }

    /// Returns point moved by offset.
    ///
    pub fn translate(self, offset: Self) -> Self {
        self + offset
    }
    /// Scales every component by corresponding component of `factors`.
    ///
    /// # Example
    /// ```rust
    /// # use linmath::vectors::Vector3;
    /// assert_eq!(Vector3::new(1, 2, 3).scale(Vector3::new(2, 0, -1)), Vector3::new(2, 0, -3));
    /// ```
    ///
    pub fn scale(self, factors: Self) -> Self {
        self * factors
    }
}
impl<T: Scalar + Signed> Vector3<T> {
    /// Returns `(0, 1, 0)` vector.
    ///
    pub fn up() -> Self {
        Vector3::new(T::zero(), T::one(), T::zero())
    }
    /// Returns `(0, -1, 0)` vector.
    ///
    pub fn down() -> Self {
        -Vector3::up()
    }
    /// Returns `(-1, 0, 0)` vector.
    ///
    pub fn left() -> Self {
        -Vector3::right()
    }
    /// Returns `(1, 0, 0)` vector.
    ///
    pub fn right() -> Self {
        Vector3::new(T::one(), T::zero(), T::zero())
    }
    /// Returns `(0, 0, 1)` vector.
    ///
    pub fn forward() -> Self {
        Vector3::new(T::zero(), T::zero(), T::one())
    }
    /// Returns `(0, 0, -1)` vector.
    ///
    pub fn backward() -> Self {
        -Vector3::forward()
    }
}
impl<T: Scalar + Float> Vector3<T> {
    /// Returns magnitude of vector.
    ///
    pub fn magnitude(&self) -> T {
        self.sqr_magnitude().sqrt()
    }
    /// Returns new vector that is normalized.
    ///
    /// Zero vector has no direction, so it is returned as is.
    ///
    pub fn normalized(self) -> Self {
        let magnitude: T = self.magnitude();
        if magnitude.is_zero() {
            return self;
        }
        self / magnitude
    }
    /// Checks whether vector has unit length.
    ///
    pub fn is_unit(&self) -> bool {
        self.sqr_magnitude().approx_eq(T::one())
    }
    /// Returns unsigned angle between two vectors, in `[0; pi]`.
    ///
    /// Zero vector has no direction, so angle with it is zero.
    ///
    /// # Example
    /// ```rust
    /// # use linmath::{angles::Radian, vectors::Vector3};
    /// # use std::f64::consts::FRAC_PI_2;
    /// assert_eq!(Vector3::<f64>::up().angle_from(Vector3::right()), Radian::new(FRAC_PI_2));
    /// ```
    ///
    pub fn angle_from(self, other: Self) -> Radian<T> {
        let magnitudes: T = self.magnitude() * other.magnitude();
        if magnitudes.is_zero() {
            return Radian::new(T::zero());
        }
        let cos: T = clamp(self.dot(other) / magnitudes, -T::one(), T::one());
        Radian::new(cos.acos())
    }
}
impl<T: Scalar> Index<usize> for Vector3<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index {index} is out of bounds for three-dimensional vector"),
        }
    }
}
impl<T: Scalar> IndexMut<usize> for Vector3<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index {index} is out of bounds for three-dimensional vector"),
        }
    }
}
impl<T: Scalar + Neg<Output = T>> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}
impl_vector_vector_operations!(Vector3, ((Add, add, +),
                                         (Sub, sub, -),
                                         (Mul, mul, *),
                                         (Div, div, /),));
impl_vector_assignoperations!(Vector3, Self, ((AddAssign, add_assign, +),
                                               (SubAssign, sub_assign, -),
                                               (MulAssign, mul_assign, *),
                                               (DivAssign, div_assign, /),));
impl_vector_rhs_operations!(Vector3, ((Mul, mul, *),
                                      (Div, div, /),));
impl_vector_assignoperations!(Vector3, T, ((MulAssign, mul_assign, *),
                                           (DivAssign, div_assign, /),));
impl<T: Scalar> PartialEq for Vector3<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements()
            .iter()
            .zip(other.elements().iter())
            .all(|(&a, &b)| a.approx_eq(b))
    }
}
impl<T: Scalar> From<[T; 3]> for Vector3<T> {
    fn from(elements: [T; 3]) -> Self {
        Vector3::new(elements[0], elements[1], elements[2])
    }
}
