//! `angles` submodule implements [`Degree`] and [`Radian`] newtypes which wrap angle values of any
//! [`Scalar`] type and convert losslessly between each other.
//!
//! Matrix transforms consume [`Radian`] for rotations; [`DEG2RAD`] and [`RAD2DEG`] consts are
//! exposed for callers that work with raw numbers.
//!

use crate::scalars::Scalar;
use num_traits::{Float, FloatConst};
use std::{
    cmp::Ordering,
    f64::consts::PI,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// Multiplier that converts degrees to radians.
///
pub const DEG2RAD: f64 = PI / 180.0;
/// Multiplier that converts radians to degrees.
///
pub const RAD2DEG: f64 = 180.0 / PI;

/// Converts `f64` constant into `T`.
///
/// Float types always can represent those constants (maybe with precision loss),
/// so `NaN` fallback is never observed.
///
fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}
/// Normalizes given value to [0.0; full_turn).
///
fn normalize<T: Float>(value: T, full_turn: T) -> T {
    if value.is_finite() {
        let normalized: T = value - (value / full_turn).floor() * full_turn;
        // `value` that is slightly below zero can round up to exactly `full_turn`
        if normalized >= full_turn {
            T::zero()
        } else {
            normalized
        }
    } else {
        T::zero()
    }
}

/// Implements operations that are shared by angle newtypes.
///
macro_rules! impl_angle {
    ($struct:ident) => {
        impl<T: Scalar> $struct<T> {
            /// Wraps value into angle.
            ///
            pub fn new(value: T) -> Self {
                $struct(value)
            }

            /// Returns underlying value.
            ///
            pub fn value(&self) -> T {
                self.0
            }
        }
        impl<T: Scalar + Neg<Output = T>> Neg for $struct<T> {
            type Output = Self;

            fn neg(self) -> Self::Output {
                $struct(-self.0)
            }
        }
        impl<T: Scalar> Add<Self> for $struct<T> {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                $struct(self.0 + rhs.0)
            }
        }
        impl<T: Scalar> Sub<Self> for $struct<T> {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                $struct(self.0 - rhs.0)
            }
        }
        impl<T: Scalar> Add<T> for $struct<T> {
            type Output = Self;

            fn add(self, rhs: T) -> Self::Output {
                $struct(self.0 + rhs)
            }
        }
        impl<T: Scalar> Sub<T> for $struct<T> {
            type Output = Self;

            fn sub(self, rhs: T) -> Self::Output {
                $struct(self.0 - rhs)
            }
        }
        impl<T: Scalar> Mul<T> for $struct<T> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                $struct(self.0 * rhs)
            }
        }
        impl<T: Scalar> Div<T> for $struct<T> {
            type Output = Self;

            fn div(self, rhs: T) -> Self::Output {
                $struct(self.0 / rhs)
            }
        }
        impl<T: Scalar> AddAssign<Self> for $struct<T> {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }
        impl<T: Scalar> SubAssign<Self> for $struct<T> {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }
        impl<T: Scalar> AddAssign<T> for $struct<T> {
            fn add_assign(&mut self, rhs: T) {
                *self = *self + rhs;
            }
        }
        impl<T: Scalar> SubAssign<T> for $struct<T> {
            fn sub_assign(&mut self, rhs: T) {
                *self = *self - rhs;
            }
        }
        impl<T: Scalar> MulAssign<T> for $struct<T> {
            fn mul_assign(&mut self, rhs: T) {
                *self = *self * rhs;
            }
        }
        impl<T: Scalar> DivAssign<T> for $struct<T> {
            fn div_assign(&mut self, rhs: T) {
                *self = *self / rhs;
            }
        }
        impl<T: Scalar> PartialEq for $struct<T> {
            fn eq(&self, other: &Self) -> bool {
                self.0.approx_eq(other.0)
            }
        }
        impl<T: Scalar> PartialOrd for $struct<T> {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                if self == other {
                    Some(Ordering::Equal)
                } else {
                    self.0.partial_cmp(&other.0)
                }
            }
        }
    };
}

/// [`Degree`] is a newtype that represents angle in degrees.
///
/// Value is not restricted: use [`Degree::wrap`] to bring it into [0.0; 360.0).
///
/// # Example
/// ```rust
/// # use linmath::angles::{Degree, Radian};
/// # use std::f64::consts::FRAC_PI_2;
/// let angle: Degree<f64> = Degree::new(-270.0);
/// assert_eq!(angle.wrap(), Degree::new(90.0));
/// assert_eq!(Radian::from(angle.wrap()), Radian::new(FRAC_PI_2));
/// ```
///
#[derive(Copy, Clone, Debug, Default)]
pub struct Degree<T>(T);
impl_angle!(Degree);
impl<T: Scalar + Float> Degree<T> {
    /// Returns angle that is normalized to [0.0; 360.0).
    ///
    /// Non-finite values are normalized to 0.0.
    ///
    pub fn wrap(self) -> Self {
        Degree(normalize(self.0, constant(360.0)))
    }

    /// Returns this angle in radians.
    ///
    pub fn radians(self) -> Radian<T> {
        Radian(self.0.to_radians())
    }
}
impl<T: Scalar + Float> From<Radian<T>> for Degree<T> {
    fn from(radian: Radian<T>) -> Self {
        radian.degrees()
    }
}

/// [`Radian`] is a newtype that represents angle in radians.
///
/// Value is not restricted: use [`Radian::wrap`] to bring it into [0.0; TAU).
///
/// # Example
/// ```rust
/// # use linmath::angles::{Degree, Radian};
/// # use std::f32::consts::PI;
/// let angle: Radian<f32> = Radian::new(PI);
/// assert_eq!(angle.degrees(), Degree::new(180.0));
/// assert_eq!(angle.cos(), -1.0);
/// ```
///
#[derive(Copy, Clone, Debug, Default)]
pub struct Radian<T>(T);
impl_angle!(Radian);
impl<T: Scalar + Float + FloatConst> Radian<T> {
    /// Returns angle that is normalized to [0.0; TAU).
    ///
    /// Non-finite values are normalized to 0.0.
    ///
    pub fn wrap(self) -> Self {
        Radian(normalize(self.0, T::TAU()))
    }
}
impl<T: Scalar + Float> Radian<T> {
    /// Returns this angle in degrees.
    ///
    pub fn degrees(self) -> Degree<T> {
        Degree(self.0.to_degrees())
    }

    /// Returns sine of angle.
    ///
    pub fn sin(&self) -> T {
        self.0.sin()
    }
    /// Returns cosine of angle.
    ///
    pub fn cos(&self) -> T {
        self.0.cos()
    }
    /// Returns sine and cosine of angle packed in tuple.
    ///
    pub fn sin_cos(&self) -> (T, T) {
        self.0.sin_cos()
    }
    /// Returns tangent of angle.
    ///
    pub fn tan(&self) -> T {
        self.0.tan()
    }
}
impl<T: Scalar + Float> From<Degree<T>> for Radian<T> {
    fn from(degree: Degree<T>) -> Self {
        degree.radians()
    }
}
