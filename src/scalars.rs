//! `scalars` submodule implements the numeric groundwork that the rest of `linmath` is built on.
//!
//! [`Scalar`] trait bounds every element type of vectors, angles and matrices.
//!
//! [`ApproxEq`] trait, [`almost_equal`] function and per-type epsilons are dealing with
//! floating point equality. Every `PartialEq` implementation in this crate goes through them.
//!
//! [`FloatOperations`] trait and [`CLOSE_TO_ZERO`], [`CLOSE_TO_ONE`] consts are dealing with
//! distortions that may be caused by float operations.
//!

use num_traits::{Float, Num, NumCast, Signed};
use std::{
    fmt::Debug,
    ops::{Mul, MulAssign, Neg},
};

/// [`ApproxEq`] trait implements equality that tolerates rounding errors.
///
/// Floating point values are equal when their difference does not exceed `epsilon` scaled by the
/// largest of their magnitudes (but never less than `epsilon` itself), so the tolerance is absolute
/// near zero and relative for big values.
/// Integers are compared with an absolute tolerance which defaults to zero.
///
/// # Example
/// ```rust
/// # use linmath::scalars::ApproxEq;
/// assert!((0.1_f32 + 0.2).approx_eq(0.3));
/// assert!(!1.0_f64.approx_eq(1.001));
/// assert!(1.0_f64.approx_eq_eps(1.001, 0.01));
/// assert!(!3_i32.approx_eq(4));
/// assert!(3_i32.approx_eq_eps(4, 1));
/// ```
///
pub trait ApproxEq: Copy {
    /// Default tolerance that is used by [`ApproxEq::approx_eq`].
    ///
    const EPSILON: Self;

    /// Checks whether two values are equal within given tolerance.
    ///
    fn approx_eq_eps(self, other: Self, epsilon: Self) -> bool;

    /// Checks whether two values are equal within default tolerance.
    ///
    fn approx_eq(self, other: Self) -> bool {
        self.approx_eq_eps(other, Self::EPSILON)
    }
}
/// Implements [`ApproxEq`] for primitive numeric types.
///
macro_rules! impl_approx_eq {
    (i $($t:ty,)+) => {$(
        impl ApproxEq for $t {
            const EPSILON: Self = 0;

            fn approx_eq_eps(self, other: Self, epsilon: Self) -> bool {
                self.abs_diff(other) <= epsilon.unsigned_abs()
            }
        }
    )+};

    (u $($t:ty,)+) => {$(
        impl ApproxEq for $t {
            const EPSILON: Self = 0;

            fn approx_eq_eps(self, other: Self, epsilon: Self) -> bool {
                self.abs_diff(other) <= epsilon
            }
        }
    )+};

    (f $(($t:ty, $epsilon:literal),)+) => {$(
        impl ApproxEq for $t {
            const EPSILON: Self = $epsilon;

            fn approx_eq_eps(self, other: Self, epsilon: Self) -> bool {
                if self == other {
                    return true;
                }
                if !self.is_finite() || !other.is_finite() {
                    return false;
                }

                let norm: $t = self.abs().max(other.abs()).max(1.0);
                (self - other).abs() <= norm * epsilon.abs()
            }
        }
    )+};
}
impl_approx_eq!(i i8, i16, i32, i64, i128, isize,);
impl_approx_eq!(u u8, u16, u32, u64, u128, usize,);
impl_approx_eq!(f(f32, 0.00001), (f64, 0.000000001),);

/// This function implements approximate equality for `linmath` crate.
///
/// It is used for implementing `PartialEq` on every type that is generic over [`Scalar`].
///
/// # Example
/// ```rust
/// # use linmath::scalars::almost_equal;
/// assert!(almost_equal(0.15 + 0.15, 0.1 + 0.2));
/// assert!(!almost_equal(f32::NAN, f32::NAN));
/// ```
///
pub fn almost_equal<T: ApproxEq>(a: T, b: T) -> bool {
    a.approx_eq(b)
}

/// [`Scalar`] trait lists everything that `linmath` requires from an element type.
///
/// It is implemented for every type that satisfies the bounds, which includes all primitive integers
/// and floats.
///
pub trait Scalar: Copy + Debug + PartialOrd + Num + NumCast + ApproxEq {}
impl<T> Scalar for T where T: Copy + Debug + PartialOrd + Num + NumCast + ApproxEq {}

/// [`Sign`] unit-only enum represents value's sign (value can be negative, positive or be equal to zero).
///
/// It is used to drive alternating signs of cofactor expansion.
///
/// # Example
/// ```rust
/// # use linmath::scalars::Sign;
/// let mut sign: Sign = Sign::Positive;
/// sign = -sign;
/// assert_eq!(sign, Sign::Negative * Sign::Positive);
/// assert_eq!(Sign::checkerboard(1, 2), Sign::Negative);
/// assert_eq!(Sign::Negative.apply(5), -5);
/// ```
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Negative sign (-1).
    ///
    Negative = -1,
    /// Zero (0).
    ///
    Zero = 0,
    /// Positive sign (+1).
    ///
    Positive = 1,
}
impl Sign {
    /// Takes sign from given value.
    ///
    pub fn of<T: Scalar>(value: T) -> Sign {
        if value > T::zero() {
            Sign::Positive
        } else if value < T::zero() {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    /// Returns `(-1)^index` as a sign.
    ///
    pub fn alternating(index: usize) -> Sign {
        if index % 2 == 0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
    /// Returns sign of `(row, column)` cell in checkerboard pattern (`(-1)^(row + column)`).
    ///
    pub fn checkerboard(row: usize, column: usize) -> Sign {
        Sign::alternating(row + column)
    }

    /// Multiplies value by this sign.
    ///
    pub fn apply<T: Scalar + Signed>(self, value: T) -> T {
        match self {
            Sign::Negative => -value,
            Sign::Zero => T::zero(),
            Sign::Positive => value,
        }
    }
}
impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Negative => Self::Positive,
            Self::Zero => Self::Zero,
            Self::Positive => Self::Negative,
        }
    }
}
impl Mul<Self> for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Positive, Self::Positive) | (Self::Negative, Self::Negative) => Self::Positive,
            (Self::Positive, Self::Negative) | (Self::Negative, Self::Positive) => Self::Negative,
            _ => Self::Zero,
        }
    }
}
impl MulAssign<Self> for Sign {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Returns absolute value.
///
/// # Example
/// ```rust
/// # use linmath::scalars::abs;
/// assert_eq!(abs(-5), 5);
/// assert_eq!(abs(-2.5123), 2.5123);
/// ```
///
pub fn abs<T: Scalar>(value: T) -> T {
    if value < T::zero() {
        T::zero() - value
    } else {
        value
    }
}
/// Returns the smaller of two values (`a` on ties).
///
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}
/// Returns the bigger of two values (`a` on ties).
///
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}
/// Restricts value to `[lower; upper]`.
///
/// # Example
/// ```rust
/// # use linmath::scalars::clamp;
/// assert_eq!(clamp(2.5, 0.0, 5.0), 2.5);
/// assert_eq!(clamp(-2.5, 0.0, 5.0), 0.0);
/// assert_eq!(clamp(7.5, 0.0, 5.0), 5.0);
/// ```
///
pub fn clamp<T: PartialOrd>(value: T, lower: T, upper: T) -> T {
    max(lower, min(value, upper))
}
/// Wraps value that lies outside of `[lower; upper]` around the range.
///
/// Values below the range are wrapped from `upper` downwards, values above the range are wrapped from
/// `lower` upwards. Empty range collapses everything into `lower`.
///
/// # Example
/// ```rust
/// # use linmath::scalars::wrap;
/// assert_eq!(wrap(2.5, 0.0, 5.0), 2.5);
/// assert_eq!(wrap(-1.5, 0.0, 5.0), 3.5);
/// assert_eq!(wrap(-10.0, 0.0, 5.0), 5.0);
/// assert_eq!(wrap(28.0, 0.0, 5.0), 3.0);
/// assert_eq!(wrap(13, 10, 12), 11);
/// ```
///
pub fn wrap<T: Scalar>(value: T, lower: T, upper: T) -> T {
    let range: T = upper - lower;
    if range == T::zero() {
        return lower;
    }

    if value < lower {
        upper - (lower - value) % range
    } else if value > upper {
        lower + (value - lower) % range
    } else {
        value
    }
}
/// Returns the largest integral value that is not greater than given value.
///
pub fn floor<T: Float>(value: T) -> T {
    value.floor()
}
/// Returns the smallest integral value that is not less than given value.
///
pub fn ceil<T: Float>(value: T) -> T {
    value.ceil()
}
/// Raises base to given power.
///
/// # Example
/// ```rust
/// # use linmath::scalars::power;
/// assert_eq!(power(2.0, 12.0), 4096.0);
/// assert_eq!(power(7.0, 0.0), 1.0);
/// ```
///
pub fn power<T: Float>(base: T, exponent: T) -> T {
    base.powf(exponent)
}
/// Returns factorial of the integral part of value's magnitude, carrying value's sign.
///
/// Values that cannot be counted up to (infinities, NaN) are returned as is.
/// Results that do not fit into `T` overflow as usual arithmetic on `T` would.
///
/// # Example
/// ```rust
/// # use linmath::scalars::factorial;
/// assert_eq!(factorial(0.0), 1.0);
/// assert_eq!(factorial(5), 120);
/// assert_eq!(factorial(-5.0), -120.0);
/// ```
///
pub fn factorial<T: Scalar>(value: T) -> T {
    let count: u64 = match abs(value).to_u64() {
        Some(count) => count,
        None => return value,
    };

    let (mut result, mut factor): (T, T) = (T::one(), T::one());
    for _ in 1..count {
        factor = factor + T::one();
        result = result * factor;
    }

    if value < T::zero() {
        T::zero() - result
    } else {
        result
    }
}

/// Constant that is used in floating point correction.
///
/// It defines the threshold for fractional part to be considered small enough to then be floored.
///
pub const CLOSE_TO_ZERO: f64 = 0.0001;
/// Constant that is used in floating point correction.
///
/// It defines the threshold for fractional part to be considered big enough to then be ceiled.
///
pub const CLOSE_TO_ONE: f64 = 0.9999;
/// [`FloatOperations`] trait defines `correct_to` and `round_up_to` associated functions that work
/// with floating point values.
///
pub trait FloatOperations {
    /// Corrects distortions that may be caused by float operations.
    ///
    /// For example, this function fixes such things as -0.0 into 0.0,
    /// 0.0001 (anything that is less than `CLOSE_TO_ZERO`) into 0.0 and
    /// 0.9999 (anything that is greater than `CLOSE_TO_ONE`) into 1.0.
    ///
    fn correct_to(self, digits: i32) -> Self;

    /// Rounds to given amount of digits after floating point.
    ///
    /// Passing negative number shifts floating point to the left.
    ///
    fn round_up_to(self, digits: i32) -> Self;
}
/// Implements [`FloatOperations`] for primitive floats.
///
macro_rules! impl_float_operations {
    ($(($t:ty, $close_to_zero:expr, $close_to_one:expr),)+) => {$(
        impl FloatOperations for $t {
            fn correct_to(self, digits: i32) -> Self {
                let ten: $t = 10.0;
                let mul: $t = ten.powi(digits);

                let n: $t = self * mul;
                if n == 0.0 {
                    return 0.0;
                }

                let fract: $t = n.abs().fract();
                if !($close_to_zero..=$close_to_one).contains(&fract) {
                    return n.round() / mul;
                }

                n / mul
            }

            fn round_up_to(self, digits: i32) -> Self {
                let ten: $t = 10.0;
                let mul: $t = ten.powi(digits);
                (self * mul).round() / mul
            }
        }
    )+};
}
impl_float_operations!(
    (f32, CLOSE_TO_ZERO as f32, CLOSE_TO_ONE as f32),
    (f64, CLOSE_TO_ZERO, CLOSE_TO_ONE),
);
impl<T: FloatOperations, const N: usize> FloatOperations for [T; N] {
    fn correct_to(self, digits: i32) -> Self {
        self.map(|elem| elem.correct_to(digits))
    }

    fn round_up_to(self, digits: i32) -> Self {
        self.map(|elem| elem.round_up_to(digits))
    }
}
