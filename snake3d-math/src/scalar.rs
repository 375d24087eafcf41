use std::{
    fmt::{Debug, Display},
    ops::{Add, AddAssign, DivAssign, Mul, MulAssign, Sub, SubAssign},
};

use approx::{RelativeEq, UlpsEq};
use num_traits::Float;

/// Default tolerance used by [`equal_by`] when callers have no better value.
pub const EPSILON: f64 = 0.005;

/// Floating-point element type of a [`Matrix`](crate::Matrix).
///
/// Implemented for `f32` and `f64`; there is no support for integer or
/// arbitrary-precision elements.
pub trait Scalar:
    Float
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + RelativeEq<Epsilon = Self>
    + UlpsEq<Epsilon = Self>
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
{
    /// Converts an `f64` literal into this type, rounding if necessary.
    fn lit(value: f64) -> Self;
}

impl Scalar for f32 {
    #[inline(always)]
    fn lit(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    #[inline(always)]
    fn lit(value: f64) -> Self {
        value
    }
}

#[inline]
pub fn sqr<T: Scalar>(t: T) -> T {
    t * t
}

#[inline]
pub fn cube<T: Scalar>(t: T) -> T {
    t * t * t
}

/// Converts degrees to radians.
#[inline]
pub fn deg_to_rad<T: Scalar>(degrees: T) -> T {
    degrees * T::lit(std::f64::consts::PI / 180.0)
}

/// Converts radians to degrees.
#[inline]
pub fn rad_to_deg<T: Scalar>(radians: T) -> T {
    radians * T::lit(180.0 / std::f64::consts::PI)
}

/// Returns `t` clamped to `[min, max]`.
#[inline]
pub fn clamp<T: PartialOrd>(t: T, min: T, max: T) -> T {
    if t > max {
        max
    } else if t < min {
        min
    } else {
        t
    }
}

/// Returns true if `a` and `b` differ by at most `epsilon`.
#[inline]
pub fn equal_by<T: Scalar>(a: T, b: T, epsilon: T) -> bool {
    (a - b).abs() <= epsilon
}

/// Fractional part of `t`, always in `[0, 1)` for finite input.
#[inline]
pub fn frac<T: Scalar>(t: T) -> T {
    t - t.floor()
}

/// Linear interpolation between two samples.
///
/// `U` may be a scalar or any matrix type, which makes this usable for
/// blending colors and positions.
#[inline]
pub fn lerp<T, U>(percent: T, a: U, b: U) -> U
where
    T: Scalar,
    U: Add<Output = U> + Mul<T, Output = U>,
{
    a * (T::one() - percent) + b * percent
}

/// Cosine interpolation; eases in and out of both samples.
#[inline]
pub fn cosine_interpolate<T, U>(percent: T, a: U, b: U) -> U
where
    T: Scalar,
    U: Add<Output = U> + Mul<T, Output = U>,
{
    let eased = (T::one() - (percent * T::lit(std::f64::consts::PI)).cos()) * T::lit(0.5);
    lerp(eased, a, b)
}

/// Cubic interpolation between `b` and `c`, using `a` and `d` as the
/// neighbouring samples.
pub fn cubic_interpolate<T, U>(percent: T, a: U, b: U, c: U, d: U) -> U
where
    T: Scalar,
    U: Copy + Add<Output = U> + Sub<Output = U> + Mul<T, Output = U>,
{
    let p = (d - c) - (a - b);
    let q = (a - b) - p;
    let r = c - a;
    ((p * percent + q) * percent + r) * percent + b
}
