//! Scalar helpers shared across the math crate.

use std::f64::consts::PI;

/// Tolerance for approximate `f64` comparison.
///
/// Also the per-component tolerance of `Vec3`'s `PartialEq`.
pub const EPSILON: f64 = 1e-12;

/// Convert an angle in degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Linear interpolation between `a` and `b` by `ratio`.
///
/// `ratio` is not clamped; values outside `[0, 1]` extrapolate.
#[inline]
pub fn lerp(a: f64, b: f64, ratio: f64) -> f64 {
    a * (1.0 - ratio) + b * ratio
}

/// Approximate equality within [`EPSILON`].
#[inline]
pub fn equals(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
