//! 3-component `f64` vector with value semantics.
//!
//! Doubles as a position (`Point3`) and an RGB color; the aliases keep the
//! semantic role visible in signatures without introducing new types.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::scalar;

/// A 3D vector of `f64` components.
///
/// Equality is approximate: two vectors compare equal when every component
/// pair differs by less than [`scalar::EPSILON`], tolerating floating-point
/// drift from chained arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A point in 3D space.
pub type Point3 = Vec3;

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const ONE: Vec3 = Vec3 {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };
    pub const X: Vec3 = Vec3 {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };
    pub const Y: Vec3 = Vec3 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };
    pub const Z: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a vector with all components set to `v`.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Squared Euclidean length. Cheaper than `length` when only comparing.
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    #[inline]
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Angle between two vectors in radians.
    ///
    /// Undefined Result for zero-length operands: the division produces
    /// NaN, which `acos` propagates.
    #[inline]
    pub fn angle(self, other: Vec3) -> f64 {
        (self.dot(other) / (self.length() * other.length())).acos()
    }

    /// The unit vector pointing in the same direction.
    ///
    /// Undefined Result for the zero vector: components become NaN.
    #[inline]
    pub fn normalize(self) -> Vec3 {
        self / self.length()
    }

    /// True when every component's magnitude is below `1e-8`.
    ///
    /// Used to catch degenerate scatter directions before normalizing.
    #[inline]
    pub fn near_zero(self) -> bool {
        const S: f64 = 1e-8;
        self.x.abs() < S && self.y.abs() < S && self.z.abs() < S
    }

    /// Reflect about the unit normal `n`: `v - 2 * dot(v, n) * n`.
    #[inline]
    pub fn reflect(self, n: Vec3) -> Vec3 {
        self - n * (2.0 * self.dot(n))
    }

    /// Snell's-law refraction of the unit vector `self` through a surface
    /// with unit normal `n` and refraction ratio `etai_over_etat`.
    #[inline]
    pub fn refract(self, n: Vec3, etai_over_etat: f64) -> Vec3 {
        let cos_theta = (-self).dot(n).min(1.0);
        let r_out_perp = (self + n * cos_theta) * etai_over_etat;
        let r_out_parallel = n * -(1.0 - r_out_perp.length_squared()).abs().sqrt();
        r_out_perp + r_out_parallel
    }
}

impl PartialEq for Vec3 {
    fn eq(&self, other: &Self) -> bool {
        scalar::equals(self.x, other.x)
            && scalar::equals(self.y, other.y)
            && scalar::equals(self.z, other.z)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    #[inline]
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Add<f64> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn add(self, t: f64) -> Vec3 {
        Vec3::new(self.x + t, self.y + t, self.z + t)
    }
}

impl Add<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn add(self, v: Vec3) -> Vec3 {
        v + self
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    #[inline]
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Sub<f64> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn sub(self, t: f64) -> Vec3 {
        Vec3::new(self.x - t, self.y - t, self.z - t)
    }
}

impl Mul for Vec3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, t: f64) -> Vec3 {
        Vec3::new(self.x * t, self.y * t, self.z * t)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        v * self
    }
}

impl Div for Vec3 {
    type Output = Vec3;

    #[inline]
    fn div(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn div(self, t: f64) -> Vec3 {
        Vec3::new(self.x / t, self.y / t, self.z / t)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, other: Vec3) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, other: Vec3) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl MulAssign<f64> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, t: f64) {
        self.x *= t;
        self.y *= t;
        self.z *= t;
    }
}

impl DivAssign<f64> for Vec3 {
    #[inline]
    fn div_assign(&mut self, t: f64) {
        self.x /= t;
        self.y /= t;
        self.z /= t;
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of range: {index}"),
        }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(Vec3::splat(4.0), Vec3::new(4.0, 4.0, 4.0));
    }

    #[test]
    fn test_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(b / a, Vec3::new(4.0, 2.5, 2.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a / 2.0, Vec3::new(0.5, 1.0, 1.5));
        assert_eq!(a + 1.0, Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(1.0 + a, a + 1.0);
        assert_eq!(a - 1.0, Vec3::new(0.0, 1.0, 2.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_compound_assignment() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v += Vec3::ONE;
        assert_eq!(v, Vec3::new(2.0, 3.0, 4.0));
        v -= Vec3::ONE;
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        v *= 2.0;
        assert_eq!(v, Vec3::new(2.0, 4.0, 6.0));
        v /= 2.0;
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_approximate_equality() {
        let a = Vec3::new(0.1, 0.2, 0.3);
        let b = Vec3::new(1.0, 2.0, 3.0);

        // Round trips through floating-point arithmetic stay equal
        assert_eq!(a + b - b, a);
        assert_ne!(a, a + Vec3::splat(1e-11));
    }

    #[test]
    fn test_length() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn test_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, -5.0, 6.0);
        assert_eq!(a.dot(b), 12.0);
        assert_eq!(Vec3::X.dot(Vec3::Y), 0.0);
    }

    #[test]
    fn test_cross() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);

        // The cross product is orthogonal to both operands
        let a = Vec3::new(1.5, -2.0, 0.5);
        let b = Vec3::new(0.25, 3.0, -1.0);
        let c = a.cross(b);
        assert!(c.dot(a).abs() < 1e-12);
        assert!(c.dot(b).abs() < 1e-12);
    }

    #[test]
    fn test_angle() {
        use std::f64::consts::PI;
        assert!((Vec3::X.angle(Vec3::Y) - PI / 2.0).abs() < 1e-12);
        assert!(Vec3::X.angle(Vec3::X).abs() < 1e-6);
        assert!((Vec3::X.angle(-Vec3::X) - PI).abs() < 1e-6);
    }

    #[test]
    fn test_normalize() {
        let v = Vec3::new(1.0, -2.0, 3.0).normalize();
        assert!((v.length() - 1.0).abs() < 1e-12);

        // Zero vector propagates NaN rather than erroring
        let z = Vec3::ZERO.normalize();
        assert!(z.x.is_nan());
    }

    #[test]
    fn test_near_zero() {
        assert!(Vec3::ZERO.near_zero());
        assert!(Vec3::splat(1e-9).near_zero());
        assert!(!Vec3::new(1e-9, 1e-7, 0.0).near_zero());
    }

    #[test]
    fn test_reflect() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        let n = Vec3::Y;
        assert_eq!(v.reflect(n), Vec3::new(1.0, 1.0, 0.0));

        // Reflection flips the normal component
        let v = Vec3::new(0.3, -0.8, 0.2).normalize();
        assert!((v.reflect(n).dot(n) + v.dot(n)).abs() < 1e-12);
    }

    #[test]
    fn test_refract() {
        // Matched indices leave the direction unchanged
        let uv = Vec3::new(1.0, -1.0, 0.0).normalize();
        assert_eq!(uv.refract(Vec3::Y, 1.0), uv);

        // Head-on rays pass straight through at any ratio
        let straight = (-Vec3::Y).refract(Vec3::Y, 1.5);
        assert_eq!(straight, -Vec3::Y);

        // Entering a denser medium bends toward the normal
        let bent = uv.refract(Vec3::Y, 1.0 / 1.5);
        assert!(bent.x.abs() < uv.x.abs());
        assert!(bent.y < 0.0);
        assert!((bent.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_index() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v[2], 3.0);
        v[1] = 5.0;
        assert_eq!(v.y, 5.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range() {
        let _ = Vec3::ZERO[3];
    }

    #[test]
    fn test_display() {
        assert_eq!(Vec3::new(1.0, 2.5, -3.0).to_string(), "(1, 2.5, -3)");
    }
}
