//! Ray representation: r(t) = origin + t * direction.

use crate::{Point3, Vec3};

/// A ray in 3D space with origin and direction.
///
/// The direction is not required to be normalized. `t` is unrestricted;
/// negative parameters are meaningful to some algorithms, so callers bound
/// the range themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub const fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}
