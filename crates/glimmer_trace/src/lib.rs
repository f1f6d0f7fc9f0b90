//! Ray tracing primitives for the glimmer toolkit.
//!
//! Builds the classic tracing vocabulary on top of `glimmer_math`:
//! hittable surfaces, scatterable materials, a thin-lens camera, and
//! plain-text color output.

mod camera;
mod color;
mod hittable;
mod material;
mod sphere;

pub use camera::Camera;
pub use color::{write_color, write_ppm_header, Color};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Dielectric, Lambertian, Material, Metal, Scatter};
pub use sphere::Sphere;

/// Re-export the math types used throughout the public API.
pub use glimmer_math::{Interval, Point3, Ray, Vec3};
