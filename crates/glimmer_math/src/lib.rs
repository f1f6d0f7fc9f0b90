//! Math toolkit for the glimmer ray tracer.
//!
//! Provides the `Vec3` value type with the usual vector algebra, rays,
//! parametric intervals, scalar helpers, and sampling routines that take an
//! explicitly injected random generator.

mod interval;
mod ray;
pub mod sample;
pub mod scalar;
mod vec3;

pub use interval::Interval;
pub use ray::Ray;
pub use vec3::{Point3, Vec3};
