//! Hittable trait and HitRecord for ray-surface intersection.

use std::sync::Arc;

use glimmer_math::{Interval, Point3, Ray, Vec3};

use crate::material::Material;

/// Record of a ray-surface intersection.
///
/// Transient: rebuilt on every intersection query.
#[derive(Clone)]
pub struct HitRecord {
    /// Point of intersection
    pub p: Point3,
    /// Surface normal at the intersection (always points against the ray)
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: Arc<dyn Material>,
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl HitRecord {
    /// Set the face normal based on ray direction and outward normal.
    ///
    /// The normal is stored pointing against the ray direction, so
    /// downstream shading can assume outward-facing normals; `front_face`
    /// records which side was hit.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        self.front_face = ray.direction().dot(outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for surfaces that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test for intersection with `t` strictly inside `ray_t`.
    ///
    /// Returns the nearest such intersection if one exists.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

/// A list of hittable surfaces, scanned linearly.
#[derive(Default)]
pub struct HittableList {
    objects: Vec<Arc<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a surface to the list.
    pub fn add(&mut self, object: Arc<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Remove all surfaces from the list.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of surfaces.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest_so_far = ray_t.max;
        let mut hit = None;

        for object in &self.objects {
            if let Some(rec) = object.hit(ray, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                hit = Some(rec);
            }
        }

        hit
    }
}
