//! Sphere primitive for ray tracing.

use std::sync::Arc;

use glimmer_math::{Interval, Point3, Ray};

use crate::hittable::{HitRecord, Hittable};
use crate::material::Material;

/// A sphere surface.
pub struct Sphere {
    center: Point3,
    radius: f64,
    material: Arc<dyn Material>,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Point3, radius: f64, material: Arc<dyn Material>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    /// Center of the sphere.
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Radius of the sphere.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = ray.at(root);
        let outward_normal = (p - self.center) / self.radius;
        let mut rec = HitRecord {
            p,
            normal: outward_normal,
            material: Arc::clone(&self.material),
            t: root,
            front_face: true,
        };
        rec.set_face_normal(ray, outward_normal);

        Some(rec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Lambertian;
    use crate::{Color, Vec3};

    fn unit_sphere_at(center: Point3) -> Sphere {
        Sphere::new(center, 0.5, Arc::new(Lambertian::new(Color::splat(0.5))))
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = unit_sphere_at(Point3::new(0.0, 0.0, -1.0));
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere
            .hit(&ray, Interval::new(0.001, f64::INFINITY))
            .expect("head-on ray should hit");

        // Front of the sphere is at z = -0.5
        assert!((rec.t - 0.5).abs() < 1e-9);
        assert_eq!(rec.p, Point3::new(0.0, 0.0, -0.5));
        assert_eq!(rec.normal, Vec3::Z);
        assert!(rec.front_face);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_sphere_at(Point3::new(0.0, 0.0, -1.0));
        let ray = Ray::new(Point3::ZERO, Vec3::Y);

        assert!(sphere.hit(&ray, Interval::new(0.001, f64::INFINITY)).is_none());
    }

    #[test]
    fn test_sphere_hit_from_inside() {
        let sphere = unit_sphere_at(Point3::ZERO);
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere
            .hit(&ray, Interval::new(0.001, f64::INFINITY))
            .expect("ray from the center should hit the shell");

        // Normal flipped to oppose the ray, flagged as back face
        assert!(!rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);
        assert!((rec.t - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_interval_excludes_near_root() {
        let sphere = unit_sphere_at(Point3::new(0.0, 0.0, -1.0));
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // Near root at t=0.5 is outside the interval; far root at t=1.5 is used
        let rec = sphere
            .hit(&ray, Interval::new(1.0, f64::INFINITY))
            .expect("far root should be accepted");
        assert!((rec.t - 1.5).abs() < 1e-9);

        // Neither root inside the interval
        assert!(sphere.hit(&ray, Interval::new(2.0, 3.0)).is_none());
    }

    #[test]
    fn test_negative_radius_clamped() {
        let sphere = Sphere::new(
            Point3::ZERO,
            -1.0,
            Arc::new(Lambertian::new(Color::splat(0.5))),
        );
        assert_eq!(sphere.radius(), 0.0);
    }
}
