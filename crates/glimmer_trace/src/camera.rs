//! Thin-lens camera for ray generation.

use glimmer_math::{sample, scalar, Point3, Ray, Vec3};
use rand::RngCore;

/// Camera that maps normalized screen coordinates to world-space rays.
///
/// All viewport quantities are derived once at construction; the camera is
/// immutable afterwards. Depth of field comes from sampling a lens disk of
/// radius `aperture / 2` on every `get_ray` call.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    origin: Point3,
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    lens_radius: f64,
}

impl Camera {
    /// Create a new camera.
    ///
    /// - `look_from`: eye position
    /// - `look_at`: target point
    /// - `vup`: view-up vector
    /// - `vfov`: vertical field of view in degrees
    /// - `aspect_ratio`: viewport width / height
    /// - `aperture`: lens diameter; zero disables depth of field
    /// - `focus_dist`: distance to the plane of perfect focus
    ///
    /// Coincident `look_from`/`look_at` or a zero-length `vup` produce
    /// non-finite basis vectors rather than an error.
    pub fn new(
        look_from: Point3,
        look_at: Point3,
        vup: Vec3,
        vfov: f64,
        aspect_ratio: f64,
        aperture: f64,
        focus_dist: f64,
    ) -> Self {
        debug_assert!(
            (look_from - look_at).length_squared() > 0.0,
            "look_from and look_at must differ"
        );
        debug_assert!(vup.length_squared() > 0.0, "vup must be non-zero");

        let theta = scalar::degrees_to_radians(vfov);
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = aspect_ratio * viewport_height;

        // Orthonormal basis: w points from target to eye
        let w = (look_from - look_at).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        let origin = look_from;
        let horizontal = focus_dist * viewport_width * u;
        let vertical = focus_dist * viewport_height * v;
        let lower_left_corner = origin - horizontal / 2.0 - vertical / 2.0 - focus_dist * w;

        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            w,
            lens_radius: aperture / 2.0,
        }
    }

    /// Generate a ray through normalized screen coordinates `(s, t)`.
    ///
    /// `s` and `t` run over `[0, 1]` from the lower-left viewport corner.
    /// Each call draws an independent lens sample from `rng`; a zero
    /// aperture skips the lens jitter entirely.
    pub fn get_ray(&self, s: f64, t: f64, rng: &mut dyn RngCore) -> Ray {
        let offset = if self.lens_radius > 0.0 {
            let rd = sample::random_in_unit_disk(rng) * self.lens_radius;
            self.u * rd.x + self.v * rd.y
        } else {
            Vec3::ZERO
        };

        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical - self.origin - offset,
        )
    }

    /// The camera's orthonormal basis `(u, v, w)`.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, self.w)
    }
}
