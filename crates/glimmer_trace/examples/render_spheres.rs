//! Renders the classic four-sphere scene to a PPM file.
//!
//! Usage: `cargo run --example render_spheres > out.ppm`
//! Set `RUST_LOG=info` for progress output on stderr.

use std::io::{self, BufWriter, Write};
use std::sync::Arc;

use anyhow::Result;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use glimmer_trace::{
    write_color, write_ppm_header, Camera, Color, Dielectric, Hittable, HittableList, Interval,
    Lambertian, Metal, Point3, Ray, Sphere, Vec3,
};

const IMAGE_WIDTH: u32 = 400;
const ASPECT_RATIO: f64 = 16.0 / 9.0;
const SAMPLES_PER_PIXEL: u32 = 50;
const MAX_DEPTH: u32 = 25;

/// Compute the color seen by a ray, bouncing up to `depth` times.
fn ray_color(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    if let Some(rec) = world.hit(ray, Interval::new(0.001, f64::INFINITY)) {
        return match rec.material.scatter(ray, &rec, rng) {
            Some(scatter) => {
                scatter.attenuation * ray_color(&scatter.scattered, world, depth - 1, rng)
            }
            None => Color::ZERO,
        };
    }

    // Sky gradient background
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    Color::ONE * (1.0 - a) + Color::new(0.5, 0.7, 1.0) * a
}

fn build_world() -> HittableList {
    let ground = Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0)));
    let center = Arc::new(Lambertian::new(Color::new(0.1, 0.2, 0.5)));
    let left = Arc::new(Dielectric::new(1.5));
    let right = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 0.1));

    let mut world = HittableList::new();
    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, -100.5, -1.0),
        100.0,
        ground,
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, 0.0, -1.2),
        0.5,
        center,
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(-1.0, 0.0, -1.0),
        0.5,
        left,
    )));
    world.add(Arc::new(Sphere::new(Point3::new(1.0, 0.0, -1.0), 0.5, right)));
    world
}

fn main() -> Result<()> {
    env_logger::init();

    let image_height = (IMAGE_WIDTH as f64 / ASPECT_RATIO) as u32;
    let world = build_world();

    let look_from = Point3::new(-2.0, 2.0, 1.0);
    let look_at = Point3::new(0.0, 0.0, -1.0);
    let camera = Camera::new(
        look_from,
        look_at,
        Vec3::Y,
        30.0,
        ASPECT_RATIO,
        0.2,
        (look_from - look_at).length(),
    );

    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    info!(
        "rendering {}x{} at {} samples per pixel",
        IMAGE_WIDTH, image_height, SAMPLES_PER_PIXEL
    );
    write_ppm_header(&mut out, IMAGE_WIDTH, image_height)?;

    let intensity = Interval::new(0.0, 0.999);
    for j in (0..image_height).rev() {
        if j % 50 == 0 {
            info!("scanlines remaining: {}", j + 1);
        }
        for i in 0..IMAGE_WIDTH {
            let mut pixel = Color::ZERO;
            for _ in 0..SAMPLES_PER_PIXEL {
                let s = (i as f64 + rng.gen::<f64>()) / (IMAGE_WIDTH - 1) as f64;
                let t = (j as f64 + rng.gen::<f64>()) / (image_height - 1) as f64;
                let ray = camera.get_ray(s, t, &mut rng);
                pixel += ray_color(&ray, &world, MAX_DEPTH, &mut rng);
            }
            pixel /= SAMPLES_PER_PIXEL as f64;

            let clamped = Color::new(
                intensity.clamp(pixel.x),
                intensity.clamp(pixel.y),
                intensity.clamp(pixel.z),
            );
            write_color(&mut out, clamped)?;
        }
    }
    out.flush()?;

    info!("done");
    Ok(())
}
