//! Color alias and plain-text pixel output.

use std::io::{self, Write};

use glimmer_math::Vec3;

/// RGB intensity, each channel nominally in `[0, 1]`.
pub type Color = Vec3;

/// Write one pixel as `R G B\n` with channels scaled to `0..=255`.
///
/// Channels are truncated after a `255.999` scale, the usual PPM-text
/// convention. Out-of-range inputs are written as-is; clamp first if the
/// color may exceed `[0, 1]`.
pub fn write_color(out: &mut dyn Write, color: Color) -> io::Result<()> {
    let r = (255.999 * color.x) as i32;
    let g = (255.999 * color.y) as i32;
    let b = (255.999 * color.z) as i32;

    writeln!(out, "{r} {g} {b}")
}

/// Write the plain-text PPM (`P3`) preamble for a `width` x `height` image.
pub fn write_ppm_header(out: &mut dyn Write, width: u32, height: u32) -> io::Result<()> {
    writeln!(out, "P3\n{width} {height}\n255")
}
