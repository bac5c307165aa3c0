//! Frame driver: pixel sampling and the parallel row loop.

use std::time::Instant;

use crate::{trace_ray, Camera, Color, Intersect, Light, RenderConfig};
use phos_math::Interval;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;

/// Convert a color to 8-bit RGB, clamping each channel to [0, 1].
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let r = (255.0 * Interval::UNIT.clamp(color.x)) as u8;
    let g = (255.0 * Interval::UNIT.clamp(color.y)) as u8;
    let b = (255.0 * Interval::UNIT.clamp(color.z)) as u8;
    [r, g, b]
}

/// Render a single pixel with multi-sampling.
///
/// Returns the average of all samples, clamped to the display range.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Intersect,
    lights: &[&dyn Light],
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let ray = camera.get_ray(x, y, rng);
        pixel_color += trace_ray(&ray, world, lights, config, rng, 0);
    }

    let average = pixel_color / config.samples_per_pixel as f32;
    Color::new(
        Interval::UNIT.clamp(average.x),
        Interval::UNIT.clamp(average.y),
        Interval::UNIT.clamp(average.z),
    )
}

/// Seed of the random stream owned by image row `row`.
#[inline]
pub fn row_seed(seed: u64, row: u32) -> u64 {
    seed.wrapping_add(row as u64)
}

/// Offset of pixel (x, y) in a row-major buffer `width` pixels wide.
#[inline]
fn pixel_index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// Simple image buffer for storing render output.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[pixel_index(self.width, x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[pixel_index(self.width, x, y)] = color;
    }

    /// Convert to packed RGB bytes, row-major from the top-left pixel.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Render the entire scene to an image buffer.
///
/// Rows are rendered in parallel; each row draws from its own random
/// stream seeded by [`row_seed`], so the result only depends on the inputs.
/// `config` must have passed [`RenderConfig::validate`].
pub fn render(
    camera: &Camera,
    world: &dyn Intersect,
    lights: &[&dyn Light],
    config: &RenderConfig,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    if image.pixels.is_empty() {
        return image;
    }

    if lights.is_empty() {
        log::warn!("Scene has no lights, only ambient and emissive terms will show");
    }
    log::info!(
        "Rendering {}x{} @ {} spp, {} light samples, max bounce {}",
        image.width,
        image.height,
        config.samples_per_pixel,
        config.light_samples,
        config.max_bounce
    );
    let start = Instant::now();

    let width = image.width as usize;
    image
        .pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as u32;
            let mut rng = StdRng::seed_from_u64(row_seed(config.seed, y));
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = render_pixel(camera, world, lights, x as u32, y, config, &mut rng);
            }
            log::debug!("Row {} done", y);
        });

    log::info!("Rendered in {:?}", start.elapsed());
    image
}
