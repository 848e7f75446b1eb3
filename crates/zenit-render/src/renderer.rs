//! Frame rendering: one ray per pixel, scanlines evaluated in parallel.

use glam::Vec3;
use image::{Rgba, RgbaImage};
use rayon::prelude::*;
use std::path::Path;
use zenit_core::field::Field;

use crate::camera::Camera;
use crate::error::Result;
use crate::frame::FrameParams;
use crate::march::MarchSettings;
use crate::shade;

/// Linear-RGB frame buffer produced by [`render`]
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Vec3>,
}

impl PixelBuffer {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Linear color at (x, y), y counted from the top row
    pub fn pixel(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Gamma-correct into an 8-bit RGBA image.
    pub fn to_image(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.width, self.height);
        for (x, y, out) in img.enumerate_pixels_mut() {
            let c = self.pixel(x, y).clamp(Vec3::ZERO, Vec3::ONE);
            let corrected = Vec3::new(
                c.x.powf(1.0 / 2.2),
                c.y.powf(1.0 / 2.2),
                c.z.powf(1.0 / 2.2),
            );
            *out = Rgba([
                (corrected.x * 255.999) as u8,
                (corrected.y * 255.999) as u8,
                (corrected.z * 255.999) as u8,
                255,
            ]);
        }
        img
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.to_image().save(path)?;
        Ok(())
    }
}

/// Render one frame.
///
/// Pure function of its inputs: the field, the frame snapshot, and the
/// camera are only read, so scanlines march independently with no
/// synchronization. The primary march honors the tighter of the camera far
/// limit and the configured max distance.
pub fn render(
    field: &dyn Field,
    frame: &FrameParams,
    camera: &Camera,
    width: u32,
    height: u32,
) -> PixelBuffer {
    let width = width.max(1);
    let height = height.max(1);

    let frame = FrameParams {
        march: MarchSettings {
            max_distance: frame.march.max_distance.min(camera.far),
            ..frame.march
        }
        .clamped(),
        shading: frame.shading.clamped(),
        ..frame.clone()
    };

    tracing::debug!(width, height, "rendering frame");

    let rays = camera.rays();
    let width_f = width as f32;
    let height_f = height as f32;

    let mut pixels = vec![Vec3::ZERO; (width * height) as usize];
    pixels
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, slot) in row.iter_mut().enumerate() {
                // Pixel centers over the unit square; v runs bottom-up.
                let u = (x as f32 + 0.5) / width_f;
                let v = 1.0 - (y as f32 + 0.5) / height_f;
                let ray = rays.ray(u, v);
                *slot = shade::pixel(field, &ray, &frame);
            }
        });

    PixelBuffer {
        width,
        height,
        pixels,
    }
}
