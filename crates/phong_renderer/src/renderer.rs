//! Frame assembly.
//!
//! Drives the per-pixel loop:
//! - one camera ray per pixel center
//! - nearest hit, then Blinn-Phong shading (black on a miss)
//! - clamp to [0, 1] and gamma-encode
//!
//! The output is a flat RGB float buffer, bottom row first.

use std::time::Instant;

use rayon::prelude::*;

use crate::{shade, Camera, Color, Interval, Scene, SceneError, SceneResult};

/// Default display gamma.
pub const DEFAULT_GAMMA: f32 = 2.2;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Display gamma; channels are encoded with exponent `1 / gamma`
    pub gamma: f32,
    /// Render rows on the rayon thread pool
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            gamma: DEFAULT_GAMMA,
            parallel: false,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Reject a zero-sized image or an unusable gamma before rendering.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn validate(&self) -> SceneResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.gamma.is_finite() && self.gamma > 0.0) {
            return Err(SceneError::InvalidGamma(self.gamma));
        }
        Ok(())
    }
}

/// A rendered image: `height` rows of `width` RGB triples, row 0 at the bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<f32>,
}

impl Frame {
    /// Color of pixel (i, j).
    pub fn pixel(&self, i: u32, j: u32) -> Color {
        let idx = self.offset(i, j);
        Color::new(self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }

    /// Index of the red channel of pixel (i, j) in `data`.
    fn offset(&self, i: u32, j: u32) -> usize {
        (j as usize * self.width as usize + i as usize) * 3
    }

    /// Quantize to 8-bit RGB with the top row first, as image files expect.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let row_len = self.width as usize * 3;
        let mut bytes = Vec::with_capacity(self.data.len());
        if row_len == 0 {
            return bytes;
        }
        for row in self.data.chunks_exact(row_len).rev() {
            bytes.extend(row.iter().map(|&c| (255.0 * Interval::UNIT.clamp(c)).round() as u8));
        }
        bytes
    }

    /// Consume the frame, returning the flat RGB buffer.
    pub fn into_data(self) -> Vec<f32> {
        self.data
    }
}

/// Clamp each channel to [0, 1], then gamma-encode with exponent `1 / gamma`.
#[inline]
pub fn tone_map(color: Color, gamma: f32) -> Color {
    color.clamp(Color::ZERO, Color::ONE).powf(1.0 / gamma)
}

/// Linear radiance seen through pixel (i, j); black when nothing is hit.
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    i: u32,
    j: u32,
    width: u32,
    height: u32,
) -> Color {
    let ray = camera.get_ray(i, j, width, height);
    match scene.find_closest(&ray) {
        Some(hit) => shade(&hit, &ray, scene, scene.light()),
        None => Color::ZERO,
    }
}

fn render_row(scene: &Scene, camera: &Camera, config: &RenderConfig, j: u32, row: &mut [f32]) {
    for (i, rgb) in row.chunks_exact_mut(3).enumerate() {
        let color = render_pixel(scene, camera, i as u32, j, config.width, config.height);
        let corrected = tone_map(color, config.gamma);
        rgb.copy_from_slice(&corrected.to_array());
    }
}

/// Render the scene into a fresh frame.
///
/// Rows are independent, so the parallel path produces the same buffer
/// as the serial one.
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig) -> Frame {
    let start = Instant::now();
    let row_len = config.width as usize * 3;
    let mut data = vec![0.0; row_len * config.height as usize];

    log::debug!(
        "Rendering {}x{} ({} surfaces, parallel: {})",
        config.width,
        config.height,
        scene.len(),
        config.parallel
    );

    if row_len > 0 {
        if config.parallel {
            data.par_chunks_mut(row_len)
                .enumerate()
                .for_each(|(j, row)| render_row(scene, camera, config, j as u32, row));
        } else {
            for (j, row) in data.chunks_mut(row_len).enumerate() {
                render_row(scene, camera, config, j as u32, row);
            }
        }
    }

    log::info!(
        "Rendered {}x{} in {:?}",
        config.width,
        config.height,
        start.elapsed()
    );

    Frame {
        width: config.width,
        height: config.height,
        data,
    }
}

/// Build the default scene and camera, render, and release them.
///
/// This is the entry point a display shell calls on every resize.
pub fn render_default(width: u32, height: u32) -> SceneResult<Vec<f32>> {
    let config = RenderConfig::default().with_resolution(width, height);
    config.validate()?;

    let frame = {
        let scene = Scene::default_scene()?;
        let camera = Camera::default();
        render(&scene, &camera, &config)
    };

    Ok(frame.into_data())
}
