//! Pinhole camera mapping pixels to world-space rays.

use crate::{Ray, Vec3};

/// Camera with an orthonormal basis and a fixed image plane.
///
/// The image plane spans `[l, r] x [b, t]` at distance `d` in front of the
/// eye along `-w`. Pixel row `j = 0` maps to the bottom edge `b`.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub u: Vec3,
    pub v: Vec3,
    pub w: Vec3,

    // Image plane bounds
    pub l: f32,
    pub r: f32,
    pub b: f32,
    pub t: f32,
    pub d: f32,
}

impl Camera {
    /// Create a camera at `eye` with basis `u` (right), `v` (up), `w` (back).
    pub fn new(eye: Vec3, u: Vec3, v: Vec3, w: Vec3) -> Self {
        Self {
            eye,
            u,
            v,
            w,
            l: -0.1,
            r: 0.1,
            b: -0.1,
            t: 0.1,
            d: 0.1,
        }
    }

    /// Set image plane bounds and distance.
    pub fn with_image_plane(mut self, l: f32, r: f32, b: f32, t: f32, d: f32) -> Self {
        self.l = l;
        self.r = r;
        self.b = b;
        self.t = t;
        self.d = d;
        self
    }

    /// Generate the normalized ray through the center of pixel (i, j).
    pub fn get_ray(&self, i: u32, j: u32, width: u32, height: u32) -> Ray {
        let su = self.l + (self.r - self.l) * (i as f32 + 0.5) / width as f32;
        let sv = self.b + (self.t - self.b) * (j as f32 + 0.5) / height as f32;

        let direction = su * self.u + sv * self.v - self.d * self.w;
        Ray::normalized(self.eye, direction)
    }
}

impl Default for Camera {
    /// Camera at the origin looking down `-z` with `+y` up.
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z)
    }
}
