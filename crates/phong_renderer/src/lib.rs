//! Phong Ray Tracer - CPU ray caster with local lighting.
//!
//! Casts one ray per pixel through a pinhole camera, finds the nearest
//! analytic surface (planes and spheres), and shades it with Blinn-Phong
//! lighting from a single point light with hard shadows.

mod camera;
mod error;
mod material;
mod plane;
mod renderer;
mod scene;
mod shading;
mod sphere;
mod surface;

pub use camera::Camera;
pub use error::{SceneError, SceneResult};
pub use material::Material;
pub use plane::Plane;
pub use renderer::{
    render, render_default, render_pixel, tone_map, Frame, RenderConfig, DEFAULT_GAMMA,
};
pub use scene::{find_closest, PointLight, Scene};
pub use shading::{is_in_shadow, shade, SHADOW_BIAS};
pub use sphere::Sphere;
pub use surface::{Hit, Surface, HIT_EPSILON, PARALLEL_EPSILON};

/// Re-export Vec3 and common math types from phong_math
pub use phong_math::{Color, Interval, Ray, Vec3};
