// Re-export glam for convenience
pub use glam::*;

// Phong math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// RGB triple stored in a vector (r, g, b map to x, y, z).
pub type Color = Vec3;
