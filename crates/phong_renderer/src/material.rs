//! Phong reflectance coefficients.

use crate::{Color, SceneError, SceneResult};

/// Surface reflectance for the Phong model.
///
/// Materials are owned by the [`Scene`](crate::Scene) and shared with
/// surfaces through `Arc`, so several surfaces may use one material.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Ambient reflectance
    pub ka: Color,
    /// Diffuse reflectance
    pub kd: Color,
    /// Specular reflectance
    pub ks: Color,
    /// Specular exponent (shininess)
    pub power: f32,
}

impl Material {
    /// Create a new material, rejecting a negative or non-finite exponent.
    pub fn new(ka: Color, kd: Color, ks: Color, power: f32) -> SceneResult<Self> {
        if !power.is_finite() || power < 0.0 {
            return Err(SceneError::InvalidPower(power));
        }
        Ok(Self { ka, kd, ks, power })
    }

    /// A purely diffuse material with ambient term `ka` and no highlight.
    pub fn matte(ka: Color, kd: Color) -> Self {
        Self {
            ka,
            kd,
            ks: Color::ZERO,
            power: 0.0,
        }
    }
}
