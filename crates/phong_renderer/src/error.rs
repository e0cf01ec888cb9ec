//! Construction-time errors.
//!
//! Rendering itself never fails: misses are ordinary results. Invalid
//! geometry or materials are rejected when the scene is built.

use thiserror::Error;

/// Errors that can occur while building a scene or render configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Sphere radius must be finite and positive, got {0}")]
    InvalidRadius(f32),

    #[error("Plane normal has zero or non-finite length")]
    DegenerateNormal,

    #[error("Material exponent must be finite and non-negative, got {0}")]
    InvalidPower(f32),

    #[error("Gamma must be finite and positive, got {0}")]
    InvalidGamma(f32),

    #[error("Invalid resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },
}

/// Result type for scene construction.
pub type SceneResult<T> = Result<T, SceneError>;
