//! Infinite plane primitive.

use std::sync::Arc;

use crate::{Hit, Material, Ray, SceneError, SceneResult, Vec3, HIT_EPSILON, PARALLEL_EPSILON};

/// The plane of points `p` with `normal · p + offset = 0`.
#[derive(Debug, Clone)]
pub struct Plane {
    normal: Vec3,
    offset: f32,
    material: Arc<Material>,
}

impl Plane {
    /// Create a new plane. The normal is normalized on construction.
    pub fn new(normal: Vec3, offset: f32, material: Arc<Material>) -> SceneResult<Self> {
        let normal = normal.try_normalize().ok_or(SceneError::DegenerateNormal)?;
        Ok(Self {
            normal,
            offset,
            material,
        })
    }

    /// Unit normal of the plane.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Signed offset of the plane along its normal.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    // Conditions are written so a NaN parameter is rejected.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        let denom = self.normal.dot(ray.direction);
        if !(denom.abs() > PARALLEL_EPSILON) {
            return None;
        }

        let t = -(self.normal.dot(ray.origin) + self.offset) / denom;
        if !(t >= HIT_EPSILON) {
            return None;
        }

        Some(Hit {
            distance: t,
            point: ray.at(t),
            normal: self.normal,
            material: self.material.as_ref(),
        })
    }
}
