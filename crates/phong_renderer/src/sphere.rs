//! Sphere primitive.

use std::sync::Arc;

use crate::{Hit, Material, Ray, SceneError, SceneResult, Vec3, HIT_EPSILON};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere. The radius must be finite and positive.
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> SceneResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SceneError::InvalidRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            material,
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Intersect using the near root only.
    ///
    /// The far root is never tried, so a ray starting inside the sphere
    /// reports no hit on the exit face. A NaN root is a miss.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let t = (-b - discriminant.sqrt()) / (2.0 * a);
        if !(t > HIT_EPSILON) {
            return None;
        }

        let point = ray.at(t);
        Some(Hit {
            distance: t,
            point,
            normal: (point - self.center).normalize(),
            material: self.material.as_ref(),
        })
    }
}
