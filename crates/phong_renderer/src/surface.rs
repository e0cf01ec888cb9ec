//! Surface variants and the hit record shared by all intersection tests.

use crate::{Material, Plane, Ray, Sphere, Vec3};

/// Rays this close to parallel with a plane are treated as misses.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Minimum accepted ray parameter. Keeps shadow rays from hitting the
/// surface they start on.
pub const HIT_EPSILON: f32 = 1e-3;

/// Record of a ray-surface intersection.
///
/// Only hits are represented; a miss is `None` at the call site.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Ray parameter of the intersection (finite, non-negative)
    pub distance: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Geometric normal at the intersection (not flipped toward the viewer)
    pub normal: Vec3,
    /// Material of the surface that was hit
    pub material: &'a Material,
}

/// A renderable surface.
#[derive(Debug, Clone)]
pub enum Surface {
    Plane(Plane),
    Sphere(Sphere),
}

impl Surface {
    /// Intersect a ray with this surface.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        match self {
            Surface::Plane(plane) => plane.intersect(ray),
            Surface::Sphere(sphere) => sphere.intersect(ray),
        }
    }

    /// Material assigned to this surface.
    pub fn material(&self) -> &Material {
        match self {
            Surface::Plane(plane) => plane.material(),
            Surface::Sphere(sphere) => sphere.material(),
        }
    }
}

impl From<Plane> for Surface {
    fn from(plane: Plane) -> Self {
        Surface::Plane(plane)
    }
}

impl From<Sphere> for Surface {
    fn from(sphere: Sphere) -> Self {
        Surface::Sphere(sphere)
    }
}
