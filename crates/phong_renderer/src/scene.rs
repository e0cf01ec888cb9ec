//! Scene container and nearest-hit search.
//!
//! A scene is an ordered list of surfaces plus one point light. Insertion
//! order is traversal order, which only matters for exact ties.

use std::sync::Arc;

use crate::{Color, Hit, Material, Plane, Ray, SceneResult, Sphere, Surface, Vec3};

/// A point light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Color,
}

impl PointLight {
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }
}

/// Surfaces, their materials, and the light illuminating them.
///
/// The scene owns every material. Surfaces hold shared read-only handles,
/// so dropping the scene releases everything built for it.
#[derive(Debug, Clone)]
pub struct Scene {
    surfaces: Vec<Surface>,
    materials: Vec<Arc<Material>>,
    light: PointLight,
}

impl Scene {
    /// Create an empty scene lit by `light`.
    pub fn new(light: PointLight) -> Self {
        Self {
            surfaces: Vec::new(),
            materials: Vec::new(),
            light,
        }
    }

    /// Register a material and return a handle surfaces can share.
    pub fn add_material(&mut self, material: Material) -> Arc<Material> {
        let material = Arc::new(material);
        self.materials.push(material.clone());
        material
    }

    /// Append a surface. Surfaces are tested in the order they were added.
    pub fn add(&mut self, surface: impl Into<Surface>) {
        self.surfaces.push(surface.into());
    }

    /// Append a sphere using a material registered with this scene.
    pub fn add_sphere(
        &mut self,
        center: Vec3,
        radius: f32,
        material: &Arc<Material>,
    ) -> SceneResult<()> {
        let sphere = Sphere::new(center, radius, Arc::clone(material))?;
        self.add(sphere);
        Ok(())
    }

    /// Append a plane `normal · p + offset = 0`.
    pub fn add_plane(
        &mut self,
        normal: Vec3,
        offset: f32,
        material: &Arc<Material>,
    ) -> SceneResult<()> {
        let plane = Plane::new(normal, offset, Arc::clone(material))?;
        self.add(plane);
        Ok(())
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn materials(&self) -> &[Arc<Material>] {
        &self.materials
    }

    pub fn light(&self) -> &PointLight {
        &self.light
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Find the nearest surface hit along `ray`.
    pub fn find_closest(&self, ray: &Ray) -> Option<Hit<'_>> {
        find_closest(ray, self)
    }

    /// Three spheres over a floor plane, lit from the upper left.
    pub fn default_scene() -> SceneResult<Self> {
        let mut scene = Scene::new(PointLight::new(Vec3::new(-4.0, 4.0, -3.0), Color::ONE));

        let floor = scene.add_material(Material::matte(Color::splat(0.2), Color::ONE));
        let red = scene.add_material(Material::matte(
            Color::new(0.2, 0.0, 0.0),
            Color::new(1.0, 0.0, 0.0),
        ));
        let green = scene.add_material(Material::new(
            Color::new(0.0, 0.2, 0.0),
            Color::new(0.0, 0.5, 0.0),
            Color::splat(0.5),
            32.0,
        )?);
        let blue = scene.add_material(Material::matte(
            Color::new(0.0, 0.0, 0.2),
            Color::new(0.0, 0.0, 1.0),
        ));

        scene.add_sphere(Vec3::new(-4.0, 0.0, -7.0), 1.0, &red)?;
        scene.add_sphere(Vec3::new(0.0, 0.0, -7.0), 2.0, &green)?;
        scene.add_sphere(Vec3::new(4.0, 0.0, -7.0), 1.0, &blue)?;
        scene.add_plane(Vec3::Y, 2.0, &floor)?;

        log::debug!(
            "Built default scene: {} surfaces, {} materials",
            scene.len(),
            scene.materials.len()
        );
        Ok(scene)
    }
}

/// Brute-force nearest hit over every surface in scene order.
///
/// A later surface replaces the current best only when strictly closer,
/// so the first of two equally distant surfaces wins.
pub fn find_closest<'a>(ray: &Ray, scene: &'a Scene) -> Option<Hit<'a>> {
    let mut closest: Option<Hit<'a>> = None;
    let mut closest_so_far = f32::INFINITY;

    for surface in &scene.surfaces {
        if let Some(hit) = surface.intersect(ray) {
            if hit.distance < closest_so_far {
                closest_so_far = hit.distance;
                closest = Some(hit);
            }
        }
    }

    closest
}
