//! Blinn-Phong shading with hard shadows.

use crate::{Color, Hit, Interval, PointLight, Ray, Scene, Vec3, HIT_EPSILON};

/// Offset applied to shadow ray origins toward the light. Larger than
/// [`HIT_EPSILON`] to avoid self-shadowing on curved surfaces.
pub const SHADOW_BIAS: f32 = 1e-2;

/// Returns true if any surface blocks the segment from `point` to the light.
///
/// An occluder must lie strictly between `HIT_EPSILON` and the distance to
/// the light, so surfaces behind the light never cast shadows.
pub fn is_in_shadow(point: Vec3, scene: &Scene, light: &PointLight) -> bool {
    let to_light = light.position - point;
    let light_dist = to_light.length();
    let dir_to_light = to_light.normalize();
    let shadow_ray = Ray::new(point + dir_to_light * SHADOW_BIAS, dir_to_light);

    let occluders = Interval::new(HIT_EPSILON, light_dist);
    scene.surfaces().iter().any(|surface| {
        surface
            .intersect(&shadow_ray)
            .is_some_and(|hit| occluders.surrounds(hit.distance))
    })
}

/// Compute outgoing radiance at a hit point.
///
/// Ambient is always present. Diffuse and specular are added only when the
/// light is visible. The result is not clamped.
pub fn shade(hit: &Hit<'_>, ray: &Ray, scene: &Scene, light: &PointLight) -> Color {
    let mat = hit.material;
    let ambient = mat.ka * light.color;

    if is_in_shadow(hit.point, scene, light) {
        return ambient;
    }

    let l = (light.position - hit.point).normalize();
    let v = (-ray.direction).normalize();
    let n = hit.normal.normalize();
    let h = (l + v).normalize();

    let diff = n.dot(l).max(0.0);
    let spec = n.dot(h).max(0.0).powf(mat.power);

    let diffuse = mat.kd * diff * light.color;
    let specular = mat.ks * spec * light.color;

    ambient + diffuse + specular
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Material;

    fn lit_floor(light_pos: Vec3) -> Scene {
        let mut scene = Scene::new(PointLight::new(light_pos, Color::ONE));
        let mat = scene.add_material(Material::matte(Color::splat(0.1), Color::splat(0.8)));
        scene.add_plane(Vec3::Y, 0.0, &mat).unwrap();
        scene
    }

    #[test]
    fn test_unoccluded_point_is_lit() {
        let scene = lit_floor(Vec3::new(0.0, 5.0, 0.0));
        assert!(!is_in_shadow(Vec3::ZERO, &scene, scene.light()));
    }

    #[test]
    fn test_occluder_casts_shadow() {
        let mut scene = lit_floor(Vec3::new(0.0, 5.0, 0.0));
        let mat = scene.add_material(Material::matte(Color::ZERO, Color::ONE));
        scene.add_sphere(Vec3::new(0.0, 2.5, 0.0), 1.0, &mat).unwrap();

        assert!(is_in_shadow(Vec3::ZERO, &scene, scene.light()));
    }

    #[test]
    fn test_surface_beyond_light_does_not_shadow() {
        let mut scene = lit_floor(Vec3::new(0.0, 5.0, 0.0));
        let mat = scene.add_material(Material::matte(Color::ZERO, Color::ONE));
        scene.add_sphere(Vec3::new(0.0, 8.0, 0.0), 1.0, &mat).unwrap();

        assert!(!is_in_shadow(Vec3::ZERO, &scene, scene.light()));
    }

    #[test]
    fn test_shade_in_shadow_is_ambient_only() {
        let mut scene = Scene::new(PointLight::new(
            Vec3::new(0.0, 5.0, 0.0),
            Color::new(1.0, 0.5, 0.25),
        ));
        let floor = scene.add_material(
            Material::new(Color::splat(0.2), Color::ONE, Color::splat(0.5), 8.0).unwrap(),
        );
        let blocker = scene.add_material(Material::matte(Color::ZERO, Color::ONE));
        scene.add_plane(Vec3::Y, 0.0, &floor).unwrap();
        scene.add_sphere(Vec3::new(0.0, 2.5, 0.0), 1.0, &blocker).unwrap();

        let ray = Ray::normalized(Vec3::new(0.0, 1.0, 1.0), Vec3::new(0.0, -1.0, -1.0));
        let hit = scene.find_closest(&ray).unwrap();
        assert!(hit.point.length() < 1e-4);

        let color = shade(&hit, &ray, &scene, scene.light());
        assert_eq!(color, Color::splat(0.2) * Color::new(1.0, 0.5, 0.25));
    }

    #[test]
    fn test_shade_head_on_diffuse() {
        // Light and viewer straight above the hit point: n·l = n·h = 1.
        let scene = lit_floor(Vec3::new(0.0, 5.0, 0.0));
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y);
        let hit = scene.find_closest(&ray).unwrap();

        let color = shade(&hit, &ray, &scene, scene.light());
        assert!((color - Color::splat(0.9)).length() < 1e-5);
    }

    #[test]
    fn test_light_behind_surface_gives_no_diffuse() {
        // Light below the floor: n·l is negative, so diffuse clamps to zero.
        let scene = lit_floor(Vec3::new(0.0, -5.0, 0.0));
        let ray = Ray::normalized(Vec3::new(1.0, 1.0, 0.0), Vec3::new(-1.0, -1.0, 0.0));
        let hit = scene.find_closest(&ray).unwrap();

        let color = shade(&hit, &ray, &scene, scene.light());
        assert!((color - Color::splat(0.1)).length() < 1e-6);
    }

    #[test]
    fn test_specular_highlight_adds_energy() {
        let mut scene = Scene::new(PointLight::new(Vec3::new(0.0, 5.0, 0.0), Color::ONE));
        let shiny = scene.add_material(
            Material::new(Color::ZERO, Color::ZERO, Color::splat(0.5), 32.0).unwrap(),
        );
        scene.add_plane(Vec3::Y, 0.0, &shiny).unwrap();

        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y);
        let hit = scene.find_closest(&ray).unwrap();
        let color = shade(&hit, &ray, &scene, scene.light());
        assert!((color - Color::splat(0.5)).length() < 1e-5);
    }
}
