use phong_renderer::{
    find_closest, render, render_default, Camera, Color, Material, PointLight, Ray, RenderConfig,
    Scene, Vec3,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn green_sphere_scene() -> Scene {
    let mut scene = Scene::new(PointLight::new(Vec3::new(-4.0, 4.0, -3.0), Color::ONE));
    let green = scene.add_material(Material::matte(Color::ZERO, Color::new(0.0, 0.5, 0.0)));
    scene
        .add_sphere(Vec3::new(0.0, 0.0, -7.0), 2.0, &green)
        .unwrap();
    scene
}

#[test]
fn center_pixel_hits_green_sphere_apex() {
    init_logging();
    let scene = green_sphere_scene();
    let camera = Camera::default();
    let config = RenderConfig::default().with_resolution(65, 65);

    let ray = camera.get_ray(32, 32, 65, 65);
    let hit = find_closest(&ray, &scene).expect("center ray should hit the sphere");
    assert!((hit.point - Vec3::new(0.0, 0.0, -5.0)).length() < 1e-4);
    assert!((hit.normal - Vec3::Z).length() < 1e-4);
    assert!(!phong_renderer::is_in_shadow(hit.point, &scene, scene.light()));

    let frame = render(&scene, &camera, &config);
    let pixel = frame.pixel(32, 32);
    assert!(pixel.y > 0.0);
    assert!(pixel.y > pixel.x && pixel.y > pixel.z);

    // n·l = 1/3 at the apex, kd = 0.5, then gamma-encoded.
    let expected = (0.5f32 / 3.0).powf(1.0 / 2.2);
    assert!((pixel.y - expected).abs() < 1e-3);
}

#[test]
fn pixels_missing_every_surface_are_black() {
    let scene = green_sphere_scene();
    let frame = render(&scene, &Camera::default(), &RenderConfig::default().with_resolution(32, 32));

    assert_eq!(frame.pixel(0, 0), Color::ZERO);
    assert_eq!(frame.pixel(31, 31), Color::ZERO);

    let empty = Scene::new(*scene.light());
    let frame = render(&empty, &Camera::default(), &RenderConfig::default().with_resolution(8, 8));
    assert!(frame.data.iter().all(|&c| c == 0.0));
}

#[test]
fn buffer_length_tracks_resolution() {
    init_logging();
    for (width, height) in [(512, 512), (256, 256), (17, 5)] {
        let data = render_default(width, height).unwrap();
        assert_eq!(data.len(), (width * height * 3) as usize);
        assert!(data.iter().all(|c| (0.0..=1.0).contains(c)));
    }
}

#[test]
fn render_default_rejects_zero_size() {
    assert!(render_default(0, 16).is_err());
}

#[test]
fn parallel_render_matches_serial() {
    let scene = Scene::default_scene().unwrap();
    let camera = Camera::default();
    let config = RenderConfig::default().with_resolution(48, 40);

    let serial = render(&scene, &camera, &config);
    let parallel = render(&scene, &camera, &config.clone().with_parallel(true));
    assert_eq!(serial, parallel);
}

#[test]
fn rerender_is_deterministic() {
    let first = render_default(40, 40).unwrap();
    let second = render_default(40, 40).unwrap();
    assert_eq!(first, second);
}

#[test]
fn default_scene_regions() {
    let scene = Scene::default_scene().unwrap();
    let camera = Camera::default();
    let config = RenderConfig::default().with_resolution(101, 101);
    let frame = render(&scene, &camera, &config);

    // Middle sphere is green.
    let center = frame.pixel(50, 50);
    assert!(center.y > center.x && center.y > center.z);

    // Top row sees nothing above the horizon.
    assert_eq!(frame.pixel(50, 100), Color::ZERO);

    // Bottom row sees the grey floor.
    let floor = frame.pixel(50, 0);
    assert!(floor.x > 0.0);
    assert!((floor.x - floor.y).abs() < 1e-6 && (floor.y - floor.z).abs() < 1e-6);
}

#[test]
fn floor_under_sphere_is_shadowed() {
    let scene = Scene::default_scene().unwrap();
    let light = scene.light();

    // Floor point behind the middle sphere as seen from the light.
    let point = Vec3::new(2.5, -2.0, -10.0);
    let ray = Ray::normalized(Vec3::ZERO, point);
    let hit = find_closest(&ray, &scene).unwrap();
    assert!((hit.point - point).length() < 1e-3);
    assert!(phong_renderer::is_in_shadow(hit.point, &scene, light));

    let color = phong_renderer::shade(&hit, &ray, &scene, light);
    assert_eq!(color, hit.material.ka * light.color);
}
