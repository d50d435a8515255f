use cgmath::{Deg, Vector3};
use lit_scene::{
    camera::Camera,
    config::{SceneConfig, ASSET_ROOT_ENV},
    data_structures::material::{Color, Material},
    light::PointLight,
    transform::WorldTransform,
};

#[test]
fn defaults_describe_the_demo_scene() {
    let config = SceneConfig::default();
    assert_eq!((config.width, config.height), (800, 600));
    assert!(!config.vsync);
    assert_eq!(config.clear_color, Color::DEEP_SKY_BLUE);
    assert_eq!(config.camera, Camera::default());
    assert_eq!(config.fovy, Deg(45.0));
    assert_eq!((config.znear, config.zfar), (1.0, 300.0));
    assert_eq!(config.model_material, Material::glossy_red());
    assert_eq!(
        config.model_transform,
        WorldTransform::new(10.0, Vector3::new(0.0, 16.0, 0.0))
    );
    assert_eq!(config.ground_transform, WorldTransform::scaled(100.0));
    assert_eq!(config.asset_root, "assets");
}

#[test]
fn builders_override_single_values() {
    let light = PointLight {
        position: (0.0, 10.0, 0.0).into(),
        color: Color::RED,
    };
    let config = SceneConfig::default()
        .with_size(1024, 768)
        .with_vsync(true)
        .with_clear_color(Color::BLACK)
        .with_light(light)
        .with_model_material(Material::default())
        .with_camera(Camera::new((0.0, 0.0, 10.0), (0.0, 0.0, 0.0), (0.0, 1.0, 0.0)))
        .with_asset_root("/tmp/assets");

    assert_eq!((config.width, config.height), (1024, 768));
    assert_eq!(config.clear_color, Color::BLACK);
    assert_eq!(config.light, light);
    assert_eq!(config.model_material, Material::default());
    assert_eq!(config.camera.eye.z, 10.0);
    assert_eq!(config.asset_root, "/tmp/assets");
    assert_eq!(config.model_path, SceneConfig::default().model_path);
}

#[test]
fn vsync_selects_present_mode() {
    let config = SceneConfig::default();
    assert_eq!(config.present_mode(), wgpu::PresentMode::AutoNoVsync);
    assert_eq!(
        config.with_vsync(true).present_mode(),
        wgpu::PresentMode::AutoVsync
    );
}

#[test]
fn projection_uses_configured_frustum() {
    let projection = SceneConfig::default().projection(400, 400);
    assert_eq!(projection.aspect, 1.0);
    assert_eq!(projection.znear, 1.0);
    assert_eq!(projection.zfar, 300.0);
}

#[test]
fn asset_root_can_come_from_environment() {
    // SAFETY: no other test in this binary reads or writes the environment.
    unsafe { std::env::set_var(ASSET_ROOT_ENV, "/srv/lit-scene") };
    assert_eq!(SceneConfig::from_env().asset_root, "/srv/lit-scene");

    unsafe { std::env::set_var(ASSET_ROOT_ENV, "") };
    assert_eq!(SceneConfig::from_env().asset_root, "assets");

    unsafe { std::env::remove_var(ASSET_ROOT_ENV) };
    assert_eq!(SceneConfig::from_env(), SceneConfig::default());
}
