//! Scene configuration.
//!
//! [`SceneConfig`] gathers every constant of the demo: window, camera,
//! light, the two object transforms, the model material and the asset
//! paths. `Default` reproduces the demo scene; the `with_*` methods adjust
//! single values.

use cgmath::{Deg, Vector3};

use crate::{
    camera::{Camera, Projection},
    data_structures::material::{Color, Material},
    light::PointLight,
    transform::WorldTransform,
};

/// Environment variable that overrides [`SceneConfig::asset_root`].
pub const ASSET_ROOT_ENV: &str = "LIT_SCENE_ASSETS";

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Synchronise presentation with the display refresh.
    pub vsync: bool,
    pub clear_color: Color,
    pub camera: Camera,
    pub fovy: Deg<f32>,
    pub znear: f32,
    pub zfar: f32,
    pub light: PointLight,
    pub model_transform: WorldTransform,
    pub model_material: Material,
    pub ground_transform: WorldTransform,
    pub asset_root: String,
    pub model_path: String,
    pub ground_texture_path: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            title: "lit-scene".to_string(),
            width: 800,
            height: 600,
            vsync: false,
            clear_color: Color::DEEP_SKY_BLUE,
            camera: Camera::default(),
            fovy: Deg(45.0),
            znear: 1.0,
            zfar: 300.0,
            light: PointLight::default(),
            model_transform: WorldTransform::new(10.0, Vector3::new(0.0, 16.0, 0.0)),
            model_material: Material::glossy_red(),
            ground_transform: WorldTransform::scaled(100.0),
            asset_root: "assets".to_string(),
            model_path: "models/sphere.obj".to_string(),
            ground_texture_path: "textures/cobblestones_diffuse.png".to_string(),
        }
    }
}

impl SceneConfig {
    /// Defaults, with the asset root taken from [`ASSET_ROOT_ENV`] when set.
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(ASSET_ROOT_ENV) {
            Ok(root) if !root.is_empty() => config.with_asset_root(root),
            _ => config,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    pub fn with_clear_color(mut self, clear_color: Color) -> Self {
        self.clear_color = clear_color;
        self
    }

    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_light(mut self, light: PointLight) -> Self {
        self.light = light;
        self
    }

    pub fn with_model_material(mut self, material: Material) -> Self {
        self.model_material = material;
        self
    }

    pub fn with_asset_root<S: Into<String>>(mut self, root: S) -> Self {
        self.asset_root = root.into();
        self
    }

    /// Projection for a render target of the given size.
    pub fn projection(&self, width: u32, height: u32) -> Projection {
        Projection::new(width, height, self.fovy, self.znear, self.zfar)
    }

    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }
}
