#[cfg(feature = "integration-tests")]
use lit_scene::{
    config::SceneConfig,
    data_structures::{model::Model, texture::Texture},
    resources::SceneAssets,
    scene::Scene,
};
use lit_scene::resources;

/// A unit tetrahedron with per-face normals and texture coordinates.
pub const TETRAHEDRON_OBJ: &str = "\
o tetrahedron
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
v 0.0 0.0 1.0
vn 0.0 0.0 -1.0
vn 0.0 -1.0 0.0
vn -1.0 0.0 0.0
vn 0.577350 0.577350 0.577350
vt 0.0 0.0
vt 1.0 0.0
vt 0.0 1.0
f 1/1/1 3/3/1 2/2/1
f 1/1/2 2/2/2 4/3/2
f 1/1/3 4/3/3 3/2/3
f 2/1/4 3/2/4 4/3/4
";

/// The same tetrahedron without normals or texture coordinates.
pub const BARE_TETRAHEDRON_OBJ: &str = "\
o bare
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
v 0.0 0.0 1.0
f 1 3 2
f 1 2 4
f 1 4 3
f 2 3 4
";

/// A grey and white checkerboard standing in for the ground texture.
pub fn checker_image(size: u32) -> image::DynamicImage {
    let img = image::RgbaImage::from_fn(size, size, |x, y| {
        if (x / 8 + y / 8) % 2 == 0 {
            image::Rgba([200, 200, 200, 255])
        } else {
            image::Rgba([120, 120, 120, 255])
        }
    });
    image::DynamicImage::ImageRgba8(img)
}

pub fn parse(obj: &str) -> Vec<tobj::Model> {
    futures::executor::block_on(resources::parse_obj(obj, "test.obj"))
        .expect("test obj should parse")
}

/// A device without a window, for rendering scenes offscreen.
#[cfg(feature = "integration-tests")]
pub struct Headless {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

#[cfg(feature = "integration-tests")]
impl Headless {
    pub fn new() -> Self {
        let instance = lit_scene::context::mk_instance();
        let gpu = futures::executor::block_on(lit_scene::context::request_gpu(&instance, None))
            .expect("integration tests need a GPU adapter");
        Self {
            device: gpu.device,
            queue: gpu.queue,
        }
    }

    pub fn load_model(&self, root: &str, file_name: &str) -> Model {
        futures::executor::block_on(resources::load_model_obj(root, file_name, &self.device))
            .expect("model should load")
    }

    /// The configured model on a checkerboard ground.
    pub fn scene(&self, config: &SceneConfig, size: [u32; 2]) -> Scene {
        let model = self.load_model(&config.asset_root, &config.model_path);
        let ground_texture =
            Texture::from_image(&self.device, &self.queue, &checker_image(64), Some("checker"))
                .expect("checker texture should upload");
        let assets = SceneAssets {
            model,
            ground_texture,
        };
        Scene::new(
            &self.device,
            lit_scene::offscreen::OFFSCREEN_FORMAT,
            size,
            assets,
            config,
        )
        .expect("scene should build")
    }

    pub fn render(&self, scene: &mut Scene, config: &SceneConfig, size: [u32; 2]) -> image::RgbaImage {
        futures::executor::block_on(lit_scene::offscreen::render_to_image(
            &self.device,
            &self.queue,
            scene,
            size,
            config.clear_color.into(),
        ))
        .expect("offscreen render should succeed")
    }
}
