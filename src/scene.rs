//! The demo scene: a lit model standing on a textured ground quad.
//!
//! [`Scene`] owns every GPU resource that is not tied to the window: the
//! camera and light uniforms, both effects, the per-object transforms, the
//! model material and the two meshes. It is independent of the surface so
//! it can be drawn into the swapchain or into an offscreen texture.
//!
//! Each frame the caller runs [`Scene::update`] and then [`Scene::draw`],
//! which issues exactly two indexed draw calls: the ground quad with the
//! textured effect, then the model with the simple effect.

use anyhow::*;

use crate::{
    camera::CameraResources,
    config::SceneConfig,
    data_structures::{
        material::MaterialResources,
        model::{DrawMesh, Mesh, Model},
        quad,
    },
    light::LightResources,
    pipelines::{self, Effect, SharedLayouts},
    resources::SceneAssets,
    transform::{self, ObjectResources},
};

#[derive(Debug)]
pub struct Scene {
    pub camera: CameraResources,
    pub light: LightResources,
    simple: Effect,
    textured: Effect,
    model: Model,
    model_object: ObjectResources,
    model_material: MaterialResources,
    ground: Mesh,
    ground_object: ObjectResources,
    ground_bind_group: wgpu::BindGroup,
}

impl Scene {
    /// Build the scene for a colour target of `color_format` and `size` pixels.
    pub fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        size: [u32; 2],
        assets: SceneAssets,
        config: &SceneConfig,
    ) -> Result<Self> {
        let SceneAssets {
            model,
            ground_texture,
        } = assets;
        ensure!(
            model.primary_mesh().is_some(),
            "model {} has no mesh to draw",
            model.name
        );

        let camera = CameraResources::new(device, config.camera, config.projection(size[0], size[1]));
        let light = LightResources::new(device, config.light);
        let transform_layout = transform::mk_bind_group_layout(device);

        let shared = SharedLayouts {
            camera: &camera.bind_group_layout,
            light: &light.bind_group_layout,
            transform: &transform_layout,
        };
        let simple = pipelines::simple::mk_simple_effect(device, color_format, &shared);
        let textured = pipelines::textured::mk_textured_effect(device, color_format, &shared);

        let model_object =
            ObjectResources::new(device, &transform_layout, config.model_transform, "Model")
                .context("model transform")?;
        let model_material =
            MaterialResources::new(device, &simple.parameters_layout, config.model_material);

        let ground = quad::create_quad_mesh(device);
        let ground_object =
            ObjectResources::new(device, &transform_layout, config.ground_transform, "Ground")
                .context("ground transform")?;
        let ground_bind_group = pipelines::textured::mk_diffuse_bind_group(
            device,
            &textured.parameters_layout,
            &ground_texture,
        )
        .context("ground texture")?;

        log::info!(
            "scene ready: {} with effect {}, ground with effect {}",
            model.name,
            simple.name,
            textured.name
        );

        Ok(Self {
            camera,
            light,
            simple,
            textured,
            model,
            model_object,
            model_material,
            ground,
            ground_object,
            ground_bind_group,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.projection.resize(width, height);
    }

    /// Recompute the camera and both object uniforms and upload them.
    pub fn update(&mut self, queue: &wgpu::Queue) -> Result<()> {
        self.camera.update(queue);
        self.ground_object.update(queue).context("ground transform")?;
        self.model_object.update(queue).context("model transform")?;
        Ok(())
    }

    /// Record the two draw calls into `render_pass`.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_bind_group(0, &self.camera.bind_group, &[]);
        render_pass.set_bind_group(1, &self.light.bind_group, &[]);

        render_pass.set_pipeline(&self.textured.pipeline);
        render_pass.draw_mesh(
            &self.ground,
            &self.ground_object.bind_group,
            &self.ground_bind_group,
        );

        if let Some(mesh) = self.model.primary_mesh() {
            render_pass.set_pipeline(&self.simple.pipeline);
            render_pass.draw_mesh(
                mesh,
                &self.model_object.bind_group,
                &self.model_material.bind_group,
            );
        }
    }

    /// Update the uniforms and record one frame: clear colour and depth, then draw.
    ///
    /// The returned encoder is not submitted so callers can append copies.
    pub fn encode_frame(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        target: &wgpu::TextureView,
        depth: &wgpu::TextureView,
        clear_color: wgpu::Color,
    ) -> Result<wgpu::CommandEncoder> {
        self.update(queue)?;

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: depth,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
                multiview_mask: None,
            });
            self.draw(&mut render_pass);
        }
        Ok(encoder)
    }
}
