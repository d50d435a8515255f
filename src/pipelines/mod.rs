//! Shader effects.
//!
//! An [`Effect`] is a compiled render pipeline plus the name of the
//! technique it was built from. Both effects share the bind group order
//! `camera (0)`, `light (1)`, `transform (2)` and differ only in group 3:
//! the `simple` effect binds a material uniform, the `textured` effect binds
//! the diffuse texture.

pub mod simple;
pub mod textured;

use crate::data_structures::{
    model::{ModelVertex, Vertex},
    texture::Texture,
};

/// Vertex and fragment entry points that make up a technique.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Technique {
    pub name: &'static str,
    pub vertex_entry: &'static str,
    pub fragment_entry: &'static str,
}

/// The one technique every effect in this crate provides.
pub const SIMPLE: Technique = Technique {
    name: "Simple",
    vertex_entry: "vs_simple",
    fragment_entry: "fs_simple",
};

/// Bind group layouts shared by both effects.
pub struct SharedLayouts<'a> {
    pub camera: &'a wgpu::BindGroupLayout,
    pub light: &'a wgpu::BindGroupLayout,
    pub transform: &'a wgpu::BindGroupLayout,
}

#[derive(Debug)]
pub struct Effect {
    pub name: &'static str,
    pub technique: Technique,
    pub pipeline: wgpu::RenderPipeline,
    /// Layout of group 3, the effect specific parameters.
    pub parameters_layout: wgpu::BindGroupLayout,
}

impl Effect {
    pub(crate) fn new(
        device: &wgpu::Device,
        name: &'static str,
        source: &'static str,
        color_format: wgpu::TextureFormat,
        shared: &SharedLayouts,
        parameters_layout: wgpu::BindGroupLayout,
    ) -> Self {
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(&format!("{name} Pipeline Layout")),
            bind_group_layouts: &[
                shared.camera,
                shared.light,
                shared.transform,
                &parameters_layout,
            ],
            immediate_size: 0,
        });
        let shader = wgpu::ShaderModuleDescriptor {
            label: Some(name),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        };
        log::debug!("building effect {name} with technique {}", SIMPLE.name);
        let pipeline = mk_render_pipeline(
            device,
            &layout,
            color_format,
            Some(wgpu::BlendState::REPLACE),
            Some(Texture::DEPTH_FORMAT),
            &[ModelVertex::desc()],
            shader,
            SIMPLE,
        );
        Self {
            name,
            technique: SIMPLE,
            pipeline,
            parameters_layout,
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn mk_render_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    color_format: wgpu::TextureFormat,
    blend: Option<wgpu::BlendState>,
    depth_format: Option<wgpu::TextureFormat>,
    vertex_layouts: &[wgpu::VertexBufferLayout],
    shader: wgpu::ShaderModuleDescriptor,
    technique: Technique,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(shader);

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        cache: None,
        label: Some(technique.name),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some(technique.vertex_entry),
            buffers: vertex_layouts,
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some(technique.fragment_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            // The ground quad mixes windings, so nothing is culled
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: depth_format.map(|format| wgpu::DepthStencilState {
            format,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview_mask: None,
    })
}
