use anyhow::*;

use crate::{
    data_structures::texture::Texture,
    pipelines::{Effect, SharedLayouts},
};

/// Group 3 of the textured effect: the diffuse texture and its sampler.
pub fn diffuse_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
        label: Some("diffuse_texture_bind_group_layout"),
    })
}

/// Bind a diffuse texture for the textured effect.
///
/// The texture must carry its own sampler, as every texture built by
/// [`Texture::from_image`] does.
pub fn mk_diffuse_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    texture: &Texture,
) -> Result<wgpu::BindGroup> {
    let sampler = texture
        .sampler
        .as_ref()
        .context("diffuse texture has no sampler")?;
    Ok(device.create_bind_group(&wgpu::BindGroupDescriptor {
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&texture.view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
        label: Some("diffuse_bind_group"),
    }))
}

/// The textured effect the ground quad is drawn with.
pub fn mk_textured_effect(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    shared: &SharedLayouts,
) -> Effect {
    Effect::new(
        device,
        "Textured",
        include_str!("textured.wgsl"),
        color_format,
        shared,
        diffuse_layout(device),
    )
}
