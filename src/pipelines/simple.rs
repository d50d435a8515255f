use crate::pipelines::{Effect, SharedLayouts};

/// Group 3 of the simple effect: one uniform buffer with the material.
pub fn material_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("material_bind_group_layout"),
    })
}

/// The lit, untextured effect the model is drawn with.
pub fn mk_simple_effect(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    shared: &SharedLayouts,
) -> Effect {
    Effect::new(
        device,
        "Simple",
        include_str!("simple.wgsl"),
        color_format,
        shared,
        material_layout(device),
    )
}
