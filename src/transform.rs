//! World transforms and the per-object uniform.
//!
//! Every drawn object carries a `World` matrix and the inverse transpose of
//! it (`InverseTransposeWorld`), which the effects use to bring normals into
//! world space without distortion under non-uniform scaling.

use anyhow::*;
use cgmath::{Matrix, Matrix4, SquareMatrix, Vector3, Zero};
use wgpu::util::DeviceExt;

/// Uniform scale followed by a translation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WorldTransform {
    pub scale: f32,
    pub translation: Vector3<f32>,
}

impl WorldTransform {
    pub fn new(scale: f32, translation: Vector3<f32>) -> Self {
        Self { scale, translation }
    }

    pub fn scaled(scale: f32) -> Self {
        Self::new(scale, Vector3::zero())
    }

    /// The world matrix; the scale is applied before the translation.
    pub fn matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.translation) * Matrix4::from_scale(self.scale)
    }

    pub fn to_uniform(&self) -> Result<ObjectUniform> {
        ObjectUniform::from_world(self.matrix())
    }
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self::scaled(1.0)
    }
}

/// `transpose(inverse(world))`, the matrix that transforms normals.
pub fn inverse_transpose(world: Matrix4<f32>) -> Result<Matrix4<f32>> {
    let inverse = world
        .invert()
        .with_context(|| format!("world matrix is not invertible: {:?}", world))?;
    Ok(inverse.transpose())
}

/// GPU layout of the per-object matrices; mirrors `struct Object` in the effects.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub world: [[f32; 4]; 4],
    pub inverse_transpose_world: [[f32; 4]; 4],
}

impl ObjectUniform {
    pub fn from_world(world: Matrix4<f32>) -> Result<Self> {
        Ok(Self {
            world: world.into(),
            inverse_transpose_world: inverse_transpose(world)?.into(),
        })
    }
}

pub fn mk_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("object_bind_group_layout"),
    })
}

/// A transform together with the buffer and bind group it is uploaded to.
#[derive(Debug)]
pub struct ObjectResources {
    pub transform: WorldTransform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

impl ObjectResources {
    pub fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        transform: WorldTransform,
        label: &str,
    ) -> Result<Self> {
        let uniform = transform.to_uniform()?;
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Object Buffer")),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some(&format!("{label} object_bind_group")),
        });
        Ok(Self {
            transform,
            buffer,
            bind_group,
        })
    }

    /// Recompute both matrices from the current transform and upload them.
    pub fn update(&self, queue: &wgpu::Queue) -> Result<()> {
        let uniform = self.transform.to_uniform()?;
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[uniform]));
        Ok(())
    }
}
