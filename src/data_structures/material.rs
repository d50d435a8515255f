//! Surface material of the lit model.
//!
//! A [`Material`] is a plain record of colours, intensities and the specular
//! power. Its values are forwarded verbatim into a [`MaterialUniform`] that
//! the `simple` effect reads.

use wgpu::util::DeviceExt;

/// A linear-space RGBA colour.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    /// sRGB (0, 191, 255) in linear space.
    pub const DEEP_SKY_BLUE: Color = Color::rgb(0.0, 0.520_995_6, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Build a linear colour from 8-bit sRGB channels.
    pub fn from_srgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b))
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Color> for wgpu::Color {
    fn from(c: Color) -> Self {
        wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
    }
}

fn srgb_to_linear(channel: u8) -> f32 {
    let c = channel as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Ambient, diffuse and specular parameters of a surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub ambient_color: Color,
    pub ambient_intensity: f32,
    pub diffuse_color: Color,
    pub specular_color: Color,
    pub specular_intensity: f32,
    pub specular_power: f32,
}

impl Material {
    /// The red, glossy material the demo model is drawn with.
    pub fn glossy_red() -> Self {
        Self {
            ambient_color: Color::RED,
            ambient_intensity: 0.2,
            diffuse_color: Color::RED,
            specular_color: Color::WHITE,
            specular_intensity: 2.0,
            specular_power: 25.0,
        }
    }

    pub fn to_uniform(&self) -> MaterialUniform {
        MaterialUniform {
            ambient_color: self.ambient_color.to_array(),
            diffuse_color: self.diffuse_color.to_array(),
            specular_color: self.specular_color.to_array(),
            ambient_intensity: self.ambient_intensity,
            specular_intensity: self.specular_intensity,
            specular_power: self.specular_power,
            _padding: 0.0,
        }
    }
}

impl Default for Material {
    /// A plain white surface without highlights.
    fn default() -> Self {
        Self {
            ambient_color: Color::WHITE,
            ambient_intensity: 0.1,
            diffuse_color: Color::WHITE,
            specular_color: Color::BLACK,
            specular_intensity: 0.0,
            specular_power: 1.0,
        }
    }
}

/// GPU layout of [`Material`]; mirrors `struct Material` in `simple.wgsl`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub ambient_color: [f32; 4],
    pub diffuse_color: [f32; 4],
    pub specular_color: [f32; 4],
    pub ambient_intensity: f32,
    pub specular_intensity: f32,
    pub specular_power: f32,
    // Uniforms require 16 byte (4 float) spacing
    _padding: f32,
}

/// The uniform buffer and bind group holding one material.
#[derive(Debug)]
pub struct MaterialResources {
    pub material: Material,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

impl MaterialResources {
    pub fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, material: Material) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Material Buffer"),
            contents: bytemuck::cast_slice(&[material.to_uniform()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some("material_bind_group"),
        });
        Self {
            material,
            buffer,
            bind_group,
        }
    }
}
