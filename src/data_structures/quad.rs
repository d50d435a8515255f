//! The 2x2 ground quad centred on the origin.
//!
//! The quad lies in the XZ plane with its normal pointing up. Its world
//! transform scales it out to the size of a ground plane.

use wgpu::util::DeviceExt;

use crate::data_structures::model::{Mesh, ModelVertex};

const UP: [f32; 3] = [0.0, 1.0, 0.0];

/// Corner vertices: top-left, top-right, bottom-left, bottom-right.
pub const QUAD_VERTICES: [ModelVertex; 4] = [
    ModelVertex {
        position: [-1.0, 0.0, -1.0],
        normal: UP,
        tex_coords: [0.0, 0.0],
    },
    ModelVertex {
        position: [1.0, 0.0, -1.0],
        normal: UP,
        tex_coords: [1.0, 0.0],
    },
    ModelVertex {
        position: [-1.0, 0.0, 1.0],
        normal: UP,
        tex_coords: [0.0, 1.0],
    },
    ModelVertex {
        position: [1.0, 0.0, 1.0],
        normal: UP,
        tex_coords: [1.0, 1.0],
    },
];

/// Two triangles. They wind in opposite directions, so the quad has to be
/// drawn without back-face culling.
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 1, 2, 3];

/// Upload the quad into vertex and index buffers.
pub fn create_quad_mesh(device: &wgpu::Device) -> Mesh {
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Quad Vertex Buffer"),
        contents: bytemuck::cast_slice(&QUAD_VERTICES),
        usage: wgpu::BufferUsages::VERTEX,
    });
    // Six u16 indices are 12 bytes, which is already a multiple of COPY_BUFFER_ALIGNMENT.
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Quad Index Buffer"),
        contents: bytemuck::cast_slice(&QUAD_INDICES),
        usage: wgpu::BufferUsages::INDEX,
    });
    Mesh {
        name: "quad".to_string(),
        vertex_buffer,
        index_buffer,
        index_format: wgpu::IndexFormat::Uint16,
        num_elements: QUAD_INDICES.len() as u32,
    }
}
