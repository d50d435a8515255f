use anyhow::*;
use wgpu::util::DeviceExt;

use crate::data_structures::model::{self, ModelVertex};

/// Flatten a `tobj` mesh into interleaved vertices.
///
/// Missing normals or texture coordinates read as zero. V is flipped because
/// OBJ puts the texture origin at the bottom left while wgpu puts it at the
/// top left.
pub fn to_vertices(mesh: &tobj::Mesh) -> Vec<ModelVertex> {
    (0..mesh.positions.len() / 3)
        .map(|i| ModelVertex {
            position: [
                mesh.positions[i * 3],
                mesh.positions[i * 3 + 1],
                mesh.positions[i * 3 + 2],
            ],
            normal: [
                mesh.normals.get(i * 3).map_or(0.0, |f| *f),
                mesh.normals.get(i * 3 + 1).map_or(0.0, |f| *f),
                mesh.normals.get(i * 3 + 2).map_or(0.0, |f| *f),
            ],
            tex_coords: [
                mesh.texcoords.get(i * 2).map_or(0.0, |f| *f),
                1.0 - mesh.texcoords.get(i * 2 + 1).map_or(0.0, |f| *f),
            ],
        })
        .collect()
}

/// Reject index lists that are not whole triangles or point past the vertices.
pub fn validate_indices(indices: &[u32], vertex_count: usize) -> Result<()> {
    if indices.is_empty() {
        bail!("mesh has no triangles");
    }
    if indices.len() % 3 != 0 {
        bail!("index count {} is not a multiple of 3", indices.len());
    }
    if let Some(out_of_range) = indices.iter().find(|&&i| i as usize >= vertex_count) {
        bail!(
            "index {} is out of range for {} vertices",
            out_of_range,
            vertex_count
        );
    }
    Ok(())
}

pub fn load_meshes(
    models: &[tobj::Model],
    file_name: &str,
    device: &wgpu::Device,
) -> Vec<Result<model::Mesh>> {
    models
        .iter()
        .map(|m| {
            let vertices = to_vertices(&m.mesh);
            validate_indices(&m.mesh.indices, vertices.len())
                .with_context(|| format!("mesh `{}` in {}", m.name, file_name))?;

            let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{:?} Vertex Buffer", file_name)),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });

            let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{:?} Index Buffer", file_name)),
                // The indices are for positions, texels, and normals because we set `single_index` to true
                contents: bytemuck::cast_slice(&m.mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });

            Ok(model::Mesh {
                name: m.name.clone(),
                vertex_buffer,
                index_buffer,
                index_format: wgpu::IndexFormat::Uint32,
                num_elements: m.mesh.indices.len() as u32,
            })
        })
        .collect()
}
