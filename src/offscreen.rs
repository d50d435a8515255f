//! Render a [`Scene`] without a window and read the pixels back.
//!
//! The scene must have been built for [`OFFSCREEN_FORMAT`]. Rows of the
//! readback buffer are padded to `COPY_BYTES_PER_ROW_ALIGNMENT` on the GPU;
//! the padding is stripped before the image is returned.

use std::time::Duration;

use anyhow::*;

use crate::{data_structures::texture::Texture, scene::Scene};

pub const OFFSCREEN_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

const BYTES_PER_PIXEL: u32 = 4;

/// Bytes per row after padding `width` pixels up to the copy alignment.
pub fn padded_bytes_per_row(width: u32) -> u32 {
    let unpadded = width * BYTES_PER_PIXEL;
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    unpadded.div_ceil(align) * align
}

/// Drop the per-row padding of a mapped readback buffer.
///
/// `data` must hold at least `height` padded rows.
pub fn strip_row_padding(data: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let padded = padded_bytes_per_row(width) as usize;
    let unpadded = (width * BYTES_PER_PIXEL) as usize;
    ensure!(
        data.len() >= padded * height as usize,
        "readback buffer holds {} bytes, {width}x{height} needs {}",
        data.len(),
        padded * height as usize
    );
    Ok(data
        .chunks(padded)
        .take(height as usize)
        .flat_map(|row| &row[..unpadded])
        .copied()
        .collect())
}

pub async fn render_to_image(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    scene: &mut Scene,
    size: [u32; 2],
    clear_color: wgpu::Color,
) -> Result<image::RgbaImage> {
    let [width, height] = size;
    ensure!(width > 0 && height > 0, "cannot render an empty {width}x{height} image");

    let extent3d = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    let target = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Offscreen Target"),
        size: extent3d,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: OFFSCREEN_FORMAT,
        usage: wgpu::TextureUsages::COPY_SRC | wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let target_view = target.create_view(&wgpu::TextureViewDescriptor::default());
    let depth = Texture::create_depth_texture(device, size, "offscreen_depth_texture");

    scene.resize(width, height);
    let mut encoder = scene.encode_frame(device, queue, &target_view, &depth.view, clear_color)?;

    let bytes_per_row = padded_bytes_per_row(width);
    let output_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Offscreen Readback Buffer"),
        size: (bytes_per_row * height) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
        mapped_at_creation: false,
    });
    encoder.copy_texture_to_buffer(
        wgpu::TexelCopyTextureInfo {
            aspect: wgpu::TextureAspect::All,
            texture: &target,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
        },
        wgpu::TexelCopyBufferInfo {
            buffer: &output_buffer,
            layout: wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(bytes_per_row),
                rows_per_image: Some(height),
            },
        },
        extent3d,
    );
    queue.submit(std::iter::once(encoder.finish()));

    let buffer_slice = output_buffer.slice(..);
    let (tx, rx) = futures_intrusive::channel::shared::oneshot_channel();
    buffer_slice.map_async(wgpu::MapMode::Read, move |result| {
        // The receiver only goes away if the caller stopped waiting.
        let _ = tx.send(result);
    });
    device
        .poll(wgpu::PollType::Wait {
            submission_index: None,
            timeout: Some(Duration::from_secs(3)),
        })
        .context("waiting for the offscreen frame")?;
    rx.receive()
        .await
        .context("readback channel closed")?
        .context("mapping the readback buffer")?;

    let pixels = {
        let data = buffer_slice.get_mapped_range();
        strip_row_padding(&data, width, height)
    };
    output_buffer.unmap();
    let pixels = pixels?;
    log::debug!("read back {width}x{height} offscreen frame");

    image::RgbaImage::from_raw(width, height, pixels)
        .context("readback size does not match the image size")
}
