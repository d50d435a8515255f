use std::io::{BufReader, Cursor};

use anyhow::*;

use crate::{
    config::SceneConfig,
    data_structures::{model, texture::Texture},
};

/**
 * This module contains all logic for loading meshes and textures from external files.
 */
pub mod mesh;
pub mod texture;

/// Everything the scene needs from disk.
#[derive(Debug)]
pub struct SceneAssets {
    pub model: model::Model,
    pub ground_texture: Texture,
}

/// Parse OBJ text into triangulated, single-indexed meshes.
///
/// Material libraries referenced by the file are not read; the model is
/// always drawn with the material from [`SceneConfig`].
pub async fn parse_obj(obj_text: &str, file_name: &str) -> Result<Vec<tobj::Model>> {
    let mut obj_reader = BufReader::new(Cursor::new(obj_text));
    let (models, _) = tobj::load_obj_buf_async(
        &mut obj_reader,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
        |p| async move {
            log::debug!("{file_name} references material library {p}, which is not used");
            tobj::MTLLoadResult::Ok(Default::default())
        },
    )
    .await
    .with_context(|| format!("parsing {file_name}"))?;
    Ok(models)
}

pub async fn load_model_obj(
    root: &str,
    file_name: &str,
    device: &wgpu::Device,
) -> Result<model::Model> {
    let obj_text = texture::load_string(root, file_name).await?;
    let models = parse_obj(&obj_text, file_name).await?;

    let meshes: Vec<model::Mesh> = mesh::load_meshes(&models, file_name, device)
        .into_iter()
        .enumerate()
        .filter_map(|(idx, result)| match result {
            Result::Ok(mesh) => Some(mesh),
            Err(e) => {
                log::warn!("Mesh at index {} in file {} could not be loaded: {:#}", idx, file_name, e);
                None
            }
        })
        .collect();

    if meshes.is_empty() {
        bail!("{file_name} contains no drawable mesh");
    }
    if meshes.len() > 1 {
        log::warn!(
            "{file_name} contains {} meshes; only `{}` is drawn",
            meshes.len(),
            meshes[0].name
        );
    }
    log::info!("loaded {file_name} ({} indices)", meshes[0].num_elements);

    Ok(model::Model {
        name: file_name.to_string(),
        meshes,
    })
}

/// Load the model and the ground texture named in `config` concurrently.
pub async fn load_scene_assets(
    config: &SceneConfig,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> Result<SceneAssets> {
    let root = config.asset_root.as_str();
    let (model, ground_texture) = futures::try_join!(
        load_model_obj(root, &config.model_path, device),
        texture::load_texture(root, &config.ground_texture_path, device, queue),
    )?;
    log::info!("loaded {}", config.ground_texture_path);
    Ok(SceneAssets {
        model,
        ground_texture,
    })
}
