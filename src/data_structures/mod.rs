//! Scene data: meshes, the ground quad, materials and textures.
//!
//! - `model` holds the vertex layout, GPU meshes and draw helpers
//! - `quad` is the hardcoded ground plane geometry
//! - `material` holds the lighting parameters of the model and their uniform
//! - `texture` wraps GPU textures (diffuse maps and the depth buffer)

pub mod material;
pub mod model;
pub mod quad;
pub mod texture;
