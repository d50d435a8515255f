//! lit-scene
//!
//! A small wgpu demo: a mesh lit by a single point light with ambient,
//! diffuse and specular terms, standing on a textured ground quad, seen from
//! a fixed camera. The crate is glue over `winit`, `wgpu`, `tobj` and
//! `image`; it loads two effects and one mesh, sets a handful of matrix and
//! material parameters and issues two draw calls per frame.
//!
//! High-level modules
//! - `camera`: the fixed look-at camera, projection and camera uniform
//! - `config`: every constant of the scene, with defaults
//! - `context`: window-bound GPU context (surface, device, queue, depth buffer)
//! - `data_structures`: meshes, the ground quad, materials and textures
//! - `flow`: the winit event loop
//! - `light`: the point light and its uniform
//! - `offscreen`: render the scene into an image without a window
//! - `pipelines`: the `simple` and `textured` effects
//! - `resources`: loading the mesh and texture from disk
//! - `scene`: the GPU resources of the scene and the per-frame draw
//! - `transform`: world matrices and their inverse transpose
//!

pub mod camera;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod flow;
pub mod light;
pub mod offscreen;
pub mod pipelines;
pub mod resources;
pub mod scene;
pub mod transform;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use config::SceneConfig;
pub use flow::run;
