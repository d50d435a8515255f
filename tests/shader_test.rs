const SIMPLE: &str = include_str!("../src/pipelines/simple.wgsl");
const TEXTURED: &str = include_str!("../src/pipelines/textured.wgsl");

#[test]
fn both_effects_provide_the_simple_technique() {
    let technique = lit_scene::pipelines::SIMPLE;
    for source in [SIMPLE, TEXTURED] {
        assert!(source.contains(&format!("fn {}(", technique.vertex_entry)));
        assert!(source.contains(&format!("fn {}(", technique.fragment_entry)));
    }
}

#[test]
fn both_effects_read_world_and_inverse_transpose_world() {
    for source in [SIMPLE, TEXTURED] {
        assert!(source.contains("@group(2) @binding(0)\nvar<uniform> transform: Transform;"));
        assert!(source.contains("    world: mat4x4<f32>,"));
        assert!(source.contains("    inverse_transpose_world: mat4x4<f32>,"));
    }
}

#[test]
fn textured_effect_samples_diffuse_texture() {
    assert!(TEXTURED.contains("@group(3) @binding(0)\nvar diffuse_texture: texture_2d<f32>;"));
    assert!(TEXTURED.contains("@group(3) @binding(1)\nvar diffuse_sampler: sampler;"));
    assert!(TEXTURED.contains("textureSample(diffuse_texture, diffuse_sampler, in.tex_coords)"));
}

#[test]
fn simple_effect_reads_material_at_group_3() {
    assert!(SIMPLE.contains("@group(3) @binding(0)\nvar<uniform> material: Material;"));
    for field in ["ambient_intensity", "specular_intensity", "specular_power"] {
        assert!(SIMPLE.contains(&format!("material.{field}")));
    }
}
