use futures::executor::block_on;
use lit_scene::{
    config::SceneConfig,
    resources::{
        mesh::{to_vertices, validate_indices},
        parse_obj,
        texture::{load_binary, load_string},
    },
};

mod common;

use common::test_utils::{parse, BARE_TETRAHEDRON_OBJ, TETRAHEDRON_OBJ};

#[test]
fn should_parse_single_indexed_triangles() {
    let models = parse(TETRAHEDRON_OBJ);
    assert_eq!(models.len(), 1);
    assert_eq!(models[0].name, "tetrahedron");

    let mesh = &models[0].mesh;
    assert_eq!(mesh.indices.len(), 12);
    assert_eq!(mesh.positions.len() / 3, mesh.normals.len() / 3);
    validate_indices(&mesh.indices, mesh.positions.len() / 3).unwrap();
}

#[test]
fn should_flip_v_and_keep_unit_normals() {
    let models = parse(TETRAHEDRON_OBJ);
    let vertices = to_vertices(&models[0].mesh);

    let origin_vertices: Vec<_> = vertices
        .iter()
        .filter(|v| v.position == [0.0, 0.0, 0.0])
        .collect();
    assert!(!origin_vertices.is_empty());
    for v in origin_vertices {
        assert_eq!(v.tex_coords, [0.0, 1.0]);
    }

    for v in &vertices {
        let [x, y, z] = v.normal;
        assert!(((x * x + y * y + z * z).sqrt() - 1.0).abs() < 1e-4);
    }
}

#[test]
fn missing_attributes_read_as_zero() {
    let models = parse(BARE_TETRAHEDRON_OBJ);
    let vertices = to_vertices(&models[0].mesh);

    assert_eq!(vertices.len(), 4);
    for v in &vertices {
        assert_eq!(v.normal, [0.0; 3]);
        assert_eq!(v.tex_coords, [0.0, 1.0]);
    }
}

#[test]
fn should_ignore_material_libraries() {
    let obj = format!("mtllib missing.mtl\nusemtl shiny\n{}", BARE_TETRAHEDRON_OBJ);
    let models = block_on(parse_obj(&obj, "with_mtl.obj")).unwrap();
    assert_eq!(models.len(), 1);
    assert_eq!(models[0].mesh.indices.len(), 12);
}

#[test]
fn should_reject_broken_index_lists() {
    assert!(validate_indices(&[], 3).is_err());
    assert!(validate_indices(&[0, 1], 3).is_err());

    let err = validate_indices(&[0, 1, 3], 3).unwrap_err();
    assert!(err.to_string().contains("out of range"));

    assert!(validate_indices(&[0, 1, 2, 2, 1, 0], 3).is_ok());
}

#[test]
fn shipped_model_rests_on_the_ground() {
    let config = SceneConfig::default();
    let text = block_on(load_string(&config.asset_root, &config.model_path)).unwrap();
    let models = block_on(parse_obj(&text, &config.model_path)).unwrap();
    assert_eq!(models.len(), 1);

    let vertices = to_vertices(&models[0].mesh);
    assert!(!vertices.is_empty());

    let world = config.model_transform.matrix();
    let lowest = vertices
        .iter()
        .map(|v| {
            let p = cgmath::Point3::from(v.position);
            (world * p.to_homogeneous()).y
        })
        .fold(f32::INFINITY, f32::min);
    assert!(lowest.abs() < 1e-3, "lowest point at y = {}", lowest);
}

#[test]
fn shipped_ground_texture_decodes() {
    let config = SceneConfig::default();
    let bytes = block_on(load_binary(&config.asset_root, &config.ground_texture_path)).unwrap();
    let img = image::load_from_memory(&bytes).unwrap();
    assert!(img.width() > 0 && img.height() > 0);
}

#[test]
fn missing_asset_names_the_path() {
    let err = block_on(load_string("assets", "models/does_not_exist.obj")).unwrap_err();
    assert!(format!("{:#}", err).contains("does_not_exist.obj"));
}
