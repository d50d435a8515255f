use cgmath::{Deg, Point3, Vector4};
use lit_scene::camera::{Camera, CameraUniform, Projection};

const EPS: f32 = 1e-4;

#[test]
fn default_camera_looks_at_origin_from_above() {
    let camera = Camera::default();
    assert_eq!(camera.eye, Point3::new(0.0, 50.0, 100.0));
    assert_eq!(camera.focus, Point3::new(0.0, 0.0, 0.0));
    assert_eq!(camera.up.y, 1.0);
}

#[test]
fn view_matrix_puts_focus_straight_ahead() {
    let camera = Camera::default();
    let view = camera.view_matrix();

    let eye = view * camera.eye.to_homogeneous();
    assert!(eye.x.abs() < EPS && eye.y.abs() < EPS && eye.z.abs() < EPS);

    let focus = view * camera.focus.to_homogeneous();
    assert!(focus.x.abs() < EPS && focus.y.abs() < EPS);
    // right-handed view space looks down -z
    assert!((focus.z + 125.0_f32.sqrt() * 10.0).abs() < 1e-2);
}

#[test]
fn projection_follows_window_size() {
    let mut projection = Projection::new(800, 600, Deg(45.0), 1.0, 300.0);
    assert!((projection.aspect - 4.0 / 3.0).abs() < EPS);
    assert_eq!(projection, Projection::default());

    projection.resize(1920, 1080);
    assert!((projection.aspect - 16.0 / 9.0).abs() < EPS);
}

#[test]
fn minimised_window_keeps_finite_aspect() {
    let mut projection = Projection::default();
    projection.resize(640, 0);
    assert!(projection.aspect.is_finite());
    assert!(projection.calc_matrix().x.x.is_finite());
}

#[test]
fn should_map_depth_range_to_unit_interval() {
    let projection = Projection::default();
    let proj = projection.calc_matrix();

    let near = proj * Vector4::new(0.0, 0.0, -1.0, 1.0);
    let far = proj * Vector4::new(0.0, 0.0, -300.0, 1.0);
    assert!((near.z / near.w).abs() < EPS);
    assert!((far.z / far.w - 1.0).abs() < EPS);
}

#[test]
fn uniform_projects_focus_to_screen_centre() {
    let camera = Camera::default();
    let mut uniform = CameraUniform::new();
    uniform.update_view_proj(&camera, &Projection::default());

    assert_eq!(uniform.eye_position, [0.0, 50.0, 100.0, 1.0]);

    let view_proj: cgmath::Matrix4<f32> = uniform.view_proj.into();
    let clip = view_proj * Vector4::new(0.0, 0.0, 0.0, 1.0);
    assert!((clip.x / clip.w).abs() < EPS);
    assert!((clip.y / clip.w).abs() < EPS);
    let depth = clip.z / clip.w;
    assert!(depth > 0.0 && depth < 1.0);
}
