use lit_scene::offscreen::{padded_bytes_per_row, strip_row_padding};

#[cfg(feature = "integration-tests")]
mod common;

#[test]
fn rows_are_padded_to_copy_alignment() {
    assert_eq!(padded_bytes_per_row(64), 256);
    assert_eq!(padded_bytes_per_row(65), 512);
    assert_eq!(padded_bytes_per_row(1), 256);
    assert_eq!(padded_bytes_per_row(800) % wgpu::COPY_BYTES_PER_ROW_ALIGNMENT, 0);
}

#[test]
fn should_strip_padding_of_every_row() {
    let (width, height) = (3, 2);
    let padded = padded_bytes_per_row(width) as usize;
    let mut data = vec![0xffu8; padded * height as usize];
    for row in 0..height as usize {
        for byte in 0..(width * 4) as usize {
            data[row * padded + byte] = row as u8 + 1;
        }
    }

    let pixels = strip_row_padding(&data, width, height).unwrap();
    assert_eq!(pixels.len(), (width * height * 4) as usize);
    assert!(pixels[..12].iter().all(|&b| b == 1));
    assert!(pixels[12..].iter().all(|&b| b == 2));
}

#[test]
fn should_reject_truncated_readback() {
    let padded = padded_bytes_per_row(3) as usize;
    // one full row, then a partial second row
    let data = vec![0u8; padded + 4];

    let err = strip_row_padding(&data, 3, 2).unwrap_err();
    assert!(err.to_string().contains("readback buffer"));
    assert!(strip_row_padding(&data, 3, 1).is_ok());
}

#[cfg(feature = "integration-tests")]
mod gpu {
    use super::common::test_utils::Headless;
    use super::common::test_utils::checker_image;
    use lit_scene::{
        config::SceneConfig,
        data_structures::{material::Color, texture::Texture},
        pipelines::textured::{diffuse_layout, mk_diffuse_bind_group},
    };

    const SIZE: [u32; 2] = [256, 192];

    fn close(a: u8, b: u8) -> bool {
        a.abs_diff(b) <= 2
    }

    #[test]
    fn should_clear_sky_to_configured_colour() {
        let gpu = Headless::new();
        let config = SceneConfig::default();
        let mut scene = gpu.scene(&config, SIZE);
        let img = gpu.render(&mut scene, &config, SIZE);

        assert_eq!((img.width(), img.height()), (SIZE[0], SIZE[1]));
        // The ground ends well below the top edge of the view.
        for (x, y) in [(0, 0), (SIZE[0] - 1, 0)] {
            let p = img.get_pixel(x, y);
            assert!(
                close(p[0], 0) && close(p[1], 191) && close(p[2], 255),
                "pixel ({x}, {y}) = {:?}",
                p
            );
        }
    }

    #[test]
    fn should_draw_red_model_above_the_ground() {
        let gpu = Headless::new();
        let config = SceneConfig::default();
        let mut scene = gpu.scene(&config, SIZE);
        let img = gpu.render(&mut scene, &config, SIZE);

        let p = img.get_pixel(SIZE[0] / 2, SIZE[1] / 3);
        assert!(p[0] > 150, "model pixel {:?}", p);
        assert!(p[1] < 80 && p[2] < 80, "model pixel {:?}", p);
    }

    #[test]
    fn should_draw_ground_below_the_model() {
        let gpu = Headless::new();
        let config = SceneConfig::default().with_clear_color(Color::BLACK);
        let mut scene = gpu.scene(&config, SIZE);
        let img = gpu.render(&mut scene, &config, SIZE);

        let p = img.get_pixel(SIZE[0] / 2, SIZE[1] - 4);
        assert!(p[0] > 0 && p[1] > 0 && p[2] > 0, "ground pixel {:?}", p);
        // grey checker, lit by a white light
        assert!(p[0].abs_diff(p[1]) <= 2 && p[1].abs_diff(p[2]) <= 2);
    }

    #[test]
    fn should_render_again_after_resize() {
        let gpu = Headless::new();
        let config = SceneConfig::default();
        let mut scene = gpu.scene(&config, SIZE);
        gpu.render(&mut scene, &config, SIZE);

        let img = gpu.render(&mut scene, &config, [100, 100]);
        assert_eq!((img.width(), img.height()), (100, 100));
        assert_eq!(scene.camera.projection.aspect, 1.0);
    }

    #[test]
    fn diffuse_bind_group_needs_a_sampler() {
        let gpu = Headless::new();
        let layout = diffuse_layout(&gpu.device);

        let sampled = Texture::from_image(&gpu.device, &gpu.queue, &checker_image(16), Some("checker"))
            .unwrap();
        assert!(mk_diffuse_bind_group(&gpu.device, &layout, &sampled).is_ok());

        let depth = Texture::create_depth_texture(&gpu.device, [16, 16], "depth");
        let err = mk_diffuse_bind_group(&gpu.device, &layout, &depth).unwrap_err();
        assert!(err.to_string().contains("no sampler"));
    }
}
