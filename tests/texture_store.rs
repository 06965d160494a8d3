//! Contract tests for texture creation, sizing, and disposal, run against
//! the in-memory reference backend.

use padded_textures::backend::soft::SoftGl;
use padded_textures::pixel_formats::Rgba;
use padded_textures::sampler::Filter;
use padded_textures::software::PixelImage;
use padded_textures::textures::{Texture, TextureError};

fn red_image(width: u32, height: u32) -> PixelImage {
    PixelImage::new_with(width, height, |_, _| Rgba {
        r: 255,
        g: 0,
        b: 0,
        a: 255,
    })
}

#[test]
fn create_empty_reports_logical_size() {
    let gl = SoftGl::new();
    for (width, height, padded) in [
        (4, 4, (4, 4)),
        (10, 20, (16, 32)),
        (100, 7, (128, 8)),
        (256, 256, (256, 256)),
    ] {
        let mut texture =
            Texture::new(&gl, width, height, Filter::Nearest).expect("creation succeeds");
        assert_eq!(texture.size(), (width, height));
        assert_eq!(texture.padded_size(), padded);
        texture.dispose(&gl);
    }
}

#[test]
fn create_empty_rejects_sizes_that_round_below_minimum() {
    let gl = SoftGl::new();
    for (width, height) in [(2, 8), (8, 2), (0, 16), (16, 0), (1, 1)] {
        let err = Texture::new(&gl, width, height, Filter::Nearest).unwrap_err();
        match err {
            TextureError::InvalidSize {
                width: w,
                height: h,
            } => assert_eq!((w, h), (width, height)),
            other => panic!("expected InvalidSize, got {other:?}"),
        }
    }
}

#[test]
fn logical_three_rounds_up_to_minimum_and_succeeds() {
    // the empty-create check is against the padded extent, so 3 -> 4 passes
    let gl = SoftGl::new();
    let mut texture = Texture::new(&gl, 3, 3, Filter::Nearest).expect("3 rounds up to 4");
    assert_eq!(texture.size(), (3, 3));
    assert_eq!(texture.padded_size(), (4, 4));
    texture.dispose(&gl);
}

#[test]
fn from_image_checks_the_original_extent() {
    // the image check is against the unpadded extent, so 3 fails here
    let gl = SoftGl::new();
    let err = Texture::from_image(&gl, &red_image(3, 8), Filter::Nearest).unwrap_err();
    assert!(matches!(err, TextureError::InvalidSize { width: 3, height: 8 }));
}

#[test]
fn filter_is_applied_to_both_sampling_modes() {
    let gl = SoftGl::new();
    let nearest = Texture::new(&gl, 8, 8, Filter::Nearest).unwrap();
    let linear = Texture::new(&gl, 8, 8, Filter::Linear).unwrap();
    assert_eq!(
        gl.filter_of(nearest.native().unwrap()),
        Some((Filter::Nearest, Filter::Nearest))
    );
    assert_eq!(
        gl.filter_of(linear.native().unwrap()),
        Some((Filter::Linear, Filter::Linear))
    );
}

#[test]
fn sequential_creations_get_distinct_handles_and_lifetimes() {
    let gl = SoftGl::new();
    let mut first = Texture::new(&gl, 4, 4, Filter::Nearest).unwrap();
    let second = Texture::new(&gl, 4, 4, Filter::Nearest).unwrap();
    assert_ne!(first.native(), second.native());

    let payload: Vec<u8> = (0..4 * 4 * 4).map(|i| i as u8).collect();
    second.replace_pixels(&gl, &payload).unwrap();

    let second_native = second.native().unwrap();
    first.dispose(&gl);
    assert!(gl.is_live(second_native));
    assert_eq!(second.pixels(&gl).unwrap(), payload);
}

#[test]
fn reads_after_dispose_are_a_defined_error() {
    let gl = SoftGl::new();
    let mut texture = Texture::new(&gl, 8, 8, Filter::Linear).unwrap();
    texture.dispose(&gl);
    assert_eq!(texture.native(), None);
    assert!(matches!(
        texture.pixels(&gl),
        Err(TextureError::Disposed)
    ));
    assert!(matches!(
        texture.replace_pixels(&gl, &[]),
        Err(TextureError::Disposed)
    ));
}

#[test]
fn disposing_twice_is_a_checkable_noop() {
    let gl = SoftGl::new();
    let mut texture = Texture::new(&gl, 8, 8, Filter::Linear).unwrap();
    let native = texture.native().unwrap();
    texture.dispose(&gl);
    texture.dispose(&gl);
    assert!(!gl.is_live(native));
}

#[test]
fn bind_point_is_cleared_after_every_operation() {
    // a store call never leaves its own texture bound; callers relying on
    // a previous binding must re-bind afterward
    let gl = SoftGl::new();
    let texture = Texture::new(&gl, 8, 8, Filter::Nearest).unwrap();
    assert_eq!(gl.bound_texture(), None);

    let from_image = Texture::from_image(&gl, &red_image(8, 8), Filter::Nearest).unwrap();
    assert_eq!(gl.bound_texture(), None);

    texture.pixels(&gl).unwrap();
    assert_eq!(gl.bound_texture(), None);

    let payload = vec![0u8; 4 * 8 * 8];
    from_image.replace_pixels(&gl, &payload).unwrap();
    assert_eq!(gl.bound_texture(), None);
}

#[test]
fn name_exhaustion_surfaces_as_allocation_failure() {
    let gl = SoftGl::new();
    gl.exhaust_names();
    assert!(matches!(
        Texture::new(&gl, 8, 8, Filter::Nearest),
        Err(TextureError::ResourceAllocationFailed)
    ));
    assert!(matches!(
        Texture::from_image(&gl, &red_image(8, 8), Filter::Nearest),
        Err(TextureError::ResourceAllocationFailed)
    ));
}
