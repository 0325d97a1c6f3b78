// Host-side tests for catalog construction and swatch generation.

use board_core::{
    fallback_color, swatch, Catalog, CatalogError, CatalogSource, PlaneImage, SWATCH_HEIGHT,
    SWATCH_WIDTH,
};

#[test]
fn build_is_deterministic_for_a_seed() {
    let a = Catalog::build(&CatalogSource::Generated, 20, 42).unwrap();
    let b = Catalog::build(&CatalogSource::Generated, 20, 42).unwrap();
    for (pa, pb) in a.planes.iter().zip(b.planes.iter()) {
        assert_eq!(pa.position, pb.position);
        assert_eq!(pa.rotation, pb.rotation);
        assert_eq!(pa.scale, pb.scale);
    }

    let c = Catalog::build(&CatalogSource::Generated, 20, 43).unwrap();
    let any_differs = a
        .planes
        .iter()
        .zip(c.planes.iter())
        .any(|(pa, pc)| pa.position != pc.position);
    assert!(any_differs, "different seeds should place differently");
}

#[test]
fn empty_catalog_is_rejected() {
    assert!(matches!(
        Catalog::build(&CatalogSource::Generated, 0, 1),
        Err(CatalogError::Empty)
    ));
}

#[test]
fn remote_template_substitutes_every_index() {
    let source = CatalogSource::Remote {
        template: "https://example.com/img/{index}.jpg".into(),
    };
    let catalog = Catalog::build(&source, 5, 1).unwrap();
    for (i, plane) in catalog.planes.iter().enumerate() {
        match &plane.image {
            PlaneImage::Remote(url) => {
                assert_eq!(url, &format!("https://example.com/img/{i}.jpg"))
            }
            PlaneImage::Swatch(_) => panic!("remote source produced a swatch"),
        }
    }
}

#[test]
fn remote_template_without_placeholder_is_rejected() {
    let source = CatalogSource::Remote {
        template: "https://example.com/static.jpg".into(),
    };
    assert!(matches!(
        Catalog::build(&source, 5, 1),
        Err(CatalogError::BadTemplate(_))
    ));
}

#[test]
fn swatch_has_expected_size_and_vertical_alpha_gradient() {
    let img = swatch(SWATCH_WIDTH, SWATCH_HEIGHT, [200, 80, 40], "IMAGE 0");
    assert_eq!(img.pixels.len(), (SWATCH_WIDTH * SWATCH_HEIGHT * 4) as usize);

    // corners are label-free: base colour at full alpha on the top row,
    // reduced alpha on the bottom row
    let top = &img.pixels[0..4];
    assert_eq!(&top[0..3], &[200, 80, 40]);
    assert_eq!(top[3], 255);

    let bottom_start = ((SWATCH_HEIGHT - 1) * SWATCH_WIDTH * 4) as usize;
    let bottom = &img.pixels[bottom_start..bottom_start + 4];
    assert_eq!(&bottom[0..3], &[200, 80, 40]);
    assert!(bottom[3] < top[3]);
}

#[test]
fn swatch_label_pixels_are_drawn() {
    let plain = swatch(SWATCH_WIDTH, SWATCH_HEIGHT, [10, 10, 10], "");
    let labeled = swatch(SWATCH_WIDTH, SWATCH_HEIGHT, [10, 10, 10], "IMAGE 7");
    assert_ne!(plain.pixels, labeled.pixels);
}

#[test]
fn fallback_color_depends_only_on_index() {
    assert_eq!(fallback_color(4), fallback_color(4));
    assert_ne!(fallback_color(4), fallback_color(5));
    for i in 0..64 {
        for ch in fallback_color(i) {
            assert!((0.0..=1.0).contains(&ch));
        }
    }
}
