use easel::export;
use easel::state::BACKGROUND;
use easel::surface::{PixelSurface, Surface};
use egui::{Color32, pos2};

#[test]
fn clear_then_export_has_no_transparent_pixels() {
    let mut surface = PixelSurface::new(32, 24, BACKGROUND);
    surface.stroke_polyline(
        &[pos2(4.0, 4.0), pos2(28.0, 20.0)],
        Color32::BLACK,
        3.0,
    );
    surface.fill(BACKGROUND);

    let path = std::env::temp_dir().join(format!("easel-export-test-{}.jpg", std::process::id()));
    export::save_jpeg(&surface, &path).unwrap();

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (32, 24));
    assert!(decoded.pixels().all(|p| p.0[3] == 255));

    std::fs::remove_file(&path).ok();
}

#[test]
fn default_filename_is_timestamped_jpg() {
    let name = export::default_filename();
    let stem = name.strip_suffix(".jpg").expect("jpg extension");
    let millis: u64 = stem.parse().expect("numeric timestamp");
    // Sanity: epoch millis for any date after 2020.
    assert!(millis > 1_577_836_800_000);
}
