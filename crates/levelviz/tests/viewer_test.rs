//! End-to-end tests for the viewer capture pipeline.
//!
//! Every test drives a viewer in capture mode against its own temp
//! directory and inspects the written PNGs. Window-mode tests need a
//! display and are marked #[ignore]; run them manually with
//! `cargo test -- --ignored`.

use std::path::{Path, PathBuf};

use levelviz::*;

/// A fresh per-test output directory.
fn capture_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("levelviz-{}-{}", tag, std::process::id()));
    // Snapshots from an earlier run would alias the counting assertions
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn snapshot_count(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(std::result::Result::ok)
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.starts_with("snapshot_") && name.ends_with(".png")
        })
        .count()
}

/// Horizontal ramp from 0 at the left edge to 255 at the right.
fn gradient_image(extent: GridExtent) -> ScalarImage {
    ScalarImage::from_fn(extent, |x, _| {
        x as f32 * 255.0 / (extent.width - 1) as f32
    })
}

fn disk_mask(extent: GridExtent, cx: f32, cy: f32, radius: f32) -> Vec<bool> {
    let mut mask = vec![false; extent.len()];
    for y in 0..extent.height {
        for x in 0..extent.width {
            if (x as f32 - cx).hypot(y as f32 - cy) < radius {
                mask[(y * extent.width + x) as usize] = true;
            }
        }
    }
    mask
}

fn has_non_gray_pixel(img: &image::RgbaImage) -> bool {
    img.pixels()
        .any(|p| !(p.0[0] == p.0[1] && p.0[1] == p.0[2]))
}

#[test]
fn malcolm_captures_numbered_snapshots() {
    let dir = capture_dir("malcolm-capture");
    let extent = GridExtent::new(16, 16);

    let mut viewer = MalcolmLayerViewer::new();
    viewer.set_screen_capture(true);
    viewer.set_output_directory(&dir);
    viewer.set_window_scale(1.0);
    viewer.set_input_image(&gradient_image(extent));

    // A growing disk, one capture per step
    for radius in [3.5, 4.5, 5.5] {
        let mask = disk_mask(extent, 8.0, 8.0, radius);
        let level_set = MalcolmLevelSet::from_mask(extent, &mask).unwrap();
        viewer.set_level_set(&level_set);
        viewer.update().unwrap();
    }

    assert_eq!(snapshot_count(&dir), 3);
    for n in 0..3 {
        let img = image::open(dir.join(format!("snapshot_{n}.png")))
            .unwrap()
            .to_rgba8();
        assert_eq!(img.dimensions(), (16, 16));
    }

    // Second frame (radius 4.5): (8, 4) sits on the zero layer, the disk
    // center keeps its gray ramp value, the far corner is ramp zero
    let img = image::open(dir.join("snapshot_1.png")).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(8, 4).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(8, 8).0, [136, 136, 136, 255]);
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
}

#[test]
fn malcolm_failed_image_keeps_state_and_counter() {
    let dir = capture_dir("malcolm-failed-image");
    let extent = GridExtent::new(12, 12);

    let mut viewer = MalcolmLayerViewer::new();
    viewer.set_screen_capture(true);
    viewer.set_output_directory(&dir);
    viewer.set_window_scale(1.0);
    viewer.set_input_image(&gradient_image(extent));
    let mask = disk_mask(extent, 6.0, 6.0, 3.5);
    viewer.set_level_set(&MalcolmLevelSet::from_mask(extent, &mask).unwrap());
    viewer.update().unwrap();

    // A zero-area image fails conversion; the cached image and the
    // counter both survive, so the next capture continues the sequence
    viewer.set_input_image(&ScalarImage::new(GridExtent::new(0, 0), 0.0));
    viewer.update().unwrap();

    assert_eq!(snapshot_count(&dir), 2);
    let a = image::open(dir.join("snapshot_0.png")).unwrap().to_rgba8();
    let b = image::open(dir.join("snapshot_1.png")).unwrap().to_rgba8();
    assert_eq!(a.as_raw(), b.as_raw());

    // A valid image starts a fresh sequence at snapshot_0
    viewer.set_input_image(&gradient_image(extent));
    viewer.set_level_set(&MalcolmLevelSet::from_mask(extent, &mask).unwrap());
    viewer.update().unwrap();
    assert_eq!(snapshot_count(&dir), 2);
}

#[test]
fn update_without_inputs_skips_the_frame() {
    let dir = capture_dir("skip");

    let mut viewer = MalcolmLayerViewer::new();
    viewer.set_screen_capture(true);
    viewer.set_output_directory(&dir);
    viewer.update().unwrap();

    // An image alone is still not enough
    viewer.set_input_image(&gradient_image(GridExtent::new(8, 8)));
    viewer.update().unwrap();

    assert_eq!(snapshot_count(&dir), 0);
}

#[test]
fn whitaker_contours_show_up_in_captures() {
    let dir = capture_dir("whitaker-contours");
    let extent = GridExtent::new(32, 32);

    let mut viewer = WhitakerLayerViewer::new();
    viewer.set_screen_capture(true);
    viewer.set_output_directory(&dir);
    viewer.set_show_scalar_bar(false);
    viewer.set_number_of_levels(5);
    viewer.set_level_limit(2.5);
    viewer.set_input_image(&ScalarImage::new(extent, 100.0));

    let mask = disk_mask(extent, 16.0, 16.0, 8.5);
    viewer.set_level_set(&WhitakerLevelSet::from_mask(extent, &mask).unwrap());
    viewer.update().unwrap();

    let img = image::open(dir.join("snapshot_0.png")).unwrap().to_rgba8();
    // Default scale of 4 canvas pixels per cell
    assert_eq!(img.dimensions(), (128, 128));
    // The base image is uniform gray; any colored pixel is a contour
    assert!(has_non_gray_pixel(&img));
}

#[test]
fn whitaker_scalar_bar_overlays_the_right_edge() {
    let dir = capture_dir("whitaker-bar");
    let extent = GridExtent::new(32, 32);

    let mut viewer = WhitakerLayerViewer::new();
    viewer.set_screen_capture(true);
    viewer.set_output_directory(&dir);
    viewer.set_number_of_levels(5);
    viewer.set_level_limit(2.5);
    viewer.set_input_image(&ScalarImage::new(extent, 100.0));
    let mask = disk_mask(extent, 16.0, 16.0, 8.5);
    viewer.set_level_set(&WhitakerLevelSet::from_mask(extent, &mask).unwrap());
    viewer.update().unwrap();

    // The legend is on by default and sits in the right tenth of the
    // canvas, well clear of the disk contours
    let img = image::open(dir.join("snapshot_0.png")).unwrap().to_rgba8();
    let colored_right_edge = (0..128u32)
        .flat_map(|y| (114..122u32).map(move |x| (x, y)))
        .any(|(x, y)| {
            let p = img.get_pixel(x, y).0;
            !(p[0] == p[1] && p[1] == p[2])
        });
    assert!(colored_right_edge);
}

#[test]
fn whitaker_failed_level_set_keeps_previous_field() {
    let dir = capture_dir("whitaker-failed-ls");
    let extent = GridExtent::new(16, 16);

    let mut viewer = WhitakerLayerViewer::new();
    viewer.set_screen_capture(true);
    viewer.set_output_directory(&dir);
    viewer.set_show_scalar_bar(false);
    viewer.set_window_scale(2.0);
    viewer.set_number_of_levels(3);
    viewer.set_level_limit(2.0);
    viewer.set_input_image(&ScalarImage::new(extent, 128.0));
    let mask = disk_mask(extent, 8.0, 8.0, 4.5);
    viewer.set_level_set(&WhitakerLevelSet::from_mask(extent, &mask).unwrap());
    viewer.update().unwrap();

    // An empty level set fails conversion; the cached field carries the
    // next frame unchanged
    let empty = WhitakerLevelSet::from_mask(GridExtent::new(0, 0), &[]).unwrap();
    viewer.set_level_set(&empty);
    viewer.update().unwrap();

    assert_eq!(snapshot_count(&dir), 2);
    let a = image::open(dir.join("snapshot_0.png")).unwrap().to_rgba8();
    let b = image::open(dir.join("snapshot_1.png")).unwrap().to_rgba8();
    assert_eq!(a.as_raw(), b.as_raw());
}

#[test]
fn whitaker_level_knobs_ignore_invalid_values() {
    let mut viewer = WhitakerLayerViewer::new();
    assert_eq!(viewer.options().number_of_levels, 1);
    assert_eq!(viewer.options().level_limit, 0.0);

    viewer.set_number_of_levels(0);
    assert_eq!(viewer.options().number_of_levels, 1);
    viewer.set_number_of_levels(7);
    viewer.set_number_of_levels(0);
    assert_eq!(viewer.options().number_of_levels, 7);

    viewer.set_level_limit(-1.0);
    assert_eq!(viewer.options().level_limit, 0.0);
    viewer.set_level_limit(f32::NAN);
    assert_eq!(viewer.options().level_limit, 0.0);
    viewer.set_level_limit(2.5);
    viewer.set_level_limit(0.0);
    assert_eq!(viewer.options().level_limit, 2.5);

    viewer.set_window_scale(-2.0);
    assert_eq!(viewer.options().window_scale, 4.0);
}

#[test]
fn viewer_defaults_differ_by_kind() {
    let malcolm = MalcolmLayerViewer::new();
    assert!(!malcolm.options().show_scalar_bar);
    assert!(!malcolm.options().interpolate);

    let whitaker = WhitakerLayerViewer::new();
    assert!(whitaker.options().show_scalar_bar);
    assert!(whitaker.options().interpolate);
}

/// Needs a display; run manually with `cargo test -- --ignored`.
#[test]
#[ignore]
fn interactive_window_opens_and_blocks() {
    let extent = GridExtent::new(32, 32);
    let mut viewer = MalcolmLayerViewer::new();
    viewer.set_window_title("levelviz test window");
    viewer.set_input_image(&gradient_image(extent));
    let mask = disk_mask(extent, 16.0, 16.0, 8.5);
    viewer.set_level_set(&MalcolmLevelSet::from_mask(extent, &mask).unwrap());
    viewer.update().unwrap();
}
