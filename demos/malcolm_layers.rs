#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
//! Capture a Malcolm level-set evolution as numbered snapshots.
//!
//! Run with: cargo run --example malcolm_layers
//!
//! Outputs snapshot_<N>.png files to demo_output/malcolm

use levelviz::{GridExtent, MalcolmLayerViewer, MalcolmLevelSet, ScalarImage};

const WIDTH: u32 = 96;
const HEIGHT: u32 = 96;
const FRAMES: u32 = 50;
const OUT_DIR: &str = "demo_output/malcolm";

/// Two soft blobs to segment against.
fn synthetic_image(extent: GridExtent) -> ScalarImage {
    ScalarImage::from_fn(extent, |x, y| {
        let fx = x as f32;
        let fy = y as f32;
        let blob = |cx: f32, cy: f32, r: f32| {
            let d = (fx - cx).hypot(fy - cy);
            (1.0 - (d / r).min(1.0)) * 255.0
        };
        blob(36.0, 40.0, 30.0).max(blob(64.0, 58.0, 24.0))
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

fn main() {
    env_logger::init();
    std::fs::create_dir_all(OUT_DIR).expect("Failed to create output directory");

    let extent = GridExtent::new(WIDTH, HEIGHT);
    let mut viewer = MalcolmLayerViewer::new();
    viewer.set_screen_capture(true);
    viewer.set_output_directory(OUT_DIR);
    viewer.set_input_image(&synthetic_image(extent));

    // A front sweeping outward from the image center
    for frame in 0..FRAMES {
        let radius = 6.0 + frame as f32 * 0.6;
        let mask = disk_mask(extent, 48.0, 48.0, radius);
        let level_set = MalcolmLevelSet::from_mask(extent, &mask).expect("mask size matches");
        viewer.set_level_set(&level_set);
        viewer.update().expect("capture failed");
    }

    println!("Done! {FRAMES} snapshots saved to {OUT_DIR}/");
}
