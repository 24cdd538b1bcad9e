#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
//! Capture a Whitaker level-set evolution with contours and a legend.
//!
//! Run with: cargo run --example whitaker_layers
//!
//! Outputs snapshot_<N>.png files to demo_output/whitaker

use levelviz::{GridExtent, ScalarImage, WhitakerLayerViewer, WhitakerLevelSet};

const WIDTH: u32 = 96;
const HEIGHT: u32 = 96;
const FRAMES: u32 = 50;
const OUT_DIR: &str = "demo_output/whitaker";

/// A diagonal ramp with a bright plateau in the middle.
fn synthetic_image(extent: GridExtent) -> ScalarImage {
    ScalarImage::from_fn(extent, |x, y| {
        let ramp = (x + y) as f32 * 255.0 / (WIDTH + HEIGHT - 2) as f32;
        let d = (x as f32 - 48.0).hypot(y as f32 - 48.0);
        if d < 20.0 {
            ramp.max(200.0)
        } else {
            ramp
        }
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
    let mut viewer = WhitakerLayerViewer::new();
    viewer.set_screen_capture(true);
    viewer.set_output_directory(OUT_DIR);
    viewer.set_number_of_levels(5);
    viewer.set_level_limit(2.5);
    viewer.set_input_image(&synthetic_image(extent));

    // The region drifts diagonally while breathing
    for frame in 0..FRAMES {
        let t = frame as f32 / FRAMES as f32;
        let cx = 32.0 + 32.0 * t;
        let cy = 36.0 + 24.0 * t;
        let radius = 14.0 + 5.0 * (t * std::f32::consts::TAU).sin();
        let mask = disk_mask(extent, cx, cy, radius);
        let level_set = WhitakerLevelSet::from_mask(extent, &mask).expect("mask size matches");
        viewer.set_level_set(&level_set);
        viewer.update().expect("capture failed");
    }

    println!("Done! {FRAMES} snapshots saved to {OUT_DIR}/");
}
