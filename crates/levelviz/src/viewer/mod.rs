//! Visualization drivers, one per level-set representation.
//!
//! A driver owns its converters, options, and capture counter outright;
//! image and level-set inputs are borrowed per call and converted into
//! owned state on the spot, so no caller data is ever referenced after a
//! setter returns. [`MalcolmLayerViewer::update`] and
//! [`WhitakerLayerViewer::update`] render one frame each: a
//! `snapshot_<N>.png` in capture mode, or an interactive window that
//! blocks until closed.

mod malcolm;
mod whitaker;

pub use malcolm::MalcolmLayerViewer;
pub use whitaker::WhitakerLayerViewer;

use levelviz_core::ViewerOptions;
use levelviz_render::{capture, render_scene, window, Scene};

use crate::error::Result;

/// Composites `scene` and delivers the frame per the capture flag.
///
/// In capture mode the counter names the snapshot and advances only after
/// a successful write.
fn deliver(scene: &Scene, options: &ViewerOptions, frame_count: &mut u64) -> Result<()> {
    let frame = render_scene(scene, options.window_scale)?;
    if options.screen_capture {
        let path = capture::snapshot_path(&options.output_directory, *frame_count);
        capture::save_png(&frame, &path)?;
        *frame_count += 1;
        log::info!("captured {}", path.display());
    } else {
        window::present(&frame, &options.window_title)?;
    }
    Ok(())
}
