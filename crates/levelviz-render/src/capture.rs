//! PNG capture of composited frames.

use std::path::{Path, PathBuf};

use image::{ImageBuffer, Rgba};
use tiny_skia::Pixmap;

use crate::error::{RenderError, Result};

/// The filename for capture number `n`: `snapshot_<n>.png`.
#[must_use]
pub fn snapshot_path(dir: &Path, n: u64) -> PathBuf {
    dir.join(format!("snapshot_{n}.png"))
}

/// Writes a composited frame as a PNG file.
pub fn save_png(frame: &Pixmap, path: &Path) -> Result<()> {
    let width = frame.width();
    let height = frame.height();

    // Straight-alpha RGBA; the compositor only produces opaque pixels
    let mut rgba = Vec::with_capacity(frame.data().len());
    for px in frame.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_raw(width, height, rgba)
        .ok_or(RenderError::InvalidFrameData { width, height })?;
    img.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}
