//! Configuration options for the layer viewers.

use std::path::PathBuf;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Per-viewer configuration.
///
/// Owned by each viewer instance; there is no global options object.
/// The level knobs (`number_of_levels`, `level_limit`) only affect the
/// Whitaker viewer, which contours its level set at iso-values spread
/// over `[-level_limit, +level_limit]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerOptions {
    /// Write `snapshot_<N>.png` files instead of opening a window.
    pub screen_capture: bool,

    /// Number of contour iso-values (always >= 1).
    pub number_of_levels: u32,

    /// Half-width of the contoured value range (always >= 0).
    pub level_limit: f32,

    /// Directory captured snapshots are written to.
    pub output_directory: PathBuf,

    /// Whether to overlay the scalar-bar legend.
    pub show_scalar_bar: bool,

    /// Bilinear filtering when scaling the base image onto the canvas.
    pub interpolate: bool,

    /// Renderer background color.
    pub background_color: Vec3,

    /// Contour stroke width in canvas pixels.
    pub line_width: f32,

    /// Canvas pixels per image cell.
    pub window_scale: f32,

    /// Title of the interactive window.
    pub window_title: String,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            screen_capture: false,
            number_of_levels: 1,
            level_limit: 0.0,
            output_directory: PathBuf::from("."),
            show_scalar_bar: false,
            interpolate: false,
            background_color: Vec3::new(0.5, 0.5, 0.5),
            line_width: 2.0,
            window_scale: 4.0,
            window_title: String::from("Level Set Layers"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let opts = ViewerOptions::default();
        assert!(!opts.screen_capture);
        assert_eq!(opts.number_of_levels, 1);
        assert_eq!(opts.level_limit, 0.0);
        assert_eq!(opts.output_directory, PathBuf::from("."));
        assert_eq!(opts.background_color, Vec3::new(0.5, 0.5, 0.5));
        assert_eq!(opts.line_width, 2.0);
    }
}
