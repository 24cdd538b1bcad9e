//! Viewer for Malcolm level sets.

use std::path::PathBuf;

use glam::Vec3;
use levelviz_core::ViewerOptions;
use levelviz_render::{ColorMap, ImageActor, ScalarBarActor, Scene};
use levelviz_structures::{MalcolmLevelSet, ScalarImage};

use super::deliver;
use crate::convert::{paint_zero_layer, ImageToRgbConverter};
use crate::error::Result;

/// Renders a grayscale image with the Malcolm zero layer painted red.
///
/// Typical batch use: set the image once, then alternate `set_level_set`
/// and `update` as the evolution advances.
#[derive(Debug)]
pub struct MalcolmLayerViewer {
    converter: ImageToRgbConverter,
    level_set: Option<MalcolmLevelSet>,
    options: ViewerOptions,
    frame_count: u64,
}

impl Default for MalcolmLayerViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl MalcolmLayerViewer {
    #[must_use]
    pub fn new() -> Self {
        let _ = env_logger::try_init();
        Self {
            converter: ImageToRgbConverter::new(),
            level_set: None,
            options: ViewerOptions::default(),
            frame_count: 0,
        }
    }

    /// Converts and caches the base image; resets the capture counter.
    ///
    /// A failed conversion is logged and the viewer keeps its previous
    /// image, level set, and counter.
    pub fn set_input_image(&mut self, image: &ScalarImage) {
        match self.converter.set_input(image) {
            Ok(()) => self.frame_count = 0,
            Err(err) => log::error!("input image conversion failed: {err}"),
        }
    }

    /// Copies the zero layer out of `level_set`.
    ///
    /// Batch loops call this before every `update` as the evolution
    /// advances; the capture counter is not touched.
    pub fn set_level_set(&mut self, level_set: &MalcolmLevelSet) {
        self.level_set = Some(level_set.clone());
    }

    /// Capture to `snapshot_<N>.png` instead of opening a window.
    pub fn set_screen_capture(&mut self, capture: bool) {
        self.options.screen_capture = capture;
    }

    /// Directory snapshots are written to (default: the working
    /// directory).
    pub fn set_output_directory(&mut self, dir: impl Into<PathBuf>) {
        self.options.output_directory = dir.into();
    }

    /// Overlays a single-entry legend for the zero layer (default off).
    pub fn set_show_scalar_bar(&mut self, show: bool) {
        self.options.show_scalar_bar = show;
    }

    /// Title of the interactive window.
    pub fn set_window_title(&mut self, title: impl Into<String>) {
        self.options.window_title = title.into();
    }

    /// Canvas pixels per image cell; non-positive values are ignored.
    pub fn set_window_scale(&mut self, scale: f32) {
        if scale > 0.0 {
            self.options.window_scale = scale;
        } else {
            log::debug!("ignoring window_scale = {scale}");
        }
    }

    /// Read access to the current configuration.
    #[must_use]
    pub fn options(&self) -> &ViewerOptions {
        &self.options
    }

    /// Renders one frame: the cached image with the zero layer painted
    /// red.
    ///
    /// Skips the frame with a warning when an input is missing; returns
    /// `Err` only for compositing, I/O, and windowing failures.
    pub fn update(&mut self) -> Result<()> {
        let Some(base) = self.converter.output() else {
            log::warn!("no input image, skipping frame");
            return Ok(());
        };
        let Some(level_set) = &self.level_set else {
            log::warn!("no level set, skipping frame");
            return Ok(());
        };

        // Paint a fresh copy; the cached base stays pristine for the
        // next frame
        let mut buffer = base.clone();
        paint_zero_layer(&mut buffer, level_set);

        let mut scene = Scene::new(
            self.options.background_color,
            ImageActor {
                buffer,
                interpolate: self.options.interpolate,
            },
        );
        if self.options.show_scalar_bar {
            scene.scalar_bar = Some(ScalarBarActor {
                color_map: ColorMap::new("zero layer", vec![Vec3::new(1.0, 0.0, 0.0)]),
                range: (0.0, 0.0),
                number_of_labels: 1,
                title: String::from("Layers"),
            });
        }

        deliver(&scene, &self.options, &mut self.frame_count)
    }
}
