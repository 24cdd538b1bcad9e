//! Viewer for Whitaker level sets.

use std::path::PathBuf;

use glam::Vec3;
use levelviz_core::{extract_contours, generate_values, ViewerOptions};
use levelviz_render::{ColorMap, ContourActor, ImageActor, ScalarBarActor, Scene};
use levelviz_structures::{ScalarImage, WhitakerLevelSet};

use super::deliver;
use crate::convert::{ImageToRgbConverter, WhitakerToBufferConverter};
use crate::error::Result;

/// Renders a grayscale image with iso-contours of a Whitaker level set.
///
/// The level set is rasterized to a dense field when it is supplied and
/// contoured on every `update` at `number_of_levels` values spread evenly
/// over `[-level_limit, +level_limit]`, colored by the rainbow map over
/// that range. The scalar-bar legend is on by default.
#[derive(Debug)]
pub struct WhitakerLayerViewer {
    image_converter: ImageToRgbConverter,
    level_set_converter: WhitakerToBufferConverter,
    options: ViewerOptions,
    frame_count: u64,
}

impl Default for WhitakerLayerViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl WhitakerLayerViewer {
    #[must_use]
    pub fn new() -> Self {
        let _ = env_logger::try_init();
        Self {
            image_converter: ImageToRgbConverter::new(),
            level_set_converter: WhitakerToBufferConverter::new(),
            options: ViewerOptions {
                show_scalar_bar: true,
                interpolate: true,
                ..ViewerOptions::default()
            },
            frame_count: 0,
        }
    }

    /// Converts and caches the base image; resets the capture counter.
    ///
    /// A failed conversion is logged and the viewer keeps its previous
    /// image, level set, and counter.
    pub fn set_input_image(&mut self, image: &ScalarImage) {
        match self.image_converter.set_input(image) {
            Ok(()) => self.frame_count = 0,
            Err(err) => log::error!("input image conversion failed: {err}"),
        }
    }

    /// Rasterizes the level set to a dense field and caches it.
    ///
    /// Batch loops call this before every `update` as the evolution
    /// advances; the capture counter is not touched. A failed conversion
    /// is logged and the previous field is kept.
    pub fn set_level_set(&mut self, level_set: &WhitakerLevelSet) {
        if let Err(err) = self.level_set_converter.set_input(level_set) {
            log::error!("level set conversion failed: {err}");
        }
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

    /// Number of contour iso-values. Zero is ignored; the previous value
    /// is kept.
    pub fn set_number_of_levels(&mut self, levels: u32) {
        if levels > 0 {
            self.options.number_of_levels = levels;
        } else {
            log::debug!("ignoring number_of_levels = 0");
        }
    }

    /// Half-width of the contoured value range. Zero, negative, and NaN
    /// are ignored; the previous value is kept.
    pub fn set_level_limit(&mut self, limit: f32) {
        if limit > 0.0 {
            self.options.level_limit = limit;
        } else {
            log::debug!("ignoring level_limit = {limit}");
        }
    }

    /// Overlays the color-map legend (default on).
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

    /// Renders one frame: the cached image overlaid with the level-set
    /// contours and, optionally, the legend.
    ///
    /// Skips the frame with a warning when an input is missing; returns
    /// `Err` only for compositing, I/O, and windowing failures.
    pub fn update(&mut self) -> Result<()> {
        let Some(base) = self.image_converter.output() else {
            log::warn!("no input image, skipping frame");
            return Ok(());
        };
        let Some(field) = self.level_set_converter.output() else {
            log::warn!("no level set, skipping frame");
            return Ok(());
        };

        let limit = self.options.level_limit;
        let values = generate_values(self.options.number_of_levels, -limit, limit);
        let mut contours = Vec::new();
        for value in values {
            contours.extend(extract_contours(
                &field.data,
                value,
                field.extent.width,
                field.extent.height,
            ));
        }

        let mut scene = Scene::new(
            self.options.background_color,
            ImageActor {
                buffer: base.clone(),
                interpolate: self.options.interpolate,
            },
        );
        scene.contours = Some(ContourActor {
            contours,
            spacing: field.spacing,
            line_width: self.options.line_width,
            color: Vec3::new(1.0, 0.0, 0.0),
            scalar_range: Some((-limit, limit)),
            color_map: ColorMap::rainbow(),
        });
        if self.options.show_scalar_bar {
            scene.scalar_bar = Some(ScalarBarActor {
                color_map: ColorMap::rainbow(),
                range: (-limit, limit),
                number_of_labels: self.options.number_of_levels,
                title: String::from("Level Set Values"),
            });
        }

        deliver(&scene, &self.options, &mut self.frame_count)
    }
}
