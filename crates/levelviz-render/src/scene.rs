//! Scene actors assembled by the viewers.
//!
//! A scene is one frame's worth of renderable state: the base image, the
//! optional contour overlay, and the optional scalar-bar legend. Scenes are
//! built per rendering pass and discarded after compositing.

use glam::{Vec2, Vec3};
use levelviz_core::marching_squares::Contour;

use crate::buffer::RgbBuffer;
use crate::color_map::ColorMap;

/// The base image, drawn scaled to the canvas.
#[derive(Debug, Clone)]
pub struct ImageActor {
    pub buffer: RgbBuffer,
    /// Bilinear filtering when scaling; nearest-neighbor otherwise.
    pub interpolate: bool,
}

/// Stroked iso-line overlay.
///
/// When `scalar_range` is present each contour is colored by sampling
/// `color_map` at its normalized iso-value, overriding the flat `color`;
/// this mirrors the precedence of scalar-mapped geometry over actor color
/// in the classic visualization pipelines.
#[derive(Debug, Clone)]
pub struct ContourActor {
    /// Polylines in grid-index space of the raster they were extracted from.
    pub contours: Vec<Contour>,
    /// Grid-to-world scale of that raster.
    pub spacing: Vec2,
    pub line_width: f32,
    pub color: Vec3,
    pub scalar_range: Option<(f32, f32)>,
    pub color_map: ColorMap,
}

impl ContourActor {
    /// The stroke color for one contour value.
    #[must_use]
    pub fn contour_color(&self, value: f32) -> Vec3 {
        match self.scalar_range {
            Some((lo, hi)) if hi - lo > f32::EPSILON => {
                self.color_map.sample((value - lo) / (hi - lo))
            }
            // Degenerate range: a single color for every contour
            Some(_) => self.color_map.sample(0.5),
            None => self.color,
        }
    }
}

/// Color-map legend drawn along the right edge of the canvas.
///
/// Rendered as a vertical gradient swatch (maximum at the top) with one
/// tick line per label. The title and label values are carried as data but
/// not rasterized; no text rendering is involved.
#[derive(Debug, Clone)]
pub struct ScalarBarActor {
    pub color_map: ColorMap,
    pub range: (f32, f32),
    pub number_of_labels: u32,
    pub title: String,
}

/// One frame's renderable state.
#[derive(Debug, Clone)]
pub struct Scene {
    pub background: Vec3,
    pub image: ImageActor,
    pub contours: Option<ContourActor>,
    pub scalar_bar: Option<ScalarBarActor>,
}

impl Scene {
    /// Creates a scene with only the base image.
    pub fn new(background: Vec3, image: ImageActor) -> Self {
        Self {
            background,
            image,
            contours: None,
            scalar_bar: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(scalar_range: Option<(f32, f32)>) -> ContourActor {
        ContourActor {
            contours: Vec::new(),
            spacing: Vec2::ONE,
            line_width: 2.0,
            color: Vec3::new(1.0, 0.0, 0.0),
            scalar_range,
            color_map: ColorMap::rainbow(),
        }
    }

    #[test]
    fn flat_color_without_scalar_range() {
        let a = actor(None);
        assert_eq!(a.contour_color(0.7), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn scalar_range_overrides_flat_color() {
        let a = actor(Some((-2.0, 2.0)));
        assert_eq!(a.contour_color(-2.0), a.color_map.sample(0.0));
        assert_eq!(a.contour_color(2.0), a.color_map.sample(1.0));
        assert_eq!(a.contour_color(0.0), a.color_map.sample(0.5));
    }

    #[test]
    fn degenerate_range_samples_map_midpoint() {
        let a = actor(Some((0.0, 0.0)));
        assert_eq!(a.contour_color(0.0), a.color_map.sample(0.5));
        assert_eq!(a.contour_color(123.0), a.color_map.sample(0.5));
    }
}
