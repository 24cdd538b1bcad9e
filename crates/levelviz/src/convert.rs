//! Adapters from imaging-side types to renderer-native buffers.
//!
//! Each converter caches its most recent output. The viewers run
//! `set_input` when an input changes and borrow or take the cached buffer
//! while assembling a scene. A failed conversion leaves the cache
//! untouched, so the viewer keeps rendering its previous inputs.

use glam::IVec2;
use levelviz_core::CoreError;
use levelviz_render::{RgbBuffer, ScalarBuffer};
use levelviz_structures::{
    LayerId, MalcolmLevelSet, ScalarImage, WhitakerLevelSet, INSIDE_FILL, OUTSIDE_FILL,
};

use crate::error::Result;

/// The marker color painted over zero-layer pixels.
pub const ZERO_LAYER_COLOR: [u8; 3] = [255, 0, 0];

/// Converts a scalar image to a grayscale RGB buffer.
///
/// Each value is clamped to `0..=255`, cast to a byte, and triplicated
/// across the three channels. Spacing and origin carry over unchanged.
#[derive(Debug, Default)]
pub struct ImageToRgbConverter {
    output: Option<RgbBuffer>,
}

impl ImageToRgbConverter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts `image` and replaces the cached output.
    ///
    /// An empty extent fails the conversion; the cache keeps its previous
    /// contents.
    pub fn set_input(&mut self, image: &ScalarImage) -> Result<()> {
        let extent = image.extent();
        if extent.is_empty() {
            return Err(CoreError::EmptyExtent {
                width: extent.width,
                height: extent.height,
            }
            .into());
        }

        let mut buffer = RgbBuffer::new(extent, [0; 3]);
        buffer.spacing = image.spacing();
        buffer.origin = image.origin();
        for (i, value) in image.data().iter().enumerate() {
            let level = value.clamp(0.0, 255.0) as u8;
            buffer.data[i * 3..i * 3 + 3].copy_from_slice(&[level; 3]);
        }
        self.output = Some(buffer);
        Ok(())
    }

    /// Borrows the cached output, if any conversion has succeeded.
    #[must_use]
    pub fn output(&self) -> Option<&RgbBuffer> {
        self.output.as_ref()
    }

    /// Moves the cached output out of the converter.
    pub fn take_output(&mut self) -> Option<RgbBuffer> {
        self.output.take()
    }
}

/// Copies a scalar image into a renderer-native scalar buffer.
#[derive(Debug, Default)]
pub struct ImageToScalarConverter {
    output: Option<ScalarBuffer>,
}

impl ImageToScalarConverter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, image: &ScalarImage) -> Result<()> {
        let extent = image.extent();
        if extent.is_empty() {
            return Err(CoreError::EmptyExtent {
                width: extent.width,
                height: extent.height,
            }
            .into());
        }

        let mut buffer = ScalarBuffer::new(extent, 0.0);
        buffer.spacing = image.spacing();
        buffer.origin = image.origin();
        buffer.data.copy_from_slice(image.data());
        self.output = Some(buffer);
        Ok(())
    }

    #[must_use]
    pub fn output(&self) -> Option<&ScalarBuffer> {
        self.output.as_ref()
    }

    pub fn take_output(&mut self) -> Option<ScalarBuffer> {
        self.output.take()
    }
}

/// Rasterizes a Whitaker level set into a dense scalar buffer suitable
/// for contour extraction.
#[derive(Debug, Default)]
pub struct WhitakerToBufferConverter {
    output: Option<ScalarBuffer>,
}

impl WhitakerToBufferConverter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rasterizes `level_set`: prefills every cell with the off-band fill
    /// for its mask side, then splats the five layer maps. Layer indices
    /// are disjoint, so the maps' enumeration order does not matter.
    pub fn set_input(&mut self, level_set: &WhitakerLevelSet) -> Result<()> {
        let extent = level_set.extent();
        if extent.is_empty() {
            return Err(CoreError::EmptyExtent {
                width: extent.width,
                height: extent.height,
            }
            .into());
        }

        let mut buffer = ScalarBuffer::new(extent, OUTSIDE_FILL);
        for y in 0..extent.height {
            for x in 0..extent.width {
                if level_set.is_inside(IVec2::new(x as i32, y as i32)) {
                    buffer.set(x, y, INSIDE_FILL);
                }
            }
        }
        for id in LayerId::ALL {
            for (index, value) in level_set.layer(id) {
                buffer.set(index.x as u32, index.y as u32, *value);
            }
        }
        self.output = Some(buffer);
        Ok(())
    }

    #[must_use]
    pub fn output(&self) -> Option<&ScalarBuffer> {
        self.output.as_ref()
    }

    pub fn take_output(&mut self) -> Option<ScalarBuffer> {
        self.output.take()
    }
}

/// Recolors every zero-layer pixel of `buffer` to [`ZERO_LAYER_COLOR`].
///
/// No other pixel is modified. Indices outside the buffer's extent are
/// skipped with a warning.
pub fn paint_zero_layer(buffer: &mut RgbBuffer, level_set: &MalcolmLevelSet) {
    for index in level_set.zero_layer().keys() {
        if buffer.contains(*index) {
            buffer.set_rgb(index.x as u32, index.y as u32, ZERO_LAYER_COLOR);
        } else {
            log::warn!(
                "zero-layer index ({}, {}) outside the {}x{} image, skipping",
                index.x,
                index.y,
                buffer.extent.width,
                buffer.extent.height
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use levelviz_core::GridExtent;

    #[test]
    fn rgb_conversion_clamps_and_triplicates() {
        let image =
            ScalarImage::from_vec(GridExtent::new(2, 2), vec![-10.0, 0.5, 128.0, 300.0]).unwrap();
        let mut converter = ImageToRgbConverter::new();
        converter.set_input(&image).unwrap();
        let buffer = converter.output().unwrap();
        assert_eq!(buffer.rgb(0, 0), [0, 0, 0]);
        assert_eq!(buffer.rgb(1, 0), [0, 0, 0]);
        assert_eq!(buffer.rgb(0, 1), [128, 128, 128]);
        assert_eq!(buffer.rgb(1, 1), [255, 255, 255]);
    }

    #[test]
    fn rgb_conversion_carries_geometry() {
        let mut image = ScalarImage::new(GridExtent::new(3, 2), 0.0);
        image
            .set_spacing(Vec2::new(0.5, 2.0))
            .set_origin(Vec2::new(-1.0, 4.0));
        let mut converter = ImageToRgbConverter::new();
        converter.set_input(&image).unwrap();
        let buffer = converter.take_output().unwrap();
        assert_eq!(buffer.extent, GridExtent::new(3, 2));
        assert_eq!(buffer.spacing, Vec2::new(0.5, 2.0));
        assert_eq!(buffer.origin, Vec2::new(-1.0, 4.0));
        assert!(converter.output().is_none());
    }

    #[test]
    fn failed_conversion_keeps_the_cache() {
        let good = ScalarImage::new(GridExtent::new(2, 2), 42.0);
        let empty = ScalarImage::new(GridExtent::new(0, 0), 0.0);
        let mut converter = ImageToRgbConverter::new();
        converter.set_input(&good).unwrap();
        assert!(converter.set_input(&empty).is_err());
        let buffer = converter.output().unwrap();
        assert_eq!(buffer.extent, GridExtent::new(2, 2));
        assert_eq!(buffer.rgb(0, 0), [42, 42, 42]);
    }

    #[test]
    fn scalar_conversion_copies_values() {
        let image =
            ScalarImage::from_vec(GridExtent::new(2, 2), vec![1.0, -2.0, 3.5, 0.0]).unwrap();
        let mut converter = ImageToScalarConverter::new();
        converter.set_input(&image).unwrap();
        let buffer = converter.output().unwrap();
        assert_eq!(buffer.get(1, 0), -2.0);
        assert_eq!(buffer.get(0, 1), 3.5);
    }

    #[test]
    fn whitaker_rasterization_matches_evaluate() {
        let extent = GridExtent::new(9, 9);
        let mut mask = vec![false; 81];
        for y in 2..7 {
            for x in 2..7 {
                mask[y * 9 + x] = true;
            }
        }
        let ls = WhitakerLevelSet::from_mask(extent, &mask).unwrap();
        let mut converter = WhitakerToBufferConverter::new();
        converter.set_input(&ls).unwrap();
        let buffer = converter.output().unwrap();
        for y in 0..9 {
            for x in 0..9 {
                assert_eq!(
                    buffer.get(x, y),
                    ls.evaluate(IVec2::new(x as i32, y as i32)),
                    "mismatch at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn paint_recolors_only_the_zero_layer() {
        let extent = GridExtent::new(5, 5);
        let mut mask = vec![false; 25];
        for y in 1..4 {
            for x in 1..4 {
                mask[y * 5 + x] = true;
            }
        }
        let ls = MalcolmLevelSet::from_mask(extent, &mask).unwrap();
        let mut buffer = RgbBuffer::new(extent, [7, 7, 7]);
        paint_zero_layer(&mut buffer, &ls);
        assert_eq!(buffer.rgb(1, 1), ZERO_LAYER_COLOR);
        assert_eq!(buffer.rgb(3, 2), ZERO_LAYER_COLOR);
        // Block center and background keep their color
        assert_eq!(buffer.rgb(2, 2), [7, 7, 7]);
        assert_eq!(buffer.rgb(0, 0), [7, 7, 7]);
    }

    #[test]
    fn paint_skips_indices_beyond_the_buffer() {
        let extent = GridExtent::new(6, 6);
        let mut mask = vec![false; 36];
        for y in 1..5 {
            for x in 1..5 {
                mask[y * 6 + x] = true;
            }
        }
        let ls = MalcolmLevelSet::from_mask(extent, &mask).unwrap();
        // Smaller target than the level set's extent
        let mut buffer = RgbBuffer::new(GridExtent::new(3, 3), [0, 0, 0]);
        paint_zero_layer(&mut buffer, &ls);
        assert_eq!(buffer.rgb(1, 1), ZERO_LAYER_COLOR);
        assert_eq!(buffer.rgb(0, 0), [0, 0, 0]);
    }
}
