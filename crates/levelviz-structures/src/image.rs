//! Owned 2D scalar raster.

use glam::Vec2;
use levelviz_core::{GridExtent, Result};

/// A 2D scalar image with physical spacing and origin.
///
/// Values are stored row-major; index `(x, y)` is column `x` of row `y`.
/// The viewers treat images as immutable inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarImage {
    extent: GridExtent,
    spacing: Vec2,
    origin: Vec2,
    data: Vec<f32>,
}

impl ScalarImage {
    /// Creates an image filled with a constant value.
    pub fn new(extent: GridExtent, fill: f32) -> Self {
        Self {
            extent,
            spacing: Vec2::ONE,
            origin: Vec2::ZERO,
            data: vec![fill; extent.len()],
        }
    }

    /// Wraps an existing row-major buffer, rejecting a length mismatch.
    pub fn from_vec(extent: GridExtent, data: Vec<f32>) -> Result<Self> {
        extent.check_len(data.len())?;
        Ok(Self {
            extent,
            spacing: Vec2::ONE,
            origin: Vec2::ZERO,
            data,
        })
    }

    /// Builds an image by evaluating `f` at every `(x, y)`.
    pub fn from_fn(extent: GridExtent, mut f: impl FnMut(u32, u32) -> f32) -> Self {
        let mut data = Vec::with_capacity(extent.len());
        for y in 0..extent.height {
            for x in 0..extent.width {
                data.push(f(x, y));
            }
        }
        Self {
            extent,
            spacing: Vec2::ONE,
            origin: Vec2::ZERO,
            data,
        }
    }

    #[must_use]
    pub fn extent(&self) -> GridExtent {
        self.extent
    }

    #[must_use]
    pub fn spacing(&self) -> Vec2 {
        self.spacing
    }

    pub fn set_spacing(&mut self, spacing: Vec2) -> &mut Self {
        self.spacing = spacing;
        self
    }

    #[must_use]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Vec2) -> &mut Self {
        self.origin = origin;
        self
    }

    /// Returns the raw row-major values.
    #[must_use]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns the value at (x, y).
    ///
    /// Panics if the index is outside the extent.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.data[(y * self.extent.width + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, value: f32) {
        self.data[(y * self.extent.width + x) as usize] = value;
    }

    /// Returns `(min, max)` over the data; an empty image yields
    /// `(INFINITY, NEG_INFINITY)`.
    #[must_use]
    pub fn data_range(&self) -> (f32, f32) {
        let min = self.data.iter().copied().fold(f32::INFINITY, f32::min);
        let max = self.data.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        (min, max)
    }
}
