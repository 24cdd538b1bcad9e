//! Renderer-native raster buffers.
//!
//! Adapters write one of these per invocation; the scene consumes it for a
//! single rendering pass. Both carry the source image's geometry so the
//! compositor can map cells to canvas coordinates.

use glam::{IVec2, Vec2};
use levelviz_core::GridExtent;

/// A dense scalar raster, the input to contour extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarBuffer {
    pub extent: GridExtent,
    pub spacing: Vec2,
    pub origin: Vec2,
    pub data: Vec<f32>,
}

impl ScalarBuffer {
    /// Creates a buffer filled with a constant value.
    pub fn new(extent: GridExtent, fill: f32) -> Self {
        Self {
            extent,
            spacing: Vec2::ONE,
            origin: Vec2::ZERO,
            data: vec![fill; extent.len()],
        }
    }

    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.data[(y * self.extent.width + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, value: f32) {
        self.data[(y * self.extent.width + x) as usize] = value;
    }
}

/// An RGB raster, 3 bytes per pixel, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbBuffer {
    pub extent: GridExtent,
    pub spacing: Vec2,
    pub origin: Vec2,
    pub data: Vec<u8>,
}

impl RgbBuffer {
    /// Creates a buffer filled with a constant color.
    pub fn new(extent: GridExtent, fill: [u8; 3]) -> Self {
        let mut data = Vec::with_capacity(extent.len() * 3);
        for _ in 0..extent.len() {
            data.extend_from_slice(&fill);
        }
        Self {
            extent,
            spacing: Vec2::ONE,
            origin: Vec2::ZERO,
            data,
        }
    }

    #[must_use]
    pub fn contains(&self, index: IVec2) -> bool {
        self.extent.contains(index)
    }

    #[must_use]
    pub fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let off = ((y * self.extent.width + x) * 3) as usize;
        [self.data[off], self.data[off + 1], self.data[off + 2]]
    }

    pub fn set_rgb(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let off = ((y * self.extent.width + x) * 3) as usize;
        self.data[off..off + 3].copy_from_slice(&rgb);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_buffer_round_trips_values() {
        let mut buf = ScalarBuffer::new(GridExtent::new(3, 2), 0.0);
        buf.set(2, 1, 7.5);
        assert_eq!(buf.get(2, 1), 7.5);
        assert_eq!(buf.get(0, 0), 0.0);
        assert_eq!(buf.data.len(), 6);
    }

    #[test]
    fn rgb_buffer_packs_three_bytes_per_pixel() {
        let mut buf = RgbBuffer::new(GridExtent::new(2, 2), [10, 20, 30]);
        assert_eq!(buf.data.len(), 12);
        assert_eq!(buf.rgb(1, 1), [10, 20, 30]);
        buf.set_rgb(0, 1, [255, 0, 0]);
        assert_eq!(buf.rgb(0, 1), [255, 0, 0]);
        assert_eq!(buf.rgb(1, 0), [10, 20, 30]);
    }

    #[test]
    fn contains_uses_the_extent() {
        let buf = RgbBuffer::new(GridExtent::new(2, 2), [0; 3]);
        assert!(buf.contains(IVec2::new(1, 1)));
        assert!(!buf.contains(IVec2::new(2, 0)));
        assert!(!buf.contains(IVec2::new(0, -1)));
    }
}
