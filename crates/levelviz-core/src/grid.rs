//! 2D raster grid geometry.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Dimensions of a 2D raster grid, in cells.
///
/// Grid indices are `(x, y)` with `x` the column and `y` the row; storage
/// order everywhere in the workspace is row-major.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridExtent {
    pub width: u32,
    pub height: u32,
}

impl GridExtent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether a signed grid index lies inside the extent.
    pub fn contains(&self, index: IVec2) -> bool {
        index.x >= 0
            && index.y >= 0
            && (index.x as u32) < self.width
            && (index.y as u32) < self.height
    }

    /// Row-major flat offset of a grid index.
    pub fn offset_of(&self, index: IVec2) -> Result<usize> {
        if self.contains(index) {
            Ok(index.y as usize * self.width as usize + index.x as usize)
        } else {
            Err(CoreError::IndexOutOfBounds {
                x: index.x,
                y: index.y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Checks that a flat buffer length matches this extent.
    pub fn check_len(&self, actual: usize) -> Result<()> {
        if actual == self.len() {
            Ok(())
        } else {
            Err(CoreError::SizeMismatch {
                expected: self.len(),
                actual,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_row_major() {
        let extent = GridExtent::new(4, 3);
        assert_eq!(extent.len(), 12);
        assert_eq!(extent.offset_of(IVec2::new(0, 0)).unwrap(), 0);
        assert_eq!(extent.offset_of(IVec2::new(3, 0)).unwrap(), 3);
        assert_eq!(extent.offset_of(IVec2::new(0, 1)).unwrap(), 4);
        assert_eq!(extent.offset_of(IVec2::new(3, 2)).unwrap(), 11);
    }

    #[test]
    fn out_of_bounds_indices_are_rejected() {
        let extent = GridExtent::new(4, 3);
        assert!(!extent.contains(IVec2::new(-1, 0)));
        assert!(!extent.contains(IVec2::new(4, 0)));
        assert!(!extent.contains(IVec2::new(0, 3)));
        assert!(extent.offset_of(IVec2::new(4, 0)).is_err());
    }

    #[test]
    fn empty_extents() {
        assert!(GridExtent::new(0, 5).is_empty());
        assert!(GridExtent::new(5, 0).is_empty());
        assert!(!GridExtent::new(1, 1).is_empty());
        assert!(GridExtent::new(2, 2).check_len(3).is_err());
        assert!(GridExtent::new(2, 2).check_len(4).is_ok());
    }
}
