//! Whitaker sparse level set: five signed-distance layers.

use std::collections::{HashMap, VecDeque};

use glam::IVec2;
use levelviz_core::{GridExtent, Result};

use super::{mask_boundary, LayerId, NEIGHBORS_4};

/// Value reported for interior cells beyond the innermost layer.
pub const INSIDE_FILL: f32 = -3.0;
/// Value reported for exterior cells beyond the outermost layer.
pub const OUTSIDE_FILL: f32 = 3.0;

/// Sparse level set storing the five layers -2..=+2 plus an interior
/// bitmap for the off-band sign.
#[derive(Debug, Clone, Default)]
pub struct WhitakerLevelSet {
    extent: GridExtent,
    layers: [HashMap<IVec2, f32>; 5],
    interior: Vec<bool>,
}

impl WhitakerLevelSet {
    /// Builds the narrow band from a binary mask.
    ///
    /// The zero layer is the interior boundary (cells of the mask touching
    /// the exterior); the remaining layers hold the city-block distance to
    /// it, negative inside, clamped to the `[-2, +2]` band.
    pub fn from_mask(extent: GridExtent, mask: &[bool]) -> Result<Self> {
        extent.check_len(mask.len())?;
        let w = extent.width as usize;
        let interior = mask.to_vec();
        let mut layers: [HashMap<IVec2, f32>; 5] = Default::default();

        // Multi-source BFS out from the zero layer, two rings each side
        let mut dist = vec![i8::MIN; extent.len()];
        let mut queue = VecDeque::new();
        for cell in mask_boundary(extent, mask) {
            dist[cell.y as usize * w + cell.x as usize] = 0;
            layers[LayerId::Zero.index()].insert(cell, 0.0);
            queue.push_back(cell);
        }
        while let Some(cell) = queue.pop_front() {
            let d = dist[cell.y as usize * w + cell.x as usize];
            if d >= 2 {
                continue;
            }
            for n in &NEIGHBORS_4 {
                let p = cell + *n;
                if !extent.contains(p) {
                    continue;
                }
                let off = p.y as usize * w + p.x as usize;
                if dist[off] != i8::MIN {
                    continue;
                }
                dist[off] = d + 1;
                let signed = if interior[off] { -(d + 1) } else { d + 1 };
                if let Some(id) = LayerId::from_signed(signed) {
                    layers[id.index()].insert(p, f32::from(signed));
                }
                queue.push_back(p);
            }
        }

        Ok(Self {
            extent,
            layers,
            interior,
        })
    }

    #[must_use]
    pub fn extent(&self) -> GridExtent {
        self.extent
    }

    /// Whether a grid index lies on the mask's interior side. Indices
    /// beyond the extent are exterior.
    #[must_use]
    pub fn is_inside(&self, index: IVec2) -> bool {
        matches!(self.extent.offset_of(index), Ok(off) if self.interior[off])
    }

    /// One layer's index-to-value map. Enumeration order is unspecified.
    #[must_use]
    pub fn layer(&self, id: LayerId) -> &HashMap<IVec2, f32> {
        &self.layers[id.index()]
    }

    /// The level-set value at a grid index: the stored layer value on the
    /// band, otherwise [`INSIDE_FILL`] or [`OUTSIDE_FILL`] by mask side.
    /// Indices beyond the extent are exterior.
    #[must_use]
    pub fn evaluate(&self, index: IVec2) -> f32 {
        for layer in &self.layers {
            if let Some(v) = layer.get(&index) {
                return *v;
            }
        }
        match self.extent.offset_of(index) {
            Ok(off) if self.interior[off] => INSIDE_FILL,
            _ => OUTSIDE_FILL,
        }
    }
}
