//! Malcolm sparse level set: a single discrete zero layer.

use std::collections::HashMap;

use glam::IVec2;
use levelviz_core::{GridExtent, Result};

use super::mask_boundary;

/// Sparse level set storing only the zero layer.
///
/// The layer is a map from grid index to layer value; for the Malcolm
/// representation every stored value is 0.
#[derive(Debug, Clone, Default)]
pub struct MalcolmLevelSet {
    extent: GridExtent,
    zero_layer: HashMap<IVec2, i8>,
}

impl MalcolmLevelSet {
    /// Builds the zero layer from a binary mask: the interior cells that
    /// touch the exterior (4-neighborhood).
    pub fn from_mask(extent: GridExtent, mask: &[bool]) -> Result<Self> {
        extent.check_len(mask.len())?;
        let zero_layer = mask_boundary(extent, mask)
            .into_iter()
            .map(|cell| (cell, 0_i8))
            .collect();
        Ok(Self { extent, zero_layer })
    }

    #[must_use]
    pub fn extent(&self) -> GridExtent {
        self.extent
    }

    /// The zero layer's index-to-value map. Enumeration order is
    /// unspecified.
    #[must_use]
    pub fn zero_layer(&self) -> &HashMap<IVec2, i8> {
        &self.zero_layer
    }
}
