//! Sparse narrow-band level-set representations.
//!
//! Both variants store only the cells near the implicit boundary as maps
//! from grid index to value. Enumeration order of a layer is unspecified.

mod malcolm;
mod whitaker;

pub use malcolm::MalcolmLevelSet;
pub use whitaker::{WhitakerLevelSet, INSIDE_FILL, OUTSIDE_FILL};

use glam::IVec2;
use levelviz_core::GridExtent;

/// Identifies one Whitaker layer by its nominal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerId {
    MinusTwo,
    MinusOne,
    Zero,
    PlusOne,
    PlusTwo,
}

impl LayerId {
    /// All layers in ascending value order.
    pub const ALL: [LayerId; 5] = [
        LayerId::MinusTwo,
        LayerId::MinusOne,
        LayerId::Zero,
        LayerId::PlusOne,
        LayerId::PlusTwo,
    ];

    /// The nominal layer value (-2, -1, 0, 1, 2).
    #[must_use]
    pub fn value(self) -> f32 {
        match self {
            LayerId::MinusTwo => -2.0,
            LayerId::MinusOne => -1.0,
            LayerId::Zero => 0.0,
            LayerId::PlusOne => 1.0,
            LayerId::PlusTwo => 2.0,
        }
    }

    fn index(self) -> usize {
        match self {
            LayerId::MinusTwo => 0,
            LayerId::MinusOne => 1,
            LayerId::Zero => 2,
            LayerId::PlusOne => 3,
            LayerId::PlusTwo => 4,
        }
    }

    fn from_signed(d: i8) -> Option<LayerId> {
        match d {
            -2 => Some(LayerId::MinusTwo),
            -1 => Some(LayerId::MinusOne),
            0 => Some(LayerId::Zero),
            1 => Some(LayerId::PlusOne),
            2 => Some(LayerId::PlusTwo),
            _ => None,
        }
    }
}

const NEIGHBORS_4: [IVec2; 4] = [
    IVec2::new(1, 0),
    IVec2::new(-1, 0),
    IVec2::new(0, 1),
    IVec2::new(0, -1),
];

/// Interior cells with at least one exterior 4-neighbor.
///
/// Cells beyond the extent count as exterior, so interior regions touching
/// the image border contribute boundary cells there too.
fn mask_boundary(extent: GridExtent, mask: &[bool]) -> Vec<IVec2> {
    let w = extent.width as usize;
    let mut boundary = Vec::new();
    for y in 0..extent.height as i32 {
        for x in 0..extent.width as i32 {
            let cell = IVec2::new(x, y);
            if !mask[y as usize * w + x as usize] {
                continue;
            }
            let touches_exterior = NEIGHBORS_4.iter().any(|n| {
                let p = cell + *n;
                !extent.contains(p) || !mask[p.y as usize * w + p.x as usize]
            });
            if touches_exterior {
                boundary.push(cell);
            }
        }
    }
    boundary
}
