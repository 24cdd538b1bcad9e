//! levelviz: visualization drivers for sparse level-set evolutions on 2D
//! images.
//!
//! Levelviz renders the state of a narrow-band level-set segmentation over
//! its input image. Malcolm level sets paint their single zero layer red;
//! Whitaker level sets are contoured at configurable iso-values with a
//! color-map legend. Each `update` renders one frame, either captured to a
//! numbered PNG or shown in a window that blocks until closed.
//!
//! # Quick Start
//!
//! ```no_run
//! use levelviz::*;
//!
//! fn main() -> Result<()> {
//!     // A gradient image and a circular initial region
//!     let extent = GridExtent::new(64, 64);
//!     let image = ScalarImage::from_fn(extent, |x, _| 4.0 * x as f32);
//!     let mask: Vec<bool> = (0..64 * 64)
//!         .map(|i| {
//!             let (x, y) = (i % 64, i / 64);
//!             (x as f32 - 32.0).hypot(y as f32 - 32.0) < 12.0
//!         })
//!         .collect();
//!     let level_set = MalcolmLevelSet::from_mask(extent, &mask)?;
//!
//!     let mut viewer = MalcolmLayerViewer::new();
//!     viewer.set_input_image(&image);
//!     viewer.set_level_set(&level_set);
//!
//!     // Blocks until the window is closed
//!     viewer.update()?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The workspace splits along the data-flow seams:
//!
//! - [`levelviz_structures`]: imaging-side inputs ([`ScalarImage`],
//!   [`MalcolmLevelSet`], [`WhitakerLevelSet`])
//! - [`levelviz_core`]: grid math, marching squares, viewer options
//! - [`levelviz_render`]: CPU compositing, PNG capture, windowing
//! - this crate: the input converters and the two viewer drivers
//!
//! Viewers are plain structs owning their converters and options; there is
//! no shared context or registry, so independent viewers can coexist in
//! one process.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Pixel index arithmetic converts between u32/i32/usize/f32 throughout
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]

pub mod convert;
pub mod error;
pub mod viewer;

pub use convert::{
    paint_zero_layer, ImageToRgbConverter, ImageToScalarConverter, WhitakerToBufferConverter,
    ZERO_LAYER_COLOR,
};
pub use error::{Result, VizError};
pub use viewer::{MalcolmLayerViewer, WhitakerLayerViewer};

// Re-export the types a viewer caller touches
pub use levelviz_core::{GridExtent, IVec2, UVec2, Vec2, Vec3, ViewerOptions};
pub use levelviz_render::{ColorMap, RgbBuffer, ScalarBuffer};
pub use levelviz_structures::{LayerId, MalcolmLevelSet, ScalarImage, WhitakerLevelSet};
