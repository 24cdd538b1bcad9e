//! Data types consumed by the levelviz viewers.
//!
//! - [`ScalarImage`]: an owned 2D scalar raster with spacing and origin
//! - [`MalcolmLevelSet`]: sparse level set with a single discrete zero layer
//! - [`WhitakerLevelSet`]: sparse level set with five signed-distance layers
//!
//! The level-set types are passive storage: evolution and general adaptor
//! machinery live upstream. The `from_mask` constructors exist so demos and
//! tests can derive a narrow band from a binary mask.

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

pub mod image;
pub mod level_set;

pub use image::ScalarImage;
pub use level_set::{LayerId, MalcolmLevelSet, WhitakerLevelSet, INSIDE_FILL, OUTSIDE_FILL};
