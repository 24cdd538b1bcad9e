//! Core types for levelviz.
//!
//! This crate provides the vocabulary shared by the rest of the workspace:
//! - [`GridExtent`] for 2D raster geometry
//! - [`ViewerOptions`] holding per-viewer configuration
//! - Marching-squares contour extraction ([`extract_contours`])
//! - The [`CoreError`] type and [`Result`] alias

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Options structs legitimately have many boolean flags
#![allow(clippy::struct_excessive_bools)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Pixel index arithmetic converts between u32/i32/usize/f32 throughout
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]

pub mod error;
pub mod grid;
pub mod marching_squares;
pub mod options;

pub use error::{CoreError, Result};
pub use grid::GridExtent;
pub use marching_squares::{extract_contours, generate_values, Contour};
pub use options::ViewerOptions;

// Re-export glam types for convenience
pub use glam::{IVec2, UVec2, Vec2, Vec3};
