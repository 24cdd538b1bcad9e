//! Rendering backend for levelviz.
//!
//! Scenes are composited on the CPU into a [`tiny_skia::Pixmap`]: the base
//! image is blitted, contour polylines stroked, and the optional scalar bar
//! overlaid. A composited frame is then either written to a PNG file
//! ([`capture`]) or presented in a window blocking until close
//! ([`window::present`]).

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

pub mod buffer;
pub mod capture;
pub mod color_map;
pub mod compositor;
pub mod error;
pub mod scene;
pub mod window;

pub use buffer::{RgbBuffer, ScalarBuffer};
pub use color_map::ColorMap;
pub use compositor::render_scene;
pub use error::{RenderError, Result};
pub use scene::{ContourActor, ImageActor, ScalarBarActor, Scene};
