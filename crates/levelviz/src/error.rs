//! Error types for the viewer API.

use thiserror::Error;

/// The main error type for levelviz operations.
#[derive(Error, Debug)]
pub enum VizError {
    /// Error from the grid or contour machinery.
    #[error("core error: {0}")]
    Core(#[from] levelviz_core::CoreError),

    /// Error from compositing, capture, or windowing.
    #[error("render error: {0}")]
    Render(#[from] levelviz_render::RenderError),
}

/// A specialized Result type for levelviz operations.
pub type Result<T> = std::result::Result<T, VizError>;
