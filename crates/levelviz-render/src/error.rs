//! Error types for the rendering backend.

use thiserror::Error;

/// The main error type for levelviz rendering operations.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A canvas or texture with zero area was requested.
    #[error("invalid canvas dimensions {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    /// Pixel data did not match the declared dimensions.
    #[error("invalid pixel data for {width}x{height} frame")]
    InvalidFrameData { width: u32, height: u32 },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// The event loop could not be created or run.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// The window could not be created.
    #[error("window error: {0}")]
    Window(#[from] winit::error::OsError),

    /// The rendering surface could not be created.
    #[error("surface error: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    /// The surface reported no usable texture format.
    #[error("no compatible surface format")]
    NoCompatibleSurfaceFormat,

    /// No compatible graphics adapter was found.
    #[error("adapter error: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    /// The graphics device could not be acquired.
    #[error("device error: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}

/// A specialized Result type for levelviz rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
