//! Error types for levelviz.

use thiserror::Error;

/// The main error type for levelviz core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// An operation received a zero-area grid extent.
    #[error("empty grid extent: {width}x{height}")]
    EmptyExtent { width: u32, height: u32 },

    /// A grid index fell outside the extent it was used against.
    #[error("index ({x}, {y}) out of bounds for {width}x{height} grid")]
    IndexOutOfBounds { x: i32, y: i32, width: u32, height: u32 },
}

/// A specialized Result type for levelviz core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
