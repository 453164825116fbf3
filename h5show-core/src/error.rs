//! Error types for h5show-core.

use thiserror::Error;

/// Result type alias for h5show operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for frame indexing and slice loading.
#[derive(Error, Debug)]
pub enum Error {
    /// A frame index outside the frame list was requested.
    #[error("frame index {index} out of range (frame count {len})")]
    FrameOutOfRange { index: usize, len: usize },

    /// A frame list was built without any frames.
    #[error("no frames to display")]
    NoFrames,

    /// Frames of this shape have no pixels to show.
    #[error("no frame to show: frame shape {rows}x{cols} is empty")]
    EmptyFrame { rows: usize, cols: usize },

    /// A loaded slice does not have the frame list's shape.
    #[error("slice shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// A scroll position that cannot be mapped to a frame index.
    #[error("invalid scroll position: {0}")]
    InvalidPosition(f64),

    /// Error raised by the backing frame source.
    #[error("frame source error: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}
