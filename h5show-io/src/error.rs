//! I/O error types.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for I/O operations.
pub type Result<T> = std::result::Result<T, Error>;

/// I/O error types.
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HDF5 library error.
    #[error("HDF5 error: {0}")]
    Hdf5(#[from] hdf5::Error),

    /// Backing file does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Invalid file layout.
    #[error("invalid file format: {0}")]
    InvalidFormat(String),

    /// Discovery found no dataset of the requested shape.
    #[error("no {x}x{y} datasets found")]
    NoMatchingFrames { x: usize, y: usize },

    /// Core library error.
    #[error("core error: {0}")]
    Core(#[from] h5show_core::Error),
}

impl From<Error> for h5show_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Core(inner) => inner,
            other => h5show_core::Error::Source(Box::new(other)),
        }
    }
}
