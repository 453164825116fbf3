//! h5show-io: HDF5 frame indexing and single-slice loading.
//!
//! This crate resolves which datasets of an HDF5 file are displayable 2D
//! frames and reads them back one at a time. The file is opened only for
//! the duration of a single read.
//!

#[cfg(feature = "clap")]
pub mod args;
mod config;
mod error;
pub mod index;
mod source;

#[cfg(feature = "clap")]
pub use args::Layout;
pub use config::{IndexConfig, DEFAULT_FRAME_DIM, DEFAULT_STACK_DATASET};
pub use error::{Error, Result};
pub use index::{discover_frames, index_stack};
pub use source::{display_name, Hdf5FrameSource};
