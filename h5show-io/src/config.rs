//! Frame indexing configuration.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dataset holding the frame stack in fixed-layout files.
pub const DEFAULT_STACK_DATASET: &str = "entry/instrument/pilatus/data";

/// Default frame dimension for shape discovery.
pub const DEFAULT_FRAME_DIM: usize = 2399;

/// How frames are located inside a file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IndexConfig {
    /// One 3D dataset; the leading axis is the frame index.
    Stack { dataset: String },
    /// Every 2D dataset whose stored shape is exactly `[x, y]`.
    Frames { x: usize, y: usize },
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::Stack {
            dataset: DEFAULT_STACK_DATASET.to_string(),
        }
    }
}

impl fmt::Display for IndexConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexConfig::Stack { dataset } => write!(f, "stack {dataset}"),
            IndexConfig::Frames { x, y } => write!(f, "frames {x}x{y}"),
        }
    }
}
