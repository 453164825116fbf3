//! Command-line selection of the frame layout, shared by the binaries.

use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::{IndexConfig, DEFAULT_FRAME_DIM, DEFAULT_STACK_DATASET};

/// Where the frames live inside the file.
#[derive(Subcommand, Debug, Clone)]
pub enum Layout {
    /// Frames are the leading axis of one 3D dataset
    Stack {
        /// Input HDF5 file
        #[arg(short, long)]
        file: PathBuf,

        /// Path of the 3D dataset
        #[arg(short, long, default_value = DEFAULT_STACK_DATASET)]
        dataset: String,
    },

    /// Frames are all 2D datasets of a given shape
    Frames {
        /// Input HDF5 file
        #[arg(short, long)]
        file: PathBuf,

        /// First stored dimension of a frame
        #[arg(short = 'x', long = "dim-x", default_value_t = DEFAULT_FRAME_DIM)]
        x: usize,

        /// Second stored dimension of a frame
        #[arg(short = 'y', long = "dim-y", default_value_t = DEFAULT_FRAME_DIM)]
        y: usize,
    },
}

impl Layout {
    #[must_use]
    pub fn file(&self) -> &Path {
        match self {
            Layout::Stack { file, .. } | Layout::Frames { file, .. } => file,
        }
    }

    #[must_use]
    pub fn index_config(&self) -> IndexConfig {
        match self {
            Layout::Stack { dataset, .. } => IndexConfig::Stack {
                dataset: dataset.clone(),
            },
            Layout::Frames { x, y, .. } => IndexConfig::Frames { x: *x, y: *y },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(subcommand)]
        layout: Layout,
    }

    #[test]
    fn test_stack_defaults() {
        let h = Harness::parse_from(["bin", "stack", "-f", "scan-0323_pilatus.h5"]);
        assert_eq!(h.layout.file(), Path::new("scan-0323_pilatus.h5"));
        assert_eq!(h.layout.index_config(), IndexConfig::default());
    }

    #[test]
    fn test_frames_dims() {
        let h = Harness::parse_from(["bin", "frames", "-f", "818292.h5", "-x", "1024"]);
        assert_eq!(
            h.layout.index_config(),
            IndexConfig::Frames {
                x: 1024,
                y: DEFAULT_FRAME_DIM
            }
        );
        let h = Harness::parse_from(["bin", "frames", "--file", "r.h5", "--dim-y", "7"]);
        assert_eq!(
            h.layout.index_config(),
            IndexConfig::Frames {
                x: DEFAULT_FRAME_DIM,
                y: 7
            }
        );
    }

    #[test]
    fn test_file_is_required() {
        assert!(Harness::try_parse_from(["bin", "stack"]).is_err());
        assert!(Harness::try_parse_from(["bin", "frames", "-x", "4"]).is_err());
    }
}
