//! Command-line inspection of HDF5 frame stacks.
//!
//! Runs the same frame index, slice loader and cursor probe as the viewer,
//! without a window.
#![allow(clippy::uninlined_format_args, clippy::cast_precision_loss)]

use std::path::Path;

use clap::{Parser, Subcommand};
use h5show_core::{DisplayScale, FrameShape, FrameSource, Session, ViewerEvents};
use h5show_io::{display_name, Hdf5FrameSource, IndexConfig, Layout};
use serde::Serialize;
use thiserror::Error;

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    H5showIo(#[from] h5show_io::Error),

    #[error("Core error: {0}")]
    Core(#[from] h5show_core::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Inspect detector frame stacks stored in HDF5 files.
#[derive(Parser)]
#[command(name = "h5frames")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show frame count, frame shape and display scale
    Info {
        /// Print as JSON
        #[arg(long)]
        json: bool,

        #[command(subcommand)]
        layout: Layout,
    },

    /// List every frame reference in display order
    List {
        #[command(subcommand)]
        layout: Layout,
    },

    /// Print the pixel value at a position of one frame
    Probe {
        /// Frame index
        #[arg(short, long, default_value = "0")]
        index: usize,

        /// Column coordinate (clamped to the frame)
        #[arg(long, allow_hyphen_values = true)]
        px: f64,

        /// Row coordinate (clamped to the frame)
        #[arg(long, allow_hyphen_values = true)]
        py: f64,

        #[command(subcommand)]
        layout: Layout,
    },
}

fn open_source(layout: &Layout) -> Result<Hdf5FrameSource> {
    Ok(Hdf5FrameSource::open(layout.file(), &layout.index_config())?)
}

fn open_session(layout: &Layout) -> Result<Session<Hdf5FrameSource>> {
    let source = open_source(layout)?;
    Ok(Session::open(source, display_name(layout.file()))?)
}

#[derive(Serialize)]
struct InfoReport<'a> {
    file: &'a Path,
    layout: IndexConfig,
    frames: usize,
    shape: FrameShape,
    scale: DisplayScale,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { json, layout } => {
            let session = open_session(&layout)?;
            let report = InfoReport {
                file: layout.file(),
                layout: layout.index_config(),
                frames: session.frames().len(),
                shape: session.frames().shape(),
                scale: session.scale(),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("File: {}", report.file.display());
                println!("Layout: {}", report.layout);
                println!("Frames: {}", report.frames);
                println!("Frame shape: {}", report.shape);
                println!(
                    "Levels: 0 - {:.3}  Histogram: 0 - {:.3}",
                    report.scale.level_max(),
                    report.scale.histogram_max()
                );
            }
        }

        Commands::List { layout } => {
            let source = open_source(&layout)?;
            for (i, frame) in source.frames().iter().enumerate() {
                println!("{:>6}  {}", i, frame);
            }
        }

        Commands::Probe {
            index,
            px,
            py,
            layout,
        } => {
            let mut session = open_session(&layout)?;
            session.on_scroll(index as f64)?;
            if session.on_pointer_move(px, py).is_some() {
                println!("{}", session.status());
            }
        }
    }

    Ok(())
}
