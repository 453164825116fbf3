//! h5show viewer entry point.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod args;
mod histogram;
mod state;
mod ui;
mod util;
mod viewer;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use h5show_core::Session;
use h5show_io::{display_name, Hdf5FrameSource};

use app::ViewerApp;
use args::Args;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let path = args.file().to_path_buf();
    let config = args.index_config();

    // Everything that can fail at startup happens before a window exists.
    let source = Hdf5FrameSource::open(&path, &config)
        .with_context(|| format!("cannot index {} ({config})", path.display()))?;
    let session = Session::open(source, display_name(&path))
        .with_context(|| format!("cannot read first frame of {}", path.display()))?;
    log::info!(
        "{}: {} frames of {}, levels 0 - {:.3}",
        path.display(),
        session.frames().len(),
        session.frames().shape(),
        session.scale().level_max()
    );

    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1024.0, 1024.0]),
        ..Default::default()
    };
    let title = path.display().to_string();
    eframe::run_native(
        &title,
        opts,
        Box::new(move |cc| {
            ui::theme::configure_style(&cc.egui_ctx);
            Ok(Box::new(ViewerApp::new(session)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("viewer exited with error: {e}"))
}
