//! Main view (central panel) rendering.

use eframe::egui;
use egui_plot::{Plot, PlotBounds, PlotImage, PlotPoint};
use h5show_core::{FrameShape, ViewerEvents};

use crate::app::ViewerApp;
use crate::util::{usize_to_f32, usize_to_f64};

/// Map a plot coordinate over the slice image to view coordinates.
///
/// The image spans `[0, cols] x [0, rows]` with row 0 drawn at the top, so
/// the y axis is flipped. Positions outside the image pass through and are
/// clamped by the probe.
pub(crate) fn plot_to_view(pos: PlotPoint, shape: FrameShape) -> (f64, f64) {
    (pos.x, usize_to_f64(shape.rows) - pos.y)
}

impl ViewerApp {
    /// Render the central panel with the current slice.
    pub(crate) fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(tex) = &self.texture else {
                ui.centered_and_justified(|ui| ui.label("No Data"));
                return;
            };
            let shape = self.session.frames().shape();
            let (rows, cols) = (usize_to_f64(shape.rows), usize_to_f64(shape.cols));
            let autoset = self.session.take_bounds_autoset();
            let session = &mut self.session;

            let mut cursor = None;
            Plot::new("slice")
                .data_aspect(1.0)
                .show_grid(false)
                .show(ui, |plot_ui| {
                    plot_ui.image(PlotImage::new(
                        tex,
                        PlotPoint::new(cols / 2.0, rows / 2.0),
                        [usize_to_f32(shape.cols), usize_to_f32(shape.rows)],
                    ));

                    if let Some(extent) = autoset {
                        plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                            [0.0, 0.0],
                            [usize_to_f64(extent.cols), usize_to_f64(extent.rows)],
                        ));
                    }

                    if let Some(pos) = plot_ui.pointer_coordinate() {
                        let (x, y) = plot_to_view(pos, shape);
                        cursor = session.on_pointer_move(x, y);
                    }
                });
            self.cursor = cursor;
        });
    }
}
