//! Intensity histogram window rendering.

use eframe::egui;
use egui_plot::{Bar, BarChart, Plot, VLine};

use super::theme::accent;
use crate::app::ViewerApp;
use crate::util::u64_to_f64;

impl ViewerApp {
    /// Render the histogram of the current slice (if visible).
    ///
    /// The x range is fixed to `[0, histogram ceiling]` from the first frame.
    pub(crate) fn render_histogram_window(&mut self, ctx: &egui::Context) {
        if !self.ui_state.show_histogram {
            return;
        }

        let scale = self.session.scale();
        let (lo, hi) = scale.histogram_range();
        let level = scale.level_max();
        let log_scale = self.ui_state.log_histogram;

        let mut open = true;
        egui::Window::new("Histogram")
            .open(&mut open)
            .default_size([420.0, 260.0])
            .show(ctx, |ui| {
                let Some(hist) = self.histogram.as_ref() else {
                    ui.label("No Data");
                    return;
                };

                ui.horizontal(|ui| {
                    ui.checkbox(&mut self.ui_state.log_histogram, "Log Scale");
                    ui.label(format!("Range: 0 - {hi:.1} ({} bins)", hist.n_bins()));
                });
                if hist.underflow() > 0 || hist.overflow() > 0 {
                    ui.label(format!(
                        "Outside range: {} below, {} above",
                        hist.underflow(),
                        hist.overflow()
                    ));
                }

                let width = hist.bin_width();
                Plot::new("slice_hist")
                    .x_axis_label("Intensity")
                    .y_axis_label(if log_scale { "Log10(Counts)" } else { "Counts" })
                    .include_x(lo)
                    .include_x(hi)
                    .include_y(0.0)
                    .allow_drag(false)
                    .allow_zoom(false)
                    .allow_scroll(false)
                    .show(ui, |plot_ui| {
                        let bars: Vec<Bar> = hist
                            .counts()
                            .iter()
                            .enumerate()
                            .map(|(i, &c)| {
                                let val = if log_scale {
                                    if c > 0 {
                                        u64_to_f64(c).log10()
                                    } else {
                                        0.0
                                    }
                                } else {
                                    u64_to_f64(c)
                                };
                                Bar::new(hist.bin_center(i), val)
                                    .width(width)
                                    .fill(accent::BLUE)
                            })
                            .collect();
                        plot_ui.bar_chart(BarChart::new(bars).name("Slice"));
                        plot_ui.vline(
                            VLine::new(level)
                                .color(accent::RED)
                                .width(2.0)
                                .name(format!("Level {level:.1}")),
                        );
                    });
            });

        if !open {
            self.ui_state.show_histogram = false;
        }
    }
}
