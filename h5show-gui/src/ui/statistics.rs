//! Statistics panel rendering.

use eframe::egui;

use super::theme::{stat_label, stat_value, stat_value_highlight, ThemeColors};
use crate::app::ViewerApp;
use crate::util::{format_number, format_value};

impl ViewerApp {
    /// Render a single stat row with label on left and value on right.
    fn stat_row(ui: &mut egui::Ui, label: &str, value: &str, highlight: bool) {
        ui.horizontal(|ui| {
            ui.label(stat_label(label));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if highlight {
                    ui.label(stat_value_highlight(value));
                } else {
                    ui.label(stat_value(value));
                }
            });
        });
    }

    /// Render the statistics panel with two-column layout.
    pub(crate) fn render_statistics(&self, ui: &mut egui::Ui) {
        let frames = self.session.frames();
        let scale = self.session.scale();

        Self::stat_row(ui, "File", self.session.name(), false);
        Self::stat_row(ui, "Frames", &format_number(frames.len()), false);
        Self::stat_row(ui, "Shape", &frames.shape().to_string(), false);
        if let Ok(frame_ref) = frames.get(self.session.current_index()) {
            Self::stat_row(ui, "Source", &frame_ref.to_string(), false);
        }

        ui.add_space(8.0);
        Self::stat_row(ui, "Level max", &format!("{:.2}", scale.level_max()), false);
        Self::stat_row(
            ui,
            "Hist max",
            &format!("{:.2}", scale.histogram_max()),
            false,
        );

        ui.add_space(8.0);
        if let Some(reading) = self.cursor {
            Self::stat_row(ui, "Pixel", &format!("{}, {}", reading.x, reading.y), false);
            Self::stat_row(ui, "Value", &format_value(reading.value), true);
        } else {
            let colors = ThemeColors::from_ui(ui);
            ui.label(
                egui::RichText::new("Hover the image to probe")
                    .size(11.0)
                    .color(colors.text_dim),
            );
        }
    }
}
