//! Control panel (left sidebar) and top status bar rendering.

use eframe::egui::{self, FontFamily, FontId, Stroke};

use super::theme::{form_label, ThemeColors};
use crate::app::ViewerApp;
use crate::viewer::Colormap;

impl ViewerApp {
    /// Render the top panel with the session status label.
    pub(crate) fn render_top_panel(&mut self, ctx: &egui::Context) {
        let colors = ThemeColors::from_ctx(ctx);

        egui::TopBottomPanel::top("top_bar")
            .frame(
                egui::Frame::none()
                    .fill(colors.bg_header)
                    .inner_margin(egui::Margin {
                        left: 16.0,
                        right: 16.0,
                        top: 8.0,
                        bottom: 8.0,
                    }),
            )
            .show(ctx, |ui| {
                ui.set_min_height(28.0);
                ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                    let color = if self.session.slice().is_some() {
                        colors.text_primary
                    } else {
                        colors.error
                    };
                    ui.label(
                        egui::RichText::new(self.session.status())
                            .font(FontId::new(13.0, FontFamily::Monospace))
                            .color(color),
                    );
                });
            });
    }

    /// Render the left sidebar.
    pub(crate) fn render_side_panel(&mut self, ctx: &egui::Context) {
        let colors = ThemeColors::from_ctx(ctx);

        egui::SidePanel::left("ctrl")
            .default_width(240.0)
            .frame(
                egui::Frame::none()
                    .fill(colors.bg_panel)
                    .inner_margin(egui::Margin::ZERO),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.render_section(ui, "Frame", |app, ui| app.render_frame_controls(ui));
                        self.render_section(ui, "View", |app, ui| app.render_view_options(ui));
                        self.render_section(ui, "Statistics", |app, ui| {
                            app.render_statistics(ui);
                        });
                        ui.add_space(12.0);
                    });
            });
    }

    /// Render a section with an uppercase header and bottom border.
    fn render_section<F>(&mut self, ui: &mut egui::Ui, title: &str, content: F)
    where
        F: FnOnce(&mut Self, &mut egui::Ui),
    {
        ui.push_id(title, |ui| {
            let colors = ThemeColors::from_ui(ui);
            let header_height = ui.spacing().interact_size.y.max(28.0);
            let (header_rect, _) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), header_height),
                egui::Sense::hover(),
            );
            ui.painter().text(
                header_rect.left_center() + egui::vec2(16.0, 0.0),
                egui::Align2::LEFT_CENTER,
                title.to_uppercase(),
                FontId::new(11.0, FontFamily::Proportional),
                colors.text_primary,
            );
            ui.painter().hline(
                header_rect.x_range(),
                header_rect.bottom(),
                Stroke::new(1.0, colors.border),
            );

            egui::Frame::none()
                .inner_margin(egui::Margin {
                    left: 16.0,
                    right: 16.0,
                    top: 12.0,
                    bottom: 16.0,
                })
                .show(ui, |ui| content(self, ui));

            let last_rect = ui.min_rect();
            ui.painter().hline(
                last_rect.x_range(),
                last_rect.bottom(),
                Stroke::new(1.0, colors.border),
            );
        });
    }

    /// Frame slider spanning the placeholder volume's scroll range.
    fn render_frame_controls(&mut self, ui: &mut egui::Ui) {
        let range = self.session.volume().scroll_range();
        let last = *range.end();

        ui.label(form_label("Frame"));
        ui.add_space(4.0);
        let slider = ui.add(egui::Slider::new(&mut self.ui_state.frame, range).integer());
        if slider.changed() && self.ui_state.frame != self.session.current_index() {
            self.scroll_to(self.ui_state.frame);
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let current = self.session.current_index();
            if ui
                .add_enabled(current > 0, egui::Button::new("◀ Prev"))
                .clicked()
            {
                self.scroll_to(current - 1);
            }
            if ui
                .add_enabled(current < last, egui::Button::new("Next ▶"))
                .clicked()
            {
                self.scroll_to(current + 1);
            }
        });

        ui.add_space(4.0);
        ui.label(
            egui::RichText::new("←/→ step, Home/End jump")
                .size(10.0)
                .color(ThemeColors::from_ui(ui).text_dim),
        );
    }

    /// Render view options (colormap, histogram toggles).
    fn render_view_options(&mut self, ui: &mut egui::Ui) {
        ui.label(form_label("Colormap"));
        ui.add_space(4.0);

        egui::ComboBox::from_id_salt("colormap_select")
            .selected_text(self.colormap.to_string())
            .width(ui.available_width() - 8.0)
            .show_ui(ui, |ui| {
                for cmap in Colormap::ALL {
                    if ui
                        .selectable_value(&mut self.colormap, cmap, cmap.to_string())
                        .clicked()
                    {
                        self.texture = None;
                    }
                }
            });

        ui.add_space(12.0);
        ui.checkbox(&mut self.ui_state.show_histogram, "Histogram");
        ui.add_enabled(
            self.ui_state.show_histogram,
            egui::Checkbox::new(&mut self.ui_state.log_histogram, "Log scale"),
        );
    }
}
