//! Application theme and color definitions.
//!
//! Light and dark palettes with monospace fonts. The palette follows the
//! dark/light mode egui starts with.

use eframe::egui::{self, Color32, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};

/// One theme's base colors.
#[derive(Clone, Copy)]
struct Palette {
    bg_dark: Color32,
    bg_panel: Color32,
    bg_header: Color32,
    bg_input: Color32,
    border: Color32,
    border_light: Color32,
    text_primary: Color32,
    text_muted: Color32,
    text_dim: Color32,
    button_hover: Color32,
}

const DARK: Palette = Palette {
    bg_dark: Color32::from_rgb(0x1a, 0x1a, 0x1a),
    bg_panel: Color32::from_rgb(0x1f, 0x1f, 0x1f),
    bg_header: Color32::from_rgb(0x25, 0x25, 0x25),
    bg_input: Color32::from_rgb(0x2a, 0x2a, 0x2a),
    border: Color32::from_rgb(0x33, 0x33, 0x33),
    border_light: Color32::from_rgb(0x44, 0x44, 0x44),
    text_primary: Color32::from_rgb(0xe0, 0xe0, 0xe0),
    text_muted: Color32::from_rgb(0x88, 0x88, 0x88),
    text_dim: Color32::from_rgb(0x66, 0x66, 0x66),
    button_hover: Color32::from_rgb(0x3a, 0x3a, 0x3a),
};

const LIGHT: Palette = Palette {
    bg_dark: Color32::from_rgb(0xf5, 0xf5, 0xf5),
    bg_panel: Color32::from_rgb(0xff, 0xff, 0xff),
    bg_header: Color32::from_rgb(0xfa, 0xfa, 0xfa),
    bg_input: Color32::from_rgb(0xf0, 0xf0, 0xf0),
    border: Color32::from_rgb(0xd0, 0xd0, 0xd0),
    border_light: Color32::from_rgb(0xc0, 0xc0, 0xc0),
    text_primary: Color32::from_rgb(0x1a, 0x1a, 0x1a),
    text_muted: Color32::from_rgb(0x66, 0x66, 0x66),
    text_dim: Color32::from_rgb(0x88, 0x88, 0x88),
    button_hover: Color32::from_rgb(0xdd, 0xdd, 0xdd),
};

impl Palette {
    fn for_mode(is_dark: bool) -> Self {
        if is_dark {
            DARK
        } else {
            LIGHT
        }
    }
}

/// Shared accent colors (same for both themes).
pub mod accent {
    use eframe::egui::Color32;

    pub const BLUE: Color32 = Color32::from_rgb(0x4a, 0x9e, 0xff);
    pub const GREEN: Color32 = Color32::from_rgb(0x10, 0xb9, 0x81);
    pub const RED: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
}

/// Theme-aware colors used by the panels.
#[derive(Clone, Copy)]
pub struct ThemeColors {
    pub bg_panel: Color32,
    pub bg_header: Color32,
    pub border: Color32,
    pub text_primary: Color32,
    pub text_dim: Color32,
    pub error: Color32,
}

impl ThemeColors {
    pub fn from_ctx(ctx: &egui::Context) -> Self {
        Self::from_dark_mode(ctx.style().visuals.dark_mode)
    }

    pub fn from_ui(ui: &egui::Ui) -> Self {
        Self::from_dark_mode(ui.visuals().dark_mode)
    }

    fn from_dark_mode(is_dark: bool) -> Self {
        let p = Palette::for_mode(is_dark);
        Self {
            bg_panel: p.bg_panel,
            bg_header: p.bg_header,
            border: p.border,
            text_primary: p.text_primary,
            text_dim: p.text_dim,
            error: accent::RED,
        }
    }
}

/// Configure style based on current visuals (dark/light mode).
pub fn configure_style(ctx: &egui::Context) {
    let is_dark = ctx.style().visuals.dark_mode;
    ctx.set_visuals(build_visuals(is_dark));
    configure_fonts_and_spacing(ctx);
}

fn build_visuals(is_dark: bool) -> Visuals {
    let p = Palette::for_mode(is_dark);
    let mut visuals = if is_dark {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    visuals.window_fill = p.bg_panel;
    visuals.panel_fill = p.bg_panel;
    visuals.faint_bg_color = p.bg_dark;
    visuals.extreme_bg_color = p.bg_input;

    let rounding = Rounding::same(4.0);
    let widgets = &mut visuals.widgets;
    widgets.noninteractive.bg_fill = p.bg_input;
    widgets.noninteractive.fg_stroke = Stroke::new(1.0, p.text_muted);
    widgets.noninteractive.bg_stroke = Stroke::new(1.0, p.border);

    widgets.inactive.bg_fill = p.bg_input;
    widgets.inactive.fg_stroke = Stroke::new(1.0, p.text_primary);
    widgets.inactive.bg_stroke = Stroke::new(1.0, p.border_light);

    widgets.hovered.bg_fill = p.button_hover;
    widgets.hovered.fg_stroke = Stroke::new(1.0, p.text_primary);
    widgets.hovered.bg_stroke = Stroke::new(1.0, accent::BLUE);

    widgets.active.bg_fill = accent::BLUE;
    widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);
    widgets.active.bg_stroke = Stroke::new(1.0, accent::BLUE);

    widgets.open.bg_fill = p.bg_input;
    widgets.open.fg_stroke = Stroke::new(1.0, p.text_primary);
    widgets.open.bg_stroke = Stroke::new(1.0, p.border_light);

    for w in [
        &mut widgets.noninteractive,
        &mut widgets.inactive,
        &mut widgets.hovered,
        &mut widgets.active,
        &mut widgets.open,
    ] {
        w.rounding = rounding;
    }

    let selection_alpha = if is_dark { 0.3 } else { 0.2 };
    visuals.selection.bg_fill = accent::BLUE.gamma_multiply(selection_alpha);
    visuals.selection.stroke = Stroke::new(1.0, accent::BLUE);

    visuals
}

/// Configure fonts and spacing (theme-independent).
fn configure_fonts_and_spacing(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    // Monospace everywhere so pixel readouts line up
    style.text_styles = [
        (TextStyle::Small, FontId::new(10.0, FontFamily::Monospace)),
        (TextStyle::Body, FontId::new(12.0, FontFamily::Monospace)),
        (TextStyle::Button, FontId::new(12.0, FontFamily::Monospace)),
        (TextStyle::Heading, FontId::new(14.0, FontFamily::Monospace)),
        (
            TextStyle::Monospace,
            FontId::new(12.0, FontFamily::Monospace),
        ),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);

    ctx.set_style(style);
}

/// Create a form label.
pub fn form_label(text: &str) -> egui::RichText {
    egui::RichText::new(text.to_uppercase()).size(10.0)
}

/// Create a stat label (left column).
pub fn stat_label(text: &str) -> egui::RichText {
    egui::RichText::new(text).size(11.0).weak()
}

/// Create a stat value (right column).
pub fn stat_value(text: &str) -> egui::RichText {
    egui::RichText::new(text).size(11.0)
}

/// Create a highlighted stat value (the probed pixel value).
pub fn stat_value_highlight(text: &str) -> egui::RichText {
    egui::RichText::new(text)
        .size(11.0)
        .color(accent::GREEN)
        .strong()
}
