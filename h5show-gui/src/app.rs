//! Main application state and logic.
//!
//! Contains the `ViewerApp` struct which owns the viewing session and the
//! texture and histogram caches derived from its current slice.

use eframe::egui;
use h5show_core::{ProbeReading, Session, ViewerEvents};
use h5show_io::Hdf5FrameSource;

use crate::histogram::{SliceHistogram, HISTOGRAM_BINS};
use crate::state::UiState;
use crate::util::usize_to_f64;
use crate::viewer::{frame_to_image, Colormap};

/// Main application state.
pub struct ViewerApp {
    /// Frame list, fixed scale and current slice.
    pub(crate) session: Session<Hdf5FrameSource>,
    /// UI display state.
    pub(crate) ui_state: UiState,
    /// Cached texture of the current slice.
    pub(crate) texture: Option<egui::TextureHandle>,
    /// Cached histogram of the current slice.
    pub(crate) histogram: Option<SliceHistogram>,
    /// Current colormap selection.
    pub(crate) colormap: Colormap,
    /// Last cursor probe on the current slice.
    pub(crate) cursor: Option<ProbeReading>,
}

impl ViewerApp {
    pub fn new(session: Session<Hdf5FrameSource>) -> Self {
        let frame = session.current_index();
        Self {
            session,
            ui_state: UiState {
                frame,
                ..UiState::default()
            },
            texture: None,
            histogram: None,
            colormap: Colormap::default(),
            cursor: None,
        }
    }

    /// Show frame `index`, reading it from disk.
    pub fn scroll_to(&mut self, index: usize) {
        if let Err(e) = self.session.on_scroll(usize_to_f64(index)) {
            log::error!("{}: frame {index}: {e}", self.session.name());
        }
        self.ui_state.frame = self.session.current_index();
        self.texture = None;
        self.histogram = None;
        self.cursor = None;
    }

    /// Arrow keys step one frame, Home/End jump to the ends.
    fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.memory(|m| m.focused().is_some()) {
            return;
        }
        let (left, right, home, end) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::Home),
                i.key_pressed(egui::Key::End),
            )
        });

        let current = self.session.current_index();
        let last = self.session.frames().last_index();
        let target = if home {
            0
        } else if end {
            last
        } else if right {
            (current + 1).min(last)
        } else if left {
            current.saturating_sub(1)
        } else {
            return;
        };

        if target != current {
            self.scroll_to(target);
        }
    }

    /// Regenerate texture and histogram if needed.
    pub(crate) fn ensure_texture(&mut self, ctx: &egui::Context) {
        let Some(slice) = self.session.slice() else {
            return;
        };
        let scale = self.session.scale();
        if self.texture.is_none() {
            let img = frame_to_image(slice, scale, self.colormap);
            self.texture = Some(ctx.load_texture("frame", img, egui::TextureOptions::NEAREST));
        }
        if self.histogram.is_none() {
            self.histogram = Some(SliceHistogram::from_frame(slice, scale, HISTOGRAM_BINS));
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);
        self.ensure_texture(ctx);
        self.render_top_panel(ctx);
        self.render_side_panel(ctx);
        self.render_central_panel(ctx);
        self.render_histogram_window(ctx);
    }
}
