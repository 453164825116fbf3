//! UI state for panel visibility and view options.

/// UI panel visibility and toggle state.
#[derive(Default)]
pub struct UiState {
    /// Slider position, kept in sync with the session's current index.
    pub frame: usize,
    /// Whether the intensity histogram window is visible.
    pub show_histogram: bool,
    /// Whether to use log scale for the histogram Y-axis.
    pub log_histogram: bool,
}
