//! UI rendering modules.
//!
//! - `control_panel`: top status bar and left sidebar with frame and view controls
//! - `main_view`: central panel with the current slice and cursor probe
//! - `histogram_window`: intensity histogram of the current slice
//! - `statistics`: file, scale and cursor readout
//! - `theme`: palettes, fonts and label helpers

mod control_panel;
mod histogram_window;
mod main_view;
mod statistics;
pub(crate) mod theme;
