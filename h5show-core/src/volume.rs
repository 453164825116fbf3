//! Placeholder volume backing the scroll control.

use std::ops::RangeInclusive;

/// Smallest spatial extent a stack viewer treats as volumetric.
pub const MIN_SPATIAL_EXTENT: usize = 5;

/// Shape-only stand-in for the full `(frames, rows, cols)` cube.
///
/// Its leading dimension equals the frame count so the scroll control spans
/// every frame; the spatial dimensions are the minimum extent. No pixel
/// storage is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderVolume {
    frames: usize,
}

impl PlaceholderVolume {
    #[must_use]
    pub fn new(frames: usize) -> Self {
        Self { frames }
    }

    /// `[frames, MIN_SPATIAL_EXTENT, MIN_SPATIAL_EXTENT]`
    #[must_use]
    pub fn shape(&self) -> [usize; 3] {
        [self.frames, MIN_SPATIAL_EXTENT, MIN_SPATIAL_EXTENT]
    }

    /// Spatial `(rows, cols)` extent shown before the first real frame.
    #[must_use]
    pub fn spatial_extent(&self) -> (usize, usize) {
        (MIN_SPATIAL_EXTENT, MIN_SPATIAL_EXTENT)
    }

    /// Inclusive range of valid scroll positions.
    #[must_use]
    pub fn scroll_range(&self) -> RangeInclusive<usize> {
        0..=self.frames.saturating_sub(1)
    }

    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames
    }
}
