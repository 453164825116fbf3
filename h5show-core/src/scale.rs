//! Fixed display scaling derived from the first frame.
//!
//! The level and histogram ceilings are computed once per session so the
//! color mapping stays put while scrolling through frames of varying
//! intensity.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Frame;

/// Level ceiling as a multiple of the reference intensity.
pub const LEVEL_FACTOR: f64 = 25.0;

/// Histogram ceiling as a multiple of the reference intensity.
pub const HISTOGRAM_FACTOR: f64 = 30.0;

/// Fixed (level, histogram) ceiling pair. Both ranges start at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayScale {
    level_max: f64,
    histogram_max: f64,
}

impl DisplayScale {
    /// Derive the scale from the mean intensity of `frame`.
    ///
    /// Non-finite pixels are left out of the mean. A frame without a positive
    /// finite mean uses a reference intensity of 1.
    #[must_use]
    pub fn from_frame(frame: &Frame) -> Self {
        let reference = finite_mean(frame)
            .filter(|mean| *mean > 0.0)
            .unwrap_or(1.0);
        Self {
            level_max: reference * LEVEL_FACTOR,
            histogram_max: reference * HISTOGRAM_FACTOR,
        }
    }

    #[must_use]
    pub fn level_max(&self) -> f64 {
        self.level_max
    }

    #[must_use]
    pub fn histogram_max(&self) -> f64 {
        self.histogram_max
    }

    /// Rendering level range `(min, max)`.
    #[must_use]
    pub fn levels(&self) -> (f64, f64) {
        (0.0, self.level_max)
    }

    /// Histogram axis range `(min, max)`.
    #[must_use]
    pub fn histogram_range(&self) -> (f64, f64) {
        (0.0, self.histogram_max)
    }

    /// Map a pixel value into `[0, 1]` against the level range.
    ///
    /// NaN maps to 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn normalize(&self, value: f64) -> f32 {
        if value.is_nan() {
            return 0.0;
        }
        (value / self.level_max).clamp(0.0, 1.0) as f32
    }
}

#[allow(clippy::cast_precision_loss)]
fn finite_mean(frame: &Frame) -> Option<f64> {
    let (sum, count) = frame
        .iter()
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
