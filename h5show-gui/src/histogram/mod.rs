//! Intensity histogram of the current slice.
//!
//! Bins cover the session's fixed histogram range so bar positions stay
//! comparable from frame to frame.

use h5show_core::{DisplayScale, Frame};

use crate::util::usize_to_f64;

/// Number of bins shown in the histogram window.
pub const HISTOGRAM_BINS: usize = 128;

/// Pixel counts of one slice over `[0, histogram ceiling]`.
#[derive(Debug, Clone)]
pub struct SliceHistogram {
    counts: Vec<u64>,
    max: f64,
    underflow: u64,
    overflow: u64,
}

impl SliceHistogram {
    /// Bin `frame` into `n_bins` equal bins over the scale's histogram range.
    ///
    /// Values below zero or above the ceiling are tallied separately; NaN
    /// pixels are ignored.
    #[must_use]
    pub fn from_frame(frame: &Frame, scale: DisplayScale, n_bins: usize) -> Self {
        let n_bins = n_bins.max(1);
        let (_, max) = scale.histogram_range();
        let mut hist = Self {
            counts: vec![0; n_bins],
            max,
            underflow: 0,
            overflow: 0,
        };
        let bins_per_unit = usize_to_f64(n_bins) / max;

        for &value in frame {
            if value.is_nan() {
                continue;
            }
            if value < 0.0 {
                hist.underflow += 1;
            } else if value > max {
                hist.overflow += 1;
            } else {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let bin = ((value * bins_per_unit) as usize).min(n_bins - 1);
                hist.counts[bin] += 1;
            }
        }
        hist
    }

    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    #[must_use]
    pub fn n_bins(&self) -> usize {
        self.counts.len()
    }

    /// Width of one bin in pixel-value units.
    #[must_use]
    pub fn bin_width(&self) -> f64 {
        self.max / usize_to_f64(self.counts.len())
    }

    /// Center of bin `i` in pixel-value units.
    #[must_use]
    pub fn bin_center(&self, i: usize) -> f64 {
        (usize_to_f64(i) + 0.5) * self.bin_width()
    }

    #[must_use]
    pub fn underflow(&self) -> u64 {
        self.underflow
    }

    #[must_use]
    pub fn overflow(&self) -> u64 {
        self.overflow
    }
}
