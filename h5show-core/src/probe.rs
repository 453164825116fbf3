//! Cursor probe: pointer position to pixel value.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Frame;

/// Pixel position and value under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProbeReading {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
    /// Pixel value at `[y, x]`.
    pub value: f64,
}

/// Clamp a view coordinate to a pixel index in `[0, extent - 1]`.
///
/// Fractional coordinates truncate toward zero after clamping; NaN maps to 0.
/// Returns `None` only for an empty axis.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn clamp_to_pixel(coord: f64, extent: usize) -> Option<usize> {
    let max = extent.checked_sub(1)?;
    if coord.is_nan() {
        return Some(0);
    }
    Some(coord.clamp(0.0, max as f64) as usize)
}

/// Read the pixel under view coordinates `(x, y)`, clamping to the frame.
///
/// `x` runs along columns and `y` along rows. Positions outside the frame
/// are clamped to the nearest edge pixel, never rejected.
#[must_use]
pub fn probe(frame: &Frame, x: f64, y: f64) -> Option<ProbeReading> {
    let (rows, cols) = frame.dim();
    let xi = clamp_to_pixel(x, cols)?;
    let yi = clamp_to_pixel(y, rows)?;
    Some(ProbeReading {
        x: xi,
        y: yi,
        value: frame[[yi, xi]],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn ramp(rows: usize, cols: usize) -> Frame {
        Array2::from_shape_fn((rows, cols), |(r, c)| {
            #[allow(clippy::cast_precision_loss)]
            let v = (r * 1000 + c) as f64;
            v
        })
    }

    #[test]
    fn test_probe_inside() {
        let frame = ramp(10, 20);
        let reading = probe(&frame, 7.9, 3.2).unwrap();
        assert_eq!((reading.x, reading.y), (7, 3));
        assert_eq!(reading.value, 3007.0);
    }

    #[test]
    fn test_probe_negative_x_clamps_to_zero() {
        let frame = ramp(100, 100);
        let reading = probe(&frame, -5.0, 3.0).unwrap();
        assert_eq!((reading.x, reading.y), (0, 3));
        assert_eq!(reading.value, 3000.0);
    }

    #[test]
    fn test_probe_far_outside_stays_in_bounds() {
        let frame = ramp(30, 40);
        for &(x, y) in &[
            (-1e12, -1e12),
            (1e12, 1e12),
            (f64::INFINITY, f64::NEG_INFINITY),
            (f64::NAN, 500.0),
            (39.999, 29.999),
            (40.0, 30.0),
        ] {
            let reading = probe(&frame, x, y).unwrap();
            assert!(reading.x <= 39, "x out of bounds for {x}");
            assert!(reading.y <= 29, "y out of bounds for {y}");
        }
        let corner = probe(&frame, 1e6, 1e6).unwrap();
        assert_eq!((corner.x, corner.y), (39, 29));
    }

    #[test]
    fn test_probe_empty_frame() {
        assert!(probe(&Frame::zeros((0, 4)), 1.0, 1.0).is_none());
        assert_eq!(clamp_to_pixel(3.0, 0), None);
    }
}
