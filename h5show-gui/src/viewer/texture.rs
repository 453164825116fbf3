//! Texture generation for frame display.

use egui::ColorImage;
use h5show_core::{DisplayScale, Frame};

use crate::viewer::Colormap;

/// Render a frame as a color image using the session's fixed levels.
///
/// Image row 0 is frame row 0. Values at or below the lower level map to
/// the first colormap entry, values at or above the upper level to the last.
#[must_use]
pub fn frame_to_image(frame: &Frame, scale: DisplayScale, colormap: Colormap) -> ColorImage {
    let (rows, cols) = frame.dim();
    let lut = colormap.lut();
    let mut pixels = Vec::with_capacity(rows * cols * 4);

    for &value in frame {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let idx = (scale.normalize(value) * 255.0).round() as usize;
        pixels.extend_from_slice(&lut[idx.min(255)]);
    }

    ColorImage::from_rgba_unmultiplied([cols, rows], &pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    #[test]
    fn test_image_dimensions_follow_frame() {
        let frame = Frame::from_elem((3, 7), 1.0);
        let scale = DisplayScale::from_frame(&frame);
        let image = frame_to_image(&frame, scale, Colormap::Grayscale);
        assert_eq!(image.size, [7, 3]);
        assert_eq!(image.pixels.len(), 21);
    }

    #[test]
    fn test_fixed_levels_saturate() {
        // Mean 1 => level ceiling 25.
        let reference = Frame::from_elem((2, 2), 1.0);
        let scale = DisplayScale::from_frame(&reference);

        let mut frame = Frame::zeros((1, 3));
        frame[[0, 1]] = 12.5;
        frame[[0, 2]] = 1000.0;
        let image = frame_to_image(&frame, scale, Colormap::Grayscale);

        assert_eq!(image.pixels[0], Color32::from_rgb(0, 0, 0));
        assert_eq!(image.pixels[1], Color32::from_rgb(128, 128, 128));
        assert_eq!(image.pixels[2], Color32::from_rgb(255, 255, 255));
    }

    #[test]
    fn test_row_order_preserved() {
        let reference = Frame::from_elem((1, 1), 1.0);
        let scale = DisplayScale::from_frame(&reference);
        let mut frame = Frame::zeros((2, 1));
        frame[[0, 0]] = 25.0;
        let image = frame_to_image(&frame, scale, Colormap::Grayscale);
        assert_eq!(image.pixels[0], Color32::WHITE);
        assert_eq!(image.pixels[1], Color32::BLACK);
    }
}
