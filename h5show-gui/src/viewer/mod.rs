//! Visualization modules for frame display.

mod colormap;
mod texture;

pub use colormap::Colormap;
pub use texture::frame_to_image;
