//! Icon rendering: reference layout -> paint commands -> raster

pub mod layout;
pub mod paint;
pub mod raster;

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::error::{Error, Result};
use raster::Canvas;

/// Below this edge length the scaled glyphs collapse to nothing.
pub const MIN_ICON_SIZE: u32 = 8;
pub const MAX_ICON_SIZE: u32 = 4096;

/// Validated icon edge length in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IconSize(u32);

impl IconSize {
    pub fn new(size: u32) -> Result<Self> {
        if (MIN_ICON_SIZE..=MAX_ICON_SIZE).contains(&size) {
            Ok(IconSize(size))
        } else {
            Err(Error::InvalidSize(size))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for IconSize {
    type Error = Error;

    fn try_from(size: u32) -> Result<Self> {
        IconSize::new(size)
    }
}

impl std::fmt::Display for IconSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// A rendered icon encoded as PNG.
#[derive(Debug, Clone)]
pub struct RenderedIcon {
    pub size: u32,
    pub png_data: Vec<u8>,
}

/// Render the icon at `size` x `size` pixels. Pure function of `size`.
pub fn render(size: u32) -> Result<RgbaImage> {
    let size = IconSize::new(size)?;
    Ok(render_icon(size))
}

pub fn render_icon(size: IconSize) -> RgbaImage {
    let mut canvas = Canvas::new(size.get(), size.get());
    for cmd in layout::layout_icon(size) {
        canvas.fill(&cmd);
    }
    canvas.into_image()
}

/// Render and encode to PNG bytes in memory.
pub fn render_png(size: u32) -> Result<RenderedIcon> {
    let image = render(size)?;
    Ok(RenderedIcon {
        size,
        png_data: encode_png(&image)?,
    })
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_size_rejects_out_of_range_values() {
        assert!(matches!(IconSize::new(0), Err(Error::InvalidSize(0))));
        assert!(matches!(IconSize::new(7), Err(Error::InvalidSize(7))));
        assert!(IconSize::new(MIN_ICON_SIZE).is_ok());
        assert!(IconSize::new(MAX_ICON_SIZE).is_ok());
        assert!(IconSize::try_from(MAX_ICON_SIZE + 1).is_err());
    }

    #[test]
    fn icon_size_display() {
        assert_eq!(IconSize::new(48).unwrap().to_string(), "48x48");
    }

    #[test]
    fn render_png_emits_png_signature() {
        let icon = render_png(32).unwrap();
        assert_eq!(icon.size, 32);
        assert_eq!(&icon.png_data[0..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn off_reference_sizes_still_render() {
        let img = render(100).unwrap();
        assert_eq!(img.dimensions(), (100, 100));
        assert_eq!(img.get_pixel(50, 50)[3], 255);
    }
}
