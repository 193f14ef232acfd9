//! Read-only bitmap views handed to the quantizer.

use crate::color::Color;
use crate::error::{BrandError, Result};
use std::path::Path;

const CHANNELS: usize = 4;

/// A borrowed RGBA8 bitmap. The core never mutates it.
#[derive(Debug, Clone, Copy)]
pub struct PixelSample<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> PixelSample<'a> {
    /// Wraps a raw buffer. Dimensions are checked lazily by [`PixelSample::check`],
    /// so callers may hand over whatever an image loader produced.
    #[must_use]
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels implied by the dimensions.
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Verifies that `width * height * 4 == data.len()`.
    ///
    /// # Errors
    /// Returns `InvalidInput` on mismatch or overflow.
    pub fn check(&self) -> Result<()> {
        let expected = (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or_else(|| {
                BrandError::InvalidInput(format!(
                    "bitmap dimensions {}x{} overflow",
                    self.width, self.height
                ))
            })?;
        if expected != self.data.len() {
            return Err(BrandError::InvalidInput(format!(
                "bitmap is {}x{} ({expected} bytes expected) but buffer holds {} bytes",
                self.width,
                self.height,
                self.data.len()
            )));
        }
        Ok(())
    }

    /// Color of the pixel at raster index `index`, alpha discarded.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Option<Color> {
        let start = index.checked_mul(CHANNELS)?;
        let px = self.data.get(start..start + CHANNELS)?;
        Some(Color::rgb(px[0], px[1], px[2]))
    }
}

/// An owned RGBA8 buffer, typically decoded from an image file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedPixels {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl OwnedPixels {
    /// Decodes an image file into RGBA8.
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read, `Image` if it cannot be decoded.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| BrandError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let img = image::load_from_memory(&bytes)?;
        let rgba = img.to_rgba8();
        tracing::debug!(
            path = %path.display(),
            width = rgba.width(),
            height = rgba.height(),
            "decoded design"
        );
        Ok(Self {
            width: rgba.width(),
            height: rgba.height(),
            data: rgba.into_raw(),
        })
    }

    /// Builds an opaque bitmap from colors listed in raster order.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `colors.len() != width * height`.
    pub fn from_colors(width: u32, height: u32, colors: &[Color]) -> Result<Self> {
        if colors.len() != width as usize * height as usize {
            return Err(BrandError::InvalidInput(format!(
                "{} colors supplied for a {width}x{height} bitmap",
                colors.len()
            )));
        }
        let data = colors
            .iter()
            .flat_map(|c| [c.r, c.g, c.b, u8::MAX])
            .collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[must_use]
    pub fn as_sample(&self) -> PixelSample<'_> {
        PixelSample::new(self.width, self.height, &self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_accepts_matching_buffer() {
        let data = vec![0u8; 2 * 3 * 4];
        assert!(PixelSample::new(2, 3, &data).check().is_ok());
    }

    #[test]
    fn check_rejects_short_buffer() {
        let data = vec![0u8; 15];
        let err = PixelSample::new(2, 2, &data).check();
        assert!(matches!(err, Err(BrandError::InvalidInput(_))));
    }

    #[test]
    fn color_at_ignores_alpha() {
        let data = [1, 2, 3, 0, 4, 5, 6, 255];
        let sample = PixelSample::new(2, 1, &data);
        assert_eq!(sample.color_at(1), Some(Color::rgb(4, 5, 6)));
        assert_eq!(sample.color_at(2), None);
    }

    #[test]
    fn from_colors_requires_exact_count() {
        assert!(OwnedPixels::from_colors(2, 2, &[Color::rgb(0, 0, 0)]).is_err());
    }

    #[test]
    fn load_decodes_png() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("tiny.png");
        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([0, 0x66, 0xCC, 255]));
        img.save(&path)?;

        let owned = OwnedPixels::load(&path)?;
        assert_eq!((owned.width, owned.height), (3, 2));
        assert_eq!(owned.as_sample().color_at(5), Some(Color::rgb(0, 0x66, 0xCC)));
        Ok(())
    }
}
