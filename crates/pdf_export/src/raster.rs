//! Rasterizer boundary
//!
//! The exporter does not draw worksheet pages itself. It asks a [`Rasterizer`]
//! to capture the surface that shows a page and receives a bitmap back. The
//! surface is shared, so captures happen one page at a time.

use crate::pdf::ImageData;
use std::fmt;

/// Identifies the rendered surface of one worksheet page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub usize);

impl SurfaceId {
    pub fn page_index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "worksheet-{}", self.0)
    }
}

/// Pixel layout of a rendered image, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Gray8,
    Rgb8,
    Rgba8,
}

impl PixelFormat {
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            PixelFormat::Gray8 => 1,
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
        }
    }
}

/// Bitmap captured from a page surface, rows top to bottom
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedImage {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub pixels: Vec<u8>,
}

impl RenderedImage {
    pub fn new(width: u32, height: u32, format: PixelFormat, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            format,
            pixels,
        }
    }

    /// Check dimensions against the pixel buffer
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!("empty image {}x{}", self.width, self.height));
        }
        let expected = (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|n| n.checked_mul(self.format.bytes_per_pixel()))
            .ok_or_else(|| format!("image {}x{} is too large", self.width, self.height))?;
        if self.pixels.len() != expected {
            return Err(format!(
                "pixel buffer holds {} bytes, {}x{} {:?} needs {}",
                self.pixels.len(),
                self.width,
                self.height,
                self.format,
                expected
            ));
        }
        Ok(())
    }

    /// Height over width
    pub fn aspect_ratio(&self) -> f64 {
        self.height as f64 / self.width as f64
    }

    pub(crate) fn to_image_data(&self) -> ImageData {
        match self.format {
            PixelFormat::Gray8 => {
                ImageData::from_raw_gray(self.pixels.clone(), self.width, self.height)
            }
            PixelFormat::Rgb8 => ImageData::from_raw_rgb(self.pixels.clone(), self.width, self.height),
            PixelFormat::Rgba8 => ImageData::from_raw_rgba(&self.pixels, self.width, self.height),
        }
    }
}

/// Captures worksheet page surfaces as bitmaps
#[trait_variant::make(Send)]
pub trait Rasterizer: Send + Sync {
    /// Render the surface, or `None` if it is not available
    async fn rasterize(&self, surface: SurfaceId) -> Option<RenderedImage>;
}
