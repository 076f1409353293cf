//! Row-major RGBA8 pixel store backing the deformation map.

use tracing::debug;

use crate::deform_map::common::error::{PainterError, Result};
use crate::deform_map::pixel::types::Color4;

/// Owns exactly `width * height` pixels, indexed as `y * width + x`.
///
/// The pixel count never changes after construction; a new size means a new
/// buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color4>,
}

impl PixelBuffer {
    /// Creates a buffer with every pixel set to `fill`.
    pub fn new(width: u32, height: u32, fill: Color4) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        debug!("Allocating {}x{} pixel buffer", width, height);

        Ok(Self {
            width,
            height,
            pixels: vec![fill; len],
        })
    }

    /// Builds a buffer from tightly packed RGBA8 bytes.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: Vec<u8>) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        let expected = len * 4;
        if bytes.len() != expected {
            return Err(PainterError::BufferSizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        let pixels = bytes
            .chunks_exact(4)
            .map(|px| Color4::new(px[0], px[1], px[2], px[3]))
            .collect();

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    fn checked_len(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(PainterError::InvalidDimension(width, height));
        }
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(PainterError::InvalidDimension(width, height))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    fn index_of(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(PainterError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u32, y: u32) -> Result<Color4> {
        let index = self.index_of(x, y)?;
        Ok(self.pixels[index])
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color4) -> Result<()> {
        let index = self.index_of(x, y)?;
        self.pixels[index] = color;
        Ok(())
    }

    pub fn pixels(&self) -> &[Color4] {
        &self.pixels
    }

    /// Raw RGBA8 bytes in row-major order, suitable for texture upload or encoding.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, Color4> {
        self.pixels.chunks_exact(self.width as usize)
    }

    /// Mutable view of the rows `start..end`, each `width` pixels long.
    pub(crate) fn row_span_mut(&mut self, start: u32, end: u32) -> &mut [Color4] {
        let width = self.width as usize;
        &mut self.pixels[start as usize * width..end as usize * width]
    }
}
