//! Image decoder implementation using the image library.
//!
//! Accepts any container the `image` crate can sniff from its header bytes
//! (PNG, JPEG, BMP, TGA, TIFF, WebP, ...) and expands it to 8-bit RGBA.

use tracing::debug;

use crate::deform_map::codec::decoder::PixelDecoder;
use crate::deform_map::codec::types::{ChannelOrder, DecodedPixels};
use crate::deform_map::common::error::{PainterError, Result};

/// Decoder backed by `image::load_from_memory`.
pub struct StandardDecoder;

impl PixelDecoder for StandardDecoder {
    /// Decodes `data` and converts every source color type to straight RGBA8.
    ///
    /// Grayscale and RGB sources gain an opaque alpha channel; 16-bit and
    /// float sources are reduced to 8 bits per channel.
    fn decode_pixels(&self, data: &[u8]) -> Result<DecodedPixels> {
        debug!("Decoding image, {} bytes", data.len());

        let format = image::guess_format(data)
            .map_err(|e| PainterError::DecodeError(e.to_string()))?;

        let decoded = image::load_from_memory_with_format(data, format)
            .map_err(|e| PainterError::DecodeError(e.to_string()))?;

        debug!(
            "Decoded {:?} image: {}x{} ({:?})",
            format,
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        let rgba = decoded.into_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(DecodedPixels {
            width,
            height,
            data: rgba.into_raw(),
            order: ChannelOrder::Rgba,
        })
    }
}
