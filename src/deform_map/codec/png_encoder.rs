use std::io::Write;

use image::codecs::png::{CompressionType, FilterType, PngEncoder as ImagePngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use tracing::debug;

use crate::deform_map::codec::encoder::PixelEncoder;
use crate::deform_map::codec::types::{CodecConfig, PngCompression};
use crate::deform_map::common::error::{PainterError, Result};
use crate::deform_map::pixel::PixelBuffer;

pub struct PngEncoder;

impl PixelEncoder for PngEncoder {
    fn encode_pixels(&self, buffer: &PixelBuffer, output: &mut dyn Write, config: &CodecConfig) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", buffer.width(), buffer.height());

        let compression = match config.compression {
            PngCompression::Fast => CompressionType::Fast,
            PngCompression::Default => CompressionType::Default,
            PngCompression::Best => CompressionType::Best,
        };

        let encoder = ImagePngEncoder::new_with_quality(output, compression, FilterType::Adaptive);
        encoder
            .write_image(
                buffer.as_bytes(),
                buffer.width(),
                buffer.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| PainterError::EncodeError(e.to_string()))?;

        debug!("PNG encoding complete");
        Ok(())
    }
}
