use std::io::Write;

use tracing::{info, instrument, warn};

use crate::deform_map::codec::decoder::PixelDecoder;
use crate::deform_map::codec::encoder::PixelEncoder;
use crate::deform_map::codec::png_encoder::PngEncoder;
use crate::deform_map::codec::standard_decoder::StandardDecoder;
use crate::deform_map::codec::types::{CodecConfig, normalize_channel_order};
use crate::deform_map::common::error::{PainterError, Result};
use crate::deform_map::pixel::PixelBuffer;

/// Converts between encoded image bytes and RGBA pixel buffers.
pub struct ImageCodec<D: PixelDecoder, E: PixelEncoder> {
    decoder: D,
    encoder: E,
    config: CodecConfig,
}

impl ImageCodec<StandardDecoder, PngEncoder> {
    pub fn new(config: CodecConfig) -> Self {
        Self {
            decoder: StandardDecoder,
            encoder: PngEncoder,
            config,
        }
    }
}

impl Default for ImageCodec<StandardDecoder, PngEncoder> {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}

impl<D: PixelDecoder, E: PixelEncoder> ImageCodec<D, E> {
    pub fn with_custom(decoder: D, encoder: E, config: CodecConfig) -> Self {
        Self {
            decoder,
            encoder,
            config,
        }
    }

    fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(PainterError::InvalidDimension(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!(
                    "Image dimensions {}x{} exceed maximum {}",
                    width, height, max
                );
                return Err(PainterError::InvalidDimension(width, height));
            }
        }

        Ok(())
    }

    /// Decodes `input_data` into a buffer in R, G, B, A order.
    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn decode(&self, input_data: &[u8]) -> Result<PixelBuffer> {
        let mut decoded = {
            let _span = tracing::info_span!("decode_pixels").entered();
            self.decoder.decode_pixels(input_data)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = decoded.width,
                height = decoded.height
            ).entered();
            self.validate_dimensions(decoded.width, decoded.height)?;
        }

        {
            let _span = tracing::info_span!("normalize_channel_order", order = ?decoded.order).entered();
            normalize_channel_order(decoded.order, &mut decoded.data);
        }

        let buffer = PixelBuffer::from_rgba_bytes(decoded.width, decoded.height, decoded.data)?;

        info!(
            width = buffer.width(),
            height = buffer.height(),
            "Decode complete"
        );
        Ok(buffer)
    }

    /// Encodes `buffer` into `output` without touching its channel order.
    #[instrument(skip_all, fields(width = buffer.width(), height = buffer.height()))]
    pub fn encode_to(&self, buffer: &PixelBuffer, output: &mut dyn Write) -> Result<()> {
        let _span = tracing::info_span!("encode_pixels").entered();
        self.encoder.encode_pixels(buffer, output, &self.config)
    }

    pub fn encode(&self, buffer: &PixelBuffer) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.encode_to(buffer, &mut bytes)?;
        Ok(bytes)
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CodecConfig) {
        self.config = config;
    }
}
