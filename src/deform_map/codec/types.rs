//! Codec data and configuration types

/// Byte order of the four channels of each decoded pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
    /// R, G, B, A
    Rgba,
    /// A, R, G, B
    Argb,
}

/// Pixels produced by a decode primitive, before normalization
#[derive(Debug, Clone)]
pub struct DecodedPixels {
    pub width: u32,
    pub height: u32,
    /// Interleaved 8-bit channels in `order`
    pub data: Vec<u8>,
    pub order: ChannelOrder,
}

/// Rewrites every pixel of `data` into R, G, B, A order in place.
pub fn normalize_channel_order(order: ChannelOrder, data: &mut [u8]) {
    match order {
        ChannelOrder::Rgba => {}
        ChannelOrder::Argb => {
            for pixel in data.chunks_exact_mut(4) {
                pixel.rotate_left(1);
            }
        }
    }
}

/// PNG compression levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PngCompression {
    Fast,
    Default,
    Best,
}

/// Configuration for decoding and encoding deformation maps
#[derive(Debug, Clone)]
pub struct CodecConfig {
    pub compression: PngCompression,
    /// Whether to validate decoded image dimensions
    pub validate_dimensions: bool,
    /// Largest accepted width or height when validating
    pub max_dimension: Option<u32>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            compression: PngCompression::Default,
            validate_dimensions: true,
            max_dimension: Some(16384),
        }
    }
}

impl CodecConfig {
    pub fn builder() -> CodecConfigBuilder {
        CodecConfigBuilder::default()
    }
}

/// Builder for CodecConfig
#[derive(Default)]
pub struct CodecConfigBuilder {
    compression: Option<PngCompression>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<u32>>,
}

impl CodecConfigBuilder {
    pub fn compression(mut self, compression: PngCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<u32>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> CodecConfig {
        let default = CodecConfig::default();
        CodecConfig {
            compression: self.compression.unwrap_or(default.compression),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
