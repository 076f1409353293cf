//! Image codec module
//!
//! This module bridges encoded image bytes and the painter's RGBA pixel
//! buffers, with separate decode and encode primitives.

mod decoder;
mod encoder;
mod image_codec;
mod png_encoder;
mod standard_decoder;
pub mod types;


pub use decoder::PixelDecoder;
pub use encoder::PixelEncoder;
pub use image_codec::ImageCodec;
pub use png_encoder::PngEncoder;
pub use standard_decoder::StandardDecoder;
pub use types::{
    ChannelOrder, CodecConfig, CodecConfigBuilder, DecodedPixels, PngCompression,
    normalize_channel_order,
};
