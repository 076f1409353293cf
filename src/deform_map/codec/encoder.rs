use std::io::Write;

use crate::deform_map::codec::types::CodecConfig;
use crate::deform_map::common::error::Result;
use crate::deform_map::pixel::PixelBuffer;

pub trait PixelEncoder {
    fn encode_pixels(&self, buffer: &PixelBuffer, output: &mut dyn Write, config: &CodecConfig) -> Result<()>;
}
