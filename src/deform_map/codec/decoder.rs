use crate::deform_map::codec::types::DecodedPixels;
use crate::deform_map::common::error::Result;

pub trait PixelDecoder {
    fn decode_pixels(&self, data: &[u8]) -> Result<DecodedPixels>;
}
