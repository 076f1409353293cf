use crate::deform_map::brush::types::BrushStroke;
use crate::deform_map::common::error::Result;
use crate::deform_map::pixel::PixelBuffer;

pub trait BrushEngine {
    fn apply(&self, buffer: &mut PixelBuffer, stroke: &BrushStroke) -> Result<()>;
}
