use crate::deform_map::brush::types::BrushStroke;
use crate::deform_map::pixel::{Color4, NormalizedColor};

/// Pixels whose falloff is at or below this value are left untouched.
pub const FALLOFF_CUTOFF: f32 = 0.01;

/// Gaussian weight for a pixel offset `(dx, dy)` from the stroke center.
pub fn gaussian_falloff(dx: f32, dy: f32, sigma: f32) -> f32 {
    let distance = (dx * dx + dy * dy).sqrt();
    (-(distance * distance) / (2.0 * sigma * sigma)).exp()
}

/// Adds the stroke tint scaled by `falloff * power` to `current`.
///
/// The clamp channel is limited to the stroke's clamp range in normalized
/// space; every channel then saturates to `[0, 255]` on quantization.
pub fn blend_pixel(current: Color4, stroke: &BrushStroke, falloff: f32) -> Color4 {
    let base = current.to_normalized().to_array();
    let tint = stroke.color.to_array();
    let clamp_index = stroke.clamp_channel.index();

    let mut out = [0.0f32; 4];
    for (i, value) in out.iter_mut().enumerate() {
        let blended = base[i] + tint[i] * falloff * stroke.power;
        *value = if i == clamp_index {
            blended.clamp(stroke.clamp_min, stroke.clamp_max)
        } else {
            blended
        };
    }

    NormalizedColor::from_array(out).quantize()
}
