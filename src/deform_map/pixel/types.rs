//! Color and channel types shared by the pixel buffer and the brush engine

use bytemuck::{Pod, Zeroable};

/// One 8-bit RGBA pixel, stored in R, G, B, A byte order.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Color4 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color4 {
    pub const BLACK: Color4 = Color4::new(0, 0, 0, 0);
    pub const WHITE: Color4 = Color4::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_array(channels: [u8; 4]) -> Self {
        Self::new(channels[0], channels[1], channels[2], channels[3])
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn channel(self, channel: Channel) -> u8 {
        self.to_array()[channel.index()]
    }

    /// Promotes the pixel into normalized floating point space.
    pub fn to_normalized(self) -> NormalizedColor {
        NormalizedColor::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        )
    }
}

/// Four floating point channels where `1.0` maps to `255`.
///
/// Values outside `[0, 1]` are legal here; they only saturate when the color
/// is quantized back into a [`Color4`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormalizedColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl NormalizedColor {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn from_array(channels: [f32; 4]) -> Self {
        Self::new(channels[0], channels[1], channels[2], channels[3])
    }

    pub fn is_finite(self) -> bool {
        self.to_array().iter().all(|c| c.is_finite())
    }

    /// Stores every channel with the 8-bit saturation rule.
    pub fn quantize(self) -> Color4 {
        Color4::from_array(self.to_array().map(quantize_channel))
    }
}

impl From<Color4> for NormalizedColor {
    fn from(color: Color4) -> Self {
        color.to_normalized()
    }
}

/// Converts one normalized channel to a byte: clamp to `[0, 1]`, scale, round.
///
/// NaN quantizes to 0.
pub fn quantize_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Color channel selector, indexed in R, G, B, A order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    R,
    G,
    B,
    A,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::R, Channel::G, Channel::B, Channel::A];

    pub const fn index(self) -> usize {
        match self {
            Channel::R => 0,
            Channel::G => 1,
            Channel::B => 2,
            Channel::A => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}
