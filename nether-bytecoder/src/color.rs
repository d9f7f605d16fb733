//! 8-bit-per-channel RGBA color
//!
//! Colors are stored as four `u8` channels but uploaded as four `f32` values
//! in 0.0-1.0, the layout shaders expect for a `vec4<f32>` color attribute.

use bytemuck::{Pod, Zeroable};
use glam::Vec4;

/// Non-premultiplied RGBA color, 8 bits per channel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Nrgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Nrgba {
    /// Opaque white
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Fully transparent black
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create from a packed color in 0xRRGGBBAA format
    pub const fn from_rgba_u32(color: u32) -> Self {
        Self {
            r: ((color >> 24) & 0xFF) as u8,
            g: ((color >> 16) & 0xFF) as u8,
            b: ((color >> 8) & 0xFF) as u8,
            a: (color & 0xFF) as u8,
        }
    }

    /// Pack into 0xRRGGBBAA format
    pub const fn to_rgba_u32(self) -> u32 {
        ((self.r as u32) << 24) | ((self.g as u32) << 16) | ((self.b as u32) << 8) | self.a as u32
    }

    /// Channels divided by 255.0, in R, G, B, A order
    #[inline]
    pub fn to_normalized(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

impl From<[u8; 4]> for Nrgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Nrgba> for [u8; 4] {
    fn from(c: Nrgba) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

impl From<Nrgba> for Vec4 {
    fn from(c: Nrgba) -> Self {
        Vec4::from_array(c.to_normalized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_range() {
        assert_eq!(Nrgba::WHITE.to_normalized(), [1.0; 4]);
        assert_eq!(Nrgba::TRANSPARENT.to_normalized(), [0.0; 4]);
        let c = Nrgba::new(255, 0, 128, 255).to_normalized();
        assert_eq!(c[2], 128.0 / 255.0);
    }

    #[test]
    fn test_rgba_u32_roundtrip() {
        let c = Nrgba::from_rgba_u32(0x11223344);
        assert_eq!(c, Nrgba::new(0x11, 0x22, 0x33, 0x44));
        assert_eq!(c.to_rgba_u32(), 0x11223344);
    }

    #[test]
    fn test_array_conversions() {
        let c = Nrgba::from([1, 2, 3, 4]);
        assert_eq!(<[u8; 4]>::from(c), [1, 2, 3, 4]);
        assert_eq!(bytemuck::bytes_of(&c), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_into_vec4() {
        let v: Vec4 = Nrgba::new(0, 51, 255, 0).into();
        assert_eq!(v, Vec4::new(0.0, 51.0 / 255.0, 1.0, 0.0));
    }
}
