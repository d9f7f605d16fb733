//! Packable element types
//!
//! Each [`PackedElement`] has a fixed byte width and writes itself as a run of
//! 4-byte (or 2-byte) fields in the requested [`ByteOrder`].

use glam::{Vec2, Vec3, Vec4};

use crate::byte_order::ByteOrder;
use crate::color::Nrgba;

/// A value with a fixed-width packed representation.
pub trait PackedElement {
    /// Encoded size in bytes
    const WIDTH: usize;

    /// Append exactly `WIDTH` bytes to `out`.
    fn write_bytes(&self, order: ByteOrder, out: &mut Vec<u8>);
}

/// Buffer length for `count` elements of `T`
#[inline]
pub const fn encoded_len<T: PackedElement>(count: usize) -> usize {
    T::WIDTH * count
}

/// Component access for 4-component float vectors.
///
/// The Vec4 encoder reads x, y, z, w only through these accessors, so vector
/// types without positional indexing can still be packed.
pub trait Vec4Components {
    fn x(&self) -> f32;
    fn y(&self) -> f32;
    fn z(&self) -> f32;
    fn w(&self) -> f32;
}

impl Vec4Components for Vec4 {
    #[inline]
    fn x(&self) -> f32 {
        self.x
    }
    #[inline]
    fn y(&self) -> f32 {
        self.y
    }
    #[inline]
    fn z(&self) -> f32 {
        self.z
    }
    #[inline]
    fn w(&self) -> f32 {
        self.w
    }
}

impl Vec4Components for [f32; 4] {
    #[inline]
    fn x(&self) -> f32 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f32 {
        self[1]
    }
    #[inline]
    fn z(&self) -> f32 {
        self[2]
    }
    #[inline]
    fn w(&self) -> f32 {
        self[3]
    }
}

impl Vec4Components for (f32, f32, f32, f32) {
    #[inline]
    fn x(&self) -> f32 {
        self.0
    }
    #[inline]
    fn y(&self) -> f32 {
        self.1
    }
    #[inline]
    fn z(&self) -> f32 {
        self.2
    }
    #[inline]
    fn w(&self) -> f32 {
        self.3
    }
}

// ============================================================================
// Field Writers
// ============================================================================

#[inline]
pub(crate) fn write_u32(order: ByteOrder, value: u32, out: &mut Vec<u8>) {
    if order.is_little_endian() {
        out.extend_from_slice(&value.to_le_bytes());
    } else {
        out.extend_from_slice(&value.to_be_bytes());
    }
}

#[inline]
pub(crate) fn write_u16(order: ByteOrder, value: u16, out: &mut Vec<u8>) {
    if order.is_little_endian() {
        out.extend_from_slice(&value.to_le_bytes());
    } else {
        out.extend_from_slice(&value.to_be_bytes());
    }
}

/// Bit-cast, not a numeric conversion: NaN payloads and -0.0 survive.
#[inline]
pub(crate) fn write_f32(order: ByteOrder, value: f32, out: &mut Vec<u8>) {
    write_u32(order, value.to_bits(), out);
}

pub(crate) fn write_vec4_components<V: Vec4Components + ?Sized>(
    order: ByteOrder,
    v: &V,
    out: &mut Vec<u8>,
) {
    write_f32(order, v.x(), out);
    write_f32(order, v.y(), out);
    write_f32(order, v.z(), out);
    write_f32(order, v.w(), out);
}

// ============================================================================
// Element Impls
// ============================================================================

impl PackedElement for f32 {
    const WIDTH: usize = 4;

    #[inline]
    fn write_bytes(&self, order: ByteOrder, out: &mut Vec<u8>) {
        write_f32(order, *self, out);
    }
}

impl PackedElement for u32 {
    const WIDTH: usize = 4;

    #[inline]
    fn write_bytes(&self, order: ByteOrder, out: &mut Vec<u8>) {
        write_u32(order, *self, out);
    }
}

impl PackedElement for u16 {
    const WIDTH: usize = 2;

    #[inline]
    fn write_bytes(&self, order: ByteOrder, out: &mut Vec<u8>) {
        write_u16(order, *self, out);
    }
}

impl PackedElement for Vec2 {
    const WIDTH: usize = 8;

    #[inline]
    fn write_bytes(&self, order: ByteOrder, out: &mut Vec<u8>) {
        write_f32(order, self.x, out);
        write_f32(order, self.y, out);
    }
}

impl PackedElement for Vec3 {
    const WIDTH: usize = 12;

    #[inline]
    fn write_bytes(&self, order: ByteOrder, out: &mut Vec<u8>) {
        write_f32(order, self.x, out);
        write_f32(order, self.y, out);
        write_f32(order, self.z, out);
    }
}

impl PackedElement for Vec4 {
    const WIDTH: usize = 16;

    #[inline]
    fn write_bytes(&self, order: ByteOrder, out: &mut Vec<u8>) {
        write_vec4_components(order, self, out);
    }
}

/// Widened to four normalized f32, not copied as four bytes.
impl PackedElement for Nrgba {
    const WIDTH: usize = 16;

    #[inline]
    fn write_bytes(&self, order: ByteOrder, out: &mut Vec<u8>) {
        for channel in self.to_normalized() {
            write_f32(order, channel, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes_of<T: PackedElement>(order: ByteOrder, value: &T) -> Vec<u8> {
        let mut out = Vec::new();
        value.write_bytes(order, &mut out);
        out
    }

    #[test]
    fn test_widths_match_written_bytes() {
        let le = ByteOrder::LittleEndian;
        assert_eq!(bytes_of(le, &1.0f32).len(), f32::WIDTH);
        assert_eq!(bytes_of(le, &1u32).len(), u32::WIDTH);
        assert_eq!(bytes_of(le, &1u16).len(), u16::WIDTH);
        assert_eq!(bytes_of(le, &Vec2::ONE).len(), Vec2::WIDTH);
        assert_eq!(bytes_of(le, &Vec3::ONE).len(), Vec3::WIDTH);
        assert_eq!(bytes_of(le, &Vec4::ONE).len(), Vec4::WIDTH);
        assert_eq!(bytes_of(le, &Nrgba::WHITE).len(), Nrgba::WIDTH);
    }

    #[test]
    fn test_encoded_len() {
        assert_eq!(encoded_len::<u16>(0), 0);
        assert_eq!(encoded_len::<Vec3>(5), 60);
        assert_eq!(encoded_len::<Nrgba>(3), 48);
    }

    #[test]
    fn test_u16_byte_order() {
        assert_eq!(bytes_of(ByteOrder::LittleEndian, &0xABCDu16), [0xCD, 0xAB]);
        assert_eq!(bytes_of(ByteOrder::BigEndian, &0xABCDu16), [0xAB, 0xCD]);
    }

    #[test]
    fn test_f32_is_bit_cast() {
        // 1.0 = 0x3F800000
        assert_eq!(
            bytes_of(ByteOrder::BigEndian, &1.0f32),
            [0x3F, 0x80, 0x00, 0x00]
        );
        assert_eq!(bytes_of(ByteOrder::LittleEndian, &-0.0f32), [0, 0, 0, 0x80]);
    }

    #[test]
    fn test_vec4_accessors_agree() {
        let order = ByteOrder::BigEndian;
        let glam_bytes = bytes_of(order, &Vec4::new(1.0, 2.0, 3.0, 4.0));

        let mut array_bytes = Vec::new();
        write_vec4_components(order, &[1.0f32, 2.0, 3.0, 4.0], &mut array_bytes);
        let mut tuple_bytes = Vec::new();
        write_vec4_components(order, &(1.0f32, 2.0f32, 3.0f32, 4.0f32), &mut tuple_bytes);

        assert_eq!(glam_bytes, array_bytes);
        assert_eq!(glam_bytes, tuple_bytes);
    }
}
