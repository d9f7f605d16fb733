//! Nether-Bytecoder: byte-order aware buffer packing
//!
//! Converts slices of floats, vectors, colors and integers into tightly packed
//! byte buffers ready for GPU upload or binary asset files. Every encoder takes
//! an explicit [`ByteOrder`] and produces `WIDTH * count` bytes with no padding.
//!
//! # Element Widths
//!
//! | Encoder | Input | Bytes per element |
//! |---------|-------|-------------------|
//! | [`encode_float32`] | `f32` | 4 |
//! | [`encode_vec2`] | `glam::Vec2` | 8 |
//! | [`encode_vec3`] | `glam::Vec3` | 12 |
//! | [`encode_vec4`] | any [`Vec4Components`] | 16 |
//! | [`encode_color_normalized`] | [`Nrgba`] | 16 (four f32 in 0.0-1.0) |
//! | [`encode_uint32`] | `u32` | 4 |
//! | [`encode_uint16`] | `u16` | 2 |
//!
//! # Usage
//!
//! ```
//! use nether_bytecoder::{ByteOrder, encode_uint32};
//!
//! let bytes = encode_uint32(ByteOrder::BigEndian, &[0x01020304]);
//! assert_eq!(bytes, [0x01, 0x02, 0x03, 0x04]);
//! ```
//!
//! Interleaved vertex data can be built with [`PackedWriter`]:
//!
//! ```
//! use glam::{Vec2, Vec3};
//! use nether_bytecoder::{ByteOrder, Nrgba, PackedWriter};
//!
//! let mut writer = PackedWriter::new(ByteOrder::LittleEndian);
//! writer
//!     .push(&Vec3::new(0.0, 1.0, 0.0))
//!     .push(&Vec2::new(0.5, 0.5))
//!     .push(&Nrgba::new(255, 255, 255, 255));
//! assert_eq!(writer.finish().len(), 12 + 8 + 16);
//! ```

mod byte_order;
mod color;
mod element;
mod encode;
mod error;
mod writer;

pub use byte_order::ByteOrder;
pub use color::Nrgba;
pub use element::{PackedElement, Vec4Components, encoded_len};
pub use encode::{
    encode_color_normalized, encode_float32, encode_into, encode_slice, encode_uint16,
    encode_uint32, encode_vec2, encode_vec3, encode_vec4,
};
pub use error::ByteOrderError;
pub use writer::PackedWriter;
