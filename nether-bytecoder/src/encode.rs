//! Slice encoders
//!
//! Every encoder returns a fresh buffer of exactly `WIDTH * values.len()`
//! bytes, elements in input order, no padding. An empty slice gives an empty
//! buffer.

use bytemuck::Pod;
use glam::{Vec2, Vec3, Vec4};

use crate::byte_order::ByteOrder;
use crate::color::Nrgba;
use crate::element::{PackedElement, Vec4Components, encoded_len, write_vec4_components};

/// Encode any packable slice into a new buffer.
pub fn encode_slice<T: PackedElement>(order: ByteOrder, values: &[T]) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len::<T>(values.len()));
    encode_into(order, values, &mut out);
    out
}

/// Append the encoding of `values` to `out`, keeping its existing contents.
pub fn encode_into<T: PackedElement>(order: ByteOrder, values: &[T], out: &mut Vec<u8>) {
    let start = out.len();
    out.reserve(encoded_len::<T>(values.len()));
    for value in values {
        value.write_bytes(order, out);
    }
    trace_encoded::<T>(order, values.len(), out.len() - start);
    debug_assert_eq!(out.len() - start, encoded_len::<T>(values.len()));
}

/// Scalar slices whose in-memory layout already is the wire layout when the
/// requested order is native.
fn encode_scalars<T: PackedElement + Pod>(order: ByteOrder, values: &[T]) -> Vec<u8> {
    if order.is_native() {
        let out = bytemuck::cast_slice::<T, u8>(values).to_vec();
        trace_encoded::<T>(order, values.len(), out.len());
        out
    } else {
        encode_slice(order, values)
    }
}

fn trace_encoded<T>(order: ByteOrder, count: usize, bytes: usize) {
    tracing::trace!(
        element = std::any::type_name::<T>(),
        count,
        bytes,
        %order,
        "encoded slice"
    );
}

// ============================================================================
// Scalars
// ============================================================================

/// Encode f32 values as their raw IEEE 754 bits (4 bytes each).
pub fn encode_float32(order: ByteOrder, values: &[f32]) -> Vec<u8> {
    encode_scalars(order, values)
}

/// Encode u32 values (4 bytes each).
pub fn encode_uint32(order: ByteOrder, values: &[u32]) -> Vec<u8> {
    encode_scalars(order, values)
}

/// Encode u16 values (2 bytes each).
pub fn encode_uint16(order: ByteOrder, values: &[u16]) -> Vec<u8> {
    encode_scalars(order, values)
}

// ============================================================================
// Vectors
// ============================================================================

/// Encode 2D vectors as x, y (8 bytes each).
pub fn encode_vec2(order: ByteOrder, values: &[Vec2]) -> Vec<u8> {
    encode_slice(order, values)
}

/// Encode 3D vectors as x, y, z (12 bytes each).
pub fn encode_vec3(order: ByteOrder, values: &[Vec3]) -> Vec<u8> {
    encode_slice(order, values)
}

/// Encode 4D vectors as x, y, z, w (16 bytes each).
///
/// Accepts anything exposing [`Vec4Components`], not just `glam::Vec4`.
pub fn encode_vec4<V: Vec4Components>(order: ByteOrder, values: &[V]) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len::<Vec4>(values.len()));
    for v in values {
        write_vec4_components(order, v, &mut out);
    }
    trace_encoded::<V>(order, values.len(), out.len());
    out
}

// ============================================================================
// Colors
// ============================================================================

/// Encode colors as four normalized f32 (R, G, B, A; 16 bytes each).
///
/// Each channel is divided by 255.0, so 8-bit storage widens to the float
/// layout shaders read.
pub fn encode_color_normalized(order: ByteOrder, values: &[Nrgba]) -> Vec<u8> {
    encode_slice(order, values)
}
