//! Interleaved buffer writer
//!
//! Builds one buffer out of mixed element types, e.g. per-vertex
//! position/uv/color records. The bytes are identical to concatenating the
//! matching `encode_*` outputs.

use crate::byte_order::ByteOrder;
use crate::element::{PackedElement, Vec4Components, write_vec4_components};
use crate::encode::encode_into;

/// Appends packed elements to an owned buffer in a fixed byte order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedWriter {
    order: ByteOrder,
    bytes: Vec<u8>,
}

impl PackedWriter {
    pub fn new(order: ByteOrder) -> Self {
        Self {
            order,
            bytes: Vec::new(),
        }
    }

    /// Create with `capacity` bytes preallocated
    pub fn with_capacity(order: ByteOrder, capacity: usize) -> Self {
        Self {
            order,
            bytes: Vec::with_capacity(capacity),
        }
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Bytes written so far
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Append a single element
    pub fn push<T: PackedElement>(&mut self, value: &T) -> &mut Self {
        value.write_bytes(self.order, &mut self.bytes);
        self
    }

    /// Append a slice of elements
    pub fn extend<T: PackedElement>(&mut self, values: &[T]) -> &mut Self {
        encode_into(self.order, values, &mut self.bytes);
        self
    }

    /// Append any 4-component vector through its accessors
    pub fn push_vec4<V: Vec4Components>(&mut self, value: &V) -> &mut Self {
        write_vec4_components(self.order, value, &mut self.bytes);
        self
    }

    /// Consume the writer and return the packed buffer
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }
}
