/// Errors from turning an external selector into a [`ByteOrder`](crate::ByteOrder).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ByteOrderError {
    #[error("invalid byte order {0:?} (expected big-endian, little-endian or native)")]
    InvalidName(String),

    #[error("invalid byte order tag {0} (expected 0 for little-endian or 1 for big-endian)")]
    InvalidTag(u8),
}
