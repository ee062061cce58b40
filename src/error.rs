//! Error type shared by every steque backend.

/// Errors returned by steque operations.
///
/// A failed operation never changes the steque it was called on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StequeError {
    /// `push` or `enqueue` was handed the absence-of-value sentinel (`None`).
    #[error("cannot insert an absent value")]
    InvalidArgument,
    /// `pop` was called on an empty steque.
    #[error("steque underflow")]
    EmptyContainer,
    /// A removal was attempted through a read-only iterator.
    #[error("iterators over a steque are read-only")]
    UnsupportedOperation,
}
