//! Caller contract violations.

use thiserror::Error;

/// A caller handed the widget something it cannot work with.
///
/// Editing itself never fails: a full buffer, an empty buffer and the edges
/// of the key grid are all silent no-ops. These errors are only raised when a
/// session is bound or a widget is configured.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContractViolation {
    /// The bound buffer has no room at all.
    #[error("buffer capacity must be at least 1")]
    ZeroCapacity,

    /// The existing content leaves no guard slot.
    #[error("content length {len} does not fit a buffer of capacity {capacity}")]
    ContentTooLong { len: usize, capacity: usize },

    /// A NUL-terminated buffer has no terminator.
    #[error("no terminating NUL within {capacity} bytes")]
    Unterminated { capacity: usize },

    /// The keyboard has no rows.
    #[error("keyboard layout has no rows")]
    EmptyLayout,

    /// A keyboard row has no keys.
    #[error("keyboard row {row} has no keys")]
    EmptyRow { row: usize },

    /// The scroll margin swallows the whole window.
    #[error("window width {width} must exceed the scroll margin {margin}")]
    WindowTooNarrow { width: usize, margin: usize },
}
