//! Error taxonomy for value construction and component access.

use thiserror::Error;

/// Errors raised by constructors, swizzled access, and checked indexing.
///
/// All conditions are local and synchronous; nothing here wraps I/O or
/// foreign errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeomError {
    /// A sequence constructor received the wrong number of values, or a
    /// swizzle name denotes a component count outside 1..=4.
    #[error("expected {expected} components, got {actual}")]
    InvalidArity { expected: usize, actual: usize },

    /// A swizzled or colorspace write received a value count that does not
    /// match the number of target components.
    #[error("expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A swizzled write names the same storage component twice.
    #[error("component '{0}' set more than once")]
    DuplicateComponent(char),

    /// A swizzle character is outside the alphabet for the value's arity,
    /// or mixes groups with the name's first character.
    #[error("invalid component '{0}'")]
    InvalidComponent(char),

    /// A checked subscript was outside the value's component range.
    #[error("index {index} out of range for {len} components")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for tiamat-geom operations.
pub type Result<T> = std::result::Result<T, GeomError>;
