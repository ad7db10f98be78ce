//! Error types for lazyq.

use core::fmt;

/// Result type alias for lazyq operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised by terminal operators.
///
/// Lazy composition never fails; these are only produced when a traversal
/// finds fewer elements than the operator needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The sequence had no elements at call time.
    EmptyCollection,
    /// The requested position is not reachable before the end of the sequence.
    IndexOutOfRange {
        index: usize,
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyCollection => {
                write!(f, "Failed to get a value from an empty collection")
            }
            Error::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range for sequence of length {}", index, len)
            }
        }
    }
}

impl core::error::Error for Error {}

impl Error {
    /// Creates an empty collection error.
    pub fn empty_collection() -> Self {
        Error::EmptyCollection
    }

    /// Creates an index out of range error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }

    /// Returns true if this error was caused by an empty sequence.
    pub fn is_empty_collection(&self) -> bool {
        matches!(self, Error::EmptyCollection)
    }
}
