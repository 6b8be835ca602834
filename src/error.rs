//! Error types shared by all structures in the crate.

use thiserror::Error;

/// Error variants for data structure operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An index was provided that is out of the structure's bounds.
    #[error("index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// A removal or peek was attempted on an empty structure.
    #[error("{0} is empty")]
    Empty(&'static str),

    /// A union-find element id outside `[0, len)` was supplied.
    #[error("element id {id} out of range for {len} elements")]
    IdOutOfRange {
        /// The offending id.
        id: usize,
        /// Number of elements the structure was created with.
        len: usize,
    },

    /// An interval whose low endpoint exceeds its high endpoint.
    #[error("invalid interval: low endpoint exceeds high endpoint")]
    InvalidInterval,

    /// A range query with `from > to`.
    #[error("invalid range: from {from} exceeds to {to}")]
    InvalidRange {
        /// Range start (exclusive prefix boundary).
        from: usize,
        /// Range end.
        to: usize,
    },
}

/// A specialized Result type for data structure operations.
pub type Result<T> = std::result::Result<T, Error>;
