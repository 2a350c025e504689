//! Error types for the reader.
//!
//! An unrecognized line is not an error: it is reported as `false` from
//! [`read_line`](crate::read_line). The only failure is a caller passing no
//! line at all.

use thiserror::Error;

/// Errors returned by the reader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReaderError {
    /// Input was absent rather than an empty string.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
