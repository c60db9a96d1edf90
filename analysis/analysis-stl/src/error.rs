//! Error types for STL decoding.

use thiserror::Error;

/// Result type for STL decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors that can occur while decoding a binary STL buffer.
///
/// All variants are structural: retrying on the same bytes fails
/// identically, so retry logic belongs to the caller only for transient
/// causes such as re-reading an upload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Buffer is shorter than the 84-byte binary STL preamble.
    #[error("buffer too small for binary STL header: {len} bytes, need 84")]
    TruncatedHeader {
        /// Actual buffer length.
        len: usize,
    },

    /// Buffer ends before the declared number of triangle records.
    #[error("truncated STL body: declared size {expected} bytes, got {actual}")]
    TruncatedBody {
        /// Byte length the declared triangle count requires.
        expected: u64,
        /// Actual buffer length.
        actual: u64,
    },

    /// The buffer is ASCII STL, which this decoder does not parse.
    #[error("ASCII STL is not supported, re-export the model as binary STL")]
    UnsupportedFormat,
}
