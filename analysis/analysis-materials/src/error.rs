//! Error types for material lookup.

use thiserror::Error;

/// Result type for material lookup.
pub type MaterialResult<T> = Result<T, MaterialError>;

/// Errors that can occur when resolving a material identifier.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MaterialError {
    /// The identifier does not name a supported material.
    #[error("unknown material: {name:?}")]
    UnknownMaterial {
        /// The identifier as supplied by the caller.
        name: String,
    },
}
