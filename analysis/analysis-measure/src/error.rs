//! Error types for measurement operations.

use thiserror::Error;

/// Result type alias for measurement operations.
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Errors that can occur during measurement operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeasureError {
    /// Input mesh has no facets: no bounding box is defined.
    #[error("mesh has no facets, no bounding box is defined")]
    EmptyMesh,
}
