//! Facade error type.

use analysis_materials::MaterialError;
use analysis_measure::MeasureError;
use analysis_stl::DecodeError;
use thiserror::Error;

/// Result type for the analysis facade.
pub type CoreResult<T> = Result<T, CoreError>;

/// Any failure the analysis pipeline can surface.
///
/// Each variant wraps its source transparently, so the originating kind
/// (decode vs. geometry vs. material) survives unchanged and the host can
/// tell "not a valid STL" apart from "material not recognized" apart from
/// "mesh has no volume".
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The byte buffer is not decodable binary STL.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The decoded mesh has no measurable geometry.
    #[error(transparent)]
    Geometry(#[from] MeasureError),

    /// The material identifier is not in the table.
    #[error(transparent)]
    Material(#[from] MaterialError),
}

impl CoreError {
    /// Stable machine-readable kind, for hosts that route on error class
    /// (the WASM bridge maps these into its JSON envelope).
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Decode(DecodeError::TruncatedHeader { .. }) => "truncated-header",
            Self::Decode(DecodeError::TruncatedBody { .. }) => "truncated-body",
            Self::Decode(DecodeError::UnsupportedFormat) => "unsupported-format",
            Self::Geometry(MeasureError::EmptyMesh) => "empty-mesh",
            Self::Material(MaterialError::UnknownMaterial { .. }) => "unknown-material",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_distinct() {
        let kinds = [
            CoreError::from(DecodeError::TruncatedHeader { len: 0 }).kind(),
            CoreError::from(DecodeError::TruncatedBody {
                expected: 134,
                actual: 84,
            })
            .kind(),
            CoreError::from(DecodeError::UnsupportedFormat).kind(),
            CoreError::from(MeasureError::EmptyMesh).kind(),
            CoreError::from(MaterialError::UnknownMaterial {
                name: "x".to_string(),
            })
            .kind(),
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn transparent_display_preserves_source_message() {
        let err = CoreError::from(DecodeError::TruncatedHeader { len: 83 });
        assert!(format!("{err}").contains("83"));
    }
}
