//! JSON response envelope and render-geometry export.

use analysis_core::{run, AnalysisResult};
use serde::Serialize;

/// What the frontend receives from one `analyze` call.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum AnalysisResponse {
    /// Analysis succeeded.
    Ok {
        /// The full analysis record.
        result: AnalysisResult,
        /// Pre-rendered one-line summary for the physics panel.
        summary: String,
    },
    /// Analysis failed; `kind` is stable and machine-routable.
    Error {
        /// Stable error class (`truncated-header`, `truncated-body`,
        /// `unsupported-format`, `empty-mesh`, `unknown-material`).
        kind: &'static str,
        /// Human-readable description.
        message: String,
    },
}

/// Run the analysis pipeline and serialize the outcome to JSON.
///
/// Never panics and never returns invalid JSON: a (should-be-impossible)
/// serialization failure degrades to a literal error envelope.
///
/// # Example
///
/// ```
/// use analysis_wasm::analysis_response_json;
///
/// let json = analysis_response_json(&[0u8; 10], "PLA");
/// assert!(json.contains(r#""status":"error""#));
/// assert!(json.contains("truncated-header"));
/// ```
#[must_use]
pub fn analysis_response_json(bytes: &[u8], material_id: &str) -> String {
    let response = match run(bytes, material_id) {
        Ok(result) => {
            let summary = result.summary();
            AnalysisResponse::Ok { result, summary }
        }
        Err(err) => AnalysisResponse::Error {
            kind: err.kind(),
            message: err.to_string(),
        },
    };

    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(r#"{{"status":"error","kind":"serialization","message":"{e}"}}"#)
    })
}

/// Decode a buffer and flatten its triangle soup into `[x, y, z, …]`
/// vertex positions for the host's scene graph.
///
/// Returns an empty vector for undecodable buffers. The host is expected
/// to have routed the error from `analyze` already; this accessor is the
/// geometry hand-off, not a second error channel.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
// Truncation: f64 to f32 is intentional, render geometry is f32
pub fn mesh_positions(bytes: &[u8]) -> Vec<f32> {
    let Ok(mesh) = analysis_core::stl::decode_stl(bytes) else {
        return Vec::new();
    };

    let mut positions = Vec::with_capacity(mesh.facet_count() * 9);
    for v in mesh.vertices() {
        positions.push(v.x as f32);
        positions.push(v.y as f32);
        positions.push(v.z as f32);
    }
    positions
}
