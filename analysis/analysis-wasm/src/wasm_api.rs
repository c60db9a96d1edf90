//! WASM entry points.
//!
//! Only compiled for the `wasm32` target. These are the
//! `#[wasm_bindgen]` functions the studio frontend calls after
//! instantiating the module.

use wasm_bindgen::prelude::*;

use crate::response;

/// Initialize the module. Must be called once before any analysis.
///
/// Installs the panic hook so a library bug reports through the browser
/// console instead of an opaque `unreachable` trap. There is no other
/// state to set up: the material table is compiled in, and every call
/// after this is pure.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Analyze an uploaded STL buffer against a material selection.
///
/// Returns a JSON envelope: `{"status":"ok",...}` with the analysis
/// record and summary, or `{"status":"error","kind":...,"message":...}`.
#[wasm_bindgen]
#[must_use]
pub fn analyze(bytes: &[u8], material_id: &str) -> String {
    response::analysis_response_json(bytes, material_id)
}

/// Decode an STL buffer into flat vertex positions for the host renderer.
///
/// Returns a `Float32Array` of `[x, y, z, …]` triples, three vertices per
/// facet in file order; empty when the buffer does not decode.
#[wasm_bindgen]
#[must_use]
pub fn mesh_positions(bytes: &[u8]) -> Vec<f32> {
    response::mesh_positions(bytes)
}
