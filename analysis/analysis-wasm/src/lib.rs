//! Browser bindings for the OsteoForge analysis engine.
//!
//! Compiled to a WASM module and loaded by the studio frontend. The
//! lifecycle is two-phase: the host instantiates the module and calls
//! `init()` once, then calls `analyze` per upload, a pure computation
//! over the byte buffer that is callable any number of times.
//!
//! Results cross the boundary as JSON with a tagged `status` field; error
//! responses carry a stable `kind` string so the frontend can show
//! "file is not a valid STL" and "material not recognized" as different
//! messages. Render geometry is handed off separately via
//! `mesh_positions`, which returns a flat `Float32Array`-compatible vertex
//! list for the host's own scene graph; the core never builds renderer
//! objects.
//!
//! Everything except the `#[wasm_bindgen]` exports is target-independent
//! and unit-tested natively.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod response;

#[cfg(target_arch = "wasm32")]
mod wasm_api;

pub use response::{analysis_response_json, mesh_positions};
