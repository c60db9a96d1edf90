//! Analysis facade for the OsteoForge prosthetic design studio.
//!
//! The single entry point the host application calls: feed it the raw
//! bytes of an uploaded STL file and a material identifier, get back an
//! [`AnalysisResult`] (bounding geometry for camera framing plus a
//! material-parameterized physics read-out) or a typed [`CoreError`]
//! that preserves exactly which stage rejected the input.
//!
//! # Pipeline
//!
//! ```text
//! bytes ── decode ──> FacetMesh ── dimensions ──> Dimensions
//!                          │                          │
//!                          └───── analyze(material) ──┴──> AnalysisResult
//! ```
//!
//! The facade is stateless and performs no I/O; the host owns file
//! reading, the network, and rendering. It is safe to call from many
//! requests concurrently; the only process-wide state is the read-only
//! material table.
//!
//! # Example
//!
//! ```
//! use analysis_core::{run, CoreError};
//!
//! // An empty binary STL is valid for decoding but has no bounding box.
//! let mut buf = vec![0u8; 84];
//! buf[80..84].copy_from_slice(&0u32.to_le_bytes());
//!
//! let err = run(&buf, "PLA").unwrap_err();
//! assert_eq!(err.kind(), "empty-mesh");
//! ```
//!
//! # Module Organization
//!
//! Re-exports every layer so hosts depend on one crate:
//!
//! - [`types`] - `Triangle`, `Facet`, `FacetMesh`, `Aabb`
//! - [`stl`] - binary STL decoding
//! - [`measure`] - bounding-box dimensions
//! - [`materials`] - the material property table
//! - [`physics`] - volume, mass, and flex-risk estimation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod result;
mod run;

pub use error::{CoreError, CoreResult};
pub use result::AnalysisResult;
pub use run::run;

/// Core geometry types: `Triangle`, `Facet`, `FacetMesh`, `Aabb`.
pub use analysis_types as types;

/// Binary STL decoding.
pub use analysis_stl as stl;

/// Bounding-box dimensions and measurements.
pub use analysis_measure as measure;

/// The material property table.
pub use analysis_materials as materials;

/// Volume, mass, and flex-risk estimation.
pub use analysis_physics as physics;
