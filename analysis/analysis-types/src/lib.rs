//! Core geometry types for the OsteoForge analysis engine.
//!
//! This crate provides the vocabulary shared by the STL decoder and the
//! downstream measurement and physics crates:
//!
//! - [`Triangle`] - Three concrete vertex positions with geometric helpers
//! - [`Facet`] - A triangle plus its resolved unit normal
//! - [`FacetMesh`] - The decoder's output: an ordered facet soup
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Layer 0 Crate
//!
//! No engine or UI dependencies. Usable from servers, CLI tools, and the
//! browser WASM module alike.
//!
//! # Units
//!
//! Coordinates are `f64`. STL files store `f32`; the decoder widens them,
//! so values round-trip bit-exactly. Downstream crates treat coordinates as
//! millimeters.
//!
//! # Coordinate System
//!
//! Right-handed. Facet winding is counter-clockwise viewed from outside,
//! so normals point outward by the right-hand rule.
//!
//! # Example
//!
//! ```
//! use analysis_types::{unit_cube, Point3};
//!
//! let cube = unit_cube();
//! assert_eq!(cube.facet_count(), 12);
//!
//! let bounds = cube.bounds();
//! assert!(bounds.contains(&Point3::new(0.5, 0.5, 0.5)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod mesh;
mod triangle;

pub use bounds::Aabb;
pub use mesh::{unit_cube, Facet, FacetMesh};
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
