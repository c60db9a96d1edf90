//! Material-parameterized physical property estimation.
//!
//! Derives preview-grade physical figures from a decoded mesh and a
//! material's constants:
//!
//! - **Enclosed volume** via the signed-tetrahedron sum: exact for
//!   closed, consistently wound meshes, a documented approximation
//!   otherwise (the report carries a validity flag either way)
//! - **Mass** from volume and material density
//! - **Volumetric centroid** from the same tetrahedron decomposition
//! - **Flex risk** from the material's stiffness band and the part's
//!   bounding-box aspect ratio
//!
//! This is deliberately not finite-element analysis: the contract is a
//! deterministic, allocation-light function of (geometry, material
//! constants) that a viewer can run per upload without noticeable cost.
//!
//! # Example
//!
//! ```
//! use analysis_types::unit_cube;
//! use analysis_materials::Material;
//! use analysis_physics::analyze;
//!
//! let cube = unit_cube();
//! let report = analyze(&cube, &cube.bounds(), Material::Pla.spec());
//!
//! assert!(report.watertight);
//! assert!((report.volume_mm3 - 1.0).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod report;
mod topology;
mod volume;

pub use report::{analyze, FlexRisk, PhysicsReport};
pub use topology::is_watertight;
pub use volume::{enclosed_volume, signed_volume_sum, surface_area, volumetric_centroid};
