//! Spatial bounds and dimension extraction for decoded meshes.
//!
//! Computes the axis-aligned bounding box over every facet vertex and the
//! measurements the host viewer needs to frame its camera: extents,
//! diagonal, and the box-midpoint center.
//!
//! The center reported here is the geometric middle of the bounding box,
//! which is what camera framing wants. The mass-weighted centroid, relevant
//! for physics, is computed separately by the physics engine; callers get
//! both rather than one silently standing in for the other.
//!
//! # Example
//!
//! ```
//! use analysis_types::unit_cube;
//! use analysis_measure::dimensions;
//!
//! let dims = dimensions(&unit_cube()).unwrap();
//! assert!((dims.width - 1.0).abs() < 1e-10);
//! assert!((dims.center.x - 0.5).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod dimensions;
mod error;

pub use dimensions::{dimensions, Dimensions};
pub use error::{MeasureError, MeasureResult};
