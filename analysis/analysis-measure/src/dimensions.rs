//! Mesh dimension extraction.

use analysis_types::{Aabb, FacetMesh, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MeasureError, MeasureResult};

/// Result of dimension extraction.
///
/// Contains bounding box information and derived measurements.
///
/// # Example
///
/// ```
/// use analysis_types::unit_cube;
/// use analysis_measure::dimensions;
///
/// let dims = dimensions(&unit_cube()).unwrap();
///
/// assert!((dims.width - 1.0).abs() < 1e-10);
/// assert!((dims.depth - 1.0).abs() < 1e-10);
/// assert!((dims.height - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    /// Bounding box minimum point.
    pub min: Point3<f64>,
    /// Bounding box maximum point.
    pub max: Point3<f64>,
    /// Width (X extent).
    pub width: f64,
    /// Depth (Y extent).
    pub depth: f64,
    /// Height (Z extent).
    pub height: f64,
    /// Diagonal length of the bounding box.
    pub diagonal: f64,
    /// Volume of the bounding box (not of the mesh).
    pub bounding_volume: f64,
    /// Center of the bounding box (midpoint of min and max).
    pub center: Point3<f64>,
}

impl Dimensions {
    /// Extents as a vector: `(width, depth, height)`.
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Vector3::new is not const in nalgebra
    pub fn extents(&self) -> Vector3<f64> {
        Vector3::new(self.width, self.depth, self.height)
    }

    /// Length of the longest axis.
    #[inline]
    #[must_use]
    pub fn max_extent(&self) -> f64 {
        self.width.max(self.depth).max(self.height)
    }

    /// Length of the shortest axis.
    #[inline]
    #[must_use]
    pub fn min_extent(&self) -> f64 {
        self.width.min(self.depth).min(self.height)
    }

    /// Ratio of the longest to the shortest axis.
    ///
    /// Returns `f64::INFINITY` for flat geometry (a zero extent on some
    /// axis), which downstream stress heuristics treat as maximally
    /// slender.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        let min = self.min_extent();
        if min <= f64::EPSILON {
            return f64::INFINITY;
        }
        self.max_extent() / min
    }

    /// The underlying bounding box.
    #[inline]
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.min, self.max)
    }
}

/// Extract bounding-box dimensions from a mesh.
///
/// Sweeps every vertex of every facet, tracking per-axis minima and
/// maxima.
///
/// # Errors
///
/// Returns [`MeasureError::EmptyMesh`] when the mesh has zero facets: an
/// empty mesh has no bounding box, and reporting zeros would be
/// indistinguishable from a real point-sized mesh at the origin.
///
/// # Example
///
/// ```
/// use analysis_types::FacetMesh;
/// use analysis_measure::{dimensions, MeasureError};
///
/// let err = dimensions(&FacetMesh::new()).unwrap_err();
/// assert_eq!(err, MeasureError::EmptyMesh);
/// ```
pub fn dimensions(mesh: &FacetMesh) -> MeasureResult<Dimensions> {
    if mesh.is_empty() {
        return Err(MeasureError::EmptyMesh);
    }

    let aabb = mesh.bounds();
    let extents = aabb.extents();

    Ok(Dimensions {
        min: aabb.min,
        max: aabb.max,
        width: extents.x,
        depth: extents.y,
        height: extents.z,
        diagonal: aabb.diagonal(),
        bounding_volume: aabb.volume(),
        center: aabb.center(),
    })
}
