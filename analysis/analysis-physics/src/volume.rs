//! Volume, surface area, and mass centroid from the facet soup.

use analysis_types::{FacetMesh, Point3};

/// Signed totals below this are treated as "no enclosed volume".
const VOLUME_EPSILON: f64 = 1e-12;

/// Sum of signed tetrahedron volumes against the origin.
///
/// Positive for a closed surface with outward CCW winding. The sign
/// carries orientation information, which is why the centroid computation
/// uses this rather than the absolute figure.
#[must_use]
pub fn signed_volume_sum(mesh: &FacetMesh) -> f64 {
    mesh.triangles().map(|t| t.signed_volume()).sum()
}

/// Approximate enclosed volume: `|signed_volume_sum|`.
///
/// Exact for a closed, consistently wound mesh (divergence theorem). For
/// open or inconsistently wound meshes this is a best-effort figure;
/// consult [`is_watertight`](crate::is_watertight), or the
/// `volume_is_exact` flag on the report, before trusting it.
///
/// # Example
///
/// ```
/// use analysis_types::unit_cube;
/// use analysis_physics::enclosed_volume;
///
/// assert!((enclosed_volume(&unit_cube()) - 1.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn enclosed_volume(mesh: &FacetMesh) -> f64 {
    signed_volume_sum(mesh).abs()
}

/// Total surface area of all facets.
#[must_use]
pub fn surface_area(mesh: &FacetMesh) -> f64 {
    mesh.triangles().map(|t| t.area()).sum()
}

/// Volumetric (mass) centroid from the tetrahedron decomposition.
///
/// Each origin-apex tetrahedron contributes its centroid weighted by its
/// signed volume; for a closed mesh the origin terms cancel and the result
/// is the center of mass of the enclosed solid.
///
/// Returns `None` when the signed total is (near) zero: flat or
/// fully-degenerate geometry has no defined mass centroid.
///
/// # Example
///
/// ```
/// use analysis_types::unit_cube;
/// use analysis_physics::volumetric_centroid;
///
/// let c = volumetric_centroid(&unit_cube()).unwrap();
/// assert!((c.x - 0.5).abs() < 1e-10);
/// assert!((c.y - 0.5).abs() < 1e-10);
/// assert!((c.z - 0.5).abs() < 1e-10);
/// ```
#[must_use]
pub fn volumetric_centroid(mesh: &FacetMesh) -> Option<Point3<f64>> {
    let mut total = 0.0;
    let mut weighted = nalgebra::Vector3::zeros();

    for t in mesh.triangles() {
        let sv = t.signed_volume();
        total += sv;
        // Tetrahedron centroid with the fourth vertex at the origin.
        weighted += (t.v0.coords + t.v1.coords + t.v2.coords) / 4.0 * sv;
    }

    if total.abs() < VOLUME_EPSILON {
        return None;
    }
    Some(Point3::from(weighted / total))
}
