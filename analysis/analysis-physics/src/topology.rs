//! Watertightness probe over the facet soup.

use analysis_types::{FacetMesh, Point3};
use hashbrown::HashMap;

/// Bit-exact coordinate key.
///
/// A facet soup has no vertex indices, so edges are matched by coordinate
/// identity. STL stores `f32` and the decoder widens losslessly, which
/// makes shared vertices bit-identical across facets in any file a modeler
/// exported; meshes that rely on epsilon-welded seams are reported open,
/// which is the conservative answer for a volume-validity probe.
type VertexKey = (u64, u64, u64);

fn vertex_key(p: &Point3<f64>) -> VertexKey {
    (p.x.to_bits(), p.y.to_bits(), p.z.to_bits())
}

fn edge_key(a: VertexKey, b: VertexKey) -> (VertexKey, VertexKey) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Check whether every edge is shared by exactly two facets.
///
/// This is the closedness test backing the `volume_is_exact` flag: the
/// signed-tetrahedron volume is exact only over a closed surface. It is a
/// counting probe, not mesh validation: winding consistency and
/// self-intersection are not checked, and no repair is attempted.
///
/// Empty meshes and meshes with zero-length edges report `false`.
///
/// # Example
///
/// ```
/// use analysis_types::unit_cube;
/// use analysis_physics::is_watertight;
///
/// let mut cube = unit_cube();
/// assert!(is_watertight(&cube));
///
/// cube.facets.pop();
/// assert!(!is_watertight(&cube));
/// ```
#[must_use]
pub fn is_watertight(mesh: &FacetMesh) -> bool {
    if mesh.is_empty() {
        return false;
    }

    let mut edge_counts: HashMap<(VertexKey, VertexKey), u32> =
        HashMap::with_capacity(mesh.facet_count() * 3);

    for t in mesh.triangles() {
        let keys = [vertex_key(&t.v0), vertex_key(&t.v1), vertex_key(&t.v2)];
        for (a, b) in [(keys[0], keys[1]), (keys[1], keys[2]), (keys[2], keys[0])] {
            if a == b {
                // Zero-length edge: the facet is degenerate, the surface
                // cannot be closed through it.
                return false;
            }
            *edge_counts.entry(edge_key(a, b)).or_insert(0) += 1;
        }
    }

    edge_counts.values().all(|&count| count == 2)
}
