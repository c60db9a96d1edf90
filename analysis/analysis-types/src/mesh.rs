//! Facet soup mesh, the STL decoder's output representation.

use crate::{Aabb, Point3, Triangle};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangle together with its resolved unit facet normal.
///
/// STL records carry a normal per facet that is frequently unreliable in
/// real files. The decoder resolves it (normalize the stored value, fall
/// back to the winding cross product) and records whether the facet is
/// geometrically degenerate (zero area AND zero stored normal), in which
/// case `normal` stays zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Facet {
    /// Unit facet normal, or zero for degenerate facets.
    pub normal: Vector3<f64>,
    /// Vertex positions.
    pub triangle: Triangle,
    /// True when no normal could be resolved (zero-area facet with a
    /// zero stored normal).
    pub degenerate_normal: bool,
}

impl Facet {
    /// Create a facet from an already-resolved normal.
    #[inline]
    #[must_use]
    pub const fn new(normal: Vector3<f64>, triangle: Triangle, degenerate_normal: bool) -> Self {
        Self {
            normal,
            triangle,
            degenerate_normal,
        }
    }

    /// Create a facet computing the normal from the triangle's winding.
    ///
    /// Zero-area triangles get a zero normal and the degenerate flag.
    ///
    /// # Example
    ///
    /// ```
    /// use analysis_types::{Facet, Triangle};
    ///
    /// let tri = Triangle::from_arrays(
    ///     [0.0, 0.0, 0.0],
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    /// );
    /// let facet = Facet::from_triangle(tri);
    /// assert!(!facet.degenerate_normal);
    /// assert!((facet.normal.z - 1.0).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn from_triangle(triangle: Triangle) -> Self {
        match triangle.normal() {
            Some(normal) => Self::new(normal, triangle, false),
            None => Self::new(Vector3::zeros(), triangle, true),
        }
    }
}

/// An ordered sequence of facets, as decoded from a binary STL file.
///
/// Unlike an indexed mesh there is no shared-vertex topology: each facet
/// owns its three vertex positions, exactly as STL stores them. The
/// declared facet count from the file header is kept alongside; the decoder
/// guarantees `facets.len() == declared_facets as usize`.
///
/// # Example
///
/// ```
/// use analysis_types::{Facet, FacetMesh, Triangle};
///
/// let tri = Triangle::from_arrays(
///     [0.0, 0.0, 0.0],
///     [1.0, 0.0, 0.0],
///     [0.0, 1.0, 0.0],
/// );
/// let mesh = FacetMesh::from_facets(vec![Facet::from_triangle(tri)]);
///
/// assert_eq!(mesh.facet_count(), 1);
/// assert!(!mesh.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FacetMesh {
    /// Facets in file order.
    pub facets: Vec<Facet>,
    /// Triangle count declared by the source header.
    pub declared_facets: u32,
}

impl FacetMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            facets: Vec::new(),
            declared_facets: 0,
        }
    }

    /// Create a mesh with pre-allocated capacity for `declared` facets.
    ///
    /// Callers must validate `declared` against the actual input size
    /// before reserving.
    #[inline]
    #[must_use]
    pub fn with_capacity(declared: u32) -> Self {
        Self {
            facets: Vec::with_capacity(declared as usize),
            declared_facets: declared,
        }
    }

    /// Create a mesh from a facet list, declaring its length.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: facet counts are u32 in STL, larger meshes are unsupported
    pub fn from_facets(facets: Vec<Facet>) -> Self {
        let declared_facets = facets.len() as u32;
        Self {
            facets,
            declared_facets,
        }
    }

    /// Get the number of facets.
    #[inline]
    #[must_use]
    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    /// Check if the mesh has no facets.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Iterate over all triangles.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.facets.iter().map(|f| f.triangle)
    }

    /// Iterate over every vertex of every facet, in file order.
    pub fn vertices(&self) -> impl Iterator<Item = &Point3<f64>> + '_ {
        self.facets.iter().flat_map(|f| {
            [&f.triangle.v0, &f.triangle.v1, &f.triangle.v2]
        })
    }

    /// Compute the axis-aligned bounding box over all facet vertices.
    ///
    /// Returns an empty AABB for an empty mesh.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices())
    }
}

/// Create a unit cube mesh spanning `[0, 1]` on each axis.
///
/// 12 facets, CCW wound with outward normals. Used by tests and examples.
///
/// # Example
///
/// ```
/// use analysis_types::unit_cube;
///
/// let cube = unit_cube();
/// assert_eq!(cube.facet_count(), 12);
/// assert!((cube.bounds().volume() - 1.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn unit_cube() -> FacetMesh {
    let quads: [[[f64; 3]; 4]; 6] = [
        // bottom (z = 0), normal -Z
        [
            [0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
            [1.0, 0.0, 0.0],
        ],
        // top (z = 1), normal +Z
        [
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 1.0],
            [1.0, 1.0, 1.0],
            [0.0, 1.0, 1.0],
        ],
        // front (y = 0), normal -Y
        [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 0.0, 1.0],
            [0.0, 0.0, 1.0],
        ],
        // back (y = 1), normal +Y
        [
            [0.0, 1.0, 0.0],
            [0.0, 1.0, 1.0],
            [1.0, 1.0, 1.0],
            [1.0, 1.0, 0.0],
        ],
        // left (x = 0), normal -X
        [
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 1.0, 1.0],
            [0.0, 1.0, 0.0],
        ],
        // right (x = 1), normal +X
        [
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [1.0, 1.0, 1.0],
            [1.0, 0.0, 1.0],
        ],
    ];

    let mut facets = Vec::with_capacity(12);
    for quad in &quads {
        facets.push(Facet::from_triangle(Triangle::from_arrays(
            quad[0], quad[1], quad[2],
        )));
        facets.push(Facet::from_triangle(Triangle::from_arrays(
            quad[0], quad[2], quad[3],
        )));
    }
    FacetMesh::from_facets(facets)
}
