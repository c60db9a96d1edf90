//! Triangle type for geometric calculations.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangle with concrete vertex positions.
///
/// Winding is **counter-clockwise (CCW) when viewed from the front**
/// (normal points toward viewer).
///
/// # Example
///
/// ```
/// use analysis_types::{Triangle, Point3};
///
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
///
/// // Area of a right triangle with legs 1 and 1
/// assert!((tri.area() - 0.5).abs() < 1e-10);
///
/// // Normal points in +Z direction
/// let normal = tri.normal().unwrap();
/// assert!((normal.z - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// First vertex.
    pub v0: Point3<f64>,
    /// Second vertex.
    pub v1: Point3<f64>,
    /// Third vertex.
    pub v2: Point3<f64>,
}

impl Triangle {
    /// Create a new triangle from three points.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Create a triangle from coordinate arrays.
    ///
    /// # Example
    ///
    /// ```
    /// use analysis_types::Triangle;
    ///
    /// let tri = Triangle::from_arrays(
    ///     [0.0, 0.0, 0.0],
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    /// );
    /// assert!((tri.area() - 0.5).abs() < 1e-10);
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn from_arrays(v0: [f64; 3], v1: [f64; 3], v2: [f64; 3]) -> Self {
        Self {
            v0: Point3::new(v0[0], v0[1], v0[2]),
            v1: Point3::new(v1[0], v1[1], v1[2]),
            v2: Point3::new(v2[0], v2[1], v2[2]),
        }
    }

    /// Compute the (unnormalized) face normal via cross product.
    ///
    /// The direction follows the right-hand rule with CCW winding.
    /// The magnitude equals twice the triangle's area.
    #[inline]
    #[must_use]
    pub fn normal_unnormalized(&self) -> Vector3<f64> {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;
        e1.cross(&e2)
    }

    /// Compute the unit face normal.
    ///
    /// Returns `None` for degenerate triangles (zero area).
    ///
    /// # Example
    ///
    /// ```
    /// use analysis_types::{Triangle, Point3};
    ///
    /// // Collinear points have no normal
    /// let degen = Triangle::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(2.0, 0.0, 0.0),
    /// );
    /// assert!(degen.normal().is_none());
    /// ```
    #[must_use]
    pub fn normal(&self) -> Option<Vector3<f64>> {
        let n = self.normal_unnormalized();
        let len_sq = n.norm_squared();
        if len_sq > f64::EPSILON {
            Some(n / len_sq.sqrt())
        } else {
            None
        }
    }

    /// Compute the area of the triangle.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.normal_unnormalized().norm() * 0.5
    }

    /// Compute the centroid (average of the three vertices).
    #[inline]
    #[must_use]
    pub fn centroid(&self) -> Point3<f64> {
        Point3::new(
            (self.v0.x + self.v1.x + self.v2.x) / 3.0,
            (self.v0.y + self.v1.y + self.v2.y) / 3.0,
            (self.v0.z + self.v1.z + self.v2.z) / 3.0,
        )
    }

    /// Signed volume of the tetrahedron spanned by this triangle and the
    /// origin.
    ///
    /// Summed over a closed, consistently wound surface this yields the
    /// enclosed volume (positive for outward CCW winding), by the divergence
    /// theorem.
    ///
    /// # Example
    ///
    /// ```
    /// use analysis_types::unit_cube;
    ///
    /// let total: f64 = unit_cube()
    ///     .triangles()
    ///     .map(|t| t.signed_volume())
    ///     .sum();
    /// assert!((total - 1.0).abs() < 1e-10);
    /// ```
    #[inline]
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        self.v0.coords.dot(&self.v1.coords.cross(&self.v2.coords)) / 6.0
    }

    /// Get vertices as an array.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> [Point3<f64>; 3] {
        [self.v0, self.v1, self.v2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_normal() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );

        let normal = tri.normal();
        assert!(normal.is_some());
        let n = normal.map_or((0.0, 0.0, 0.0), |n| (n.x, n.y, n.z));
        assert!(n.0.abs() < 1e-10);
        assert!(n.1.abs() < 1e-10);
        assert!((n.2 - 1.0).abs() < 1e-10);
    }

    #[test]
    fn degenerate_triangle_normal() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        );
        assert!(tri.normal().is_none());
    }

    #[test]
    fn triangle_area() {
        // Right triangle with legs 3 and 4
        let tri = Triangle::from_arrays([0.0, 0.0, 0.0], [3.0, 0.0, 0.0], [0.0, 4.0, 0.0]);
        assert!((tri.area() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn triangle_centroid() {
        let tri = Triangle::from_arrays([0.0, 0.0, 0.0], [3.0, 0.0, 0.0], [0.0, 3.0, 0.0]);
        let c = tri.centroid();
        assert!((c.x - 1.0).abs() < 1e-10);
        assert!((c.y - 1.0).abs() < 1e-10);
        assert!(c.z.abs() < 1e-10);
    }

    #[test]
    fn signed_volume_flips_with_winding() {
        let tri = Triangle::from_arrays([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]);
        let flipped = Triangle::new(tri.v0, tri.v2, tri.v1);
        assert!((tri.signed_volume() + flipped.signed_volume()).abs() < 1e-12);
        assert!((tri.signed_volume() - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn flat_triangle_through_origin_has_zero_signed_volume() {
        let tri = Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert!(tri.signed_volume().abs() < 1e-12);
    }
}
