//! Axis-aligned bounding box.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box (AABB).
///
/// Defined by minimum and maximum corner points. A box produced from at
/// least one point satisfies `min[i] <= max[i]` on every axis; the
/// [`Aabb::empty`] sentinel inverts that so it can absorb points via
/// [`Aabb::expand_to_include`].
///
/// # Example
///
/// ```
/// use analysis_types::{Aabb, Point3};
///
/// let aabb = Aabb::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(10.0, 10.0, 10.0),
/// );
///
/// assert!(aabb.contains(&Point3::new(5.0, 5.0, 5.0)));
/// assert_eq!(aabb.center(), Point3::new(5.0, 5.0, 5.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner (smallest x, y, z values).
    pub min: Point3<f64>,
    /// Maximum corner (largest x, y, z values).
    pub max: Point3<f64>,
}

impl Aabb {
    /// Create a new AABB from minimum and maximum corners.
    ///
    /// The corners are swapped per-axis if min > max.
    #[must_use]
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self {
            min: Point3::new(min.x.min(max.x), min.y.min(max.y), min.z.min(max.z)),
            max: Point3::new(min.x.max(max.x), min.y.max(max.y), min.z.max(max.z)),
        }
    }

    /// Create an empty (invalid) AABB.
    ///
    /// An empty AABB has min > max, which makes it the identity element for
    /// [`Aabb::expand_to_include`].
    ///
    /// # Example
    ///
    /// ```
    /// use analysis_types::{Aabb, Point3};
    ///
    /// let mut aabb = Aabb::empty();
    /// assert!(aabb.is_empty());
    ///
    /// aabb.expand_to_include(&Point3::new(1.0, 2.0, 3.0));
    /// assert!(!aabb.is_empty());
    /// ```
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Create an AABB from an iterator of points.
    ///
    /// Returns an empty AABB if the iterator is empty.
    #[must_use]
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point3<f64>>) -> Self {
        let mut aabb = Self::empty();
        for point in points {
            aabb.expand_to_include(point);
        }
        aabb
    }

    /// Check if the AABB is empty (has no valid extent).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Get the extents (dimensions) of the AABB: `max - min` per axis.
    #[inline]
    #[must_use]
    pub fn extents(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Get the center (midpoint of min and max corners).
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        Point3::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    /// Get the volume of the box itself.
    ///
    /// Returns 0.0 for empty AABBs. This is the volume of the bounding box,
    /// not of the enclosed mesh.
    #[inline]
    #[must_use]
    pub fn volume(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let e = self.extents();
        e.x * e.y * e.z
    }

    /// Get the length of the longest edge.
    #[inline]
    #[must_use]
    pub fn max_extent(&self) -> f64 {
        let e = self.extents();
        e.x.max(e.y).max(e.z)
    }

    /// Get the length of the shortest edge.
    #[inline]
    #[must_use]
    pub fn min_extent(&self) -> f64 {
        let e = self.extents();
        e.x.min(e.y).min(e.z)
    }

    /// Get the diagonal length of the AABB.
    #[inline]
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        self.extents().norm()
    }

    /// Check if the AABB contains a point.
    ///
    /// Points on the boundary are considered inside.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Expand the AABB to include a point.
    ///
    /// Modifies the AABB in place.
    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}
