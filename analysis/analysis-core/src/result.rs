//! The record returned to the host per analysis call.

use analysis_materials::Material;
use analysis_measure::Dimensions;
use analysis_physics::PhysicsReport;
use analysis_types::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything the host viewer needs from one analysis pass.
///
/// Owned solely by the caller after return; the core keeps no reference
/// to it and no state between calls.
///
/// Both centroids the pipeline can produce are exposed: the bounding-box
/// midpoint ([`AnalysisResult::center`]) for camera framing, and the
/// mass centroid ([`AnalysisResult::volumetric_centroid`]) for physics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisResult {
    /// The material the physics figures were computed against.
    pub material: Material,
    /// Bounding-box measurements.
    pub dimensions: Dimensions,
    /// Material-parameterized physical estimates.
    pub physics: PhysicsReport,
}

impl AnalysisResult {
    /// Bounding-box center, the point to aim the camera at.
    #[inline]
    #[must_use]
    pub const fn center(&self) -> Point3<f64> {
        self.dimensions.center
    }

    /// Mass centroid of the enclosed solid; `None` for flat geometry.
    #[inline]
    #[must_use]
    pub const fn volumetric_centroid(&self) -> Option<Point3<f64>> {
        self.physics.volumetric_centroid
    }

    /// Approximate enclosed volume in mm³.
    #[inline]
    #[must_use]
    pub const fn volume_mm3(&self) -> f64 {
        self.physics.volume_mm3
    }

    /// Estimated mass in grams.
    #[inline]
    #[must_use]
    pub const fn mass_g(&self) -> f64 {
        self.physics.mass_g
    }

    /// One-line physics summary for the host's analysis panel.
    #[must_use]
    pub fn summary(&self) -> String {
        self.physics.summary()
    }
}
