//! Physics report assembly.

use analysis_materials::{MaterialSpec, StiffnessClass};
use analysis_types::{Aabb, FacetMesh, Point3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::topology::is_watertight;
use crate::volume::{enclosed_volume, surface_area, volumetric_centroid};

/// Cubic millimeters to cubic meters.
const MM3_TO_M3: f64 = 1e-9;

/// Qualitative flex-risk rating for the printed part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FlexRisk {
    /// Compact part or stiff material: deflection is unlikely to matter.
    Low,
    /// Noticeably slender part or compliant material.
    Moderate,
    /// Slender part in a compliant material: expect visible deflection.
    High,
}

impl FlexRisk {
    /// Get a human-readable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

/// Derived physical estimates for one mesh and material pairing.
///
/// Every figure is a deterministic function of the inputs; calling
/// [`analyze`] twice with the same mesh and material produces bit-identical
/// output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhysicsReport {
    /// The material constants used.
    pub material: MaterialSpec,
    /// Approximate enclosed volume in mm³.
    pub volume_mm3: f64,
    /// Estimated mass in grams (volume × density).
    pub mass_g: f64,
    /// Total facet surface area in mm².
    pub surface_area_mm2: f64,
    /// Whether every edge is shared by exactly two facets.
    pub watertight: bool,
    /// Bounding-box aspect ratio (longest / shortest extent); infinite for
    /// flat geometry.
    pub aspect_ratio: f64,
    /// Qualitative flex-risk rating.
    pub flex_risk: FlexRisk,
    /// Mass centroid of the enclosed solid; `None` for flat or empty
    /// geometry.
    pub volumetric_centroid: Option<Point3<f64>>,
}

impl PhysicsReport {
    /// Whether the volume figure is exact rather than a best-effort
    /// approximation.
    ///
    /// The signed-tetrahedron sum is exact precisely when the surface is
    /// closed.
    #[inline]
    #[must_use]
    pub const fn volume_is_exact(&self) -> bool {
        self.watertight
    }

    /// One-line human-readable summary for the host's physics panel.
    ///
    /// # Example
    ///
    /// ```
    /// use analysis_types::unit_cube;
    /// use analysis_materials::Material;
    /// use analysis_physics::analyze;
    ///
    /// let cube = unit_cube();
    /// let report = analyze(&cube, &cube.bounds(), Material::Pla.spec());
    /// let summary = report.summary();
    /// assert!(summary.contains("PLA"));
    /// assert!(summary.contains("flex risk"));
    /// ```
    #[must_use]
    pub fn summary(&self) -> String {
        let volume = if self.volume_is_exact() {
            format!("volume {:.2} mm3", self.volume_mm3)
        } else {
            format!("volume ~{:.2} mm3 (open mesh, approximate)", self.volume_mm3)
        };

        format!(
            "{} part: {}, est. mass {:.2} g, {} material, {} flex risk",
            self.material.material,
            volume,
            self.mass_g,
            self.material.stiffness.as_str(),
            self.flex_risk.as_str()
        )
    }
}

/// Rate flex risk from the stiffness band and the part's slenderness.
///
/// Slender parts (long relative to their thinnest extent) deflect more;
/// stiffer materials push the rating down, compliant ones push it up.
/// A shape heuristic, not a load simulation.
fn flex_risk(stiffness: StiffnessClass, aspect_ratio: f64) -> FlexRisk {
    let slenderness: i8 = if aspect_ratio >= 8.0 {
        2
    } else if aspect_ratio >= 3.0 {
        1
    } else {
        0
    };

    let adjustment: i8 = match stiffness {
        StiffnessClass::Flexible => 1,
        StiffnessClass::Tough => 0,
        StiffnessClass::Rigid | StiffnessClass::HighModulus => -1,
    };

    match (slenderness + adjustment).clamp(0, 2) {
        0 => FlexRisk::Low,
        1 => FlexRisk::Moderate,
        _ => FlexRisk::High,
    }
}

/// Analyze a decoded mesh against a material's constants.
///
/// Pure function: no I/O, no hidden state, bit-identical output for
/// identical inputs. The mesh is treated as millimeters; mass comes out in
/// grams.
///
/// # Example
///
/// ```
/// use analysis_types::unit_cube;
/// use analysis_materials::Material;
/// use analysis_physics::analyze;
///
/// let cube = unit_cube();
/// let report = analyze(&cube, &cube.bounds(), Material::Petg.spec());
///
/// // 1 mm³ of PETG at 1270 kg/m³
/// assert!((report.mass_g - 1.27e-3).abs() < 1e-9);
/// ```
#[must_use]
pub fn analyze(mesh: &FacetMesh, aabb: &Aabb, material: &MaterialSpec) -> PhysicsReport {
    let volume_mm3 = enclosed_volume(mesh);
    let mass_g = volume_mm3 * MM3_TO_M3 * material.density_kg_m3 * 1000.0;
    let watertight = is_watertight(mesh);

    let min_extent = aabb.min_extent();
    let aspect_ratio = if aabb.is_empty() || min_extent <= f64::EPSILON {
        f64::INFINITY
    } else {
        aabb.max_extent() / min_extent
    };

    PhysicsReport {
        material: *material,
        volume_mm3,
        mass_g,
        surface_area_mm2: surface_area(mesh),
        watertight,
        aspect_ratio,
        flex_risk: flex_risk(material.stiffness, aspect_ratio),
        volumetric_centroid: volumetric_centroid(mesh),
    }
}
