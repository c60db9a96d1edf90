//! Material identifiers and their physical constants.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MaterialError, MaterialResult};

/// A supported prosthetic material.
///
/// Closed set: the four FDM filaments offered by the studio's material
/// selector plus the carbon-fiber composite offered by the CNC
/// customization step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Material {
    /// Polylactic acid, the default printing filament.
    Pla,
    /// Acrylonitrile butadiene styrene.
    Abs,
    /// Polyethylene terephthalate glycol.
    Petg,
    /// Polyamide (PA12).
    Nylon,
    /// Lightweight carbon-fiber-reinforced polyamide composite.
    CarbonFiber,
}

impl Material {
    /// All supported materials, in table order.
    pub const ALL: [Self; 5] = [
        Self::Pla,
        Self::Abs,
        Self::Petg,
        Self::Nylon,
        Self::CarbonFiber,
    ];

    /// Get the canonical identifier, as the host selector spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pla => "PLA",
            Self::Abs => "ABS",
            Self::Petg => "PETG",
            Self::Nylon => "Nylon",
            Self::CarbonFiber => "CarbonFiber",
        }
    }

    /// Resolve an identifier, case-insensitively.
    ///
    /// Separators (`-`, `_`, spaces) are ignored so `"carbon-fiber"`,
    /// `"Carbon Fiber"`, and `"CARBONFIBER"` all resolve.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::UnknownMaterial`] for anything outside the
    /// supported set. There is no default material.
    pub fn parse(name: &str) -> MaterialResult<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "pla" => Ok(Self::Pla),
            "abs" => Ok(Self::Abs),
            "petg" => Ok(Self::Petg),
            "nylon" => Ok(Self::Nylon),
            "carbonfiber" => Ok(Self::CarbonFiber),
            _ => Err(MaterialError::UnknownMaterial {
                name: name.to_string(),
            }),
        }
    }

    /// Get the physical constants for this material.
    #[must_use]
    pub fn spec(self) -> &'static MaterialSpec {
        &MATERIALS[self as usize]
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Material {
    type Err = MaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Qualitative stiffness rating, ordered from most to least compliant.
///
/// Derived from the elastic modulus band the material sits in; the physics
/// engine combines it with part geometry to rate flex risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StiffnessClass {
    /// Compliant under load (modulus under ~2 GPa).
    Flexible,
    /// Tough with moderate stiffness (~2-3 GPa).
    Tough,
    /// Rigid (~3-5 GPa).
    Rigid,
    /// Fiber-reinforced, high modulus (above ~5 GPa).
    HighModulus,
}

impl StiffnessClass {
    /// Get a human-readable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flexible => "flexible",
            Self::Tough => "tough",
            Self::Rigid => "rigid",
            Self::HighModulus => "high-modulus",
        }
    }
}

/// Physical constants for one material.
///
/// Figures are typical published datasheet values for printed parts, not
/// per-batch measurements: good enough for the preview-grade estimates
/// this engine produces.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaterialSpec {
    /// Which material this row describes.
    pub material: Material,
    /// Density in kg/m³.
    pub density_kg_m3: f64,
    /// Tensile yield strength in MPa.
    pub yield_strength_mpa: f64,
    /// Elastic (Young's) modulus in GPa.
    pub elastic_modulus_gpa: f64,
    /// Qualitative stiffness band.
    pub stiffness: StiffnessClass,
}

/// The process-wide material table. Indexed by `Material` discriminant;
/// initialized at compile time and never mutated.
pub static MATERIALS: [MaterialSpec; 5] = [
    MaterialSpec {
        material: Material::Pla,
        density_kg_m3: 1240.0,
        yield_strength_mpa: 60.0,
        elastic_modulus_gpa: 3.5,
        stiffness: StiffnessClass::Rigid,
    },
    MaterialSpec {
        material: Material::Abs,
        density_kg_m3: 1040.0,
        yield_strength_mpa: 40.0,
        elastic_modulus_gpa: 2.2,
        stiffness: StiffnessClass::Tough,
    },
    MaterialSpec {
        material: Material::Petg,
        density_kg_m3: 1270.0,
        yield_strength_mpa: 50.0,
        elastic_modulus_gpa: 2.1,
        stiffness: StiffnessClass::Tough,
    },
    MaterialSpec {
        material: Material::Nylon,
        density_kg_m3: 1010.0,
        yield_strength_mpa: 48.0,
        elastic_modulus_gpa: 1.8,
        stiffness: StiffnessClass::Flexible,
    },
    MaterialSpec {
        material: Material::CarbonFiber,
        density_kg_m3: 1150.0,
        yield_strength_mpa: 85.0,
        elastic_modulus_gpa: 7.6,
        stiffness: StiffnessClass::HighModulus,
    },
];

/// Resolve a material identifier to its physical constants.
///
/// # Errors
///
/// Returns [`MaterialError::UnknownMaterial`] for identifiers outside the
/// supported set.
///
/// # Example
///
/// ```
/// use analysis_materials::lookup;
///
/// let nylon = lookup("nylon").unwrap();
/// assert!((nylon.density_kg_m3 - 1010.0).abs() < f64::EPSILON);
/// ```
pub fn lookup(name: &str) -> MaterialResult<&'static MaterialSpec> {
    Material::parse(name).map(Material::spec)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn table_rows_match_discriminants() {
        for material in Material::ALL {
            assert_eq!(material.spec().material, material);
        }
    }

    #[test]
    fn lookup_known_materials() {
        assert_eq!(lookup("PLA").unwrap().material, Material::Pla);
        assert_eq!(lookup("abs").unwrap().material, Material::Abs);
        assert_eq!(lookup("PetG").unwrap().material, Material::Petg);
        assert_eq!(lookup("NYLON").unwrap().material, Material::Nylon);
    }

    #[test]
    fn carbon_fiber_aliases() {
        for alias in ["CarbonFiber", "carbon-fiber", "Carbon Fiber", "carbon_fiber"] {
            assert_eq!(lookup(alias).unwrap().material, Material::CarbonFiber);
        }
    }

    #[test]
    fn unknown_material_is_an_error_not_a_default() {
        let err = lookup("unobtainium").unwrap_err();
        assert_eq!(
            err,
            MaterialError::UnknownMaterial {
                name: "unobtainium".to_string()
            }
        );

        assert!(lookup("").is_err());
        assert!(lookup("PL").is_err());
    }

    #[test]
    fn from_str_round_trips_canonical_names() {
        for material in Material::ALL {
            assert_eq!(material.as_str().parse::<Material>().unwrap(), material);
        }
    }

    #[test]
    fn stiffness_classes_are_ordered() {
        assert!(StiffnessClass::Flexible < StiffnessClass::Tough);
        assert!(StiffnessClass::Tough < StiffnessClass::Rigid);
        assert!(StiffnessClass::Rigid < StiffnessClass::HighModulus);
    }

    #[test]
    fn composite_is_stiffest_and_strongest() {
        let cf = Material::CarbonFiber.spec();
        for material in Material::ALL {
            let spec = material.spec();
            assert!(cf.elastic_modulus_gpa >= spec.elastic_modulus_gpa);
            assert!(cf.yield_strength_mpa >= spec.yield_strength_mpa);
        }
    }
}
