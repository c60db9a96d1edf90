//! Pipeline orchestration.

use analysis_materials::Material;
use analysis_measure::dimensions;
use analysis_physics::analyze;
use analysis_stl::decode_stl;
use tracing::debug;

use crate::error::CoreResult;
use crate::result::AnalysisResult;

/// Run the full analysis pipeline over an uploaded STL buffer.
///
/// Decode, then measure, then resolve the material, then analyze,
/// short-circuiting on the first failure and surfacing the originating
/// error kind unchanged. Decoding runs first, so a malformed buffer fails
/// the same way regardless of the material argument.
///
/// Side-effect free beyond the returned allocation: no I/O, no rendering,
/// no network. The decoded geometry itself is not part of the result; the
/// host feeds the bytes through its own renderer-side loader for display.
///
/// # Errors
///
/// Any [`CoreError`](crate::CoreError) variant, depending on which stage
/// rejects the input.
///
/// # Example
///
/// ```
/// use analysis_core::run;
///
/// // Single right triangle, zero-filled header.
/// let mut buf = vec![0u8; 84];
/// buf[80..84].copy_from_slice(&1u32.to_le_bytes());
/// for c in [0.0f32, 0.0, 1.0, /* normal */
///           0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0 /* vertices */] {
///     buf.extend_from_slice(&c.to_le_bytes());
/// }
/// buf.extend_from_slice(&0u16.to_le_bytes());
///
/// let result = run(&buf, "PLA").unwrap();
/// assert_eq!(result.mass_g(), 0.0);
/// ```
pub fn run(bytes: &[u8], material_id: &str) -> CoreResult<AnalysisResult> {
    let mesh = decode_stl(bytes)?;
    let dims = dimensions(&mesh)?;
    let material = Material::parse(material_id)?;
    let report = analyze(&mesh, &dims.aabb(), material.spec());

    debug!(
        facets = mesh.facet_count(),
        material = %material,
        mass_g = report.mass_g,
        "analysis complete"
    );

    Ok(AnalysisResult {
        material,
        dimensions: dims,
        physics: report,
    })
}
