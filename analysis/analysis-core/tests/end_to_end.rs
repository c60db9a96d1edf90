//! End-to-end pipeline tests over synthetic STL buffers.
//!
//! These exercise the full facade the way the host application does:
//! bytes in, analysis record or typed error out.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

use analysis_core::{run, CoreError};
use analysis_core::materials::{Material, MaterialError};
use analysis_core::measure::MeasureError;
use analysis_core::physics::FlexRisk;
use analysis_core::stl::DecodeError;
use analysis_core::types::Point3;
use approx::assert_relative_eq;

// =============================================================================
// Synthetic STL Buffers
// =============================================================================

fn push_f32x3(buf: &mut Vec<u8>, v: [f32; 3]) {
    for c in v {
        buf.extend_from_slice(&c.to_le_bytes());
    }
}

/// Assemble a binary STL: zero-filled header, count, one record per facet.
fn binary_stl(facets: &[([f32; 3], [[f32; 3]; 3])]) -> Vec<u8> {
    let mut buf = vec![0u8; 80];
    buf.extend_from_slice(&u32::try_from(facets.len()).unwrap().to_le_bytes());
    for (normal, vertices) in facets {
        push_f32x3(&mut buf, *normal);
        for v in vertices {
            push_f32x3(&mut buf, *v);
        }
        buf.extend_from_slice(&0u16.to_le_bytes());
    }
    buf
}

/// The canonical single-facet fixture: unit right triangle in the XY plane.
fn single_triangle_stl() -> Vec<u8> {
    binary_stl(&[(
        [0.0, 0.0, 1.0],
        [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    )])
}

/// A closed 2×1×1 box with outward CCW winding, normals left to the
/// decoder to recompute.
fn box_stl() -> Vec<u8> {
    let (w, d, h) = (2.0f32, 1.0f32, 1.0f32);
    let quads: [[[f32; 3]; 4]; 6] = [
        [[0.0, 0.0, 0.0], [0.0, d, 0.0], [w, d, 0.0], [w, 0.0, 0.0]],
        [[0.0, 0.0, h], [w, 0.0, h], [w, d, h], [0.0, d, h]],
        [[0.0, 0.0, 0.0], [w, 0.0, 0.0], [w, 0.0, h], [0.0, 0.0, h]],
        [[0.0, d, 0.0], [0.0, d, h], [w, d, h], [w, d, 0.0]],
        [[0.0, 0.0, 0.0], [0.0, 0.0, h], [0.0, d, h], [0.0, d, 0.0]],
        [[w, 0.0, 0.0], [w, d, 0.0], [w, d, h], [w, 0.0, h]],
    ];

    let mut facets = Vec::with_capacity(12);
    for q in &quads {
        facets.push(([0.0, 0.0, 0.0], [q[0], q[1], q[2]]));
        facets.push(([0.0, 0.0, 0.0], [q[0], q[2], q[3]]));
    }
    binary_stl(&facets)
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn single_triangle_analyzes_with_zero_mass() {
    let result = run(&single_triangle_stl(), "PLA").unwrap();

    assert_eq!(result.material, Material::Pla);
    assert_eq!(result.dimensions.min, Point3::new(0.0, 0.0, 0.0));
    assert_eq!(result.dimensions.max, Point3::new(1.0, 1.0, 0.0));
    assert_eq!(result.mass_g(), 0.0);
    assert!(!result.physics.watertight);
    assert!(result.volumetric_centroid().is_none());
}

#[test]
fn truncated_header_regardless_of_material() {
    for material in ["PLA", "Nylon", "unobtainium", ""] {
        let err = run(&[0u8; 83], material).unwrap_err();
        assert_eq!(
            err,
            CoreError::Decode(DecodeError::TruncatedHeader { len: 83 })
        );
    }
}

#[test]
fn truncated_body_surfaces_unchanged() {
    let mut buf = single_triangle_stl();
    buf.truncate(buf.len() - 1);

    let err = run(&buf, "PLA").unwrap_err();
    assert_eq!(err.kind(), "truncated-body");
    match err {
        CoreError::Decode(DecodeError::TruncatedBody { expected, actual }) => {
            assert_eq!(expected, 134);
            assert_eq!(actual, 133);
        }
        other => panic!("expected TruncatedBody, got {other:?}"),
    }
}

#[test]
fn ascii_stl_is_rejected() {
    let text = b"solid part\n  facet normal 0 0 1\n    outer loop\n      vertex 0 0 0\n      vertex 1 0 0\n      vertex 0 1 0\n    endloop\n  endfacet\nendsolid part\n";
    let err = run(text, "PLA").unwrap_err();
    assert_eq!(err, CoreError::Decode(DecodeError::UnsupportedFormat));
}

#[test]
fn empty_mesh_has_no_bounding_box() {
    let buf = binary_stl(&[]);
    let err = run(&buf, "PLA").unwrap_err();
    assert_eq!(err, CoreError::Geometry(MeasureError::EmptyMesh));
}

#[test]
fn unknown_material_is_typed() {
    let err = run(&single_triangle_stl(), "unobtainium").unwrap_err();
    assert_eq!(
        err,
        CoreError::Material(MaterialError::UnknownMaterial {
            name: "unobtainium".to_string()
        })
    );
}

#[test]
fn closed_box_full_report() {
    let result = run(&box_stl(), "PETG").unwrap();

    assert!(result.physics.watertight);
    assert!(result.physics.volume_is_exact());
    assert_relative_eq!(result.volume_mm3(), 2.0, epsilon = 1e-9);
    // 2 mm³ of PETG at 1270 kg/m³.
    assert_relative_eq!(result.mass_g(), 2.54e-3, epsilon = 1e-12);
    assert_relative_eq!(result.dimensions.width, 2.0, epsilon = 1e-9);
    assert_relative_eq!(result.physics.aspect_ratio, 2.0, epsilon = 1e-9);
    assert_eq!(result.physics.flex_risk, FlexRisk::Low);

    let c = result.volumetric_centroid().unwrap();
    assert_relative_eq!(c.x, 1.0, epsilon = 1e-9);
    assert_relative_eq!(c.y, 0.5, epsilon = 1e-9);
    assert_relative_eq!(c.z, 0.5, epsilon = 1e-9);

    // Camera center agrees for a symmetric solid.
    let center = result.center();
    assert_relative_eq!(center.x, 1.0, epsilon = 1e-9);
}

#[test]
fn every_vertex_inside_reported_bounds() {
    let buf = box_stl();
    let mesh = analysis_core::stl::decode_stl(&buf).unwrap();
    let result = run(&buf, "ABS").unwrap();
    let aabb = result.dimensions.aabb();

    for v in mesh.vertices() {
        assert!(aabb.contains(v));
    }
}

#[test]
fn repeat_runs_are_bit_identical() {
    let buf = box_stl();
    let a = run(&buf, "Nylon").unwrap();
    let b = run(&buf, "Nylon").unwrap();

    assert_eq!(a.volume_mm3().to_bits(), b.volume_mm3().to_bits());
    assert_eq!(a.mass_g().to_bits(), b.mass_g().to_bits());
    assert_eq!(a.summary(), b.summary());
    assert_eq!(a, b);
}

#[test]
fn material_choice_changes_only_physics() {
    let buf = box_stl();
    let pla = run(&buf, "PLA").unwrap();
    let cf = run(&buf, "carbon-fiber").unwrap();

    assert_eq!(pla.dimensions, cf.dimensions);
    assert_eq!(pla.volume_mm3().to_bits(), cf.volume_mm3().to_bits());
    assert!(pla.mass_g() > cf.mass_g());
    assert_eq!(cf.material, Material::CarbonFiber);
}
