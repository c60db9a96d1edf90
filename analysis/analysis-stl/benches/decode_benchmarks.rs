//! Benchmarks for binary STL decoding.
//!
//! Run with: cargo bench -p analysis-stl
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p analysis-stl -- --save-baseline main
//! 2. After changes: cargo bench -p analysis-stl -- --baseline main

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use analysis_stl::decode_stl;

// =============================================================================
// Synthetic Mesh Generation
// =============================================================================

/// Vertices of an icosahedron, before subdivision.
fn icosahedron() -> (Vec<[f64; 3]>, Vec<[usize; 3]>) {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let a = 1.0;
    let b = 1.0 / phi;

    let mut verts: Vec<[f64; 3]> = vec![
        [0.0, b, -a],
        [b, a, 0.0],
        [-b, a, 0.0],
        [0.0, b, a],
        [0.0, -b, a],
        [-a, 0.0, b],
        [0.0, -b, -a],
        [a, 0.0, -b],
        [a, 0.0, b],
        [-a, 0.0, -b],
        [b, -a, 0.0],
        [-b, -a, 0.0],
    ];
    for v in &mut verts {
        let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        *v = [v[0] / len, v[1] / len, v[2] / len];
    }

    let faces = vec![
        [0, 1, 2],
        [3, 2, 1],
        [3, 4, 5],
        [3, 8, 4],
        [0, 6, 7],
        [0, 9, 6],
        [4, 10, 11],
        [6, 11, 10],
        [2, 5, 9],
        [11, 9, 5],
        [1, 7, 8],
        [10, 8, 7],
        [3, 5, 2],
        [3, 1, 8],
        [0, 2, 9],
        [0, 7, 1],
        [6, 9, 11],
        [6, 10, 7],
        [4, 11, 5],
        [4, 8, 10],
    ];

    (verts, faces)
}

/// Subdivide each face into 4 and project back onto the unit sphere.
fn subdivide(verts: &mut Vec<[f64; 3]>, faces: Vec<[usize; 3]>) -> Vec<[usize; 3]> {
    let mut out = Vec::with_capacity(faces.len() * 4);
    let midpoint = |i: usize, j: usize, verts: &mut Vec<[f64; 3]>| -> usize {
        let (a, b) = (verts[i], verts[j]);
        let mut m = [
            (a[0] + b[0]) / 2.0,
            (a[1] + b[1]) / 2.0,
            (a[2] + b[2]) / 2.0,
        ];
        let len = (m[0] * m[0] + m[1] * m[1] + m[2] * m[2]).sqrt();
        m = [m[0] / len, m[1] / len, m[2] / len];
        verts.push(m);
        verts.len() - 1
    };

    for [i0, i1, i2] in faces {
        let m01 = midpoint(i0, i1, verts);
        let m12 = midpoint(i1, i2, verts);
        let m20 = midpoint(i2, i0, verts);
        out.push([i0, m01, m20]);
        out.push([i1, m12, m01]);
        out.push([i2, m20, m12]);
        out.push([m01, m12, m20]);
    }
    out
}

/// Serialize a sphere mesh as an in-memory binary STL buffer.
fn sphere_stl(subdivisions: u32) -> Vec<u8> {
    let (mut verts, mut faces) = icosahedron();
    for _ in 0..subdivisions {
        faces = subdivide(&mut verts, faces);
    }

    let mut buf = vec![0u8; 80];
    buf.extend_from_slice(&u32::try_from(faces.len()).unwrap().to_le_bytes());
    for [i0, i1, i2] in faces {
        // Normal left zero: the decoder recomputes from winding.
        for _ in 0..3 {
            buf.extend_from_slice(&0.0f32.to_le_bytes());
        }
        for i in [i0, i1, i2] {
            for c in verts[i] {
                buf.extend_from_slice(&(c as f32).to_le_bytes());
            }
        }
        buf.extend_from_slice(&0u16.to_le_bytes());
    }
    buf
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_stl");

    for subdivisions in [2u32, 4, 5] {
        let buf = sphere_stl(subdivisions);
        let facets = (buf.len() - 84) / 50;
        group.throughput(Throughput::Bytes(buf.len() as u64));
        group.bench_function(format!("sphere_{facets}_facets"), |b| {
            b.iter(|| decode_stl(black_box(&buf)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
