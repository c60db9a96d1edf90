//! Binary STL buffer decoding.

use analysis_types::{Facet, FacetMesh, Point3, Triangle, Vector3};
use tracing::debug;

use crate::error::{DecodeError, DecodeResult};

/// STL binary header size in bytes, excluding the triangle count.
const HEADER_SIZE: usize = 80;

/// Size of the little-endian triangle count following the header.
const COUNT_SIZE: usize = 4;

/// Size of one triangle record (normal + 3 vertices + attribute count).
const FACET_SIZE: usize = 50;

/// Decode a binary STL byte buffer into a facet mesh.
///
/// The declared triangle count is validated against the actual buffer
/// length before any count-sized allocation, so a hostile count field
/// cannot trigger a large reservation. Trailing bytes beyond the declared
/// records are tolerated.
///
/// # Normal policy
///
/// The stored facet normal is normalized when non-zero. An all-zero stored
/// normal is recomputed from the vertex winding; if the facet also has zero
/// area, the normal stays zero and the facet's `degenerate_normal` flag is
/// set.
///
/// # Errors
///
/// - [`DecodeError::TruncatedHeader`] if the buffer is shorter than 84
///   bytes.
/// - [`DecodeError::UnsupportedFormat`] if the buffer is ASCII STL
///   (`solid` preamble and the binary size invariant does not hold).
/// - [`DecodeError::TruncatedBody`] if the buffer ends before the declared
///   number of records.
///
/// # Example
///
/// ```
/// use analysis_stl::{decode_stl, DecodeError};
///
/// let err = decode_stl(&[0u8; 40]).unwrap_err();
/// assert_eq!(err, DecodeError::TruncatedHeader { len: 40 });
/// ```
pub fn decode_stl(bytes: &[u8]) -> DecodeResult<FacetMesh> {
    if bytes.len() < HEADER_SIZE + COUNT_SIZE {
        return Err(DecodeError::TruncatedHeader { len: bytes.len() });
    }

    let declared = u32::from_le_bytes([
        bytes[HEADER_SIZE],
        bytes[HEADER_SIZE + 1],
        bytes[HEADER_SIZE + 2],
        bytes[HEADER_SIZE + 3],
    ]);

    // Widen before multiplying: the declared count is attacker-controlled
    // and the product overflows 32-bit usize on wasm32.
    let expected = (HEADER_SIZE + COUNT_SIZE) as u64 + u64::from(declared) * FACET_SIZE as u64;
    let actual = bytes.len() as u64;

    if actual < expected {
        if is_ascii_preamble(bytes) {
            return Err(DecodeError::UnsupportedFormat);
        }
        return Err(DecodeError::TruncatedBody { expected, actual });
    }

    if actual > expected {
        debug!(trailing = actual - expected, "ignoring bytes after last facet record");
    }

    let mut mesh = FacetMesh::with_capacity(declared);
    let mut offset = HEADER_SIZE + COUNT_SIZE;

    for _ in 0..declared {
        let record = &bytes[offset..offset + FACET_SIZE];
        let stored = read_vector(&record[0..12]);
        let triangle = Triangle::new(
            read_point(&record[12..24]),
            read_point(&record[24..36]),
            read_point(&record[36..48]),
        );
        // record[48..50] is the attribute byte count: ignored, not validated.
        mesh.facets.push(resolve_facet(stored, triangle));
        offset += FACET_SIZE;
    }

    debug!(facets = mesh.facet_count(), "decoded binary STL");
    Ok(mesh)
}

/// Check for an ASCII STL preamble: `solid` followed by whitespace.
///
/// Only consulted when the binary size invariant already failed: a binary
/// file whose header happens to spell `solid ` but whose declared count
/// matches the buffer length decodes as binary.
fn is_ascii_preamble(bytes: &[u8]) -> bool {
    bytes.len() > 5 && &bytes[0..5] == b"solid" && bytes[5].is_ascii_whitespace()
}

/// Apply the normal policy to one decoded record.
fn resolve_facet(stored: Vector3<f64>, triangle: Triangle) -> Facet {
    let len_sq = stored.norm_squared();
    if len_sq > f64::EPSILON {
        return Facet::new(stored / len_sq.sqrt(), triangle, false);
    }
    Facet::from_triangle(triangle)
}

/// Read a point from 12 bytes (3 little-endian f32s).
fn read_point(buf: &[u8]) -> Point3<f64> {
    let [x, y, z] = read_f32x3(buf);
    Point3::new(f64::from(x), f64::from(y), f64::from(z))
}

/// Read a vector from 12 bytes (3 little-endian f32s).
fn read_vector(buf: &[u8]) -> Vector3<f64> {
    let [x, y, z] = read_f32x3(buf);
    Vector3::new(f64::from(x), f64::from(y), f64::from(z))
}

fn read_f32x3(buf: &[u8]) -> [f32; 3] {
    [
        f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]),
        f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]),
        f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]),
    ]
}
