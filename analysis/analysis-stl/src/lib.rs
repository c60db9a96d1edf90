//! Binary STL decoding for the OsteoForge analysis engine.
//!
//! Parses the raw bytes of a binary STL upload into a
//! [`FacetMesh`](analysis_types::FacetMesh). The decoder works on an
//! in-memory buffer (the host application owns file reading and network
//! transfer) and never allocates based on the declared triangle count
//! before validating it against the actual buffer length.
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header (ignored, often contains file info)
//! UINT32       – Number of triangles (little-endian)
//! foreach triangle
//!     REAL32[3] – Normal vector (often not accurate)
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (ignored)
//! end
//! ```
//!
//! ASCII STL is deliberately not parsed: it is detected and rejected with
//! [`DecodeError::UnsupportedFormat`].
//!
//! # Example
//!
//! ```
//! use analysis_stl::decode_stl;
//!
//! // 80-byte header + zero triangle count: a valid, empty binary STL
//! let mut buf = vec![0u8; 84];
//! buf[80..84].copy_from_slice(&0u32.to_le_bytes());
//!
//! let mesh = decode_stl(&buf).unwrap();
//! assert!(mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod decode;
mod error;

pub use decode::decode_stl;
pub use error::{DecodeError, DecodeResult};
