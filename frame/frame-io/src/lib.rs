//! Binary STL I/O for triangle soup.
//!
//! The on-disk layout is classic binary STL, little-endian throughout:
//!
//! ```text
//! UINT8[80]    - Header: ASCII label, space-padded (truncated if longer)
//! UINT32       - Number of triangles
//! foreach triangle
//!     REAL32[3] - Normal vector (raw cross product, NOT unit length)
//!     REAL32[3] - Vertex 1
//!     REAL32[3] - Vertex 2
//!     REAL32[3] - Vertex 3
//!     UINT16    - Attribute byte count (always 0)
//! end
//! ```
//!
//! A file holding `N` triangles is exactly `84 + 50 * N` bytes.
//!
//! # Unnormalized normals
//!
//! [`write_stl`] emits the raw cross product `(v1 - v0) x (v2 - v0)`
//! for each triangle's normal field. This is a compatibility contract
//! with the consuming toolchain, not an oversight: normalizing would
//! change every emitted byte. Zero-area triangles yield the zero
//! vector, which is valid output.
//!
//! # Example
//!
//! ```no_run
//! use frame_io::{load_stl, save_stl};
//! use frame_types::TriangleSoup;
//!
//! let soup = TriangleSoup::new();
//! save_stl(&soup, "empty.stl", "empty model").unwrap();
//! let back = load_stl("empty.stl").unwrap();
//! assert!(back.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod stl;

pub use error::{IoError, IoResult};
pub use stl::{load_stl, save_stl, write_stl, HEADER_SIZE, TRIANGLE_SIZE};
