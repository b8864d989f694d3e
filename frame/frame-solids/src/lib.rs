//! Parametric solid-primitive builders.
//!
//! Each builder is a pure function from shape parameters to a
//! [`TriangleSoup`](frame_types::TriangleSoup) positioned in world
//! space:
//!
//! - [`cuboid`] - axis-aligned rectangular prism (12 triangles)
//! - [`cylinder`] - capped cylinder (`4 * segments` triangles)
//! - [`arm`] - prism extending from the origin at a planar angle
//! - [`ring`] - extruded annulus (`8 * segments` triangles)
//!
//! All triangles are wound so the derived cross-product normal points
//! outward from the solid. Downstream consumers (slicers in
//! particular) rely on outward normals for solid/void disambiguation,
//! so winding is a correctness contract of every builder, checked per
//! shape in the tests.
//!
//! # No input validation
//!
//! Builders accept any parameters. Non-positive sizes or `segments < 3`
//! produce degenerate (zero-area or self-overlapping) but well-formed
//! triangles, never an error: validation is the caller's concern, and
//! these are geometric functions, not validators.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod arm;
mod cuboid;
mod cylinder;
mod ring;
mod transform;

pub use arm::arm;
pub use cuboid::cuboid;
pub use cylinder::cylinder;
pub use ring::ring;
pub use transform::rotate_z;
