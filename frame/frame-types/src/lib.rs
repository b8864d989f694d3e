//! Core geometry types for the frame generator.
//!
//! This crate provides the value types the rest of the workspace is built
//! on:
//!
//! - [`Triangle`] - A triangle with three concrete vertex positions
//! - [`TriangleSoup`] - An ordered, unindexed sequence of triangles
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Representation
//!
//! Meshes here are deliberately *triangle soup*: every triangle carries
//! its own three vertices and no adjacency or shared-vertex topology is
//! tracked. This matches the binary STL output format one-to-one and
//! keeps every builder a pure function from parameters to triangles.
//!
//! # Units and coordinates
//!
//! All coordinates are `f64` millimeters in a right-handed system with Z
//! up. Triangle winding is counter-clockwise when viewed from outside
//! the solid, so the cross-product normal `(v1 - v0) x (v2 - v0)` points
//! outward.
//!
//! # Example
//!
//! ```
//! use frame_types::{Point3, Triangle, TriangleSoup};
//!
//! let mut soup = TriangleSoup::new();
//! soup.push(Triangle::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ));
//!
//! assert_eq!(soup.triangle_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod soup;
mod triangle;

pub use bounds::Aabb;
pub use soup::TriangleSoup;
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
