//! Rotated arm prism.

use crate::cuboid::triangulate_prism;
use crate::transform::rotate_z;
use frame_types::{Point3, TriangleSoup};

/// Build a beam extending outward from `center` at a planar angle.
///
/// The prism is first constructed in local coordinates with one end
/// face centered on the origin and the body extending along +X over
/// `x in [0, length]`, `y in [-width/2, width/2]`,
/// `z in [-height/2, height/2]`. Every vertex is then rotated by
/// `angle_degrees` about the Z axis and translated by `center`.
///
/// A plain box cannot express "a beam from the hub at an arbitrary
/// planar angle" without re-deriving the rotation at every call site;
/// centralizing it here keeps the rotation convention in one place.
///
/// # Example
///
/// ```
/// use frame_solids::arm;
/// use frame_types::Point3;
///
/// let soup = arm(125.0, 25.0, 10.0, 45.0, Point3::new(0.0, 0.0, -5.0));
/// assert_eq!(soup.triangle_count(), 12);
/// ```
#[must_use]
pub fn arm(
    length: f64,
    width: f64,
    height: f64,
    angle_degrees: f64,
    center: Point3<f64>,
) -> TriangleSoup {
    let angle = angle_degrees.to_radians();
    let dy = width / 2.0;
    let dz = height / 2.0;

    let local = [
        Point3::new(0.0, -dy, -dz),
        Point3::new(length, -dy, -dz),
        Point3::new(length, dy, -dz),
        Point3::new(0.0, dy, -dz),
        Point3::new(0.0, -dy, dz),
        Point3::new(length, -dy, dz),
        Point3::new(length, dy, dz),
        Point3::new(0.0, dy, dz),
    ];

    let corners = local.map(|p| rotate_z(p, angle) + center.coords);

    triangulate_prism(&corners)
}
