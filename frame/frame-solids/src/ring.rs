//! Extruded annulus (prop guard).

use frame_types::{Point3, Triangle, TriangleSoup};
use std::f64::consts::PI;

/// Build an annulus extruded to `height`, centered on `center`'s axis
/// with its bottom face at `center.z`.
///
/// `thickness` straddles `radius`: the outer wall sits at
/// `radius + thickness/2` and the inner wall at `radius - thickness/2`.
/// Each of the `segments` angular wedges contributes 8 triangles
/// (outer wall 2, inner wall 2, bottom 2, top 2), for `8 * segments`
/// total.
///
/// Winding: outer-wall normals point away from the axis, inner-wall
/// normals toward it, bottom -Z and top +Z.
///
/// A zero or negative `thickness`, or an `inner_radius <= 0`, produces
/// zero-area or self-overlapping triangles; there are no square roots
/// or divisions to fail, so the builder never errors.
///
/// # Example
///
/// ```
/// use frame_solids::ring;
/// use frame_types::Point3;
///
/// let guard = ring(60.0, 4.0, 40.0, 24, Point3::new(0.0, 0.0, -5.0));
/// assert_eq!(guard.triangle_count(), 8 * 24);
/// ```
#[must_use]
#[allow(clippy::similar_names)] // o1/o2/i1/i2 mirror the wedge corners
pub fn ring(
    radius: f64,
    thickness: f64,
    height: f64,
    segments: u32,
    center: Point3<f64>,
) -> TriangleSoup {
    let c = center;
    let outer_r = radius + thickness / 2.0;
    let inner_r = radius - thickness / 2.0;

    let at = |r: f64, theta: f64, z: f64| {
        Point3::new(c.x + r * theta.cos(), c.y + r * theta.sin(), z)
    };

    let n = segments as usize;
    let mut soup = TriangleSoup::with_capacity(8 * n);

    for i in 0..n {
        #[allow(clippy::cast_precision_loss)]
        let theta1 = 2.0 * PI * i as f64 / f64::from(segments);
        #[allow(clippy::cast_precision_loss)]
        let theta2 = 2.0 * PI * (i + 1) as f64 / f64::from(segments);

        let o1_bot = at(outer_r, theta1, c.z);
        let o2_bot = at(outer_r, theta2, c.z);
        let o1_top = at(outer_r, theta1, c.z + height);
        let o2_top = at(outer_r, theta2, c.z + height);

        let i1_bot = at(inner_r, theta1, c.z);
        let i2_bot = at(inner_r, theta2, c.z);
        let i1_top = at(inner_r, theta1, c.z + height);
        let i2_top = at(inner_r, theta2, c.z + height);

        // Outer wall, facing away from the axis.
        soup.push(Triangle::new(o1_bot, o2_bot, o1_top));
        soup.push(Triangle::new(o2_bot, o2_top, o1_top));

        // Inner wall, facing the axis.
        soup.push(Triangle::new(i1_bot, i1_top, i2_bot));
        soup.push(Triangle::new(i2_bot, i1_top, i2_top));

        // Bottom annular face.
        soup.push(Triangle::new(o1_bot, i1_bot, o2_bot));
        soup.push(Triangle::new(o2_bot, i1_bot, i2_bot));

        // Top annular face.
        soup.push(Triangle::new(o1_top, o2_top, i1_top));
        soup.push(Triangle::new(o2_top, i2_top, i1_top));
    }

    soup
}
