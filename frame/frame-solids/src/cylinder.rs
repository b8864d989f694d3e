//! Capped cylinder.

use frame_types::{Point3, Triangle, TriangleSoup};
use std::f64::consts::PI;

/// Build a capped cylinder whose base circle lies at `center.z` and
/// whose top circle lies at `center.z + height`.
///
/// Produces exactly `4 * segments` triangles: one fan triangle per
/// segment for each cap and two wall triangles per segment. The circle
/// points come from uniform angular sampling `theta_i = 2*pi*i / segments`.
///
/// Winding contract: the bottom cap's normals point -Z, the top cap's
/// +Z, and the wall's radially outward.
///
/// `segments` is expected to be >= 3; smaller values (and non-positive
/// radius or height) produce degenerate triangles, not an error.
///
/// # Example
///
/// ```
/// use frame_solids::cylinder;
/// use frame_types::Point3;
///
/// let soup = cylinder(12.0, 8.0, 16, Point3::new(0.0, 0.0, -5.0));
/// assert_eq!(soup.triangle_count(), 4 * 16);
/// ```
#[must_use]
pub fn cylinder(radius: f64, height: f64, segments: u32, center: Point3<f64>) -> TriangleSoup {
    let c = center;
    let n = segments as usize;

    let ring_at = |z: f64| -> Vec<Point3<f64>> {
        (0..n)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let theta = 2.0 * PI * i as f64 / f64::from(segments);
                Point3::new(
                    c.x + radius * theta.cos(),
                    c.y + radius * theta.sin(),
                    z,
                )
            })
            .collect()
    };

    let bottom = ring_at(c.z);
    let top = ring_at(c.z + height);
    let bottom_center = Point3::new(c.x, c.y, c.z);
    let top_center = Point3::new(c.x, c.y, c.z + height);

    let mut soup = TriangleSoup::with_capacity(4 * n);

    // Bottom cap: fan around the bottom center, wound so the normal
    // points -Z (away from the solid).
    for i in 0..n {
        let next = (i + 1) % n;
        soup.push(Triangle::new(bottom_center, bottom[next], bottom[i]));
    }

    // Top cap: opposite winding, normal +Z.
    for i in 0..n {
        let next = (i + 1) % n;
        soup.push(Triangle::new(top_center, top[i], top[next]));
    }

    // Lateral wall: two triangles per segment, radially outward.
    for i in 0..n {
        let next = (i + 1) % n;
        soup.push(Triangle::new(bottom[i], bottom[next], top[i]));
        soup.push(Triangle::new(bottom[next], top[next], top[i]));
    }

    soup
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn triangle_count_is_four_per_segment() {
        // One bottom fan + one top fan + two wall triangles per
        // segment; there is no structure that could yield more.
        for segments in [3, 8, 16, 24] {
            let soup = cylinder(5.0, 10.0, segments, Point3::origin());
            assert_eq!(soup.triangle_count(), 4 * segments as usize);
        }
    }

    #[test]
    fn sections_partition_the_soup() {
        let n = 16;
        let soup = cylinder(5.0, 10.0, n as u32, Point3::origin());
        // n bottom-cap, n top-cap, 2n wall triangles, in that order.
        assert_eq!(soup.triangle_count(), 4 * n);
        let bottom_z = soup.triangles()[..n]
            .iter()
            .all(|t| t.normal_unnormalized().z < 0.0);
        let top_z = soup.triangles()[n..2 * n]
            .iter()
            .all(|t| t.normal_unnormalized().z > 0.0);
        let walls_flat = soup.triangles()[2 * n..]
            .iter()
            .all(|t| t.normal_unnormalized().z.abs() < 1e-9);
        assert!(bottom_z && top_z && walls_flat);
    }

    #[test]
    fn cap_normals_point_away_from_solid() {
        let soup = cylinder(5.0, 10.0, 16, Point3::new(1.0, 2.0, 3.0));
        let n = 16;
        for (i, tri) in soup.triangles().iter().enumerate() {
            let normal = tri.normal_unnormalized();
            if i < n {
                assert!(normal.z < 0.0, "bottom cap triangle {i} points up");
                assert_relative_eq!(normal.x, 0.0, epsilon = 1e-9);
                assert_relative_eq!(normal.y, 0.0, epsilon = 1e-9);
            } else if i < 2 * n {
                assert!(normal.z > 0.0, "top cap triangle {i} points down");
            }
        }
    }

    #[test]
    fn wall_normals_point_radially_outward() {
        let center = Point3::new(-4.0, 9.0, 2.0);
        let soup = cylinder(5.0, 10.0, 16, center);
        for tri in soup.triangles().iter().skip(2 * 16) {
            let normal = tri.normal_unnormalized();
            let centroid = tri.centroid();
            let radial =
                frame_types::Vector3::new(centroid.x - center.x, centroid.y - center.y, 0.0);
            assert!(normal.dot(&radial) > 0.0, "inward wall triangle: {tri:?}");
            assert_relative_eq!(normal.z, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn lateral_area_converges_to_analytic() {
        let (radius, height) = (7.0, 3.0);
        let analytic = 2.0 * PI * radius * height;

        let lateral_area = |segments: u32| -> f64 {
            cylinder(radius, height, segments, Point3::origin())
                .triangles()
                .iter()
                .skip(2 * segments as usize)
                .map(Triangle::area)
                .sum()
        };

        let coarse = lateral_area(8);
        let fine = lateral_area(512);

        assert!((analytic - coarse) > (analytic - fine));
        assert_relative_eq!(fine, analytic, max_relative = 1e-4);
    }

    #[test]
    fn degenerate_inputs_do_not_panic() {
        assert_eq!(cylinder(0.0, 5.0, 8, Point3::origin()).triangle_count(), 32);
        assert_eq!(cylinder(5.0, 0.0, 8, Point3::origin()).triangle_count(), 32);
        assert_eq!(cylinder(5.0, 5.0, 1, Point3::origin()).triangle_count(), 4);
        assert_eq!(cylinder(5.0, 5.0, 0, Point3::origin()).triangle_count(), 0);
    }
}
