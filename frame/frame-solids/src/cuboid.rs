//! Axis-aligned rectangular prism.

use frame_types::{Point3, Triangle, TriangleSoup};

/// Triangulation of a rectangular prism's six faces.
///
/// Indices refer to the corner order produced by builders in this
/// crate: 0-3 are the bottom face counter-clockwise from (-x, -y),
/// 4-7 the top face in the same order. Each face contributes two
/// triangles wound so the derived normal points out of the prism.
pub(crate) const PRISM_FACES: [[usize; 3]; 12] = [
    [0, 3, 1], // bottom
    [1, 3, 2],
    [4, 5, 7], // top
    [5, 6, 7],
    [0, 1, 5], // -y side
    [0, 5, 4],
    [2, 3, 7], // +y side
    [2, 7, 6],
    [0, 4, 7], // -x side
    [0, 7, 3],
    [1, 2, 6], // +x side
    [1, 6, 5],
];

/// Triangulate eight prism corners into 12 triangles.
pub(crate) fn triangulate_prism(corners: &[Point3<f64>; 8]) -> TriangleSoup {
    let mut soup = TriangleSoup::with_capacity(PRISM_FACES.len());
    for [a, b, c] in PRISM_FACES {
        soup.push(Triangle::new(corners[a], corners[b], corners[c]));
    }
    soup
}

/// Build an axis-aligned box centered at `center`.
///
/// Produces exactly 12 triangles (two per face), all wound outward.
/// Non-positive sizes yield zero-area triangles, not an error.
///
/// # Example
///
/// ```
/// use frame_solids::cuboid;
/// use frame_types::Point3;
///
/// let soup = cuboid(80.0, 80.0, 30.0, Point3::origin());
/// assert_eq!(soup.triangle_count(), 12);
/// ```
#[must_use]
pub fn cuboid(size_x: f64, size_y: f64, size_z: f64, center: Point3<f64>) -> TriangleSoup {
    let dx = size_x / 2.0;
    let dy = size_y / 2.0;
    let dz = size_z / 2.0;
    let c = center;

    let corners = [
        Point3::new(c.x - dx, c.y - dy, c.z - dz),
        Point3::new(c.x + dx, c.y - dy, c.z - dz),
        Point3::new(c.x + dx, c.y + dy, c.z - dz),
        Point3::new(c.x - dx, c.y + dy, c.z - dz),
        Point3::new(c.x - dx, c.y - dy, c.z + dz),
        Point3::new(c.x + dx, c.y - dy, c.z + dz),
        Point3::new(c.x + dx, c.y + dy, c.z + dz),
        Point3::new(c.x - dx, c.y + dy, c.z + dz),
    ];

    triangulate_prism(&corners)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_outward(soup: &TriangleSoup, center: Point3<f64>) {
        for tri in soup {
            let outward = tri.centroid() - center;
            let dot = tri.normal_unnormalized().dot(&outward);
            assert!(dot >= 0.0, "inward-facing triangle: {tri:?}");
        }
    }

    #[test]
    fn twelve_triangles() {
        let soup = cuboid(1.0, 1.0, 1.0, Point3::origin());
        assert_eq!(soup.triangle_count(), 12);
    }

    #[test]
    fn normals_point_outward_on_unit_cube() {
        let soup = cuboid(2.0, 2.0, 2.0, Point3::origin());
        assert_outward(&soup, Point3::origin());
    }

    #[test]
    fn normals_point_outward_on_flat_slab() {
        // A winding defect in the face table could hide on a cube and
        // show up on extreme aspect ratios.
        let center = Point3::new(5.0, -3.0, 12.0);
        let soup = cuboid(100.0, 0.5, 8.0, center);
        assert_outward(&soup, center);
    }

    #[test]
    fn total_surface_area_matches() {
        let (sx, sy, sz) = (3.0, 4.0, 5.0);
        let soup = cuboid(sx, sy, sz, Point3::new(1.0, 2.0, 3.0));
        let area: f64 = soup.triangles().iter().map(Triangle::area).sum();
        let expected = 2.0 * (sx * sy + sy * sz + sx * sz);
        assert!((area - expected).abs() < 1e-9);
    }

    #[test]
    fn zero_size_is_degenerate_but_well_formed() {
        let soup = cuboid(0.0, 1.0, 1.0, Point3::origin());
        assert_eq!(soup.triangle_count(), 12);
        // Four faces collapse to zero area; the builder must not care.
        let area: f64 = soup.triangles().iter().map(Triangle::area).sum();
        assert!((area - 2.0).abs() < 1e-12);
    }

    #[test]
    fn negative_size_still_produces_twelve_triangles() {
        let soup = cuboid(-2.0, 3.0, 1.0, Point3::origin());
        assert_eq!(soup.triangle_count(), 12);
    }
}
