//! Unindexed triangle sequence.

use crate::{Aabb, Triangle};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered, unindexed sequence of triangles.
///
/// This is the mesh representation of the frame generator: a flat soup
/// with no shared-vertex topology. The sequence is append-only during
/// construction and its insertion order is the order triangles are
/// serialized in.
///
/// Degenerate (zero-area) triangles are representable and legal; the
/// soup does not validate its contents.
///
/// # Example
///
/// ```
/// use frame_types::{Point3, Triangle, TriangleSoup};
///
/// let mut soup = TriangleSoup::new();
/// soup.push(Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ));
///
/// let mut other = TriangleSoup::new();
/// other.push(Triangle::new(
///     Point3::new(0.0, 0.0, 1.0),
///     Point3::new(1.0, 0.0, 1.0),
///     Point3::new(0.0, 1.0, 1.0),
/// ));
///
/// soup.append(&mut other);
/// assert_eq!(soup.triangle_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangleSoup {
    triangles: Vec<Triangle>,
}

impl TriangleSoup {
    /// Create a new empty soup.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    /// Create a soup with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the soup contains no triangles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Append a single triangle.
    #[inline]
    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Move all triangles of `other` to the end of this soup.
    ///
    /// Relative order within `other` is preserved.
    #[inline]
    pub fn append(&mut self, other: &mut Self) {
        self.triangles.append(&mut other.triangles);
    }

    /// Returns the triangles as a slice, in insertion order.
    #[inline]
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Compute the axis-aligned bounding box over all vertices.
    ///
    /// Returns an empty [`Aabb`] (min and max at the origin) for an
    /// empty soup.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(
            self.triangles
                .iter()
                .flat_map(|tri| tri.vertices().into_iter()),
        )
    }
}

impl From<Vec<Triangle>> for TriangleSoup {
    fn from(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }
}

impl Extend<Triangle> for TriangleSoup {
    fn extend<I: IntoIterator<Item = Triangle>>(&mut self, iter: I) {
        self.triangles.extend(iter);
    }
}

impl FromIterator<Triangle> for TriangleSoup {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self {
            triangles: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TriangleSoup {
    type Item = Triangle;
    type IntoIter = std::vec::IntoIter<Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.into_iter()
    }
}

impl<'a> IntoIterator for &'a TriangleSoup {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}
