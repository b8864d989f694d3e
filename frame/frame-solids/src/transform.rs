//! Planar rotation about the Z axis.

use frame_types::Point3;

/// Rotate a point about the Z axis by `angle` radians.
///
/// A standard 2D rotation applied to the X/Y components; Z is
/// untouched. Centralized here so every builder that places geometry
/// at a planar angle shares one rotation convention
/// (counter-clockwise positive, viewed from +Z).
///
/// # Example
///
/// ```
/// use frame_solids::rotate_z;
/// use frame_types::Point3;
/// use std::f64::consts::FRAC_PI_2;
///
/// let p = rotate_z(Point3::new(1.0, 0.0, 5.0), FRAC_PI_2);
/// assert!(p.x.abs() < 1e-12);
/// assert!((p.y - 1.0).abs() < 1e-12);
/// assert!((p.z - 5.0).abs() < 1e-12);
/// ```
#[inline]
#[must_use]
pub fn rotate_z(p: Point3<f64>, angle: f64) -> Point3<f64> {
    let (sin_a, cos_a) = angle.sin_cos();
    Point3::new(p.x * cos_a - p.y * sin_a, p.x * sin_a + p.y * cos_a, p.z)
}
