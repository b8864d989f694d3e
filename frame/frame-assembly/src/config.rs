//! Frame placement table.

use serde::{Deserialize, Serialize};

/// Placement parameters for every structural feature of the frame.
///
/// All lengths are millimeters; all angles are degrees in the XY
/// plane, counter-clockwise from +X. The defaults describe a 14-inch
/// quad frame (125 mm hub-to-motor arms on the diagonals).
///
/// The config is plain data: none of its values are validated, and
/// degenerate values flow through to the builders, which accept them
/// by contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Central electronics housing size (x, y, z).
    pub body_size: [f64; 3],

    /// Hub-to-motor arm length.
    pub arm_length: f64,
    /// Arm cross-section width.
    pub arm_width: f64,
    /// Arm cross-section height.
    pub arm_height: f64,
    /// Z offset of the arm centerline.
    pub arm_z: f64,
    /// Angles of the four arms.
    pub arm_angles_deg: [f64; 4],

    /// Motor mount cylinder radius.
    pub motor_mount_radius: f64,
    /// Motor mount cylinder height.
    pub motor_mount_height: f64,
    /// Motor mount tessellation.
    pub motor_mount_segments: u32,

    /// Size of each stereo camera pod.
    pub camera_pod_size: [f64; 3],
    /// Center-to-center spacing of the stereo pair.
    pub camera_spacing: f64,
    /// Forward (+Y) offset of the camera rig.
    pub camera_forward: f64,
    /// Z offset of the camera pods.
    pub camera_pod_z: f64,
    /// Size of the bridge connecting the two pods.
    pub camera_bridge_size: [f64; 3],
    /// Z offset of the bridge.
    pub camera_bridge_z: f64,

    /// LED post cylinder radius.
    pub led_radius: f64,
    /// LED post height.
    pub led_height: f64,
    /// LED post tessellation.
    pub led_segments: u32,
    /// Half-side of the square LED pattern (posts at (+-offset, +-offset)).
    pub led_offset: f64,
    /// Z offset of the LED posts.
    pub led_z: f64,

    /// Propeller guard ring radius (centerline of the annulus).
    pub guard_radius: f64,
    /// Radial thickness of the guard ring.
    pub guard_thickness: f64,
    /// Guard ring height.
    pub guard_height: f64,
    /// Guard ring tessellation.
    pub guard_segments: u32,
    /// Z offset of the guard ring base.
    pub guard_z: f64,
    /// Support strut cross-section and height (x, y, z).
    pub strut_size: [f64; 3],
    /// Radius from the guard center to each strut.
    pub strut_radius: f64,
    /// Angles of the struts around each guard.
    pub strut_angles_deg: [f64; 3],
    /// Z offset of the strut centers.
    pub strut_z: f64,

    /// Radius from the hub to each landing-gear assembly.
    pub gear_radius: f64,
    /// Angles of the four landing-gear assemblies.
    pub gear_angles_deg: [f64; 4],
    /// Leg cylinder radius.
    pub gear_leg_radius: f64,
    /// Leg cylinder height.
    pub gear_leg_height: f64,
    /// Leg tessellation.
    pub gear_leg_segments: u32,
    /// Z offset of the leg base.
    pub gear_leg_z: f64,
    /// Foot cylinder radius.
    pub gear_foot_radius: f64,
    /// Foot cylinder height.
    pub gear_foot_height: f64,
    /// Foot tessellation.
    pub gear_foot_segments: u32,
    /// Z offset of the foot base.
    pub gear_foot_z: f64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            body_size: [80.0, 80.0, 30.0],

            arm_length: 125.0,
            arm_width: 25.0,
            arm_height: 10.0,
            arm_z: -5.0,
            arm_angles_deg: [45.0, 135.0, 225.0, 315.0],

            motor_mount_radius: 12.0,
            motor_mount_height: 8.0,
            motor_mount_segments: 16,

            camera_pod_size: [15.0, 15.0, 20.0],
            camera_spacing: 40.0,
            camera_forward: 50.0,
            camera_pod_z: 5.0,
            camera_bridge_size: [55.0, 8.0, 8.0],
            camera_bridge_z: 15.0,

            led_radius: 3.0,
            led_height: 15.0,
            led_segments: 8,
            led_offset: 30.0,
            led_z: 15.0,

            guard_radius: 60.0,
            guard_thickness: 4.0,
            guard_height: 40.0,
            guard_segments: 24,
            guard_z: -5.0,
            strut_size: [3.0, 3.0, 40.0],
            strut_radius: 58.0,
            strut_angles_deg: [0.0, 120.0, 240.0],
            strut_z: 15.0,

            gear_radius: 50.0,
            gear_angles_deg: [45.0, 135.0, 225.0, 315.0],
            gear_leg_radius: 6.0,
            gear_leg_height: 60.0,
            gear_leg_segments: 8,
            gear_leg_z: -75.0,
            gear_foot_radius: 15.0,
            gear_foot_height: 5.0,
            gear_foot_segments: 12,
            gear_foot_z: -135.0,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_the_14in_frame() {
        let config = FrameConfig::default();
        assert_eq!(config.arm_length, 125.0);
        assert_eq!(config.body_size, [80.0, 80.0, 30.0]);
        assert_eq!(config.guard_segments, 24);
    }

    #[test]
    fn partial_toml_overrides_fall_back_to_defaults() {
        let config: FrameConfig = toml::from_str(
            r#"
            arm_length = 150.0
            guard_radius = 70.0
            "#,
        )
        .unwrap();

        assert_eq!(config.arm_length, 150.0);
        assert_eq!(config.guard_radius, 70.0);
        // Untouched fields keep their defaults.
        assert_eq!(config.arm_width, 25.0);
        assert_eq!(config.gear_foot_segments, 12);
    }

    #[test]
    fn serde_roundtrip() {
        let config = FrameConfig::default();
        let text = toml::to_string(&config).unwrap();
        let back: FrameConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
