//! Frame composer.
//!
//! One function per structural feature, each mapping the config to the
//! triangles of that feature, plus [`build_frame`] which concatenates
//! them. Feature order and builder-internal order are fixed, so the
//! resulting soup (and any file serialized from it) is bit-reproducible
//! for identical configs.

use frame_solids::{arm, cuboid, cylinder, ring};
use frame_types::{Point3, TriangleSoup, Vector3};
use tracing::debug;

use crate::FrameConfig;

/// Offset of a feature placed at `radius` and `angle_deg` from the hub.
fn radial_offset(radius: f64, angle_deg: f64) -> Vector3<f64> {
    let angle = angle_deg.to_radians();
    Vector3::new(radius * angle.cos(), radius * angle.sin(), 0.0)
}

/// Central electronics housing.
#[must_use]
pub fn body(config: &FrameConfig) -> TriangleSoup {
    let [sx, sy, sz] = config.body_size;
    cuboid(sx, sy, sz, Point3::origin())
}

/// The four arms radiating from the hub.
#[must_use]
pub fn arms(config: &FrameConfig) -> TriangleSoup {
    let mut soup = TriangleSoup::new();
    for angle in config.arm_angles_deg {
        let mut beam = arm(
            config.arm_length,
            config.arm_width,
            config.arm_height,
            angle,
            Point3::new(0.0, 0.0, config.arm_z),
        );
        soup.append(&mut beam);
    }
    soup
}

/// Cylindrical motor mounts at each arm tip.
#[must_use]
pub fn motor_mounts(config: &FrameConfig) -> TriangleSoup {
    let mut soup = TriangleSoup::new();
    for angle in config.arm_angles_deg {
        let tip = Point3::new(0.0, 0.0, config.arm_z) + radial_offset(config.arm_length, angle);
        let mut mount = cylinder(
            config.motor_mount_radius,
            config.motor_mount_height,
            config.motor_mount_segments,
            tip,
        );
        soup.append(&mut mount);
    }
    soup
}

/// Stereo camera pair plus the bridge connecting the pods.
#[must_use]
pub fn camera_rig(config: &FrameConfig) -> TriangleSoup {
    let [px, py, pz] = config.camera_pod_size;
    let [bx, by, bz] = config.camera_bridge_size;
    let half_spacing = config.camera_spacing / 2.0;

    let mut soup = TriangleSoup::new();
    for x in [-half_spacing, half_spacing] {
        let mut pod = cuboid(
            px,
            py,
            pz,
            Point3::new(x, config.camera_forward, config.camera_pod_z),
        );
        soup.append(&mut pod);
    }
    let mut bridge = cuboid(
        bx,
        by,
        bz,
        Point3::new(0.0, config.camera_forward, config.camera_bridge_z),
    );
    soup.append(&mut bridge);
    soup
}

/// LED mounting posts on a square pattern around the hub.
#[must_use]
pub fn led_posts(config: &FrameConfig) -> TriangleSoup {
    let d = config.led_offset;
    let mut soup = TriangleSoup::new();
    for (x, y) in [(d, d), (-d, d), (d, -d), (-d, -d)] {
        let mut post = cylinder(
            config.led_radius,
            config.led_height,
            config.led_segments,
            Point3::new(x, y, config.led_z),
        );
        soup.append(&mut post);
    }
    soup
}

/// Propeller-guard rings at the arm tips, each with its radial
/// support struts.
#[must_use]
pub fn prop_guards(config: &FrameConfig) -> TriangleSoup {
    let [strut_x, strut_y, strut_z_size] = config.strut_size;
    let mut soup = TriangleSoup::new();

    for angle in config.arm_angles_deg {
        let tip = radial_offset(config.arm_length, angle);
        let mut guard = ring(
            config.guard_radius,
            config.guard_thickness,
            config.guard_height,
            config.guard_segments,
            Point3::new(tip.x, tip.y, config.guard_z),
        );
        soup.append(&mut guard);

        for strut_angle in config.strut_angles_deg {
            let offset = radial_offset(config.strut_radius, strut_angle);
            let mut strut = cuboid(
                strut_x,
                strut_y,
                strut_z_size,
                Point3::new(tip.x + offset.x, tip.y + offset.y, config.strut_z),
            );
            soup.append(&mut strut);
        }
    }
    soup
}

/// Landing-gear assemblies: a leg cylinder and a wider foot each.
#[must_use]
pub fn landing_gear(config: &FrameConfig) -> TriangleSoup {
    let mut soup = TriangleSoup::new();
    for angle in config.gear_angles_deg {
        let offset = radial_offset(config.gear_radius, angle);

        let mut leg = cylinder(
            config.gear_leg_radius,
            config.gear_leg_height,
            config.gear_leg_segments,
            Point3::new(offset.x, offset.y, config.gear_leg_z),
        );
        soup.append(&mut leg);

        let mut foot = cylinder(
            config.gear_foot_radius,
            config.gear_foot_height,
            config.gear_foot_segments,
            Point3::new(offset.x, offset.y, config.gear_foot_z),
        );
        soup.append(&mut foot);
    }
    soup
}

/// Build the complete frame.
///
/// Features are composed in a fixed order: body, arms, motor mounts,
/// camera rig, LED posts, prop guards, landing gear. Each feature's
/// builder-internal triangle order is preserved.
#[must_use]
pub fn build_frame(config: &FrameConfig) -> TriangleSoup {
    let mut frame = TriangleSoup::new();

    let features: [(&str, fn(&FrameConfig) -> TriangleSoup); 7] = [
        ("body", body),
        ("arms", arms),
        ("motor mounts", motor_mounts),
        ("camera rig", camera_rig),
        ("led posts", led_posts),
        ("prop guards", prop_guards),
        ("landing gear", landing_gear),
    ];

    for (name, feature) in features {
        let mut soup = feature(config);
        debug!(feature = name, triangles = soup.triangle_count());
        frame.append(&mut soup);
    }

    frame
}
