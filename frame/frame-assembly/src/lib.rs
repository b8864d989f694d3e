//! Frame assembly: placement table and composer.
//!
//! This crate turns a [`FrameConfig`] into the complete triangle soup
//! of one multi-rotor frame. The config is pure placement data (where
//! each structural feature sits and how large it is); the composer's
//! only algorithmic content is the polar-to-Cartesian math that
//! repeats features around the hub. Everything else is concatenation,
//! in a fixed feature order, so identical configs always produce
//! byte-identical output.
//!
//! # Example
//!
//! ```
//! use frame_assembly::{build_frame, FrameConfig};
//!
//! let config = FrameConfig::default();
//! let frame = build_frame(&config);
//! assert_eq!(frame.triangle_count(), 1712);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod config;
mod frame;

pub use config::FrameConfig;
pub use frame::{
    arms, body, build_frame, camera_rig, landing_gear, led_posts, motor_mounts, prop_guards,
};
