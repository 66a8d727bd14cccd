//! Utilities for converting between degrees and radians.

use std::f64::consts::PI;

/// Converts the given angle from degrees to radians.
pub fn to_radians(angle_deg: f64) -> f64 {
    angle_deg * PI / 180.0
}

/// Converts the given angle from radians to degrees.
pub fn to_degrees(angle_rad: f64) -> f64 {
    angle_rad * 180.0 / PI
}
