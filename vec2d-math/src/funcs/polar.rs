//! Conversion between Cartesian `(x, y)` and polar `(r, θ)` coordinates.
//!
//! Angles are expressed in radians, measured counterclockwise from the positive x-axis. Polar
//! coordinates are carried in a [`Vector`] whose first component is the length `r` and whose
//! second component is the angle `θ`.

use std::f64::consts::TAU;
use crate::vector::Vector;
use super::metric::length;

/// Returns the angle of the vector, measured counterclockwise from the positive x-axis, in the
/// range `(-π, π]`.
pub fn angle(v: impl Into<Vector>) -> f64 {
    let v = v.into();
    v.1.atan2(v.0)
}

/// Returns the Cartesian coordinates `(x, y)` of a vector given its polar coordinates `(r, θ)`.
pub fn to_cartesian(polar: impl Into<Vector>) -> Vector {
    let Vector(r, theta) = polar.into();
    let (sin, cos) = theta.sin_cos();
    Vector(r * cos, r * sin)
}

/// Returns the polar coordinates `(r, θ)` of a vector given its Cartesian coordinates `(x, y)`.
///
/// If `positive_angle` is set, negative angles are shifted by `2π` so that `θ` lies in
/// `[0, 2π)`. Otherwise `θ` lies in `(-π, π]`.
pub fn to_polar(cartesian: impl Into<Vector>, positive_angle: bool) -> Vector {
    let v = cartesian.into();
    let mut theta = angle(v);
    if positive_angle && theta < 0.0 {
        theta += TAU;
    }
    Vector(length(v), theta)
}
