//! Math helpers for vectors on the 2D plane.
//!
//! Vectors are represented by the [`Vector`] type, a pair of `f64` components. Every function is
//! total and deterministic; the only failures are the [`MathError`]s returned by functions that
//! need a minimum number of vectors to work with.
//!
//! # Example
//!
//! ```
//! use vec2d_math::{add, distance, rotate, scale, Vector};
//! use std::f64::consts::PI;
//!
//! # fn main() -> Result<(), vec2d_math::MathError> {
//! assert_eq!(add((2, 0), (1, 3)), Vector(3.0, 3.0));
//! assert_eq!(scale(2.0, (1, 3)), Vector(2.0, 6.0));
//! assert_eq!(distance((1, 1), (4, 5)), 5.0);
//!
//! let half_turn = rotate(PI, &[Vector(1.0, 0.0)])?;
//! assert!((half_turn[0].0 + 1.0).abs() < 1e-12);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod funcs;
pub mod vector;

pub use error::MathError;
pub use funcs::{
    add,
    add_mult,
    angle,
    displacement,
    distance,
    length,
    opposite,
    perimeter,
    rescale,
    rotate,
    scalar_product,
    scale,
    subtract,
    to_cartesian,
    to_degrees,
    to_polar,
    to_radians,
    translate,
};
pub use vector::Vector;
