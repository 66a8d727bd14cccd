//! Transformations applied to every vector of a list: translation, rotation about the origin,
//! and scaling.
//!
//! All of these return [`MathError::NoVectors`] when given an empty list.

use crate::{error::MathError, vector::Vector};
use super::{arithmetic::{add, scale}, polar::{to_cartesian, to_polar}};

fn ensure_non_empty(vectors: &[Vector]) -> Result<(), MathError> {
    if vectors.is_empty() {
        Err(MathError::NoVectors)
    } else {
        Ok(())
    }
}

/// Translates every vector by `translation`.
pub fn translate(translation: impl Into<Vector>, vectors: &[Vector]) -> Result<Vec<Vector>, MathError> {
    ensure_non_empty(vectors)?;
    let translation = translation.into();
    Ok(vectors.iter().map(|&v| add(translation, v)).collect())
}

/// Rotates every vector about the origin by `angle` radians: counterclockwise if `angle` is
/// positive, clockwise if it is negative.
pub fn rotate(angle: f64, vectors: &[Vector]) -> Result<Vec<Vector>, MathError> {
    ensure_non_empty(vectors)?;
    Ok(vectors.iter()
        .map(|&v| {
            let Vector(r, theta) = to_polar(v, false);
            to_cartesian((r, theta + angle))
        })
        .collect())
}

/// Scales every vector by `factor`.
pub fn rescale(factor: f64, vectors: &[Vector]) -> Result<Vec<Vector>, MathError> {
    ensure_non_empty(vectors)?;
    Ok(vectors.iter().map(|&v| scale(factor, v)).collect())
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        assert_float_absolute_eq,
    };
    use pretty_assertions::assert_eq;
    use std::f64::consts::{FRAC_PI_2, PI};
    use super::*;

    #[test]
    fn translate_all() {
        let square = [Vector(0.0, 0.0), Vector(1.0, 0.0), Vector(1.0, 1.0), Vector(0.0, 1.0)];
        assert_eq!(
            translate((2, -1), &square),
            Ok(vec![Vector(2.0, -1.0), Vector(3.0, -1.0), Vector(3.0, 0.0), Vector(2.0, 0.0)]),
        );
    }

    #[test]
    fn rotate_quarter_turn() {
        let rotated = rotate(FRAC_PI_2, &[Vector(1.0, 0.0), Vector(0.0, 2.0)]).unwrap();
        assert_float_absolute_eq!(rotated[0].0, 0.0, 1e-9);
        assert_float_absolute_eq!(rotated[0].1, 1.0, 1e-9);
        assert_float_absolute_eq!(rotated[1].0, -2.0, 1e-9);
        assert_float_absolute_eq!(rotated[1].1, 0.0, 1e-9);
    }

    #[test]
    fn rotate_clockwise() {
        let rotated = rotate(-PI, &[Vector(3.0, 4.0)]).unwrap();
        assert_float_absolute_eq!(rotated[0].0, -3.0, 1e-9);
        assert_float_absolute_eq!(rotated[0].1, -4.0, 1e-9);
    }

    #[test]
    fn rescale_all() {
        assert_eq!(
            rescale(0.5, &[Vector(2.0, 4.0), Vector(-6.0, 1.0)]),
            Ok(vec![Vector(1.0, 2.0), Vector(-3.0, 0.5)]),
        );
    }

    #[test]
    fn empty_lists_rejected() {
        assert_eq!(translate((1, 1), &[]), Err(MathError::NoVectors));
        assert_eq!(rotate(1.0, &[]), Err(MathError::NoVectors));
        assert_eq!(rescale(2.0, &[]), Err(MathError::NoVectors));
    }
}
