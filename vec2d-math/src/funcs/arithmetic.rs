//! Elementwise arithmetic on vectors.

use crate::{error::MathError, vector::Vector};

/// Adds two vectors.
pub fn add(v: impl Into<Vector>, w: impl Into<Vector>) -> Vector {
    v.into() + w.into()
}

/// Adds all the given vectors together.
///
/// Returns [`MathError::TooFewVectors`] if fewer than two vectors are given.
pub fn add_mult(vectors: &[Vector]) -> Result<Vector, MathError> {
    if vectors.len() < 2 {
        return Err(MathError::TooFewVectors { expected: 2, got: vectors.len() });
    }
    Ok(vectors.iter().fold(Vector::ORIGIN, |acc, &v| acc + v))
}

/// Subtracts `w` from `v`.
pub fn subtract(v: impl Into<Vector>, w: impl Into<Vector>) -> Vector {
    v.into() - w.into()
}

/// Returns the vector pointing in the opposite direction, with the same length.
pub fn opposite(v: impl Into<Vector>) -> Vector {
    -v.into()
}

/// Multiplies each component of `v` by the scalar `s`.
pub fn scalar_product(v: impl Into<Vector>, s: f64) -> Vector {
    v.into() * s
}

/// Scales `v` by the scalar `s`. Same as [`scalar_product`], with the arguments swapped.
pub fn scale(s: f64, v: impl Into<Vector>) -> Vector {
    scalar_product(v, s)
}

/// Computes the displacement vector that goes from `tail` to `tip`, i.e. `tip - tail`.
pub fn displacement(tip: impl Into<Vector>, tail: impl Into<Vector>) -> Vector {
    subtract(tip, tail)
}
