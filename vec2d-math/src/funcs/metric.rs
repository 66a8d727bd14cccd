//! Lengths and distances.

use crate::vector::Vector;
use super::arithmetic::displacement;

/// Returns the length (Euclidean norm) of the vector.
pub fn length(v: impl Into<Vector>) -> f64 {
    let v = v.into();
    v.0.hypot(v.1)
}

/// Returns the distance between `tail` and `tip`, i.e. the length of the displacement vector
/// that goes from `tail` to `tip`.
pub fn distance(tip: impl Into<Vector>, tail: impl Into<Vector>) -> f64 {
    length(displacement(tip, tail))
}

/// Returns the perimeter of the closed shape whose vertices are the given vectors, in order.
///
/// The edge from the last vertex back to the first is included. An empty list has a perimeter of
/// `0.0`.
pub fn perimeter(vectors: &[Vector]) -> f64 {
    (0..vectors.len())
        .map(|i| distance(vectors[i], vectors[(i + 1) % vectors.len()]))
        .sum()
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        assert_float_relative_eq,
    };
    use super::*;

    #[test]
    fn length_of_vectors() {
        assert_float_relative_eq!(length((3, 4)), 5.0);
        assert_float_relative_eq!(length((-5, 12)), 13.0);
        assert_eq!(length((0, 0)), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        assert_float_relative_eq!(distance((1, 1), (4, 5)), 5.0);
        assert_float_relative_eq!(distance((4, 5), (1, 1)), 5.0);
    }

    #[test]
    fn perimeter_of_square() {
        let square = [Vector(0.0, 0.0), Vector(2.0, 0.0), Vector(2.0, 2.0), Vector(0.0, 2.0)];
        assert_float_relative_eq!(perimeter(&square), 8.0);
    }

    #[test]
    fn perimeter_of_triangle() {
        let triangle = [Vector(0.0, 0.0), Vector(3.0, 0.0), Vector(3.0, 4.0)];
        assert_float_relative_eq!(perimeter(&triangle), 12.0);
    }

    #[test]
    fn perimeter_degenerate() {
        assert_eq!(perimeter(&[]), 0.0);
        assert_eq!(perimeter(&[Vector(1.0, 1.0)]), 0.0);
        // a segment is walked there and back
        assert_float_relative_eq!(perimeter(&[Vector(0.0, 0.0), Vector(0.0, 3.0)]), 6.0);
    }
}
