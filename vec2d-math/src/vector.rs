use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pair of `(x, y)` values representing a point or a displacement in the 2D plane.
///
/// Most functions in this crate accept `impl Into<Vector>`, so plain tuples can be passed
/// directly:
///
/// ```
/// use vec2d_math::{add, Vector};
///
/// assert_eq!(add((2, 0), (1, 3)), Vector(3.0, 3.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector(pub f64, pub f64);

impl Vector {
    /// The origin of coordinates, `(0, 0)`.
    pub const ORIGIN: Vector = Vector(0.0, 0.0);

    /// Creates a new vector.
    pub const fn new(x: f64, y: f64) -> Vector {
        Vector(x, y)
    }

    /// Returns the x-component.
    pub fn x(self) -> f64 {
        self.0
    }

    /// Returns the y-component.
    pub fn y(self) -> f64 {
        self.1
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Vector {
        Vector(x, y)
    }
}

impl From<(i32, i32)> for Vector {
    fn from((x, y): (i32, i32)) -> Vector {
        Vector(x.into(), y.into())
    }
}

impl From<[f64; 2]> for Vector {
    fn from([x, y]: [f64; 2]) -> Vector {
        Vector(x, y)
    }
}

impl From<Vector> for (f64, f64) {
    fn from(v: Vector) -> (f64, f64) {
        (v.0, v.1)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector(-self.0, -self.1)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Vector(self.0 * rhs, self.1 * rhs)
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
