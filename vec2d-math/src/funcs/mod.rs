//! All vector functions provided by this crate.
//!
//! Each function is a free function re-exported from the crate root. Functions that take a single
//! vector accept anything that converts [`Into`] a [`Vector`](crate::Vector), while functions that
//! operate on a whole shape take a slice of vectors.

pub mod angle;
pub mod arithmetic;
pub mod metric;
pub mod polar;
pub mod transform;

pub use angle::{to_degrees, to_radians};
pub use arithmetic::{add, add_mult, displacement, opposite, scalar_product, scale, subtract};
pub use metric::{distance, length, perimeter};
pub use polar::{angle, to_cartesian, to_polar};
pub use transform::{rescale, rotate, translate};
