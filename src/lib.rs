//! Interior grid sampling for simple polygons.
//!
//! Given a simple polygon and a pair of grid intervals,
//! [`algorithms::interior_grid_points`] enumerates the regular grid over the
//! polygon's bounding box and returns the points that fall inside the polygon.
//! Containment is decided by ray casting ([`data::Polygon::contains`]), built
//! on exact-sign segment intersection tests.
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]

pub mod algorithms;
pub mod data;
mod intersection;

pub use intersection::Intersects;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
  DuplicatePoints,
  NonFiniteCoordinate,
  /// Grid interval that is zero, negative, or not finite.
  InvalidInterval,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::NonFiniteCoordinate => write!(f, "Coordinate is NaN or infinite"),
      Error::InvalidInterval => write!(f, "Grid interval must be positive and finite"),
    }
  }
}

#[cfg(test)]
pub mod testing;
