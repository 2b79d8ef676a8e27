use ordered_float::NotNan;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::convert::TryFrom;

use crate::Error;

/// An immutable pair of finite coordinates.
///
/// Equality is exact floating-point equality; the coordinates are wrapped in
/// [`NotNan`] so points have a total order and can live in ordered sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Point {
  pub array: [NotNan<f64>; 2],
}

// Random sampling over the unit square.
impl Distribution<Point> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point::new_unchecked(rng.gen(), rng.gen())
  }
}

impl Point {
  pub fn new(x: f64, y: f64) -> Result<Point, Error> {
    if !x.is_finite() || !y.is_finite() {
      return Err(Error::NonFiniteCoordinate);
    }
    Ok(Point::new_unchecked(x, y))
  }

  /// # Panics
  ///
  /// Panics if either coordinate is NaN. Infinite coordinates are only
  /// caught by a debug assertion.
  pub fn new_unchecked(x: f64, y: f64) -> Point {
    debug_assert!(x.is_finite() && y.is_finite());
    Point {
      array: [NotNan::new(x).unwrap(), NotNan::new(y).unwrap()],
    }
  }

  pub fn x(&self) -> f64 {
    self.array[0].into_inner()
  }

  pub fn y(&self) -> f64 {
    self.array[1].into_inner()
  }
}

impl TryFrom<(f64, f64)> for Point {
  type Error = Error;
  fn try_from(point: (f64, f64)) -> Result<Point, Error> {
    Point::new(point.0, point.1)
  }
}
