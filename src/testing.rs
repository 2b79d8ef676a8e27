// Strategies for points, segments, and polygons used by property tests.
use proptest::prelude::*;

use crate::data::{LineSegment, Point, Polygon};

/// Points with small integer-valued coordinates. Line evaluations at these
/// points stay exact in f64.
pub fn lattice_point() -> impl Strategy<Value = Point> {
  (-100i32..=100, -100i32..=100)
    .prop_map(|(x, y)| Point::new_unchecked(f64::from(x), f64::from(y)))
}

pub fn lattice_segment() -> impl Strategy<Value = LineSegment> {
  (lattice_point(), lattice_point()).prop_map(|(src, dst)| LineSegment::new(src, dst))
}

/// Convex polygon: distinct points on a circle of radius 10, enumerated
/// counter-clockwise.
pub fn convex_polygon() -> impl Strategy<Value = Polygon> {
  proptest::collection::btree_set(0u32..720, 3..12).prop_map(|angles| {
    let vertices = angles
      .iter()
      .map(|&a| {
        let t = f64::from(a) * std::f64::consts::PI / 360.0;
        Point::new_unchecked(10.0 * t.cos(), 10.0 * t.sin())
      })
      .collect();
    Polygon::new_unchecked(vertices)
  })
}

impl Arbitrary for Point {
  type Parameters = ();
  type Strategy = BoxedStrategy<Point>;
  fn arbitrary_with(_params: ()) -> Self::Strategy {
    lattice_point().boxed()
  }
}

impl Arbitrary for LineSegment {
  type Parameters = ();
  type Strategy = BoxedStrategy<LineSegment>;
  fn arbitrary_with(_params: ()) -> Self::Strategy {
    lattice_segment().boxed()
  }
}

impl Arbitrary for Polygon {
  type Parameters = ();
  type Strategy = BoxedStrategy<Polygon>;
  fn arbitrary_with(_params: ()) -> Self::Strategy {
    convex_polygon().boxed()
  }
}
