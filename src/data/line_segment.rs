use super::Line;
use super::Point;
use crate::Intersects;

///////////////////////////////////////////////////////////////////////////////
// LineSegment

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSegment {
  pub src: Point,
  pub dst: Point,
}

impl LineSegment {
  pub fn new(src: Point, dst: Point) -> LineSegment {
    LineSegment { src, dst }
  }

  pub fn line(&self) -> Line {
    Line::through(&self.src, &self.dst)
  }
}

impl From<(Point, Point)> for LineSegment {
  fn from(segment: (Point, Point)) -> LineSegment {
    LineSegment::new(segment.0, segment.1)
  }
}

///////////////////////////////////////////////////////////////////////////////
// ISegment

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ISegment {
  /// The segments share exactly one point.
  Crossing,
  /// The segments lie on the same infinite line. No attempt is made to
  /// distinguish overlapping ranges from disjoint ones.
  Collinear,
}

///////////////////////////////////////////////////////////////////////////////
// Intersects

impl Intersects for &LineSegment {
  type Result = ISegment;

  /// Classify two segments with exact-sign side tests. A strictly positive
  /// product means both endpoints of one segment lie on the same side of the
  /// other's infinite line; a zero product means an endpoint touches the
  /// line and falls through to the straddle branch. No epsilon is applied
  /// here.
  fn intersect(self, other: &LineSegment) -> Option<ISegment> {
    let line1 = self.line();
    let d1 = line1.eval_at(&other.src);
    let d2 = line1.eval_at(&other.dst);
    if d1 * d2 > 0.0 {
      return None;
    }
    // `other` straddles the infinite extension of `self`, but may still miss
    // the segment itself. Repeat the side test the other way around.
    let line2 = other.line();
    let d1 = line2.eval_at(&self.src);
    let d2 = line2.eval_at(&self.dst);
    if d1 * d2 > 0.0 {
      return None;
    }
    if line1.is_parallel_to(&line2) {
      Some(ISegment::Collinear)
    } else {
      Some(ISegment::Crossing)
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests
