use std::collections::BTreeSet;

use super::LineSegment;
use super::Point;
use crate::Error;
use crate::Intersects;

/// Relative nudge applied to a probe's y-coordinate when the test ray would
/// pass exactly through a vertex height.
///
/// A horizontal ray through a vertex can register against the two adjacent
/// edges inconsistently (double-count or miss), corrupting the crossing
/// parity. Nudging the probe just past the vertex height, for the affected
/// edge's test only, avoids the coincidence without biasing the other edges.
/// The nudge is relative to the coordinate magnitude with a floor of one
/// unit, so it stays effective for vertices at height zero.
pub const RAY_NUDGE: f64 = 1e-10;

///////////////////////////////////////////////////////////////////////////////
// BoundingBox

/// Axis-aligned rectangle spanning a point set's coordinate extremes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
  min: Point,
  max: Point,
}

impl BoundingBox {
  pub fn min(&self) -> &Point {
    &self.min
  }

  pub fn max(&self) -> &Point {
    &self.max
  }

  /// True iff `pt` lies within the box, boundary included.
  pub fn contains(&self, pt: &Point) -> bool {
    self.min.x() <= pt.x() && pt.x() <= self.max.x() && self.min.y() <= pt.y() && pt.y() <= self.max.y()
  }
}

///////////////////////////////////////////////////////////////////////////////
// Polygon

/// A simple polygon: an ordered sequence of at least three vertices,
/// implicitly closed. Read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
  vertices: Vec<Point>,
}

impl Polygon {
  pub fn new(vertices: Vec<Point>) -> Result<Polygon, Error> {
    let p = Polygon::new_unchecked(vertices);
    p.validate()?;
    Ok(p)
  }

  /// Skips validation. Queries assume at least three distinct vertices.
  pub fn new_unchecked(vertices: Vec<Point>) -> Polygon {
    Polygon { vertices }
  }

  pub fn validate(&self) -> Result<(), Error> {
    if self.vertices.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    let mut seen = BTreeSet::new();
    for pt in self.iter() {
      if !seen.insert(pt) {
        return Err(Error::DuplicatePoints);
      }
    }
    Ok(())
  }

  pub fn iter(&self) -> impl Iterator<Item = &Point> {
    self.vertices.iter()
  }

  /// Edges in vertex order, wrapping from the last vertex back to the first.
  pub fn iter_boundary_edges(&self) -> impl Iterator<Item = LineSegment> + '_ {
    let n = self.vertices.len();
    (0..n).map(move |i| LineSegment::new(self.vertices[i], self.vertices[(i + 1) % n]))
  }

  /// Recomputed per call; the extremes are cheap and not cached.
  pub fn bounding_box(&self) -> BoundingBox {
    let mut min = self.vertices[0];
    let mut max = self.vertices[0];
    for pt in &self.vertices[1..] {
      min = Point::new_unchecked(min.x().min(pt.x()), min.y().min(pt.y()));
      max = Point::new_unchecked(max.x().max(pt.x()), max.y().max(pt.y()));
    }
    BoundingBox { min, max }
  }

  pub fn signed_area(&self) -> f64 {
    self.signed_area_2x() / 2.0
  }

  /// Twice the signed area. Positive for counter-clockwise vertex order.
  pub fn signed_area_2x(&self) -> f64 {
    self
      .iter_boundary_edges()
      .map(|edge| edge.src.x() * edge.dst.y() - edge.dst.x() * edge.src.y())
      .sum()
  }

  /// Center of mass of the polygon's interior. The polygon must have
  /// non-zero area.
  pub fn centroid(&self) -> Point {
    let mut cx = 0.0;
    let mut cy = 0.0;
    for edge in self.iter_boundary_edges() {
      let cross = edge.src.x() * edge.dst.y() - edge.dst.x() * edge.src.y();
      cx += (edge.src.x() + edge.dst.x()) * cross;
      cy += (edge.src.y() + edge.dst.y()) * cross;
    }
    let scale = 3.0 * self.signed_area_2x();
    Point::new_unchecked(cx / scale, cy / scale)
  }

  /// Ray-casting point-in-polygon test.
  ///
  /// Casts a ray from `point` to a reference point left of the polygon's
  /// horizontal extent and counts boundary crossings; an odd count means
  /// inside. A probe exactly equal to a vertex is inside by definition.
  ///
  /// Two documented approximations: a collinear edge overlap counts as a
  /// single crossing, and points lying exactly on an edge are not reliably
  /// classified. Callers should pick sampling grids that avoid exact edge
  /// coincidence.
  pub fn contains(&self, point: &Point) -> bool {
    if self.vertices.iter().any(|v| v == point) {
      return true;
    }
    self.ray_crossings(point) % 2 == 1
  }

  /// Number of boundary edges crossed by the ray from `point` to the
  /// outside reference point `(xmin - 1, point.y)`.
  pub(crate) fn ray_crossings(&self, point: &Point) -> usize {
    let bound = Point::new_unchecked(self.bounding_box().min().x() - 1.0, point.y());
    let mut crossings = 0;
    for edge in self.iter_boundary_edges() {
      // Move the probe off the vertex height for this edge's test only.
      let probe = if point.y() == edge.src.y() || point.y() == edge.dst.y() {
        nudged_up(point)
      } else {
        *point
      };
      let ray = LineSegment::new(bound, probe);
      if ray.intersect(&edge).is_some() {
        crossings += 1;
      }
    }
    crossings
  }
}

fn nudged_up(point: &Point) -> Point {
  let y = point.y();
  Point::new_unchecked(point.x(), y + RAY_NUDGE * y.abs().max(1.0))
}

///////////////////////////////////////////////////////////////////////////////
// Tests
