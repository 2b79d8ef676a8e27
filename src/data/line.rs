use super::Point;

/// Infinite line in standard form `a*x + b*y + c = 0`.
///
/// Derived from a segment's two endpoints and recomputed per query; the
/// segment direction only flips the sign of all three coefficients, which
/// never changes which side of the line a point is on relative to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
  pub a: f64,
  pub b: f64,
  pub c: f64,
}

impl Line {
  pub fn through(p: &Point, q: &Point) -> Line {
    Line {
      a: q.y() - p.y(),
      b: p.x() - q.x(),
      c: q.x() * p.y() - p.x() * q.y(),
    }
  }

  /// Signed evaluation. Zero iff `pt` lies on the line; points on opposite
  /// sides evaluate with opposite signs.
  pub fn eval_at(&self, pt: &Point) -> f64 {
    self.a * pt.x() + self.b * pt.y() + self.c
  }

  /// Exact parallelism test: the cross term of the two normals is zero.
  pub fn is_parallel_to(&self, other: &Line) -> bool {
    self.a * other.b - other.a * self.b == 0.0
  }
}
