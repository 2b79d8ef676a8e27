/// Pairwise intersection tests.
///
/// `None` means the two objects are disjoint; `Result` describes how they
/// touch.
pub trait Intersects<T = Self> {
  type Result;
  fn intersect(self, other: T) -> Option<Self::Result>;
}
