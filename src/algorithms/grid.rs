use std::collections::BTreeSet;

use crate::data::{Point, Polygon};
use crate::Error;

/// Enumerate the grid `(xmin + i*dx, ymin + j*dy)` over the polygon's
/// bounding box and keep the points that classify as inside.
///
/// The grid coordinates are deterministic arithmetic progressions, so calling
/// this twice with identical inputs returns identical sets. Non-positive or
/// non-finite intervals fail with [`Error::InvalidInterval`] before the sweep
/// starts; both loop bounds are then finite and the sweep always terminates.
pub fn interior_grid_points(
  polygon: &Polygon,
  intervals: (f64, f64),
) -> Result<BTreeSet<Point>, Error> {
  let (dx, dy) = intervals;
  if !(dx > 0.0) || !(dy > 0.0) || !dx.is_finite() || !dy.is_finite() {
    return Err(Error::InvalidInterval);
  }
  polygon.validate()?;

  let bbox = polygon.bounding_box();
  let (xmin, ymin) = (bbox.min().x(), bbox.min().y());
  let (xmax, ymax) = (bbox.max().x(), bbox.max().y());

  let mut interior = BTreeSet::new();
  let mut i: u64 = 0;
  loop {
    let x = xmin + i as f64 * dx;
    if x > xmax {
      break;
    }
    let mut j: u64 = 0;
    loop {
      let y = ymin + j as f64 * dy;
      if y > ymax {
        break;
      }
      let pt = Point::new_unchecked(x, y);
      if polygon.contains(&pt) {
        interior.insert(pt);
      }
      j += 1;
    }
    i += 1;
  }
  Ok(interior)
}
