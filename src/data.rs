mod line;
mod line_segment;
pub(crate) mod point;
pub mod polygon;

pub use line::Line;
pub use line_segment::{ISegment, LineSegment};
pub use point::Point;
pub use polygon::{BoundingBox, Polygon, RAY_NUDGE};
