pub mod grid;

#[doc(inline)]
pub use grid::interior_grid_points;
