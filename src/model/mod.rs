//! Value types of the grid engine (pure data, no engine logic).

pub mod cell_space;
pub mod geometry;
pub mod index_path;
pub mod range;

// Re-export for convenience
pub use cell_space::CellSpace;
pub use geometry::{Point, Rect, Size};
pub use index_path::IndexPath;
pub use range::{IndexPathRange, RowSlice};
