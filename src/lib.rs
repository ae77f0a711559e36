//! scrollgrid
//!
//! Virtualized two-dimensional grid engine with frozen row and column
//! headers.
//!
//! A [`GridView`] owns four pane viewports (corner, column header, row
//! header, body), lazily measured per-axis geometry, and a cell
//! provider. Hosts feed it viewport sizes and scroll offsets; it answers
//! with materialized cell frames plus queued scroll commands and render
//! requests for the host to apply. Everything is synchronous and
//! single-threaded; errors degrade to empty geometry instead of failing.

pub mod config;
pub mod datagrid;
pub mod grid;
pub mod layout;
pub mod logging;
pub mod model;
pub mod provider;
pub mod viewport;

pub use config::GridConfig;
pub use datagrid::{ColumnSpec, DataGridSource};
pub use grid::{GridFrame, GridView, PaneFrame, ScrollCommand, ScrollTarget};
pub use layout::{Axis, SizingSource};
pub use model::{CellSpace, IndexPath, IndexPathRange, Point, Rect, RowSlice, Size};
pub use provider::CellProvider;
pub use viewport::{MaterializedCell, MaterializedRow, PaneId, ScrollAxes, Viewport};

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
