//! Pane-level view state.
//!
//! Each of the grid's four panes is a [`Viewport`]: an index window into
//! the shared geometry with its own scroll origin, measured size, and
//! cell-content cache. Panes resolve and materialize independently; the
//! coordinator in [`crate::grid`] keeps their origins in step.

mod pane;

// Re-export for convenience.
pub use pane::{MaterializedCell, MaterializedRow, PaneId, ScrollAxes, Viewport};
