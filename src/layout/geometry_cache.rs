//! Two-axis geometry facade.

use tracing::debug;

use super::axis_geometry::{AxisGeometry, SizingSource};
use crate::model::{IndexPath, Rect, Size};

/// One of the two grid dimensions.
///
/// The geometry cache treats rows and columns symmetrically; everything
/// that works on one axis works on the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The vertical dimension: indices are rows, sizes are heights.
    Row,
    /// The horizontal dimension: indices are columns, sizes are widths.
    Column,
}

/// Sparse, incrementally computed geometry for both axes of a grid.
///
/// Owned by the grid coordinator and read by all four panes. The cell
/// caches of the panes are unrelated to this structure: resetting an axis
/// never touches rendered content, and invalidating content never touches
/// geometry.
#[derive(Debug, Default)]
pub struct GeometryCache {
    rows: AxisGeometry,
    columns: AxisGeometry,
}

impl GeometryCache {
    /// Create a cache with explicit sizing sources per axis.
    pub fn new(row_source: SizingSource, column_source: SizingSource) -> Self {
        GeometryCache {
            rows: AxisGeometry::new(row_source),
            columns: AxisGeometry::new(column_source),
        }
    }

    /// Borrow one axis.
    pub fn axis(&self, axis: Axis) -> &AxisGeometry {
        match axis {
            Axis::Row => &self.rows,
            Axis::Column => &self.columns,
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut AxisGeometry {
        match axis {
            Axis::Row => &mut self.rows,
            Axis::Column => &mut self.columns,
        }
    }

    /// Memoized size of one index along an axis.
    pub fn size_for(&self, axis: Axis, index: usize) -> f64 {
        self.axis(axis).size_for(index)
    }

    /// Memoized leading-edge distance of one index along an axis.
    pub fn distance_for(&self, axis: Axis, index: usize) -> f64 {
        self.axis(axis).distance_for(index)
    }

    /// Pixel extent of the first `count` indices along an axis.
    pub fn extent_through(&self, axis: Axis, count: usize) -> f64 {
        self.axis(axis).extent_through(count)
    }

    /// The cell rectangle of an index path, in grid-global coordinates.
    pub fn rect_for_index_path(&self, path: IndexPath) -> Rect {
        Rect::new(
            self.columns.distance_for(path.column),
            self.rows.distance_for(path.row),
            self.columns.size_for(path.column),
            self.rows.size_for(path.row),
        )
    }

    /// Total content size of a `rows x columns` grid, forcing measurement
    /// of every index on both axes.
    pub fn total_content_size(&self, rows: usize, columns: usize) -> Size {
        Size::new(
            self.columns.extent_through(columns),
            self.rows.extent_through(rows),
        )
    }

    /// Clear one axis's memoized geometry. The other axis and all cell
    /// caches are untouched.
    pub fn reset_axis(&mut self, axis: Axis) {
        debug!(?axis, "geometry axis reset");
        self.axis_mut(axis).reset();
    }

    /// Replace one axis's sizing source, resetting that axis.
    pub fn set_source(&mut self, axis: Axis, source: SizingSource) {
        debug!(?axis, ?source, "sizing source replaced");
        self.axis_mut(axis).set_source(source);
    }
}
