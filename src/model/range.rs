//! Rectangular cell windows.

use std::ops::RangeInclusive;

use super::index_path::IndexPath;

/// Four corner index paths describing a rectangular window of cells.
///
/// A constructed range is never empty; the degenerate "nothing visible"
/// window is represented by `Option<IndexPathRange>::None` at the
/// resolver boundary instead of corner arithmetic that would underflow.
///
/// # Invariants
/// - `tl.row == tr.row` and `bl.row == br.row`
/// - `tl.column == bl.column` and `tr.column == br.column`
/// - `tl.row <= bl.row` and `tl.column <= tr.column`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexPathRange {
    /// Top-left corner.
    pub tl: IndexPath,
    /// Top-right corner.
    pub tr: IndexPath,
    /// Bottom-left corner.
    pub bl: IndexPath,
    /// Bottom-right corner.
    pub br: IndexPath,
}

impl IndexPathRange {
    /// Build a range from inclusive row and column spans.
    ///
    /// # Panics
    /// In debug builds, panics if a span is inverted.
    pub fn from_spans(
        first_row: usize,
        last_row: usize,
        first_column: usize,
        last_column: usize,
    ) -> Self {
        debug_assert!(first_row <= last_row, "inverted row span");
        debug_assert!(first_column <= last_column, "inverted column span");
        IndexPathRange {
            tl: IndexPath::new(first_row, first_column),
            tr: IndexPath::new(first_row, last_column),
            bl: IndexPath::new(last_row, first_column),
            br: IndexPath::new(last_row, last_column),
        }
    }

    /// Inclusive row span.
    pub fn rows(&self) -> RangeInclusive<usize> {
        self.tl.row..=self.bl.row
    }

    /// Inclusive column span.
    pub fn columns(&self) -> RangeInclusive<usize> {
        self.tl.column..=self.tr.column
    }

    /// Number of rows in the window.
    pub fn row_count(&self) -> usize {
        self.bl.row - self.tl.row + 1
    }

    /// Number of columns in the window.
    pub fn column_count(&self) -> usize {
        self.tr.column - self.tl.column + 1
    }

    /// Total cell count of the window.
    pub fn cell_count(&self) -> usize {
        self.row_count() * self.column_count()
    }

    /// True when the window includes `path`.
    pub fn contains(&self, path: IndexPath) -> bool {
        self.rows().contains(&path.row) && self.columns().contains(&path.column)
    }
}

/// One row of a row-major range expansion: the row index plus the index
/// paths of every cell in that row, left to right.
///
/// The expansion order is the exact order in which cell content is
/// requested from the provider, and the draw order for the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSlice {
    /// Row index this slice belongs to.
    pub row: usize,
    /// Cells of the row in column order.
    pub index_paths: Vec<IndexPath>,
}
