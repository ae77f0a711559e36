//! Grid configuration.

use crate::model::CellSpace;

/// Static shape of a grid: bounds, frozen regions, preload margins.
///
/// A bound of 0 means "unbounded, grow on demand" along that axis; the
/// window then never clamps and relies on the sizing source to keep
/// answering. Frozen counts name leading rows/columns pinned outside the
/// scrollable body. Preload margins widen the materialized window beyond
/// the strictly visible rectangle to reduce blanking during fast scrolls.
///
/// Inconsistent values degrade instead of erroring: a frozen count larger
/// than the bound is treated as the bound itself.
///
/// # Examples
/// ```
/// use scrollgrid::GridConfig;
///
/// let config = GridConfig::new(100, 26)
///     .with_frozen(1, 1)
///     .with_preload(2, 2);
/// assert_eq!(config.effective_frozen_rows(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Row count; 0 = unbounded.
    pub rows: usize,
    /// Column count; 0 = unbounded.
    pub columns: usize,
    /// Leading rows pinned outside the scrollable body.
    pub frozen_rows: usize,
    /// Leading columns pinned outside the scrollable body.
    pub frozen_columns: usize,
    /// Extra rows materialized beyond the visible rectangle, each end.
    pub preload_rows: usize,
    /// Extra columns materialized beyond the visible rectangle, each end.
    pub preload_columns: usize,
    /// Allow the preload margin to overflow the nominal grid bounds.
    pub render_extra_cells: bool,
    /// Inset applied to every materialized cell rectangle.
    pub cell_space: CellSpace,
}

impl GridConfig {
    /// Create a config with the given bounds and all other fields at their
    /// defaults.
    pub fn new(rows: usize, columns: usize) -> Self {
        GridConfig {
            rows,
            columns,
            ..GridConfig::default()
        }
    }

    /// Set frozen leading row/column counts.
    pub fn with_frozen(mut self, rows: usize, columns: usize) -> Self {
        self.frozen_rows = rows;
        self.frozen_columns = columns;
        self
    }

    /// Set per-axis preload margins.
    pub fn with_preload(mut self, rows: usize, columns: usize) -> Self {
        self.preload_rows = rows;
        self.preload_columns = columns;
        self
    }

    /// Permit the preload margin to extend past the grid bounds.
    pub fn with_render_extra_cells(mut self, allow: bool) -> Self {
        self.render_extra_cells = allow;
        self
    }

    /// Set the cell inset.
    pub fn with_cell_space(mut self, space: CellSpace) -> Self {
        self.cell_space = space;
        self
    }

    /// Row bound as an option; `None` when unbounded.
    pub fn row_bound(&self) -> Option<usize> {
        (self.rows > 0).then_some(self.rows)
    }

    /// Column bound as an option; `None` when unbounded.
    pub fn column_bound(&self) -> Option<usize> {
        (self.columns > 0).then_some(self.columns)
    }

    /// Frozen row count after degrading to the row bound.
    pub fn effective_frozen_rows(&self) -> usize {
        match self.row_bound() {
            Some(bound) => self.frozen_rows.min(bound),
            None => self.frozen_rows,
        }
    }

    /// Frozen column count after degrading to the column bound.
    pub fn effective_frozen_columns(&self) -> usize {
        match self.column_bound() {
            Some(bound) => self.frozen_columns.min(bound),
            None => self.frozen_columns,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            rows: 0,
            columns: 0,
            frozen_rows: 0,
            frozen_columns: 0,
            preload_rows: 1,
            preload_columns: 1,
            render_extra_cells: false,
            cell_space: CellSpace::default(),
        }
    }
}
