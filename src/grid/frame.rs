//! Frame output: the per-pane draw lists of one materialization pass.

use crate::viewport::{MaterializedRow, PaneId};

/// Draw list of a single pane.
#[derive(Debug, Clone, PartialEq)]
pub struct PaneFrame<C> {
    /// The pane this list belongs to.
    pub pane: PaneId,
    /// Materialized rows, top to bottom.
    pub rows: Vec<MaterializedRow<C>>,
}

impl<C> PaneFrame<C> {
    /// Number of materialized cells in this pane.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|row| row.cells.len()).sum()
    }
}

/// One full materialization pass: all four panes, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct GridFrame<C> {
    /// Top-left frozen intersection.
    pub corner: PaneFrame<C>,
    /// Frozen rows across the scrollable columns.
    pub column_header: PaneFrame<C>,
    /// Frozen columns down the scrollable rows.
    pub row_header: PaneFrame<C>,
    /// The scrollable interior.
    pub body: PaneFrame<C>,
}

impl<C> GridFrame<C> {
    /// The four pane frames in draw order.
    pub fn panes(&self) -> [&PaneFrame<C>; 4] {
        [
            &self.corner,
            &self.column_header,
            &self.row_header,
            &self.body,
        ]
    }

    /// Frame of one pane by id.
    pub fn pane(&self, id: PaneId) -> &PaneFrame<C> {
        match id {
            PaneId::Corner => &self.corner,
            PaneId::ColumnHeader => &self.column_header,
            PaneId::RowHeader => &self.row_header,
            PaneId::Body => &self.body,
        }
    }

    /// Total number of materialized cells across all panes.
    pub fn cell_count(&self) -> usize {
        self.panes().iter().map(|frame| frame.cell_count()).sum()
    }
}
