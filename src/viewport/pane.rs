//! Per-pane state: origin, measured size, cell cache, materialization.

use std::collections::HashMap;
use std::fmt;

use bitflags::bitflags;
use tracing::{debug, trace};

use crate::config::GridConfig;
use crate::layout::{expand_range, resolve_range, Axis, GeometryCache, ResolveParams};
use crate::model::{IndexPath, Point, Rect, Size};
use crate::provider::CellProvider;

/// The four independently scrolling regions of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneId {
    /// Frozen rows x frozen columns, top-left. Never scrolls.
    Corner,
    /// Frozen rows over the scrollable columns. Scrolls horizontally.
    ColumnHeader,
    /// Scrollable rows in the frozen columns. Scrolls vertically.
    RowHeader,
    /// The main scrollable region. Scrolls on both axes.
    Body,
}

impl PaneId {
    /// All four panes, in draw order.
    pub const ALL: [PaneId; 4] = [
        PaneId::Corner,
        PaneId::ColumnHeader,
        PaneId::RowHeader,
        PaneId::Body,
    ];

    /// The axes this pane is allowed to scroll along.
    pub fn scroll_axes(self) -> ScrollAxes {
        match self {
            PaneId::Corner => ScrollAxes::empty(),
            PaneId::ColumnHeader => ScrollAxes::HORIZONTAL,
            PaneId::RowHeader => ScrollAxes::VERTICAL,
            PaneId::Body => ScrollAxes::HORIZONTAL | ScrollAxes::VERTICAL,
        }
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaneId::Corner => "corner",
            PaneId::ColumnHeader => "column_header",
            PaneId::RowHeader => "row_header",
            PaneId::Body => "body",
        };
        f.write_str(name)
    }
}

bitflags! {
    /// Scroll capability mask of a pane.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ScrollAxes: u8 {
        /// May move along x.
        const HORIZONTAL = 1 << 0;
        /// May move along y.
        const VERTICAL = 1 << 1;
    }
}

/// One cell ready to draw: its path, its rectangle in pane-local
/// coordinates (cell-space inset applied), and the cached content.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterializedCell<C> {
    /// The cell's index path.
    pub path: IndexPath,
    /// Drawable rectangle relative to the pane's content origin.
    pub rect: Rect,
    /// Provider content, cached until invalidated.
    pub content: C,
}

/// One materialized row, cells in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterializedRow<C> {
    /// Row index.
    pub row: usize,
    /// Cells of the row, left to right.
    pub cells: Vec<MaterializedCell<C>>,
}

/// Controller state for one pane.
///
/// A pane starts unmeasured and renders nothing until its pixel size is
/// known; from then on every scroll or invalidation is a self-loop on the
/// ready state. The pane owns its cell cache exclusively; geometry is
/// borrowed read-only at materialization time.
#[derive(Debug)]
pub struct Viewport<C> {
    id: PaneId,
    row_offset: usize,
    column_offset: usize,
    local_rows: Option<usize>,
    local_columns: Option<usize>,
    scroll_axes: ScrollAxes,
    visible_origin: Point,
    visible_size: Option<Size>,
    cells: HashMap<usize, HashMap<usize, C>>,
}

impl<C: Clone> Viewport<C> {
    /// Create a pane covering the given global index spans.
    ///
    /// `local_rows`/`local_columns` of `None` mean the pane grows on
    /// demand along that axis.
    pub fn new(
        id: PaneId,
        row_offset: usize,
        column_offset: usize,
        local_rows: Option<usize>,
        local_columns: Option<usize>,
    ) -> Self {
        Viewport {
            id,
            row_offset,
            column_offset,
            local_rows,
            local_columns,
            scroll_axes: id.scroll_axes(),
            visible_origin: Point::ZERO,
            visible_size: None,
            cells: HashMap::new(),
        }
    }

    /// Which pane this is.
    pub fn id(&self) -> PaneId {
        self.id
    }

    /// First global row belonging to the pane.
    pub fn row_offset(&self) -> usize {
        self.row_offset
    }

    /// First global column belonging to the pane.
    pub fn column_offset(&self) -> usize {
        self.column_offset
    }

    /// Pane-local scroll offset.
    pub fn visible_origin(&self) -> Point {
        self.visible_origin
    }

    /// Measured pixel size, if the host has reported one yet.
    pub fn visible_size(&self) -> Option<Size> {
        self.visible_size
    }

    /// True once the pane knows its pixel size.
    pub fn is_ready(&self) -> bool {
        self.visible_size.is_some()
    }

    /// Record the pane's pixel size (the Unmeasured → Ready transition).
    pub fn set_visible_size(&mut self, size: Size) {
        self.visible_size = Some(size);
    }

    /// Update the local scroll offset.
    ///
    /// Components along axes the pane cannot scroll are ignored, so the
    /// corner never moves and headers move on their one axis only. Does
    /// not instruct any host scroll container; that is the coordinator's
    /// channel.
    pub fn set_visible_origin(&mut self, origin: Point) {
        let next = Point::new(
            if self.scroll_axes.contains(ScrollAxes::HORIZONTAL) {
                origin.x
            } else {
                self.visible_origin.x
            },
            if self.scroll_axes.contains(ScrollAxes::VERTICAL) {
                origin.y
            } else {
                self.visible_origin.y
            },
        );
        trace!(pane = %self.id, x = next.x, y = next.y, "visible origin updated");
        self.visible_origin = next;
    }

    /// True when the pane's row span includes `row`.
    pub fn contains_row(&self, row: usize) -> bool {
        row >= self.row_offset
            && self
                .local_rows
                .map_or(true, |count| row < self.row_offset + count)
    }

    /// True when the pane's column span includes `column`.
    pub fn contains_column(&self, column: usize) -> bool {
        column >= self.column_offset
            && self
                .local_columns
                .map_or(true, |count| column < self.column_offset + count)
    }

    /// Drop one cached cell; the next materialization re-requests it.
    pub fn clear_cell(&mut self, path: IndexPath) {
        if let Some(row) = self.cells.get_mut(&path.row) {
            row.remove(&path.column);
            if row.is_empty() {
                self.cells.remove(&path.row);
            }
        }
    }

    /// Drop every cached cell of one row.
    pub fn clear_row(&mut self, row: usize) {
        self.cells.remove(&row);
    }

    /// Drop every cached cell of one column.
    pub fn clear_column(&mut self, column: usize) {
        for row in self.cells.values_mut() {
            row.remove(&column);
        }
        self.cells.retain(|_, row| !row.is_empty());
    }

    /// Drop the whole cell cache. Geometry is not touched.
    pub fn clear_all(&mut self) {
        self.cells.clear();
    }

    /// True when content for `path` is currently cached.
    pub fn is_cached(&self, path: IndexPath) -> bool {
        self.cells
            .get(&path.row)
            .is_some_and(|row| row.contains_key(&path.column))
    }

    /// Number of cached cells across all rows.
    pub fn cached_cell_count(&self) -> usize {
        self.cells.values().map(HashMap::len).sum()
    }

    /// Resolve the pane's window and produce its draw list.
    ///
    /// Returns rows top to bottom, cells left to right, rectangles in
    /// pane-local coordinates (the pane's content origin subtracted; the
    /// host applies the scroll offset itself). Unmeasured panes and
    /// degenerate windows produce an empty list.
    pub fn materialize<P>(
        &mut self,
        geometry: &GeometryCache,
        provider: &P,
        config: &GridConfig,
    ) -> Vec<MaterializedRow<C>>
    where
        P: CellProvider<Content = C>,
    {
        let Some(viewport) = self.visible_size else {
            return Vec::new();
        };
        let params = ResolveParams {
            origin: self.visible_origin,
            viewport,
            row_offset: self.row_offset,
            column_offset: self.column_offset,
            local_rows: self.local_rows,
            local_columns: self.local_columns,
            preload_rows: config.preload_rows,
            preload_columns: config.preload_columns,
            render_extra_cells: config.render_extra_cells,
        };
        let Some(range) = resolve_range(geometry, &params) else {
            return Vec::new();
        };
        debug!(
            pane = %self.id,
            rows = ?range.rows(),
            columns = ?range.columns(),
            "pane materialized"
        );

        let local_origin = Point::new(
            geometry.distance_for(Axis::Column, self.column_offset),
            geometry.distance_for(Axis::Row, self.row_offset),
        );
        let mut rows = Vec::with_capacity(range.row_count());
        for slice in expand_range(&range) {
            let mut cells = Vec::with_capacity(slice.index_paths.len());
            for path in slice.index_paths {
                let content = self
                    .cells
                    .entry(path.row)
                    .or_default()
                    .entry(path.column)
                    .or_insert_with(|| provider.content_for(path))
                    .clone();
                let rect = geometry
                    .rect_for_index_path(path)
                    .relative_to(local_origin);
                cells.push(MaterializedCell {
                    path,
                    rect: config.cell_space.inset(rect),
                    content,
                });
            }
            rows.push(MaterializedRow {
                row: slice.row,
                cells,
            });
        }
        rows
    }
}

#[cfg(test)]
#[path = "pane_tests.rs"]
mod tests;
