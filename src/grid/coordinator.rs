//! The grid coordinator: geometry, panes, provider, and host effects
//! behind one synchronous API.

use std::fmt;
use std::mem;

use tracing::{debug, trace};

use crate::config::GridConfig;
use crate::grid::frame::{GridFrame, PaneFrame};
use crate::layout::{anchor_index, Axis, GeometryCache, SizingSource};
use crate::model::{IndexPath, Point, Rect, Size};
use crate::provider::CellProvider;
use crate::viewport::{PaneId, Viewport};

/// A scroll the host must apply to one of its pane containers.
///
/// The engine updates its own pane origins synchronously; these commands
/// exist solely to move the host's scroll containers into agreement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    /// Pane whose container must move.
    pub pane: PaneId,
    /// Target x offset, when the command moves the horizontal axis.
    pub x: Option<f64>,
    /// Target y offset, when the command moves the vertical axis.
    pub y: Option<f64>,
    /// Whether the host should animate the move.
    pub animated: bool,
}

/// A programmatic scroll request against the body pane.
///
/// An omitted axis leaves that axis where it is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollTarget {
    /// Requested x offset.
    pub x: Option<f64>,
    /// Requested y offset.
    pub y: Option<f64>,
    /// Whether the host should animate the move.
    pub animated: bool,
}

impl ScrollTarget {
    /// Target an absolute body offset on both axes, without animation.
    pub fn offset(x: f64, y: f64) -> Self {
        ScrollTarget {
            x: Some(x),
            y: Some(y),
            animated: false,
        }
    }
}

/// Coordinator for a four-pane virtualized grid.
///
/// Owns the per-axis geometry, the four pane viewports, and the cell
/// provider. Every operation is synchronous and infallible: out-of-range
/// queries read as zero-sized geometry and degrade to an empty window.
/// Side effects the host must apply (container scrolls and render
/// passes) are queued and drained with
/// [`GridView::take_scroll_commands`] and
/// [`GridView::take_render_request`].
///
/// # Examples
///
/// ```
/// use scrollgrid::{GridConfig, GridView, IndexPath, Size};
///
/// let config = GridConfig::new(100, 26).with_frozen(1, 1);
/// let mut grid = GridView::new(config, |path: IndexPath| path.to_string());
/// grid.set_viewport_size(Size::new(800.0, 600.0));
/// let frame = grid.materialize();
/// assert!(frame.cell_count() > 0);
/// ```
pub struct GridView<P: CellProvider> {
    config: GridConfig,
    geometry: GeometryCache,
    provider: P,
    corner: Viewport<P::Content>,
    column_header: Viewport<P::Content>,
    row_header: Viewport<P::Content>,
    body: Viewport<P::Content>,
    grid_size: Option<Size>,
    frozen_extent: Size,
    scroll_commands: Vec<ScrollCommand>,
    render_requested: bool,
}

impl<P: CellProvider> GridView<P> {
    /// Build a grid with the default constant cell size on both axes.
    pub fn new(config: GridConfig, provider: P) -> Self {
        Self::with_sizing(
            config,
            provider,
            SizingSource::default(),
            SizingSource::default(),
        )
    }

    /// Build a grid with explicit per-axis sizing sources.
    pub fn with_sizing(
        config: GridConfig,
        provider: P,
        row_source: SizingSource,
        column_source: SizingSource,
    ) -> Self {
        let frozen_rows = config.effective_frozen_rows();
        let frozen_columns = config.effective_frozen_columns();
        let rows = config.row_bound();
        let columns = config.column_bound();
        let corner = Viewport::new(
            PaneId::Corner,
            0,
            0,
            Some(frozen_rows),
            Some(frozen_columns),
        );
        let column_header = Viewport::new(
            PaneId::ColumnHeader,
            0,
            frozen_columns,
            Some(frozen_rows),
            columns.map(|count| count - frozen_columns),
        );
        let row_header = Viewport::new(
            PaneId::RowHeader,
            frozen_rows,
            0,
            rows.map(|count| count - frozen_rows),
            Some(frozen_columns),
        );
        let body = Viewport::new(
            PaneId::Body,
            frozen_rows,
            frozen_columns,
            rows.map(|count| count - frozen_rows),
            columns.map(|count| count - frozen_columns),
        );
        GridView {
            config,
            geometry: GeometryCache::new(row_source, column_source),
            provider,
            corner,
            column_header,
            row_header,
            body,
            grid_size: None,
            frozen_extent: Size::ZERO,
            scroll_commands: Vec::new(),
            render_requested: false,
        }
    }

    /// The grid's configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Read-only view of one pane's state.
    pub fn pane(&self, id: PaneId) -> &Viewport<P::Content> {
        match id {
            PaneId::Corner => &self.corner,
            PaneId::ColumnHeader => &self.column_header,
            PaneId::RowHeader => &self.row_header,
            PaneId::Body => &self.body,
        }
    }

    /// Current body scroll offset, in the body pane's own space.
    pub fn body_origin(&self) -> Point {
        self.body.visible_origin()
    }

    /// Pixel extent of the frozen region, as of the last layout pass.
    pub fn frozen_extent(&self) -> Size {
        self.frozen_extent
    }

    /// Total pixel content size.
    ///
    /// Bounded axes report the extent through the bound, measuring any
    /// indices not yet seen; an unbounded axis reports the extent
    /// measured so far, the best value that exists for it.
    pub fn content_size(&self) -> Size {
        let w = match self.config.column_bound() {
            Some(count) => self.geometry.extent_through(Axis::Column, count),
            None => {
                debug!("column axis unbounded; content size uses measured extent");
                self.geometry.axis(Axis::Column).measured_extent()
            }
        };
        let h = match self.config.row_bound() {
            Some(count) => self.geometry.extent_through(Axis::Row, count),
            None => {
                debug!("row axis unbounded; content size uses measured extent");
                self.geometry.axis(Axis::Row).measured_extent()
            }
        };
        Size::new(w, h)
    }

    /// Global rectangle of one cell.
    pub fn rect_for_index_path(&self, path: IndexPath) -> Rect {
        self.geometry.rect_for_index_path(path)
    }

    /// The cell whose region contains a global content offset.
    pub fn index_path_at_offset(&self, offset: Point) -> IndexPath {
        let row = anchor_index(
            self.geometry.axis(Axis::Row),
            0,
            self.config.row_bound(),
            offset.y,
        );
        let column = anchor_index(
            self.geometry.axis(Axis::Column),
            0,
            self.config.column_bound(),
            offset.x,
        );
        IndexPath::new(row, column)
    }

    /// Report the pixel size available to the whole grid.
    ///
    /// Splits the area into the four pane viewports along the frozen
    /// extents and requests a render. The first call is the grid's
    /// Unmeasured → Ready transition; later calls handle host resizes.
    pub fn set_viewport_size(&mut self, size: Size) {
        debug!(w = size.w, h = size.h, "grid viewport size set");
        self.grid_size = Some(size);
        self.refresh_layout();
        self.request_render();
    }

    /// Force full geometry remeasurement and a re-render.
    ///
    /// Idempotent when the sizing sources report the same values again.
    /// Cell caches and scroll offsets are left alone.
    pub fn layout(&mut self) {
        self.geometry.reset_axis(Axis::Row);
        self.geometry.reset_axis(Axis::Column);
        self.refresh_layout();
        self.request_render();
    }

    /// Replace the row sizing source; remeasures and resets scrolling.
    pub fn set_row_sizing(&mut self, source: SizingSource) {
        self.geometry.set_source(Axis::Row, source);
        self.reset_scroll_offset();
    }

    /// Replace the column sizing source; remeasures and resets scrolling.
    pub fn set_column_sizing(&mut self, source: SizingSource) {
        self.geometry.set_source(Axis::Column, source);
        self.reset_scroll_offset();
    }

    /// Remeasure pane layout and return all panes to origin (0, 0).
    ///
    /// Queues non-animated scroll commands for every scrollable pane.
    pub fn reset_scroll_offset(&mut self) {
        self.refresh_layout();
        self.column_header.set_visible_origin(Point::ZERO);
        self.row_header.set_visible_origin(Point::ZERO);
        self.body.set_visible_origin(Point::ZERO);
        self.push_scroll_command(ScrollCommand {
            pane: PaneId::ColumnHeader,
            x: Some(0.0),
            y: None,
            animated: false,
        });
        self.push_scroll_command(ScrollCommand {
            pane: PaneId::RowHeader,
            x: None,
            y: Some(0.0),
            animated: false,
        });
        self.push_scroll_command(ScrollCommand {
            pane: PaneId::Body,
            x: Some(0.0),
            y: Some(0.0),
            animated: false,
        });
        self.request_render();
    }

    /// Record a host-driven body scroll and keep the headers in step.
    ///
    /// The body container already sits at `origin`, so only the header
    /// panes that actually moved get scroll commands. Requests a render
    /// when anything changed.
    pub fn set_body_origin(&mut self, origin: Point) {
        let previous = self.body.visible_origin();
        self.body.set_visible_origin(origin);
        if self.sync_headers(previous) {
            self.request_render();
        }
    }

    /// Programmatic scroll of the body pane.
    ///
    /// Offsets are clamped per axis to the scrollable span, the headers
    /// follow, and a command telling the host to move its body container
    /// is queued. A target with both axes omitted is a no-op.
    pub fn scroll_to(&mut self, target: ScrollTarget) {
        if target.x.is_none() && target.y.is_none() {
            return;
        }
        let previous = self.body.visible_origin();
        let x = target
            .x
            .map_or(previous.x, |x| self.clamp_offset(Axis::Column, x));
        let y = target
            .y
            .map_or(previous.y, |y| self.clamp_offset(Axis::Row, y));
        self.body.set_visible_origin(Point::new(x, y));
        self.sync_headers(previous);
        self.push_scroll_command(ScrollCommand {
            pane: PaneId::Body,
            x: target.x.map(|_| x),
            y: target.y.map(|_| y),
            animated: target.animated,
        });
        self.request_render();
    }

    /// Scroll so the given cell's rectangle origin becomes the body
    /// offset, clamped like any other scroll.
    pub fn scroll_to_index_path(&mut self, path: IndexPath, animated: bool) {
        let rect = self.geometry.rect_for_index_path(path);
        self.scroll_to(ScrollTarget {
            x: Some(rect.x),
            y: Some(rect.y),
            animated,
        });
    }

    /// Vertical-only convenience: scroll the given row to the top edge.
    pub fn scroll_to_row(&mut self, row: usize, animated: bool) {
        let y = self.geometry.distance_for(Axis::Row, row);
        self.scroll_to(ScrollTarget {
            x: None,
            y: Some(y),
            animated,
        });
    }

    /// Drop every pane's cell cache and request one render pass.
    ///
    /// Geometry is untouched; every currently visible cell is
    /// re-requested from the provider on the next materialization.
    pub fn render_all_items(&mut self) {
        debug!("all cell caches cleared");
        for pane in self.panes_mut() {
            pane.clear_all();
        }
        self.request_render();
    }

    /// Re-render exactly one cell.
    pub fn render_item_at_index_path(&mut self, path: IndexPath) {
        self.clear_path(path);
        self.request_render();
    }

    /// Re-render a batch of cells with a single render pass.
    pub fn render_items_at_index_paths(&mut self, paths: &[IndexPath]) {
        for &path in paths {
            self.clear_path(path);
        }
        self.request_render();
    }

    /// Re-render every cell of one row.
    pub fn render_items_at_row(&mut self, row: usize) {
        self.clear_row(row);
        self.request_render();
    }

    /// Re-render every cell of the given rows with a single render pass.
    pub fn render_items_at_rows(&mut self, rows: &[usize]) {
        for &row in rows {
            self.clear_row(row);
        }
        self.request_render();
    }

    /// Re-render every cell of one column.
    pub fn render_items_at_column(&mut self, column: usize) {
        self.clear_column(column);
        self.request_render();
    }

    /// Re-render every cell of the given columns with a single render
    /// pass.
    pub fn render_items_at_columns(&mut self, columns: &[usize]) {
        for &column in columns {
            self.clear_column(column);
        }
        self.request_render();
    }

    /// Resolve and materialize all four panes.
    ///
    /// Unmeasured panes and degenerate windows contribute empty draw
    /// lists; the call itself never fails.
    pub fn materialize(&mut self) -> GridFrame<P::Content> {
        let corner = PaneFrame {
            pane: PaneId::Corner,
            rows: self
                .corner
                .materialize(&self.geometry, &self.provider, &self.config),
        };
        let column_header = PaneFrame {
            pane: PaneId::ColumnHeader,
            rows: self
                .column_header
                .materialize(&self.geometry, &self.provider, &self.config),
        };
        let row_header = PaneFrame {
            pane: PaneId::RowHeader,
            rows: self
                .row_header
                .materialize(&self.geometry, &self.provider, &self.config),
        };
        let body = PaneFrame {
            pane: PaneId::Body,
            rows: self
                .body
                .materialize(&self.geometry, &self.provider, &self.config),
        };
        GridFrame {
            corner,
            column_header,
            row_header,
            body,
        }
    }

    /// Drain the queued scroll commands, oldest first.
    pub fn take_scroll_commands(&mut self) -> Vec<ScrollCommand> {
        mem::take(&mut self.scroll_commands)
    }

    /// Consume the pending render request, if any.
    pub fn take_render_request(&mut self) -> bool {
        mem::replace(&mut self.render_requested, false)
    }

    fn refresh_layout(&mut self) {
        let Some(grid) = self.grid_size else {
            return;
        };
        let frozen_rows = self.config.effective_frozen_rows();
        let frozen_columns = self.config.effective_frozen_columns();
        let frozen_width = self.geometry.extent_through(Axis::Column, frozen_columns);
        let frozen_height = self.geometry.extent_through(Axis::Row, frozen_rows);
        self.frozen_extent = Size::new(frozen_width, frozen_height);
        let remaining_width = (grid.w - frozen_width).max(0.0);
        let remaining_height = (grid.h - frozen_height).max(0.0);
        self.corner
            .set_visible_size(Size::new(frozen_width, frozen_height));
        self.column_header
            .set_visible_size(Size::new(remaining_width, frozen_height));
        self.row_header
            .set_visible_size(Size::new(frozen_width, remaining_height));
        self.body
            .set_visible_size(Size::new(remaining_width, remaining_height));
        trace!(
            frozen_w = frozen_width,
            frozen_h = frozen_height,
            body_w = remaining_width,
            body_h = remaining_height,
            "pane layout refreshed"
        );
    }

    /// Clamp a requested body offset to the scrollable span of one axis:
    /// total content minus the frozen extent minus the body viewport,
    /// floored at zero. Unbounded axes clamp at zero only.
    fn clamp_offset(&self, axis: Axis, requested: f64) -> f64 {
        let requested = requested.max(0.0);
        let Some(count) = (match axis {
            Axis::Row => self.config.row_bound(),
            Axis::Column => self.config.column_bound(),
        }) else {
            return requested;
        };
        let content = self.geometry.extent_through(axis, count);
        let (frozen, viewport) = match axis {
            Axis::Row => (
                self.frozen_extent.h,
                self.body.visible_size().map_or(0.0, |size| size.h),
            ),
            Axis::Column => (
                self.frozen_extent.w,
                self.body.visible_size().map_or(0.0, |size| size.w),
            ),
        };
        requested.min((content - frozen - viewport).max(0.0))
    }

    /// Bring the header panes in line with the body origin, emitting a
    /// scroll command per axis that moved. Returns whether anything did.
    fn sync_headers(&mut self, previous: Point) -> bool {
        let current = self.body.visible_origin();
        if current.x != previous.x {
            self.column_header
                .set_visible_origin(Point::new(current.x, 0.0));
            self.push_scroll_command(ScrollCommand {
                pane: PaneId::ColumnHeader,
                x: Some(current.x),
                y: None,
                animated: false,
            });
        }
        if current.y != previous.y {
            self.row_header
                .set_visible_origin(Point::new(0.0, current.y));
            self.push_scroll_command(ScrollCommand {
                pane: PaneId::RowHeader,
                x: None,
                y: Some(current.y),
                animated: false,
            });
        }
        current != previous
    }

    fn panes_mut(&mut self) -> [&mut Viewport<P::Content>; 4] {
        [
            &mut self.corner,
            &mut self.column_header,
            &mut self.row_header,
            &mut self.body,
        ]
    }

    fn clear_path(&mut self, path: IndexPath) {
        for pane in self.panes_mut() {
            if pane.contains_row(path.row) && pane.contains_column(path.column) {
                pane.clear_cell(path);
            }
        }
    }

    fn clear_row(&mut self, row: usize) {
        for pane in self.panes_mut() {
            if pane.contains_row(row) {
                pane.clear_row(row);
            }
        }
    }

    fn clear_column(&mut self, column: usize) {
        for pane in self.panes_mut() {
            if pane.contains_column(column) {
                pane.clear_column(column);
            }
        }
    }

    fn push_scroll_command(&mut self, command: ScrollCommand) {
        trace!(
            pane = %command.pane,
            x = ?command.x,
            y = ?command.y,
            animated = command.animated,
            "scroll command queued"
        );
        self.scroll_commands.push(command);
    }

    fn request_render(&mut self) {
        self.render_requested = true;
    }
}

impl<P: CellProvider> fmt::Debug for GridView<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridView")
            .field("config", &self.config)
            .field("grid_size", &self.grid_size)
            .field("frozen_extent", &self.frozen_extent)
            .field("render_requested", &self.render_requested)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
