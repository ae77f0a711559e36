//! Visible-window computation: scroll offset in, index-path range out.

use tracing::{debug, warn};

use super::axis_geometry::AxisGeometry;
use super::geometry_cache::{Axis, GeometryCache};
use crate::model::{IndexPath, IndexPathRange, Point, RowSlice, Size};

/// Consecutive zero-size indices tolerated on an unbounded axis before
/// the scan gives up. An all-zero sizing source would otherwise never
/// reach the viewport limit.
const ZERO_RUN_LIMIT: usize = 10_000;

/// Inputs for resolving one pane's visible window.
///
/// Coordinates are pane-local: `origin` is the pane's own scroll offset,
/// and leading edges are measured from the pane's first index
/// (`row_offset`, `column_offset`), so frozen-region extents cancel out
/// of the comparison.
#[derive(Debug, Clone)]
pub struct ResolveParams {
    /// Pane-local scroll offset.
    pub origin: Point,
    /// Pane viewport extents.
    pub viewport: Size,
    /// First global row belonging to the pane.
    pub row_offset: usize,
    /// First global column belonging to the pane.
    pub column_offset: usize,
    /// Local row count; `None` grows on demand.
    pub local_rows: Option<usize>,
    /// Local column count; `None` grows on demand.
    pub local_columns: Option<usize>,
    /// Extra rows materialized at each end of the window.
    pub preload_rows: usize,
    /// Extra columns materialized at each end of the window.
    pub preload_columns: usize,
    /// Allow the preload margin to overflow the bounds.
    pub render_extra_cells: bool,
}

/// The index under a pane-local origin coordinate: the greatest index at
/// or after `index_offset` whose leading edge is at or before `origin`.
///
/// An index whose leading edge equals `origin` exactly is the anchor
/// (ties advance). Negative origins anchor at the pane's first index.
/// The walk extends the distance map on demand, so repeat queries are
/// amortized O(1). On an unbounded axis a zero-size run longer than the
/// scan limit stops the walk at the run's first index, since the leading
/// edge can no longer pass the origin.
pub fn anchor_index(
    geometry: &AxisGeometry,
    index_offset: usize,
    local_count: Option<usize>,
    origin: f64,
) -> usize {
    let base = geometry.distance_for(index_offset);
    let origin = origin.max(0.0);
    let mut index = index_offset;
    let mut zero_run_start = None;
    loop {
        let next = index + 1;
        if let Some(count) = local_count {
            if next >= index_offset + count {
                break;
            }
        }
        if geometry.distance_for(next) - base > origin {
            break;
        }
        if local_count.is_none() {
            if geometry.size_for(index) == 0.0 {
                let start = *zero_run_start.get_or_insert(index);
                if index - start >= ZERO_RUN_LIMIT {
                    warn!(index, "zero-size run on unbounded axis, anchor walk truncated");
                    return start;
                }
            } else {
                zero_run_start = None;
            }
        }
        index = next;
    }
    index
}

/// One axis of the window: inclusive `(first, last)` global indices, or
/// `None` when nothing is to be materialized.
///
/// An index belongs to the visible span iff its leading edge sits
/// strictly before the viewport limit; exact boundary equality excludes,
/// a partially visible trailing index is included. The preload margin
/// then widens both ends, and the bound clamp runs last (skipped when
/// `render_extra` permits overflow).
fn axis_window(
    geometry: &AxisGeometry,
    origin: f64,
    extent: f64,
    index_offset: usize,
    local_count: Option<usize>,
    preload: usize,
    render_extra: bool,
) -> Option<(usize, usize)> {
    if local_count == Some(0) {
        return None;
    }
    let origin = origin.max(0.0);
    let anchor = anchor_index(geometry, index_offset, local_count, origin);
    let first = anchor.saturating_sub(preload).max(index_offset);
    let bound_end = local_count.map(|count| index_offset + count);
    let base = geometry.distance_for(index_offset);

    let mut index = first;
    let mut zero_run = 0usize;
    loop {
        if let Some(end) = bound_end {
            if index >= end {
                break;
            }
        }
        if geometry.distance_for(index) - base - origin >= extent {
            break;
        }
        if bound_end.is_none() {
            if geometry.size_for(index) == 0.0 {
                zero_run += 1;
                if zero_run > ZERO_RUN_LIMIT {
                    warn!(index, "zero-size run on unbounded axis, window truncated");
                    break;
                }
            } else {
                zero_run = 0;
            }
        }
        index += 1;
    }

    let mut end = index + preload;
    if !render_extra {
        if let Some(bound) = bound_end {
            end = end.min(bound);
        }
    }
    if end <= first {
        return None;
    }
    Some((first, end - 1))
}

/// Resolve the rectangular index-path window a pane must materialize.
///
/// `None` is the degenerate window: an unmeasured or zero-extent
/// viewport, or a pane with no local indices on one axis.
pub fn resolve_range(geometry: &GeometryCache, params: &ResolveParams) -> Option<IndexPathRange> {
    let (first_row, last_row) = axis_window(
        geometry.axis(Axis::Row),
        params.origin.y,
        params.viewport.h,
        params.row_offset,
        params.local_rows,
        params.preload_rows,
        params.render_extra_cells,
    )?;
    let (first_column, last_column) = axis_window(
        geometry.axis(Axis::Column),
        params.origin.x,
        params.viewport.w,
        params.column_offset,
        params.local_columns,
        params.preload_columns,
        params.render_extra_cells,
    )?;
    let range = IndexPathRange::from_spans(first_row, last_row, first_column, last_column);
    debug!(rows = ?range.rows(), columns = ?range.columns(), "window resolved");
    Some(range)
}

/// Expand a window into its row-major materialization order: one entry
/// per row, columns left to right within each row. This is the order in
/// which cell content is requested and drawn.
pub fn expand_range(range: &IndexPathRange) -> Vec<RowSlice> {
    range
        .rows()
        .map(|row| RowSlice {
            row,
            index_paths: range
                .columns()
                .map(|column| IndexPath::new(row, column))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
