//! Record-backed data grids.
//!
//! A thin convenience layer over [`GridView`] for the common tabular
//! case: a list of records rendered through per-column projections, with
//! a frozen header row on top. Row 0 is the header; row `n + 1` shows
//! record `n`.

use std::fmt;

use crate::config::GridConfig;
use crate::grid::GridView;
use crate::layout::SizingSource;
use crate::model::IndexPath;
use crate::provider::CellProvider;

/// One column of a data grid: a label, an optional fixed width, and the
/// projection from a record to cell content.
pub struct ColumnSpec<T, C> {
    label: String,
    width: Option<f64>,
    header: Option<Box<dyn Fn(usize) -> C>>,
    cell: Box<dyn Fn(&T, IndexPath) -> C>,
}

impl<T, C> ColumnSpec<T, C> {
    /// Create a column from a label and a cell projection.
    pub fn new(
        label: impl Into<String>,
        cell: impl Fn(&T, IndexPath) -> C + 'static,
    ) -> Self {
        ColumnSpec {
            label: label.into(),
            width: None,
            header: None,
            cell: Box::new(cell),
        }
    }

    /// The column's label, shown in the header row unless overridden.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Fix the column's width; unset columns take the default axis size.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Render the header cell from the column index instead of the label.
    pub fn with_header(mut self, header: impl Fn(usize) -> C + 'static) -> Self {
        self.header = Some(Box::new(header));
        self
    }
}

impl<T, C: From<String>> ColumnSpec<T, C> {
    /// Column whose cells render a text projection of the record.
    pub fn text(
        label: impl Into<String>,
        project: impl Fn(&T) -> String + 'static,
    ) -> Self {
        Self::new(label, move |record: &T, _path| C::from(project(record)))
    }
}

impl<T, C> fmt::Debug for ColumnSpec<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("label", &self.label)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

/// A cell provider backed by a record list and column specs.
pub struct DataGridSource<T, C> {
    columns: Vec<ColumnSpec<T, C>>,
    records: Vec<T>,
    row_height: f64,
}

impl<T, C> DataGridSource<T, C> {
    /// Default row height, in pixels.
    pub const DEFAULT_ROW_HEIGHT: f64 = 28.0;

    /// Build a source from columns and records.
    pub fn new(columns: Vec<ColumnSpec<T, C>>, records: Vec<T>) -> Self {
        DataGridSource {
            columns,
            records,
            row_height: Self::DEFAULT_ROW_HEIGHT,
        }
    }

    /// Use a uniform row height other than the default.
    pub fn with_row_height(mut self, height: f64) -> Self {
        self.row_height = height;
        self
    }

    /// Number of records behind the grid.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

impl<T, C: Clone + From<String>> DataGridSource<T, C> {
    /// Consume the source into a ready-to-measure grid: one frozen
    /// header row above the records, column widths from the specs.
    pub fn into_grid(self) -> GridView<Self> {
        let rows = self.records.len() + 1;
        let columns = self.columns.len();
        let widths: Vec<f64> = self
            .columns
            .iter()
            .map(|column| column.width.unwrap_or(SizingSource::DEFAULT_SIZE))
            .collect();
        let row_height = self.row_height;
        GridView::with_sizing(
            GridConfig::new(rows, columns).with_frozen(1, 0),
            self,
            SizingSource::Constant(row_height),
            SizingSource::PerIndex(Box::new(move |index| {
                widths.get(index).copied().unwrap_or(SizingSource::DEFAULT_SIZE)
            })),
        )
    }
}

impl<T, C> fmt::Debug for DataGridSource<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataGridSource")
            .field("columns", &self.columns.len())
            .field("records", &self.records.len())
            .field("row_height", &self.row_height)
            .finish()
    }
}

impl<T, C: Clone + From<String>> CellProvider for DataGridSource<T, C> {
    type Content = C;

    /// Header row from the labels (or header overrides), body rows from
    /// the record projections. Reads outside the records or columns come
    /// back empty rather than failing.
    fn content_for(&self, path: IndexPath) -> C {
        let Some(column) = self.columns.get(path.column) else {
            return C::from(String::new());
        };
        if path.row == 0 {
            return match &column.header {
                Some(header) => header(path.column),
                None => C::from(column.label.clone()),
            };
        }
        match self.records.get(path.row - 1) {
            Some(record) => (column.cell)(record, path),
            None => C::from(String::new()),
        }
    }
}
