//! Acceptance test harness for grid-level testing.
//!
//! Provides a counting cell provider and ready-made grid fixtures so the
//! acceptance suites can assert on provider traffic and pane state
//! without repeating the same wiring in every test.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::GridConfig;
use crate::grid::GridView;
use crate::layout::SizingSource;
use crate::model::{IndexPath, Size};
use crate::provider::CellProvider;

/// Cell provider that renders `path.to_string()` and records how often
/// each path was requested.
///
/// Clones share the call log, so a clone kept by the test keeps counting
/// after the grid takes ownership of the original.
#[derive(Clone, Debug, Default)]
pub struct CountingProvider {
    calls: Rc<RefCell<HashMap<IndexPath, usize>>>,
}

impl CountingProvider {
    /// Fresh provider with an empty call log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Times `path` was requested so far.
    pub fn calls_for(&self, path: IndexPath) -> usize {
        self.calls.borrow().get(&path).copied().unwrap_or(0)
    }

    /// Total provider requests across all paths.
    pub fn total_calls(&self) -> usize {
        self.calls.borrow().values().sum()
    }
}

impl CellProvider for CountingProvider {
    type Content = String;

    fn content_for(&self, path: IndexPath) -> String {
        *self.calls.borrow_mut().entry(path).or_insert(0) += 1;
        path.to_string()
    }
}

/// Plain labelling provider for tests that don't inspect traffic.
pub fn labels(path: IndexPath) -> String {
    path.to_string()
}

/// Build a measured grid over a counting provider.
///
/// # Arguments
/// * `config` - Grid configuration under test
/// * `row_size` / `column_size` - Constant cell extents per axis
/// * `viewport` - Pixel size reported to the grid
///
/// The initial render request is drained so tests observe only the
/// effects of their own calls.
pub fn counting_grid(
    config: GridConfig,
    row_size: f64,
    column_size: f64,
    viewport: Size,
) -> (GridView<CountingProvider>, CountingProvider) {
    let provider = CountingProvider::new();
    let mut grid = GridView::with_sizing(
        config,
        provider.clone(),
        SizingSource::Constant(row_size),
        SizingSource::Constant(column_size),
    );
    grid.set_viewport_size(viewport);
    grid.take_render_request();
    (grid, provider)
}

/// Build a measured grid over the plain labelling provider.
pub fn label_grid(
    config: GridConfig,
    row_size: f64,
    column_size: f64,
    viewport: Size,
) -> GridView<fn(IndexPath) -> String> {
    let mut grid = GridView::with_sizing(
        config,
        labels as fn(IndexPath) -> String,
        SizingSource::Constant(row_size),
        SizingSource::Constant(column_size),
    );
    grid.set_viewport_size(viewport);
    grid.take_render_request();
    grid
}
