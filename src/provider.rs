//! The rendering-collaborator seam.

use crate::model::IndexPath;

/// Supplies renderable content for grid cells.
///
/// The engine treats content as an opaque value: it is requested once per
/// cell, cached by the owning pane, and handed back unchanged until that
/// cell is explicitly invalidated. Implementations must be pure with
/// respect to the index path: the engine is free to call `content_for`
/// in any order and to skip calls for cached cells.
///
/// Any `Fn(IndexPath) -> C` closure is a provider:
///
/// ```
/// use scrollgrid::{CellProvider, IndexPath};
///
/// let provider = |path: IndexPath| format!("cell {path}");
/// assert_eq!(provider.content_for(IndexPath::new(1, 2)), "cell r1c2");
/// ```
pub trait CellProvider {
    /// Opaque per-cell content value, cloned out of the cache on each
    /// materialization.
    type Content: Clone;

    /// Produce content for one cell.
    fn content_for(&self, path: IndexPath) -> Self::Content;
}

impl<F, C> CellProvider for F
where
    F: Fn(IndexPath) -> C,
    C: Clone,
{
    type Content = C;

    fn content_for(&self, path: IndexPath) -> C {
        self(path)
    }
}
