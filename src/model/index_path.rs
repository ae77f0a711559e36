//! Cell addressing.

use std::fmt;

/// Identifies one grid cell by row and column index.
///
/// Immutable value with structural equality. Indices are `usize`, so the
/// "negative index" degenerate class is unrepresentable by construction.
///
/// The canonical textual form is `r{row}c{column}`, produced by the
/// [`Display`] impl and used verbatim as the cell cache key and in log
/// events.
///
/// [`Display`]: fmt::Display
///
/// # Examples
/// ```
/// use scrollgrid::IndexPath;
///
/// let path = IndexPath::new(3, 7);
/// assert_eq!(path.to_string(), "r3c7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexPath {
    /// Row index, zero-based.
    pub row: usize,
    /// Column index, zero-based.
    pub column: usize,
}

impl IndexPath {
    /// Create an index path from row and column indices.
    pub fn new(row: usize, column: usize) -> Self {
        IndexPath { row, column }
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.column)
    }
}

impl From<(usize, usize)> for IndexPath {
    fn from((row, column): (usize, usize)) -> Self {
        IndexPath::new(row, column)
    }
}
