//! Per-edge cell insets.

use super::geometry::Rect;

/// Additional inset applied to every materialized cell rectangle.
///
/// Either uniform (one value for all four edges) or per-edge; unset edges
/// default to 0. Insets shrink the cell's drawable rectangle only; the
/// geometry maps (sizes, distances) are unaffected.
///
/// # Examples
/// ```
/// use scrollgrid::CellSpace;
///
/// let uniform = CellSpace::uniform(2.0);
/// let bottom_only = CellSpace { bottom: 1.0, ..CellSpace::default() };
/// assert_eq!(uniform.left, 2.0);
/// assert_eq!(bottom_only.top, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellSpace {
    /// Inset from the leading horizontal edge.
    pub left: f64,
    /// Inset from the leading vertical edge.
    pub top: f64,
    /// Inset from the trailing horizontal edge.
    pub right: f64,
    /// Inset from the trailing vertical edge.
    pub bottom: f64,
}

impl CellSpace {
    /// The same inset on all four edges.
    pub fn uniform(value: f64) -> Self {
        CellSpace {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    /// True when no edge carries an inset.
    pub fn is_zero(&self) -> bool {
        self.left == 0.0 && self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0
    }

    /// Apply the inset to a cell rectangle.
    ///
    /// Extents are clamped at 0 when the insets consume the whole cell.
    pub fn inset(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.x + self.left,
            rect.y + self.top,
            (rect.w - self.left - self.right).max(0.0),
            (rect.h - self.top - self.bottom).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_sets_all_edges() {
        let space = CellSpace::uniform(3.0);
        assert_eq!(space.left, 3.0);
        assert_eq!(space.top, 3.0);
        assert_eq!(space.right, 3.0);
        assert_eq!(space.bottom, 3.0);
        assert!(!space.is_zero());
    }

    #[test]
    fn default_is_zero() {
        assert!(CellSpace::default().is_zero());
    }

    #[test]
    fn inset_moves_edges_inward() {
        let space = CellSpace {
            left: 1.0,
            top: 2.0,
            right: 3.0,
            bottom: 4.0,
        };
        let rect = space.inset(Rect::new(10.0, 10.0, 100.0, 50.0));
        assert_eq!(rect, Rect::new(11.0, 12.0, 96.0, 44.0));
    }

    #[test]
    fn inset_clamps_extents_at_zero() {
        let rect = CellSpace::uniform(40.0).inset(Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(rect.w, 0.0);
        assert_eq!(rect.h, 0.0);
    }
}
