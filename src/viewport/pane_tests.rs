use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::*;
use crate::layout::SizingSource;
use crate::model::CellSpace;

fn geometry() -> GeometryCache {
    GeometryCache::new(SizingSource::Constant(50.0), SizingSource::Constant(100.0))
}

fn config() -> GridConfig {
    GridConfig::new(10, 10).with_preload(0, 0)
}

fn labels(path: IndexPath) -> String {
    path.to_string()
}

type CallLog = Rc<RefCell<HashMap<IndexPath, usize>>>;

fn counting_provider() -> (CallLog, impl Fn(IndexPath) -> String) {
    let calls: CallLog = Rc::new(RefCell::new(HashMap::new()));
    let recorder = Rc::clone(&calls);
    let provider = move |path: IndexPath| {
        *recorder.borrow_mut().entry(path).or_insert(0) += 1;
        path.to_string()
    };
    (calls, provider)
}

fn body_pane() -> Viewport<String> {
    Viewport::new(PaneId::Body, 0, 0, Some(10), Some(10))
}

mod identity {
    use super::*;

    #[test]
    fn scroll_axes_match_pane_roles() {
        assert!(PaneId::Corner.scroll_axes().is_empty());
        assert_eq!(PaneId::ColumnHeader.scroll_axes(), ScrollAxes::HORIZONTAL);
        assert_eq!(PaneId::RowHeader.scroll_axes(), ScrollAxes::VERTICAL);
        assert!(PaneId::Body.scroll_axes().is_all());
    }

    #[test]
    fn display_names_are_stable() {
        let names: Vec<String> = PaneId::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["corner", "column_header", "row_header", "body"]);
    }
}

mod readiness {
    use super::*;

    #[test]
    fn starts_unmeasured_and_renders_nothing() {
        let geometry = geometry();
        let mut pane = body_pane();
        assert!(!pane.is_ready());
        assert!(pane.materialize(&geometry, &labels, &config()).is_empty());
    }

    #[test]
    fn measuring_enables_materialization() {
        let geometry = geometry();
        let mut pane = body_pane();
        pane.set_visible_size(Size::new(200.0, 100.0));
        assert!(pane.is_ready());
        let rows = pane.materialize(&geometry, &labels, &config());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells.len(), 2);
    }
}

mod scrolling {
    use super::*;

    #[test]
    fn corner_ignores_origin_updates() {
        let mut pane: Viewport<String> = Viewport::new(PaneId::Corner, 0, 0, Some(1), Some(1));
        pane.set_visible_origin(Point::new(40.0, 60.0));
        assert_eq!(pane.visible_origin(), Point::ZERO);
    }

    #[test]
    fn column_header_scrolls_horizontally_only() {
        let mut pane: Viewport<String> = Viewport::new(PaneId::ColumnHeader, 0, 1, Some(1), None);
        pane.set_visible_origin(Point::new(40.0, 60.0));
        assert_eq!(pane.visible_origin(), Point::new(40.0, 0.0));
    }

    #[test]
    fn row_header_scrolls_vertically_only() {
        let mut pane: Viewport<String> = Viewport::new(PaneId::RowHeader, 1, 0, None, Some(1));
        pane.set_visible_origin(Point::new(40.0, 60.0));
        assert_eq!(pane.visible_origin(), Point::new(0.0, 60.0));
    }

    #[test]
    fn body_scrolls_on_both_axes() {
        let mut pane = body_pane();
        pane.set_visible_origin(Point::new(40.0, 60.0));
        assert_eq!(pane.visible_origin(), Point::new(40.0, 60.0));
    }
}

mod containment {
    use super::*;

    #[test]
    fn bounded_span_checks_both_ends() {
        let pane: Viewport<String> = Viewport::new(PaneId::Body, 2, 3, Some(4), Some(5));
        assert!(!pane.contains_row(1));
        assert!(pane.contains_row(2));
        assert!(pane.contains_row(5));
        assert!(!pane.contains_row(6));
        assert!(!pane.contains_column(2));
        assert!(pane.contains_column(3));
        assert!(pane.contains_column(7));
        assert!(!pane.contains_column(8));
    }

    #[test]
    fn unbounded_span_has_no_upper_end() {
        let pane: Viewport<String> = Viewport::new(PaneId::Body, 1, 1, None, None);
        assert!(!pane.contains_row(0));
        assert!(pane.contains_row(1_000_000));
    }
}

mod cache {
    use super::*;

    #[test]
    fn content_is_requested_once_per_cell() {
        let geometry = geometry();
        let (calls, provider) = counting_provider();
        let mut pane = body_pane();
        pane.set_visible_size(Size::new(200.0, 100.0));
        pane.materialize(&geometry, &provider, &config());
        pane.materialize(&geometry, &provider, &config());
        assert_eq!(pane.cached_cell_count(), 4);
        assert!(calls.borrow().values().all(|&count| count == 1));
    }

    #[test]
    fn clearing_one_cell_refetches_only_that_cell() {
        let geometry = geometry();
        let (calls, provider) = counting_provider();
        let mut pane = body_pane();
        pane.set_visible_size(Size::new(200.0, 100.0));
        pane.materialize(&geometry, &provider, &config());
        pane.clear_cell(IndexPath::new(0, 0));
        pane.materialize(&geometry, &provider, &config());
        let calls = calls.borrow();
        assert_eq!(calls[&IndexPath::new(0, 0)], 2);
        assert_eq!(calls[&IndexPath::new(0, 1)], 1);
        assert_eq!(calls[&IndexPath::new(1, 1)], 1);
    }

    #[test]
    fn clearing_a_row_drops_its_cells() {
        let geometry = geometry();
        let mut pane = body_pane();
        pane.set_visible_size(Size::new(200.0, 100.0));
        pane.materialize(&geometry, &labels, &config());
        pane.clear_row(0);
        assert_eq!(pane.cached_cell_count(), 2);
        assert!(!pane.is_cached(IndexPath::new(0, 1)));
        assert!(pane.is_cached(IndexPath::new(1, 0)));
    }

    #[test]
    fn clearing_a_column_drops_its_cells() {
        let geometry = geometry();
        let mut pane = body_pane();
        pane.set_visible_size(Size::new(200.0, 100.0));
        pane.materialize(&geometry, &labels, &config());
        pane.clear_column(1);
        assert_eq!(pane.cached_cell_count(), 2);
        assert!(pane.is_cached(IndexPath::new(0, 0)));
        assert!(!pane.is_cached(IndexPath::new(0, 1)));
    }

    #[test]
    fn clear_all_empties_the_cache() {
        let geometry = geometry();
        let mut pane = body_pane();
        pane.set_visible_size(Size::new(200.0, 100.0));
        pane.materialize(&geometry, &labels, &config());
        pane.clear_all();
        assert_eq!(pane.cached_cell_count(), 0);
    }
}

mod output {
    use super::*;

    #[test]
    fn rects_are_relative_to_the_pane_origin() {
        let geometry = geometry();
        let mut pane: Viewport<String> = Viewport::new(PaneId::Body, 1, 1, Some(9), Some(9));
        pane.set_visible_size(Size::new(100.0, 50.0));
        let rows = pane.materialize(&geometry, &labels, &config());
        let first = &rows[0].cells[0];
        assert_eq!(first.path, IndexPath::new(1, 1));
        assert_eq!(first.rect, Rect::new(0.0, 0.0, 100.0, 50.0));
    }

    #[test]
    fn scrolling_does_not_shift_cell_rects() {
        let geometry = geometry();
        let mut pane = body_pane();
        pane.set_visible_size(Size::new(100.0, 50.0));
        pane.set_visible_origin(Point::new(100.0, 0.0));
        let rows = pane.materialize(&geometry, &labels, &config());
        let first = &rows[0].cells[0];
        assert_eq!(first.path, IndexPath::new(0, 1));
        assert_eq!(first.rect.origin(), Point::new(100.0, 0.0));
    }

    #[test]
    fn cell_space_insets_every_rect() {
        let geometry = geometry();
        let config = config().with_cell_space(CellSpace::uniform(2.0));
        let mut pane = body_pane();
        pane.set_visible_size(Size::new(100.0, 50.0));
        let rows = pane.materialize(&geometry, &labels, &config);
        assert_eq!(rows[0].cells[0].rect, Rect::new(2.0, 2.0, 96.0, 46.0));
    }

    #[test]
    fn rows_and_cells_come_back_in_index_order() {
        let geometry = geometry();
        let mut pane = body_pane();
        pane.set_visible_size(Size::new(300.0, 150.0));
        let rows = pane.materialize(&geometry, &labels, &config());
        let row_indices: Vec<usize> = rows.iter().map(|slice| slice.row).collect();
        assert_eq!(row_indices, vec![0, 1, 2]);
        let columns: Vec<usize> = rows[0].cells.iter().map(|cell| cell.path.column).collect();
        assert_eq!(columns, vec![0, 1, 2]);
    }
}
