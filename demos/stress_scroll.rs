//! Stress test for scroll profiling.
//!
//! Extracts the hot loop from benches/scroll_benchmark.rs for flamegraph
//! profiling: a 100k-row grid scrolled one row at a time with a full
//! materialization per step.
//!
//! Run with:
//!   cargo run --example stress_scroll --release -- [iterations]
//!
//! Profile with cargo-flamegraph:
//!   cargo flamegraph --example stress_scroll -- 10000

use scrollgrid::{GridConfig, GridView, IndexPath, Point, ScrollTarget, Size, SizingSource};

const NUM_ROWS: usize = 100_000;
const NUM_COLUMNS: usize = 50;
const ROW_HEIGHT: f64 = 24.0;
const COLUMN_WIDTH: f64 = 120.0;

fn label(path: IndexPath) -> String {
    path.to_string()
}

/// Build the benchmark grid and scroll it to the middle.
fn make_grid() -> GridView<fn(IndexPath) -> String> {
    let mut grid = GridView::with_sizing(
        GridConfig::new(NUM_ROWS, NUM_COLUMNS).with_frozen(1, 1),
        label as fn(IndexPath) -> String,
        SizingSource::Constant(ROW_HEIGHT),
        SizingSource::Constant(COLUMN_WIDTH),
    );
    grid.set_viewport_size(Size::new(1280.0, 720.0));

    // Scroll to the middle (setup, not measured)
    let content = grid.content_size();
    grid.scroll_to(ScrollTarget::offset(0.0, content.h / 2.0));
    grid.take_scroll_commands();
    grid.take_render_request();
    grid.materialize();
    grid
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let iterations: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(10_000);

    eprintln!("Building {}x{} grid...", NUM_ROWS, NUM_COLUMNS);
    let mut grid = make_grid();
    let start = grid.body_origin();

    eprintln!("Running {} scroll iterations...", iterations);

    // Hot loop - matches the benchmark exactly:
    // single row scroll + re-materialize
    let mut cells = 0usize;
    for i in 0..iterations {
        // Sweep downward, rewinding when the clamp stops us
        let origin = grid.body_origin();
        grid.scroll_to(ScrollTarget::offset(origin.x, origin.y + ROW_HEIGHT));
        if grid.body_origin().y == origin.y {
            grid.set_body_origin(Point::new(start.x, start.y));
        }
        grid.take_scroll_commands();
        grid.take_render_request();
        cells += grid.materialize().cell_count();

        if (i + 1) % 1000 == 0 {
            eprintln!("  {} / {}", i + 1, iterations);
        }
    }

    eprintln!("Done. {} cells materialized.", cells);
}
