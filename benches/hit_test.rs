//! Hit-test performance benchmarks for amortized-lookup verification.
//!
//! These benchmarks verify that offset-to-cell resolution stays cheap on
//! large grids: the first probe near an offset pays for measuring the
//! axis up to that point, and every later probe is answered from the
//! memoized distance map.
//!
//! Run with: cargo bench --bench hit_test

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scrollgrid::{GridConfig, GridView, IndexPath, Point, Size, SizingSource};

const ROW_HEIGHT: f64 = 24.0;
const COLUMN_WIDTH: f64 = 120.0;

fn label(path: IndexPath) -> String {
    path.to_string()
}

/// Build a measured grid with the given row count and 50 columns.
fn make_grid(num_rows: usize) -> GridView<fn(IndexPath) -> String> {
    let mut grid = GridView::with_sizing(
        GridConfig::new(num_rows, 50),
        label as fn(IndexPath) -> String,
        SizingSource::Constant(ROW_HEIGHT),
        SizingSource::Constant(COLUMN_WIDTH),
    );
    grid.set_viewport_size(Size::new(1280.0, 720.0));
    grid
}

/// Benchmark index_path_at_offset with varying row counts to verify the
/// memoized distance map keeps repeat lookups flat.
fn benchmark_hit_test_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test_scaling");

    for num_rows in [1_000, 10_000, 100_000] {
        let grid = make_grid(num_rows);
        let content = grid.content_size();

        // Touch the far corner once so the distance maps are warm;
        // the measurement covers steady-state lookups only.
        grid.index_path_at_offset(Point::new(content.w - 1.0, content.h - 1.0));

        println!(
            "Generated {} rows, content height: {} px",
            num_rows, content.h
        );

        group.bench_with_input(BenchmarkId::new("hit_test", num_rows), &grid, |b, grid| {
            b.iter(|| {
                // Probe various positions in the grid
                let positions = [
                    (0.0, 0.0),                            // Start
                    (content.w / 4.0, content.h / 4.0),    // 25%
                    (content.w / 2.0, content.h / 2.0),    // 50%
                    (content.w * 0.75, content.h * 0.75),  // 75%
                    (content.w - 1.0, content.h - 1.0),    // End
                ];

                for &(x, y) in &positions {
                    let _path = grid.index_path_at_offset(black_box(Point::new(x, y)));
                }
            });
        });
    }

    group.finish();
}

/// Benchmark rect_for_index_path at different depths of a 100k-row grid.
fn benchmark_rect_positions(c: &mut Criterion) {
    let grid = make_grid(100_000);
    let content = grid.content_size();
    grid.rect_for_index_path(IndexPath::new(99_999, 49));

    let mut group = c.benchmark_group("rect_positions_100k");

    let test_positions = [
        ("start", IndexPath::new(0, 0)),
        ("quarter", IndexPath::new(25_000, 12)),
        ("middle", IndexPath::new(50_000, 25)),
        ("three_quarters", IndexPath::new(75_000, 37)),
        ("end", IndexPath::new(99_999, 49)),
    ];

    println!("Content size: {} x {} px", content.w, content.h);

    for (name, path) in test_positions {
        group.bench_with_input(BenchmarkId::new("position", name), &path, |b, &path| {
            b.iter(|| grid.rect_for_index_path(black_box(path)));
        });
    }

    group.finish();
}

/// Benchmark the cold first probe: one far lookup that has to extend the
/// distance map across the whole axis.
fn benchmark_cold_probe(c: &mut Criterion) {
    let mut group = c.benchmark_group("cold_probe");
    // Each iteration rebuilds the grid, so keep the sample small.
    group.sample_size(20);

    for num_rows in [10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("first_lookup", num_rows),
            &num_rows,
            |b, &num_rows| {
                b.iter_batched(
                    || make_grid(num_rows),
                    |grid| {
                        let offset = Point::new(0.0, (num_rows as f64) * ROW_HEIGHT - 1.0);
                        black_box(grid.index_path_at_offset(black_box(offset)))
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        // Set measurement time for accurate results
        .measurement_time(std::time::Duration::from_secs(10));
    targets = benchmark_hit_test_scaling, benchmark_rect_positions, benchmark_cold_probe
}

criterion_main!(benches);
