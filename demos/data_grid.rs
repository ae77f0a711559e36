//! Interactive data grid demo.
//!
//! Renders a record-backed grid in the terminal with one frozen header
//! row and column, treating one terminal cell as one pixel unit.
//!
//! Run with:
//!   cargo run --example data_grid -- [--records 5000] [--file orders.json]
//!
//! Keys: arrows/hjkl scroll, PageUp/PageDown page, Home resets,
//! G jumps to the last row, i invalidates the cell under the viewport
//! origin, q quits.

use std::fs::File;
use std::io::{self, BufReader, Stdout};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::{Modifier, Style},
    Terminal,
};
use serde::Deserialize;
use tracing::debug;

use scrollgrid::{ColumnSpec, DataGridSource, GridView, PaneId, Point, ScrollTarget, Size};

/// Interactive demo of a scrollable record grid
#[derive(Parser, Debug)]
#[command(name = "data_grid")]
#[command(about = "Virtualized data grid demo with frozen headers")]
struct Args {
    /// Load records from a JSON file instead of generating them
    #[arg(long)]
    file: Option<PathBuf>,

    /// Number of records when no file is given
    #[arg(long, default_value = "5000")]
    records: usize,

    /// Column width in terminal cells
    #[arg(long, default_value = "16")]
    column_width: u16,

    /// Optional log file for tracing output
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct Record {
    name: String,
    region: String,
    quantity: u64,
    unit_price: f64,
}

/// Seed rows shown at the top of the generated data set.
const SAMPLE_RECORDS: &str = r#"[
    { "name": "alpine kettle", "region": "north", "quantity": 82, "unit_price": 24.5 },
    { "name": "basalt mortar", "region": "east", "quantity": 143, "unit_price": 18.0 },
    { "name": "cedar crate", "region": "west", "quantity": 17, "unit_price": 31.25 },
    { "name": "dune lantern", "region": "south", "quantity": 64, "unit_price": 12.75 },
    { "name": "ember stove", "region": "north", "quantity": 5, "unit_price": 209.99 },
    { "name": "fjord anchor", "region": "east", "quantity": 28, "unit_price": 87.5 }
]"#;

/// Embedded sample rows padded with synthetic ones up to `count`.
fn sample_records(count: usize) -> Result<Vec<Record>, serde_json::Error> {
    let mut records: Vec<Record> = serde_json::from_str(SAMPLE_RECORDS)?;
    records.truncate(count);
    let padding = count - records.len();
    records.extend(synthetic_records(padding));
    Ok(records)
}

fn synthetic_records(count: usize) -> Vec<Record> {
    let regions = ["north", "south", "east", "west"];
    (0..count)
        .map(|n| Record {
            name: format!("item-{n:05}"),
            region: regions[n % regions.len()].to_string(),
            quantity: (n as u64 * 7) % 400,
            unit_price: 3.0 + (n % 50) as f64 * 0.25,
        })
        .collect()
}

fn load_records(path: &PathBuf) -> Result<Vec<Record>, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let records = serde_json::from_reader(BufReader::new(file))?;
    Ok(records)
}

fn build_grid(records: Vec<Record>, column_width: f64) -> GridView<DataGridSource<Record, String>> {
    let columns = vec![
        ColumnSpec::text("name", |r: &Record| r.name.clone()).with_width(column_width),
        ColumnSpec::text("region", |r: &Record| r.region.clone()).with_width(column_width),
        ColumnSpec::text("quantity", |r: &Record| r.quantity.to_string())
            .with_width(column_width),
        ColumnSpec::text("unit price", |r: &Record| format!("{:.2}", r.unit_price))
            .with_width(column_width),
        ColumnSpec::text("total", |r: &Record| {
            format!("{:.2}", r.quantity as f64 * r.unit_price)
        })
        .with_width(column_width),
    ];
    // One terminal cell per pixel unit keeps the math in whole cells
    DataGridSource::new(columns, records)
        .with_row_height(1.0)
        .into_grid()
}

/// Screen region of each pane, split along the frozen extents.
fn pane_regions(area: Rect, frozen: Size) -> [(PaneId, Rect); 4] {
    let fw = (frozen.w as u16).min(area.width);
    let fh = (frozen.h as u16).min(area.height);
    [
        (PaneId::Corner, Rect::new(area.x, area.y, fw, fh)),
        (
            PaneId::ColumnHeader,
            Rect::new(area.x + fw, area.y, area.width - fw, fh),
        ),
        (
            PaneId::RowHeader,
            Rect::new(area.x, area.y + fh, fw, area.height - fh),
        ),
        (
            PaneId::Body,
            Rect::new(area.x + fw, area.y + fh, area.width - fw, area.height - fh),
        ),
    ]
}

fn draw(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    grid: &mut GridView<DataGridSource<Record, String>>,
) -> io::Result<()> {
    let frozen = grid.frozen_extent();
    let origins: Vec<(PaneId, Point)> = [
        PaneId::Corner,
        PaneId::ColumnHeader,
        PaneId::RowHeader,
        PaneId::Body,
    ]
    .into_iter()
    .map(|id| (id, grid.pane(id).visible_origin()))
    .collect();
    let body_origin = grid.body_origin();
    let frame_data = grid.materialize();

    terminal.draw(|frame| {
        let area = frame.area();
        let grid_area = Rect::new(area.x, area.y, area.width, area.height.saturating_sub(1));
        let header_style = Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);

        for (id, region) in pane_regions(grid_area, frozen) {
            let origin = origins
                .iter()
                .find(|(pane, _)| *pane == id)
                .map(|(_, origin)| *origin)
                .unwrap_or(Point::ZERO);
            let pane_frame = frame_data.pane(id);
            let style = if id == PaneId::Body {
                Style::default()
            } else {
                header_style
            };
            for row in &pane_frame.rows {
                for cell in &row.cells {
                    let x = cell.rect.x - origin.x;
                    let y = cell.rect.y - origin.y;
                    if x < 0.0 || y < 0.0 {
                        continue;
                    }
                    let (x, y) = (x as u16, y as u16);
                    if x >= region.width || y >= region.height {
                        continue;
                    }
                    let width = (cell.rect.w as u16).min(region.width - x);
                    let target = Rect::new(region.x + x, region.y + y, width, 1);
                    frame
                        .buffer_mut()
                        .set_stringn(target.x, target.y, &cell.content, width as usize, style);
                }
            }
        }

        let status = format!(
            " origin ({:.0}, {:.0})  cells {}  q quits ",
            body_origin.x,
            body_origin.y,
            frame_data.cell_count()
        );
        frame.buffer_mut().set_stringn(
            area.x,
            area.y + area.height.saturating_sub(1),
            &status,
            area.width as usize,
            Style::default().add_modifier(Modifier::DIM),
        );
    })?;
    Ok(())
}

fn handle_key(
    key: KeyEvent,
    grid: &mut GridView<DataGridSource<Record, String>>,
    column_width: f64,
) -> bool {
    let origin = grid.body_origin();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Down | KeyCode::Char('j') => {
            grid.scroll_to(ScrollTarget::offset(origin.x, origin.y + 1.0));
        }
        KeyCode::Up | KeyCode::Char('k') => {
            grid.scroll_to(ScrollTarget::offset(origin.x, origin.y - 1.0));
        }
        KeyCode::Right | KeyCode::Char('l') => {
            grid.scroll_to(ScrollTarget::offset(origin.x + column_width, origin.y));
        }
        KeyCode::Left | KeyCode::Char('h') => {
            grid.scroll_to(ScrollTarget::offset(origin.x - column_width, origin.y));
        }
        KeyCode::PageDown => {
            let page = grid.pane(PaneId::Body).visible_size().map_or(0.0, |s| s.h);
            grid.scroll_to(ScrollTarget::offset(origin.x, origin.y + page));
        }
        KeyCode::PageUp => {
            let page = grid.pane(PaneId::Body).visible_size().map_or(0.0, |s| s.h);
            grid.scroll_to(ScrollTarget::offset(origin.x, origin.y - page));
        }
        KeyCode::Home => grid.reset_scroll_offset(),
        KeyCode::Char('G') => {
            let last = grid.config().rows.saturating_sub(1);
            grid.scroll_to_row(last, false);
        }
        KeyCode::Char('i') => {
            let path = grid.index_path_at_offset(origin);
            grid.render_item_at_index_path(path);
        }
        _ => {}
    }
    false
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        scrollgrid::logging::init(path)?;
    }

    let records = match &args.file {
        Some(path) => load_records(path)?,
        None => sample_records(args.records)?,
    };
    let column_width = f64::from(args.column_width);
    let mut grid = build_grid(records, column_width);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    grid.set_viewport_size(Size::new(
        f64::from(size.width),
        f64::from(size.height.saturating_sub(1)),
    ));

    let result = run(&mut terminal, &mut grid, column_width);

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    grid: &mut GridView<DataGridSource<Record, String>>,
    column_width: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    draw(terminal, grid)?;
    grid.take_render_request();

    loop {
        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key(key, grid, column_width) {
                        return Ok(());
                    }
                }
                Event::Resize(width, height) => {
                    grid.set_viewport_size(Size::new(
                        f64::from(width),
                        f64::from(height.saturating_sub(1)),
                    ));
                }
                _ => {}
            }
        }

        // This host draws straight from engine state, so the queued
        // container scrolls are only logged.
        for command in grid.take_scroll_commands() {
            debug!(pane = %command.pane, x = ?command.x, y = ?command.y, "host scroll");
        }
        if grid.take_render_request() {
            draw(terminal, grid)?;
        }
    }
}
