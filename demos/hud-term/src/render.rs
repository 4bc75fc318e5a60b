//! Frame painter - draws a `HudFrame` into terminal cells

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};

use hud_core::{DeviceBox, Point, SurfaceSize};
use hud_layout::{CITY_ITEM_HEIGHT, MODE_ITEM_HEIGHT};
use hud_runtime::{ElementView, HudFrame};

/// Pixel size of one terminal cell
pub const CELL_WIDTH: u32 = 8;
pub const CELL_HEIGHT: u32 = 16;

/// Surface size covered by a terminal of `cols` x `rows`
pub fn surface_for(cols: u16, rows: u16) -> SurfaceSize {
    SurfaceSize::new(cols as u32 * CELL_WIDTH, rows as u32 * CELL_HEIGHT)
}

/// Device point at the centre of a cell
pub fn cell_center(col: u16, row: u16) -> Point {
    Point::new(
        (col as u32 * CELL_WIDTH + CELL_WIDTH / 2) as i32,
        (row as u32 * CELL_HEIGHT + CELL_HEIGHT / 2) as i32,
    )
}

struct Cells {
    cols: u16,
    rows: u16,
}

impl Cells {
    fn of(surface: SurfaceSize) -> Self {
        Cells {
            cols: (surface.width / CELL_WIDTH).min(u16::MAX as u32) as u16,
            rows: (surface.height / CELL_HEIGHT).min(u16::MAX as u32) as u16,
        }
    }

    fn col(x: i32) -> i64 {
        (x / CELL_WIDTH as i32) as i64
    }

    fn row(y: i32) -> i64 {
        (y / CELL_HEIGHT as i32) as i64
    }

    /// Queue `text` at a cell, cut to the surface and to `max` columns
    fn text<W: Write>(&self, out: &mut W, col: i64, row: i64, text: &str, max: usize) -> io::Result<()> {
        if row < 0 || row >= self.rows as i64 || col >= self.cols as i64 {
            return Ok(());
        }
        let skip = if col < 0 { (-col) as usize } else { 0 };
        let col = col.max(0) as u16;
        let room = (self.cols - col) as usize;
        let visible: String = text.chars().skip(skip).take(max.min(room)).collect();
        if visible.is_empty() {
            return Ok(());
        }
        queue!(out, MoveTo(col, row as u16), Print(visible))
    }
}

fn width_cols(device: DeviceBox) -> usize {
    (device.w.max(0) as u32 / CELL_WIDTH).max(1) as usize
}

/// Paint a whole frame, back to front
pub fn draw<W: Write>(out: &mut W, frame: &HudFrame) -> io::Result<()> {
    let cells = Cells::of(frame.surface);

    for element in &frame.elements {
        let device = element.device;
        let col = Cells::col(device.x);
        let row = Cells::row(device.y);
        let width = width_cols(device);

        match &element.view {
            ElementView::Backdrop => queue!(out, Clear(ClearType::All))?,
            ElementView::Clock { name, text } => {
                cells.text(out, col, row, name, width)?;
                cells.text(out, col, row + 1, text, width)?;
            }
            ElementView::Status { lines } => {
                for (i, line) in lines.iter().enumerate() {
                    cells.text(out, col, row + i as i64, line, width)?;
                }
            }
            ElementView::Button { caption, hover } => {
                let label = format!("[ {} ]", caption);
                if *hover {
                    queue!(out, SetAttribute(Attribute::Reverse))?;
                }
                cells.text(out, col, row, &label, width.max(label.len()))?;
                queue!(out, SetAttribute(Attribute::Reset))?;
            }
            ElementView::ModeMenu { items, hover } => {
                for (i, item) in items.iter().enumerate() {
                    let y = device.y + i as i32 * MODE_ITEM_HEIGHT;
                    let label = format!("{} {}", i + 1, item);
                    menu_row(out, &cells, col, Cells::row(y), &label, width, *hover == Some(i))?;
                }
            }
            ElementView::CityMenu { items, first, hover } => {
                for (i, item) in items.iter().enumerate() {
                    let y = device.y + i as i32 * CITY_ITEM_HEIGHT;
                    let selected = *hover == Some(first + i) || (hover.is_none() && i == 0);
                    let label = if selected {
                        format!("> {}", item)
                    } else {
                        format!("  {}", item)
                    };
                    menu_row(out, &cells, col, Cells::row(y), &label, width, selected)?;
                }
            }
        }
    }

    out.flush()
}

fn menu_row<W: Write>(
    out: &mut W,
    cells: &Cells,
    col: i64,
    row: i64,
    label: &str,
    width: usize,
    highlight: bool,
) -> io::Result<()> {
    if highlight {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    let padded = format!("{:<width$}", label, width = width);
    cells.text(out, col, row, &padded, width)?;
    queue!(out, SetAttribute(Attribute::Reset))
}

/// City row Enter picks: the hovered row when it is in view, else the first visible one
pub fn first_visible_city(frame: &HudFrame) -> Option<usize> {
    frame.elements.iter().find_map(|e| match &e.view {
        ElementView::CityMenu { items, first, hover } => {
            let in_view = *first..*first + items.len();
            Some(hover.filter(|h| in_view.contains(h)).unwrap_or(*first))
        }
        _ => None,
    })
}
