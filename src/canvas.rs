//! Drawing surface.
//!
//! Frames are drawn in logical window coordinates onto a [`Surface`]. The
//! terminal implementation rasterizes them onto a grid of character cells;
//! [`Recorder`] keeps the raw draw calls for inspection.

use lipgloss::{Color, Style};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Rect { x, y, w, h }
    }
}

pub trait Surface {
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: Rgb);
    /// Draw `text` with its middle at `center`.
    fn draw_text(&mut self, text: &str, center: (i32, i32), color: Rgb);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    Rect(Rect, Rgb),
    Text(String, (i32, i32), Rgb),
}

#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rects(&self) -> impl Iterator<Item = (&Rect, &Rgb)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Rect(r, c) => Some((r, c)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(t, _, _) => Some(t.as_str()),
            _ => None,
        })
    }
}

impl Surface for Recorder {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.ops.push(DrawOp::Rect(rect, color));
    }

    fn draw_text(&mut self, text: &str, center: (i32, i32), color: Rgb) {
        self.ops.push(DrawOp::Text(text.to_string(), center, color));
    }
}

pub const BAR_GLYPH: char = '█';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub color: Rgb,
}

/// Rasterizes logical-window drawing onto `cols × rows` terminal cells.
///
/// A rectangle fills every cell it overlaps, and later drawing wins, so a
/// bar narrower than a cell still shows up and anything painted last stays
/// on top.
#[derive(Clone, Debug)]
pub struct TermCanvas {
    cols: usize,
    rows: usize,
    logical_w: f64,
    logical_h: f64,
    cells: Vec<Option<Cell>>,
}

impl TermCanvas {
    pub fn new(cols: usize, rows: usize, logical_w: u32, logical_h: u32) -> Self {
        TermCanvas {
            cols,
            rows,
            logical_w: f64::from(logical_w.max(1)),
            logical_h: f64::from(logical_h.max(1)),
            cells: vec![None; cols * rows],
        }
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    fn col_of(&self, x: f64) -> f64 {
        x * self.cols as f64 / self.logical_w
    }

    fn row_of(&self, y: f64) -> f64 {
        y * self.rows as f64 / self.logical_h
    }

    // Cells overlapped by [start, end) once scaled, clamped to `limit`.
    fn span(start: f64, end: f64, limit: usize) -> (usize, usize) {
        let lo = start.floor().max(0.0) as usize;
        let hi = end.ceil().max(0.0) as usize;
        (lo.min(limit), hi.min(limit))
    }

    /// One string per row, colored runs styled with lipgloss.
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.rows).map(|row| self.render_row(row)).collect()
    }

    fn render_row(&self, row: usize) -> String {
        let cells = &self.cells[row * self.cols..(row + 1) * self.cols];
        let mut out = String::new();
        let mut run = String::new();
        let mut run_color: Option<Rgb> = None;
        for cell in cells {
            let (ch, color) = match cell {
                Some(c) => (c.ch, Some(c.color)),
                None => (' ', None),
            };
            if color != run_color && !run.is_empty() {
                out.push_str(&paint(&run, run_color));
                run.clear();
            }
            run_color = color;
            run.push(ch);
        }
        if !run.is_empty() {
            out.push_str(&paint(&run, run_color));
        }
        out
    }
}

fn paint(run: &str, color: Option<Rgb>) -> String {
    match color {
        Some(Rgb(r, g, b)) => Style::new().foreground(Color::from_rgb(r, g, b)).render(run),
        None => run.to_string(),
    }
}

impl Surface for TermCanvas {
    fn clear(&mut self) {
        self.cells.fill(None);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        if rect.w == 0 || rect.h == 0 {
            return;
        }
        let x0 = f64::from(rect.x);
        let y0 = f64::from(rect.y);
        let (c0, c1) = Self::span(
            self.col_of(x0),
            self.col_of(x0 + f64::from(rect.w)),
            self.cols,
        );
        let (r0, r1) = Self::span(
            self.row_of(y0),
            self.row_of(y0 + f64::from(rect.h)),
            self.rows,
        );
        for row in r0..r1 {
            for col in c0..c1 {
                self.cells[row * self.cols + col] = Some(Cell {
                    ch: BAR_GLYPH,
                    color,
                });
            }
        }
    }

    fn draw_text(&mut self, text: &str, center: (i32, i32), color: Rgb) {
        let row = self.row_of(f64::from(center.1)).floor();
        if row < 0.0 || row as usize >= self.rows {
            return;
        }
        let row = row as usize;
        let len = text.chars().count() as f64;
        let start = (self.col_of(f64::from(center.0)) - len / 2.0).round() as i64;
        for (i, ch) in text.chars().enumerate() {
            let col = start + i as i64;
            if col < 0 || col as usize >= self.cols {
                continue;
            }
            self.cells[row * self.cols + col as usize] = Some(Cell { ch, color });
        }
    }
}
