//! Off-screen grid of terminal cells the table is painted into.

use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

const WHITE: Rgb = Rgb::new(255, 255, 255);
const BLACK: Rgb = Rgb::new(0, 0, 0);

/// One terminal cell. The right half of a wide glyph is a continuation
/// cell the terminal must skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::pen(WHITE, BLACK, TextStyle::new())
    }
}

impl Cell {
    /// A blank cell carrying the colors and style text is written with.
    pub const fn pen(fg: Rgb, bg: Rgb, style: TextStyle) -> Self {
        Self {
            char: ' ',
            fg,
            bg,
            style,
            wide_continuation: false,
        }
    }

    /// A blank cell in background `bg`.
    pub const fn blank(bg: Rgb) -> Self {
        Self::pen(WHITE, bg, TextStyle::new())
    }

    /// This pen drawing `ch`.
    pub const fn glyph(self, ch: char) -> Self {
        Self { char: ch, ..self }
    }

    const fn continuation(self) -> Self {
        Self {
            char: ' ',
            wide_continuation: true,
            ..self
        }
    }
}

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Out-of-range writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Write `s` with `pen` from column `x`, which may be negative.
    /// Glyphs that would cross `max_x` or the right edge are not drawn.
    pub fn set_string(&mut self, x: i32, y: u16, s: &str, max_x: i32, pen: Cell) {
        let limit = max_x.min(self.width as i32);
        let mut col = x;
        for ch in s.chars() {
            let w = char_width(ch) as i32;
            if col + w > limit {
                break;
            }
            if col >= 0 {
                self.set(col as u16, y, pen.glyph(ch));
                if w == 2 {
                    self.set(col as u16 + 1, y, pen.continuation());
                }
            }
            col += w;
        }
    }

    /// Blank `width` cells from column `x` in background `bg`.
    pub fn fill(&mut self, x: i32, y: u16, width: u16, bg: Rgb) {
        let end = (x + width as i32).min(self.width as i32);
        for col in x.max(0)..end {
            self.set(col as u16, y, Cell::blank(bg));
        }
    }

    /// The characters of one row, continuation cells skipped.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|c| !c.wide_continuation)
            .map(|c| c.char)
            .collect()
    }

    /// Cells of `self` that differ from `previous`, with their position.
    pub fn diff<'a>(&'a self, previous: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        let width = self.width.max(1) as usize;
        self.cells
            .iter()
            .zip(&previous.cells)
            .enumerate()
            .filter(|(_, (now, before))| now != before)
            .map(move |(i, (cell, _))| ((i % width) as u16, (i / width) as u16, cell))
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }
}
