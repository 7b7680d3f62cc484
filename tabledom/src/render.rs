//! Terminal rendering of a table element.
//!
//! Cells are placed with the HTML table slot algorithm (`rowspan`/`colspan`
//! occupy slots in later rows), columns are sized from their content, and
//! every cell is shifted by its own transform minus the viewport scroll.

use crate::buffer::{Buffer, Cell};
use crate::element::{Element, Tag};
use crate::scroll::ScrollOffset;
use crate::text::{display_width, pad_to_width};
use crate::types::Rgb;

const HEADER_BG: Rgb = Rgb::new(40, 40, 48);
const COLUMN_GAP: u16 = 1;

/// The visible window onto the table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
    pub scroll: ScrollOffset,
}

/// Full size of the rendered table in cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableExtent {
    pub width: u16,
    pub height: u16,
}

struct Placed<'a> {
    el: &'a Element,
    row: usize,
    col: usize,
    row_span: usize,
    col_span: usize,
    header: bool,
}

/// Lay out and paint `table` into `buf` at the origin.
pub fn render_table(table: &Element, buf: &mut Buffer, viewport: Viewport) -> TableExtent {
    let rows = collect_rows(table);
    let placed = place_cells(&rows);
    let col_count = placed.iter().map(|p| p.col + p.col_span).max().unwrap_or(0);
    let widths = column_widths(&placed, col_count);

    let mut xs = Vec::with_capacity(col_count + 1);
    let mut x = 0u16;
    for w in &widths {
        xs.push(x);
        x = x.saturating_add(*w + COLUMN_GAP);
    }
    xs.push(x);

    let extent = TableExtent {
        width: x.saturating_sub(COLUMN_GAP),
        height: rows.len() as u16,
    };
    log::trace!(
        "[render] table {} laid out: {} cells, {}x{}",
        table.id,
        placed.len(),
        extent.width,
        extent.height
    );

    let mut order: Vec<&Placed> = placed.iter().collect();
    // Pinned cells paint over scrolled ones, header over body.
    order.sort_by_key(|p| (p.header, p.el.style.transform.is_some_and(|t| t.offset().0 > 0)));

    let max_x = viewport.width.min(buf.width()) as i32;
    let max_y = viewport.height.min(buf.height()) as i32;

    for p in order {
        let (tx, ty) = p.el.style.transform.map(|t| t.offset()).unwrap_or((0, 0));
        let left = xs[p.col] as i32 + tx as i32 - viewport.scroll.x as i32;
        let width = xs[p.col + p.col_span] - xs[p.col] - COLUMN_GAP;
        let top = p.row as i32 + ty as i32 - viewport.scroll.y as i32;

        let bg = p
            .el
            .style
            .background
            .map(|c| c.to_rgb())
            .unwrap_or(if p.header { HEADER_BG } else { Rgb::default() });
        let fg = p
            .el
            .style
            .foreground
            .map(|c| c.to_rgb())
            .unwrap_or(Rgb::new(255, 255, 255));
        let style = if p.header {
            p.el.style.text_style.bold()
        } else {
            p.el.style.text_style
        };
        let pen = Cell::pen(fg, bg, style);

        for line in 0..p.row_span as i32 {
            let y = top + line;
            if y < 0 || y >= max_y {
                continue;
            }
            buf.fill(left, y as u16, width + COLUMN_GAP, bg);
            if line == 0 {
                let text = pad_to_width(&p.el.text_content(), width as usize, p.el.text_align);
                buf.set_string(left, y as u16, &text, max_x, pen);
            }
        }
    }

    extent
}

fn collect_rows(table: &Element) -> Vec<(bool, &Element)> {
    let mut rows = Vec::new();
    for section in table.child_elements() {
        let header = section.tag == Tag::Thead;
        for row in section.child_elements() {
            if row.tag == Tag::Tr {
                rows.push((header, row));
            }
        }
    }
    rows
}

fn place_cells<'a>(rows: &[(bool, &'a Element)]) -> Vec<Placed<'a>> {
    let mut occupied: Vec<Vec<bool>> = vec![Vec::new(); rows.len()];
    let mut placed = Vec::new();

    for (r, (header, row)) in rows.iter().enumerate() {
        let mut c = 0;
        for cell in row.child_elements() {
            if !matches!(cell.tag, Tag::Th | Tag::Td) {
                continue;
            }
            while occupied[r].get(c).copied().unwrap_or(false) {
                c += 1;
            }
            let row_span = (cell.row_span.unwrap_or(1).max(1) as usize).min(rows.len() - r);
            let col_span = cell.col_span.unwrap_or(1).max(1) as usize;
            for slots in occupied.iter_mut().skip(r).take(row_span) {
                if slots.len() < c + col_span {
                    slots.resize(c + col_span, false);
                }
                for slot in slots.iter_mut().skip(c).take(col_span) {
                    *slot = true;
                }
            }
            placed.push(Placed {
                el: cell,
                row: r,
                col: c,
                row_span,
                col_span,
                header: *header,
            });
            c += col_span;
        }
    }

    placed
}

fn column_widths(placed: &[Placed], col_count: usize) -> Vec<u16> {
    let mut widths = vec![1u16; col_count];
    let content_width = |p: &Placed| display_width(&p.el.text_content()) as u16;

    for p in placed.iter().filter(|p| p.col_span == 1) {
        widths[p.col] = widths[p.col].max(content_width(p));
    }
    // Spanning cells widen their last column when the span is too narrow.
    for p in placed.iter().filter(|p| p.col_span > 1) {
        let span = &widths[p.col..p.col + p.col_span];
        let available = span.iter().sum::<u16>() + COLUMN_GAP * (p.col_span as u16 - 1);
        let needed = content_width(p);
        if needed > available {
            widths[p.col + p.col_span - 1] += needed - available;
        }
    }

    widths
}
