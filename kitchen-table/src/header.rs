//! Header geometry for nested columns.
//!
//! A tree of depth `d` produces `d` header rows. Row `L` holds the columns
//! reached by descending `L` times through groups; a group spans one row
//! and as many leaf columns as it covers, a leaf spans every row left
//! below it.

use crate::column::Column;

/// A column placed in a header row.
#[derive(Debug, Clone, Copy)]
pub struct HeaderCell<'a> {
    pub column: &'a Column,
    pub row_span: u16,
    pub col_span: u16,
    /// Document-order index of the first leaf under this cell.
    pub first_leaf: usize,
}

impl HeaderCell<'_> {
    /// Index of the leaf this cell heads; `None` for a group.
    pub fn leaf_index(&self) -> Option<usize> {
        (!self.column.is_group()).then_some(self.first_leaf)
    }
}

/// Number of header rows needed for `columns`.
pub fn header_depth(columns: &[Column]) -> usize {
    depth_from(columns, 1)
}

fn depth_from(columns: &[Column], level: usize) -> usize {
    columns
        .iter()
        .filter(|c| c.is_group())
        .map(|c| depth_from(&c.sub_columns, level + 1))
        .fold(level, usize::max)
}

/// Leaf columns covered by `column`; 1 for a leaf.
pub fn col_span(column: &Column) -> u16 {
    if !column.is_group() {
        return 1;
    }
    column.sub_columns.iter().map(col_span).sum()
}

/// Columns of header row `level`, each with the offset of its first leaf.
pub fn columns_at_level(columns: &[Column], level: usize) -> Vec<(usize, &Column)> {
    let mut current = Vec::with_capacity(columns.len());
    let mut offset = 0;
    for column in columns {
        current.push((offset, column));
        offset += col_span(column) as usize;
    }

    for _ in 0..level {
        current = current
            .into_iter()
            .filter(|(_, c)| c.is_group())
            .flat_map(|(start, group)| {
                let mut offset = start;
                group.sub_columns.iter().map(move |sub| {
                    let placed = (offset, sub);
                    offset += col_span(sub) as usize;
                    placed
                })
            })
            .collect();
    }

    current
}

/// All header rows, top to bottom.
pub fn header_rows(columns: &[Column]) -> Vec<Vec<HeaderCell<'_>>> {
    let depth = header_depth(columns);
    log::trace!("[header] {} columns, depth {}", columns.len(), depth);

    (0..depth)
        .map(|level| {
            let remaining = (depth - level) as u16;
            columns_at_level(columns, level)
                .into_iter()
                .map(|(first_leaf, column)| HeaderCell {
                    column,
                    row_span: if column.is_group() { 1 } else { remaining },
                    col_span: col_span(column),
                    first_leaf,
                })
                .collect()
        })
        .collect()
}
