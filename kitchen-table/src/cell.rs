//! Per-cell value, content, class and style resolution.

use tabledom::{Content, Style};

use crate::classes;
use crate::column::Column;
use crate::error::TableError;
use crate::value::{Row, Value};

/// Everything needed to render one body cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCell {
    pub raw: Value,
    pub display: Content,
    pub class_name: Option<String>,
    pub style: Option<Style>,
}

/// Raw value of a leaf column for `row`.
pub fn raw_value(column: &Column, row: &Row) -> Result<Value, TableError> {
    let field = column.field.as_ref().ok_or_else(|| TableError::MissingField {
        title: column.title.label(),
    })?;
    Ok(field.resolve(row))
}

/// Displayed content: the default for `Null`, otherwise the rendered value.
pub fn display_value(column: &Column, raw: &Value, row: &Row) -> Content {
    if raw.is_null() {
        return column
            .default_value
            .as_ref()
            .map(|d| d.resolve())
            .unwrap_or_default();
    }
    match &column.renderer {
        Some(render) => render(raw, row),
        None => Content::Text(raw.to_string()),
    }
}

/// Cell class with the frozen marker appended for pinned columns.
pub fn cell_class(column: &Column, raw: &Value, row: &Row) -> Option<String> {
    let computed = column
        .class_name
        .as_ref()
        .and_then(|c| c.resolve(raw, row));
    let frozen = column.freeze.then_some(classes::FROZEN_COLUMN);
    classes::join([computed.as_deref(), frozen])
}

pub fn resolve_cell(column: &Column, row: &Row) -> Result<ResolvedCell, TableError> {
    let raw = raw_value(column, row)?;
    Ok(ResolvedCell {
        display: display_value(column, &raw, row),
        class_name: cell_class(column, &raw, row),
        style: column.style.as_ref().map(|style| style(&raw, row)),
        raw,
    })
}
