//! The table component: assembles header and body, owns the sort state and
//! the scroll-sync controller, and routes host events.

use std::collections::HashMap;

use tabledom::{Content, Element, Event, ScrollContainer, Style};

use crate::cell::resolve_cell;
use crate::classes;
use crate::column::Column;
use crate::decorator::sortable_header;
use crate::error::TableError;
use crate::freeze::ScrollSync;
use crate::header::{header_rows, HeaderCell};
use crate::props::TableProps;
use crate::sort::{sorted_indices, SortOrder, SortState};
use crate::value::Row;

/// Outcome of [`KitchenTable::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

/// What an interactive element of the last render stands for.
#[derive(Debug, Clone, Copy)]
enum Target {
    /// Sortable header of the leaf with this document-order index.
    Header(usize),
    /// Body row at this display position.
    Row(usize),
}

pub struct KitchenTable {
    props: TableProps,
    columns: Vec<Column>,
    data: Vec<Row>,
    sort: SortState,
    scroll_sync: ScrollSync,
    rendered: Option<Element>,
    targets: HashMap<String, Target>,
    /// Indices into `data`, in the order of the last render.
    displayed: Vec<usize>,
}

impl KitchenTable {
    pub fn new(props: TableProps, columns: Vec<Column>, data: Vec<Row>) -> Self {
        let scroll_sync = ScrollSync::new(props.fixed_header);
        Self {
            props,
            columns,
            data,
            sort: SortState::Unsorted,
            scroll_sync,
            rendered: None,
            targets: HashMap::new(),
            displayed: Vec::new(),
        }
    }

    pub fn props(&self) -> &TableProps {
        &self.props
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Replace the columns. The previous sort column no longer exists, so
    /// the table returns to input order.
    ///
    /// The last render no longer matches; events are refused with
    /// [`TableError::NotRendered`] until the next [`render`](Self::render).
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
        self.sort = SortState::Unsorted;
        self.invalidate();
    }

    /// Replace the rows, keeping the sort state. Like `set_columns`, this
    /// drops the last render.
    pub fn set_data(&mut self, data: Vec<Row>) {
        self.data = data;
        self.invalidate();
    }

    pub fn set_props(&mut self, props: TableProps) {
        self.scroll_sync.set_fixed_header(props.fixed_header);
        self.props = props;
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.rendered = None;
        self.targets.clear();
        self.displayed.clear();
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    /// The sorted leaf column and its order, if any.
    pub fn sorted_column(&self) -> Option<(&Column, SortOrder)> {
        let SortState::Sorted { column, order } = self.sort else {
            return None;
        };
        Column::leaves(&self.columns)
            .get(column)
            .map(|c| (*c, order))
    }

    /// The last rendered tree, including scroll transforms.
    pub fn element(&self) -> Option<&Element> {
        self.rendered.as_ref()
    }

    /// Rows in display order.
    pub fn rows(&self) -> Vec<&Row> {
        self.row_order().into_iter().map(|i| &self.data[i]).collect()
    }

    fn row_order(&self) -> Vec<usize> {
        if !self.props.sortable {
            return (0..self.data.len()).collect();
        }
        match self.sorted_column() {
            Some((column, order)) => match &column.field {
                Some(field) => sorted_indices(&self.data, field, order),
                None => (0..self.data.len()).collect(),
            },
            None => (0..self.data.len()).collect(),
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Start following `container`'s scroll position.
    pub fn mount(&mut self, container: &mut ScrollContainer) -> Result<(), TableError> {
        self.scroll_sync.attach(container)
    }

    /// Stop following `container`. Unmounting a table that was never
    /// mounted does nothing.
    pub fn unmount(&mut self, container: &mut ScrollContainer) -> Result<(), TableError> {
        self.scroll_sync.detach(container).map(|_| ())
    }

    pub fn is_mounted(&self) -> bool {
        self.scroll_sync.is_attached()
    }

    // =========================================================================
    // Render
    // =========================================================================

    /// Build the table element for the current columns, rows and sort state.
    pub fn render(&mut self) -> Result<Element, TableError> {
        let leaves = Column::leaves(&self.columns);
        if let Some(leaf) = leaves.iter().find(|c| c.field.is_none()) {
            return Err(TableError::MissingField {
                title: leaf.title.label(),
            });
        }

        let order = self.row_order();
        let mut targets = HashMap::new();

        let head = self.render_head(&mut targets);
        let body = self.render_body(&leaves, &order, &mut targets)?;

        let mut table = Element::table()
            .id(self.props.id.clone())
            .class_name(classes::ROOT)
            .child(head)
            .child(body);
        self.scroll_sync.reapply(&mut table);

        log::trace!(
            "[grid] rendered {} rows x {} columns",
            order.len(),
            leaves.len()
        );

        self.targets = targets;
        self.displayed = order;
        self.rendered = Some(table.clone());
        Ok(table)
    }

    fn render_head(&self, targets: &mut HashMap<String, Target>) -> Element {
        let id = &self.props.id;
        let rows = header_rows(&self.columns);
        let mut thead = Element::thead().id(format!("{id}-thead"));

        for (level, cells) in rows.iter().enumerate() {
            let mut tr = Element::tr().id(format!("{id}-header-{level}"));
            for (idx, cell) in cells.iter().enumerate() {
                let th_id = format!("{id}-th-{level}-{idx}");
                let sortable_leaf = cell.leaf_index().filter(|_| self.props.sortable);
                if let Some(leaf) = sortable_leaf {
                    targets.insert(th_id.clone(), Target::Header(leaf));
                }
                tr = tr.child(self.render_header_cell(cell, th_id, sortable_leaf));
            }
            thead = thead.child(tr);
        }

        thead
    }

    fn render_header_cell(
        &self,
        cell: &HeaderCell,
        id: String,
        sortable_leaf: Option<usize>,
    ) -> Element {
        let column = cell.column;
        let class = classes::join([
            sortable_leaf.map(|_| classes::SORTABLE),
            column.freeze.then_some(classes::FROZEN_COLUMN),
        ]);
        let title = column.title.resolve();

        let content = match sortable_leaf {
            Some(leaf) => {
                let sorted = (self.sort.column() == Some(leaf))
                    .then(|| self.sort.order())
                    .flatten();
                Content::from(sortable_header(title, sorted))
            }
            None => title,
        };

        Element::th()
            .id(id)
            .class_name(class.unwrap_or_default())
            .row_span(cell.row_span)
            .col_span(cell.col_span)
            .clickable(sortable_leaf.is_some())
            .content(content)
    }

    fn render_body(
        &self,
        leaves: &[&Column],
        order: &[usize],
        targets: &mut HashMap<String, Target>,
    ) -> Result<Element, TableError> {
        let id = &self.props.id;
        let row_props = &self.props.row_props;
        let mut tbody = Element::tbody().id(format!("{id}-tbody"));

        for (position, &index) in order.iter().enumerate() {
            let row = &self.data[index];
            let tr_id = format!("{id}-row-{position}");
            targets.insert(tr_id.clone(), Target::Row(position));

            let class = row_props
                .class_name
                .as_ref()
                .and_then(|f| f(row))
                .unwrap_or_default();
            let mut tr = Element::tr()
                .id(tr_id)
                .class_name(class)
                .clickable(row_props.on_click.is_some())
                .hoverable(
                    row_props.on_mouse_enter.is_some() || row_props.on_mouse_leave.is_some(),
                )
                .data("row-index", position.to_string());

            for (col, column) in leaves.iter().enumerate() {
                let cell = resolve_cell(column, row)?;
                tr = tr.child(
                    Element::td()
                        .id(format!("{id}-cell-{position}-{col}"))
                        .class_name(cell.class_name.unwrap_or_default())
                        .style(cell.style.unwrap_or_else(Style::new))
                        .content(cell.display),
                );
            }
            tbody = tbody.child(tr);
        }

        Ok(tbody)
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Route a host event to the sort machine, the row callbacks or the
    /// scroll-sync controller.
    ///
    /// Clicks bubble: a click on an element inside a header or row cell
    /// acts on that header or row.
    pub fn dispatch(&mut self, event: &Event) -> Result<EventResult, TableError> {
        let Some(rendered) = self.rendered.as_mut() else {
            return Err(TableError::NotRendered);
        };

        let target = match event {
            Event::Scroll { target, offset } => {
                if !self.scroll_sync.listens_to(target) {
                    return Ok(EventResult::Ignored);
                }
                self.scroll_sync.on_scroll(rendered, *offset);
                return Ok(EventResult::Consumed);
            }
            Event::Click { target }
            | Event::MouseEnter { target }
            | Event::MouseLeave { target } => target,
            Event::Key { .. } => return Ok(EventResult::Ignored),
        };

        let path = path_to(rendered, target).ok_or_else(|| TableError::UnknownTarget {
            target: target.clone(),
        })?;
        let Some(action) = path.iter().rev().find_map(|id| self.targets.get(id).copied()) else {
            return Ok(EventResult::Ignored);
        };

        match (action, event) {
            (Target::Header(leaf), Event::Click { .. }) => self.click_header(leaf),
            (Target::Row(position), _) => Ok(self.row_event(position, event)),
            _ => Ok(EventResult::Ignored),
        }
    }

    /// Advance the sort state for leaf `leaf`, then notify `on_sort_end`
    /// and re-render. A leaf the columns no longer have is ignored.
    fn click_header(&mut self, leaf: usize) -> Result<EventResult, TableError> {
        if leaf >= Column::leaves(&self.columns).len() {
            return Ok(EventResult::Ignored);
        }
        let next = self.sort.next(leaf, self.props.sort_policy);
        log::debug!("[grid] sort {:?} -> {:?}", self.sort, next);
        self.sort = next;

        if let Some(callback) = self.props.on_sort_end.clone() {
            if let Some(&column) = Column::leaves(&self.columns).get(leaf) {
                callback(column, next.order());
            }
        }

        self.render()?;
        Ok(EventResult::Consumed)
    }

    fn row_event(&self, position: usize, event: &Event) -> EventResult {
        let Some(callback) = self.props.row_props.callback_for(event) else {
            return EventResult::Ignored;
        };
        let Some(row) = self.displayed.get(position).and_then(|&i| self.data.get(i)) else {
            return EventResult::Ignored;
        };
        callback(row, position, event);
        EventResult::Consumed
    }
}

/// Ids from `root` down to the element `id`, inclusive.
fn path_to(root: &Element, id: &str) -> Option<Vec<String>> {
    if root.id == id {
        return Some(vec![root.id.clone()]);
    }
    for child in root.child_elements() {
        if let Some(mut path) = path_to(child, id) {
            path.insert(0, root.id.clone());
            return Some(path);
        }
    }
    None
}

impl std::fmt::Debug for KitchenTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KitchenTable")
            .field("id", &self.props.id)
            .field("columns", &self.columns)
            .field("rows", &self.data.len())
            .field("sort", &self.sort)
            .field("mounted", &self.scroll_sync.is_attached())
            .finish()
    }
}
