//! Table configuration.

use std::rc::Rc;

use tabledom::Event;

use crate::column::Column;
use crate::sort::{SortOrder, SortPolicy};
use crate::value::Row;

/// Called after each sort commit; `None` means back to input order.
pub type SortCallback = Rc<dyn Fn(&Column, Option<SortOrder>)>;
/// Called with the row, its display index and the triggering event.
pub type RowCallback = Rc<dyn Fn(&Row, usize, &Event)>;
pub type RowClassFn = Rc<dyn Fn(&Row) -> Option<String>>;

/// Per-row decoration and event callbacks. Missing callbacks are no-ops.
#[derive(Clone, Default)]
pub struct RowProps {
    pub class_name: Option<RowClassFn>,
    pub on_click: Option<RowCallback>,
    pub on_mouse_enter: Option<RowCallback>,
    pub on_mouse_leave: Option<RowCallback>,
}

impl RowProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_name(mut self, f: impl Fn(&Row) -> Option<String> + 'static) -> Self {
        self.class_name = Some(Rc::new(f));
        self
    }

    pub fn on_click(mut self, f: impl Fn(&Row, usize, &Event) + 'static) -> Self {
        self.on_click = Some(Rc::new(f));
        self
    }

    pub fn on_mouse_enter(mut self, f: impl Fn(&Row, usize, &Event) + 'static) -> Self {
        self.on_mouse_enter = Some(Rc::new(f));
        self
    }

    pub fn on_mouse_leave(mut self, f: impl Fn(&Row, usize, &Event) + 'static) -> Self {
        self.on_mouse_leave = Some(Rc::new(f));
        self
    }

    pub(crate) fn callback_for(&self, event: &Event) -> Option<&RowCallback> {
        match event {
            Event::Click { .. } => self.on_click.as_ref(),
            Event::MouseEnter { .. } => self.on_mouse_enter.as_ref(),
            Event::MouseLeave { .. } => self.on_mouse_leave.as_ref(),
            _ => None,
        }
    }
}

/// Table-level options.
#[derive(Clone)]
pub struct TableProps {
    /// Prefix of every generated element id.
    pub id: String,
    pub sortable: bool,
    pub sort_policy: SortPolicy,
    pub on_sort_end: Option<SortCallback>,
    /// Keep the header in place while the container scrolls vertically.
    pub fixed_header: bool,
    pub row_props: RowProps,
}

impl Default for TableProps {
    fn default() -> Self {
        Self {
            id: "kitchen-table".to_string(),
            sortable: false,
            sort_policy: SortPolicy::default(),
            on_sort_end: None,
            fixed_header: false,
            row_props: RowProps::default(),
        }
    }
}

impl TableProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn sort_policy(mut self, policy: SortPolicy) -> Self {
        self.sort_policy = policy;
        self
    }

    pub fn on_sort_end(mut self, f: impl Fn(&Column, Option<SortOrder>) + 'static) -> Self {
        self.on_sort_end = Some(Rc::new(f));
        self
    }

    pub fn fixed_header(mut self, fixed: bool) -> Self {
        self.fixed_header = fixed;
        self
    }

    pub fn row_props(mut self, row_props: RowProps) -> Self {
        self.row_props = row_props;
        self
    }
}
