//! Column definitions.
//!
//! Every property that may be either a literal or computed is a tagged
//! variant with a single `resolve` method, so call sites never inspect
//! which form they were given.

use std::fmt;
use std::rc::Rc;

use tabledom::{Content, Style};

use crate::value::{Row, Value};

pub type Renderer = Rc<dyn Fn(&Value, &Row) -> Content>;
pub type StyleFn = Rc<dyn Fn(&Value, &Row) -> Style>;

/// Header text, or a producer of header content.
#[derive(Clone)]
pub enum Title {
    Literal(String),
    Computed(Rc<dyn Fn() -> Content>),
}

impl Title {
    pub fn resolve(&self) -> Content {
        match self {
            Self::Literal(s) => Content::Text(s.clone()),
            Self::Computed(f) => f(),
        }
    }

    /// Plain text of the title, for messages and logs.
    pub fn label(&self) -> String {
        self.resolve().text()
    }
}

/// Where a leaf column reads its raw value.
#[derive(Clone)]
pub enum Field {
    Key(String),
    Computed(Rc<dyn Fn(&Row) -> Value>),
}

impl Field {
    pub fn resolve(&self, row: &Row) -> Value {
        match self {
            Self::Key(key) => row.get(key),
            Self::Computed(f) => f(row),
        }
    }
}

/// Content shown when a cell's raw value is `Null`.
#[derive(Clone)]
pub enum DefaultValue {
    Literal(String),
    Computed(Rc<dyn Fn() -> Content>),
}

impl DefaultValue {
    pub fn resolve(&self) -> Content {
        match self {
            Self::Literal(s) => Content::Text(s.clone()),
            Self::Computed(f) => f(),
        }
    }
}

/// Cell class, fixed or computed from the raw value and its row.
#[derive(Clone)]
pub enum ClassName {
    Literal(String),
    Computed(Rc<dyn Fn(&Value, &Row) -> Option<String>>),
}

impl ClassName {
    pub fn resolve(&self, value: &Value, row: &Row) -> Option<String> {
        match self {
            Self::Literal(s) => Some(s.clone()),
            Self::Computed(f) => f(value, row),
        }
    }
}

/// A column of the table, either a leaf bound to row data or a group.
///
/// A group has non-empty `sub_columns`; its cell properties are ignored and
/// it only contributes a header cell spanning its children.
#[derive(Clone)]
pub struct Column {
    pub title: Title,
    pub field: Option<Field>,
    pub renderer: Option<Renderer>,
    pub default_value: Option<DefaultValue>,
    pub class_name: Option<ClassName>,
    pub style: Option<StyleFn>,
    pub sub_columns: Vec<Column>,
    pub freeze: bool,
}

impl Column {
    fn with_title(title: Title) -> Self {
        Self {
            title,
            field: None,
            renderer: None,
            default_value: None,
            class_name: None,
            style: None,
            sub_columns: Vec::new(),
            freeze: false,
        }
    }

    /// A leaf column reading `field` from each row.
    pub fn new(title: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            field: Some(Field::Key(field.into())),
            ..Self::with_title(Title::Literal(title.into()))
        }
    }

    /// A leaf column computing its value from the whole row.
    pub fn computed(title: impl Into<String>, field: impl Fn(&Row) -> Value + 'static) -> Self {
        Self {
            field: Some(Field::Computed(Rc::new(field))),
            ..Self::with_title(Title::Literal(title.into()))
        }
    }

    /// A header-only column spanning `sub_columns`.
    pub fn group(title: impl Into<String>, sub_columns: Vec<Column>) -> Self {
        Self {
            sub_columns,
            ..Self::with_title(Title::Literal(title.into()))
        }
    }

    /// Replace the title with a content producer.
    pub fn title_with(mut self, title: impl Fn() -> Content + 'static) -> Self {
        self.title = Title::Computed(Rc::new(title));
        self
    }

    pub fn renderer(mut self, renderer: impl Fn(&Value, &Row) -> Content + 'static) -> Self {
        self.renderer = Some(Rc::new(renderer));
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(DefaultValue::Literal(value.into()));
        self
    }

    pub fn default_with(mut self, value: impl Fn() -> Content + 'static) -> Self {
        self.default_value = Some(DefaultValue::Computed(Rc::new(value)));
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(ClassName::Literal(class_name.into()));
        self
    }

    pub fn class_with(
        mut self,
        class_name: impl Fn(&Value, &Row) -> Option<String> + 'static,
    ) -> Self {
        self.class_name = Some(ClassName::Computed(Rc::new(class_name)));
        self
    }

    pub fn style(mut self, style: impl Fn(&Value, &Row) -> Style + 'static) -> Self {
        self.style = Some(Rc::new(style));
        self
    }

    /// Pin this column while the table scrolls horizontally.
    pub fn freeze(mut self) -> Self {
        self.freeze = true;
        self
    }

    /// Empty `sub_columns` count as absent.
    pub fn is_group(&self) -> bool {
        !self.sub_columns.is_empty()
    }

    /// Leaf columns of `columns` in left-to-right order, at any depth.
    pub fn leaves(columns: &[Column]) -> Vec<&Column> {
        let mut leaves = Vec::new();
        for column in columns {
            if column.is_group() {
                leaves.extend(Self::leaves(&column.sub_columns));
            } else {
                leaves.push(column);
            }
        }
        leaves
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match &self.title {
            Title::Literal(text) => text.as_str(),
            Title::Computed(_) => "<computed>",
        };
        let field = match &self.field {
            Some(Field::Key(key)) => Some(key.as_str()),
            Some(Field::Computed(_)) => Some("<computed>"),
            None => None,
        };
        f.debug_struct("Column")
            .field("title", &title)
            .field("field", &field)
            .field("freeze", &self.freeze)
            .field("sub_columns", &self.sub_columns)
            .finish_non_exhaustive()
    }
}
