use thiserror::Error;

/// Errors raised by a render pass or by event dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A leaf column (no sub-columns) was declared without a field.
    #[error("leaf column '{title}' has no field")]
    MissingField { title: String },

    /// An event targeted an element this table never rendered.
    #[error("no rendered element with id '{target}'")]
    UnknownTarget { target: String },

    /// An event arrived before the first render.
    #[error("table has not been rendered yet")]
    NotRendered,

    #[error("table is already mounted in '{container}'")]
    AlreadyMounted { container: String },

    #[error("table is mounted in '{expected}', not '{found}'")]
    WrongContainer { expected: String, found: String },
}
