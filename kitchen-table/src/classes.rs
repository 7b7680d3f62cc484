//! Class names attached to the rendered table.

pub const ROOT: &str = "KitchenTable";
pub const SORTABLE: &str = "KitchenTable-sortable";
pub const FROZEN_COLUMN: &str = "KitchenTable-frozen-column";

pub const HEADER_WRAPPER: &str = "KitchenTable-header-wrapper";
pub const HEADER_CONTENT: &str = "KitchenTable-header-content";
pub const ARROWS: &str = "KitchenTable-arrows";
pub const ARROW: &str = "KitchenTable-arrow";
pub const ARROW_UP: &str = "KitchenTable-up";
pub const ARROW_DOWN: &str = "KitchenTable-down";
pub const SORTED: &str = "KitchenTable-sort";

/// Space-join the present class names; `None` when nothing is left.
pub fn join<'a>(classes: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
    let joined = classes
        .into_iter()
        .flatten()
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (!joined.is_empty()).then_some(joined)
}
