//! Sort affordance wrapped around sortable header titles.

use tabledom::{Content, Element};

use crate::classes;
use crate::sort::SortOrder;

/// Wrap `title` with up/down arrows; the arrow for `sorted` is highlighted.
///
/// `sorted` is the current order when this header's column is the sorted
/// one, `None` otherwise.
pub fn sortable_header(title: Content, sorted: Option<SortOrder>) -> Element {
    Element::div()
        .class_name(classes::HEADER_WRAPPER)
        .child(
            Element::div()
                .class_name(classes::HEADER_CONTENT)
                .content(title),
        )
        .child(
            Element::div()
                .class_name(classes::ARROWS)
                .child(arrow(classes::ARROW_UP, sorted == Some(SortOrder::Asc)))
                .child(arrow(classes::ARROW_DOWN, sorted == Some(SortOrder::Desc))),
        )
}

fn arrow(direction: &str, active: bool) -> Element {
    let class = classes::join([
        Some(classes::ARROW),
        Some(direction),
        active.then_some(classes::SORTED),
    ]);
    Element::div().class_name(class.unwrap_or_default())
}
