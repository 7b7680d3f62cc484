//! Keeps frozen columns and a fixed header in place while the table's
//! scroll container moves.
//!
//! The controller holds at most one listener registration. `attach` and
//! `detach` are driven by the table's mount and unmount.

use tabledom::{Element, ListenerId, ScrollContainer, ScrollOffset, Tag, Transform};

use crate::classes;
use crate::error::TableError;

#[derive(Debug)]
struct Attachment {
    container: String,
    listener: ListenerId,
}

#[derive(Debug, Default)]
pub struct ScrollSync {
    fixed_header: bool,
    attachment: Option<Attachment>,
    last_offset: Option<ScrollOffset>,
}

impl ScrollSync {
    pub fn new(fixed_header: bool) -> Self {
        Self {
            fixed_header,
            ..Default::default()
        }
    }

    pub fn set_fixed_header(&mut self, fixed: bool) {
        self.fixed_header = fixed;
    }

    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// Whether scroll events from `container` are ours to handle.
    pub fn listens_to(&self, container: &str) -> bool {
        self.attachment
            .as_ref()
            .is_some_and(|a| a.container == container)
    }

    pub fn last_offset(&self) -> Option<ScrollOffset> {
        self.last_offset
    }

    /// Register a scroll listener on `container`.
    pub fn attach(&mut self, container: &mut ScrollContainer) -> Result<(), TableError> {
        if let Some(existing) = &self.attachment {
            return Err(TableError::AlreadyMounted {
                container: existing.container.clone(),
            });
        }
        let listener = container.add_scroll_listener();
        log::debug!("[freeze] attached to {}", container.id);
        self.attachment = Some(Attachment {
            container: container.id.clone(),
            listener,
        });
        Ok(())
    }

    /// Release the listener. Returns `Ok(false)` if nothing was attached.
    pub fn detach(&mut self, container: &mut ScrollContainer) -> Result<bool, TableError> {
        let Some(attachment) = &self.attachment else {
            return Ok(false);
        };
        if attachment.container != container.id {
            return Err(TableError::WrongContainer {
                expected: attachment.container.clone(),
                found: container.id.clone(),
            });
        }
        container.remove_scroll_listener(attachment.listener);
        log::debug!("[freeze] detached from {}", container.id);
        self.attachment = None;
        self.last_offset = None;
        Ok(true)
    }

    /// Record `offset` and reposition the cells of `table`.
    pub fn on_scroll(&mut self, table: &mut Element, offset: ScrollOffset) {
        log::trace!("[freeze] scroll to ({}, {})", offset.x, offset.y);
        self.last_offset = Some(offset);
        apply_offset(table, offset, self.fixed_header);
    }

    /// Re-apply the last seen offset to a freshly rendered tree.
    pub fn reapply(&self, table: &mut Element) {
        if let Some(offset) = self.last_offset {
            apply_offset(table, offset, self.fixed_header);
        }
    }
}

/// Translate header cells and frozen body cells by the container offset.
///
/// Header cells get `translate(x, y)` where `x` is the horizontal offset for
/// frozen columns (else 0) and `y` the vertical offset in fixed-header mode
/// (else 0). Frozen body cells get `translateX(x)`. Other body cells are
/// left untouched.
pub fn apply_offset(table: &mut Element, offset: ScrollOffset, fixed_header: bool) {
    let y = if fixed_header { offset.y } else { 0 };
    table.walk_mut(&mut |el| {
        let frozen = el.has_class(classes::FROZEN_COLUMN);
        match el.tag {
            Tag::Th => {
                let x = if frozen { offset.x } else { 0 };
                el.style.transform = Some(Transform::translate(x, y));
            }
            Tag::Td if frozen => {
                el.style.transform = Some(Transform::translate_x(offset.x));
            }
            _ => {}
        }
    });
}
