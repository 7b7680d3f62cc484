use crate::event::Event;

/// Scroll offset of a scroll container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScrollOffset {
    pub x: u16,
    pub y: u16,
}

impl ScrollOffset {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Handle returned by [`ScrollContainer::add_scroll_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A scrollable parent element.
///
/// Listeners are identified by handle only; a scroll produces one
/// [`Event::Scroll`] which the host hands to whoever registered.
#[derive(Debug)]
pub struct ScrollContainer {
    pub id: String,
    offset: ScrollOffset,
    listeners: Vec<ListenerId>,
    next_listener: u64,
}

impl ScrollContainer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            offset: ScrollOffset::default(),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn offset(&self) -> ScrollOffset {
        self.offset
    }

    pub fn scroll_left(&self) -> u16 {
        self.offset.x
    }

    pub fn scroll_top(&self) -> u16 {
        self.offset.y
    }

    pub fn add_scroll_listener(&mut self) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push(id);
        log::debug!("[scroll] {} listener {:?} added", self.id, id);
        id
    }

    /// Returns false if the listener was not registered.
    pub fn remove_scroll_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| *l != id);
        let removed = self.listeners.len() != before;
        if removed {
            log::debug!("[scroll] {} listener {:?} removed", self.id, id);
        }
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Move to an absolute offset.
    /// Returns the scroll event to dispatch, or `None` if nobody listens.
    pub fn scroll_to(&mut self, x: u16, y: u16) -> Option<Event> {
        self.offset = ScrollOffset::new(x, y);
        if self.listeners.is_empty() {
            return None;
        }
        Some(Event::Scroll {
            target: self.id.clone(),
            offset: self.offset,
        })
    }

    /// Scroll by a delta, saturating at zero.
    pub fn scroll_by(&mut self, dx: i16, dy: i16) -> Option<Event> {
        let x = (self.offset.x as i32 + dx as i32).clamp(0, u16::MAX as i32) as u16;
        let y = (self.offset.y as i32 + dy as i32).clamp(0, u16::MAX as i32) as u16;
        self.scroll_to(x, y)
    }
}
