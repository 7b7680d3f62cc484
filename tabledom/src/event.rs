use crate::scroll::ScrollOffset;

/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse click on an element
    Click { target: String },
    /// Pointer entered an element
    MouseEnter { target: String },
    /// Pointer left an element
    MouseLeave { target: String },
    /// A scroll container moved; `offset` is its new scroll position
    Scroll { target: String, offset: ScrollOffset },
    /// Key press, not targeted
    Key { key: Key },
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
        }
    }

    pub fn mouse_enter(target: impl Into<String>) -> Self {
        Self::MouseEnter {
            target: target.into(),
        }
    }

    pub fn mouse_leave(target: impl Into<String>) -> Self {
        Self::MouseLeave {
            target: target.into(),
        }
    }

    /// DOM name of the event type.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Click { .. } => "click",
            Self::MouseEnter { .. } => "mouseenter",
            Self::MouseLeave { .. } => "mouseleave",
            Self::Scroll { .. } => "scroll",
            Self::Key { .. } => "keydown",
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Click { target }
            | Self::MouseEnter { target }
            | Self::MouseLeave { target }
            | Self::Scroll { target, .. } => Some(target),
            Self::Key { .. } => None,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Other,
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            _ => Key::Other,
        }
    }
}
