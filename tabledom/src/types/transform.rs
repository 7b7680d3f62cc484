use std::fmt;

/// A 2-D translation applied on top of an element's laid out position.
///
/// Offsets are in host units: pixels in markup, cells on a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Translate { x: u16, y: u16 },
    TranslateX(u16),
}

impl Transform {
    pub fn translate(x: u16, y: u16) -> Self {
        Self::Translate { x, y }
    }

    pub fn translate_x(x: u16) -> Self {
        Self::TranslateX(x)
    }

    pub fn offset(&self) -> (u16, u16) {
        match *self {
            Self::Translate { x, y } => (x, y),
            Self::TranslateX(x) => (x, 0),
        }
    }
}

fn length(v: u16) -> String {
    if v == 0 {
        "0".to_string()
    } else {
        format!("{v}px")
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Translate { x, y } => write!(f, "translate({}, {})", length(x), length(y)),
            Self::TranslateX(x) => write!(f, "translateX({})", length(x)),
        }
    }
}
