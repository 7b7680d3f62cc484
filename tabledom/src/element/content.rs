use super::Element;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}

impl Content {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Concatenated text of this content and all descendants.
    pub fn text(&self) -> String {
        match self {
            Self::None => String::new(),
            Self::Text(s) => s.clone(),
            Self::Children(children) => children.iter().map(Element::text_content).collect(),
        }
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Element> for Content {
    fn from(el: Element) -> Self {
        Self::Children(vec![el])
    }
}

impl From<Vec<Element>> for Content {
    fn from(children: Vec<Element>) -> Self {
        Self::Children(children)
    }
}
