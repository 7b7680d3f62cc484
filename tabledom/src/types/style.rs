use super::{Color, TextStyle, Transform};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub transform: Option<Transform>,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.background.is_none()
            && self.foreground.is_none()
            && self.transform.is_none()
            && self.text_style == TextStyle::new()
    }

    /// Inline `style` attribute text; empty when nothing is set.
    pub fn to_css(&self) -> String {
        let mut decls = Vec::new();
        if let Some(bg) = &self.background {
            decls.push(format!("background-color: {}", bg.to_css()));
        }
        if let Some(fg) = &self.foreground {
            decls.push(format!("color: {}", fg.to_css()));
        }
        if self.text_style.bold {
            decls.push("font-weight: bold".to_string());
        }
        if let Some(transform) = &self.transform {
            decls.push(format!("transform: {transform}"));
        }
        decls.join("; ")
    }
}
