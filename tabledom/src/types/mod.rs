mod color;
mod enums;
mod style;
mod transform;

pub use color::{Color, Rgb};
pub use enums::{TextAlign, TextStyle};
pub use style::Style;
pub use transform::Transform;
