pub mod buffer;
pub mod element;
pub mod event;
pub mod print;
pub mod render;
pub mod scroll;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::{find_element, find_element_mut, Content, Element, Tag};
pub use event::{Event, Key};
pub use render::{render_table, TableExtent, Viewport};
pub use scroll::{ListenerId, ScrollContainer, ScrollOffset};
pub use terminal::Terminal;
pub use types::*;
