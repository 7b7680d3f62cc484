//! KitchenTable - a declarative data grid.
//!
//! Columns describe a (possibly nested) header tree plus how each leaf
//! reads, renders and styles its cells. [`KitchenTable`] turns columns and
//! rows into a `tabledom` table element, keeps the sort state, and pins
//! frozen columns and the header while its scroll container moves.
//!
//! # Example
//!
//! ```ignore
//! let columns = vec![
//!     Column::new("City", "city").freeze(),
//!     Column::group("Population", vec![
//!         Column::new("City proper", "cityProper"),
//!         Column::new("Urban area", "urbanArea"),
//!     ]),
//! ];
//! let data = vec![row! { "city" => "Shanghai", "cityProper" => 24256800, "urbanArea" => 23416000 }];
//!
//! let mut table = KitchenTable::new(TableProps::new().sortable(true), columns, data);
//! let element = table.render()?;
//! ```

pub mod cell;
pub mod classes;
pub mod column;
pub mod decorator;
pub mod error;
pub mod freeze;
pub mod grid;
pub mod header;
pub mod props;
pub mod sort;
pub mod value;

pub use column::{ClassName, Column, DefaultValue, Field, Title};
pub use error::TableError;
pub use freeze::ScrollSync;
pub use grid::{EventResult, KitchenTable};
pub use props::{RowProps, TableProps};
pub use sort::{SortOrder, SortPolicy, SortState};
pub use value::{Row, Value};

pub mod prelude {
    pub use crate::column::Column;
    pub use crate::grid::{EventResult, KitchenTable};
    pub use crate::props::{RowProps, TableProps};
    pub use crate::row;
    pub use crate::sort::{SortOrder, SortPolicy, SortState};
    pub use crate::value::{Row, Value};
    pub use crate::TableError;

    pub use tabledom::{Color, Content, Element, Event, ScrollContainer, Style, Tag};
}
