//! Text table views over the dashboard records.

mod column;
mod row;
mod rows;
mod table;

pub use column::{truncate, Alignment, Column};
pub use row::{header_indicator, render_header, TableRow};
pub use table::{TableFrame, TableView};
