pub mod detail;
pub mod html;
pub mod layout;
pub mod refs;
pub mod table;

pub use refs::{LinkMode, ValueFmt};
pub use table::{CellFmt, Column};
