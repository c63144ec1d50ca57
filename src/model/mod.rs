//! Data model for column-major typed tables

mod table;
pub mod transpose;
mod value;

pub use table::{Columns, Table};
pub use value::{ColumnType, Value};
