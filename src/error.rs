//! Error types for table loading and column resolution

use thiserror::Error;

use crate::model::ColumnType;

/// Errors produced while loading or querying a [`Table`](crate::Table).
///
/// Only [`Table::load`](crate::Table::load) surfaces these to callers. Query
/// operations resolve through them internally and fall back to an empty
/// result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("need a header row and at least one data row, got {rows} rows")]
    TooFewRows { rows: usize },

    #[error("no column types supplied")]
    NoColumnTypes,

    #[error("header has {header} columns but {types} types were supplied")]
    HeaderMismatch { header: usize, types: usize },

    #[error("row {row} has {actual} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("column '{name}' not found")]
    ColumnNotFound { name: String },

    #[error("column '{name}' is {actual}, expected {expected}")]
    TypeMismatch {
        name: String,
        expected: ColumnType,
        actual: ColumnType,
    },

    #[error("invalid table layout: {0}")]
    InvalidLayout(String),

    #[error("value '{value}' does not belong to any group")]
    UnmatchedObservation { value: String },
}

pub type Result<T> = std::result::Result<T, TableError>;

/// Collapse a query result into the empty/zero sentinel of its type.
///
/// Query operations never fail across the public boundary; the cause is
/// logged instead.
pub(crate) trait OrEmpty<T> {
    fn or_empty(self, operation: &str) -> T;
}

impl<T: Default> OrEmpty<T> for Result<T> {
    fn or_empty(self, operation: &str) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                log::debug!("{operation}: {e}; returning empty result");
                T::default()
            }
        }
    }
}
