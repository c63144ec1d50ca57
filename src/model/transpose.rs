//! Row-major / column-major conversion
//!
//! Public operations speak in rows; the table stores columns. All index
//! juggling between the two lives here.

use super::Value;

/// Transpose row-major `rows` into `width` columns.
///
/// Rows shorter than `width` are padded with [`Value::Null`]; extra cells are
/// ignored. Callers that need a strictly rectangular input validate first.
pub fn to_columns(rows: &[Vec<Value>], width: usize) -> Vec<Vec<Value>> {
    let mut columns: Vec<Vec<Value>> = (0..width).map(|_| Vec::with_capacity(rows.len())).collect();

    for row in rows {
        for (j, column) in columns.iter_mut().enumerate() {
            column.push(row.get(j).cloned().unwrap_or_default());
        }
    }

    columns
}

/// Transpose column-major `columns` back into rows.
///
/// The row count is taken from the first column.
pub fn to_rows(columns: &[Vec<Value>]) -> Vec<Vec<Value>> {
    let height = columns.first().map_or(0, Vec::len);

    (0..height)
        .map(|i| {
            columns
                .iter()
                .map(|column| column.get(i).cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}
