//! Column-wise rescaling and train/test splitting
//!
//! Transforms never touch the source table; they return a fresh
//! column-major block. NUMERIC columns are transformed, other columns are
//! copied as-is, and non-numeric cells inside a NUMERIC column pass through.

use crate::model::transpose;
use crate::model::{ColumnType, Columns, Table, Value};
use crate::stats::DescriptiveStats;

/// Training and test blocks, both column-major
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Split {
    pub train: Columns,
    pub test: Columns,
}

impl Split {
    pub fn is_empty(&self) -> bool {
        self.train.is_empty() && self.test.is_empty()
    }

    /// Training block as rows
    pub fn train_rows(&self) -> Vec<Vec<Value>> {
        transpose::to_rows(&self.train)
    }

    /// Test block as rows
    pub fn test_rows(&self) -> Vec<Vec<Value>> {
        transpose::to_rows(&self.test)
    }
}

/// Rescale every NUMERIC column to `[0, 1]`; a constant column maps to 0
pub fn normalize(types: &[ColumnType], columns: &[Vec<Value>]) -> Columns {
    map_numeric(types, columns, |numbers| {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &x in numbers {
            if x < min {
                min = x;
            }
            if x > max {
                max = x;
            }
        }

        let range = max - min;
        move |x: f64| {
            if range > 0.0 && range.is_finite() {
                (x - min) / range
            } else {
                0.0
            }
        }
    })
}

/// Replace every NUMERIC value by its z-score; a constant column maps to 0
pub fn z_score(types: &[ColumnType], columns: &[Vec<Value>]) -> Columns {
    map_numeric(types, columns, |numbers| {
        let stats = DescriptiveStats::new(numbers);
        let (mean, std) = (stats.mean(), stats.std());
        move |x: f64| if std > 0.0 { (x - mean) / std } else { 0.0 }
    })
}

/// Rows `0..=row` go to `train`, the rest to `test`.
///
/// `row` past the last row yields an empty split.
pub fn split(row: usize, columns: &[Vec<Value>]) -> Split {
    let height = columns.first().map_or(0, Vec::len);
    if row >= height {
        return Split::default();
    }

    let (train, test) = columns
        .iter()
        .map(|column| {
            let (train, test) = column.split_at((row + 1).min(column.len()));
            (train.to_vec(), test.to_vec())
        })
        .unzip();

    Split { train, test }
}

/// Apply a per-column scaling built from that column's numbers
fn map_numeric<B, F>(types: &[ColumnType], columns: &[Vec<Value>], build: B) -> Columns
where
    B: Fn(&[f64]) -> F,
    F: Fn(f64) -> f64,
{
    columns
        .iter()
        .zip(types)
        .map(|(column, column_type)| match column_type {
            ColumnType::Numeric => {
                let numbers: Vec<f64> = column.iter().filter_map(Value::as_f64).collect();
                let scale = build(&numbers);
                column
                    .iter()
                    .map(|value| match value {
                        Value::Number(x) => Value::Number(scale(*x)),
                        other => other.clone(),
                    })
                    .collect()
            }
            ColumnType::Character | ColumnType::Boolean => column.clone(),
        })
        .collect()
}

impl Table {
    /// Column-wise `[0, 1]` rescaling of the table
    pub fn normalize(&self) -> Columns {
        normalize(&self.data_types(), self.columns())
    }

    /// Column-wise z-scores of the table
    pub fn z_score(&self) -> Columns {
        z_score(&self.data_types(), self.columns())
    }

    /// Split the table, or `data` (column-major) when given, after `row`
    pub fn split(&self, row: usize, data: Option<&[Vec<Value>]>) -> Split {
        split(row, data.unwrap_or_else(|| self.columns()))
    }
}
