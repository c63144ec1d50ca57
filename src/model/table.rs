//! Column-major typed table

use serde::{Deserialize, Serialize};

use super::transpose;
use super::value::{ColumnType, Value};
use crate::config::Config;
use crate::error::{OrEmpty, Result, TableError};
use crate::stats::{ColumnSummary, DescriptiveStats};

/// Column-major block of values: `columns[j][i]` is row `i` of column `j`
pub type Columns = Vec<Vec<Value>>;

/// A typed, column-major table
///
/// The table is rebuilt wholesale by [`Table::load`]; afterwards the only
/// mutation is [`Table::remove_column`]. `categories`, `types` and `body`
/// always have the same length and every column has `item_count` values.
/// Deserialization checks the same shape and fails with a [`TableError`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct Table {
    categories: Vec<String>,
    types: Vec<ColumnType>,
    body: Columns,
    #[serde(skip)]
    config: Config,
}

/// Serialized form of a [`Table`], checked before it becomes one
#[derive(Deserialize)]
struct RawTable {
    categories: Vec<String>,
    types: Vec<ColumnType>,
    body: Columns,
}

impl TryFrom<RawTable> for Table {
    type Error = TableError;

    fn try_from(raw: RawTable) -> Result<Self> {
        let width = raw.types.len();
        if raw.categories.len() != width {
            return Err(TableError::HeaderMismatch {
                header: raw.categories.len(),
                types: width,
            });
        }
        if raw.body.len() != width {
            return Err(TableError::InvalidLayout(format!(
                "{} data columns for {} column types",
                raw.body.len(),
                width
            )));
        }

        let height = raw.body.first().map_or(0, Vec::len);
        if let Some((j, column)) = raw
            .body
            .iter()
            .enumerate()
            .find(|(_, column)| column.len() != height)
        {
            return Err(TableError::InvalidLayout(format!(
                "column {} has {} values, expected {}",
                j,
                column.len(),
                height
            )));
        }

        Ok(Self {
            categories: raw.categories,
            types: raw.types,
            body: raw.body,
            config: Config::default(),
        })
    }
}

impl Table {
    /// Create an empty table with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Replace the table contents.
    ///
    /// `rows[0]` holds the column names and `rows[1..]` the data, row-major.
    /// `types` holds one tag per column. On error the table is left untouched.
    pub fn load(&mut self, rows: &[Vec<Value>], types: &[ColumnType]) -> Result<()> {
        if let Err(e) = Self::validate(rows, types) {
            log::warn!("rejected table load: {e}");
            return Err(e);
        }

        let width = types.len();
        self.categories = rows[0].iter().map(|c| c.display().into_owned()).collect();
        self.types = types.to_vec();
        self.body = transpose::to_columns(&rows[1..], width);

        for ((name, column_type), values) in self.categories.iter().zip(&self.types).zip(&self.body) {
            let foreign = values.iter().filter(|v| !column_type.accepts(v)).count();
            if foreign > 0 {
                log::debug!("column '{name}' ({column_type}) holds {foreign} values of another type");
            }
        }

        log::debug!(
            "loaded table with {} columns and {} rows",
            width,
            self.item_count()
        );
        Ok(())
    }

    fn validate(rows: &[Vec<Value>], types: &[ColumnType]) -> Result<()> {
        if rows.len() < 2 {
            return Err(TableError::TooFewRows { rows: rows.len() });
        }
        if types.is_empty() {
            return Err(TableError::NoColumnTypes);
        }

        let width = rows[0].len();
        if width != types.len() {
            return Err(TableError::HeaderMismatch {
                header: width,
                types: types.len(),
            });
        }

        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, cells)| cells.len() != width)
        {
            return Err(TableError::RaggedRow {
                row,
                expected: width,
                actual: cells.len(),
            });
        }

        Ok(())
    }

    /// Column names in load order
    pub fn categories(&self) -> Vec<String> {
        self.categories.clone()
    }

    /// Column type tags in load order
    pub fn data_types(&self) -> Vec<ColumnType> {
        self.types.clone()
    }

    /// Number of data rows
    pub fn item_count(&self) -> usize {
        self.body.first().map_or(0, Vec::len)
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.body.len()
    }

    /// Check if the table holds no columns
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Analysis configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Borrow the column-major body
    pub fn columns(&self) -> &[Vec<Value>] {
        &self.body
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == name)
    }

    /// Copy of the named column, or an empty vector if the name is unknown
    pub fn get_column(&self, name: &str) -> Vec<Value> {
        self.column(name)
            .map(|(_, _, values)| values.to_vec())
            .or_empty("get_column")
    }

    /// Remove the named column; unknown names are ignored
    pub fn remove_column(&mut self, name: &str) {
        if let Some(index) = self.column_index(name) {
            self.categories.remove(index);
            self.types.remove(index);
            self.body.remove(index);
        }
    }

    /// Resolve a column by name
    pub(crate) fn column(&self, name: &str) -> Result<(usize, ColumnType, &[Value])> {
        let index = self
            .column_index(name)
            .ok_or_else(|| TableError::ColumnNotFound {
                name: name.to_string(),
            })?;
        Ok((index, self.types[index], &self.body[index]))
    }

    /// Resolve a NUMERIC column and extract its numbers, skipping non-numeric cells
    pub(crate) fn numeric_column(&self, name: &str) -> Result<Vec<f64>> {
        let (_, column_type, values) = self.column(name)?;
        match column_type {
            ColumnType::Numeric => Ok(values.iter().filter_map(Value::as_f64).collect()),
            ColumnType::Character | ColumnType::Boolean => Err(TableError::TypeMismatch {
                name: name.to_string(),
                expected: ColumnType::Numeric,
                actual: column_type,
            }),
        }
    }

    fn stats(&self, name: &str) -> Result<DescriptiveStats> {
        self.numeric_column(name).map(|data| DescriptiveStats::new(&data))
    }

    /// Five-number summary (min, Q1, median, Q3, max) of a numeric column
    pub fn summary(&self, name: &str) -> Vec<f64> {
        self.stats(name)
            .map(|s| s.five_numbers())
            .or_empty("summary")
    }

    /// `max - min` of a numeric column, or zero
    pub fn range(&self, name: &str) -> f64 {
        self.stats(name).map(|s| s.max() - s.min()).or_empty("range")
    }

    /// Arithmetic mean of a numeric column, or zero
    pub fn mean(&self, name: &str) -> f64 {
        self.stats(name).map(|s| s.mean()).or_empty("mean")
    }

    /// Sample standard deviation of a numeric column, or zero
    pub fn std(&self, name: &str) -> f64 {
        self.stats(name).map(|s| s.std()).or_empty("std")
    }

    /// Min, interior quantiles at `q, 2q, ...`, then max.
    ///
    /// A `q` outside `(0, 1)`, or finer than [`MAX_QUANTILE_POINTS`](crate::stats::MAX_QUANTILE_POINTS)
    /// interior points allow, falls back to quartiles.
    pub fn quantiles(&self, name: &str, q: f64) -> Vec<f64> {
        self.stats(name)
            .map(|s| s.quantiles(q))
            .or_empty("quantiles")
    }

    /// Summaries of every NUMERIC column, in column order
    pub fn describe(&self) -> Vec<ColumnSummary> {
        self.categories
            .iter()
            .zip(&self.types)
            .zip(&self.body)
            .filter(|((_, column_type), _)| **column_type == ColumnType::Numeric)
            .map(|((name, _), values)| {
                let data: Vec<f64> = values.iter().filter_map(Value::as_f64).collect();
                ColumnSummary::new(name.as_str(), &DescriptiveStats::new(&data))
            })
            .collect()
    }
}
