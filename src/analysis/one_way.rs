//! One-way frequency tables

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{OrEmpty, Result};
use crate::model::{Table, Value};

/// Count or rounded percentage for one distinct value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Frequency {
    Count(usize),
    Percent(f64),
}

impl Frequency {
    pub fn as_f64(self) -> f64 {
        match self {
            Frequency::Count(n) => n as f64,
            Frequency::Percent(p) => p,
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Frequency::Count(n) => write!(f, "{}", n),
            Frequency::Percent(p) => write!(f, "{:.2}", p),
        }
    }
}

/// An `{item, count}` record, in first-occurrence order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCount {
    pub item: Value,
    pub count: Frequency,
}

/// Frequencies of the distinct values of one column, keyed in first-occurrence order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OneWayTable {
    pub column: String,
    pub frequencies: IndexMap<Value, Frequency>,
    total: usize,
}

impl OneWayTable {
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Number of observations counted
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn get(&self, item: &Value) -> Option<Frequency> {
        self.frequencies.get(item).copied()
    }

    /// Flatten into `{item, count}` records for renderers
    pub fn to_item_counts(&self) -> Vec<ItemCount> {
        self.frequencies
            .iter()
            .map(|(item, &count)| ItemCount {
                item: item.clone(),
                count,
            })
            .collect()
    }
}

/// Builds one-way tables
pub struct OneWayAnalyzer<'a> {
    config: &'a Config,
}

impl<'a> OneWayAnalyzer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Count each distinct value of `column`; empty if the column is unknown
    pub fn one_way(&self, table: &Table, column: &str, as_percentage: bool) -> OneWayTable {
        self.try_one_way(table, column, as_percentage)
            .or_empty("one_way")
    }

    fn try_one_way(&self, table: &Table, column: &str, as_percentage: bool) -> Result<OneWayTable> {
        let (_, _, values) = table.column(column)?;

        let mut counts: IndexMap<Value, usize> = IndexMap::new();
        for value in values {
            *counts.entry(value.clone()).or_insert(0) += 1;
        }

        let n = values.len();
        let frequencies = counts
            .into_iter()
            .map(|(item, count)| {
                let frequency = if as_percentage {
                    Frequency::Percent(self.config.round_percent(count as f64 / n as f64 * 100.0))
                } else {
                    Frequency::Count(count)
                };
                (item, frequency)
            })
            .collect();

        Ok(OneWayTable {
            column: column.to_string(),
            frequencies,
            total: n,
        })
    }
}
