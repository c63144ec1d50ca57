//! Cross-tabulation of pre-aggregated counts
//!
//! Column 0 holds categorical row labels and every other column already
//! holds a count per label, so no observation pass is needed. Output is
//! organized by column.

use serde::{Deserialize, Serialize};

use super::contingency::{degrees_of_freedom, Contingency, CrossTabCell};
use super::cross_table::CrossTabAnalyzer;
use crate::error::{OrEmpty, Result, TableError};
use crate::model::{ColumnType, Table, Value};

/// Result of [`CrossTabAnalyzer::cross_tabulation`]; `columns[j][i]` is label `i` in count column `j`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrossTabulation {
    pub row_labels: Vec<Value>,
    pub column_names: Vec<String>,
    pub columns: Vec<Vec<CrossTabCell>>,
    pub row_totals: Vec<f64>,
    pub column_totals: Vec<f64>,
    pub grand_total: f64,
    pub chi2: f64,
    pub degrees_of_freedom: usize,
    pub p_value: Option<f64>,
}

impl CrossTabulation {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl CrossTabAnalyzer<'_> {
    /// Tabulate column 0 (CHARACTER labels) against every other column (NUMERIC counts).
    ///
    /// Returns an empty result when the table has no count columns or the
    /// column types do not fit that layout.
    pub fn cross_tabulation(&self, table: &Table) -> CrossTabulation {
        self.try_cross_tabulation(table)
            .or_empty("cross_tabulation")
    }

    fn try_cross_tabulation(&self, table: &Table) -> Result<CrossTabulation> {
        let categories = table.categories();
        let types = table.data_types();
        let body = table.columns();

        if body.len() < 2 {
            return Err(TableError::InvalidLayout(format!(
                "need a label column and at least one count column, got {} columns",
                body.len()
            )));
        }

        for (j, (&column_type, name)) in types.iter().zip(&categories).enumerate() {
            let expected = if j == 0 {
                ColumnType::Character
            } else {
                ColumnType::Numeric
            };
            if column_type != expected {
                return Err(TableError::TypeMismatch {
                    name: name.clone(),
                    expected,
                    actual: column_type,
                });
            }
        }

        let counts = &body[1..];
        let n = table.item_count();
        let observed: Vec<Vec<f64>> = (0..n)
            .map(|i| {
                counts
                    .iter()
                    .map(|column| column[i].as_f64().unwrap_or(0.0))
                    .collect()
            })
            .collect();

        let groups = counts.len();
        let contingency = Contingency::new(observed, groups);
        let evaluation = contingency.evaluate();

        let columns = (0..groups)
            .map(|j| evaluation.cells.iter().map(|row| row[j]).collect())
            .collect();

        Ok(CrossTabulation {
            row_labels: body[0].clone(),
            column_names: categories[1..].to_vec(),
            columns,
            row_totals: contingency.row_totals,
            column_totals: contingency.column_totals,
            grand_total: contingency.grand_total,
            chi2: evaluation.chi2,
            degrees_of_freedom: degrees_of_freedom(n, groups),
            p_value: None,
        })
    }
}
