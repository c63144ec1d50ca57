//! Two-way contingency analysis between an independent and a dependent column

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashMap;

use super::contingency::{degrees_of_freedom, Contingency, CrossTabCell};
use crate::config::{Config, UnmatchedPolicy};
use crate::error::{OrEmpty, Result, TableError};
use crate::model::{Table, Value};

/// Collapses raw dependent values into named output columns
///
/// Each definition is a whitespace-delimited list of literal value tokens,
/// e.g. `"Black Silver White Gray"`. A token matches a cell whose display
/// text is identical, so `"2009"` matches the number `2009`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grouping {
    groups: Vec<Vec<String>>,
    names: Vec<String>,
}

impl Grouping {
    pub fn new<I, S>(definitions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let groups = definitions
            .into_iter()
            .map(|d| d.as_ref().split_whitespace().map(str::to_string).collect())
            .collect();
        Self {
            groups,
            names: Vec::new(),
        }
    }

    /// Display names, one per group; a count mismatch falls back to generated names
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.names = names.into_iter().map(|n| n.as_ref().to_string()).collect();
        self
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn resolved_names(&self, config: &Config) -> Vec<String> {
        if self.names.len() == self.groups.len() {
            self.names.clone()
        } else {
            (0..self.groups.len()).map(|i| config.group_name(i)).collect()
        }
    }

    /// Token -> group index; the first group listing a token owns it
    fn token_index(&self) -> FxHashMap<String, usize> {
        let mut index = FxHashMap::default();
        for (i, tokens) in self.groups.iter().enumerate() {
            for token in tokens {
                index.entry(token.clone()).or_insert(i);
            }
        }
        index
    }
}

/// How dependent values map to output columns
enum Membership {
    Tokens(FxHashMap<String, usize>),
    Values(IndexSet<Value>),
}

impl Membership {
    fn group_of(&self, value: &Value) -> Option<usize> {
        match self {
            Membership::Tokens(index) => index.get(value.display().as_ref()).copied(),
            Membership::Values(values) => values.get_index_of(value),
        }
    }
}

/// One row of a cross table: a cell per group plus the row total
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrossTabRow {
    pub cells: Vec<CrossTabCell>,
    pub total: f64,
}

/// Result of [`CrossTabAnalyzer::cross_table`]
///
/// Rows are keyed by independent value in first-occurrence order; columns
/// follow the grouping, or first occurrence of the dependent values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrossTabResult {
    pub independent: String,
    pub dependent: String,
    pub column_names: Vec<String>,
    pub rows: IndexMap<Value, CrossTabRow>,
    pub column_totals: Vec<f64>,
    pub grand_total: f64,
    pub chi2: f64,
    pub degrees_of_freedom: usize,
    /// Always `None`; significance testing is not performed
    pub p_value: Option<f64>,
    /// Observations whose dependent value matched no group
    pub unmatched: usize,
}

impl CrossTabResult {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.column_names.is_empty()
    }
}

/// Builds contingency tables from a [`Table`]
pub struct CrossTabAnalyzer<'a> {
    config: &'a Config,
}

impl<'a> CrossTabAnalyzer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Cross `independent` against `dependent`, optionally collapsing dependent values into groups.
    ///
    /// Returns an empty result for unknown columns, or when the
    /// configuration rejects unmatched observations and one is found.
    pub fn cross_table(
        &self,
        table: &Table,
        independent: &str,
        dependent: &str,
        grouping: Option<&Grouping>,
    ) -> CrossTabResult {
        self.try_cross_table(table, independent, dependent, grouping)
            .or_empty("cross_table")
    }

    fn try_cross_table(
        &self,
        table: &Table,
        independent: &str,
        dependent: &str,
        grouping: Option<&Grouping>,
    ) -> Result<CrossTabResult> {
        let (_, _, x) = table.column(independent)?;
        let (_, _, y) = table.column(dependent)?;

        let (column_names, membership) = match grouping.filter(|g| !g.is_empty()) {
            Some(grouping) => (
                grouping.resolved_names(self.config),
                Membership::Tokens(grouping.token_index()),
            ),
            None => {
                let values: IndexSet<Value> = y.iter().cloned().collect();
                let names = values.iter().map(|v| v.display().into_owned()).collect();
                (names, Membership::Values(values))
            }
        };
        let groups = column_names.len();

        // rows are registered on first sight so their order follows the source column
        let mut counts: IndexMap<Value, Vec<f64>> = IndexMap::new();
        let mut unmatched = 0;

        for (item, value) in x.iter().zip(y) {
            let row = counts
                .entry(item.clone())
                .or_insert_with(|| vec![0.0; groups]);

            match membership.group_of(value) {
                Some(group) => row[group] += 1.0,
                None => match self.config.unmatched {
                    UnmatchedPolicy::Drop => unmatched += 1,
                    UnmatchedPolicy::Reject => {
                        return Err(TableError::UnmatchedObservation {
                            value: value.display().into_owned(),
                        })
                    }
                },
            }
        }

        if unmatched > 0 {
            log::debug!(
                "cross_table({independent}, {dependent}): dropped {unmatched} observations outside every group"
            );
        }

        // a row with no matched observation has no defined ratios
        counts.retain(|_, row| row.iter().any(|&n| n > 0.0));

        let (keys, observed): (Vec<Value>, Vec<Vec<f64>>) = counts.into_iter().unzip();
        let contingency = Contingency::new(observed, groups);
        let evaluation = contingency.evaluate();

        let rows = keys
            .into_iter()
            .zip(evaluation.cells)
            .zip(&contingency.row_totals)
            .map(|((key, cells), &total)| (key, CrossTabRow { cells, total }))
            .collect::<IndexMap<_, _>>();

        Ok(CrossTabResult {
            independent: independent.to_string(),
            dependent: dependent.to_string(),
            degrees_of_freedom: degrees_of_freedom(rows.len(), groups),
            column_names,
            rows,
            column_totals: contingency.column_totals,
            grand_total: contingency.grand_total,
            chi2: evaluation.chi2,
            p_value: None,
            unmatched,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColumnType;

    fn cars() -> Table {
        let rows: Vec<Vec<Value>> = vec![
            vec!["year".into(), "color".into()],
            vec![2009.into(), "Red".into()],
            vec![2009.into(), "Blue".into()],
            vec![2010.into(), "Black".into()],
            vec![2010.into(), "Silver".into()],
            vec![2009.into(), "Pink".into()],
        ];
        let mut table = Table::new();
        table
            .load(&rows, &[ColumnType::Numeric, ColumnType::Character])
            .unwrap();
        table
    }

    fn simple_bold() -> Grouping {
        Grouping::new(["Black Silver White Gray", "Blue Gold Green Red Yellow"])
            .with_names(["Simple", "Bold"])
    }

    #[test]
    fn test_grouped_counts() {
        let config = Config::default();
        let result = CrossTabAnalyzer::new(&config).cross_table(
            &cars(),
            "year",
            "color",
            Some(&simple_bold()),
        );

        assert_eq!(result.column_names, vec!["Simple", "Bold"]);
        let keys: Vec<_> = result.rows.keys().cloned().collect();
        assert_eq!(keys, vec![Value::from(2009), Value::from(2010)]);

        let row_2009 = &result.rows[&Value::from(2009)];
        assert_eq!(row_2009.cells[0].n, 0.0);
        assert_eq!(row_2009.cells[1].n, 2.0);
        assert_eq!(row_2009.total, 2.0);
        assert_eq!(result.column_totals, vec![2.0, 2.0]);
        assert_eq!(result.grand_total, 4.0);
        assert_eq!(result.degrees_of_freedom, 1);
        assert_eq!(result.unmatched, 1);
        assert_eq!(result.p_value, None);
        // perfect association in a 2x2 with 4 observations
        assert!((result.chi2 - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_ungrouped_uses_distinct_dependent_values() {
        let config = Config::default();
        let result = CrossTabAnalyzer::new(&config).cross_table(&cars(), "year", "color", None);
        assert_eq!(result.column_names, vec!["Red", "Blue", "Black", "Silver", "Pink"]);
        assert_eq!(result.degrees_of_freedom, 4);
        assert_eq!(result.unmatched, 0);
        assert_eq!(result.rows[&Value::from(2009)].total, 3.0);
    }

    #[test]
    fn test_mismatched_names_fall_back_to_defaults() {
        let config = Config::default();
        let grouping = Grouping::new(["Black Silver", "Blue Red"]).with_names(["Only"]);
        let result =
            CrossTabAnalyzer::new(&config).cross_table(&cars(), "year", "color", Some(&grouping));
        assert_eq!(result.column_names, vec!["G0", "G1"]);
    }

    #[test]
    fn test_reject_policy_returns_empty() {
        let config = Config::default().with_unmatched(UnmatchedPolicy::Reject);
        let result = CrossTabAnalyzer::new(&config).cross_table(
            &cars(),
            "year",
            "color",
            Some(&simple_bold()),
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_unknown_columns_are_empty() {
        let config = Config::default();
        let analyzer = CrossTabAnalyzer::new(&config);
        assert!(analyzer.cross_table(&cars(), "model", "color", None).is_empty());
        assert!(analyzer.cross_table(&cars(), "year", "trim", None).is_empty());
    }

    #[test]
    fn test_numeric_tokens_match_numbers() {
        let config = Config::default();
        let grouping = Grouping::new(["2009", "2010"]);
        let result =
            CrossTabAnalyzer::new(&config).cross_table(&cars(), "color", "year", Some(&grouping));
        assert_eq!(result.column_totals, vec![3.0, 2.0]);
        assert_eq!(result.unmatched, 0);
    }

    #[test]
    fn test_overlapping_groups_first_wins() {
        let config = Config::default();
        let grouping = Grouping::new(["Red Blue", "Blue Black Silver Pink"]);
        let result =
            CrossTabAnalyzer::new(&config).cross_table(&cars(), "year", "color", Some(&grouping));
        assert_eq!(result.column_totals, vec![2.0, 3.0]);
    }

    #[test]
    fn test_row_without_matches_is_omitted() {
        let config = Config::default();
        let grouping = Grouping::new(["Red Blue"]);
        let result =
            CrossTabAnalyzer::new(&config).cross_table(&cars(), "year", "color", Some(&grouping));
        assert_eq!(result.rows.len(), 1);
        assert!(result.rows.contains_key(&Value::from(2009)));
        assert_eq!(result.unmatched, 3);
        assert_eq!(result.degrees_of_freedom, 0);
    }
}
