//! Expected counts and chi-square contributions for a dense contingency matrix
//!
//! Both cross-tabulation modes reduce their input to an `observed` matrix
//! (rows x groups) and evaluate it here. Degenerate totals never produce
//! NaN: a cell whose expected count is not positive contributes nothing to
//! chi-square, and a ratio with a zero denominator is zero.

use serde::{Deserialize, Serialize};

/// Derived record for one cell of a contingency table
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CrossTabCell {
    /// Observed count
    pub n: f64,
    /// Fraction of the row total
    pub r: f64,
    /// Fraction of the column total
    pub c: f64,
    /// Fraction of the grand total
    pub t: f64,
    /// Expected count under independence
    pub expected: f64,
    /// This cell's chi-square contribution
    pub chi2: f64,
}

/// Observed counts plus their marginal totals
#[derive(Debug, Clone, Default)]
pub(crate) struct Contingency {
    observed: Vec<Vec<f64>>,
    pub row_totals: Vec<f64>,
    pub column_totals: Vec<f64>,
    pub grand_total: f64,
}

/// Cells (row-major) and the table-wide statistic
#[derive(Debug, Clone, Default)]
pub(crate) struct Evaluation {
    pub cells: Vec<Vec<CrossTabCell>>,
    pub chi2: f64,
}

impl Contingency {
    /// `observed[i][j]` is the count for row `i`, group `j`; rows must share one width
    pub fn new(observed: Vec<Vec<f64>>, groups: usize) -> Self {
        let row_totals: Vec<f64> = observed.iter().map(|row| row.iter().sum()).collect();

        let mut column_totals = vec![0.0; groups];
        for row in &observed {
            for (total, count) in column_totals.iter_mut().zip(row) {
                *total += count;
            }
        }

        let grand_total = row_totals.iter().sum();

        Self {
            observed,
            row_totals,
            column_totals,
            grand_total,
        }
    }

    pub fn evaluate(&self) -> Evaluation {
        let mut chi2 = 0.0;

        let cells = self
            .observed
            .iter()
            .zip(&self.row_totals)
            .map(|(row, &row_total)| {
                row.iter()
                    .zip(&self.column_totals)
                    .map(|(&n, &column_total)| {
                        let expected = ratio(row_total * column_total, self.grand_total);
                        let contribution = if expected > 0.0 {
                            (n - expected) * (n - expected) / expected
                        } else {
                            0.0
                        };
                        chi2 += contribution;

                        CrossTabCell {
                            n,
                            r: ratio(n, row_total),
                            c: ratio(n, column_total),
                            t: ratio(n, self.grand_total),
                            expected,
                            chi2: contribution,
                        }
                    })
                    .collect()
            })
            .collect();

        Evaluation { cells, chi2 }
    }
}

/// `(rows - 1) * (columns - 1)`, zero for an empty dimension
pub(crate) fn degrees_of_freedom(rows: usize, columns: usize) -> usize {
    rows.saturating_sub(1) * columns.saturating_sub(1)
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_totals() {
        let table = Contingency::new(vec![vec![10.0, 20.0], vec![30.0, 40.0]], 2);
        assert_eq!(table.row_totals, vec![30.0, 70.0]);
        assert_eq!(table.column_totals, vec![40.0, 60.0]);
        assert_eq!(table.grand_total, 100.0);
    }

    #[test]
    fn test_chi_square_two_by_two() {
        let eval = Contingency::new(vec![vec![10.0, 20.0], vec![30.0, 40.0]], 2).evaluate();

        // expected: [[12, 18], [28, 42]]
        let cell = eval.cells[0][0];
        assert!(close(cell.expected, 12.0));
        assert!(close(cell.chi2, 4.0 / 12.0));
        assert!(close(cell.r, 10.0 / 30.0));
        assert!(close(cell.c, 10.0 / 40.0));
        assert!(close(cell.t, 0.1));

        let expected = 4.0 / 12.0 + 4.0 / 18.0 + 4.0 / 28.0 + 4.0 / 42.0;
        assert!(close(eval.chi2, expected));
    }

    #[test]
    fn test_independent_table_has_zero_chi_square() {
        let eval = Contingency::new(vec![vec![1.0, 2.0], vec![2.0, 4.0]], 2).evaluate();
        assert!(close(eval.chi2, 0.0));
    }

    #[test]
    fn test_zero_column_contributes_nothing() {
        let eval = Contingency::new(vec![vec![5.0, 0.0], vec![3.0, 0.0]], 2).evaluate();
        assert!(eval.chi2.is_finite());
        assert_eq!(eval.cells[0][1].expected, 0.0);
        assert_eq!(eval.cells[0][1].chi2, 0.0);
        assert_eq!(eval.cells[0][1].c, 0.0);
    }

    #[test]
    fn test_empty_matrix() {
        let eval = Contingency::new(Vec::new(), 3).evaluate();
        assert!(eval.cells.is_empty());
        assert_eq!(eval.chi2, 0.0);
    }

    #[test]
    fn test_degrees_of_freedom() {
        assert_eq!(degrees_of_freedom(3, 4), 6);
        assert_eq!(degrees_of_freedom(0, 4), 0);
        assert_eq!(degrees_of_freedom(2, 0), 0);
    }
}
