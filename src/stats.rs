//! Descriptive statistics over a single numeric column
//!
//! Quantiles use linear interpolation between order statistics: for a
//! fraction `p` over `n` sorted values, `h = (n - 1) * p` and the result is
//! `x[floor(h)] + (h - floor(h)) * (x[floor(h) + 1] - x[floor(h)])`.
//!
//! The standard deviation is the sample standard deviation (`n - 1`
//! denominator). Fewer than two values give zero. Empty input gives zero for
//! every scalar and an empty vector for summaries.

use serde::{Deserialize, Serialize};

/// Fraction used when a quantile request is outside `(0, 1)`
pub const DEFAULT_QUANTILE: f64 = 0.25;

/// Most interior points [`DescriptiveStats::quantiles`] will produce; finer fractions fall back to [`DEFAULT_QUANTILE`]
pub const MAX_QUANTILE_POINTS: usize = 1000;

/// Precomputed statistics for one column of numbers
#[derive(Debug, Clone, Default)]
pub struct DescriptiveStats {
    sorted: Vec<f64>,
    mean: f64,
    std: f64,
}

impl DescriptiveStats {
    /// Build statistics from raw values; NaN entries are ignored
    pub fn new(data: &[f64]) -> Self {
        let mut sorted: Vec<f64> = data.iter().copied().filter(|x| !x.is_nan()).collect();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let mean = if n == 0 {
            0.0
        } else {
            sorted.iter().sum::<f64>() / n as f64
        };
        let std = if n < 2 {
            0.0
        } else {
            let ss: f64 = sorted.iter().map(|x| (x - mean) * (x - mean)).sum();
            (ss / (n - 1) as f64).sqrt()
        };

        Self { sorted, mean, std }
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation
    pub fn std(&self) -> f64 {
        self.std
    }

    pub fn min(&self) -> f64 {
        self.sorted.first().copied().unwrap_or(0.0)
    }

    pub fn max(&self) -> f64 {
        self.sorted.last().copied().unwrap_or(0.0)
    }

    /// Interpolated value at fraction `p` in `[0, 1]`
    pub fn quantile(&self, p: f64) -> f64 {
        let n = self.sorted.len();
        if n == 0 {
            return 0.0;
        }

        let h = (n - 1) as f64 * p.clamp(0.0, 1.0);
        let j = h.floor() as usize;
        let g = h - h.floor();

        if j + 1 >= n {
            self.sorted[n - 1]
        } else {
            self.sorted[j] + g * (self.sorted[j + 1] - self.sorted[j])
        }
    }

    /// Min, first quartile, median, third quartile, max
    pub fn five_numbers(&self) -> Vec<f64> {
        if self.is_empty() {
            return Vec::new();
        }
        [0.0, 0.25, 0.5, 0.75, 1.0]
            .iter()
            .map(|&p| self.quantile(p))
            .collect()
    }

    /// Min, the quantiles at `q, 2q, 3q, ...` strictly below 1, then max.
    ///
    /// A `q` outside `(0, 1)`, or one fine enough to need more than
    /// [`MAX_QUANTILE_POINTS`] interior points, is replaced by [`DEFAULT_QUANTILE`].
    pub fn quantiles(&self, q: f64) -> Vec<f64> {
        if self.is_empty() {
            return Vec::new();
        }

        let q = if q > 0.0 && q < 1.0 && 1.0 / q <= (MAX_QUANTILE_POINTS + 1) as f64 {
            q
        } else {
            log::debug!("quantile fraction {q} out of range, using {DEFAULT_QUANTILE}");
            DEFAULT_QUANTILE
        };
        // tolerance keeps 5 * 0.2 from producing a spurious interior point
        let interior = (((1.0 / q) - 1e-9).ceil() as usize).saturating_sub(1);

        let mut result = Vec::with_capacity(interior + 2);
        result.push(self.min());
        result.extend((1..=interior).map(|k| self.quantile(k as f64 * q)));
        result.push(self.max());
        result
    }
}

/// Report record for one numeric column
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    /// Min, Q1, median, Q3, max
    pub five_numbers: Vec<f64>,
}

impl ColumnSummary {
    pub fn new(column: impl Into<String>, stats: &DescriptiveStats) -> Self {
        Self {
            column: column.into(),
            count: stats.len(),
            mean: stats.mean(),
            std: stats.std(),
            five_numbers: stats.five_numbers(),
        }
    }
}
