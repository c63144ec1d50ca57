//! Configuration handling for tabstat

use serde::{Deserialize, Serialize};

/// Output format for rendered reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// What a cross table does with a dependent value that matches no group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnmatchedPolicy {
    /// Skip the observation and count it in the result
    #[default]
    Drop,
    /// Return an empty result
    Reject,
}

/// Configuration for table analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Decimal places kept by one-way percentages
    pub percent_decimals: u32,
    /// Prefix for synthesized group names (`G0`, `G1`, ...)
    pub group_name_prefix: String,
    /// Handling of dependent values outside every group
    pub unmatched: UnmatchedPolicy,
    /// Output format
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            percent_decimals: 2,
            group_name_prefix: "G".to_string(),
            unmatched: UnmatchedPolicy::default(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Create a new Config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set decimal places for one-way percentages
    pub fn with_percent_decimals(mut self, decimals: u32) -> Self {
        self.percent_decimals = decimals;
        self
    }

    /// Set prefix for synthesized group names
    pub fn with_group_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.group_name_prefix = prefix.into();
        self
    }

    /// Set the unmatched-observation policy
    pub fn with_unmatched(mut self, policy: UnmatchedPolicy) -> Self {
        self.unmatched = policy;
        self
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Name of the `index`-th synthesized group
    pub fn group_name(&self, index: usize) -> String {
        format!("{}{}", self.group_name_prefix, index)
    }

    /// Round a percentage to the configured number of decimals
    pub fn round_percent(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.percent_decimals as i32);
        (value * scale).round() / scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("Terminal".parse::<OutputFormat>(), Ok(OutputFormat::Terminal));
        assert!("html".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_group_name() {
        let config = Config::default();
        assert_eq!(config.group_name(0), "G0");
        assert_eq!(config.with_group_name_prefix("grp").group_name(3), "grp3");
    }

    #[test]
    fn test_round_percent() {
        let config = Config::default();
        assert_eq!(config.round_percent(66.666_666), 66.67);
        assert_eq!(config.with_percent_decimals(0).round_percent(33.4), 33.0);
    }
}
