//! Output formatting for analysis reports

mod json;
mod terminal;

use std::io::Write;

use anyhow::Result;

use crate::analysis::{CrossTabResult, CrossTabulation, OneWayTable};
use crate::config::OutputFormat;
use crate::stats::ColumnSummary;

pub use json::JsonOutput;
pub use terminal::TerminalOutput;

/// One rendered unit of analysis
#[derive(Debug, Clone)]
pub enum Report {
    /// Descriptive statistics for numeric columns
    Summary(Vec<ColumnSummary>),
    /// Frequency table of one column
    OneWay(OneWayTable),
    /// Contingency table built from raw observations
    CrossTable(CrossTabResult),
    /// Contingency table built from pre-aggregated counts
    CrossTabulation(CrossTabulation),
}

impl Report {
    /// Short label used in headings and JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            Report::Summary(_) => "summary",
            Report::OneWay(_) => "one_way",
            Report::CrossTable(_) => "cross_table",
            Report::CrossTabulation(_) => "cross_tabulation",
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Render reports to a writer
    fn render(&self, reports: &[Report], writer: &mut dyn Write) -> Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter based on format type
    pub fn create(format: OutputFormat) -> Box<dyn OutputFormatter> {
        Self::with_color(format, false)
    }

    /// Create an output formatter; `color` enables ANSI headings in terminal output
    pub fn with_color(format: OutputFormat, color: bool) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Terminal => Box::new(TerminalOutput::new().with_color(color)),
            OutputFormat::Json => Box::new(JsonOutput::new()),
        }
    }
}

/// Render reports to stdout, coloring terminal output when stdout is a terminal
pub fn render_to_stdout(reports: &[Report], format: OutputFormat) -> Result<()> {
    use std::io::IsTerminal;

    let formatter = OutputFactory::with_color(format, std::io::stdout().is_terminal());
    let mut stdout = std::io::stdout();
    formatter.render(reports, &mut stdout)
}
