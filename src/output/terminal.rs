//! Box-drawn terminal output

use std::io::Write;

use anyhow::Result;
use termcolor::{Ansi, Color, ColorSpec, WriteColor};

use crate::analysis::{CrossTabResult, CrossTabulation, OneWayTable};
use crate::stats::ColumnSummary;

use super::{OutputFormatter, Report};

/// Terminal output, optionally with ANSI-colored headings
pub struct TerminalOutput {
    color: bool,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self { color: false }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn write_heading(&self, writer: &mut dyn Write, title: &str) -> Result<()> {
        let mut out = Ansi::new(writer);
        if self.color {
            out.set_color(ColorSpec::new().set_bold(true).set_fg(Some(Color::Cyan)))?;
        }
        writeln!(out, "━━ {} ━━", title)?;
        if self.color {
            out.reset()?;
        }
        Ok(())
    }

    fn write_summary(&self, summaries: &[ColumnSummary], writer: &mut dyn Write) -> Result<()> {
        self.write_heading(writer, "Summary")?;
        if summaries.is_empty() {
            writeln!(writer, "No numeric columns.")?;
            return Ok(());
        }

        let mut data = vec![["column", "n", "mean", "std", "min", "Q1", "median", "Q3", "max"]
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>()];

        for summary in summaries {
            let mut row = vec![
                summary.column.clone(),
                summary.count.to_string(),
                format_number(summary.mean),
                format_number(summary.std),
            ];
            row.extend(summary.five_numbers.iter().map(|&x| format_number(x)));
            data.push(row);
        }

        write!(writer, "{}", build_table(&data))?;
        Ok(())
    }

    fn write_one_way(&self, table: &OneWayTable, writer: &mut dyn Write) -> Result<()> {
        self.write_heading(writer, &format!("One-way table: {}", table.column))?;
        if table.is_empty() {
            writeln!(writer, "No data.")?;
            return Ok(());
        }

        let mut data = vec![vec![table.column.clone(), "count".to_string()]];
        for record in table.to_item_counts() {
            data.push(vec![record.item.to_string(), record.count.to_string()]);
        }

        write!(writer, "{}", build_table(&data))?;
        writeln!(writer, "{} observations", table.total())?;
        Ok(())
    }

    fn write_cross_table(&self, result: &CrossTabResult, writer: &mut dyn Write) -> Result<()> {
        self.write_heading(
            writer,
            &format!("Cross table: {} x {}", result.independent, result.dependent),
        )?;
        if result.is_empty() {
            writeln!(writer, "No data.")?;
            return Ok(());
        }

        let mut header = vec![result.independent.clone()];
        header.extend(result.column_names.iter().cloned());
        header.push("total".to_string());
        let mut data = vec![header];

        for (item, row) in &result.rows {
            let mut line = vec![item.to_string()];
            line.extend(
                row.cells
                    .iter()
                    .map(|cell| format!("{} ({:.1}%)", format_number(cell.n), cell.r * 100.0)),
            );
            line.push(format_number(row.total));
            data.push(line);
        }

        let mut totals = vec!["total".to_string()];
        totals.extend(result.column_totals.iter().map(|&t| format_number(t)));
        totals.push(format_number(result.grand_total));
        data.push(totals);

        write!(writer, "{}", build_table(&data))?;
        writeln!(
            writer,
            "chi2 = {:.4}, df = {}",
            result.chi2, result.degrees_of_freedom
        )?;
        if result.unmatched > 0 {
            writeln!(writer, "{} observations outside every group", result.unmatched)?;
        }
        Ok(())
    }

    fn write_cross_tabulation(&self, result: &CrossTabulation, writer: &mut dyn Write) -> Result<()> {
        self.write_heading(writer, "Cross-tabulation")?;
        if result.is_empty() {
            writeln!(writer, "No data.")?;
            return Ok(());
        }

        let mut header = vec![String::new()];
        header.extend(result.column_names.iter().cloned());
        header.push("total".to_string());
        let mut data = vec![header];

        for (i, label) in result.row_labels.iter().enumerate() {
            let mut line = vec![label.to_string()];
            line.extend(result.columns.iter().map(|column| format_number(column[i].n)));
            line.push(format_number(result.row_totals[i]));
            data.push(line);
        }

        let mut totals = vec!["total".to_string()];
        totals.extend(result.column_totals.iter().map(|&t| format_number(t)));
        totals.push(format_number(result.grand_total));
        data.push(totals);

        write!(writer, "{}", build_table(&data))?;
        writeln!(
            writer,
            "chi2 = {:.4}, df = {}",
            result.chi2, result.degrees_of_freedom
        )?;
        Ok(())
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TerminalOutput {
    fn render(&self, reports: &[Report], writer: &mut dyn Write) -> Result<()> {
        for (i, report) in reports.iter().enumerate() {
            if i > 0 {
                writeln!(writer)?;
            }
            match report {
                Report::Summary(summaries) => self.write_summary(summaries, writer)?,
                Report::OneWay(table) => self.write_one_way(table, writer)?,
                Report::CrossTable(result) => self.write_cross_table(result, writer)?,
                Report::CrossTabulation(result) => self.write_cross_tabulation(result, writer)?,
            }
        }
        Ok(())
    }
}

/// Integers print without decimals, everything else with two
fn format_number(x: f64) -> String {
    if x.fract() == 0.0 && x.abs() < 1e15 {
        format!("{}", x as i64)
    } else {
        format!("{:.2}", x)
    }
}

/// Build a formatted table from data; the first row is the header
fn build_table(data: &[Vec<String>]) -> String {
    if data.is_empty() || data[0].is_empty() {
        return String::new();
    }

    let col_count = data[0].len();

    let mut col_widths: Vec<usize> = vec![0; col_count];
    for row in data {
        for (i, cell) in row.iter().enumerate() {
            if i < col_widths.len() {
                col_widths[i] = col_widths[i].max(cell.chars().count());
            }
        }
    }

    let rule = |left: char, mid: char, right: char| {
        let mut line = String::new();
        line.push(left);
        for (i, width) in col_widths.iter().enumerate() {
            line.push_str(&"─".repeat(*width + 2));
            if i < col_widths.len() - 1 {
                line.push(mid);
            }
        }
        line.push(right);
        line.push('\n');
        line
    };

    let row_line = |row: &[String]| {
        let mut line = String::from("│");
        for (i, cell) in row.iter().enumerate() {
            let width = col_widths.get(i).copied().unwrap_or(0);
            line.push_str(&format!(" {:width$} │", cell, width = width));
        }
        line.push('\n');
        line
    };

    let mut output = rule('┌', '┬', '┐');
    output.push_str(&row_line(data[0].as_slice()));
    output.push_str(&rule('├', '┼', '┤'));
    for row in data.iter().skip(1) {
        output.push_str(&row_line(row.as_slice()));
    }
    output.push_str(&rule('└', '┴', '┘'));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ColumnType, Table, Value};

    fn render(reports: &[Report]) -> String {
        let mut buffer = Vec::new();
        TerminalOutput::new().render(reports, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_build_table_aligns_columns() {
        let data = vec![
            vec!["a".to_string(), "bb".to_string()],
            vec!["ccc".to_string(), "d".to_string()],
        ];
        let table = build_table(&data);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "│ a   │ bb │");
        assert_eq!(lines[3], "│ ccc │ d  │");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2009.0), "2009");
        assert_eq!(format_number(0.126), "0.13");
    }

    #[test]
    fn test_render_one_way() {
        let mut table = Table::new();
        let rows: Vec<Vec<Value>> = vec![vec!["year".into()], vec![2009.into()], vec![2009.into()]];
        table.load(&rows, &[ColumnType::Numeric]).unwrap();

        let output = render(&[Report::OneWay(table.one_way("year", false))]);
        assert!(output.contains("One-way table: year"));
        assert!(output.contains("│ 2009 │ 2     │"));
        assert!(output.contains("2 observations"));
    }

    #[test]
    fn test_render_empty_cross_table() {
        let output = render(&[Report::CrossTable(Default::default())]);
        assert!(output.contains("No data."));
    }
}
