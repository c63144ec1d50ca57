//! JSON output format

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::analysis::{CrossTabCell, CrossTabResult, ItemCount, OneWayTable};
use crate::model::Value;

use super::{OutputFormatter, Report};

/// JSON output formatter
pub struct JsonOutput {
    pretty: bool,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable one-way table; map keys may be numbers, so items become records
#[derive(Serialize)]
struct JsonOneWay<'a> {
    column: &'a str,
    total: usize,
    items: Vec<ItemCount>,
}

#[derive(Serialize)]
struct JsonCrossRow<'a> {
    item: &'a Value,
    cells: &'a [CrossTabCell],
    total: f64,
}

#[derive(Serialize)]
struct JsonCrossTable<'a> {
    independent: &'a str,
    dependent: &'a str,
    chi2: f64,
    df: usize,
    q: Option<f64>,
    columns: &'a [String],
    rows: Vec<JsonCrossRow<'a>>,
    column_totals: &'a [f64],
    grand_total: f64,
    unmatched: usize,
}

#[derive(Serialize)]
struct JsonReport {
    report: &'static str,
    result: serde_json::Value,
}

fn one_way_to_json(table: &OneWayTable) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(JsonOneWay {
        column: &table.column,
        total: table.total(),
        items: table.to_item_counts(),
    })?)
}

fn cross_table_to_json(result: &CrossTabResult) -> Result<serde_json::Value> {
    let rows = result
        .rows
        .iter()
        .map(|(item, row)| JsonCrossRow {
            item,
            cells: &row.cells,
            total: row.total,
        })
        .collect();

    Ok(serde_json::to_value(JsonCrossTable {
        independent: &result.independent,
        dependent: &result.dependent,
        chi2: result.chi2,
        df: result.degrees_of_freedom,
        q: result.p_value,
        columns: &result.column_names,
        rows,
        column_totals: &result.column_totals,
        grand_total: result.grand_total,
        unmatched: result.unmatched,
    })?)
}

fn report_to_json(report: &Report) -> Result<serde_json::Value> {
    match report {
        Report::Summary(summaries) => Ok(serde_json::to_value(summaries)?),
        Report::OneWay(table) => one_way_to_json(table),
        Report::CrossTable(result) => cross_table_to_json(result),
        Report::CrossTabulation(result) => Ok(serde_json::to_value(result)?),
    }
}

impl OutputFormatter for JsonOutput {
    fn render(&self, reports: &[Report], writer: &mut dyn Write) -> Result<()> {
        let output = reports
            .iter()
            .map(|report| {
                Ok(JsonReport {
                    report: report.kind(),
                    result: report_to_json(report)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &output)?;
        } else {
            serde_json::to_writer(&mut *writer, &output)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Grouping;
    use crate::model::{ColumnType, Table};

    fn cars() -> Table {
        let rows: Vec<Vec<Value>> = vec![
            vec!["year".into(), "color".into()],
            vec![2009.into(), "Red".into()],
            vec![2009.into(), "Blue".into()],
            vec![2010.into(), "Black".into()],
        ];
        let mut table = Table::new();
        table
            .load(&rows, &[ColumnType::Numeric, ColumnType::Character])
            .unwrap();
        table
    }

    fn render(reports: &[Report]) -> serde_json::Value {
        let mut buffer = Vec::new();
        JsonOutput::compact().render(reports, &mut buffer).unwrap();
        serde_json::from_slice(&buffer).unwrap()
    }

    #[test]
    fn test_one_way_items_keep_order() {
        let json = render(&[Report::OneWay(cars().one_way("year", false))]);
        assert_eq!(json[0]["report"], "one_way");
        assert_eq!(json[0]["result"]["items"][0]["item"], 2009.0);
        assert_eq!(json[0]["result"]["items"][0]["count"], 2);
        assert_eq!(json[0]["result"]["items"][1]["item"], 2010.0);
    }

    #[test]
    fn test_cross_table_shape() {
        let grouping = Grouping::new(["Black Silver White Gray", "Blue Gold Green Red Yellow"])
            .with_names(["Simple", "Bold"]);
        let result = cars().cross_table("year", "color", Some(&grouping));
        let json = render(&[Report::CrossTable(result)]);

        let table = &json[0]["result"];
        assert_eq!(table["df"], 1);
        assert!(table["q"].is_null());
        assert_eq!(table["columns"][1], "Bold");
        assert_eq!(table["rows"][0]["cells"][1]["n"], 2.0);
        assert_eq!(table["rows"][0]["cells"][1]["r"], 1.0);
        assert_eq!(table["rows"][1]["total"], 1.0);
    }
}
