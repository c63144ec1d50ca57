//! tabstat - descriptive statistics and cross tables over a demo data set

mod sample;

use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use tabstat::analysis::Grouping;
use tabstat::config::{Config, OutputFormat, UnmatchedPolicy};
use tabstat::output::{render_to_stdout, Report};
use tabstat::Table;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Terminal,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Terminal => OutputFormat::Terminal,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportKind {
    Summary,
    OneWay,
    CrossTable,
    Tabulation,
    All,
}

/// Descriptive statistics, one-way tables and chi-square cross tables
#[derive(Parser, Debug)]
#[command(name = "tabstat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Report to produce
    #[arg(short, long, value_enum, default_value = "all")]
    report: ReportKind,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: CliOutputFormat,

    /// Column for the one-way table
    #[arg(short, long, default_value = "year")]
    column: String,

    /// Show one-way frequencies as percentages
    #[arg(long)]
    percent: bool,

    /// Independent column of the cross table
    #[arg(long, default_value = "model")]
    independent: String,

    /// Dependent column of the cross table
    #[arg(long, default_value = "color")]
    dependent: String,

    /// Cross every distinct dependent value instead of the Simple/Bold color groups
    #[arg(long)]
    ungrouped: bool,

    /// Return an empty cross table when a dependent value matches no group
    #[arg(long)]
    strict: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let unmatched = if cli.strict {
        UnmatchedPolicy::Reject
    } else {
        UnmatchedPolicy::Drop
    };
    let config = Config::new()
        .with_output_format(cli.format.into())
        .with_unmatched(unmatched);

    let mut cars = Table::with_config(config.clone());
    cars.load(&sample::used_cars(), &sample::USED_CAR_TYPES)
        .context("Failed to load used-car sample")?;

    let wants = |kind: ReportKind| cli.report == kind || cli.report == ReportKind::All;
    let mut reports = Vec::new();

    if wants(ReportKind::Summary) {
        reports.push(Report::Summary(cars.describe()));
    }

    if wants(ReportKind::OneWay) {
        if cars.column_index(&cli.column).is_none() {
            bail!("Unknown column: {}", cli.column);
        }
        reports.push(Report::OneWay(cars.one_way(&cli.column, cli.percent)));
    }

    if wants(ReportKind::CrossTable) {
        for name in [&cli.independent, &cli.dependent] {
            if cars.column_index(name).is_none() {
                bail!("Unknown column: {}", name);
            }
        }
        let grouping = (!cli.ungrouped)
            .then(|| Grouping::new(sample::COLOR_GROUPS).with_names(sample::COLOR_GROUP_NAMES));
        reports.push(Report::CrossTable(cars.cross_table(
            &cli.independent,
            &cli.dependent,
            grouping.as_ref(),
        )));
    }

    if wants(ReportKind::Tabulation) {
        let mut survey = Table::with_config(config.clone());
        survey
            .load(&sample::survey_counts(), &sample::SURVEY_TYPES)
            .context("Failed to load survey sample")?;
        reports.push(Report::CrossTabulation(survey.cross_tabulation()));
    }

    log::debug!("rendering {} reports", reports.len());
    render_to_stdout(&reports, config.output_format)
}
