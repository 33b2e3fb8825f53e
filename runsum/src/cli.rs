use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use runsum_report::TimeUnit;

fn parse_time_unit(input: &str) -> Result<TimeUnit, String> {
    input
        .trim()
        .parse::<TimeUnit>()
        .map_err(|_| format!("invalid time unit '{input}' (expected s, ms or us)"))
}

#[derive(Debug, Parser)]
#[command(
    name = "runsum",
    author,
    version,
    about = "Render end-of-run load-test summaries for terminals and CI",
    long_about = "runsum turns the summary-export JSON of a completed load-test run into a colorized terminal summary or a JUnit XML threshold report.\n\nThe exit code reflects the run's quality gates, so runsum can sit directly in a CI pipeline.",
    after_help = "Examples:\n  runsum text summary.json\n  runsum text summary.json --no-color --trend-stats avg,p(95),max\n  runsum junit summary.json --name nightly --out thresholds.xml\n  k6 run script.js --summary-export summary.json && runsum text summary.json"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the human-readable text summary
    Text(TextArgs),

    /// Render the JUnit XML threshold report
    Junit(JunitArgs),
}

#[derive(Debug, Args)]
pub struct TextArgs {
    /// Path to the summary-export JSON document (`-` reads stdin)
    pub summary: PathBuf,

    /// Indent prefix prepended at each nesting level
    #[arg(long)]
    pub indent: Option<String>,

    /// Disable ANSI colors/styles in the output
    #[arg(long)]
    pub no_color: bool,

    /// Fixed display unit for time values; adaptive when omitted
    #[arg(long, value_name = "s|ms|us", value_parser = parse_time_unit)]
    pub time_unit: Option<TimeUnit>,

    /// Stat columns for trend metrics, in order (comma separated).
    /// Overrides the list embedded in the summary document.
    #[arg(long, value_name = "STATS", value_delimiter = ',')]
    pub trend_stats: Option<Vec<String>>,

    /// Write the summary to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct JunitArgs {
    /// Path to the summary-export JSON document (`-` reads stdin)
    pub summary: PathBuf,

    /// Test suite display name
    #[arg(long)]
    pub name: Option<String>,

    /// Classname stamped on every testcase
    #[arg(long)]
    pub classname: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}
