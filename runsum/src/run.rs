use std::fs;
use std::io::Write as _;
use std::path::Path;

use anyhow::Context as _;

use runsum_report::{
    JUnitOptions, OptionOverrides, Summary, SummaryError, junit_report, text_summary,
};

use crate::cli::{JunitArgs, TextArgs};
use crate::exit_codes::ExitCode;
use crate::gates;
use crate::run_error::RunError;

pub(crate) fn text(args: TextArgs) -> Result<ExitCode, RunError> {
    let summary = load_summary(&args.summary)?;

    let overrides = OptionOverrides {
        indent: args.indent,
        enable_colors: args.no_color.then_some(false),
        summary_time_unit: args.time_unit,
        summary_trend_stats: args.trend_stats,
    };

    let mut rendered = text_summary(&summary, &overrides);
    rendered.push('\n');
    write_output(args.out.as_deref(), &rendered)?;

    Ok(quality_gates(&summary))
}

pub(crate) fn junit(args: JunitArgs) -> Result<ExitCode, RunError> {
    let summary = load_summary(&args.summary)?;

    let options = JUnitOptions {
        name: args.name,
        classname: args.classname,
    };

    write_output(args.out.as_deref(), &junit_report(&summary, &options))?;

    Ok(quality_gates(&summary))
}

fn quality_gates(summary: &Summary) -> ExitCode {
    ExitCode::from_quality_gates(
        gates::checks_failed(&summary.root_group),
        gates::thresholds_failed(summary),
    )
}

fn load_summary(path: &Path) -> Result<Summary, RunError> {
    let parsed = if path.as_os_str() == "-" {
        Summary::from_reader(std::io::stdin().lock())
    } else {
        let file = fs::File::open(path)
            .with_context(|| format!("open summary document {}", path.display()))
            .map_err(RunError::RuntimeError)?;
        Summary::from_reader(std::io::BufReader::new(file))
    };

    parsed.map_err(|err| match err {
        SummaryError::Parse(_) => RunError::InvalidInput(anyhow::Error::new(err)),
        SummaryError::Io(_) => RunError::RuntimeError(anyhow::Error::new(err)),
    })
}

fn write_output(out: Option<&Path>, content: &str) -> Result<(), RunError> {
    match out {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("write report to {}", path.display()))
            .map_err(RunError::RuntimeError),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .context("write report to stdout")
                .map_err(RunError::RuntimeError)
        }
    }
}
