//! Rendering engine for completed load-test runs: a column-aligned,
//! optionally colorized terminal summary and a JUnit XML report derived from
//! threshold results. Pure functions over an immutable [`Summary`]; callers
//! own writing the returned strings wherever they need to go.

pub mod checks;
pub mod color;
pub mod humanize;
pub mod junit;
pub mod options;
pub mod summary;
pub mod table;
pub mod width;

pub use color::{Palette, Style};
pub use humanize::humanize_value;
pub use junit::{JUnitOptions, junit_report};
pub use options::{OptionOverrides, RenderOptions, TimeUnit};
pub use summary::{Check, Group, Metric, MetricKind, Summary, SummaryError, Threshold, ValueClass};
pub use width::display_width;

/// Render the checks tree followed by the metrics table as one text block.
/// Options merge in precedence order: defaults, options embedded in the
/// summary document, per-call overrides.
pub fn text_summary(summary: &Summary, overrides: &OptionOverrides) -> String {
    let options = RenderOptions::merged(&summary.options, overrides);
    let palette = Palette::for_colors(options.enable_colors);

    let group_indent = format!("{}    ", options.indent);
    let mut blocks = checks::render_group(&group_indent, &summary.root_group, palette);
    blocks.extend(table::render_metrics(&options, summary, palette));
    blocks.join("\n")
}
