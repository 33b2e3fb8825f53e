use std::collections::BTreeMap;

use crate::checks::{FAIL_MARK, PASS_MARK};
use crate::color::{Palette, Style};
use crate::humanize::{fmt_plain, humanize_value};
use crate::options::{RenderOptions, TimeUnit};
use crate::summary::{Metric, MetricKind, Summary};
use crate::width::display_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Indicator {
    /// No thresholds attached to the metric.
    None,
    Pass,
    Fail,
}

#[derive(Debug)]
enum RowValues {
    /// Primary column plus labelled sub-value columns.
    Simple { primary: String, subs: Vec<String> },
    /// One cell per configured trend stat.
    Trend(Vec<String>),
}

#[derive(Debug)]
struct Row {
    /// Tagged sub-metrics sit two columns deeper than their base metric.
    tag_indent: &'static str,
    display_name: String,
    indicator: Indicator,
    values: RowValues,
}

/// Immutable output of the measurement pass: rows in final order plus the
/// per-column maximum widths. Trend metrics keep their own column widths,
/// independent from the counter/gauge/rate columns.
#[derive(Debug)]
struct Layout {
    rows: Vec<Row>,
    name_width: usize,
    primary_width: usize,
    sub_widths: Vec<usize>,
    trend_widths: Vec<usize>,
}

/// Lay out all metrics as an aligned table: a measurement pass builds the
/// width table, a render pass maps the sorted rows onto padded lines.
pub fn render_metrics(options: &RenderOptions, summary: &Summary, palette: Palette) -> Vec<String> {
    render_rows(options, &measure(options, &summary.metrics), palette)
}

fn measure(options: &RenderOptions, metrics: &BTreeMap<String, Metric>) -> Layout {
    let mut names: Vec<&str> = metrics.keys().map(String::as_str).collect();
    names.sort_by(|a, b| {
        let (a_base, a_tags) = split_name(a);
        let (b_base, b_tags) = split_name(b);
        a_base.cmp(b_base).then_with(|| a_tags.cmp(b_tags))
    });

    let mut layout = Layout {
        rows: Vec::with_capacity(names.len()),
        name_width: 0,
        primary_width: 0,
        sub_widths: Vec::new(),
        trend_widths: vec![0; options.summary_trend_stats.len()],
    };

    for name in names {
        let Some(metric) = metrics.get(name) else {
            continue;
        };

        let (tag_indent, display_name) = display_name(name);
        layout.name_width = layout
            .name_width
            .max(display_width(&display_name) + tag_indent.len());

        let values = if metric.kind == MetricKind::Trend {
            let cells = trend_cells(options, metric);
            for (i, cell) in cells.iter().enumerate() {
                layout.trend_widths[i] = layout.trend_widths[i].max(display_width(cell));
            }
            RowValues::Trend(cells)
        } else {
            let (primary, subs) = value_cells(metric, options.summary_time_unit);
            layout.primary_width = layout.primary_width.max(display_width(&primary));
            if layout.sub_widths.len() < subs.len() {
                layout.sub_widths.resize(subs.len(), 0);
            }
            for (i, sub) in subs.iter().enumerate() {
                layout.sub_widths[i] = layout.sub_widths[i].max(display_width(sub));
            }
            RowValues::Simple { primary, subs }
        };

        layout.rows.push(Row {
            tag_indent,
            display_name,
            indicator: indicator(metric),
            values,
        });
    }

    layout
}

fn render_rows(options: &RenderOptions, layout: &Layout, palette: Palette) -> Vec<String> {
    let table_indent = format!("{}  ", options.indent);

    layout
        .rows
        .iter()
        .map(|row| {
            let name_width = display_width(&row.display_name) + row.tag_indent.len();
            let dots = ".".repeat(layout.name_width - name_width + 3);
            let dotted = palette.paint(&format!("{dots}:"), &[Style::Faint]);

            let mark = match row.indicator {
                Indicator::None => " ".to_string(),
                Indicator::Pass => palette.paint(PASS_MARK, &[Style::Green]),
                Indicator::Fail => palette.paint(FAIL_MARK, &[Style::Red]),
            };

            let values = match &row.values {
                RowValues::Simple { primary, subs } => {
                    simple_columns(layout, primary, subs, palette)
                }
                RowValues::Trend(cells) => trend_columns(options, layout, cells, palette),
            };

            format!(
                "{table_indent}{}{mark} {}{dotted} {values}",
                row.tag_indent, row.display_name
            )
        })
        .collect()
}

fn simple_columns(layout: &Layout, primary: &str, subs: &[String], palette: Palette) -> String {
    let mut out = palette.paint(primary, &[Style::Cyan]);
    out.push_str(&" ".repeat(layout.primary_width - display_width(primary)));

    if subs.len() == 1 {
        out.push(' ');
        out.push_str(&palette.paint(&subs[0], &[Style::Cyan, Style::Faint]));
    } else if subs.len() > 1 {
        let padded: Vec<String> = subs
            .iter()
            .enumerate()
            .map(|(i, sub)| {
                let mut cell = palette.paint(sub, &[Style::Cyan, Style::Faint]);
                cell.push_str(&" ".repeat(layout.sub_widths[i] - display_width(sub)));
                cell
            })
            .collect();
        out.push(' ');
        out.push_str(&padded.join(" "));
    }

    out
}

fn trend_columns(
    options: &RenderOptions,
    layout: &Layout,
    cells: &[String],
    palette: Palette,
) -> String {
    cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            format!(
                "{}={}{}",
                options.summary_trend_stats[i],
                palette.paint(cell, &[Style::Cyan]),
                " ".repeat(layout.trend_widths[i] - display_width(cell))
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn trend_cells(options: &RenderOptions, metric: &Metric) -> Vec<String> {
    options
        .summary_trend_stats
        .iter()
        .map(|stat| {
            let value = metric.values.get(stat).copied().unwrap_or_default();
            if stat == "count" {
                fmt_plain(value)
            } else {
                humanize_value(value, metric, options.summary_time_unit)
            }
        })
        .collect()
}

fn value_cells(metric: &Metric, time_unit: Option<TimeUnit>) -> (String, Vec<String>) {
    let value = |key: &str| metric.values.get(key).copied().unwrap_or_default();
    let human = |key: &str| humanize_value(value(key), metric, time_unit);

    match metric.kind {
        MetricKind::Counter => (human("count"), vec![format!("{}/s", human("rate"))]),
        MetricKind::Gauge => (
            human("value"),
            vec![
                format!("min={}", human("min")),
                format!("max={}", human("max")),
            ],
        ),
        MetricKind::Rate => (
            human("rate"),
            vec![
                format!("{PASS_MARK} {}", fmt_plain(value("passes"))),
                format!("{FAIL_MARK} {}", fmt_plain(value("fails"))),
            ],
        ),
        MetricKind::Trend | MetricKind::Unknown => ("[no data]".to_string(), Vec::new()),
    }
}

fn indicator(metric: &Metric) -> Indicator {
    if !metric.has_thresholds() {
        Indicator::None
    } else if metric.thresholds_ok() {
        Indicator::Pass
    } else {
        Indicator::Fail
    }
}

// `name{tag=value}` splits into the base name and the tag suffix; the suffix
// participates in sorting after the base name.
fn split_name(name: &str) -> (&str, &str) {
    match name.find('{') {
        Some(pos) => name.split_at(pos),
        None => (name, ""),
    }
}

fn display_name(name: &str) -> (&'static str, String) {
    match name.find('{') {
        Some(pos) => {
            let inner = name.get(pos + 1..name.len().saturating_sub(1)).unwrap_or("");
            ("  ", format!("{{ {inner} }}"))
        }
        None => ("", name.to_string()),
    }
}
