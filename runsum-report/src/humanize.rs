use crate::options::TimeUnit;
use crate::summary::{Metric, MetricKind, ValueClass};

/// Render a raw metric value for display, picking the rule from the metric's
/// kind and value class. `time` values are millisecond-denominated.
pub fn humanize_value(value: f64, metric: &Metric, time_unit: Option<TimeUnit>) -> String {
    if metric.kind == MetricKind::Rate {
        // Truncated, not rounded: 0.12345 is 12.34%, never 12.35%.
        return format!("{:.2}%", (value * 10_000.0).trunc() / 100.0);
    }

    match metric.contains {
        ValueClass::Data => humanize_bytes(value),
        ValueClass::Time => humanize_duration(value, time_unit),
        ValueClass::Default => to_fixed_trimmed(value, 6),
    }
}

const BYTE_UNITS: [&str; 9] = ["B", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Decimal (base-1000) byte units. One decimal below 10, none above; a
/// scaled value that rounds up to 1000 rolls over into the next unit.
pub fn humanize_bytes(value: f64) -> String {
    if value < 10.0 {
        return format!("{} B", fmt_plain(value));
    }

    let mut exponent =
        ((value.ln() / 1000_f64.ln()).floor() as usize).min(BYTE_UNITS.len() - 1);
    let mut scaled = round_tenth(value / 1000_f64.powi(exponent as i32));
    // A value that would render as "1000" belongs to the next unit up.
    if scaled >= 999.5 && exponent + 1 < BYTE_UNITS.len() {
        exponent += 1;
        scaled = round_tenth(value / 1000_f64.powi(exponent as i32));
    }

    if scaled < 10.0 {
        format!("{scaled:.1} {}", BYTE_UNITS[exponent])
    } else {
        format!("{scaled:.0} {}", BYTE_UNITS[exponent])
    }
}

/// Adaptive duration formatting over a millisecond input, or a fixed unit
/// when one was configured. Seconds carry two decimals unless an hour or
/// minute component is present.
pub fn humanize_duration(ms: f64, unit: Option<TimeUnit>) -> String {
    if let Some(unit) = unit {
        return format!("{:.2}{}", ms * unit.coefficient(), unit.suffix());
    }

    if ms == 0.0 {
        return "0s".to_string();
    }
    if ms < 0.001 {
        return format!("{}ns", (ms * 1e6).trunc() as i64);
    }
    if ms < 1.0 {
        return format!("{}µs", trunc_fixed_trimmed(ms * 1000.0, 2));
    }
    if ms < 1000.0 {
        return format!("{}ms", trunc_fixed_trimmed(ms, 2));
    }

    let total_minutes = (ms / 60_000.0).trunc() as u64;
    let rem_seconds = (ms % 60_000.0) / 1000.0;
    if total_minutes == 0 {
        return format!("{:.2}s", trunc_to(rem_seconds, 2));
    }

    let mut out = format!("{}m{}s", total_minutes % 60, rem_seconds.trunc() as u64);
    let hours = total_minutes / 60;
    if hours >= 1 {
        out = format!("{hours}h{out}");
    }
    out
}

/// Shortest decimal form of a number, like the collector itself prints it.
pub(crate) fn fmt_plain(value: f64) -> String {
    format!("{value}")
}

/// Fixed-decimal formatting with insignificant trailing zeros trimmed by
/// round-tripping through a float parse.
pub(crate) fn to_fixed_trimmed(value: f64, decimals: usize) -> String {
    let fixed = format!("{value:.decimals$}");
    match fixed.parse::<f64>() {
        Ok(v) => fmt_plain(v),
        Err(_) => fixed,
    }
}

fn trunc_fixed_trimmed(value: f64, decimals: usize) -> String {
    to_fixed_trimmed(trunc_to(value, decimals), decimals)
}

fn trunc_to(value: f64, decimals: usize) -> f64 {
    let scale = 10_f64.powi(decimals as i32);
    (value * scale).trunc() / scale
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}
