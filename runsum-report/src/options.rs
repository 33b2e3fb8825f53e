use serde::{Deserialize, Deserializer, Serialize};

/// Fixed display unit for `time` metrics. The default (adaptive) mode is
/// represented as the absence of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[derive(Serialize, Deserialize)]
pub enum TimeUnit {
    #[strum(serialize = "s")]
    #[serde(rename = "s")]
    Seconds,
    #[strum(serialize = "ms")]
    #[serde(rename = "ms")]
    Milliseconds,
    #[strum(serialize = "us", serialize = "µs")]
    #[serde(rename = "us", alias = "µs")]
    Microseconds,
}

impl TimeUnit {
    /// Multiplier applied to a millisecond-denominated value.
    pub(crate) fn coefficient(self) -> f64 {
        match self {
            TimeUnit::Seconds => 0.001,
            TimeUnit::Milliseconds => 1.0,
            TimeUnit::Microseconds => 1000.0,
        }
    }

    pub(crate) fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "s",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Microseconds => "µs",
        }
    }
}

/// Fully merged render configuration. Built once per call via
/// [`RenderOptions::merged`] and passed around by reference, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Prefix prepended at each nesting level.
    pub indent: String,
    pub enable_colors: bool,
    /// `None` selects adaptive duration formatting.
    pub summary_time_unit: Option<TimeUnit>,
    /// Stat columns shown for trend metrics, in order. Empty means trend
    /// rows render without value columns.
    pub summary_trend_stats: Vec<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            indent: " ".to_string(),
            enable_colors: true,
            summary_time_unit: None,
            summary_trend_stats: Vec::new(),
        }
    }
}

impl RenderOptions {
    /// Three-way merge: defaults, then options embedded in the summary
    /// document, then per-call overrides.
    pub fn merged(summary: &OptionOverrides, call: &OptionOverrides) -> Self {
        let mut opts = RenderOptions::default();
        opts.apply(summary);
        opts.apply(call);
        opts
    }

    fn apply(&mut self, overrides: &OptionOverrides) {
        if let Some(indent) = &overrides.indent {
            self.indent = indent.clone();
        }
        if let Some(enable_colors) = overrides.enable_colors {
            self.enable_colors = enable_colors;
        }
        if let Some(unit) = overrides.summary_time_unit {
            self.summary_time_unit = Some(unit);
        }
        if let Some(stats) = &overrides.summary_trend_stats {
            self.summary_trend_stats = stats.clone();
        }
    }
}

/// Partial options, as embedded in a summary document or supplied per call.
/// Unset fields leave the lower-precedence value in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptionOverrides {
    pub indent: Option<String>,
    pub enable_colors: Option<bool>,
    #[serde(deserialize_with = "lenient_time_unit")]
    pub summary_time_unit: Option<TimeUnit>,
    pub summary_trend_stats: Option<Vec<String>>,
}

// Collectors emit `""` (and may emit arbitrary strings) for the unset time
// unit; anything unrecognized falls back to adaptive formatting.
fn lenient_time_unit<'de, D>(deserializer: D) -> Result<Option<TimeUnit>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse::<TimeUnit>().ok()))
}
