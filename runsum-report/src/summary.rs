use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::options::OptionOverrides;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[derive(Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Counter,
    Gauge,
    Rate,
    Trend,
    // Unrecognized kinds still deserialize; they render as a placeholder row.
    Unknown,
}

impl<'de> Deserialize<'de> for MetricKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or(MetricKind::Unknown))
    }
}

/// Semantic unit of a metric's raw values, used to pick a humanization rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[derive(Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ValueClass {
    #[default]
    Default,
    /// Milliseconds.
    Time,
    /// Bytes.
    Data,
}

impl<'de> Deserialize<'de> for ValueClass {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_default())
    }
}

/// Result of one threshold expression, evaluated by the collector at run end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Threshold {
    pub ok: bool,
    #[serde(default)]
    pub values: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    #[serde(rename = "type")]
    pub kind: MetricKind,
    #[serde(default)]
    pub contains: ValueClass,
    /// Keys depend on `kind`: counter has count/rate, gauge has
    /// value/min/max, rate has rate/passes/fails, trend has the stat set.
    #[serde(default)]
    pub values: BTreeMap<String, f64>,
    #[serde(default)]
    pub thresholds: BTreeMap<String, Threshold>,
}

impl Metric {
    /// A metric without thresholds is neither passing nor failing.
    pub fn has_thresholds(&self) -> bool {
        !self.thresholds.is_empty()
    }

    pub fn thresholds_ok(&self) -> bool {
        self.thresholds.values().all(|t| t.ok)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Check {
    pub name: String,
    pub passes: u64,
    pub fails: u64,
}

impl Check {
    pub fn is_green(&self) -> bool {
        self.fails == 0
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Group {
    /// The root group has an empty name and is never printed as a node.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub checks: Vec<Check>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

/// The completed-run snapshot handed over by the collector. Read-only input:
/// both renderers are pure functions over it, so the same summary can be
/// rendered repeatedly (console and file) with byte-identical results.
///
/// The group tree is assumed acyclic and metric names unique; the collector
/// guarantees both and the engine does not re-validate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub options: OptionOverrides,
    #[serde(default)]
    pub root_group: Group,
    #[serde(default)]
    pub metrics: BTreeMap<String, Metric>,
}

#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("invalid summary document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read summary document: {0}")]
    Io(#[from] std::io::Error),
}

impl Summary {
    pub fn from_json_str(input: &str) -> Result<Self, SummaryError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, SummaryError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_kind_parses_from_json_names() {
        let m: Metric = serde_json::from_str(r#"{"type":"counter"}"#)
            .unwrap_or_else(|e| panic!("parse: {e}"));
        assert_eq!(m.kind, MetricKind::Counter);
        assert_eq!(m.contains, ValueClass::Default);
        assert!(m.values.is_empty());
        assert!(!m.has_thresholds());
    }

    #[test]
    fn unknown_metric_kind_does_not_fail_deserialization() {
        let m: Metric = serde_json::from_str(r#"{"type":"histogram","contains":"time"}"#)
            .unwrap_or_else(|e| panic!("parse: {e}"));
        assert_eq!(m.kind, MetricKind::Unknown);
        assert_eq!(m.contains, ValueClass::Time);
    }

    #[test]
    fn unrecognized_contains_falls_back_to_default() {
        let m: Metric = serde_json::from_str(r#"{"type":"counter","contains":"packets"}"#)
            .unwrap_or_else(|e| panic!("parse: {e}"));
        assert_eq!(m.contains, ValueClass::Default);
    }

    #[test]
    fn thresholds_ok_requires_every_expression_to_pass() {
        let json = r#"{
            "type": "trend",
            "contains": "time",
            "values": {"avg": 12.0},
            "thresholds": {
                "p(95)<200": {"ok": true},
                "rate<0.01": {"ok": false}
            }
        }"#;
        let m: Metric = serde_json::from_str(json).unwrap_or_else(|e| panic!("parse: {e}"));
        assert!(m.has_thresholds());
        assert!(!m.thresholds_ok());
    }

    #[test]
    fn summary_parses_with_defaults_for_missing_fields() {
        let s = Summary::from_json_str(r#"{"root_group":{"name":""}}"#)
            .unwrap_or_else(|e| panic!("parse: {e}"));
        assert!(s.metrics.is_empty());
        assert!(s.root_group.checks.is_empty());
    }

    #[test]
    fn check_green_iff_no_fails() {
        let ok = Check {
            name: "status is 200".to_string(),
            passes: 10,
            fails: 0,
        };
        let bad = Check {
            name: "body size".to_string(),
            passes: 0,
            fails: 1,
        };
        assert!(ok.is_green());
        assert!(!bad.is_green());
    }
}
