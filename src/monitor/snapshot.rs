use std::collections::BTreeMap;

use thiserror::Error;

/// Raw values returned by the agent, keyed by the last OID component.
pub type RawMetrics = BTreeMap<u32, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Informational,
    AlarmBearing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDefinition {
    pub index: u32,
    pub label: &'static str,
    pub kind: MetricKind,
}

pub const LCCA_6_HOUR: u32 = 1;
pub const SIGNATURE_6_HOUR: u32 = 3;

/// The counters published under the Mirth subtree, in report order.
pub const METRICS: [MetricDefinition; 4] = [
    MetricDefinition {
        index: 0,
        label: "lcca-1-hour",
        kind: MetricKind::Informational,
    },
    MetricDefinition {
        index: LCCA_6_HOUR,
        label: "lcca-6-hour",
        kind: MetricKind::AlarmBearing,
    },
    MetricDefinition {
        index: 2,
        label: "signature-1-hour",
        kind: MetricKind::Informational,
    },
    MetricDefinition {
        index: SIGNATURE_6_HOUR,
        label: "signature-6-hour",
        kind: MetricKind::AlarmBearing,
    },
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetricError {
    #[error("missing metric {label} (index {index}) in agent response")]
    MissingMetric { index: u32, label: &'static str },
    #[error("metric {label} has non-numeric value '{value}'")]
    InvalidValue { label: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricReading {
    pub definition: MetricDefinition,
    pub raw: String,
    pub value: i64,
}

impl MetricReading {
    pub fn label(&self) -> &'static str {
        self.definition.label
    }
}

/// One run's worth of values; every entry of [`METRICS`] is present and numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    readings: Vec<MetricReading>,
}

impl MetricSnapshot {
    pub fn from_raw(raw: &RawMetrics) -> Result<Self, MetricError> {
        let mut readings = Vec::with_capacity(METRICS.len());

        for definition in METRICS {
            let Some(value) = raw.get(&definition.index) else {
                return Err(MetricError::MissingMetric {
                    index: definition.index,
                    label: definition.label,
                });
            };

            let trimmed = value.trim();
            let parsed = trimmed
                .parse::<i64>()
                .map_err(|_| MetricError::InvalidValue {
                    label: definition.label,
                    value: value.clone(),
                })?;

            readings.push(MetricReading {
                definition,
                raw: trimmed.to_string(),
                value: parsed,
            });
        }

        Ok(Self { readings })
    }

    pub fn readings(&self) -> &[MetricReading] {
        &self.readings
    }

    #[cfg(test)]
    pub fn get(&self, index: u32) -> Option<&MetricReading> {
        self.readings
            .iter()
            .find(|reading| reading.definition.index == index)
    }
}

#[cfg(test)]
pub(crate) fn raw_metrics(values: [&str; 4]) -> RawMetrics {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| (index as u32, value.to_string()))
        .collect()
}
