use std::collections::BTreeMap;

use super::{
    snapshot::{MetricError, MetricKind, MetricSnapshot, RawMetrics},
    status::Status,
};

/// Lower-is-worse bounds for one alarm-bearing metric. An unset bound never fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThresholdSpec {
    pub warning: Option<i64>,
    pub critical: Option<i64>,
}

impl ThresholdSpec {
    pub fn new(warning: Option<i64>, critical: Option<i64>) -> Self {
        Self { warning, critical }
    }

    fn breaches_warning(&self, value: i64) -> bool {
        self.warning.is_some_and(|bound| value <= bound)
    }

    fn breaches_critical(&self, value: i64) -> bool {
        self.critical.is_some_and(|bound| value <= bound)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Thresholds {
    by_index: BTreeMap<u32, ThresholdSpec>,
}

impl Thresholds {
    pub fn set(&mut self, index: u32, spec: ThresholdSpec) {
        self.by_index.insert(index, spec);
    }

    pub fn with(mut self, index: u32, spec: ThresholdSpec) -> Self {
        self.set(index, spec);
        self
    }

    pub fn for_metric(&self, index: u32) -> ThresholdSpec {
        self.by_index.get(&index).copied().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDetail {
    pub label: &'static str,
    pub raw: String,
    pub value: i64,
    pub severity: Status,
    pub suppressed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub status: Status,
    pub details: Vec<MetricDetail>,
    pub warning_count: u32,
    pub critical_count: u32,
    pub suppressed: bool,
}

impl EvaluationResult {
    /// `(label, value)` pairs in report order.
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.details
            .iter()
            .map(|detail| (detail.label, detail.raw.as_str()))
    }
}

pub fn evaluate(
    snapshot: &MetricSnapshot,
    thresholds: &Thresholds,
    suppressed: bool,
) -> EvaluationResult {
    let mut warning_count = 0;
    let mut critical_count = 0;
    let mut details = Vec::with_capacity(snapshot.readings().len());

    for reading in snapshot.readings() {
        let alarm_bearing = reading.definition.kind == MetricKind::AlarmBearing;
        let mut severity = Status::Ok;

        if alarm_bearing && !suppressed {
            let spec = thresholds.for_metric(reading.definition.index);
            if spec.breaches_warning(reading.value) {
                warning_count += 1;
                severity = Status::Warning;
            }
            if spec.breaches_critical(reading.value) {
                critical_count += 1;
                severity = Status::Critical;
            }
        }

        details.push(MetricDetail {
            label: reading.label(),
            raw: reading.raw.clone(),
            value: reading.value,
            severity,
            suppressed: alarm_bearing && suppressed,
        });
    }

    let status = if critical_count > 0 {
        Status::Critical
    } else if warning_count > 0 {
        Status::Warning
    } else {
        Status::Ok
    };

    EvaluationResult {
        status,
        details,
        warning_count,
        critical_count,
        suppressed,
    }
}

pub fn evaluate_raw(
    raw: &RawMetrics,
    thresholds: &Thresholds,
    suppressed: bool,
) -> Result<EvaluationResult, MetricError> {
    let snapshot = MetricSnapshot::from_raw(raw)?;
    Ok(evaluate(&snapshot, thresholds, suppressed))
}
