mod evaluator;
mod provider;
mod schedule;
mod snapshot;
mod status;
mod window;

pub use evaluator::{EvaluationResult, ThresholdSpec, Thresholds, evaluate_raw};
pub use provider::{
    MetricsProvider, QueryError, SnmpTarget, SnmpVersion, SnmpWalkProvider, UsmCredentials,
};
pub use schedule::{ExclusionSchedule, ScheduleError};
pub use snapshot::{LCCA_6_HOUR, MetricError, SIGNATURE_6_HOUR};
pub use status::Status;
pub use window::{Clock, SystemClock, WindowEvaluator};

#[cfg(test)]
pub(crate) use provider::MockMetricsProvider;
#[cfg(test)]
pub(crate) use snapshot::RawMetrics;
#[cfg(test)]
pub(crate) use schedule::entries as schedule_entries;
#[cfg(test)]
pub(crate) use snapshot::raw_metrics;
#[cfg(test)]
pub(crate) use window::FixedClock;
