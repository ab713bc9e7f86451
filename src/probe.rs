use thiserror::Error;
use tokio::time::{timeout, Duration};

use crate::config::ConfigError;
use crate::monitor::{
    Clock, EvaluationResult, ExclusionSchedule, MetricError, MetricsProvider, QueryError, Status,
    Thresholds, WindowEvaluator, evaluate_raw,
};
use crate::system::CommandError;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Metric(#[from] MetricError),
    #[error("query failed: {0}")]
    Query(QueryError),
    #[error("check_mirth timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },
}

impl ProbeError {
    /// A timeout is actionable, anything else leaves the state indeterminate.
    pub fn status(&self) -> Status {
        match self {
            ProbeError::Timeout { .. } => Status::Critical,
            ProbeError::Config(_) | ProbeError::Metric(_) | ProbeError::Query(_) => {
                Status::Unknown
            }
        }
    }
}

/// A child process hitting its own deadline is the same event as the watchdog firing.
impl From<QueryError> for ProbeError {
    fn from(error: QueryError) -> Self {
        match error {
            QueryError::Command(CommandError::Timeout { timeout_secs, .. }) => {
                ProbeError::Timeout { timeout_secs }
            }
            other => ProbeError::Query(other),
        }
    }
}

/// Everything resolved before the agent is queried.
#[derive(Debug, Clone)]
pub struct ProbeSettings {
    pub thresholds: Thresholds,
    pub schedule: ExclusionSchedule,
}

pub async fn run_probe<P, C>(
    settings: &ProbeSettings,
    provider: &mut P,
    clock: C,
) -> Result<EvaluationResult, ProbeError>
where
    P: MetricsProvider,
    C: Clock,
{
    let raw = provider.collect_metrics().await?;

    let suppressed = WindowEvaluator::new(&settings.schedule, clock).is_suppressed_now();
    if suppressed {
        log::info!("alarms_suppressed reason=exclusion_window");
    }

    let result = evaluate_raw(&raw, &settings.thresholds, suppressed)?;

    for detail in &result.details {
        log::debug!(
            "metric_evaluated label={} value={} severity={} suppressed={}",
            detail.label,
            detail.value,
            detail.severity,
            detail.suppressed
        );
    }

    tracing::info!(
        target: "probe",
        status = result.status.as_str(),
        warning_count = result.warning_count,
        critical_count = result.critical_count,
        suppressed = result.suppressed,
        "probe_evaluated"
    );

    Ok(result)
}

/// Bounds the whole check, configuration included, by `timeout_secs`.
pub async fn with_watchdog<F>(timeout_secs: u64, check: F) -> Result<EvaluationResult, ProbeError>
where
    F: Future<Output = Result<EvaluationResult, ProbeError>>,
{
    match timeout(Duration::from_secs(timeout_secs), check).await {
        Ok(result) => result,
        Err(_) => {
            log::error!("check_timed_out timeout_secs={}", timeout_secs);
            Err(ProbeError::Timeout { timeout_secs })
        }
    }
}
