use serde::Deserialize;

use super::defaults::*;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

/// Bounds for the two 6-hour counters; command line flags override these per field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdConfig {
    #[serde(default)]
    pub lcca_warning: Option<i64>,
    #[serde(default)]
    pub lcca_critical: Option<i64>,
    #[serde(default)]
    pub signature_warning: Option<i64>,
    #[serde(default)]
    pub signature_critical: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleConfig {
    /// Monday first; each day holds up to two `["HH:MM:SS", "HH:MM:SS"]` UTC pairs.
    #[serde(default = "default_exclusions")]
    pub exclusions: Vec<Vec<Vec<String>>>,
}
