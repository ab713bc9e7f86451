use thiserror::Error;

use crate::monitor::{ExclusionSchedule, ScheduleError};

use super::schema::Config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid exclusion schedule: {0}")]
    Schedule(#[from] ScheduleError),
    #[error("invalid config: {0}")]
    Validation(String),
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.exclusion_schedule()?;
        Ok(())
    }

    pub fn exclusion_schedule(&self) -> Result<ExclusionSchedule, ConfigError> {
        Ok(ExclusionSchedule::from_entries(&self.schedule.exclusions)?)
    }
}
