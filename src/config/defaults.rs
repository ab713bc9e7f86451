use super::schema::ScheduleConfig;

pub(super) fn default_exclusions() -> Vec<Vec<Vec<String>>> {
    vec![Vec::new(); 7]
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            exclusions: default_exclusions(),
        }
    }
}
