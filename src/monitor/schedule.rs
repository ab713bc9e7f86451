use chrono::{NaiveTime, Weekday};
use thiserror::Error;

const DAYS_PER_WEEK: usize = 7;
const MAX_WINDOWS_PER_DAY: usize = 2;
const TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("exclusion schedule must list 7 days, found {found}")]
    DayCount { found: usize },
    #[error("{day} lists {found} exclusion windows, at most 2 are allowed")]
    TooManyWindows { day: &'static str, found: usize },
    #[error("{day} window #{position} must be a [start, end] pair, found {found} element(s)")]
    PairShape {
        day: &'static str,
        position: usize,
        found: usize,
    },
    #[error("{day} window #{position} has invalid time '{value}' (expected HH:MM:SS)")]
    InvalidTime {
        day: &'static str,
        position: usize,
        value: String,
    },
    #[error("{day} window #{position} ends at {end} before it starts at {start}")]
    EndBeforeStart {
        day: &'static str,
        position: usize,
        start: NaiveTime,
        end: NaiveTime,
    },
}

/// Inclusive same-day UTC interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExclusionWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl ExclusionWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }
}

/// Weekly suppression calendar indexed Monday = 0 through Sunday = 6.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSchedule {
    days: [Vec<ExclusionWindow>; DAYS_PER_WEEK],
}

impl ExclusionSchedule {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a schedule from the configuration shape: 7 days of `[start, end]`
    /// string pairs.
    pub fn from_entries(entries: &[Vec<Vec<String>>]) -> Result<Self, ScheduleError> {
        if entries.len() != DAYS_PER_WEEK {
            return Err(ScheduleError::DayCount {
                found: entries.len(),
            });
        }

        let mut schedule = Self::empty();
        for (offset, day_entry) in entries.iter().enumerate() {
            let day = day_name(offset);
            let windows = day_entry.as_slice();
            if windows.len() > MAX_WINDOWS_PER_DAY {
                return Err(ScheduleError::TooManyWindows {
                    day,
                    found: windows.len(),
                });
            }

            for (position, pair) in windows.iter().enumerate() {
                let window = parse_window(day, position + 1, pair)?;
                schedule.days[offset].push(window);
            }
        }

        Ok(schedule)
    }

    pub fn windows_for(&self, weekday: Weekday) -> &[ExclusionWindow] {
        &self.days[weekday.num_days_from_monday() as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }

    pub fn window_count(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }
}

fn parse_window(
    day: &'static str,
    position: usize,
    pair: &[String],
) -> Result<ExclusionWindow, ScheduleError> {
    let [start, end] = pair else {
        return Err(ScheduleError::PairShape {
            day,
            position,
            found: pair.len(),
        });
    };

    let start = parse_time(day, position, start)?;
    let end = parse_time(day, position, end)?;

    ExclusionWindow::new(start, end).ok_or(ScheduleError::EndBeforeStart {
        day,
        position,
        start,
        end,
    })
}

fn parse_time(day: &'static str, position: usize, raw: &str) -> Result<NaiveTime, ScheduleError> {
    NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT).map_err(|_| ScheduleError::InvalidTime {
        day,
        position,
        value: raw.to_string(),
    })
}

fn day_name(offset: usize) -> &'static str {
    match offset {
        0 => "Monday",
        1 => "Tuesday",
        2 => "Wednesday",
        3 => "Thursday",
        4 => "Friday",
        5 => "Saturday",
        _ => "Sunday",
    }
}

#[cfg(test)]
pub(crate) fn entries(days: [&[(&str, &str)]; 7]) -> Vec<Vec<Vec<String>>> {
    days.iter()
        .map(|windows| {
            windows
                .iter()
                .map(|(start, end)| vec![start.to_string(), end.to_string()])
                .collect()
        })
        .collect()
}
