use chrono::{DateTime, Datelike, Utc};

use super::schedule::{ExclusionSchedule, ExclusionWindow};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Decides whether an instant falls inside one of the day's exclusion windows.
pub struct WindowEvaluator<'a, C: Clock> {
    schedule: &'a ExclusionSchedule,
    clock: C,
}

impl<'a, C: Clock> WindowEvaluator<'a, C> {
    pub fn new(schedule: &'a ExclusionSchedule, clock: C) -> Self {
        Self { schedule, clock }
    }

    pub fn is_suppressed_now(&self) -> bool {
        self.is_suppressed(self.clock.now())
    }

    pub fn is_suppressed(&self, now: DateTime<Utc>) -> bool {
        let Some(window) = self.matching_window(now) else {
            return false;
        };

        log::debug!(
            "exclusion_window_matched start={} end={} now={}",
            window.start,
            window.end,
            now.to_rfc3339()
        );
        true
    }

    /// First window of `now`'s UTC weekday containing `now`, in configured order.
    pub fn matching_window(&self, now: DateTime<Utc>) -> Option<ExclusionWindow> {
        let today = now.date_naive();

        self.schedule
            .windows_for(now.weekday())
            .iter()
            .copied()
            .find(|window| {
                let start = today.and_time(window.start).and_utc();
                let end = today.and_time(window.end).and_utc();
                start <= now && now <= end
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, NaiveDate, Utc};

    use super::{Clock, FixedClock, WindowEvaluator};
    use crate::monitor::schedule::{ExclusionSchedule, entries};

    // 2026-10-17 is a Saturday.
    fn saturday_at(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(2026, 10, 17)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .expect("valid test timestamp")
            .and_utc()
    }

    fn saturday_night_schedule() -> ExclusionSchedule {
        ExclusionSchedule::from_entries(&entries([
            &[],
            &[],
            &[],
            &[],
            &[],
            &[("22:00:00", "23:59:59")],
            &[("00:00:00", "01:00:00")],
        ]))
        .expect("schedule should load")
    }

    #[test]
    fn suppresses_inside_window() {
        let schedule = saturday_night_schedule();
        let evaluator = WindowEvaluator::new(&schedule, FixedClock(saturday_at(23, 0, 0)));
        assert!(evaluator.is_suppressed_now());
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let schedule = saturday_night_schedule();
        let evaluator = WindowEvaluator::new(&schedule, FixedClock(saturday_at(0, 0, 0)));

        assert!(evaluator.is_suppressed(saturday_at(22, 0, 0)));
        assert!(evaluator.is_suppressed(saturday_at(23, 59, 59)));
        assert!(!evaluator.is_suppressed(saturday_at(21, 59, 59)));
    }

    #[test]
    fn other_weekdays_are_not_suppressed() {
        let schedule = saturday_night_schedule();
        let evaluator = WindowEvaluator::new(&schedule, FixedClock(saturday_at(0, 0, 0)));
        let friday_late = saturday_at(23, 0, 0) - Duration::days(1);

        assert!(!evaluator.is_suppressed(friday_late));
    }

    #[test]
    fn windows_do_not_wrap_past_midnight() {
        let schedule = saturday_night_schedule();
        let clock = FixedClock(saturday_at(0, 30, 0));
        let evaluator = WindowEvaluator::new(&schedule, clock);

        // Sunday's 00:00-01:00 window covers Sunday only.
        assert!(!evaluator.is_suppressed(clock.now()));
        assert!(evaluator.is_suppressed(clock.now() + Duration::days(1)));
    }

    #[test]
    fn empty_schedule_never_suppresses() {
        let schedule = ExclusionSchedule::empty();
        let evaluator = WindowEvaluator::new(&schedule, FixedClock(saturday_at(23, 0, 0)));
        assert!(!evaluator.is_suppressed_now());
        assert!(evaluator.matching_window(saturday_at(12, 0, 0)).is_none());
    }

    #[test]
    fn reports_first_matching_window() {
        let schedule = ExclusionSchedule::from_entries(&entries([
            &[],
            &[],
            &[],
            &[],
            &[],
            &[("20:00:00", "23:30:00"), ("22:00:00", "23:59:59")],
            &[],
        ]))
        .expect("schedule should load");
        let evaluator = WindowEvaluator::new(&schedule, FixedClock(saturday_at(22, 30, 0)));

        let window = evaluator
            .matching_window(saturday_at(22, 30, 0))
            .expect("window should match");
        assert_eq!(window.start.to_string(), "20:00:00");
    }
}
