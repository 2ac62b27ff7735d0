use chrono::{DateTime, Local, NaiveDateTime};
use std::time::Duration;

/// Remaining time to the wedding, clamped at zero once the instant passes.
pub struct CountdownState {
    target: DateTime<Local>,
    remaining: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl CountdownState {
    pub(in crate::app) fn new(target: DateTime<Local>, now: DateTime<Local>) -> Self {
        let mut state = Self {
            target,
            remaining: Duration::ZERO,
        };
        state.resample(now);
        state
    }

    /// Parse the configured `YYYY-MM-DDTHH:MM:SS` local instant.
    pub(in crate::app) fn parse_target(value: &str) -> Option<DateTime<Local>> {
        let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").ok()?;
        naive.and_local_timezone(Local).earliest()
    }

    /// Re-sample wall-clock time; a past target saturates at zero. No drift
    /// correction, the display tolerates one second of jitter.
    pub(in crate::app) fn resample(&mut self, now: DateTime<Local>) {
        self.remaining = (self.target - now).to_std().unwrap_or(Duration::ZERO);
    }

    pub(in crate::app) fn is_finished(&self) -> bool {
        self.remaining.is_zero()
    }

    /// Floor decomposition into whole days, hours-within-day,
    /// minutes-within-hour and seconds-within-minute.
    pub(in crate::app) fn parts(&self) -> TimeParts {
        let total_secs = self.remaining.as_secs();
        TimeParts {
            days: total_secs / 86_400,
            hours: (total_secs % 86_400) / 3_600,
            minutes: (total_secs % 3_600) / 60,
            seconds: total_secs % 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(value: &str) -> DateTime<Local> {
        CountdownState::parse_target(value).expect("valid test instant")
    }

    #[test]
    fn one_day_before_the_wedding() {
        let state = CountdownState::new(
            instant("2025-10-16T10:00:00"),
            instant("2025-10-15T10:00:00"),
        );
        let parts = state.parts();
        assert_eq!(parts.days, 1);
        assert_eq!(parts.hours, 0);
        assert_eq!(parts.minutes, 0);
        assert_eq!(parts.seconds, 0);
        assert!(!state.is_finished());
    }

    #[test]
    fn past_target_settles_at_zero() {
        let mut state = CountdownState::new(
            instant("2025-10-16T10:00:00"),
            instant("2025-10-16T10:00:01"),
        );
        assert!(state.is_finished());
        assert_eq!(
            state.parts(),
            TimeParts {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 0
            }
        );

        // Stays zero on later samples.
        state.resample(instant("2025-12-01T00:00:00"));
        assert!(state.is_finished());
        assert_eq!(state.parts().seconds, 0);
    }

    #[test]
    fn decomposition_carries_each_unit() {
        let state = CountdownState::new(
            instant("2025-10-16T10:00:00"),
            instant("2025-10-14T07:58:57"),
        );
        let parts = state.parts();
        assert_eq!(parts.days, 2);
        assert_eq!(parts.hours, 2);
        assert_eq!(parts.minutes, 1);
        assert_eq!(parts.seconds, 3);
    }

    #[test]
    fn rejects_malformed_target() {
        assert!(CountdownState::parse_target("16/10/2025 10:00").is_none());
        assert!(CountdownState::parse_target("").is_none());
    }
}
