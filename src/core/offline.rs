//! Offline progression accounting.
//!
//! Income earned between a save and the next load is credited at the rate
//! that was saved, for the wall-clock time that passed. A clock that moved
//! backwards counts as no time at all.

use super::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use super::format::format_number;
use chrono::Utc;
use std::fmt;

/// Whole days/hours/minutes/seconds of an elapsed span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OfflineDuration {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl OfflineDuration {
    /// Splits `elapsed` seconds, discarding the fractional second.
    pub fn from_seconds(elapsed: f64) -> Self {
        let total = if elapsed.is_finite() && elapsed > 0.0 {
            elapsed.floor() as u64
        } else {
            0
        };
        Self {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }
}

impl fmt::Display for OfflineDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// How the saved tier levels were applied on load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LevelRestore {
    /// No save existed (or it was unreadable); the game started fresh.
    #[default]
    Fresh,
    Restored,
    /// The save was written for a catalog of a different size. Levels stay
    /// at zero and the income rate is zeroed.
    CountMismatch { saved: usize, expected: usize },
}

/// What happened while the game was closed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OfflineReport {
    pub elapsed_seconds: f64,
    pub duration: OfflineDuration,
    pub gain: f64,
    pub levels: LevelRestore,
}

impl OfflineReport {
    pub fn new(elapsed_seconds: f64, gain: f64, levels: LevelRestore) -> Self {
        Self {
            elapsed_seconds,
            duration: OfflineDuration::from_seconds(elapsed_seconds),
            gain,
            levels,
        }
    }

    /// `"+$36,610 from 0d 1h 1m 1s offline."`
    pub fn summary(&self) -> String {
        format!(
            "+${} from {} offline.",
            format_number(self.gain),
            self.duration
        )
    }
}

/// Wall-clock time as fractional seconds since the Unix epoch.
pub fn now_seconds() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}

/// Seconds between `save_time` and `now`, never negative.
pub fn offline_elapsed(save_time: f64, now: f64) -> f64 {
    let elapsed = now - save_time;
    if elapsed.is_nan() {
        return 0.0;
    }
    elapsed.max(0.0)
}

/// Income earned at `saved_rate` over `elapsed` seconds.
pub fn offline_gain(saved_rate: f64, elapsed: f64) -> f64 {
    saved_rate * elapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_breakdown() {
        let d = OfflineDuration::from_seconds(3661.0);
        assert_eq!(
            d,
            OfflineDuration {
                days: 0,
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
        assert_eq!(d.to_string(), "0d 1h 1m 1s");
    }

    #[test]
    fn test_duration_with_days_and_fraction() {
        let d = OfflineDuration::from_seconds(2.0 * 86400.0 + 5.0 * 3600.0 + 59.9);
        assert_eq!(d.days, 2);
        assert_eq!(d.hours, 5);
        assert_eq!(d.minutes, 0);
        assert_eq!(d.seconds, 59);
    }

    #[test]
    fn test_duration_of_negative_or_nan_is_zero() {
        assert_eq!(OfflineDuration::from_seconds(-10.0), OfflineDuration::default());
        assert_eq!(OfflineDuration::from_seconds(f64::NAN), OfflineDuration::default());
    }

    #[test]
    fn test_elapsed_clamps_backward_clock() {
        assert_eq!(offline_elapsed(1000.0, 900.0), 0.0);
        assert_eq!(offline_elapsed(1000.0, 1500.5), 500.5);
        assert_eq!(offline_elapsed(f64::NAN, 1.0), 0.0);
    }

    #[test]
    fn test_gain_is_saved_rate_times_elapsed() {
        assert_eq!(offline_gain(10.0, 3661.0), 36610.0);
        assert_eq!(offline_gain(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_now_is_after_2020() {
        assert!(now_seconds() > 1_577_836_800.0);
    }

    #[test]
    fn test_summary_text() {
        let report = OfflineReport::new(3661.0, 36610.0, LevelRestore::Restored);
        assert_eq!(report.summary(), "+$36,610 from 0d 1h 1m 1s offline.");
    }
}
