//! Absolute time differences between two instants.

use chrono::NaiveDateTime;

/// Shortest blink period of the status LED, in hours.
pub const MIN_BLINK_PERIOD_HOURS: f64 = 0.5;

/// Non-negative difference decomposed into whole hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeDifference {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeDifference {
    /// Difference expressed in fractional minutes.
    pub fn total_minutes(&self) -> f64 {
        (60 * self.hours + self.minutes) as f64 + self.seconds as f64 / 60.0
    }
}

/// `|t1 - t2|` as hours, minutes, seconds. Sub-second remainders are dropped.
pub fn absolute_difference(t1: NaiveDateTime, t2: NaiveDateTime) -> TimeDifference {
    let total_seconds = (t1 - t2).num_seconds().abs();
    TimeDifference {
        hours: total_seconds / 3600,
        minutes: total_seconds % 3600 / 60,
        seconds: total_seconds % 60,
    }
}

/// Hours until `next`, floored at [`MIN_BLINK_PERIOD_HOURS`].
///
/// Paces the status LED: one slow breath per hour remaining, never faster than
/// one every half hour.
pub fn blink_period_hours(now: NaiveDateTime, next: NaiveDateTime) -> f64 {
    let hours = (next - now).num_seconds() as f64 / 3600.0;
    hours.max(MIN_BLINK_PERIOD_HOURS)
}
