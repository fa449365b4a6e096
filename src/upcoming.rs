//! # Next Five Prayers
//!
//! Picks the next five prayer instants after "now", taking the tail of today's table
//! and topping it up from the head of tomorrow's.
//!
//! A prayer counts as upcoming only when it is strictly later than `now`: a prayer
//! whose time equals `now` exactly is treated as already started and is replaced by
//! its counterpart tomorrow.
//!
//! The split is positional. Tomorrow's entries are taken from the front of its table,
//! so near midnight the set can repeat or skip a prayer by the few minutes the times
//! drift from one day to the next. No attempt is made to re-validate tomorrow's
//! entries against `now`.

use crate::calculator::{compute_all_prayer_times, Coordinates};
use crate::convention::{AsrConvention, FajrIshaConvention};
use crate::error::{PrayerError, Result};
use crate::{Prayer, PrayerTable};
use chrono::NaiveDateTime;
use log::info;

/// Number of prayers in an upcoming set (one full cycle).
pub const UPCOMING_COUNT: usize = Prayer::ALL.len();

/// Return the next five prayers after `now`, in chronological order.
///
/// `now` must be read once by the caller and passed in; it is interpreted as local
/// time in the same timezone as `timezone_hours`.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use prayer_clock_lib::calculator::Coordinates;
/// use prayer_clock_lib::convention::{AsrConvention, FajrIshaConvention};
/// use prayer_clock_lib::upcoming::next_five_prayers;
/// use prayer_clock_lib::Prayer;
///
/// let now = NaiveDate::from_ymd_opt(2019, 1, 27)
///     .unwrap()
///     .and_hms_opt(17, 16, 0)
///     .unwrap();
/// let next = next_five_prayers(
///     Coordinates::new(50.0, 26.6).unwrap(),
///     3.0,
///     FajrIshaConvention::UmmAlQura,
///     AsrConvention::Standard,
///     now,
/// )
/// .unwrap();
///
/// let order: Vec<_> = next.iter().map(|(p, _)| *p).collect();
/// assert_eq!(
///     order,
///     vec![Prayer::Maghrib, Prayer::Isha, Prayer::Fajr, Prayer::Thuhr, Prayer::Asr]
/// );
/// ```
pub fn next_five_prayers(
    coordinates: Coordinates,
    timezone_hours: f64,
    fajr_isha: FajrIshaConvention,
    asr: AsrConvention,
    now: NaiveDateTime,
) -> Result<PrayerTable> {
    let today = now.date();
    let tomorrow = today.succ_opt().ok_or(PrayerError::DateOutOfRange)?;

    let today_table = compute_all_prayer_times(today, coordinates, timezone_hours, fajr_isha, asr)?;
    let tomorrow_table =
        compute_all_prayer_times(tomorrow, coordinates, timezone_hours, fajr_isha, asr)?;

    let remaining_today = today_table.times().filter(|t| *t > now).count();
    let passed = UPCOMING_COUNT - remaining_today;

    let upcoming = PrayerTable::from_entries(
        today_table
            .into_iter()
            .skip(passed)
            .chain(tomorrow_table.into_iter().take(passed))
            .collect(),
    );

    info!(
        "next {} prayers after {now}: {remaining_today} today, {passed} tomorrow",
        upcoming.len()
    );

    Ok(upcoming)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn khobar() -> Coordinates {
        Coordinates::new(50.0, 26.6).unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 1, 27).unwrap()
    }

    fn next_at(now: NaiveDateTime) -> PrayerTable {
        next_five_prayers(
            khobar(),
            3.0,
            FajrIshaConvention::UmmAlQura,
            AsrConvention::Standard,
            now,
        )
        .unwrap()
    }

    fn today_table() -> PrayerTable {
        compute_all_prayer_times(
            day(),
            khobar(),
            3.0,
            FajrIshaConvention::UmmAlQura,
            AsrConvention::Standard,
        )
        .unwrap()
    }

    #[test]
    fn test_before_fajr_returns_today() {
        let now = day().and_hms_opt(0, 30, 0).unwrap();
        let next = next_at(now);
        assert_eq!(next, today_table());
    }

    #[test]
    fn test_at_isha_returns_tomorrow() {
        let isha = today_table().get(Prayer::Isha).unwrap();
        let next = next_at(isha);
        assert_eq!(next.len(), UPCOMING_COUNT);
        assert!(next.times().all(|t| t.date() == day().succ_opt().unwrap()));
        assert_eq!(next.iter().next().unwrap().0, Prayer::Fajr);
    }

    #[test]
    fn test_exact_prayer_time_counts_as_passed() {
        let thuhr = today_table().get(Prayer::Thuhr).unwrap();
        let next = next_at(thuhr);
        assert_eq!(next.iter().next().unwrap().0, Prayer::Asr);

        let just_before = next_at(thuhr - Duration::seconds(1));
        assert_eq!(just_before.iter().next().unwrap().0, Prayer::Thuhr);
    }

    #[test]
    fn test_afternoon_spans_two_days() {
        let now = day().and_hms_opt(15, 30, 0).unwrap();
        let next = next_at(now);

        let order: Vec<_> = next.iter().map(|(p, _)| *p).collect();
        assert_eq!(
            order,
            vec![
                Prayer::Maghrib,
                Prayer::Isha,
                Prayer::Fajr,
                Prayer::Thuhr,
                Prayer::Asr
            ]
        );
        assert!(next.is_chronological());
        assert!(next.times().all(|t| t > now));
    }

    #[test]
    fn test_every_minute_of_day_yields_five_future_prayers() {
        let midnight = day().and_hms_opt(0, 0, 0).unwrap();
        for minute in (0..24 * 60).step_by(7) {
            let now = midnight + Duration::minutes(minute);
            let next = next_at(now);
            assert_eq!(next.len(), UPCOMING_COUNT, "at {now}");
            assert!(next.is_chronological(), "at {now}");
            assert!(next.times().all(|t| t > now), "at {now}");
        }
    }
}
