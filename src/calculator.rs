//! # Daily Prayer Table
//!
//! Computes the five prayer instants for one calendar date and one location.
//! Thuhr is computed first from longitude, timezone and the equation of time; every
//! other prayer is an offset from it:
//!
//! ```text
//! Thuhr   = 12 + Tz - (Lng/15 + EoT)
//! Fajr    = Thuhr - T(fajr angle)
//! Asr     = Thuhr + A(shadow multiplier)
//! Maghrib = Thuhr + T(0.833°)
//! Isha    = Thuhr + T(isha angle)   or   Maghrib + 90 min (Umm al-Qura)
//! ```
//!
//! Declination and equation of time are computed once per call and shared by all
//! five prayers.

use crate::convention::{AsrConvention, FajrIshaConvention, IshaRule};
use crate::equations::{horizon_time, hours_to_duration, shadow_time, MAGHRIB_ANGLE_DEG};
use crate::error::{PrayerError, Result};
use crate::solar::solar_position;
use crate::{Prayer, PrayerTable};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use log::debug;
use serde::{Deserialize, Serialize};

/// Geographic position in degrees, longitude east-positive, latitude north-positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    /// Build validated coordinates.
    ///
    /// Latitude must lie strictly between the poles: the hour-angle equations divide
    /// by `cos(latitude)`.
    pub fn new(longitude: f64, latitude: f64) -> Result<Self> {
        let coordinates = Coordinates {
            longitude,
            latitude,
        };
        coordinates.validate()?;
        Ok(coordinates)
    }

    pub fn validate(&self) -> Result<()> {
        if self.longitude.is_finite() && self.latitude.is_finite() && self.latitude.abs() < 90.0 {
            Ok(())
        } else {
            Err(PrayerError::InvalidCoordinates {
                longitude: self.longitude,
                latitude: self.latitude,
            })
        }
    }
}

/// Hours after local midnight at which the Sun crosses the meridian.
pub fn thuhr_offset_hours(longitude: f64, timezone_hours: f64, equation_of_time: f64) -> f64 {
    12.0 + timezone_hours - (longitude / 15.0 + equation_of_time)
}

/// Compute all five prayer times for `date` at `coordinates`.
///
/// `timezone_hours` is the local offset from UTC; the returned timestamps are naive
/// local times on (or, for extreme longitude/timezone mismatches, next to) `date`.
///
/// # Errors
/// - [`PrayerError::InvalidCoordinates`] / [`PrayerError::InvalidTimezone`] for
///   malformed input
/// - [`PrayerError::Domain`] when the Sun never reaches a required altitude on this
///   date at this latitude (high latitudes near the solstices)
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use prayer_clock_lib::calculator::{compute_all_prayer_times, Coordinates};
/// use prayer_clock_lib::convention::{AsrConvention, FajrIshaConvention};
/// use prayer_clock_lib::Prayer;
///
/// let khobar = Coordinates::new(50.0, 26.6).unwrap();
/// let date = NaiveDate::from_ymd_opt(2019, 1, 27).unwrap();
/// let table = compute_all_prayer_times(
///     date,
///     khobar,
///     3.0,
///     FajrIshaConvention::UmmAlQura,
///     AsrConvention::Standard,
/// )
/// .unwrap();
///
/// assert_eq!(table.len(), 5);
/// assert!(table.is_chronological());
/// assert_eq!(
///     table.get(Prayer::Isha).unwrap() - table.get(Prayer::Maghrib).unwrap(),
///     chrono::Duration::minutes(90)
/// );
/// ```
pub fn compute_all_prayer_times(
    date: NaiveDate,
    coordinates: Coordinates,
    timezone_hours: f64,
    fajr_isha: FajrIshaConvention,
    asr: AsrConvention,
) -> Result<PrayerTable> {
    coordinates.validate()?;
    if !timezone_hours.is_finite() {
        return Err(PrayerError::InvalidTimezone(timezone_hours));
    }

    let sun = solar_position(date);
    let latitude = coordinates.latitude;
    let declination = sun.declination_deg;

    let midnight = date.and_hms_opt(0, 0, 0).ok_or(PrayerError::DateOutOfRange)?;
    let thuhr = shift(
        midnight,
        hours_to_duration(thuhr_offset_hours(
            coordinates.longitude,
            timezone_hours,
            sun.equation_of_time_hours,
        )),
    )?;

    let fajr = shift(
        thuhr,
        -hours_to_duration(horizon_time(fajr_isha.fajr_angle(), latitude, declination)?),
    )?;
    let asr_time = shift(
        thuhr,
        hours_to_duration(shadow_time(asr.shadow_multiplier(), latitude, declination)?),
    )?;
    let maghrib = shift(
        thuhr,
        hours_to_duration(horizon_time(MAGHRIB_ANGLE_DEG, latitude, declination)?),
    )?;
    let isha = match fajr_isha.isha_rule() {
        IshaRule::FixedAngle(angle) => shift(
            thuhr,
            hours_to_duration(horizon_time(angle, latitude, declination)?),
        )?,
        IshaRule::FixedOffsetFromMaghrib(minutes) => shift(maghrib, Duration::minutes(minutes))?,
    };

    debug!(
        "prayer times {date} ({fajr_isha}/{asr}) at {:.4},{:.4}: fajr {fajr}, thuhr {thuhr}, asr {asr_time}, maghrib {maghrib}, isha {isha}",
        coordinates.longitude, coordinates.latitude
    );

    Ok(PrayerTable::from_entries(
        Prayer::ALL
            .into_iter()
            .zip([fajr, thuhr, asr_time, maghrib, isha])
            .collect(),
    ))
}

fn shift(base: NaiveDateTime, by: Duration) -> Result<NaiveDateTime> {
    base.checked_add_signed(by).ok_or(PrayerError::DateOutOfRange)
}
