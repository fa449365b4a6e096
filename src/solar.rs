//! Low-precision solar position (declination and equation of time)
//!
//! Approximation published by the U.S. Naval Observatory for computing the Sun's
//! angular coordinates to about 1 arcminute within two centuries of 2000.
//! Good enough for prayer timing, where published tables round to the minute.

use chrono::{Datelike, NaiveDate};
use log::debug;

/// Julian Day of 2000-01-01 12:00 TT (J2000.0).
pub const J2000: f64 = 2_451_545.0;

/// Julian Day at 0001-01-01 00:00 (proleptic Gregorian) minus one day, so that
/// adding `num_days_from_ce` lands on midnight of the given date.
const CE_EPOCH_JD: f64 = 1_721_424.5;

/// Sun parameters needed by the prayer equations for one calendar date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Angle between the Sun's rays and the equatorial plane (deg).
    pub declination_deg: f64,
    /// Apparent minus mean solar time (hours), wrapped into (-12, 12].
    pub equation_of_time_hours: f64,
}

/// Julian Day at midnight starting `date`.
///
/// The result always ends in `.5` since Julian Days begin at noon.
pub fn julian_day(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce()) + CE_EPOCH_JD
}

/// Compute declination and equation of time for `date` (taken at midnight).
pub fn solar_position(date: NaiveDate) -> SolarPosition {
    // ---------- 1. Days since J2000.0 ----------------------------------------
    let d = julian_day(date) - J2000;

    // ---------- 2. Mean anomaly g and mean longitude q (deg, reduced) -------
    let g = ((357.529 + 0.985_600_28 * d).rem_euclid(360.0)).to_radians();
    let q = ((280.459 + 0.985_647_36 * d).rem_euclid(360.0)).to_radians();

    // ---------- 3. Apparent ecliptic longitude and obliquity ----------------
    let l = (q.to_degrees() + 1.915 * g.sin() + 0.020 * (2.0 * g).sin()).to_radians();
    let e = ((23.439 - 0.000_000_36 * d).rem_euclid(360.0)).to_radians();

    // ---------- 4. Right ascension (hours) and declination (deg) ------------
    let ra_hours = (e.cos() * l.sin()).atan2(l.cos()).to_degrees() / 15.0;
    let declination_deg = (e.sin() * l.sin()).asin().to_degrees();

    // q and RA wrap at different moments near the March equinox; keep the
    // difference on the short side of the clock.
    let mut equation_of_time_hours = q.to_degrees() / 15.0 - ra_hours.rem_euclid(24.0);
    if equation_of_time_hours > 12.0 {
        equation_of_time_hours -= 24.0;
    } else if equation_of_time_hours <= -12.0 {
        equation_of_time_hours += 24.0;
    }

    debug!(
        "solar position {date}: d={d}, declination={declination_deg:.6}°, eot={equation_of_time_hours:.6}h"
    );

    SolarPosition {
        declination_deg,
        equation_of_time_hours,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_julian_day_regression() {
        assert_eq!(julian_day(date(2019, 2, 3)), 2_458_517.5);
        assert_eq!(julian_day(date(2000, 1, 1)), 2_451_544.5);
    }

    #[test]
    fn test_solar_position_regression() {
        let sun = solar_position(date(2019, 1, 1));
        assert!(
            (sun.declination_deg - -23.039_931_841_242_07).abs() < 1e-10,
            "declination {}",
            sun.declination_deg
        );
        assert!(
            (sun.equation_of_time_hours - -0.053_431_595_269_049_836).abs() < 1e-10,
            "equation of time {}",
            sun.equation_of_time_hours
        );
    }

    #[test]
    fn test_equation_of_time_stays_small_all_year() {
        // Real equation of time never exceeds ~17 minutes in magnitude
        let mut day = date(2019, 1, 1);
        while day.year() == 2019 {
            let eot = solar_position(day).equation_of_time_hours;
            assert!(eot.abs() < 0.3, "{day}: equation of time {eot}h");
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_declination_tracks_seasons() {
        let june = solar_position(date(2019, 6, 21)).declination_deg;
        let december = solar_position(date(2019, 12, 21)).declination_deg;
        let march = solar_position(date(2019, 3, 20)).declination_deg;
        assert!((23.0..23.5).contains(&june), "june {june}");
        assert!((-23.5..-23.0).contains(&december), "december {december}");
        assert!(march.abs() < 0.5, "march {march}");
    }

    #[test]
    fn test_dates_before_j2000() {
        let sun = solar_position(date(1980, 7, 1));
        assert!(sun.declination_deg.is_finite());
        assert!(sun.equation_of_time_hours.abs() < 0.3);
    }
}
