//! # Hour-Angle Equations
//!
//! Both prayer equations answer the same question: how long after (or before) solar
//! noon does the Sun reach a given altitude? They differ only in how that altitude
//! is chosen.
//!
//! - **Horizon equation** `T(angle)`: the Sun is `angle` degrees *below* the horizon.
//!   Used for Fajr (before noon), Maghrib and angle-based Isha (after noon).
//! - **Shadow equation** `A(n)`: an object's shadow is `n` times its length plus its
//!   noon shadow. Used for Asr, always after noon.
//!
//! Both solve `cos(H) = (sin(alt) - sin(lat)·sin(dec)) / (cos(lat)·cos(dec))` for the
//! hour angle `H` and return `H / 15` hours. When the right-hand side falls outside
//! [-1, 1] the Sun never reaches that altitude on that day (polar day or night for
//! the angle) and the equation returns [`PrayerError::Domain`].

use crate::error::{PrayerError, Result};
use chrono::Duration;

/// Depression angle of the Sun's upper limb at sunset, accounting for refraction
/// and the solar disk radius.
pub const MAGHRIB_ANGLE_DEG: f64 = 0.833;

/// Hours from solar noon until the Sun is `angle_deg` below the horizon.
pub fn horizon_time(angle_deg: f64, latitude_deg: f64, declination_deg: f64) -> Result<f64> {
    let sin_altitude = -angle_deg.to_radians().sin();
    hour_angle_hours("horizon", sin_altitude, latitude_deg, declination_deg)
}

/// Hours from solar noon until an object's shadow reaches `multiplier` times its
/// length beyond the noon shadow.
pub fn shadow_time(multiplier: f64, latitude_deg: f64, declination_deg: f64) -> Result<f64> {
    let zenith_at_noon = (latitude_deg.to_radians() - declination_deg.to_radians()).abs();
    // arccot(x) = atan(1/x); x >= multiplier > 0 so the branch is unambiguous
    let altitude = (1.0 / (multiplier + zenith_at_noon.tan())).atan();
    hour_angle_hours("shadow", altitude.sin(), latitude_deg, declination_deg)
}

fn hour_angle_hours(
    equation: &'static str,
    sin_altitude: f64,
    latitude_deg: f64,
    declination_deg: f64,
) -> Result<f64> {
    let lat = latitude_deg.to_radians();
    let dec = declination_deg.to_radians();

    let argument = (sin_altitude - lat.sin() * dec.sin()) / (lat.cos() * dec.cos());
    if !(-1.0..=1.0).contains(&argument) {
        return Err(PrayerError::Domain {
            equation,
            latitude: latitude_deg,
            declination: declination_deg,
            argument,
        });
    }

    Ok(argument.acos().to_degrees() / 15.0)
}

/// Convert fractional hours to a duration, rounded to the nearest microsecond.
pub fn hours_to_duration(hours: f64) -> Duration {
    Duration::microseconds((hours * 3_600_000_000.0).round() as i64)
}
