//! Errors that can occur while computing or writing prayer times.

use std::io;
use thiserror::Error;

/// Result type alias for operations in this crate.
pub type Result<T> = std::result::Result<T, PrayerError>;

/// Errors that can occur during prayer time computation.
///
/// All computation errors are deterministic functions of the input: the only
/// recovery is for the caller to supply different input.
#[derive(Error, Debug)]
pub enum PrayerError {
    /// Unrecognised convention key in config or on the command line
    #[error("unknown {kind} convention '{key}'")]
    InvalidConvention {
        /// Which table was consulted ("fajr/isha" or "asr")
        kind: &'static str,
        /// The offending key
        key: String,
    },

    /// The sun never reaches the requested altitude on this date at this latitude
    #[error(
        "{equation} equation undefined at latitude {latitude}° with declination {declination:.4}° \
         (arccos argument {argument:.6})"
    )]
    Domain {
        /// Which equation failed ("horizon" or "shadow")
        equation: &'static str,
        latitude: f64,
        declination: f64,
        /// The argument handed to arccos, outside [-1, 1]
        argument: f64,
    },

    /// Non-finite coordinates, or a latitude at or beyond a pole
    #[error("invalid coordinates: longitude {longitude}°, latitude {latitude}°")]
    InvalidCoordinates { longitude: f64, latitude: f64 },

    /// Non-finite timezone offset
    #[error("invalid timezone offset {0} h")]
    InvalidTimezone(f64),

    /// Calendar arithmetic left chrono's supported range
    #[error("date out of range")]
    DateOutOfRange,

    /// Timetable file could not be written
    #[error("timetable IO: {0}")]
    Io(#[from] io::Error),

    /// Timetable could not be serialized
    #[error("timetable JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_convention_names_key() {
        let err = PrayerError::InvalidConvention {
            kind: "asr",
            key: "shafii".to_string(),
        };
        assert_eq!(err.to_string(), "unknown asr convention 'shafii'");
    }

    #[test]
    fn test_domain_error_message() {
        let err = PrayerError::Domain {
            equation: "horizon",
            latitude: 65.0,
            declination: 23.4,
            argument: -1.2,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("horizon equation undefined at latitude 65°"));
        assert!(msg.contains("-1.200000"));
    }
}
