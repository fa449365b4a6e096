//! # Prayer Clock Core Library
//!
//! This library computes the five daily Muslim prayer times from low-precision solar
//! ephemeris formulas and selects the next five upcoming prayers relative to "now".
//! It is designed to run on small boards like the Raspberry Pi Zero W, where the
//! binary recomputes the table whenever the previous batch of prayers has passed.
//!
//! ## Design Philosophy
//!
//! ### Pure Computation
//! - **No hidden clock**: every operation takes the date or the current instant as an
//!   explicit argument, so the same inputs always give the same table
//! - **No global state**: convention tables are closed enums, not runtime dictionaries
//! - **Fail loudly**: unknown conventions and latitudes where the sun never reaches the
//!   requested depression angle are errors, never silently clamped values
//!
//! ### Data Flow
//! 1. **Solar position**: date → Julian Day → declination + equation of time ([`solar`])
//! 2. **Angle equations**: hour angle for a depression angle or shadow ratio ([`equations`])
//! 3. **Daily table**: Dhuhr first, the rest relative to it ([`calculator`])
//! 4. **Upcoming**: today + tomorrow merged and trimmed to five ([`upcoming`])
//! 5. **Output**: `HH:MM` JSON timetable and block windows ([`timetable`])
//!
//! ## Core Types
//! - [`Prayer`]: one of the five daily prayers, ordered chronologically within a day
//! - [`PrayerTable`]: ordered `(Prayer, timestamp)` pairs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

// Module declarations
pub mod calculator;
pub mod config;
pub mod convention;
pub mod equations;
pub mod error;
pub mod solar;
pub mod timediff;
pub mod timetable;
pub mod upcoming;

pub use error::{PrayerError, Result};

/// One of the five daily prayers.
///
/// Variants are declared in the order they occur within a single day, so the
/// derived `Ord` matches chronological order.
///
/// # Example
/// ```
/// use prayer_clock_lib::Prayer;
///
/// assert_eq!(Prayer::Thuhr.name(), "thuhr");
/// assert!(Prayer::Fajr < Prayer::Isha);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prayer {
    /// Dawn, sun at the convention's angle below the horizon before sunrise
    Fajr,
    /// True solar noon (also spelled Dhuhr)
    Thuhr,
    /// Afternoon, shadow reaches the convention's multiple of object length
    Asr,
    /// Sunset
    Maghrib,
    /// Night, angle below horizon or fixed offset after Maghrib
    Isha,
}

impl Prayer {
    /// All prayers in chronological order within a day.
    pub const ALL: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Thuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// Key used in the JSON timetable and config files.
    pub fn name(self) -> &'static str {
        match self {
            Prayer::Fajr => "fajr",
            Prayer::Thuhr => "thuhr",
            Prayer::Asr => "asr",
            Prayer::Maghrib => "maghrib",
            Prayer::Isha => "isha",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered mapping from prayer to local timestamp.
///
/// A table produced for a single day holds the five prayers in chronological order.
/// A table produced by [`upcoming::next_five_prayers`] holds five consecutive prayers
/// that may straddle midnight, still in chronological order. Insertion order is part
/// of the contract: downstream consumers (scheduler, JSON writer) iterate it as-is.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use prayer_clock_lib::{Prayer, PrayerTable};
///
/// let noon = NaiveDate::from_ymd_opt(2019, 1, 27)
///     .unwrap()
///     .and_hms_opt(11, 53, 0)
///     .unwrap();
/// let table = PrayerTable::from_entries(vec![(Prayer::Thuhr, noon)]);
///
/// assert_eq!(table.get(Prayer::Thuhr), Some(noon));
/// assert_eq!(table.get(Prayer::Asr), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrayerTable {
    entries: Vec<(Prayer, NaiveDateTime)>,
}

impl PrayerTable {
    /// Build a table from entries, keeping their order.
    pub fn from_entries(entries: Vec<(Prayer, NaiveDateTime)>) -> Self {
        PrayerTable { entries }
    }

    /// Timestamp of the first entry for `prayer`, if present.
    pub fn get(&self, prayer: Prayer) -> Option<NaiveDateTime> {
        self.entries
            .iter()
            .find(|(p, _)| *p == prayer)
            .map(|(_, t)| *t)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(Prayer, NaiveDateTime)> {
        self.entries.iter()
    }

    /// Timestamps in insertion order.
    pub fn times(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        self.entries.iter().map(|(_, t)| *t)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when every timestamp is strictly later than the previous one.
    pub fn is_chronological(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].1 < w[1].1)
    }
}

impl IntoIterator for PrayerTable {
    type Item = (Prayer, NaiveDateTime);
    type IntoIter = std::vec::IntoIter<(Prayer, NaiveDateTime)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
