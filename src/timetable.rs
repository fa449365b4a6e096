//! # Timetable Output
//!
//! Turns a [`PrayerTable`] into the artifacts consumed outside this crate:
//!
//! - a JSON object of `"HH:MM"` strings keyed by prayer name, in table order, read by
//!   the display and by anything else that wants today's times
//! - a human-readable listing for the terminal and the journal
//! - block windows: one `[start, end)` interval per prayer during which the network
//!   blocker keeps the internet paused
//!
//! JSON keys are written in table order even though `serde_json` maps are unordered
//! by default; the writer streams the entries directly rather than collecting them.

use crate::config::BlockConfig;
use crate::error::Result;
use crate::{Prayer, PrayerTable};
use chrono::{Duration, NaiveDateTime};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

/// Time-of-day format used in the JSON timetable and by the scheduler.
pub const TIME_FORMAT: &str = "%H:%M";

/// Date and time format used when printing a table.
pub const PRINT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Serializes a table as `{ "fajr": "05:05", ... }` preserving entry order.
struct TimeOfDayMap<'a>(&'a PrayerTable);

impl Serialize for TimeOfDayMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (prayer, time) in self.0.iter() {
            map.serialize_entry(prayer.name(), &time.format(TIME_FORMAT).to_string())?;
        }
        map.end()
    }
}

/// Render the table as 4-space indented JSON.
pub fn to_json(table: &PrayerTable) -> Result<String> {
    let mut out = Vec::with_capacity(128);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    TimeOfDayMap(table).serialize(&mut serializer)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Write the JSON timetable to `path`, creating parent directories as needed.
pub fn write_prayer_times<P: AsRef<Path>>(table: &PrayerTable, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, to_json(table)?)?;
    Ok(())
}

/// One row per prayer: `"fajr    : 2019-01-27 05:05"`.
pub fn format_table(table: &PrayerTable) -> String {
    table
        .iter()
        .map(|(prayer, time)| format!("{:<8}: {}", prayer.name(), time.format(PRINT_FORMAT)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Interval during which the network stays blocked for one prayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockWindow {
    pub prayer: Prayer,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl BlockWindow {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Block windows starting at each prayer and lasting its configured minutes.
///
/// Prayers configured with zero minutes get no window.
pub fn block_windows(table: &PrayerTable, block: &BlockConfig) -> Vec<BlockWindow> {
    table
        .iter()
        .filter_map(|&(prayer, start)| {
            let minutes = block.minutes_for(prayer);
            (minutes > 0).then(|| BlockWindow {
                prayer,
                start,
                end: start + Duration::minutes(i64::from(minutes)),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn sample_table() -> PrayerTable {
        let day = NaiveDate::from_ymd_opt(2019, 1, 27).unwrap();
        let at = |h, m| day.and_hms_opt(h, m, 42).unwrap();
        PrayerTable::from_entries(vec![
            (Prayer::Fajr, at(5, 5)),
            (Prayer::Thuhr, at(11, 53)),
            (Prayer::Asr, at(14, 58)),
            (Prayer::Maghrib, at(17, 19)),
            (Prayer::Isha, at(18, 49)),
        ])
    }

    #[test]
    fn test_json_keeps_order_and_truncates_seconds() {
        let json = to_json(&sample_table()).unwrap();
        let expected = "{\n    \"fajr\": \"05:05\",\n    \"thuhr\": \"11:53\",\n    \"asr\": \"14:58\",\n    \"maghrib\": \"17:19\",\n    \"isha\": \"18:49\"\n}";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_json_order_for_cross_day_set() {
        let rotated = PrayerTable::from_entries(sample_table().into_iter().skip(3).collect());
        let json = to_json(&rotated).unwrap();
        let maghrib = json.find("maghrib").unwrap();
        let isha = json.find("isha").unwrap();
        assert!(maghrib < isha);
        assert!(!json.contains("fajr"));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output").join("prayers.json");
        write_prayer_times(&sample_table(), &path).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["asr"], "14:58");
        assert_eq!(parsed.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_format_table() {
        let text = format_table(&sample_table());
        let first = text.lines().next().unwrap();
        assert_eq!(first, "fajr    : 2019-01-27 05:05");
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_block_windows() {
        let block = BlockConfig {
            fajr: 20,
            thuhr: 15,
            asr: 0,
            maghrib: 15,
            isha: 10,
        };
        let windows = block_windows(&sample_table(), &block);
        assert_eq!(windows.len(), 4);
        assert!(windows.iter().all(|w| w.prayer != Prayer::Asr));
        assert_eq!(windows[0].duration(), Duration::minutes(20));
        assert_eq!(windows[0].start, sample_table().get(Prayer::Fajr).unwrap());
    }
}
