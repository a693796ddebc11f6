// ── CSV export ──
//
// Serializes the in-memory reading list for download. Fields are numeric
// and the timestamp format contains no comma, so values are joined without
// quoting; revisit if string fields are ever added.

use std::fmt::Write as _;

use chrono::{Local, NaiveDate};

use crate::model::Reading;

pub const CSV_HEADER: &str = "Timestamp,Temperature,Humidity,Water Level";

/// Render the reading list as CSV, one row per reading in list order.
/// Timestamps are rendered in local time, human-readable.
pub fn to_csv(readings: &[Reading]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + readings.len() * 48);
    out.push_str(CSV_HEADER);

    for r in readings {
        let ts = r.timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S");
        let _ = write!(
            out,
            "\n{ts},{},{},{}",
            r.temperature, r.humidity, r.water_level
        );
    }

    out
}

/// Download filename carrying the selected range boundaries,
/// e.g. `water_data_2026-07-30_to_2026-08-06.csv`.
pub fn export_filename(start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "water_data_{}_to_{}.csv",
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d")
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use pretty_assertions::assert_eq;

    fn reading(temperature: f64, humidity: f64, water_level: f64) -> Reading {
        Reading {
            timestamp: "2026-08-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap(),
            water_level,
            temperature,
            humidity,
            wind_speed: None,
        }
    }

    #[test]
    fn two_rows_yield_header_plus_two_lines() {
        let csv = to_csv(&[reading(24.5, 58.0, 62.0), reading(24.0, 59.5, 61.0)]);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Timestamp,Temperature,Humidity,Water Level");
    }

    #[test]
    fn row_field_order_matches_the_header() {
        let csv = to_csv(&[reading(24.5, 58.0, 62.0)]);
        let row: Vec<&str> = csv.lines().nth(1).unwrap().split(',').collect();

        assert_eq!(row.len(), 4);
        // row[0] is the locale-rendered timestamp; the rest line up with
        // Temperature, Humidity, Water Level.
        assert_eq!(row[1], "24.5");
        assert_eq!(row[2], "58");
        assert_eq!(row[3], "62");
    }

    #[test]
    fn empty_list_is_header_only() {
        let csv = to_csv(&[]);
        assert_eq!(csv, CSV_HEADER);
    }

    #[test]
    fn filename_carries_the_range_boundaries() {
        let start = NaiveDate::from_ymd_opt(2026, 7, 30).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();

        assert_eq!(
            export_filename(start, end),
            "water_data_2026-07-30_to_2026-08-06.csv"
        );
    }
}
