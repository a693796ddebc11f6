//! Human-readable sensor value formatting helpers.

use chrono::{DateTime, Local, Utc};

/// Format a temperature, e.g. "24.1 °C".
pub fn fmt_celsius(value: f64) -> String {
    format!("{value:.1} °C")
}

/// Format a percentage value, e.g. "58%".
pub fn fmt_percent(value: f64) -> String {
    format!("{value:.0}%")
}

/// Format a wind speed, e.g. "12.3 km/h". The station omits the field
/// when no anemometer is fitted.
pub fn fmt_wind(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1} km/h"),
        None => "─".into(),
    }
}

/// Format a flow rate, e.g. "3.5 L/s".
pub fn fmt_flow(value: f64) -> String {
    format!("{value:.1} L/s")
}

/// Short time-of-day label for chart axes, e.g. "14:03".
pub fn fmt_axis_time(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M").to_string()
}

/// Date label for the history chart axes, e.g. "08-01".
pub fn fmt_axis_date(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%m-%d").to_string()
}

/// Full timestamp for table rows, e.g. "2026-08-01 14:03:27".
pub fn fmt_table_timestamp(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unit_formats() {
        assert_eq!(fmt_celsius(24.06), "24.1 °C");
        assert_eq!(fmt_percent(57.5), "58%");
        assert_eq!(fmt_wind(Some(12.34)), "12.3 km/h");
        assert_eq!(fmt_wind(None), "─");
        assert_eq!(fmt_flow(3.5), "3.5 L/s");
    }
}
