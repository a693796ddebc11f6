// ── Wire → domain conversion ──
//
// Maps the loosely-typed `RawReading` wire records into domain `Reading`s.
// The one non-trivial rule lives here: records without a usable timestamp
// get one synthesized as `now - index * sample_gap`, so charts always have
// a monotonic x-axis. The gap differs by view (5s live, 1h historical).

use chrono::{DateTime, TimeDelta, Utc};

use aquaview_api::RawReading;

use crate::model::Reading;

/// Convert a fetched batch into domain readings, preserving upstream order.
///
/// Missing numeric fields become `0.0` (the station occasionally drops a
/// sensor from a record); a missing or unparseable `timestamp` is
/// synthesized from `now` and the record's position in the batch.
pub fn to_readings(raw: Vec<RawReading>, now: DateTime<Utc>, sample_gap: TimeDelta) -> Vec<Reading> {
    raw.into_iter()
        .enumerate()
        .map(|(index, r)| {
            let offset = i32::try_from(index).unwrap_or(i32::MAX);
            let timestamp = r
                .timestamp
                .as_deref()
                .and_then(parse_timestamp)
                .unwrap_or_else(|| now - sample_gap * offset);

            Reading {
                timestamp,
                water_level: r.water_level.unwrap_or(0.0),
                temperature: r.temperature.unwrap_or(0.0),
                humidity: r.humidity.unwrap_or(0.0),
                wind_speed: r.wind_speed,
            }
        })
        .collect()
}

/// Parse an RFC-3339 timestamp, normalizing to UTC.
///
/// Anything unparseable is treated the same as absent; the station has
/// emitted garbage timestamps after clock resets.
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}
