// ── Domain reading model ──

use chrono::{DateTime, Utc};

/// One sensor sample from the station.
///
/// The reading list is kept MOST-RECENT-FIRST everywhere in this codebase:
/// index 0 is the newest sample. The upstream API has been observed
/// returning both orders; `convert::to_readings` preserves upstream order
/// and the client is expected to deliver newest-first. Views that want a
/// chronological axis reverse at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    /// Sample time. Parsed from the wire timestamp, or synthesized when
    /// the station omitted one (see `convert`).
    pub timestamp: DateTime<Utc>,

    /// Reservoir fill percentage. Expected range 0-100 but NOT validated
    /// or clamped here; the gauge clamps at display time.
    pub water_level: f64,

    /// Degrees Celsius, no declared bounds.
    pub temperature: f64,

    /// Relative humidity percentage, no declared bounds.
    pub humidity: f64,

    /// Wind speed in km/h, when the station reports one.
    pub wind_speed: Option<f64>,
}
