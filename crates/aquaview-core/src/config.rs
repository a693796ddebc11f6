// ── Runtime station configuration ──
//
// Describes where the station endpoint lives and how the views pace
// themselves. Built by the binary from CLI flags and handed in; core
// never reads files or the environment.

use std::time::Duration;

use chrono::TimeDelta;
use url::Url;

/// Readings endpoint used when no `--url` is given.
pub const DEFAULT_ENDPOINT: &str = "https://d02ysh37xd.execute-api.us-east-1.amazonaws.com/items";

/// Configuration for one station connection and its view pacing.
#[derive(Debug, Clone)]
pub struct StationConfig {
    /// Full readings URL.
    pub endpoint: Url,
    /// HTTP request timeout.
    pub timeout: Duration,
    /// Live-view poll period.
    pub poll_interval: Duration,
    /// Clock tick period for the live header.
    pub clock_interval: Duration,
    /// Maximum points in the live charts.
    pub chart_points: usize,
    /// Assumed spacing between samples when the live view must synthesize
    /// missing timestamps.
    pub live_sample_gap: TimeDelta,
    /// Assumed spacing for the historical view's synthesized timestamps.
    pub history_sample_gap: TimeDelta,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.parse().expect("default endpoint URL is valid"),
            timeout: Duration::from_secs(30),
            poll_interval: Duration::from_secs(10),
            clock_interval: Duration::from_secs(1),
            chart_points: 12,
            live_sample_gap: TimeDelta::seconds(5),
            history_sample_gap: TimeDelta::hours(1),
        }
    }
}
