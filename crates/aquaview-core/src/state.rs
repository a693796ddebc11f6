// ── Per-view dashboard state ──
//
// Each screen owns one `DashboardState`; nothing is shared across views.
// Mutation goes through explicit transition functions that consume the old
// state and return the new one, so the renderer always observes either the
// previous list or the full replacement, never a partial update.

use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::error::FetchError;
use crate::model::Reading;

/// Display state for one view, alive only while the view is.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Most-recent-first reading list, replaced wholesale on each
    /// successful poll.
    pub readings: Arc<Vec<Reading>>,
    /// True until the first poll resolves (success or failure).
    pub is_loading: bool,
    /// The most recent poll failure, cleared by the next success.
    pub last_error: Option<FetchError>,
    /// Current wall-clock time, monotonically non-decreasing.
    pub now: DateTime<Local>,
}

impl DashboardState {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            readings: Arc::new(Vec::new()),
            is_loading: true,
            last_error: None,
            now,
        }
    }

    /// A successful poll: replace the list wholesale and clear any error.
    pub fn apply_readings(self, readings: Arc<Vec<Reading>>) -> Self {
        Self {
            readings,
            is_loading: false,
            last_error: None,
            ..self
        }
    }

    /// A failed poll: record the error, keep the previous readings.
    pub fn apply_error(self, error: FetchError) -> Self {
        Self {
            is_loading: false,
            last_error: Some(error),
            ..self
        }
    }

    /// A clock tick. `now` never moves backwards, even if the wall clock
    /// does (NTP step, DST fold).
    pub fn apply_tick(self, now: DateTime<Local>) -> Self {
        Self {
            now: self.now.max(now),
            ..self
        }
    }

    /// Whether any data has ever been displayed in this view.
    pub fn has_data(&self) -> bool {
        !self.readings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use pretty_assertions::assert_eq;

    fn reading(temperature: f64) -> Reading {
        Reading {
            timestamp: chrono::Utc::now(),
            water_level: 40.0,
            temperature,
            humidity: 50.0,
            wind_speed: None,
        }
    }

    #[test]
    fn apply_readings_replaces_wholesale_and_clears_error() {
        let state = DashboardState::new(Local::now())
            .apply_readings(Arc::new(vec![reading(1.0), reading(2.0)]))
            .apply_error(FetchError::Http { status: 500 });

        assert_eq!(state.readings.len(), 2);
        assert!(state.last_error.is_some());

        let state = state.apply_readings(Arc::new(vec![reading(3.0)]));

        assert_eq!(state.readings.len(), 1);
        assert_eq!(state.readings[0].temperature, 3.0);
        assert_eq!(state.last_error, None);
    }

    #[test]
    fn apply_error_keeps_previous_readings() {
        let state = DashboardState::new(Local::now())
            .apply_readings(Arc::new(vec![reading(21.5)]))
            .apply_error(FetchError::Network {
                reason: "connection refused".into(),
            });

        assert!(state.has_data());
        assert_eq!(state.readings[0].temperature, 21.5);
        assert!(!state.is_loading);
    }

    #[test]
    fn loading_until_first_resolution() {
        let state = DashboardState::new(Local::now());
        assert!(state.is_loading);

        let failed = state.clone().apply_error(FetchError::Http { status: 500 });
        assert!(!failed.is_loading);
        assert!(!failed.has_data());

        let loaded = state.apply_readings(Arc::new(vec![reading(1.0)]));
        assert!(!loaded.is_loading);
        assert!(loaded.has_data());
    }

    #[test]
    fn now_is_monotonic() {
        let start = Local::now();
        let state = DashboardState::new(start);

        let earlier = start - TimeDelta::seconds(30);
        let state = state.apply_tick(earlier);
        assert_eq!(state.now, start);

        let later = start + TimeDelta::seconds(30);
        let state = state.apply_tick(later);
        assert_eq!(state.now, later);
    }
}
