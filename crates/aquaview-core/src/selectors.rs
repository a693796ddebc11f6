// ── View-model selectors ──
//
// Pure functions deriving display values from a `DashboardState`. The
// screens call these every render; none of them allocate.

use crate::model::Reading;
use crate::state::DashboardState;

/// Reservoir fill tier, selecting the gauge color.
///
/// Thresholds are exactly 75 and 50, exclusive at the boundary: a level of
/// 75 is Medium, 50 is Low. High renders red and Low green — kept as the
/// station operators specified it, even though a full reservoir reading
/// red inverts the usual danger-low convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TankTier {
    High,
    Medium,
    Low,
}

impl TankTier {
    pub fn from_level(level: f64) -> Self {
        if level > 75.0 {
            Self::High
        } else if level > 50.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// The reading shown on the status cards: the newest sample, i.e. the
/// first element of the most-recent-first list.
pub fn current_reading(state: &DashboardState) -> Option<&Reading> {
    state.readings.first()
}

/// The bounded slice feeding the live charts: a prefix of at most
/// `max_points` readings, in source order — never resorted.
pub fn chart_series(state: &DashboardState, max_points: usize) -> &[Reading] {
    let len = state.readings.len().min(max_points);
    &state.readings[..len]
}

/// Gauge-ready fill level, clamped to [0,100]. The data layer stores
/// whatever the station sent; only the display clamps.
pub fn tank_level(reading: &Reading) -> f64 {
    reading.water_level.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, Utc};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn reading(water_level: f64) -> Reading {
        Reading {
            timestamp: Utc::now(),
            water_level,
            temperature: 20.0,
            humidity: 60.0,
            wind_speed: None,
        }
    }

    fn state_with(readings: Vec<Reading>) -> DashboardState {
        DashboardState::new(Local::now()).apply_readings(Arc::new(readings))
    }

    #[test]
    fn current_reading_is_the_first_element() {
        let state = state_with(vec![reading(10.0), reading(20.0)]);
        assert_eq!(current_reading(&state).map(|r| r.water_level), Some(10.0));

        let empty = state_with(Vec::new());
        assert!(current_reading(&empty).is_none());
    }

    #[test]
    fn chart_series_is_a_bounded_prefix_in_source_order() {
        let levels: Vec<f64> = (0..20).map(f64::from).collect();
        let state = state_with(levels.iter().map(|&l| reading(l)).collect());

        let series = chart_series(&state, 12);
        assert_eq!(series.len(), 12);
        for (i, r) in series.iter().enumerate() {
            assert_eq!(r.water_level, levels[i]);
        }

        // Shorter lists come back whole.
        let short = state_with(vec![reading(1.0), reading(2.0)]);
        assert_eq!(chart_series(&short, 12).len(), 2);
        assert_eq!(chart_series(&short, 0).len(), 0);
    }

    #[test]
    fn tank_level_clamps_out_of_range_input() {
        assert_eq!(tank_level(&reading(-5.0)), 0.0);
        assert_eq!(tank_level(&reading(0.0)), 0.0);
        assert_eq!(tank_level(&reading(62.5)), 62.5);
        assert_eq!(tank_level(&reading(100.0)), 100.0);
        assert_eq!(tank_level(&reading(150.0)), 100.0);
    }

    #[test]
    fn tier_boundaries_are_exact() {
        assert_eq!(TankTier::from_level(100.0), TankTier::High);
        assert_eq!(TankTier::from_level(75.1), TankTier::High);
        assert_eq!(TankTier::from_level(75.0), TankTier::Medium);
        assert_eq!(TankTier::from_level(50.1), TankTier::Medium);
        assert_eq!(TankTier::from_level(50.0), TankTier::Low);
        assert_eq!(TankTier::from_level(0.0), TankTier::Low);
    }
}
