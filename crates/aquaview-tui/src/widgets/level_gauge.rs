//! Horizontal level gauges for the reservoir and gate cards.

use ratatui::style::Style;
use ratatui::widgets::Gauge;

use aquaview_core::TankTier;

use crate::theme;

/// Gauge for the reservoir fill level. Expects an already-clamped
/// percentage (see `aquaview_core::selectors::tank_level`); the color
/// follows the fill tier.
pub fn tank(level: f64) -> Gauge<'static> {
    let tier = TankTier::from_level(level);
    Gauge::default()
        .gauge_style(Style::default().fg(theme::tier_color(tier)).bg(theme::BG_DARK))
        .ratio(level / 100.0)
        .label(format!("{level:.0}%"))
}

/// Plain single-color gauge, used for the gate open level.
pub fn plain(percent: f64, color: ratatui::style::Color) -> Gauge<'static> {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    Gauge::default()
        .gauge_style(Style::default().fg(color).bg(theme::BG_DARK))
        .ratio(ratio)
        .label(format!("{percent:.0}%"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Gauge ratios must stay in [0,1] or ratatui panics at render time.
    #[test]
    fn plain_clamps_ratio() {
        let _ = plain(150.0, theme::RIVER_BLUE);
        let _ = plain(-10.0, theme::RIVER_BLUE);
    }

    #[test]
    fn tank_accepts_boundary_levels() {
        let _ = tank(0.0);
        let _ = tank(100.0);
    }
}
