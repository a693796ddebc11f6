//! Reservoir palette and semantic styling for the TUI.

use ratatui::style::{Color, Modifier, Style};

use aquaview_core::TankTier;

// ── Core Palette ──────────────────────────────────────────────────────

pub const RIVER_BLUE: Color = Color::Rgb(59, 130, 246); // #3b82f6
pub const AQUA_CYAN: Color = Color::Rgb(103, 232, 249); // #67e8f9
pub const SUNRISE_ORANGE: Color = Color::Rgb(249, 115, 22); // #f97316
pub const LEAF_GREEN: Color = Color::Rgb(34, 197, 94); // #22c55e
pub const WARN_YELLOW: Color = Color::Rgb(234, 179, 8); // #eab308
pub const ALERT_RED: Color = Color::Rgb(239, 68, 68); // #ef4444

// ── Extended Palette ──────────────────────────────────────────────────

pub const DIM_WHITE: Color = Color::Rgb(209, 213, 219); // #d1d5db
pub const BORDER_GRAY: Color = Color::Rgb(107, 114, 128); // #6b7280
pub const BG_HIGHLIGHT: Color = Color::Rgb(31, 41, 55); // #1f2937
pub const BG_DARK: Color = Color::Rgb(17, 24, 39); // #111827

// ── Chart series colors ───────────────────────────────────────────────

pub const TEMPERATURE_SERIES: Color = SUNRISE_ORANGE;
pub const HUMIDITY_SERIES: Color = RIVER_BLUE;
pub const WATER_LEVEL_SERIES: Color = LEAF_GREEN;

/// Gauge color for a tank fill tier. High fill renders red and low green —
/// the tier semantics come from the station operators and are preserved
/// as-is (see `aquaview_core::TankTier`).
pub fn tier_color(tier: TankTier) -> Color {
    match tier {
        TankTier::High => ALERT_RED,
        TankTier::Medium => WARN_YELLOW,
        TankTier::Low => LEAF_GREEN,
    }
}

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(AQUA_CYAN).add_modifier(Modifier::BOLD)
}

/// Border for the active screen's outer panel.
pub fn border_focused() -> Style {
    Style::default().fg(RIVER_BLUE)
}

/// Border for inner panels.
pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Table header row.
pub fn table_header() -> Style {
    Style::default()
        .fg(AQUA_CYAN)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Normal table row text.
pub fn table_row() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Zebra-striped alternate table row.
pub fn table_row_alt() -> Style {
    Style::default().fg(DIM_WHITE).bg(BG_HIGHLIGHT)
}

/// Active tab in the tab bar.
pub fn tab_active() -> Style {
    Style::default()
        .fg(RIVER_BLUE)
        .add_modifier(Modifier::BOLD)
}

/// Inactive tab in the tab bar.
pub fn tab_inactive() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Key hint text (e.g., "q quit  e export").
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default().fg(AQUA_CYAN).add_modifier(Modifier::BOLD)
}

/// Card label text (dim, above the value).
pub fn card_label() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Card value text (bold, primary).
pub fn card_value() -> Style {
    Style::default().fg(DIM_WHITE).add_modifier(Modifier::BOLD)
}
