//! Live dashboard screen — the home screen.
//!
//! Layout:
//! ┌─ greeting / date / time ───────────────────────────────────────┐
//! ┌─ Reservoir Water Level ────────┐ ┌─ Gate Status ──────────────┐
//! │ tier-colored gauge             │ │ OPEN · open level gauge    │
//! └────────────────────────────────┘ └────────────────────────────┘
//! ┌ Temperature ┐┌ Humidity ┐┌ Water Flow Rate ┐┌ Wind Speed ┐
//! ┌─ Temperature History ──────────┐ ┌─ Humidity History ─────────┐
//! │ 12-point line chart            │ │ 12-point line chart        │
//! └────────────────────────────────┘ └────────────────────────────┘
//!
//! Polls the station every `poll_interval`; a failed poll is logged and
//! the previous values stay up. Until the first poll resolves with data,
//! the screen shows a loading panel.

use std::sync::Arc;
use std::time::Instant;

use chrono::{Local, Utc};
use color_eyre::eyre::Result;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

use aquaview_api::StationClient;
use aquaview_core::{DashboardState, StationConfig, TickerHandle, clock, convert, selectors, ticker};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::series_chart::{self, Series};
use crate::widgets::{level_gauge, value_fmt};

// Fixed display values. The station reports no gate telemetry or flow
// rate; the operators key these in at the intake house.
const GATE_IS_OPEN: bool = true;
const GATE_OPEN_LEVEL: f64 = 65.0;
const WATER_FLOW_RATE: f64 = 3.5;

/// Live dashboard screen state.
pub struct LiveScreen {
    client: Arc<StationClient>,
    config: StationConfig,
    state: DashboardState,
    poll: Option<TickerHandle>,
    clock: Option<TickerHandle>,
    /// When the last successful poll landed (for the title-bar age).
    last_update: Option<Instant>,
}

impl LiveScreen {
    pub fn new(client: Arc<StationClient>, config: StationConfig) -> Self {
        Self {
            client,
            config,
            state: DashboardState::new(Local::now()),
            poll: None,
            clock: None,
            last_update: None,
        }
    }

    /// Format the data age as a human-readable string for the title bar.
    fn refresh_age_str(&self) -> String {
        match self.last_update {
            Some(t) => {
                let secs = t.elapsed().as_secs();
                if secs < 5 {
                    "just now".into()
                } else if secs < 60 {
                    format!("{secs}s ago")
                } else {
                    format!("{}m ago", secs / 60)
                }
            }
            None => "no data".into(),
        }
    }

    /// Render the greeting / date / time header row.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let columns =
            Layout::horizontal([Constraint::Min(20), Constraint::Length(36)]).split(area);

        let greeting = clock::Greeting::from_time(self.state.now);
        let left = Paragraph::new(vec![
            Line::from(Span::styled(
                greeting.label(),
                Style::default()
                    .fg(theme::RIVER_BLUE)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Reservoir station overview",
                theme::card_label(),
            )),
        ]);
        frame.render_widget(left, columns[0]);

        let right = Paragraph::new(vec![
            Line::from(Span::styled(
                clock::formatted_date(self.state.now),
                Style::default().fg(theme::DIM_WHITE),
            )),
            Line::from(Span::styled(
                clock::formatted_time(self.state.now),
                theme::card_label(),
            )),
        ])
        .alignment(Alignment::Right);
        frame.render_widget(right, columns[1]);
    }

    /// Render the reservoir level card (tier-colored gauge).
    fn render_tank(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Reservoir Water Level ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let level = selectors::current_reading(&self.state)
            .map(selectors::tank_level)
            .unwrap_or(0.0);
        let tier = aquaview_core::TankTier::from_level(level);

        let rows = Layout::vertical([
            Constraint::Length(1), // tier label
            Constraint::Length(1), // gauge
            Constraint::Length(1), // scale
        ])
        .split(inner);

        let tier_line = Line::from(vec![
            Span::styled(" fill tier ", theme::card_label()),
            Span::styled(
                tier.label(),
                Style::default()
                    .fg(theme::tier_color(tier))
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(tier_line), rows[0]);

        frame.render_widget(level_gauge::tank(level), rows[1]);

        let scale = Line::from(vec![
            Span::styled("0%", theme::key_hint()),
            Span::raw(" ".repeat((rows[2].width.saturating_sub(10) / 2) as usize)),
            Span::styled("50%", theme::key_hint()),
            Span::raw(" ".repeat((rows[2].width.saturating_sub(10) / 2) as usize)),
            Span::styled("100%", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(scale), rows[2]);
    }

    /// Render the gate status card (fixed operator-entered values).
    fn render_gate(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Gate Status ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(1), // status + open level
            Constraint::Length(1), // spacer
            Constraint::Length(1), // gauge
        ])
        .split(inner);

        let (status_label, status_color) = if GATE_IS_OPEN {
            ("OPEN", theme::LEAF_GREEN)
        } else {
            ("CLOSED", theme::ALERT_RED)
        };
        let status = Line::from(vec![
            Span::styled(
                format!(" {status_label} "),
                Style::default()
                    .fg(theme::BG_DARK)
                    .bg(status_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   open level ", theme::card_label()),
            Span::styled(
                value_fmt::fmt_percent(GATE_OPEN_LEVEL),
                theme::card_value(),
            ),
        ]);
        frame.render_widget(Paragraph::new(status), rows[0]);

        frame.render_widget(level_gauge::plain(GATE_OPEN_LEVEL, theme::RIVER_BLUE), rows[2]);
    }

    /// Render the four sensor status cards.
    fn render_status_cards(&self, frame: &mut Frame, area: Rect) {
        let current = selectors::current_reading(&self.state);

        let cards: [(&str, String, ratatui::style::Color); 4] = [
            (
                "Temperature",
                current.map_or_else(|| "─".into(), |r| value_fmt::fmt_celsius(r.temperature)),
                theme::SUNRISE_ORANGE,
            ),
            (
                "Humidity",
                current.map_or_else(|| "─".into(), |r| value_fmt::fmt_percent(r.humidity)),
                theme::RIVER_BLUE,
            ),
            (
                "Water Flow Rate",
                value_fmt::fmt_flow(WATER_FLOW_RATE),
                theme::LEAF_GREEN,
            ),
            (
                "Wind Speed",
                current.map_or_else(|| "─".into(), |r| value_fmt::fmt_wind(r.wind_speed)),
                theme::AQUA_CYAN,
            ),
        ];

        let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

        for ((title, value, color), column) in cards.into_iter().zip(columns.iter()) {
            let block = Block::default()
                .title(format!(" {title} "))
                .title_style(theme::card_label())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme::border_default());
            let inner = block.inner(*column);
            frame.render_widget(block, *column);

            let value_line = Line::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
            frame.render_widget(
                Paragraph::new(value_line).alignment(Alignment::Center),
                inner,
            );
        }
    }

    /// Render the two 12-point history charts.
    fn render_charts(&self, frame: &mut Frame, area: Rect) {
        let series = selectors::chart_series(&self.state, self.config.chart_points);

        let temperature: Vec<(f64, f64)> = series
            .iter()
            .map(|r| (series_chart::x_value(r.timestamp), r.temperature))
            .collect();
        let humidity: Vec<(f64, f64)> = series
            .iter()
            .map(|r| (series_chart::x_value(r.timestamp), r.humidity))
            .collect();

        let columns = Layout::horizontal([Constraint::Ratio(1, 2); 2]).split(area);

        series_chart::render(
            frame,
            columns[0],
            "Temperature History",
            &[Series {
                name: "°C",
                color: theme::TEMPERATURE_SERIES,
                points: &temperature,
            }],
            axis_time_label,
        );
        series_chart::render(
            frame,
            columns[1],
            "Humidity History",
            &[Series {
                name: "%",
                color: theme::HUMIDITY_SERIES,
                points: &humidity,
            }],
            axis_time_label,
        );
    }

    /// Centered loading panel shown until the first poll delivers data.
    fn render_loading(frame: &mut Frame, area: Rect) {
        let rows = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area);
        frame.render_widget(
            Paragraph::new("Loading dashboard data…")
                .style(Style::default().fg(theme::BORDER_GRAY))
                .alignment(Alignment::Center),
            rows[1],
        );
    }
}

/// Format an epoch x value as a time-of-day axis label.
fn axis_time_label(x: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let secs = x as i64;
    chrono::DateTime::from_timestamp(secs, 0)
        .map(value_fmt::fmt_axis_time)
        .unwrap_or_default()
}

impl Component for LiveScreen {
    fn activate(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        // Fresh per-view state on every visit.
        self.state = DashboardState::new(Local::now());
        self.last_update = None;

        let client = Arc::clone(&self.client);
        let gap = self.config.live_sample_gap;
        let produce = move || {
            let client = Arc::clone(&client);
            async move {
                match client.fetch_readings().await {
                    Ok(raw) => {
                        let readings = convert::to_readings(raw, Utc::now(), gap);
                        Action::LiveReadings(Arc::new(readings))
                    }
                    Err(e) => Action::LiveFetchFailed(e.into()),
                }
            }
        };
        self.poll = Some(ticker::spawn(
            self.config.poll_interval,
            produce,
            action_tx.clone(),
        ));

        self.clock = Some(ticker::spawn(
            self.config.clock_interval,
            || std::future::ready(Action::ClockTick(Local::now())),
            action_tx,
        ));

        Ok(())
    }

    fn deactivate(&mut self) {
        if let Some(poll) = self.poll.take() {
            poll.stop();
        }
        if let Some(clock) = self.clock.take() {
            clock.stop();
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::LiveReadings(readings) => {
                self.state = self.state.clone().apply_readings(Arc::clone(readings));
                self.last_update = Some(Instant::now());
            }
            Action::LiveFetchFailed(err) => {
                // Silent-continue policy: keep showing the previous values,
                // the next scheduled poll is unaffected.
                warn!(error = %err, "live poll failed; keeping previous readings");
                self.state = self.state.clone().apply_error(err.clone());
            }
            Action::ClockTick(now) => {
                self.state = self.state.clone().apply_tick(*now);
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let title_line = Line::from(vec![
            Span::styled(" Water Management Dashboard ", theme::title_style()),
            Span::styled(
                format!(" [{}] ", self.refresh_age_str()),
                Style::default().fg(theme::BORDER_GRAY),
            ),
        ]);

        let block = Block::default()
            .title(title_line)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width < 40 || inner.height < 12 {
            // Minimal mode — just the headline numbers.
            let summary = selectors::current_reading(&self.state).map_or_else(
                || "no data".to_owned(),
                |r| {
                    format!(
                        "level {} │ {} │ {}",
                        value_fmt::fmt_percent(selectors::tank_level(r)),
                        value_fmt::fmt_celsius(r.temperature),
                        value_fmt::fmt_percent(r.humidity),
                    )
                },
            );
            frame.render_widget(Paragraph::new(summary).style(theme::table_row()), inner);
            return;
        }

        let rows = Layout::vertical([
            Constraint::Length(2), // header
            Constraint::Length(5), // tank + gate cards
            Constraint::Length(3), // status cards
            Constraint::Min(8),    // charts
        ])
        .split(inner);

        self.render_header(frame, rows[0]);

        if !self.state.has_data() {
            Self::render_loading(frame, rows[3]);
            return;
        }

        let top_cards =
            Layout::horizontal([Constraint::Ratio(1, 2); 2]).split(rows[1]);
        self.render_tank(frame, top_cards[0]);
        self.render_gate(frame, top_cards[1]);

        self.render_status_cards(frame, rows[2]);
        self.render_charts(frame, rows[3]);
    }

    fn id(&self) -> &str {
        "Live"
    }
}
