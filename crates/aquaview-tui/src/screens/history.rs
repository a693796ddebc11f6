//! Historical data screen — full reading list, charts, CSV export.
//!
//! Fetches once per activation (it does not poll). A fetch failure
//! replaces the whole screen with an error panel and a manual retry;
//! this is the opposite of the live screen's silent-continue policy.
//!
//! The date-range selector is display-only: adjusting it does not
//! refetch — the upstream endpoint takes no range parameters — it only
//! feeds the export filename.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{Local, NaiveDate, TimeDelta, Utc};
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Row, Table};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

use aquaview_api::StationClient;
use aquaview_core::{DashboardState, StationConfig, TickerHandle, convert, export, ticker};

use crate::action::{Action, RangeField};
use crate::component::Component;
use crate::theme;
use crate::widgets::series_chart::{self, Series};
use crate::widgets::value_fmt;

/// Historical data screen state.
pub struct HistoryScreen {
    client: Arc<StationClient>,
    config: StationConfig,
    state: DashboardState,
    fetch: Option<TickerHandle>,
    action_tx: Option<UnboundedSender<Action>>,
    range_start: NaiveDate,
    range_end: NaiveDate,
    focus: RangeField,
    scroll: usize,
    export_status: Option<String>,
}

impl HistoryScreen {
    pub fn new(client: Arc<StationClient>, config: StationConfig) -> Self {
        let today = Local::now().date_naive();
        Self {
            client,
            config,
            state: DashboardState::new(Local::now()),
            fetch: None,
            action_tx: None,
            range_start: today - TimeDelta::days(7),
            range_end: today,
            focus: RangeField::default(),
            scroll: 0,
            export_status: None,
        }
    }

    /// Kick off the one-shot fetch for this activation (or retry).
    fn start_fetch(&mut self) {
        let Some(tx) = self.action_tx.clone() else {
            return;
        };

        let client = Arc::clone(&self.client);
        let gap = self.config.history_sample_gap;
        let fut = async move {
            match client.fetch_readings().await {
                Ok(raw) => {
                    let readings = convert::to_readings(raw, Utc::now(), gap);
                    Action::HistoryReadings(Arc::new(readings))
                }
                Err(e) => Action::HistoryFetchFailed(e.into()),
            }
        };
        self.fetch = Some(ticker::spawn_once(fut, tx));
    }

    /// Move the focused range boundary by `days`, keeping start ≤ end.
    fn adjust_range(&mut self, days: i64) {
        let delta = TimeDelta::days(days);
        match self.focus {
            RangeField::Start => {
                self.range_start = (self.range_start + delta).min(self.range_end);
            }
            RangeField::End => {
                self.range_end = (self.range_end + delta).max(self.range_start);
            }
        }
    }

    /// Serialize the current list and write it next to the process.
    fn export_csv(&mut self) {
        let csv = export::to_csv(&self.state.readings);
        let path = export_path(Path::new("."), self.range_start, self.range_end);

        match std::fs::write(&path, csv) {
            Ok(()) => {
                info!(path = %path.display(), rows = self.state.readings.len(), "exported CSV");
                self.export_status = Some(format!(
                    "Exported {} readings to {}",
                    self.state.readings.len(),
                    path.display()
                ));
            }
            Err(e) => {
                warn!(error = %e, "CSV export failed");
                self.export_status = Some(format!("Export failed: {e}"));
            }
        }
    }

    fn max_scroll(&self) -> usize {
        self.state.readings.len().saturating_sub(1)
    }

    /// Render the date-range selector bar.
    fn render_date_filter(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Date Range ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let field_style = |field: RangeField| {
            if field == self.focus {
                Style::default()
                    .fg(theme::RIVER_BLUE)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                theme::card_value()
            }
        };

        let line = Line::from(vec![
            Span::styled(" start ", theme::card_label()),
            Span::styled(self.range_start.to_string(), field_style(RangeField::Start)),
            Span::styled("   end ", theme::card_label()),
            Span::styled(self.range_end.to_string(), field_style(RangeField::End)),
            Span::styled("   ←/→ select  +/- adjust  (display only)", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(line), inner);
    }

    /// Render the two history charts, oldest-to-newest.
    fn render_charts(&self, frame: &mut Frame, area: Rect) {
        let temperature: Vec<(f64, f64)> = self
            .state
            .readings
            .iter()
            .rev()
            .map(|r| (series_chart::x_value(r.timestamp), r.temperature))
            .collect();
        let humidity: Vec<(f64, f64)> = self
            .state
            .readings
            .iter()
            .rev()
            .map(|r| (series_chart::x_value(r.timestamp), r.humidity))
            .collect();
        let water_level: Vec<(f64, f64)> = self
            .state
            .readings
            .iter()
            .rev()
            .map(|r| (series_chart::x_value(r.timestamp), r.water_level))
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
            axis_date_label,
        );
        series_chart::render(
            frame,
            columns[1],
            "Humidity & Water Level",
            &[
                Series {
                    name: "Humidity (%)",
                    color: theme::HUMIDITY_SERIES,
                    points: &humidity,
                },
                Series {
                    name: "Water Level (%)",
                    color: theme::WATER_LEVEL_SERIES,
                    points: &water_level,
                },
            ],
            axis_date_label,
        );
    }

    /// Render the scrollable reading table, most-recent-first.
    fn render_table(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" Readings ({}) ", self.state.readings.len()))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let visible = inner.height.saturating_sub(1) as usize;
        let header = Row::new([
            "Date & Time",
            "Temperature (°C)",
            "Humidity (%)",
            "Water Level (%)",
        ])
        .style(theme::table_header());

        let rows: Vec<Row> = self
            .state
            .readings
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(visible)
            .map(|(i, r)| {
                let style = if i % 2 == 0 {
                    theme::table_row()
                } else {
                    theme::table_row_alt()
                };
                Row::new([
                    value_fmt::fmt_table_timestamp(r.timestamp),
                    format!("{:.1}", r.temperature),
                    format!("{:.1}", r.humidity),
                    format!("{:.1}", r.water_level),
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(20),
                Constraint::Length(17),
                Constraint::Length(13),
                Constraint::Length(16),
            ],
        )
        .header(header);

        frame.render_widget(table, inner);
    }

    /// Full-screen error panel with a manual retry action.
    fn render_error(frame: &mut Frame, area: Rect, message: &str) {
        let panel_width = 56u16.min(area.width.saturating_sub(4));
        let panel_height = 7u16;
        let x = (area.width.saturating_sub(panel_width)) / 2;
        let y = (area.height.saturating_sub(panel_height)) / 2;
        let panel = Rect::new(area.x + x, area.y + y, panel_width, panel_height);

        let block = Block::default()
            .title(" Error ")
            .title_style(
                Style::default()
                    .fg(theme::ALERT_RED)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::ALERT_RED));

        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Failed to load historical data.",
                Style::default().fg(theme::DIM_WHITE),
            )),
            Line::from(Span::styled(message.to_owned(), theme::key_hint())),
            Line::from(""),
            Line::from(vec![
                Span::styled("r", theme::key_hint_key()),
                Span::styled(" retry", theme::key_hint()),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            inner,
        );
    }

    fn render_loading(frame: &mut Frame, area: Rect) {
        let rows = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area);
        frame.render_widget(
            Paragraph::new("Loading historical data…")
                .style(Style::default().fg(theme::BORDER_GRAY))
                .alignment(Alignment::Center),
            rows[1],
        );
    }
}

/// Format an epoch x value as a date axis label.
fn axis_date_label(x: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let secs = x as i64;
    chrono::DateTime::from_timestamp(secs, 0)
        .map(value_fmt::fmt_axis_date)
        .unwrap_or_default()
}

/// Destination path for an export with the given range boundaries.
fn export_path(dir: &Path, start: NaiveDate, end: NaiveDate) -> PathBuf {
    dir.join(export::export_filename(start, end))
}

impl Component for HistoryScreen {
    fn activate(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        // Fresh per-view state on every visit.
        self.state = DashboardState::new(Local::now());
        self.scroll = 0;
        self.export_status = None;
        let today = Local::now().date_naive();
        self.range_start = today - TimeDelta::days(7);
        self.range_end = today;

        self.action_tx = Some(action_tx);
        self.start_fetch();
        Ok(())
    }

    fn deactivate(&mut self) {
        if let Some(fetch) = self.fetch.take() {
            fetch.stop();
        }
        self.action_tx = None;
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('r') => Some(Action::Retry),
            KeyCode::Char('e') => Some(Action::ExportCsv),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::Char('g') => Some(Action::ScrollToTop),
            KeyCode::Char('G') => Some(Action::ScrollToBottom),
            KeyCode::Left => Some(Action::FocusRangeField(RangeField::Start)),
            KeyCode::Right => Some(Action::FocusRangeField(RangeField::End)),
            KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::AdjustRangeDays(1)),
            KeyCode::Char('-') => Some(Action::AdjustRangeDays(-1)),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::HistoryReadings(readings) => {
                self.state = self.state.clone().apply_readings(Arc::clone(readings));
                self.scroll = self.scroll.min(self.max_scroll());
            }
            Action::HistoryFetchFailed(err) => {
                warn!(error = %err, "historical fetch failed");
                self.state = self.state.clone().apply_error(err.clone());
            }
            Action::Retry => {
                // Retry reloads the whole view, not just the failed fetch.
                self.state = DashboardState::new(Local::now());
                self.scroll = 0;
                self.export_status = None;
                self.start_fetch();
            }
            Action::ExportCsv => self.export_csv(),
            Action::FocusRangeField(field) => self.focus = *field,
            Action::AdjustRangeDays(days) => self.adjust_range(*days),
            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            Action::ScrollDown => self.scroll = (self.scroll + 1).min(self.max_scroll()),
            Action::ScrollToTop => self.scroll = 0,
            Action::ScrollToBottom => self.scroll = self.max_scroll(),
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Historical Water Data ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if let Some(err) = &self.state.last_error {
            Self::render_error(frame, inner, &err.to_string());
            return;
        }

        if self.state.is_loading {
            Self::render_loading(frame, inner);
            return;
        }

        let rows = Layout::vertical([
            Constraint::Length(3),  // date filter
            Constraint::Length(10), // charts
            Constraint::Min(5),     // table
            Constraint::Length(1),  // status line
        ])
        .split(inner);

        self.render_date_filter(frame, rows[0]);
        self.render_charts(frame, rows[1]);
        self.render_table(frame, rows[2]);

        let status = self.export_status.as_deref().map_or_else(
            || Line::from(Span::styled(" e export  j/k scroll  r reload", theme::key_hint())),
            |s| Line::from(Span::styled(format!(" {s}"), Style::default().fg(theme::LEAF_GREEN))),
        );
        frame.render_widget(Paragraph::new(status), rows[3]);
    }

    fn id(&self) -> &str {
        "History"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use aquaview_core::Reading;
    use chrono::DateTime;
    use pretty_assertions::assert_eq;

    fn reading() -> Reading {
        Reading {
            timestamp: "2026-08-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap(),
            water_level: 62.0,
            temperature: 24.5,
            humidity: 58.0,
            wind_speed: None,
        }
    }

    #[test]
    fn export_writes_the_named_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let start = NaiveDate::from_ymd_opt(2026, 7, 30).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();

        let path = export_path(dir.path(), start, end);
        let csv = export::to_csv(&[reading(), reading()]);
        std::fs::write(&path, csv).unwrap();

        assert!(
            path.ends_with("water_data_2026-07-30_to_2026-08-06.csv"),
            "unexpected path: {}",
            path.display()
        );
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 3);
    }
}
