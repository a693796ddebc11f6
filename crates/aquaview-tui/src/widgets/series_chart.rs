//! Time-series line chart card shared by the live and history screens.

use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph};

use crate::theme;

/// One line in the chart. `points` are `(epoch_secs, value)` pairs.
pub struct Series<'a> {
    pub name: &'a str,
    pub color: Color,
    pub points: &'a [(f64, f64)],
}

/// Convert a reading timestamp to a chart x value.
#[allow(clippy::cast_precision_loss)]
pub fn x_value(ts: DateTime<Utc>) -> f64 {
    ts.timestamp() as f64
}

/// Render a bordered chart card. `x_label` formats an epoch-seconds x
/// value into an axis label (time-of-day for the live view, date for
/// history).
pub fn render<F>(frame: &mut Frame, area: Rect, title: &str, series: &[Series], x_label: F)
where
    F: Fn(f64) -> String,
{
    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_default());

    let has_points = series.iter().any(|s| !s.points.is_empty());
    if !has_points {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new("  No data yet").style(Style::default().fg(theme::BORDER_GRAY)),
            inner,
        );
        return;
    }

    // Bounds across every visible series, padded so a flat line is not
    // glued to the frame.
    let all = series.iter().flat_map(|s| s.points.iter().copied());
    let (mut x_min, mut x_max) = (f64::MAX, f64::MIN);
    let (mut y_min, mut y_max) = (f64::MAX, f64::MIN);
    for (x, y) in all {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if x_max - x_min < 1.0 {
        x_max = x_min + 1.0;
    }
    let y_pad = ((y_max - y_min) * 0.15).max(1.0);
    let y_lo = y_min - y_pad;
    let y_hi = y_max + y_pad;

    let datasets: Vec<Dataset> = series
        .iter()
        .map(|s| {
            Dataset::default()
                .name(s.name.to_owned())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(s.color))
                .data(s.points)
        })
        .collect();

    let x_axis = Axis::default()
        .style(Style::default().fg(theme::BORDER_GRAY))
        .bounds([x_min, x_max])
        .labels([
            Line::from(x_label(x_min)),
            Line::from(x_label((x_min + x_max) / 2.0)),
            Line::from(x_label(x_max)),
        ]);

    let y_axis = Axis::default()
        .style(Style::default().fg(theme::BORDER_GRAY))
        .bounds([y_lo, y_hi])
        .labels([
            Line::from(format!("{y_lo:.0}")),
            Line::from(format!("{:.0}", (y_lo + y_hi) / 2.0)),
            Line::from(format!("{y_hi:.0}")),
        ]);

    let chart = Chart::new(datasets).block(block).x_axis(x_axis).y_axis(y_axis);
    frame.render_widget(chart, area);
}
