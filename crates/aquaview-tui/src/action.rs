//! All possible UI actions. Actions are the sole mechanism for state mutation.

use std::sync::Arc;

use chrono::{DateTime, Local};

use aquaview_core::{FetchError, Reading};

use crate::screen::ScreenId;

/// Which boundary of the history date range has edit focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeField {
    #[default]
    Start,
    End,
}

/// Every state transition in the TUI is expressed as an Action.
///
/// Data variants name their owning screen so a result still in the queue
/// when the user switches screens is routed to the view whose timer
/// produced it, never to whichever screen happens to be active.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Navigation ────────────────────────────────────────────────
    SwitchScreen(ScreenId),
    GoBack,

    // ── Live view data ────────────────────────────────────────────
    LiveReadings(Arc<Vec<Reading>>),
    LiveFetchFailed(FetchError),
    ClockTick(DateTime<Local>),

    // ── History view data ─────────────────────────────────────────
    HistoryReadings(Arc<Vec<Reading>>),
    HistoryFetchFailed(FetchError),
    Retry,

    // ── Export ────────────────────────────────────────────────────
    ExportCsv,

    // ── History date range (UI-only; does not refetch) ────────────
    FocusRangeField(RangeField),
    AdjustRangeDays(i64),

    // ── Table scrolling ───────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
}
