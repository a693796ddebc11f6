//! Component trait — the building block for every screen.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;

/// Every screen implements Component.
///
/// Lifecycle: `activate` → (`handle_key_event` | `update` | `render`)* →
/// `deactivate`. A screen's background timers start in `activate` and MUST
/// all be cancelled in `deactivate`; per-view state is rebuilt on each
/// activation, so nothing leaks across visits.
pub trait Component: Send {
    /// Called when the screen becomes active. Receives the action sender
    /// for its timers and follow-up dispatches.
    fn activate(&mut self, action_tx: UnboundedSender<Action>) -> Result<()>;

    /// Called when the screen stops being active. Stops all timers.
    fn deactivate(&mut self);

    /// Handle a keyboard event. Return an Action to dispatch, or None.
    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Process a dispatched action. May return a follow-up action.
    fn update(&mut self, _action: &Action) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Render into the provided frame area.
    fn render(&self, frame: &mut Frame, area: Rect);

    /// Unique identifier for this screen (for logging).
    fn id(&self) -> &str;
}
