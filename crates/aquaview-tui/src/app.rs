//! Application core — event loop, screen lifecycle, action dispatch.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use aquaview_api::{StationClient, TransportConfig};
use aquaview_core::StationConfig;

use crate::action::Action;
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::screen::ScreenId;
use crate::screens::create_screens;
use crate::theme;
use crate::tui::Tui;

/// Top-level application state and event loop.
pub struct App {
    /// Current active screen. Only the active screen has running timers.
    active_screen: ScreenId,
    /// Previous screen for GoBack.
    previous_screen: Option<ScreenId>,
    /// All screen components, keyed by ScreenId.
    screens: HashMap<ScreenId, Box<dyn Component>>,
    /// Whether the app should keep running.
    running: bool,
    /// Action sender — screens and their timers dispatch through this.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver — main loop drains this.
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    /// Create the app: build the shared HTTP client and both screens.
    pub fn new(config: StationConfig) -> Result<Self> {
        let transport = TransportConfig {
            timeout: config.timeout,
        };
        let client = Arc::new(StationClient::new(config.endpoint.clone(), &transport)?);

        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let screens: HashMap<ScreenId, Box<dyn Component>> =
            create_screens(&client, &config).into_iter().collect();

        Ok(Self {
            active_screen: ScreenId::Live,
            previous_screen: None,
            screens,
            running: true,
            action_tx,
            action_rx,
        })
    }

    /// Run the main event loop. This is the heart of the TUI.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        // Activate the initial screen: starts its poll + clock timers.
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.activate(self.action_tx.clone())?;
        }

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(100), // 10 FPS render
        );

        info!("TUI event loop started");

        while self.running {
            // 1. Wait for the next event
            let Some(event) = events.next().await else {
                break;
            };

            // 2. Map event → action(s)
            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => {
                    self.action_tx.send(Action::Resize(w, h))?;
                }
                Event::Tick => {
                    self.action_tx.send(Action::Tick)?;
                }
                Event::Render => {
                    self.action_tx.send(Action::Render)?;
                }
            }

            // 3. Drain and process all queued actions
            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        // Teardown: no timer may outlive the loop.
        for screen in self.screens.values_mut() {
            debug!(screen = screen.id(), "deactivating");
            screen.deactivate();
        }
        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Global keys are handled here;
    /// screen-specific keys are delegated to the active screen component.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(Some(Action::Quit)),
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),

            // Screen navigation via number keys
            (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='2')) => {
                let n = c as u8 - b'0';
                if let Some(screen) = ScreenId::from_number(n) {
                    return Ok(Some(Action::SwitchScreen(screen)));
                }
            }

            // Tab / Shift+Tab for screen cycling
            (KeyModifiers::NONE, KeyCode::Tab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.next())));
            }
            (KeyModifiers::SHIFT, KeyCode::BackTab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.prev())));
            }

            // Esc — back to the previously visited screen
            (KeyModifiers::NONE, KeyCode::Esc) => return Ok(Some(Action::GoBack)),

            _ => {}
        }

        // Delegate to active screen component
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            return screen.handle_key_event(key);
        }

        Ok(None)
    }

    /// Process a single action — update app state and propagate to screens.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.running = false;
            }

            // ratatui picks up the new size on the next draw.
            Action::Resize(_, _) => {}

            Action::SwitchScreen(target) => {
                if *target != self.active_screen {
                    debug!("switching screen: {} → {}", self.active_screen, target);
                    // Deactivate first: the old view's timers must stop
                    // before the new view starts its own.
                    if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                        screen.deactivate();
                    }
                    self.previous_screen = Some(self.active_screen);
                    self.active_screen = *target;
                    if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                        screen.activate(self.action_tx.clone())?;
                    }
                }
            }

            Action::GoBack => {
                if let Some(prev) = self.previous_screen.take() {
                    self.action_tx.send(Action::SwitchScreen(prev))?;
                }
            }

            // Render is handled in the main loop; Tick is animation
            // bookkeeping no screen currently needs.
            Action::Render | Action::Tick => {}

            // Data actions route to the screen whose timer produced them,
            // even if the user has already switched away — a stale result
            // must never land in the wrong view's state.
            Action::LiveReadings(_) | Action::LiveFetchFailed(_) | Action::ClockTick(_) => {
                self.dispatch_to(ScreenId::Live, action)?;
            }
            Action::HistoryReadings(_)
            | Action::HistoryFetchFailed(_)
            | Action::Retry
            | Action::ExportCsv
            | Action::FocusRangeField(_)
            | Action::AdjustRangeDays(_)
            | Action::ScrollUp
            | Action::ScrollDown
            | Action::ScrollToTop
            | Action::ScrollToBottom => {
                self.dispatch_to(ScreenId::History, action)?;
            }
        }

        Ok(())
    }

    /// Forward an action to one screen, dispatching any follow-up.
    fn dispatch_to(&mut self, id: ScreenId, action: &Action) -> Result<()> {
        if let Some(screen) = self.screens.get_mut(&id) {
            if let Some(follow_up) = screen.update(action)? {
                self.action_tx.send(follow_up)?;
            }
        }
        Ok(())
    }

    /// Render the full application frame.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Layout: [screen content] [tab bar] [status bar]
        let layout = Layout::vertical([
            Constraint::Min(1),    // Screen content
            Constraint::Length(1), // Tab bar
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        if let Some(screen) = self.screens.get(&self.active_screen) {
            screen.render(frame, layout[0]);
        }

        self.render_tab_bar(frame, layout[1]);
        self.render_status_bar(frame, layout[2]);
    }

    /// Render the bottom tab bar.
    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = ScreenId::ALL
            .iter()
            .map(|&id| {
                let style = if id == self.active_screen {
                    theme::tab_active()
                } else {
                    theme::tab_inactive()
                };
                Line::from(Span::styled(
                    format!(" {} {} ", id.number(), id.label()),
                    style,
                ))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .divider(Span::styled(" ", theme::key_hint()))
            .select(
                ScreenId::ALL
                    .iter()
                    .position(|&s| s == self.active_screen)
                    .unwrap_or(0),
            );

        frame.render_widget(tabs, area);
    }

    /// Render the bottom status bar with key hints.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let hints = match self.active_screen {
            ScreenId::Live => " 2 previous data  Tab switch  q quit",
            ScreenId::History => " 1 dashboard  e export  r reload  q quit",
        };
        let line = Line::from(Span::styled(hints, theme::key_hint()));
        frame.render_widget(Paragraph::new(line), area);
    }
}
