//! Screen registry.

use std::sync::Arc;

use aquaview_api::StationClient;
use aquaview_core::StationConfig;

use crate::component::Component;
use crate::screen::ScreenId;

pub mod history;
pub mod live;

/// Build all screens. Each screen gets its own config copy and a handle to
/// the shared HTTP client; per-view state stays strictly per-screen.
pub fn create_screens(
    client: &Arc<StationClient>,
    config: &StationConfig,
) -> Vec<(ScreenId, Box<dyn Component>)> {
    vec![
        (
            ScreenId::Live,
            Box::new(live::LiveScreen::new(Arc::clone(client), config.clone())),
        ),
        (
            ScreenId::History,
            Box::new(history::HistoryScreen::new(
                Arc::clone(client),
                config.clone(),
            )),
        ),
    ]
}
