// aquaview-core: domain layer between aquaview-api and the TUI.
//
// Owns the reading model, the per-view dashboard state and its transition
// functions, the poll/clock lifecycles, the display selectors, and CSV
// export. Never touches the terminal and never reads files.

pub mod clock;
pub mod config;
pub mod convert;
pub mod error;
pub mod export;
pub mod model;
pub mod selectors;
pub mod state;
pub mod ticker;

// ── Primary re-exports ──────────────────────────────────────────────
pub use clock::Greeting;
pub use config::StationConfig;
pub use error::FetchError;
pub use model::Reading;
pub use selectors::TankTier;
pub use state::DashboardState;
pub use ticker::TickerHandle;
