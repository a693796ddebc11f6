// ── Core error types ──
//
// User-facing fetch failures. The TUI only ever sees these three kinds;
// the `From<aquaview_api::Error>` impl translates transport-layer errors
// so screens never touch reqwest types.

use thiserror::Error;

/// Why a poll failed, in terms a user can act on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never completed (connection refused, DNS, timeout).
    #[error("Network error: {reason}")]
    Network { reason: String },

    /// The server answered with a non-success status.
    #[error("Server returned HTTP {status}")]
    Http { status: u16 },

    /// The body was not the expected JSON array of readings.
    #[error("Malformed response: {reason}")]
    Decode { reason: String },
}

impl From<aquaview_api::Error> for FetchError {
    fn from(err: aquaview_api::Error) -> Self {
        match err {
            aquaview_api::Error::Network(e) => FetchError::Network {
                reason: e.to_string(),
            },
            aquaview_api::Error::Http { status } => FetchError::Http { status },
            aquaview_api::Error::Decode { message, .. } => FetchError::Decode { reason: message },
            aquaview_api::Error::InvalidUrl(e) => FetchError::Network {
                reason: format!("invalid URL: {e}"),
            },
        }
    }
}
