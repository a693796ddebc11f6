use thiserror::Error;

/// Top-level error type for the `aquaview-api` crate.
///
/// The station endpoint has exactly three ways to fail from the client's
/// point of view: the request never completes, the server answers with a
/// non-success status, or the body is not the expected JSON array.
/// `aquaview-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    /// The request failed before a response arrived (connection refused,
    /// DNS failure, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server responded with a non-2xx status.
    #[error("HTTP error: status {status}")]
    Http { status: u16 },

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Decode error: {message}")]
    Decode { message: String, body: String },

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Returns `true` if this is a transient error where the next poll
    /// might succeed without any intervention.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            Self::Http { status } => *status >= 500,
            _ => false,
        }
    }

    /// The HTTP status code, if the server got far enough to send one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
