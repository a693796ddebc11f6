// Station readings HTTP client
//
// Wraps `reqwest::Client` for the single endpoint the station exposes:
// an unauthenticated GET returning a JSON array of reading objects.
// No envelope, no pagination, no query parameters.

use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// One reading as the upstream API serializes it.
///
/// The station firmware has shipped both `waterLevel` and `water_level`
/// spellings, and some records omit fields entirely, so everything here is
/// optional and loosely typed. `aquaview-core` converts this into the
/// domain `Reading`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawReading {
    /// ISO-8601 timestamp. Absent on records the station buffered offline.
    #[serde(default)]
    pub timestamp: Option<String>,

    /// Reservoir fill percentage.
    #[serde(default, alias = "waterLevel")]
    pub water_level: Option<f64>,

    /// Degrees Celsius.
    #[serde(default)]
    pub temperature: Option<f64>,

    /// Relative humidity percentage.
    #[serde(default)]
    pub humidity: Option<f64>,

    /// Wind speed in km/h. Only present on stations with an anemometer.
    #[serde(default, alias = "windSpeed")]
    pub wind_speed: Option<f64>,
}

/// HTTP client for the station readings endpoint.
pub struct StationClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl StationClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `endpoint` is the full readings URL (e.g. `https://host/items`).
    pub fn new(endpoint: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, endpoint })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    /// The readings endpoint URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the full reading list.
    ///
    /// Returns the records in the order the API sent them; ordering and
    /// timestamp normalization are the caller's concern. Fails with
    /// [`Error::Http`] on a non-2xx status and [`Error::Decode`] (carrying
    /// the raw body) when the payload is not a JSON array of readings.
    pub async fn fetch_readings(&self) -> Result<Vec<RawReading>, Error> {
        debug!("GET {}", self.endpoint);

        let resp = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(Error::Network)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(Error::Network)?;

        serde_json::from_str(&body).map_err(|e| Error::Decode {
            message: e.to_string(),
            body,
        })
    }
}
