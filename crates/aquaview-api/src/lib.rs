// aquaview-api: HTTP client for the sensor-station readings endpoint

pub mod error;
pub mod station;
pub mod transport;

pub use error::Error;
pub use station::{RawReading, StationClient};
pub use transport::TransportConfig;
