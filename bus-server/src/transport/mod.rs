//! transport.opendata.ch stationboard client.
//!
//! This module provides an HTTP client for the Swiss public transport
//! API's stationboard endpoint, which lists upcoming departures for a
//! stop.
//!
//! Key characteristics of the API:
//! - Stops are addressed by name; the API resolves them to station ids
//! - Departure times are ISO 8601 strings, occasionally with the
//!   malformed `+0200` offset form (no colon)
//! - `delay` is in seconds and may be negative (running early)
//! - No authentication; requests are rate limited upstream

mod client;
mod error;
mod mock;
mod source;
mod types;

pub use client::{TransportClient, TransportConfig};
pub use error::TransportError;
pub use mock::MockStationboard;
pub use source::StationboardSource;
pub use types::{Connection, ConnectionStop, StationInfo, StationboardResponse};
