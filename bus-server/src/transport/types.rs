//! Stationboard API response DTOs.
//!
//! These types map directly to the transport.opendata.ch stationboard
//! JSON responses. They use `Option` liberally because the API omits
//! fields or sends null rather than guaranteeing a value.

use serde::Deserialize;

/// Response from the `/stationboard` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StationboardResponse {
    /// The resolved station, echoed back by the API.
    pub station: Option<StationInfo>,

    /// Upcoming departures, most imminent first.
    #[serde(default)]
    pub stationboard: Vec<Connection>,
}

/// Station metadata echoed by the stationboard endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StationInfo {
    /// Upstream station identifier.
    pub id: Option<String>,

    /// Human-readable station name.
    pub name: Option<String>,
}

/// One departing vehicle on the stationboard.
#[derive(Debug, Clone, Deserialize)]
pub struct Connection {
    /// Upstream display name (e.g., "B 1 12345").
    pub name: Option<String>,

    /// Vehicle category ("B" for bus).
    pub category: Option<String>,

    /// Line number as text. Absent for some vehicle types.
    pub number: Option<String>,

    /// Operating company.
    pub operator: Option<String>,

    /// Full destination text (e.g., "Ebikon, Fildern").
    pub to: Option<String>,

    /// Stop-specific data for the queried station.
    pub stop: Option<ConnectionStop>,
}

/// Departure details at the queried stop.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionStop {
    /// Scheduled departure as an ISO 8601 string.
    pub departure: Option<String>,

    /// Delay in seconds; negative means running early.
    pub delay: Option<i64>,

    /// Platform or bay, when known.
    pub platform: Option<String>,
}
