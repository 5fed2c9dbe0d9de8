//! Response bodies for the JSON API.
//!
//! Field names here are the wire contract the dashboard consumes; the
//! `from`/`to` renames and `departure_timestamp` are load-bearing.

use serde::Serialize;

use crate::config::RouteSpec;
use crate::departures::Departure;

/// `GET /api/status` payload.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Always `"ok"` when the process is serving.
    pub status: &'static str,

    /// Current time in Europe/Zurich, RFC 3339.
    pub timestamp: String,

    /// Number of routes loaded at startup.
    pub routes_loaded: usize,

    /// Configured look-ahead window in hours.
    pub hours_ahead: i64,
}

/// One departure in the `GET /api/bus_departures` payload.
#[derive(Debug, Serialize)]
pub struct DepartureResult {
    /// Wall-clock departure time, `HH:MM`.
    pub time: String,

    /// Configured departure stop.
    #[serde(rename = "from")]
    pub from_stop: String,

    /// Full destination text from the upstream API.
    #[serde(rename = "to")]
    pub to_destination: String,

    /// Bus line number.
    pub bus: String,

    /// Delay status marker.
    pub delay: String,

    /// Platform or bay, `N/A` when unknown.
    pub platform: String,

    /// Zone-aware departure instant, RFC 3339. The list is sorted by
    /// this field.
    pub departure_timestamp: String,
}

impl DepartureResult {
    /// Build the wire representation of a departure record.
    pub fn from_record(departure: &Departure) -> Self {
        Self {
            time: departure.display_time.clone(),
            from_stop: departure.from_stop.clone(),
            to_destination: departure.to_destination.clone(),
            bus: departure.bus_line.clone(),
            delay: departure.delay_display.clone(),
            platform: departure.platform.clone(),
            departure_timestamp: departure.departure_instant.to_rfc3339(),
        }
    }
}

/// `GET /api/bus_departures` payload.
#[derive(Debug, Serialize)]
pub struct DeparturesResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub total_departures: usize,
    pub hours_ahead: i64,
    pub departures: Vec<DepartureResult>,
}

/// `GET /api/routes` payload.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub status: &'static str,
    pub routes: Vec<RouteSpec>,
    pub total_routes: usize,
}

/// Error payload returned with a 5xx status.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always `"error"`.
    pub status: &'static str,

    /// Human-readable description of what failed.
    pub error: String,

    /// Current time in Europe/Zurich, RFC 3339.
    pub timestamp: String,
}
