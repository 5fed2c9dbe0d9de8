//! The departure pipeline.
//!
//! Turns raw stationboard responses into display-ready departure
//! records: parse upstream timestamps into Europe/Zurich instants,
//! keep the connections matching a configured route that leave within
//! the look-ahead window, and format times and delays for display.
//!
//! `collect_departures` runs the whole pipeline across every
//! configured route; the pure filtering step is exposed separately as
//! `select_departures` so it can be tested without a network.

mod fetch;
mod format;
mod time;

pub use fetch::{
    Departure, RouteDepartures, STATIONBOARD_LIMIT, SkippedConnection, collect_departures,
    fetch_route_departures, select_departures,
};
pub use format::{PLATFORM_UNKNOWN, format_delay, format_departure_time};
pub use time::{TimeParseError, parse_departure_time, zurich_now};
