//! Selecting and collecting departures for configured routes.
//!
//! A scan walks the configured routes one at a time, pulls the
//! stationboard for each departure stop, and keeps the connections that
//! match the route's line and destination and leave within the
//! look-ahead window. Failures stay local to their route: a failed
//! fetch or an unparseable departure time is logged and the scan moves
//! on.

use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use tracing::warn;

use crate::config::{MonitorConfig, RouteSpec};
use crate::transport::{StationboardResponse, StationboardSource, TransportError};

use super::format::{PLATFORM_UNKNOWN, format_delay, format_departure_time};
use super::time::{TimeParseError, parse_departure_time};

/// How many connections to request per stationboard call.
pub const STATIONBOARD_LIMIT: u32 = 50;

/// One upcoming departure, formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Departure {
    /// Wall-clock departure time, `HH:MM`.
    pub display_time: String,

    /// The configured departure stop.
    pub from_stop: String,

    /// Full destination text as reported by the API.
    pub to_destination: String,

    /// The configured line number.
    pub bus_line: String,

    /// Delay status marker, see [`format_delay`].
    pub delay_display: String,

    /// Platform or bay, `N/A` when the API reports none.
    pub platform: String,

    /// Departure instant in the Europe/Zurich zone. Used for windowing
    /// and sorting.
    pub departure_instant: DateTime<Tz>,
}

/// A connection that matched a route but carried an unparseable
/// departure time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedConnection {
    /// The timestamp string as received.
    pub raw_time: String,

    /// Why it could not be parsed.
    pub error: TimeParseError,
}

/// Outcome of filtering one stationboard against one route.
#[derive(Debug, Clone, Default)]
pub struct RouteDepartures {
    /// Departures inside the look-ahead window, in upstream order.
    pub departures: Vec<Departure>,

    /// Matching connections dropped for unparseable times.
    pub skipped: Vec<SkippedConnection>,
}

/// Filter a stationboard down to the departures matching `route` that
/// leave strictly after `now` and strictly before `now + look_ahead`.
///
/// A connection matches when its line number equals the route's bus
/// number exactly and its destination text contains the route's
/// destination as a case-sensitive substring. Connections without a
/// line number or departure time never match. Matching connections
/// whose time cannot be parsed are reported in
/// [`RouteDepartures::skipped`] instead of being dropped silently.
pub fn select_departures(
    board: &StationboardResponse,
    route: &RouteSpec,
    now: DateTime<Tz>,
    look_ahead: Duration,
) -> RouteDepartures {
    let mut result = RouteDepartures::default();

    for connection in &board.stationboard {
        if connection.number.as_deref() != Some(route.bus_number.as_str()) {
            continue;
        }

        let destination_text = connection.to.as_deref().unwrap_or("");
        if !destination_text.contains(route.destination.as_str()) {
            continue;
        }

        let Some(stop) = &connection.stop else {
            continue;
        };
        let Some(raw_time) = &stop.departure else {
            continue;
        };

        let instant = match parse_departure_time(raw_time) {
            Ok(instant) => instant,
            Err(error) => {
                result.skipped.push(SkippedConnection {
                    raw_time: raw_time.clone(),
                    error,
                });
                continue;
            }
        };

        if instant <= now || instant.signed_duration_since(now) >= look_ahead {
            continue;
        }

        result.departures.push(Departure {
            display_time: format_departure_time(raw_time),
            from_stop: route.departure.clone(),
            to_destination: destination_text.to_string(),
            bus_line: route.bus_number.clone(),
            delay_display: format_delay(stop.delay),
            platform: stop
                .platform
                .clone()
                .unwrap_or_else(|| PLATFORM_UNKNOWN.to_string()),
            departure_instant: instant,
        });
    }

    result
}

/// Fetch the stationboard for a route's departure stop and select the
/// departures matching the route.
pub async fn fetch_route_departures<S: StationboardSource>(
    source: &S,
    route: &RouteSpec,
    limit: u32,
    now: DateTime<Tz>,
    look_ahead: Duration,
) -> Result<RouteDepartures, TransportError> {
    let board = source.stationboard(&route.departure, limit).await?;
    Ok(select_departures(&board, route, now, look_ahead))
}

/// Collect the upcoming departures across all configured routes,
/// sorted by departure time.
///
/// Routes are queried sequentially. A route whose fetch fails is
/// logged and skipped for this scan; the others still contribute.
pub async fn collect_departures<S: StationboardSource>(
    source: &S,
    config: &MonitorConfig,
    now: DateTime<Tz>,
) -> Vec<Departure> {
    let look_ahead = config.look_ahead();
    let mut all = Vec::new();

    for route in &config.routes {
        match fetch_route_departures(source, route, STATIONBOARD_LIMIT, now, look_ahead).await {
            Ok(found) => {
                for skipped in &found.skipped {
                    warn!(
                        stop = %route.departure,
                        bus = %route.bus_number,
                        raw = %skipped.raw_time,
                        error = %skipped.error,
                        "Unparseable departure time, connection skipped"
                    );
                }
                all.extend(found.departures);
            }
            Err(error) => {
                warn!(
                    stop = %route.departure,
                    bus = %route.bus_number,
                    error = %error,
                    "Stationboard fetch failed, route skipped this scan"
                );
            }
        }
    }

    all.sort_by_key(|departure| departure.departure_instant);
    all
}
