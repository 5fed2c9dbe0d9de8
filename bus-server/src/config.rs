//! Route configuration.
//!
//! Routes are defined in a plain text file, one per line, in the form
//! `departure stop|destination substring|bus number`. Empty lines and
//! `#` comments are ignored. The loaded routes plus the look-ahead
//! window form an immutable [`MonitorConfig`] that is handed to the
//! pipeline at startup.

use std::path::Path;

use chrono::Duration;
use serde::Serialize;
use tracing::{error, info, warn};

/// Default look-ahead window in hours.
pub const DEFAULT_HOURS_AHEAD: i64 = 2;

/// One monitored bus route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSpec {
    /// Departure stop name, as known to the upstream API.
    pub departure: String,

    /// Substring that must appear in a connection's destination text.
    pub destination: String,

    /// Bus line number, compared as text against the connection's line.
    pub bus_number: String,
}

/// Load route definitions from a pipe-delimited file.
///
/// Each surviving line must split into exactly three fields; fields are
/// trimmed of surrounding whitespace. Malformed lines are skipped with a
/// warning and do not affect their neighbours. A missing or unreadable
/// file degrades to an empty list. Duplicate lines are kept as-is.
pub fn load_routes(path: impl AsRef<Path>) -> Vec<RouteSpec> {
    let path = path.as_ref();

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            error!(path = %path.display(), error = %e, "Cannot read route config");
            return Vec::new();
        }
    };

    let mut routes = Vec::new();

    for (line_num, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split('|').collect();
        if parts.len() != 3 {
            warn!(
                line = line_num + 1,
                raw = %line,
                "Route line is not departure|destination|bus_number, skipping"
            );
            continue;
        }

        routes.push(RouteSpec {
            departure: parts[0].trim().to_string(),
            destination: parts[1].trim().to_string(),
            bus_number: parts[2].trim().to_string(),
        });
    }

    info!(count = routes.len(), path = %path.display(), "Loaded routes");
    routes
}

/// Immutable runtime configuration shared by the pipeline and web layer.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Routes to scan, in file order.
    pub routes: Vec<RouteSpec>,

    /// How many hours ahead a departure may lie and still be shown.
    pub hours_ahead: i64,
}

impl MonitorConfig {
    /// Create a new configuration.
    pub fn new(routes: Vec<RouteSpec>, hours_ahead: i64) -> Self {
        Self {
            routes,
            hours_ahead,
        }
    }

    /// Returns the look-ahead window as a Duration.
    pub fn look_ahead(&self) -> Duration {
        Duration::hours(self.hours_ahead)
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            hours_ahead: DEFAULT_HOURS_AHEAD,
        }
    }
}
