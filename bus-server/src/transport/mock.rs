//! In-memory stationboard source for tests and offline development.

use std::collections::{HashMap, HashSet};

use super::error::TransportError;
use super::source::StationboardSource;
use super::types::StationboardResponse;

/// Stationboard source that serves pre-registered boards.
///
/// Useful for exercising the departure pipeline without network access.
/// Unknown stops and explicitly registered failures surface as API
/// errors, the same way the live client reports them.
#[derive(Debug, Clone, Default)]
pub struct MockStationboard {
    boards: HashMap<String, StationboardResponse>,
    failing: HashSet<String>,
}

impl MockStationboard {
    /// Create an empty mock with no boards registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canned board for a stop.
    pub fn with_board(mut self, station: impl Into<String>, board: StationboardResponse) -> Self {
        self.boards.insert(station.into(), board);
        self
    }

    /// Make lookups for a stop fail with an upstream error.
    pub fn with_failure(mut self, station: impl Into<String>) -> Self {
        self.failing.insert(station.into());
        self
    }
}

impl StationboardSource for MockStationboard {
    async fn stationboard(
        &self,
        station: &str,
        _limit: u32,
    ) -> Result<StationboardResponse, TransportError> {
        if self.failing.contains(station) {
            return Err(TransportError::Api {
                status: 502,
                message: format!("injected failure for {station}"),
            });
        }

        self.boards
            .get(station)
            .cloned()
            .ok_or_else(|| TransportError::Api {
                status: 404,
                message: format!("no board registered for {station}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_board() -> StationboardResponse {
        StationboardResponse {
            station: None,
            stationboard: Vec::new(),
        }
    }

    #[tokio::test]
    async fn serves_registered_board() {
        let mock = MockStationboard::new().with_board("Luzern, Bahnhof", empty_board());

        let board = mock.stationboard("Luzern, Bahnhof", 50).await.unwrap();

        assert!(board.stationboard.is_empty());
    }

    #[tokio::test]
    async fn unknown_stop_is_an_error() {
        let mock = MockStationboard::new();

        let result = mock.stationboard("Nowhere", 50).await;

        assert!(matches!(result, Err(TransportError::Api { status: 404, .. })));
    }

    #[tokio::test]
    async fn injected_failure_surfaces() {
        let mock = MockStationboard::new()
            .with_board("Luzern, Bahnhof", empty_board())
            .with_failure("Luzern, Bahnhof");

        let result = mock.stationboard("Luzern, Bahnhof", 50).await;

        assert!(matches!(result, Err(TransportError::Api { status: 502, .. })));
    }
}
