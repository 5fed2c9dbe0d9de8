//! Abstraction over the stationboard supplier.

use std::future::Future;

use super::error::TransportError;
use super::types::StationboardResponse;

/// Source of stationboard data.
///
/// The departure pipeline is generic over this trait so it can run
/// against the live API or canned boards in tests.
pub trait StationboardSource {
    /// Fetch up to `limit` upcoming bus departures for a stop.
    fn stationboard(
        &self,
        station: &str,
        limit: u32,
    ) -> impl Future<Output = Result<StationboardResponse, TransportError>> + Send;
}
