//! Application state for the web layer.

use std::sync::Arc;

use crate::config::MonitorConfig;
use crate::transport::TransportClient;

/// Shared application state.
///
/// Contains everything a request handler needs.
#[derive(Clone)]
pub struct AppState {
    /// Transport API client
    pub transport: Arc<TransportClient>,

    /// Monitored routes and look-ahead window
    pub config: Arc<MonitorConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(transport: TransportClient, config: MonitorConfig) -> Self {
        Self {
            transport: Arc::new(transport),
            config: Arc::new(config),
        }
    }
}
