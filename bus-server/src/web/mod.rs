//! Web layer for the bus departure monitor.
//!
//! Provides the JSON endpoints for service status, upcoming departures,
//! and the configured routes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
