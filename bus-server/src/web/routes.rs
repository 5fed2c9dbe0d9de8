//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::error;

use crate::departures::{collect_departures, zurich_now};

use super::dto::{
    DepartureResult, DeparturesResponse, ErrorResponse, RoutesResponse, StatusResponse,
};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/status", get(status))
        .route("/api/bus_departures", get(bus_departures))
        .route("/api/routes", get(routes))
        .with_state(state)
}

/// Health check endpoint.
async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        timestamp: zurich_now().to_rfc3339(),
        routes_loaded: state.config.routes.len(),
        hours_ahead: state.config.hours_ahead,
    })
}

/// Scan every configured route and return the upcoming departures,
/// sorted by departure time.
///
/// Route-level failures are folded to empty inside the pipeline, so a
/// single unreachable stop never fails the whole response. Anything
/// that does escape maps to the structured 500 payload via [`AppError`].
async fn bus_departures(
    State(state): State<AppState>,
) -> Result<Json<DeparturesResponse>, AppError> {
    let now = zurich_now();
    let departures = collect_departures(state.transport.as_ref(), &state.config, now).await;

    let departures: Vec<DepartureResult> =
        departures.iter().map(DepartureResult::from_record).collect();

    Ok(Json(DeparturesResponse {
        status: "ok",
        timestamp: now.to_rfc3339(),
        total_departures: departures.len(),
        hours_ahead: state.config.hours_ahead,
        departures,
    }))
}

/// Return the static configured route list.
async fn routes(State(state): State<AppState>) -> Json<RoutesResponse> {
    Json(RoutesResponse {
        status: "ok",
        routes: state.config.routes.clone(),
        total_routes: state.config.routes.len(),
    })
}

/// Application error type.
///
/// Everything the handlers can surface is a server-side failure; the
/// per-route and per-connection errors never reach this layer.
#[derive(Debug)]
pub enum AppError {
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let AppError::Internal { message } = self;

        error!(error = %message, "Request failed");

        let body = Json(ErrorResponse {
            status: "error",
            error: message,
            timestamp: zurich_now().to_rfc3339(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MonitorConfig, RouteSpec};
    use crate::transport::{TransportClient, TransportConfig};

    fn test_state(routes: Vec<RouteSpec>, hours_ahead: i64) -> AppState {
        let client = TransportClient::new(TransportConfig::new()).unwrap();
        AppState::new(client, MonitorConfig::new(routes, hours_ahead))
    }

    fn sample_route() -> RouteSpec {
        RouteSpec {
            departure: "Luzern, Bahnhof".to_string(),
            destination: "Ebikon".to_string(),
            bus_number: "1".to_string(),
        }
    }

    // The departure handler itself is exercised through the pipeline
    // tests with the mock source; the handlers below never touch the
    // network.

    #[tokio::test]
    async fn status_reports_config() {
        let state = test_state(vec![sample_route()], 3);

        let Json(response) = status(State(state)).await;

        assert_eq!(response.status, "ok");
        assert_eq!(response.routes_loaded, 1);
        assert_eq!(response.hours_ahead, 3);
        assert!(response.timestamp.contains('T'));
    }

    #[tokio::test]
    async fn routes_returns_configured_list() {
        let state = test_state(vec![sample_route(), sample_route()], 2);

        let Json(response) = routes(State(state)).await;

        assert_eq!(response.status, "ok");
        assert_eq!(response.total_routes, 2);
        assert_eq!(response.routes.len(), 2);
        assert_eq!(response.routes[0].departure, "Luzern, Bahnhof");
    }

    #[tokio::test]
    async fn app_error_maps_to_structured_500() {
        let response = AppError::Internal {
            message: "aggregation failed".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["status"], "error");
        assert_eq!(value["error"], "aggregation failed");
        assert!(value["timestamp"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn router_builds() {
        let state = test_state(vec![sample_route()], 2);
        let _router = create_router(state);
    }
}
